//! Global CSS styles for Daily Muse.
//!
//! Dark gallery aesthetic: near-black walls, gold accents, serif titles.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* WALLS (Backgrounds) */
  --wall-black: #0b0b0c;
  --wall-lighter: #141416;
  --wall-border: #232326;

  /* ACCENTS */
  --accent-gold: #d4af37;
  --accent-gold-glow: rgba(212, 175, 55, 0.3);

  /* TEXT */
  --text-primary: #f2f0eb;
  --text-secondary: rgba(242, 240, 235, 0.7);
  --text-muted: rgba(242, 240, 235, 0.5);

  /* Typography */
  --font-display: 'Playfair Display', Georgia, serif;
  --font-lit: 'Cormorant Garamond', Georgia, serif;
  --font-body: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-modal: 400ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--wall-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
  cursor: none;
}

.page {
  min-height: 100vh;
  padding-bottom: 8rem;
}

/* === Hero === */
.hero {
  min-height: 60vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding: 4rem 2rem 2rem;
}

.hero-date {
  font-size: 0.85rem;
  letter-spacing: 0.3em;
  color: var(--accent-gold);
  margin-bottom: 1.5rem;
}

.hero-title {
  font-family: var(--font-display);
  font-size: clamp(3rem, 8vw, 6rem);
  font-weight: 400;
  letter-spacing: 0.05em;
}

.hero-tagline {
  font-family: var(--font-lit);
  font-style: italic;
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-top: 1rem;
}

/* === Sections === */
.category-section {
  padding: 4rem 2rem 0;
  max-width: 1400px;
  margin: 0 auto;
}

.section-header {
  font-family: var(--font-display);
  font-size: 2rem;
  font-weight: 400;
  margin-bottom: 2rem;
  border-bottom: 1px solid var(--wall-border);
  padding-bottom: 0.75rem;
}

/* === Bento Grid === */
.bento-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  grid-auto-rows: 220px;
  grid-auto-flow: dense;
  gap: 1rem;
}

.bento-card {
  position: relative;
  overflow: hidden;
  border-radius: 16px;
  background: var(--wall-lighter);
  border: 1px solid var(--wall-border);
  cursor: none;
  animation: card-rise 0.8s ease both;
}

/* Scroll reveal drives tracked cards through inline styles */
.bento-card.tracked {
  animation: none;
}

.bento-card.featured { grid-column: span 2; grid-row: span 2; }
.bento-card.tall { grid-row: span 2; }
.bento-card.wide { grid-column: span 2; }
.bento-card.regular { grid-column: span 1; }

@keyframes card-rise {
  from { opacity: 0; transform: translateY(30px); }
  to { opacity: 1; transform: translateY(0); }
}

.card-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 0.6s ease;
}

.bento-card:hover .card-image {
  transform: scale(1.05);
}

.card-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: 1.5rem;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.9) 0%, rgba(0, 0, 0, 0.1) 60%);
}

.card-context {
  color: #ddd;
  font-family: var(--font-lit);
  font-style: italic;
  font-size: 0.85rem;
  margin-bottom: 0.8rem;
  line-height: 1.4;
  opacity: 0.9;
}

.card-title {
  font-family: var(--font-display);
  font-size: 1.35rem;
  font-weight: 400;
}

.card-subtitle {
  font-size: 0.8rem;
  color: var(--text-secondary);
  letter-spacing: 0.05em;
}

@media (max-width: 900px) {
  .bento-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (max-width: 560px) {
  .bento-grid { grid-template-columns: 1fr; }
  .bento-card.featured, .bento-card.wide { grid-column: span 1; }
}

/* === Detail Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(5, 5, 6, 0.85);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-modal);
}

.modal-overlay.active {
  opacity: 1;
  pointer-events: auto;
}

.modal-content {
  background: var(--wall-lighter);
  border: 1px solid var(--wall-border);
  border-radius: 20px;
  max-width: 720px;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
  transform: translateY(20px);
  transition: transform var(--transition-modal);
}

.modal-overlay.active .modal-content {
  transform: translateY(0);
}

.modal-header {
  position: relative;
}

.modal-banner-image {
  width: 100%;
  height: 280px;
  object-fit: cover;
  border-radius: 20px 20px 0 0;
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: none;
  background: rgba(0, 0, 0, 0.6);
  color: var(--text-primary);
  font-size: 1.5rem;
  cursor: none;
}

.modal-body {
  padding: 2rem;
}

.modal-category {
  font-size: 0.75rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--accent-gold);
}

.modal-title {
  font-family: var(--font-display);
  font-size: 2.25rem;
  font-weight: 400;
  margin-top: 0.5rem;
}

.modal-subtitle {
  color: var(--text-secondary);
  margin-bottom: 1.5rem;
}

.modal-significance {
  font-family: var(--font-lit);
  font-size: 1.2rem;
  line-height: 1.7;
}

.modal-section.technician {
  margin-top: 2rem;
  border-top: 1px dashed #333;
  padding-top: 1.5rem;
}

.modal-section.technician .modal-label {
  color: var(--accent-gold);
}

.modal-section.artist {
  background: rgba(255, 255, 255, 0.05);
  padding: 1.5rem;
  border-radius: 12px;
  margin-top: 1.5rem;
}

.modal-section.artist .modal-label {
  color: #bbb;
  display: block;
  margin-bottom: 0.5rem;
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 1px;
}

.modal-section.artist .modal-text {
  font-style: italic;
  color: #eee;
}

.modal-label {
  font-size: 0.85rem;
  font-weight: 600;
}

.modal-text {
  margin-top: 0.5rem;
  color: var(--text-secondary);
}

.quote-block {
  margin-top: 2rem;
  font-family: var(--font-lit);
  font-style: italic;
  font-size: 1.4rem;
  text-align: center;
  color: var(--accent-gold);
}

/* === Dock Navigation === */
.dock {
  position: fixed;
  bottom: 1.5rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  gap: 0.25rem;
  padding: 0.5rem;
  background: rgba(20, 20, 22, 0.8);
  backdrop-filter: blur(12px);
  border: 1px solid var(--wall-border);
  border-radius: 999px;
  z-index: 500;
}

.dock-link {
  padding: 0.5rem 1.25rem;
  border-radius: 999px;
  color: var(--text-muted);
  text-decoration: none;
  font-size: 0.85rem;
  transition: all var(--transition-fast);
  cursor: none;
}

.dock-link:hover {
  color: var(--text-primary);
}

.dock-link.active {
  background: var(--accent-gold);
  color: var(--wall-black);
}

/* === Custom Cursor === */
.cursor-dot,
.cursor-outline {
  position: fixed;
  top: 0;
  left: 0;
  transform: translate(-50%, -50%);
  border-radius: 50%;
  pointer-events: none;
  z-index: 2000;
}

.cursor-dot {
  width: 6px;
  height: 6px;
  background: var(--accent-gold);
}

.cursor-outline {
  width: 36px;
  height: 36px;
  border: 1px solid var(--accent-gold-glow);
}
"#;
