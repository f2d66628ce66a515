use std::time::Duration;

use dailymuse_core::{
    load_edition, CursorTrail, DockState, Edition, ModalSlot, RevealState, RevealTracker,
    VISIBILITY_THRESHOLD,
};
use dioxus::prelude::*;

use crate::context::{get_config, initial_edition, ModalController, SectionAnchors};
use crate::pages::Today;
use crate::theme::GLOBAL_STYLES;

/// Time the grids get to mount before scroll reveal is armed.
const REVEAL_ARM_DELAY: Duration = Duration::from_millis(100);

/// Installs an `IntersectionObserver` over every card present right now and
/// sends `[key, ratio]` back for each report. The first report for a card
/// describes its current visibility.
fn reveal_observer_script() -> String {
    format!(
        r#"
const observer = new IntersectionObserver((entries) => {{
  for (const entry of entries) {{
    dioxus.send([entry.target.dataset.revealKey, entry.intersectionRatio]);
  }}
}}, {{ threshold: {VISIBILITY_THRESHOLD} }});
document.querySelectorAll("[data-reveal-key]").forEach((card) => observer.observe(card));
await new Promise(() => {{}});
"#
    )
}

/// Feed visibility reports from the page into the tracker until the
/// observer goes away.
async fn watch_reveals(mut reveal: Signal<RevealTracker>) {
    let mut observer = document::eval(&reveal_observer_script());
    loop {
        match observer.recv::<(String, f64)>().await {
            Ok((key, ratio)) => {
                if reveal.peek().state(&key) != RevealState::Hidden {
                    continue;
                }
                if reveal.write().observe(&key, ratio) {
                    tracing::trace!("Revealed card {}", key);
                }
            }
            Err(e) => {
                tracing::warn!("Visibility observer stopped: {:?}", e);
                break;
            }
        }
    }
}

/// Bootstrap progress of the page
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum BootPhase {
    NotInitialized,
    Initialized,
}

/// Root application component.
///
/// Owns every piece of page state, provides it as context, and on first
/// render arms scroll reveal after a short delay. The visibility observer is
/// installed only after arming, so its first report for each card lands on
/// a tracked card.
#[component]
pub fn App() -> Element {
    let edition: Signal<Edition> = use_signal(initial_edition);
    let reveal: Signal<RevealTracker> = use_signal(RevealTracker::new);
    let cursor: Signal<CursorTrail> = use_signal(CursorTrail::new);
    let dock: Signal<DockState> = use_signal(DockState::default);
    let anchors: Signal<SectionAnchors> = use_signal(SectionAnchors::new);
    let modal_slot: Signal<ModalSlot> = use_signal(ModalSlot::new);
    let modal_removal: Signal<Option<Task>> = use_signal(|| None);
    let mut phase = use_signal(|| BootPhase::NotInitialized);

    use_context_provider(|| edition);
    use_context_provider(|| reveal);
    use_context_provider(|| cursor);
    use_context_provider(|| dock);
    use_context_provider(|| anchors);
    use_context_provider(|| ModalController::new(modal_slot, modal_removal));

    // Bootstrap once the first frame is mounted
    use_effect(move || {
        if *phase.peek() == BootPhase::Initialized {
            return;
        }
        phase.set(BootPhase::Initialized);
        tracing::info!("Daily edition mounted ({} items)", edition.peek().len());

        let mut reveal = reveal;
        spawn(async move {
            tokio::time::sleep(REVEAL_ARM_DELAY).await;
            let tracked = reveal.write().arm();
            tracing::debug!("Scroll reveal watching {} cards", tracked);
            watch_reveals(reveal).await;
        });
    });

    // Optional hot reload of a curated edition file
    use_effect(move || {
        let config = get_config();
        let (Some(path), Some(every)) = (config.edition_path, config.reload_every) else {
            return;
        };
        let mut edition = edition;
        spawn(async move {
            loop {
                tokio::time::sleep(every).await;
                match load_edition(&path) {
                    Ok(fresh) if fresh != *edition.peek() => {
                        tracing::info!("Edition {:?} changed, re-rendering grids", path);
                        edition.set(fresh);
                    }
                    Ok(_) => {}
                    Err(e) => tracing::warn!("Failed to reload edition {:?}: {}", path, e),
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Today {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_uses_reveal_threshold() {
        let script = reveal_observer_script();
        assert!(script.contains("threshold: 0.1 }"));
        assert!(script.contains("[data-reveal-key]"));
        assert!(script.contains("dataset.revealKey"));
    }
}
