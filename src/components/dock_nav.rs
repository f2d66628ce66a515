//! Dock Navigation Component
//!
//! Floating pill bar linking to each section of the page.

use dailymuse_core::DockLink;
use dioxus::prelude::*;

use crate::context::{use_anchors, use_dock};

/// Section links that smooth-scroll instead of jumping.
///
/// Each click highlights its link and clears the others.
#[component]
pub fn DockNav() -> Element {
    let mut dock = use_dock();
    let anchors = use_anchors();

    rsx! {
        nav { class: "dock",
            for link in DockLink::ALL {
                a {
                    key: "{link.target_id()}",
                    href: "{link.href()}",
                    class: dock.read().class_for(link),
                    onclick: move |evt| {
                        evt.prevent_default();
                        match anchors.peek().get(&link).cloned() {
                            Some(target) => {
                                spawn(async move {
                                    if let Err(e) = target.scroll_to(ScrollBehavior::Smooth).await {
                                        tracing::warn!("Scroll to {:?} failed: {:?}", link, e);
                                    }
                                });
                            }
                            None => tracing::warn!("Section for {:?} is not mounted", link),
                        }
                        dock.write().select(link);
                    },
                    "{link.label()}"
                }
            }
        }
    }
}
