use web_sys::Element;
use yew::prelude::*;

use crate::dom::{self, VisibilityObserver};
use crate::motion::{section_progress, ScrollOffset};
use crate::signal::Signal;
use crate::state::scroll::ScrollState;

/// Shared scroll signal handed down from the page shell.
pub type ScrollSignal = Signal<ScrollState>;

/// Latest window scroll snapshot. Re-renders only when the snapshot changes.
#[hook]
pub fn use_scroll_state() -> ScrollState {
    let signal = use_context::<ScrollSignal>();
    let state = use_state_eq(|| signal.as_ref().map(|s| s.get()).unwrap_or_default());

    {
        let state = state.clone();
        use_effect_with_deps(
            move |signal: &Option<ScrollSignal>| {
                let subscription = signal
                    .as_ref()
                    .map(|signal| signal.subscribe(move |latest| state.set(*latest)));
                move || drop(subscription)
            },
            signal,
        );
    }

    *state
}

/// One-time viewport-entry trigger: flips to true the first time `amount` of the node is on
/// screen and never flips back.
#[hook]
pub fn use_in_view(node: NodeRef, amount: f64, label: &'static str) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let visible = in_view.clone();
                    match VisibilityObserver::once(&element, amount, move || {
                        log::debug!("{} section entered the viewport", label);
                        visible.set(true);
                    }) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            // Without an observer the section would stay hidden forever.
                            log::warn!("viewport trigger for {} unavailable: {}", label, e);
                            in_view.set(true);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            node,
        );
    }

    *in_view
}

/// Local scroll progress of the section behind `node`, recomputed on every scroll update.
#[hook]
pub fn use_section_progress(node: NodeRef, offset: ScrollOffset) -> f64 {
    let signal = use_context::<ScrollSignal>();
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(node, signal): &(NodeRef, Option<ScrollSignal>)| {
                let measure = {
                    let node = node.clone();
                    move || {
                        if let Some(p) = measure_section(&node, offset) {
                            progress.set(p);
                        }
                    }
                };
                measure();
                let subscription = signal
                    .as_ref()
                    .map(|signal| signal.subscribe(move |_| measure()));
                move || drop(subscription)
            },
            (node, signal),
        );
    }

    *progress
}

fn measure_section(node: &NodeRef, offset: ScrollOffset) -> Option<f64> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    let viewport_height = dom::viewport_height().ok()?;
    Some(section_progress(offset, rect.top(), rect.height(), viewport_height))
}
