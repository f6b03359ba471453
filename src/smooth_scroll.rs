//! Eased scrolling for in-page anchor links.
//!
//! A single document-level click listener catches clicks on `a[href^="#"]`, cancels the
//! browser's jump and animates the window to the target instead.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use web_sys::{Element, Event};

use crate::config::SMOOTH_SCROLL_FRAME_MS;
use crate::dom::{self, DomError, Listener};
use crate::state::tween::ScrollTween;

type ActiveTween = Rc<RefCell<Option<(u64, Interval)>>>;

pub struct SmoothScroll {
    _click: Listener,
    active: ActiveTween,
}

impl SmoothScroll {
    pub fn attach() -> Result<Self, DomError> {
        let document = dom::document()?;
        let active: ActiveTween = Rc::new(RefCell::new(None));
        let generation = Rc::new(RefCell::new(0u64));

        let click = {
            let active = active.clone();
            Listener::new(&document, "click", move |event: Event| {
                let Some(id) = anchor_target(&event) else {
                    return;
                };
                match dom::element_offset_top(&id) {
                    Ok(Some(top)) => {
                        event.prevent_default();
                        let mut generation = generation.borrow_mut();
                        *generation += 1;
                        start(&active, *generation, top);
                    }
                    Ok(None) => log::debug!("no element with id `{}`", id),
                    Err(e) => log::warn!("smooth scroll to #{} failed: {}", id, e),
                }
            })?
        };

        log::debug!("Smooth scrolling attached");
        Ok(Self {
            _click: click,
            active,
        })
    }
}

impl Drop for SmoothScroll {
    fn drop(&mut self) {
        self.active.borrow_mut().take();
    }
}

/// Fragment id of the in-page link the event originated from.
fn anchor_target(event: &Event) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let anchor = target.closest("a[href^='#']").ok()??;
    let href = anchor.get_attribute("href")?;
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then(|| id.to_string())
}

fn start(active: &ActiveTween, generation: u64, target: f64) {
    let window = match dom::window() {
        Ok(window) => window,
        Err(e) => {
            log::warn!("{}", e);
            return;
        }
    };
    let from = window.scroll_y().unwrap_or(0.0);
    let tween = ScrollTween::new(from, target);
    let started = Date::now();

    let finished = Rc::new(RefCell::new(false));
    let slot = active.clone();
    let interval = Interval::new(SMOOTH_SCROLL_FRAME_MS, move || {
        if *finished.borrow() {
            return;
        }
        let elapsed = Date::now() - started;
        window.scroll_to_with_x_and_y(0.0, tween.position_at(elapsed));
        if tween.is_done(elapsed) {
            *finished.borrow_mut() = true;
            // The interval cannot drop itself from inside its own callback.
            let slot = slot.clone();
            Timeout::new(0, move || {
                let mut slot = slot.borrow_mut();
                if matches!(slot.as_ref(), Some((g, _)) if *g == generation) {
                    slot.take();
                }
            })
            .forget();
        }
    });

    // Replacing the previous entry cancels any tween still in flight.
    active.borrow_mut().replace((generation, interval));
}
