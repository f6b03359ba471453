//! Fallible access to the browser globals plus RAII guards for listeners and observers.

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRootElement,
    #[error("failed to {action} `{event}` listener: {message}")]
    Listener {
        action: &'static str,
        event: &'static str,
        message: String,
    },
    #[error("query `{selector}` failed: {message}")]
    Query { selector: String, message: String },
    #[error("intersection observer: {0}")]
    Observer(String),
    #[error("window metric `{0}` unavailable")]
    Metric(&'static str),
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Vertical scroll offset, total document height and viewport height, in pixels.
pub fn scroll_metrics() -> Result<(f64, f64, f64), DomError> {
    let window = window()?;
    let root = window
        .document()
        .ok_or(DomError::NoDocument)?
        .document_element()
        .ok_or(DomError::NoRootElement)?;
    let scroll_y = window.scroll_y().map_err(|_| DomError::Metric("scrollY"))?;
    Ok((scroll_y, root.scroll_height() as f64, viewport_height_of(&window)?))
}

pub fn viewport_height() -> Result<f64, DomError> {
    viewport_height_of(&window()?)
}

fn viewport_height_of(window: &Window) -> Result<f64, DomError> {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .ok_or(DomError::Metric("innerHeight"))
}

/// Document-relative top of the element with the given id, if it exists.
pub fn element_offset_top(id: &str) -> Result<Option<f64>, DomError> {
    let window = window()?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let scroll_y = window.scroll_y().map_err(|_| DomError::Metric("scrollY"))?;
    Ok(document
        .get_element_by_id(id)
        .map(|el| el.get_bounding_client_rect().top() + scroll_y))
}

pub fn query_all(selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document()?
        .query_selector_all(selector)
        .map_err(|e| DomError::Query {
            selector: selector.to_string(),
            message: js_message(&e),
        })?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Keeps every registration that succeeded; failures are logged under `what` and skipped.
pub fn keep_registered<T>(
    what: &str,
    attempts: impl IntoIterator<Item = Result<T, DomError>>,
) -> Vec<T> {
    attempts
        .into_iter()
        .filter_map(|attempt| {
            attempt
                .map_err(|e| log::warn!("Skipping {} listener: {}", what, e))
                .ok()
        })
        .collect()
}

/// Event listener that stays registered for as long as the guard lives.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(
        target: &EventTarget,
        event: &'static str,
        callback: F,
    ) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| DomError::Listener {
                action: "add",
                event,
                message: js_message(&e),
            })?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!(
                "{}",
                DomError::Listener {
                    action: "remove",
                    event: self.event,
                    message: js_message(&e),
                }
            );
        }
    }
}

/// Fires `on_visible` the first time `element` has at least `amount` of itself inside the
/// viewport, then disconnects.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn once<F>(element: &Element, amount: f64, on_visible: F) -> Result<Self, DomError>
    where
        F: Fn() + 'static,
    {
        let on_entries = move |entries: Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if visible {
                observer.disconnect();
                on_visible();
            }
        };
        let callback =
            Closure::wrap(Box::new(on_entries) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(amount));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| DomError::Observer(js_message(&e)))?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_registered_skips_failures_only() {
        let attempts = vec![
            Ok("mousemove"),
            Err(DomError::Listener {
                action: "add",
                event: "mouseenter",
                message: "rejected".to_string(),
            }),
            Ok("mouseleave"),
        ];
        assert_eq!(keep_registered("hover", attempts), vec!["mousemove", "mouseleave"]);
    }

    #[test]
    fn test_keep_registered_all_failed() {
        let attempts: Vec<Result<u8, DomError>> =
            vec![Err(DomError::NoWindow), Err(DomError::Metric("scrollY"))];
        assert!(keep_registered("hover", attempts).is_empty());
    }
}
