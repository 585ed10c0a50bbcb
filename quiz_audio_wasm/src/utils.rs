use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Element, Event, EventTarget};

pub fn js_window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

pub fn document() -> web_sys::Document {
    js_window()
        .document()
        .expect("should have a document on window")
}

/// Optional page control; pages without it simply skip the behaviour
pub fn element_by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

/// Render a JS error value for the logs
pub fn describe_js_error(err: &JsValue) -> String {
    match err.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    }
}

/// Trait that allows attaching long-lived Rust callbacks to DOM events
pub trait Listen {
    /// The callback stays alive for the rest of the page
    fn add_js_listener(&self, event: &str, func: Box<dyn FnMut(Event)>);
}

impl Listen for EventTarget {
    fn add_js_listener(&self, event: &str, func: Box<dyn FnMut(Event)>) {
        let callback = Closure::wrap(func);

        self.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .expect("failed to add listener");

        callback.forget();
    }
}

/// Trait for elements whose look is driven by CSS classes
pub trait ClassToggle {
    /// Flip `class`, or force it on/off when `force` is given
    fn toggle_class(&self, class: &str, force: Option<bool>);
}

impl ClassToggle for Element {
    fn toggle_class(&self, class: &str, force: Option<bool>) {
        let class_list = self.class_list();
        let result = match force {
            Some(force) => class_list.toggle_with_force(class, force),
            None => class_list.toggle(class),
        };

        if let Err(err) = result {
            tracing::warn!("could not toggle class '{}': {}", class, describe_js_error(&err));
        }
    }
}
