// Accessibility adaptations: OS preference marker classes and
// keyboard-vs-pointer focus tracking.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, KeyboardEvent, MouseEvent, Window};

pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";
pub const REDUCED_MOTION_CLASS: &str = "reduced-motion";
/// Present while the page is being navigated by keyboard; CSS keys visible
/// focus rings off it.
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-navigation";

pub struct AccessibilityHandles {
    tab_cb: Closure<dyn FnMut(KeyboardEvent)>,
    mousedown_cb: Closure<dyn FnMut(MouseEvent)>,
}

pub fn setup(window: &Window, document: &Document) -> AccessibilityHandles {
    // One-shot preference checks at startup.
    if media_matches(window, "(prefers-contrast: high)") {
        add_body_class(document, HIGH_CONTRAST_CLASS);
    }
    if media_matches(window, "(prefers-reduced-motion: reduce)") {
        add_body_class(document, REDUCED_MOTION_CLASS);
    }

    let tab_cb = {
        let document = document.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == "Tab" {
                add_body_class(&document, KEYBOARD_NAV_CLASS);
            }
        }) as Box<dyn FnMut(_)>)
    };
    let mousedown_cb = {
        let document = document.clone();
        Closure::wrap(Box::new(move |_e: MouseEvent| {
            remove_body_class(&document, KEYBOARD_NAV_CLASS);
        }) as Box<dyn FnMut(_)>)
    };
    document
        .add_event_listener_with_callback("keydown", tab_cb.as_ref().unchecked_ref())
        .unwrap();
    document
        .add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref())
        .unwrap();

    AccessibilityHandles {
        tab_cb,
        mousedown_cb,
    }
}

fn media_matches(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .is_some_and(|mql| mql.matches())
}

fn add_body_class(document: &Document, class: &str) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1(class);
    }
}

fn remove_body_class(document: &Document, class: &str) {
    if let Some(body) = document.body() {
        let _ = body.class_list().remove_1(class);
    }
}

impl AccessibilityHandles {
    pub fn detach(&self, document: &Document) {
        let _ = document
            .remove_event_listener_with_callback("keydown", self.tab_cb.as_ref().unchecked_ref());
        let _ = document.remove_event_listener_with_callback(
            "mousedown",
            self.mousedown_cb.as_ref().unchecked_ref(),
        );
    }
}
