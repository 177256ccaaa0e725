// Swipe navigation between questions. Listeners attach only when the
// environment reports touch support, and stay passive so they never block
// scrolling.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, TouchEvent, Window};

use crate::dom;
use crate::state::{SwipeDirection, TouchState, classify_swipe};

pub struct GestureHandles {
    touch_start_cb: Closure<dyn FnMut(TouchEvent)>,
    touch_end_cb: Closure<dyn FnMut(TouchEvent)>,
}

pub fn setup(window: &Window, document: &Document) -> Option<GestureHandles> {
    let touch_capable =
        js_sys::Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    if !touch_capable {
        return None;
    }

    let touch_state = Rc::new(RefCell::new(TouchState::default()));

    let touch_start_cb = {
        let touch_state = touch_state.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            if let Some(t0) = e.touches().item(0) {
                let mut ts = touch_state.borrow_mut();
                ts.start_x = t0.client_x() as f64;
                ts.start_y = t0.client_y() as f64;
                ts.start_time_ms = js_sys::Date::now();
            }
        }) as Box<dyn FnMut(_)>)
    };

    let touch_end_cb = {
        let touch_state = touch_state.clone();
        let document = document.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            // Other fingers still down: not a swipe.
            if e.touches().length() > 0 {
                return;
            }
            let Some(t) = e.changed_touches().item(0) else {
                return;
            };
            let ts = touch_state.borrow().clone();
            let elapsed_ms = js_sys::Date::now() - ts.start_time_ms;
            let dx = t.client_x() as f64 - ts.start_x;
            let dy = t.client_y() as f64 - ts.start_y;
            match classify_swipe(dx, dy, elapsed_ms) {
                Some(SwipeDirection::Left) => dom::next_question(&document),
                Some(SwipeDirection::Right) => dom::previous_question(&document),
                None => {}
            }
        }) as Box<dyn FnMut(_)>)
    };

    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            touch_start_cb.as_ref().unchecked_ref(),
            &opts,
        )
        .ok();
    document
        .add_event_listener_with_callback_and_add_event_listener_options(
            "touchend",
            touch_end_cb.as_ref().unchecked_ref(),
            &opts,
        )
        .ok();

    Some(GestureHandles {
        touch_start_cb,
        touch_end_cb,
    })
}

impl GestureHandles {
    pub fn detach(&self, document: &Document) {
        let _ = document.remove_event_listener_with_callback(
            "touchstart",
            self.touch_start_cb.as_ref().unchecked_ref(),
        );
        let _ = document.remove_event_listener_with_callback(
            "touchend",
            self.touch_end_cb.as_ref().unchecked_ref(),
        );
    }
}
