// Online/offline tracking for the page header indicator.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, Window};

use crate::dom;
use crate::state::ConnectionState;
use crate::util::clog;

pub struct ConnectivityHandles {
    online_cb: Closure<dyn FnMut(Event)>,
    offline_cb: Closure<dyn FnMut(Event)>,
    _state: Rc<RefCell<ConnectionState>>,
}

pub fn setup(window: &Window, document: &Document) -> ConnectivityHandles {
    let state = Rc::new(RefCell::new(ConnectionState {
        online: window.navigator().on_line(),
    }));

    let online_cb = {
        let state = state.clone();
        let document = document.clone();
        Closure::wrap(Box::new(move |_e: Event| {
            state.borrow_mut().online = true;
            dom::update_connection_status(&document, *state.borrow());
            sync_offline_data();
        }) as Box<dyn FnMut(_)>)
    };
    let offline_cb = {
        let state = state.clone();
        let document = document.clone();
        Closure::wrap(Box::new(move |_e: Event| {
            state.borrow_mut().online = false;
            dom::update_connection_status(&document, *state.borrow());
        }) as Box<dyn FnMut(_)>)
    };
    window
        .add_event_listener_with_callback("online", online_cb.as_ref().unchecked_ref())
        .unwrap();
    window
        .add_event_listener_with_callback("offline", offline_cb.as_ref().unchecked_ref())
        .unwrap();

    // Paint the indicator's starting state before any event fires.
    dom::update_connection_status(document, *state.borrow());

    ConnectivityHandles {
        online_cb,
        offline_cb,
        _state: state,
    }
}

// Extension point for replaying answers recorded while offline; today it
// only marks the transition in the console.
fn sync_offline_data() {
    clog("syncing offline data...");
}

impl ConnectivityHandles {
    pub fn detach(&self, window: &Window) {
        let _ = window
            .remove_event_listener_with_callback("online", self.online_cb.as_ref().unchecked_ref());
        let _ = window.remove_event_listener_with_callback(
            "offline",
            self.offline_cb.as_ref().unchecked_ref(),
        );
    }
}
