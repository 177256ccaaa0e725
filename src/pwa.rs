// Service worker registration and install-prompt capture.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Event, ServiceWorkerRegistration, ServiceWorkerState, Window};
use yew::Callback;

use crate::util::clog;

/// Fixed path the worker script is served from.
pub const SERVICE_WORKER_URL: &str = "/static/sw.js";

pub struct PwaHandles {
    before_install_cb: Closure<dyn FnMut(Event)>,
    // Retained so a later install affordance can re-fire the browser prompt.
    _deferred_prompt: Rc<RefCell<Option<Event>>>,
    // updatefound/statechange closures live on the registration and the
    // installing worker; owned here so they outlive the async chain.
    _sw_listeners: Rc<RefCell<Vec<Closure<dyn FnMut(Event)>>>>,
}

pub fn setup(window: &Window, on_update_available: Callback<()>) -> PwaHandles {
    let sw_listeners: Rc<RefCell<Vec<Closure<dyn FnMut(Event)>>>> =
        Rc::new(RefCell::new(Vec::new()));

    let navigator = window.navigator();
    let supported =
        js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if supported {
        let container = navigator.service_worker();
        let promise = container.register(SERVICE_WORKER_URL);
        let sw_listeners = sw_listeners.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(value) => {
                    let Ok(registration) = value.dyn_into::<ServiceWorkerRegistration>() else {
                        return;
                    };
                    clog("service worker registered");

                    let updatefound_cb = {
                        let registration = registration.clone();
                        let container = container.clone();
                        let sw_listeners = sw_listeners.clone();
                        let on_update_available = on_update_available.clone();
                        Closure::wrap(Box::new(move |_e: Event| {
                            let Some(worker) = registration.installing() else {
                                return;
                            };
                            let statechange_cb = {
                                let worker = worker.clone();
                                let container = container.clone();
                                let on_update_available = on_update_available.clone();
                                Closure::wrap(Box::new(move |_e: Event| {
                                    // A freshly installed worker next to a live
                                    // controller means an update is waiting.
                                    if worker.state() == ServiceWorkerState::Installed
                                        && container.controller().is_some()
                                    {
                                        on_update_available.emit(());
                                    }
                                })
                                    as Box<dyn FnMut(_)>)
                            };
                            let _ = worker.add_event_listener_with_callback(
                                "statechange",
                                statechange_cb.as_ref().unchecked_ref(),
                            );
                            sw_listeners.borrow_mut().push(statechange_cb);
                        }) as Box<dyn FnMut(_)>)
                    };
                    let _ = registration.add_event_listener_with_callback(
                        "updatefound",
                        updatefound_cb.as_ref().unchecked_ref(),
                    );
                    sw_listeners.borrow_mut().push(updatefound_cb);
                }
                Err(err) => {
                    web_sys::console::log_2(
                        &JsValue::from_str("service worker registration failed:"),
                        &err,
                    );
                }
            }
        });
    }

    let deferred_prompt: Rc<RefCell<Option<Event>>> = Rc::new(RefCell::new(None));
    let before_install_cb = {
        let deferred_prompt = deferred_prompt.clone();
        Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            *deferred_prompt.borrow_mut() = Some(e);
            show_install_button();
        }) as Box<dyn FnMut(_)>)
    };
    window
        .add_event_listener_with_callback(
            "beforeinstallprompt",
            before_install_cb.as_ref().unchecked_ref(),
        )
        .unwrap();

    PwaHandles {
        before_install_cb,
        _deferred_prompt: deferred_prompt,
        _sw_listeners: sw_listeners,
    }
}

// Install affordance stub; the retained prompt event is where a real button
// would call prompt().
fn show_install_button() {
    clog("install prompt available");
}

impl PwaHandles {
    pub fn detach(&self, window: &Window) {
        let _ = window.remove_event_listener_with_callback(
            "beforeinstallprompt",
            self.before_install_cb.as_ref().unchecked_ref(),
        );
    }
}
