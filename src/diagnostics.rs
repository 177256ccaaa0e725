// Passive diagnostics: load timing, heap polling, and global error capture.
// Everything here logs; nothing corrects.

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{ErrorEvent, Event, Performance, PromiseRejectionEvent, Window};

use crate::util::{clog, cwarn};

/// Load times above this get a console warning.
pub const SLOW_LOAD_MS: f64 = 3000.0;
/// Heap usage above this gets a console warning.
pub const HEAP_WARN_BYTES: f64 = 50.0 * 1024.0 * 1024.0;
pub const MEMORY_POLL_INTERVAL_MS: i32 = 30_000;

pub struct DiagnosticsHandles {
    load_cb: Closure<dyn FnMut(Event)>,
    error_cb: Closure<dyn FnMut(ErrorEvent)>,
    rejection_cb: Closure<dyn FnMut(PromiseRejectionEvent)>,
    memory_cb: Option<Closure<dyn FnMut()>>,
    memory_interval_id: Option<i32>,
}

pub fn setup(window: &Window) -> DiagnosticsHandles {
    let load_cb = {
        let window = window.clone();
        Closure::wrap(Box::new(move |_e: Event| {
            // performance.now() at the load event = elapsed since navigation start
            let load_ms = window.performance().map(|p| p.now()).unwrap_or(0.0);
            clog(&format!("page loaded in {:.2}ms", load_ms));
            if load_ms > SLOW_LOAD_MS {
                cwarn("page load time is slow");
            }
        }) as Box<dyn FnMut(_)>)
    };
    window
        .add_event_listener_with_callback("load", load_cb.as_ref().unchecked_ref())
        .unwrap();

    // Heap polling needs the non-standard performance.memory (Chromium only).
    let mut memory_cb = None;
    let mut memory_interval_id = None;
    if let Some(perf) = window.performance() {
        let has_memory =
            js_sys::Reflect::has(&perf, &JsValue::from_str("memory")).unwrap_or(false);
        if has_memory {
            let poll = {
                let perf = perf.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(used) = used_heap_bytes(&perf) {
                        if used > HEAP_WARN_BYTES {
                            cwarn("high memory usage detected");
                        }
                    }
                }) as Box<dyn FnMut()>)
            };
            memory_interval_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    poll.as_ref().unchecked_ref(),
                    MEMORY_POLL_INTERVAL_MS,
                )
                .ok();
            memory_cb = Some(poll);
        }
    }

    let error_cb = Closure::wrap(Box::new(move |e: ErrorEvent| {
        web_sys::console::error_2(&JsValue::from_str("global error:"), &e.error());
        report_error("error", &e.error());
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("error", error_cb.as_ref().unchecked_ref())
        .unwrap();

    let rejection_cb = Closure::wrap(Box::new(move |e: PromiseRejectionEvent| {
        web_sys::console::error_2(&JsValue::from_str("unhandled promise rejection:"), &e.reason());
        report_error("unhandledrejection", &e.reason());
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback(
            "unhandledrejection",
            rejection_cb.as_ref().unchecked_ref(),
        )
        .unwrap();

    DiagnosticsHandles {
        load_cb,
        error_cb,
        rejection_cb,
        memory_cb,
        memory_interval_id,
    }
}

fn used_heap_bytes(perf: &Performance) -> Option<f64> {
    let memory = js_sys::Reflect::get(perf, &JsValue::from_str("memory")).ok()?;
    js_sys::Reflect::get(&memory, &JsValue::from_str("usedJSHeapSize"))
        .ok()?
        .as_f64()
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    source: &'a str,
    message: String,
    at_ms: f64,
}

/// Reporting hook. Serializes the fault so a collector call site only needs
/// the JSON line; today it lands in the console.
pub fn report_error(source: &str, detail: &JsValue) {
    let message = js_sys::Reflect::get(detail, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| detail.as_string())
        .unwrap_or_else(|| format!("{:?}", detail));
    let report = ErrorReport {
        source,
        message,
        at_ms: js_sys::Date::now(),
    };
    match serde_json::to_string(&report) {
        Ok(json) => {
            web_sys::console::error_1(&JsValue::from_str(&format!("reported error: {}", json)));
        }
        Err(_) => web_sys::console::error_1(detail),
    }
}

impl DiagnosticsHandles {
    pub fn detach(&self, window: &Window) {
        let _ = window
            .remove_event_listener_with_callback("load", self.load_cb.as_ref().unchecked_ref());
        let _ = window
            .remove_event_listener_with_callback("error", self.error_cb.as_ref().unchecked_ref());
        let _ = window.remove_event_listener_with_callback(
            "unhandledrejection",
            self.rejection_cb.as_ref().unchecked_ref(),
        );
        if let Some(id) = self.memory_interval_id {
            window.clear_interval_with_handle(id);
        }
        // Keep the poll closure alive until the interval is gone.
        let _keep_alive = &self.memory_cb;
    }
}
