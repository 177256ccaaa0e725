// Console helpers shared by every module.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}
