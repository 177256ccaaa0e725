// Global keyboard bindings for answering and paging through questions.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, KeyboardEvent};

use crate::dom;
use crate::state::{Modifiers, ShortcutAction, shortcut_for};

pub struct ShortcutHandles {
    keydown_cb: Closure<dyn FnMut(KeyboardEvent)>,
}

pub fn setup(document: &Document) -> ShortcutHandles {
    let keydown_cb = {
        let document = document.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            let mods = Modifiers {
                ctrl: e.ctrl_key(),
                meta: e.meta_key(),
                shift: e.shift_key(),
                alt: e.alt_key(),
            };
            let Some(action) = shortcut_for(&e.code(), mods) else {
                return;
            };
            e.prevent_default();
            match action {
                ShortcutAction::SelectChoice(n) => dom::select_answer(&document, n),
                ShortcutAction::Submit => dom::submit_answer(&document),
                ShortcutAction::NextQuestion => dom::next_question(&document),
                ShortcutAction::PreviousQuestion => dom::previous_question(&document),
            }
        }) as Box<dyn FnMut(_)>)
    };
    document
        .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
        .unwrap();

    ShortcutHandles { keydown_cb }
}

impl ShortcutHandles {
    pub fn detach(&self, document: &Document) {
        let _ = document.remove_event_listener_with_callback(
            "keydown",
            self.keydown_cb.as_ref().unchecked_ref(),
        );
    }
}
