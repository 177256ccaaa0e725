// Lookups into the host page's markup. The quiz pages are server-rendered;
// every element here may be absent (landing page, results page), so each
// helper is a no-op when its target is missing.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

use crate::state::{ConnectionState, choice_letter};

/// Element id of the connectivity indicator in the page header.
pub const CONNECTION_STATUS_ID: &str = "connection-status";

fn answer_selector(letter: char) -> String {
    format!("input[value=\"{}\"]", letter)
}

/// Check the radio input for choice `n` (1..=4) and fire a synthetic
/// `change` event so the page's own listeners react as if it was clicked.
pub fn select_answer(document: &Document, n: u8) {
    let Some(letter) = choice_letter(n) else {
        return;
    };
    if let Ok(Some(el)) = document.query_selector(&answer_selector(letter)) {
        if let Ok(input) = el.dyn_into::<HtmlInputElement>() {
            input.set_checked(true);
            if let Ok(ev) = Event::new("change") {
                let _ = input.dispatch_event(&ev);
            }
        }
    }
}

pub fn submit_answer(document: &Document) {
    if let Ok(Some(el)) = document.query_selector("button[type=\"submit\"]") {
        if let Ok(button) = el.dyn_into::<HtmlElement>() {
            button.click();
        }
    }
}

pub fn next_question(document: &Document) {
    click_nav_control(document, "next", "次");
}

pub fn previous_question(document: &Document) {
    click_nav_control(document, "prev", "前");
}

// Navigation controls differ per page: most are anchors with the direction in
// the href, a few are plain buttons labelled in the page language.
fn click_nav_control(document: &Document, href_fragment: &str, label: &str) {
    let selector = format!("a[href*=\"{}\"]", href_fragment);
    if let Ok(Some(el)) = document.query_selector(&selector) {
        if let Ok(anchor) = el.dyn_into::<HtmlElement>() {
            anchor.click();
            return;
        }
    }
    let buttons = document.get_elements_by_tag_name("button");
    for i in 0..buttons.length() {
        let Some(el) = buttons.item(i) else { continue };
        if button_label_matches(&el, label) {
            if let Ok(button) = el.dyn_into::<HtmlElement>() {
                button.click();
            }
            return;
        }
    }
}

fn button_label_matches(el: &Element, label: &str) -> bool {
    el.text_content().is_some_and(|t| t.contains(label))
}

/// Refresh the indicator text/class. Missing indicator is fine: not every
/// page renders the header.
pub fn update_connection_status(document: &Document, state: ConnectionState) {
    if let Some(el) = document.get_element_by_id(CONNECTION_STATUS_ID) {
        el.set_text_content(Some(state.status_text()));
        el.set_class_name(state.status_class());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_selector_targets_value_attribute() {
        assert_eq!(answer_selector('A'), "input[value=\"A\"]");
        assert_eq!(answer_selector('D'), "input[value=\"D\"]");
    }
}
