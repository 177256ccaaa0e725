use yew::prelude::*;

use super::update_banner::UpdateBanner;
use crate::util::clog;
use crate::{a11y, connectivity, diagnostics, gestures, pwa, shortcuts};

// Root of the mobile layer. Renders only its own overlays; everything else
// is listeners attached to the host page in the setup effect below.
#[function_component(App)]
pub fn app() -> Html {
    let update_available = use_state(|| false);

    {
        let update_available = update_available.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let document = window.document().expect("should have a document on window");

            let on_update_available = {
                let update_available = update_available.clone();
                Callback::from(move |_: ()| update_available.set(true))
            };

            let pwa = pwa::setup(&window, on_update_available);
            let connectivity = connectivity::setup(&window, &document);
            let gestures = gestures::setup(&window, &document);
            let shortcuts = shortcuts::setup(&document);
            let diagnostics = diagnostics::setup(&window);
            let a11y = a11y::setup(&window, &document);

            clog("mobile features initialized");

            move || {
                pwa.detach(&window);
                connectivity.detach(&window);
                if let Some(gestures) = &gestures {
                    gestures.detach(&document);
                }
                shortcuts.detach(&document);
                diagnostics.detach(&window);
                a11y.detach(&document);
            }
        });
    }

    let dismiss_update = {
        let update_available = update_available.clone();
        Callback::from(move |_| update_available.set(false))
    };

    html! {
        <>
            { if *update_available {
                html! { <UpdateBanner on_dismiss={dismiss_update} /> }
            } else {
                html! {}
            } }
        </>
    }
}
