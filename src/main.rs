mod a11y;
mod components;
mod connectivity;
mod diagnostics;
mod dom;
mod gestures;
mod pwa;
mod shortcuts;
mod state;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
