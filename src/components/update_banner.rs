use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UpdateBannerProps {
    pub on_dismiss: Callback<()>,
}

// Fixed-top banner shown when a new service worker version is installed and
// waiting. Reload applies it; dismiss keeps the old one for this visit.
#[function_component(UpdateBanner)]
pub fn update_banner(props: &UpdateBannerProps) -> Html {
    let reload_cb = Callback::from(|_: MouseEvent| {
        if let Some(win) = web_sys::window() {
            let _ = win.location().reload();
        }
    });
    let dismiss_cb = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="alert alert-info fixed-top">
            <div class="container">
                {"新しいバージョンが利用可能です。"}
                <button class="btn btn-sm btn-primary ms-2" onclick={reload_cb}>{"更新"}</button>
                <button class="btn btn-sm btn-outline-secondary ms-2" onclick={dismiss_cb}>{"閉じる"}</button>
            </div>
        </div>
    }
}
