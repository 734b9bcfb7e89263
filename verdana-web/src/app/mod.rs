#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod state;

pub use state::{AppState, ToastNotice, use_app_state};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let state = use_app_state();

    let on_lang_change = {
        let current_language = state.current_language.clone();
        Callback::from(move |code: String| current_language.set(code))
    };

    let on_font_saved = {
        let toast = state.toast.clone();
        Callback::from(move |name: AttrValue| {
            toast.set(Some(ToastNotice::font_saved(&name)));
        })
    };

    let on_toast_close = {
        let toast = state.toast.clone();
        Callback::from(move |()| toast.set(None))
    };

    html! {
        <>
            <crate::components::header::Header
                on_lang_change={on_lang_change}
                current_lang={(*state.current_language).clone()}
            />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <Switch<Route> render={crate::router::switch} />
            </main>
            <div
                id={crate::a11y::STATUS_REGION_ID}
                class="sr-only"
                role="status"
                aria-live="polite"
            ></div>
            <crate::components::dock::Dock
                fonts={(*state.fonts).clone()}
                on_font_saved={on_font_saved}
            />
            { (*state.toast).as_ref().map(|notice| html! {
                <crate::components::toast::Toast
                    message={notice.message.clone()}
                    kind={notice.kind}
                    on_close={Some(on_toast_close)}
                />
            }).unwrap_or_default() }
            <crate::components::footer::Footer />
        </>
    }
}
