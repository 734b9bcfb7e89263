use crate::components::accessibility_menu::AccessibilityMenu;
use crate::i18n::t;
use std::rc::Rc;
use verdana_core::fonts::FontCatalog;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub fonts: Rc<FontCatalog>,
    #[prop_or_default]
    pub on_font_saved: Callback<AttrValue>,
}

/// Floating trigger that owns the accessibility menu's visibility flag.
/// It holds no other state; font handling lives in the menu.
#[function_component(Dock)]
pub fn dock(p: &Props) -> Html {
    let open = use_state(|| false);
    let show_menu = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let close_menu = {
        let open = open.clone();
        Callback::from(move |()| open.set(false))
    };

    html! {
        <div class="dock" role="toolbar" aria-label={t("dock.label")}>
            <button
                type="button"
                id="a11y-dock-btn"
                class="dock__trigger"
                aria-haspopup="dialog"
                aria-expanded={if *open { "true" } else { "false" }}
                onclick={show_menu}
            >
                <span aria-hidden="true">{"Aa"}</span>
                <span class="sr-only">{ t("dock.open_menu") }</span>
            </button>
            <AccessibilityMenu
                open={*open}
                fonts={p.fonts.clone()}
                on_close={close_menu}
                on_select={p.on_font_saved.clone()}
            />
        </div>
    }
}
