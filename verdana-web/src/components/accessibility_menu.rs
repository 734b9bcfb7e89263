use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use std::rc::Rc;
use verdana_core::fonts::{FontCatalog, FontChoice};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Host-owned visibility flag; the menu is a pure view of it.
    pub open: bool,
    pub on_close: Callback<()>,
    pub fonts: Rc<FontCatalog>,
    /// Emits the display name of the chosen font after it has been applied
    /// and persisted.
    #[prop_or_default]
    pub on_select: Callback<AttrValue>,
}

/// Modal listing the reading fonts. Selecting an option applies and
/// persists it in one step; the action button only closes the panel.
#[function_component(AccessibilityMenu)]
pub fn accessibility_menu(p: &Props) -> Html {
    let ref_node = use_node_ref();
    let selected = {
        let fonts = p.fonts.clone();
        use_state(move || fonts.default_choice().family.clone())
    };

    // Resynchronize with storage once, at mount, so the visible state
    // cannot drift from what a prior session persisted.
    {
        let selected = selected.clone();
        use_effect_with((), move |()| {
            if let Some(saved) = crate::prefs::load() {
                crate::prefs::apply(&saved);
                selected.set(saved);
            }
            || {}
        });
    }

    // Move focus into the dialog while it is open; hand it back on close.
    {
        let node = ref_node.clone();
        let open = p.open;
        use_effect_with((open, node), move |(open, node)| {
            let mut prev_focus: Option<web_sys::HtmlElement> = None;
            if cfg!(target_arch = "wasm32") && *open {
                prev_focus = crate::dom::document().and_then(|doc| {
                    doc.active_element()
                        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                });
                let first = node
                    .cast::<web_sys::Element>()
                    .map(|el| crate::a11y::focusable_in(&el))
                    .and_then(|els| els.into_iter().next());
                if let Some(first) = first {
                    let _ = first.focus();
                }
            }
            move || {
                if let Some(el) = prev_focus {
                    let _ = el.focus();
                }
            }
        });
    }

    if !p.open {
        return html! {};
    }

    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_backdrop = {
        let cb = p.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_keydown = {
        let node = ref_node.clone();
        let on_close = p.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if !cfg!(target_arch = "wasm32") {
                let _ = &e;
                return;
            }
            if e.key() == "Escape" {
                on_close.emit(());
                return;
            }
            if e.key() != "Tab" {
                return;
            }
            let Some(container) = node.cast::<web_sys::Element>() else {
                return;
            };
            let focusables = crate::a11y::focusable_in(&container);
            let (Some(first), Some(last)) = (focusables.first(), focusables.last()) else {
                return;
            };
            let Some(active) = crate::dom::document().and_then(|doc| doc.active_element()) else {
                return;
            };
            let first_el: &web_sys::Element = first.as_ref();
            let last_el: &web_sys::Element = last.as_ref();
            if !container.contains(Some(&active)) {
                e.prevent_default();
                let _ = first.focus();
            } else if e.shift_key() && active == *first_el {
                e.prevent_default();
                let _ = last.focus();
            } else if !e.shift_key() && active == *last_el {
                e.prevent_default();
                let _ = first.focus();
            }
        })
    };

    html! {
        <div class="menu-backdrop" role="presentation" onclick={on_backdrop}>
            <div
                class="a11y-menu"
                role="dialog"
                aria-modal="true"
                aria-labelledby="a11y-menu-title"
                ref={ref_node}
                onkeydown={on_keydown}
                onclick={keep_open}
            >
                <h2 id="a11y-menu-title">{ t("a11y_menu.title") }</h2>
                <p class="a11y-menu__hint">{ t("a11y_menu.hint") }</p>
                <div class="a11y-menu__options" role="radiogroup" aria-label={t("a11y_menu.fonts")}>
                    { for p.fonts.choices().iter().map(|font| {
                        render_option(font, &selected, &p.on_select)
                    }) }
                </div>
                <div class="controls">
                    <button type="button" class="a11y-menu__done" onclick={close}>
                        { t("a11y_menu.done") }
                    </button>
                </div>
            </div>
        </div>
    }
}

fn render_option(
    font: &FontChoice,
    selected: &UseStateHandle<String>,
    on_select: &Callback<AttrValue>,
) -> Html {
    let is_selected = **selected == font.family;
    let onclick = {
        let selected = selected.clone();
        let on_select = on_select.clone();
        let family = font.family.clone();
        let name = font.name.clone();
        Callback::from(move |_: MouseEvent| {
            // Apply and persist together, then tell the world.
            crate::prefs::save(&family);
            selected.set(family.clone());
            let args = BTreeMap::from([("font", name.as_str())]);
            crate::a11y::set_status(&tr("a11y_menu.announce", Some(&args)));
            on_select.emit(AttrValue::from(name.clone()));
        })
    };
    html! {
        <button
            type="button"
            class={classes!("font-option", is_selected.then_some("font-option--selected"))}
            role="radio"
            aria-checked={if is_selected { "true" } else { "false" }}
            data-font-id={font.id.clone()}
            style={format!("font-family:{}", font.family)}
            {onclick}
        >
            <span class="font-option__name">{ font.name.clone() }</span>
            <span class="font-option__desc">{ t(&font.description_key) }</span>
        </button>
    }
}
