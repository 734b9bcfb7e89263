use verdana_core::fonts::{FONT_PREF_KEY, FontCatalog};
use verdana_web::app::App;
use verdana_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app() {
    verdana_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
    let _ = dom::sleep_ms(50).await;
}

async fn click(selector: &str) {
    let doc = dom::document().expect("document");
    let el: HtmlElement = doc
        .query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("no element for {selector}"))
        .dyn_into()
        .expect("cast to HtmlElement");
    el.click();
    let _ = dom::sleep_ms(50).await;
}

fn dialog_present() -> bool {
    dom::document()
        .expect("document")
        .query_selector("[role='dialog']")
        .expect("query dialog")
        .is_some()
}

#[wasm_bindgen_test]
async fn dock_toggle_mounts_and_unmounts_the_menu() {
    render_app().await;
    assert!(!dialog_present(), "menu must start unmounted");

    click("#a11y-dock-btn").await;
    assert!(dialog_present(), "trigger must mount the menu");

    click(".a11y-menu__done").await;
    assert!(!dialog_present(), "close must unmount the menu");
}

#[wasm_bindgen_test]
async fn selecting_a_font_applies_persists_and_marks_it() {
    let storage = dom::local_storage().expect("storage");
    let _ = storage.remove_item(FONT_PREF_KEY);

    render_app().await;
    click("#a11y-dock-btn").await;
    click("[data-font-id='verdana']").await;

    let catalog = FontCatalog::load_from_static();
    let verdana = catalog
        .choices()
        .iter()
        .find(|font| font.id == "verdana")
        .expect("catalog carries verdana");

    // (a) the document-wide style variable
    let doc = dom::document().expect("document");
    let root: HtmlElement = doc
        .document_element()
        .expect("root element")
        .dyn_into()
        .expect("html element");
    assert_eq!(
        root.style()
            .get_property_value(verdana_web::prefs::FONT_STYLE_VAR)
            .expect("read style var"),
        verdana.family
    );

    // (b) the persistent store
    assert_eq!(
        storage.get_item(FONT_PREF_KEY).expect("read storage"),
        Some(verdana.family.clone())
    );

    // (c) exactly that option is marked selected on re-render
    let checked = doc
        .query_selector("[data-font-id='verdana']")
        .expect("query option")
        .expect("option exists")
        .get_attribute("aria-checked");
    assert_eq!(checked.as_deref(), Some("true"));
    let selected_count = doc
        .query_selector_all("[aria-checked='true']")
        .expect("query checked")
        .length();
    assert_eq!(selected_count, 1);

    let _ = storage.remove_item(FONT_PREF_KEY);
}

#[wasm_bindgen_test]
async fn stored_preference_is_applied_when_the_menu_mounts() {
    let storage = dom::local_storage().expect("storage");
    let catalog = FontCatalog::load_from_static();
    let georgia = catalog
        .choices()
        .iter()
        .find(|font| font.id == "georgia")
        .expect("catalog carries georgia");
    storage
        .set_item(FONT_PREF_KEY, &georgia.family)
        .expect("seed storage");

    render_app().await;
    click("#a11y-dock-btn").await;

    let doc = dom::document().expect("document");
    let root: HtmlElement = doc
        .document_element()
        .expect("root element")
        .dyn_into()
        .expect("html element");
    assert_eq!(
        root.style()
            .get_property_value(verdana_web::prefs::FONT_STYLE_VAR)
            .expect("read style var"),
        georgia.family,
        "stored value must be applied before any interaction"
    );
    let checked = doc
        .query_selector("[data-font-id='georgia']")
        .expect("query option")
        .expect("option exists")
        .get_attribute("aria-checked");
    assert_eq!(checked.as_deref(), Some("true"));

    let _ = storage.remove_item(FONT_PREF_KEY);
}

#[wasm_bindgen_test]
async fn unrecognized_stored_value_is_applied_but_selects_nothing() {
    let storage = dom::local_storage().expect("storage");
    storage
        .set_item(FONT_PREF_KEY, "Wingdings, fantasy")
        .expect("seed storage");

    render_app().await;
    click("#a11y-dock-btn").await;

    let doc = dom::document().expect("document");
    let root: HtmlElement = doc
        .document_element()
        .expect("root element")
        .dyn_into()
        .expect("html element");
    assert_eq!(
        root.style()
            .get_property_value(verdana_web::prefs::FONT_STYLE_VAR)
            .expect("read style var"),
        "Wingdings, fantasy",
        "unknown values are preserved verbatim"
    );
    let selected_count = doc
        .query_selector_all("[aria-checked='true']")
        .expect("query checked")
        .length();
    assert_eq!(selected_count, 0, "no enumerated option may claim an unknown value");

    let _ = storage.remove_item(FONT_PREF_KEY);
}
