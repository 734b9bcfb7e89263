use verdana_core::fonts::FONT_PREF_KEY;
use verdana_web::{dom, prefs};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn root_style_var() -> String {
    let root: HtmlElement = dom::document()
        .expect("document")
        .document_element()
        .expect("root element")
        .dyn_into()
        .expect("html element");
    root.style()
        .get_property_value(prefs::FONT_STYLE_VAR)
        .expect("read style var")
}

#[wasm_bindgen_test]
fn load_treats_missing_and_blank_values_as_unset() {
    let storage = dom::local_storage().expect("storage");
    let _ = storage.remove_item(FONT_PREF_KEY);
    assert_eq!(prefs::load(), None);

    storage.set_item(FONT_PREF_KEY, "   ").expect("seed blank");
    assert_eq!(prefs::load(), None, "blank values count as never set");

    let _ = storage.remove_item(FONT_PREF_KEY);
}

#[wasm_bindgen_test]
fn save_applies_and_persists_in_one_step() {
    let storage = dom::local_storage().expect("storage");
    let _ = storage.remove_item(FONT_PREF_KEY);

    prefs::save("Georgia, serif");
    assert_eq!(root_style_var(), "Georgia, serif");
    assert_eq!(
        storage.get_item(FONT_PREF_KEY).expect("read storage"),
        Some("Georgia, serif".to_string())
    );
    assert_eq!(prefs::load(), Some("Georgia, serif".to_string()));

    let _ = storage.remove_item(FONT_PREF_KEY);
}

#[wasm_bindgen_test]
fn apply_alone_does_not_persist() {
    let storage = dom::local_storage().expect("storage");
    let _ = storage.remove_item(FONT_PREF_KEY);

    prefs::apply("Verdana, sans-serif");
    assert_eq!(root_style_var(), "Verdana, sans-serif");
    assert_eq!(prefs::load(), None);
}

#[wasm_bindgen_test]
fn bootstrap_reapplies_the_stored_choice() {
    let storage = dom::local_storage().expect("storage");
    storage
        .set_item(FONT_PREF_KEY, "'Atkinson Hyperlegible', sans-serif")
        .expect("seed storage");

    prefs::bootstrap();
    assert_eq!(root_style_var(), "'Atkinson Hyperlegible', sans-serif");

    let _ = storage.remove_item(FONT_PREF_KEY);
}
