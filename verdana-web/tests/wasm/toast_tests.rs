use std::cell::Cell;
use std::rc::Rc;
use verdana_core::toast::ToastKind;
use verdana_web::components::toast::{Props as ToastProps, Toast};
use verdana_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::{AttrValue, Callback, Renderer};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_toast_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("toast-root") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create toast root");
    root.set_id("toast-root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append toast root");
    root
}

fn mount(duration_ms: u32, closed: &Rc<Cell<u32>>) {
    let closed = closed.clone();
    let props = ToastProps {
        message: AttrValue::from("Saved"),
        kind: ToastKind::Success,
        duration_ms,
        show: true,
        on_close: Some(Callback::from(move |()| closed.set(closed.get() + 1))),
    };
    Renderer::<Toast>::with_root_and_props(ensure_toast_root(), props).render();
}

fn toast_rendered() -> bool {
    dom::document()
        .expect("document")
        .query_selector("#toast-root .toast")
        .expect("query toast")
        .is_some()
}

#[wasm_bindgen_test]
async fn auto_dismiss_hides_then_notifies_after_the_grace_window() {
    let closed = Rc::new(Cell::new(0_u32));
    mount(500, &closed);
    let _ = dom::sleep_ms(50).await;
    assert!(toast_rendered(), "toast must render at t=0");

    let _ = dom::sleep_ms(350).await; // ~t=400
    assert!(toast_rendered(), "toast must still be up before expiry");
    assert_eq!(closed.get(), 0);

    let _ = dom::sleep_ms(300).await; // ~t=700
    assert!(!toast_rendered(), "toast must leave the screen at expiry");
    assert_eq!(closed.get(), 0, "host release waits for the grace window");

    let _ = dom::sleep_ms(250).await; // ~t=950
    assert_eq!(closed.get(), 1, "host must be released once after +300ms");

    let _ = dom::sleep_ms(400).await;
    assert_eq!(closed.get(), 1, "the host is released exactly once");
}

#[wasm_bindgen_test]
async fn zero_duration_toast_never_auto_dismisses() {
    let closed = Rc::new(Cell::new(0_u32));
    mount(0, &closed);
    let _ = dom::sleep_ms(800).await;
    assert!(toast_rendered(), "sticky toast must stay up");
    assert_eq!(closed.get(), 0);
}

#[wasm_bindgen_test]
async fn explicit_close_cancels_the_countdown() {
    let closed = Rc::new(Cell::new(0_u32));
    mount(500, &closed);
    let _ = dom::sleep_ms(100).await;

    let doc = dom::document().expect("document");
    let close_btn: HtmlElement = doc
        .query_selector("#toast-root .toast__close")
        .expect("query close")
        .expect("close button exists")
        .dyn_into()
        .expect("cast to HtmlElement");
    close_btn.click();
    let _ = dom::sleep_ms(50).await;
    assert!(!toast_rendered(), "dismissal must hide the toast immediately");

    let _ = dom::sleep_ms(350).await; // past the grace window
    assert_eq!(closed.get(), 1);

    let _ = dom::sleep_ms(500).await; // past where the old countdown would fire
    assert_eq!(
        closed.get(),
        1,
        "the cancelled countdown must not release the host again"
    );
}
