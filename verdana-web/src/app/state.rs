use std::collections::BTreeMap;
use std::rc::Rc;
use verdana_core::fonts::FontCatalog;
use verdana_core::toast::ToastKind;
use yew::prelude::*;

/// The one toast the app shows at a time.
#[derive(Clone, PartialEq)]
pub struct ToastNotice {
    pub message: AttrValue,
    pub kind: ToastKind,
}

impl ToastNotice {
    /// Success toast raised after the reading font changed.
    #[must_use]
    pub fn font_saved(font_name: &str) -> Self {
        let args = BTreeMap::from([("font", font_name)]);
        Self {
            message: AttrValue::from(crate::i18n::tr("toast.font_saved", Some(&args))),
            kind: ToastKind::Success,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub fonts: UseStateHandle<Rc<FontCatalog>>,
    pub toast: UseStateHandle<Option<ToastNotice>>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        fonts: use_state(|| Rc::new(FontCatalog::load_from_static())),
        toast: use_state(|| None::<ToastNotice>),
        current_language: use_state(crate::i18n::current_lang),
    }
}
