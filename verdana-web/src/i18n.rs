//! Translation bundles for the site chrome.
//!
//! Bundles are embedded JSON, one per locale, with English as the fallback
//! for keys a locale does not translate (long-form policy text in
//! particular). The active bundle lives in a thread local; `set_lang`
//! swaps it, keeps `<html lang dir>` in sync, and persists the choice.
use once_cell::sync::Lazy;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
        rtl: false,
    },
    LocaleMeta {
        code: "de",
        name: "Deutsch",
        rtl: false,
    },
    LocaleMeta {
        code: "fr",
        name: "Français",
        rtl: false,
    },
    LocaleMeta {
        code: "es",
        name: "Español",
        rtl: false,
    },
    LocaleMeta {
        code: "it",
        name: "Italiano",
        rtl: false,
    },
    LocaleMeta {
        code: "nl",
        name: "Nederlands",
        rtl: false,
    },
    LocaleMeta {
        code: "pl",
        name: "Polski",
        rtl: false,
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("de", include_str!("../i18n/de.json")),
    ("fr", include_str!("../i18n/fr.json")),
    ("es", include_str!("../i18n/es.json")),
    ("it", include_str!("../i18n/it.json")),
    ("nl", include_str!("../i18n/nl.json")),
    ("pl", include_str!("../i18n/pl.json")),
];

const LOCALE_STORAGE_KEY: &str = "verdana.locale";

static FALLBACK: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(LOCALE_TABLE[0].1).unwrap_or_else(|err| {
        log::error!("failed to parse the English bundle: {err}");
        Value::Object(serde_json::Map::new())
    })
});

struct I18nBundle {
    lang: String,
    rtl: bool,
    translations: Value,
}

/// Build the bundle for a locale code; unknown codes normalize to English.
fn bundle_for(code: &str) -> I18nBundle {
    let meta = LOCALE_META.iter().find(|meta| meta.code == code);
    let (code, rtl) = meta.map_or(("en", false), |meta| (meta.code, meta.rtl));
    let raw = LOCALE_TABLE
        .iter()
        .find_map(|(table_code, data)| (*table_code == code).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);
    let translations = serde_json::from_str(raw).unwrap_or_else(|err| {
        log::error!("failed to parse {code} locale bundle: {err}");
        FALLBACK.clone()
    });
    I18nBundle {
        lang: code.to_string(),
        rtl,
        translations,
    }
}

fn saved_lang() -> String {
    crate::dom::local_storage()
        .ok()
        .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| "en".to_string())
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(bundle_for(&saved_lang()));
}

/// Supported locales with their native names and direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

/// Set the current language
///
/// Swaps the active bundle, updates the DOM lang/dir attributes, and
/// persists the choice for future sessions.
pub fn set_lang(lang: &str) {
    let bundle = bundle_for(lang);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
            let _ = el.set_attribute("lang", &bundle.lang);
            let _ = el.set_attribute("dir", if bundle.rtl { "rtl" } else { "ltr" });
        }
        if let Ok(storage) = crate::dom::local_storage() {
            let _ = storage.set_item(LOCALE_STORAGE_KEY, &bundle.lang);
        }
    }
    CURRENT.with(|cell| {
        cell.replace(bundle);
    });
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|cell| cell.borrow().lang.clone())
}

/// Check if the current language uses right-to-left text direction
#[must_use]
pub fn is_rtl() -> bool {
    CURRENT.with(|cell| cell.borrow().rtl)
}

fn get_nested<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

/// Translate a dotted key, falling back to English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a dotted key with `{name}` placeholder substitution.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    let raw = CURRENT
        .with(|cell| {
            let bundle = cell.borrow();
            get_nested(&bundle.translations, key)
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .or_else(|| {
            get_nested(&FALLBACK, key)
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| key.to_string());
    match args {
        Some(args) => substitute(&raw, args),
        None => raw,
    }
}

fn substitute(template: &str, args: &BTreeMap<&str, &str>) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}
