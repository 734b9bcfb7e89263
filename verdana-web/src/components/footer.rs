use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>
            <span>{ t("footer.copyright") }</span>
            <a href={crate::paths::asset_path("privacy")}>{ t("footer.privacy") }</a>
        </footer>
    }
}
