use crate::i18n::t;
use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page page--not-found" data-testid="not-found-screen">
            <h1>{ t("not_found.title") }</h1>
            <p>{ t("not_found.body") }</p>
            <a href={crate::paths::asset_path("")}>{ t("not_found.home") }</a>
        </div>
    }
}
