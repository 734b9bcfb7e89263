use crate::i18n::t;
use yew::prelude::*;

const SECTIONS: [&str; 7] = [
    "conversations",
    "documents",
    "web",
    "voice",
    "preferences",
    "retention",
    "contact",
];

#[function_component(PrivacyPolicyPage)]
pub fn privacy_policy_page() -> Html {
    html! {
        <div class="page page--privacy" data-testid="privacy-screen">
            <h1>{ t("privacy.title") }</h1>
            <p class="page__meta">{ t("privacy.updated") }</p>
            <p class="page__intro">{ t("privacy.intro") }</p>
            { for SECTIONS.iter().map(|key| section(key)) }
        </div>
    }
}

fn section(key: &str) -> Html {
    html! {
        <section class="policy-section" data-section={key.to_string()}>
            <h2>{ t(&format!("privacy.sections.{key}.heading")) }</h2>
            <p>{ t(&format!("privacy.sections.{key}.body")) }</p>
        </section>
    }
}
