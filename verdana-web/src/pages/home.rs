use crate::i18n::t;
use yew::prelude::*;

const PILLARS: [&str; 3] = ["grounded", "verified", "voice"];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="page page--home" data-testid="home-screen">
            <section class="hero">
                <h1 class="hero__title">{ t("home.hero.title") }</h1>
                <p class="hero__tagline">{ t("home.hero.tagline") }</p>
                <a class="hero__cta" href="https://app.verdana.eu" rel="noopener">
                    { t("home.hero.cta") }
                </a>
            </section>
            <section class="pillars" aria-label={t("home.pillars.label")}>
                { for PILLARS.iter().map(|key| pillar(key)) }
            </section>
        </div>
    }
}

fn pillar(key: &str) -> Html {
    html! {
        <article class="pillar" data-pillar={key.to_string()}>
            <h2>{ t(&format!("home.pillars.{key}.title")) }</h2>
            <p>{ t(&format!("home.pillars.{key}.body")) }</p>
        </article>
    }
}
