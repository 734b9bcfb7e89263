use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    PrivacyPolicy,
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// Map a route to its page.
#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <crate::pages::home::HomePage /> },
        Route::PrivacyPolicy => html! { <crate::pages::privacy_policy::PrivacyPolicyPage /> },
        Route::NotFound => html! { <crate::pages::not_found::NotFound /> },
    }
}
