use yew::prelude::*;

use crate::hooks::use_trip_store;
use super::{LandingPage, RecommendationPage, ResultPage};

/// Páginas de la aplicación. La navegación es un enum en memoria,
/// sin router: el estado del viaje vive solo durante la sesión.
#[derive(Clone, Copy, PartialEq)]
pub enum Page {
    Landing,
    Recommendation,
    Result,
}

#[function_component(App)]
pub fn app() -> Html {
    let page = use_state(|| Page::Landing);
    let trip = use_trip_store();

    let go_to_recommendation = {
        let page = page.clone();
        Callback::from(move |_: ()| page.set(Page::Recommendation))
    };

    let go_to_result = {
        let page = page.clone();
        Callback::from(move |_: ()| page.set(Page::Result))
    };

    let view = match *page {
        Page::Landing => html! {
            <LandingPage
                set_last_location={trip.set_last_location.clone()}
                on_continue={go_to_recommendation}
            />
        },
        Page::Recommendation => html! {
            <RecommendationPage
                store={(*trip.store).clone()}
                set_destinations={trip.set_destinations.clone()}
                set_transportation={trip.set_transportation.clone()}
                on_recommend={go_to_result}
            />
        },
        Page::Result => html! {
            <ResultPage store={(*trip.store).clone()} />
        },
    };

    html! {
        <div class="app">
            { view }
        </div>
    }
}
