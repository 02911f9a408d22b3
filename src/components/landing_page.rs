// ============================================================================
// LANDING PAGE - Detección de ubicación y dirección actual
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_geolocation;
use crate::models::{Address, Coordinates};
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    pub set_last_location: Callback<Coordinates>,
    pub on_continue: Callback<()>,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let address = use_state(|| None::<Address>);
    let loading = use_state(|| true);

    // Posición → store + geocodificación inversa. Cualquier fallo deja
    // la página utilizable sin dirección.
    let on_position = {
        let address = address.clone();
        let loading = loading.clone();
        let set_last_location = props.set_last_location.clone();

        Callback::from(move |coordinates: Coordinates| {
            set_last_location.emit(coordinates);

            let address = address.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().reverse_geocode(&coordinates).await {
                    Ok(resolved) => {
                        address.set(Some(resolved));
                    }
                    Err(e) => {
                        log::error!("❌ Error resolviendo la dirección: {}", e);
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_unavailable = {
        let loading = loading.clone();
        Callback::from(move |_: ()| loading.set(false))
    };

    use_geolocation(on_position, on_unavailable);

    let on_continue = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| on_continue.emit(()))
    };

    if *loading {
        return html! {
            <div class="loading-container">
                <div class="spinner"></div>
                <p>{"Localizándote..."}</p>
            </div>
        };
    }

    html! {
        <div class="landing-page">
            {
                match address.as_ref() {
                    Some(address) if address.is_known() => html! {
                        <div class="address-wrap">
                            <p class="address-intro">{"Ahora mismo estás en"}</p>
                            <p class="address-city">{ &address.city }</p>
                            <p class="address-detail">
                                { format!("{} {}", address.district, address.road) }
                            </p>
                        </div>
                    },
                    _ => html! {},
                }
            }
            <h1 class="landing-title">{"Descubre dónde ir después"}</h1>
            <button class="continue-button" onclick={on_continue}>
                {"Empezar"}
            </button>
        </div>
    }
}
