// ============================================================================
// RESULT PAGE - Petición única al montar y render de recomendaciones
// ============================================================================

use yew::prelude::*;

use crate::models::Recommendation;
use crate::services::{ApiClient, RecommendationRequest};
use crate::stores::TripStore;

#[derive(Properties, PartialEq)]
pub struct ResultPageProps {
    pub store: TripStore,
}

#[function_component(ResultPage)]
pub fn result_page(props: &ResultPageProps) -> Html {
    let recommendations = use_state(Vec::<Recommendation>::new);
    let loading = use_state(|| true);

    {
        let recommendations = recommendations.clone();
        let loading = loading.clone();
        let store = props.store.clone();

        use_effect_with((), move |_| {
            match store.transportation {
                Some(transportation) => {
                    let request = RecommendationRequest {
                        destinations: store.destinations.clone(),
                        transportation,
                        current_location: store.last_location,
                    };

                    wasm_bindgen_futures::spawn_local(async move {
                        match ApiClient::new().fetch_recommendations(&request).await {
                            Ok(fetched) => {
                                recommendations.set(fetched);
                            }
                            Err(e) => {
                                // Fallo de red: se muestra el estado vacío
                                log::error!("❌ Error pidiendo recomendaciones: {}", e);
                            }
                        }
                        loading.set(false);
                    });
                }
                None => {
                    log::warn!("⚠️ Página de resultados sin transporte elegido");
                    loading.set(false);
                }
            }
            || ()
        });
    }

    if *loading {
        return html! {
            <div class="loading-container">
                <div class="spinner"></div>
                <p>{"Buscando recomendaciones..."}</p>
            </div>
        };
    }

    html! {
        <div class="result-container">
            <h1>{"Recomendaciones"}</h1>
            {
                if recommendations.is_empty() {
                    html! { <p class="empty-state">{"No hemos encontrado recomendaciones."}</p> }
                } else {
                    html! {
                        <ul class="recommendation-list">
                            {
                                recommendations.iter().map(|recommendation| {
                                    let image_url = recommendation
                                        .image_url
                                        .clone()
                                        .unwrap_or_else(|| "/default-image.png".to_string());
                                    html! {
                                        <li key={recommendation.name.clone()}>
                                            <div class="image-container">
                                                <img src={image_url} alt={recommendation.name.clone()} />
                                            </div>
                                            <div class="info">
                                                <h2>{ &recommendation.name }</h2>
                                                <p class="one-line-description">
                                                    { &recommendation.one_line_description }
                                                </p>
                                                <p class="detailed-description">
                                                    { &recommendation.detailed_description }
                                                </p>
                                                <p class="address">{ &recommendation.address }</p>
                                                <p class="travel-time">
                                                    { format!("Tiempo de viaje: {}", recommendation.travel_time) }
                                                </p>
                                                <p class="tags">
                                                    { format!("Etiquetas: {}", recommendation.tags) }
                                                </p>
                                                <p class="review-count">
                                                    { format!("Reseñas: {}", recommendation.review_count) }
                                                </p>
                                            </div>
                                        </li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    }
                }
            }
        </div>
    }
}
