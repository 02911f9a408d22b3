// ============================================================================
// RECOMMENDATION PAGE - Alta de destinos visitados y transporte
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_destinations, use_search};
use crate::models::{Destination, Transportation};
use crate::stores::TripStore;
use super::{DraggableDestinationList, TransportationModal};

#[derive(Properties, PartialEq)]
pub struct RecommendationPageProps {
    pub store: TripStore,
    pub set_destinations: Callback<Vec<Destination>>,
    pub set_transportation: Callback<Transportation>,
    pub on_recommend: Callback<()>,
}

#[function_component(RecommendationPage)]
pub fn recommendation_page(props: &RecommendationPageProps) -> Html {
    let input_value = use_state(String::new);
    let show_transportation_modal = use_state(|| false);

    let search = use_search();

    // Tras añadir con éxito se limpian el campo y las sugerencias;
    // si la validación falla, el texto se conserva para corregirlo.
    let on_added = {
        let input_value = input_value.clone();
        let clear_search = search.clear.clone();
        Callback::from(move |_: ()| {
            input_value.set(String::new());
            clear_search.emit(());
        })
    };

    let destinations = use_destinations(
        props.store.destinations.clone(),
        props.set_destinations.clone(),
        on_added,
    );

    let on_input = {
        let input_value = input_value.clone();
        let search_input = search.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            input_value.set(value.clone());
            search_input.emit(value);
        })
    };

    let on_add_click = {
        let input_value = input_value.clone();
        let add = destinations.add.clone();
        Callback::from(move |_: MouseEvent| {
            add.emit((*input_value).clone());
        })
    };

    let on_keydown = {
        let input_value = input_value.clone();
        let add = destinations.add.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                add.emit((*input_value).clone());
            }
        })
    };

    let on_recommend_click = {
        let transportation = props.store.transportation;
        let on_recommend = props.on_recommend.clone();
        let show_modal = show_transportation_modal.clone();

        Callback::from(move |_: MouseEvent| {
            // Sin transporte elegido el modal bloquea el paso al resultado
            if transportation.is_some() {
                on_recommend.emit(());
            } else {
                show_modal.set(true);
            }
        })
    };

    let on_modal_save = {
        let set_transportation = props.set_transportation.clone();
        let on_recommend = props.on_recommend.clone();
        let show_modal = show_transportation_modal.clone();

        Callback::from(move |transportation: Transportation| {
            set_transportation.emit(transportation);
            show_modal.set(false);
            on_recommend.emit(());
        })
    };

    let on_modal_close = {
        let show_modal = show_transportation_modal.clone();
        Callback::from(move |_: ()| show_modal.set(false))
    };

    html! {
        <>
            <h1 class="page-title">{"Cuéntanos qué destinos has visitado"}</h1>
            <main class="recommendation-wrap">
                <div class="input-group">
                    <input
                        type="text"
                        class="input-field"
                        placeholder="Escribe un destino"
                        value={(*input_value).clone()}
                        oninput={on_input}
                        onkeydown={on_keydown}
                    />
                    <button class="add-button" onclick={on_add_click}>
                        {"Añadir"}
                    </button>

                    {
                        if !search.results.is_empty() {
                            html! {
                                <ul class="search-results">
                                    {
                                        search.results.iter().map(|result| {
                                            let name = result.name.clone();
                                            let add_from_search = destinations.add_from_search.clone();
                                            let onclick = Callback::from(move |_: MouseEvent| {
                                                add_from_search.emit(name.clone());
                                            });
                                            html! {
                                                <li key={result.name.clone()} {onclick}>
                                                    <strong>{ &result.name }</strong>
                                                    { &result.address }
                                                </li>
                                            }
                                        }).collect::<Html>()
                                    }
                                </ul>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="list-container">
                    {
                        if props.store.destinations.is_empty() {
                            html! {
                                <div class="placeholder-text">
                                    {"Aquí aparecerán los destinos que has visitado."}
                                </div>
                            }
                        } else {
                            html! {
                                <DraggableDestinationList
                                    destinations={props.store.destinations.clone()}
                                    on_delete={destinations.delete.clone()}
                                    on_reorder={destinations.reorder.clone()}
                                />
                            }
                        }
                    }
                </div>

                <div class="recommendation-button-container">
                    <button class="recommendation-button" onclick={on_recommend_click}>
                        {"Recomiéndame"}
                    </button>
                </div>
            </main>

            {
                if *show_transportation_modal {
                    html! {
                        <TransportationModal
                            on_close={on_modal_close}
                            on_save={on_modal_save}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
