// ============================================================================
// DRAGGABLE DESTINATION LIST COMPONENT
// ============================================================================
// Lista de destinos con reordenado por arrastre. El movimiento es
// extraer-y-reinsertar; las etiquetas las recalcula DestinationList.
// ============================================================================

use web_sys::DragEvent;
use yew::prelude::*;

use crate::models::Destination;

#[derive(Properties, PartialEq)]
pub struct DraggableDestinationListProps {
    pub destinations: Vec<Destination>,
    pub on_delete: Callback<usize>,
    pub on_reorder: Callback<(usize, usize)>,
}

#[function_component(DraggableDestinationList)]
pub fn draggable_destination_list(props: &DraggableDestinationListProps) -> Html {
    let dragged_index = use_state(|| None::<usize>);
    let drag_over_index = use_state(|| None::<usize>);

    let on_drag_start = {
        let dragged_index = dragged_index.clone();
        Callback::from(move |(index, event): (usize, DragEvent)| {
            dragged_index.set(Some(index));

            if let Some(dt) = event.data_transfer() {
                dt.set_effect_allowed("move");
                let _ = dt.set_data("text/plain", &index.to_string());
            }

            log::info!("🎯 Arrastre iniciado: índice {}", index);
        })
    };

    let on_drag_over = {
        let drag_over_index = drag_over_index.clone();
        Callback::from(move |(index, event): (usize, DragEvent)| {
            // Sin prevent_default el navegador no permite soltar
            event.prevent_default();
            drag_over_index.set(Some(index));

            if let Some(dt) = event.data_transfer() {
                dt.set_drop_effect("move");
            }
        })
    };

    let on_drag_leave = {
        let drag_over_index = drag_over_index.clone();
        Callback::from(move |_: DragEvent| {
            drag_over_index.set(None);
        })
    };

    let on_drop = {
        let dragged_index = dragged_index.clone();
        let drag_over_index = drag_over_index.clone();
        let on_reorder = props.on_reorder.clone();

        Callback::from(move |(target_index, event): (usize, DragEvent)| {
            event.prevent_default();

            if let Some(from_index) = *dragged_index {
                if from_index != target_index {
                    log::info!("📦 Soltado: mover destino de {} a {}", from_index, target_index);
                    on_reorder.emit((from_index, target_index));
                }
            }

            dragged_index.set(None);
            drag_over_index.set(None);
        })
    };

    let on_drag_end = {
        let dragged_index = dragged_index.clone();
        let drag_over_index = drag_over_index.clone();

        Callback::from(move |_: DragEvent| {
            dragged_index.set(None);
            drag_over_index.set(None);
        })
    };

    html! {
        <ul class="destination-list">
            {
                props.destinations.iter().enumerate().map(|(index, destination)| {
                    let is_dragging = *dragged_index == Some(index);
                    let is_drag_over = *drag_over_index == Some(index);

                    let class = classes!(
                        "destination-item",
                        is_dragging.then(|| "dragging"),
                        is_drag_over.then(|| "drag-over")
                    );

                    let on_dragstart = {
                        let on_drag_start = on_drag_start.clone();
                        Callback::from(move |e: DragEvent| {
                            on_drag_start.emit((index, e));
                        })
                    };

                    let on_dragover = {
                        let on_drag_over = on_drag_over.clone();
                        Callback::from(move |e: DragEvent| {
                            on_drag_over.emit((index, e));
                        })
                    };

                    let on_delete = {
                        let on_delete = props.on_delete.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_delete.emit(index);
                        })
                    };

                    html! {
                        <li
                            key={destination.name.clone()}
                            class={class}
                            draggable="true"
                            ondragstart={on_dragstart}
                            ondragover={on_dragover}
                            ondragleave={on_drag_leave.clone()}
                            ondrop={Callback::from({
                                let on_drop = on_drop.clone();
                                let target_index = index;
                                move |e: DragEvent| {
                                    on_drop.emit((target_index, e));
                                }
                            })}
                            ondragend={on_drag_end.clone()}
                        >
                            <div class="destination-info">
                                <span class="destination-label">{ &destination.label }</span>
                                <span class="destination-name">{ &destination.name }</span>
                            </div>
                            <button class="delete-button" onclick={on_delete}>
                                {"Eliminar"}
                            </button>
                        </li>
                    }
                }).collect::<Html>()
            }
        </ul>
    }
}
