// ============================================================================
// TRANSPORTATION MODAL COMPONENT
// ============================================================================
// Aparece al intentar pedir recomendaciones sin transporte elegido,
// no al cargar la página.
// ============================================================================

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::{Transportation, TRANSPORTATION_OPTIONS};

#[derive(Properties, PartialEq)]
pub struct TransportationModalProps {
    pub on_close: Callback<()>,
    pub on_save: Callback<Transportation>,
}

pub struct TransportationModal {
    selected: Option<Transportation>,
}

pub enum Msg {
    Select(String),
    Save,
    Close,
}

impl Component for TransportationModal {
    type Message = Msg;
    type Properties = TransportationModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { selected: None }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(value) => {
                self.selected = Transportation::from_value(&value);
                true
            }
            Msg::Save => {
                match self.selected {
                    Some(transportation) => {
                        ctx.props().on_save.emit(transportation);
                    }
                    None => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message("Selecciona un medio de transporte.");
                        }
                    }
                }
                false
            }
            Msg::Close => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_change = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::Select(select.value())
        });

        html! {
            <div class="modal active">
                <div class="modal-overlay" onclick={ctx.link().callback(|_| Msg::Close)}></div>
                <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <h2>{"¿Cómo te vas a mover?"}</h2>
                    <select class="select-menu" onchange={on_change}>
                        <option value="" selected={self.selected.is_none()}>
                            {"Selecciona una opción"}
                        </option>
                        {
                            TRANSPORTATION_OPTIONS.iter().map(|option| html! {
                                <option
                                    value={option.value()}
                                    selected={self.selected == Some(*option)}
                                >
                                    { option.display_name() }
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                    <div class="button-group">
                        <button class="save-button" onclick={ctx.link().callback(|_| Msg::Save)}>
                            {"Confirmar"}
                        </button>
                        <button class="close-button" onclick={ctx.link().callback(|_| Msg::Close)}>
                            {"Cancelar"}
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
