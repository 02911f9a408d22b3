use serde::{Deserialize, Serialize};

/// Sugerencia del buscador ya lista para mostrar
/// (el título del backend llega con HTML que hay que limpiar).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    #[serde(default)]
    pub address: String,
}
