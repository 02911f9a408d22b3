use serde::{Deserialize, Serialize};

/// Coordenadas del usuario. Se serializan tal cual hacia el backend.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Dirección legible devuelta por la geocodificación inversa.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub road: String,
}

impl Address {
    pub fn is_known(&self) -> bool {
        !self.city.is_empty()
    }
}
