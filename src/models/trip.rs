use serde::{Deserialize, Serialize};

/// Medio de transporte elegido por el usuario.
/// En el wire se serializa como "car" / "publicTransport".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transportation {
    Car,
    PublicTransport,
}

/// Opciones que se muestran en el selector del modal.
pub const TRANSPORTATION_OPTIONS: [Transportation; 2] =
    [Transportation::Car, Transportation::PublicTransport];

impl Transportation {
    /// Valor del <option> correspondiente.
    pub fn value(&self) -> &'static str {
        match self {
            Transportation::Car => "car",
            Transportation::PublicTransport => "publicTransport",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "car" => Some(Transportation::Car),
            "publicTransport" => Some(Transportation::PublicTransport),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Transportation::Car => "Coche",
            Transportation::PublicTransport => "Transporte público",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_select_values() {
        for option in TRANSPORTATION_OPTIONS {
            assert_eq!(Transportation::from_value(option.value()), Some(option));
        }
        assert_eq!(Transportation::from_value(""), None);
        assert_eq!(Transportation::from_value("bike"), None);
    }

    #[test]
    fn serializes_as_camel_case() {
        let json = serde_json::to_string(&Transportation::PublicTransport).unwrap();
        assert_eq!(json, "\"publicTransport\"");
        let json = serde_json::to_string(&Transportation::Car).unwrap();
        assert_eq!(json, "\"car\"");
    }
}
