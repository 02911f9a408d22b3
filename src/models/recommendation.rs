use serde::{Deserialize, Serialize};

/// Recomendación de viaje devuelta por el backend.
/// Contrato canónico en camelCase (ver DESIGN.md).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub name: String,
    #[serde(default)]
    pub one_line_description: String,
    #[serde(default)]
    pub detailed_description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub travel_time: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub review_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_payload() {
        let json = r#"{
            "name": "Hongdae",
            "oneLineDescription": "Barrio joven y creativo",
            "detailedDescription": "Música en vivo, tiendas y cafés.",
            "imageUrl": "https://example.com/hongdae.jpg",
            "address": "Mapo-gu, Seúl",
            "travelTime": "25 min",
            "tags": "ocio, música",
            "reviewCount": 1024
        }"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.name, "Hongdae");
        assert_eq!(rec.review_count, 1024);
        assert_eq!(rec.image_url.as_deref(), Some("https://example.com/hongdae.jpg"));
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let rec: Recommendation = serde_json::from_str(r#"{"name": "Hongdae"}"#).unwrap();
        assert_eq!(rec.one_line_description, "");
        assert_eq!(rec.image_url, None);
        assert_eq!(rec.review_count, 0);
    }
}
