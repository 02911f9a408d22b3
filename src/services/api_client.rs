// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{Address, Coordinates, Destination, Recommendation, SearchResult, Transportation};
use crate::utils::strip_html_tags;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    /// Geocodificación inversa: coordenadas → dirección legible
    pub async fn reverse_geocode(&self, coordinates: &Coordinates) -> Result<Address, String> {
        let url = format!("{}/geolocation", self.base_url);

        log::info!(
            "📍 Resolviendo dirección para ({}, {})",
            coordinates.latitude,
            coordinates.longitude
        );

        let response = Request::post(&url)
            .json(coordinates)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let geocode = response
            .json::<ReverseGeocodeResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("✅ Dirección resuelta: {} {}", geocode.address.city, geocode.address.district);
        Ok(geocode.address)
    }

    /// Buscar destinos candidatos por texto libre
    pub async fn search_places(&self, query: &str) -> Result<Vec<SearchResult>, String> {
        let encoded: String = js_sys::encode_uri_component(query).into();
        let url = format!("{}/api/search?query={}", self.base_url, encoded);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let data = response
            .json::<SearchResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        // El backend devuelve los títulos con marcado HTML (<b>...</b>)
        let results: Vec<SearchResult> = data
            .results
            .into_iter()
            .map(|item| SearchResult {
                name: strip_html_tags(&item.title),
                address: item.address,
            })
            .collect();

        log::info!("🔍 Búsqueda \"{}\": {} resultados", query, results.len());
        Ok(results)
    }

    /// Pedir recomendaciones con el contexto de viaje acumulado
    pub async fn fetch_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Recommendation>, String> {
        let url = format!("{}/api/recommendation", self.base_url);

        log::info!(
            "🧭 Pidiendo recomendaciones: {} destinos, transporte {:?}",
            request.destinations.len(),
            request.transportation
        );

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response.text().await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP error {}: {}", status, error_text));
        }

        let recommendations = response
            .json::<Vec<Recommendation>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("✅ Recomendaciones recibidas: {}", recommendations.len());
        Ok(recommendations)
    }
}

/// Cuerpo canónico de la petición de recomendación (ver DESIGN.md).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub destinations: Vec<Destination>,
    pub transportation: Transportation,
    pub current_location: Option<Coordinates>,
}

#[derive(serde::Deserialize)]
struct ReverseGeocodeResponse {
    address: Address,
}

#[derive(serde::Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResultItem>,
}

#[derive(serde::Deserialize)]
struct SearchResultItem {
    title: String,
    #[serde(default)]
    address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_request_uses_canonical_field_names() {
        let request = RecommendationRequest {
            destinations: vec![Destination {
                label: "A".into(),
                name: "Seúl".into(),
            }],
            transportation: Transportation::PublicTransport,
            current_location: Some(Coordinates {
                latitude: 37.5576879,
                longitude: 126.9254523,
            }),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"destinations\""));
        assert!(json.contains("\"transportation\":\"publicTransport\""));
        assert!(json.contains("\"currentLocation\""));
        assert!(json.contains("\"latitude\":37.5576879"));
    }

    #[test]
    fn recommendation_request_allows_unresolved_location() {
        let request = RecommendationRequest {
            destinations: Vec::new(),
            transportation: Transportation::Car,
            current_location: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"currentLocation\":null"));
    }
}
