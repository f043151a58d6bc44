//! Reverse geocoding through Nominatim.

use serde::Deserialize;

use crate::api::ApiError;
use crate::config::FrontendConfig;
use crate::store::MapCoordinate;

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: String,
}

/// Resolve a coordinate to a display address.
///
/// Nominatim is a third-party service with its own error shape, so
/// failures are not normalized; network errors pass through.
pub async fn reverse_geocode(coordinate: MapCoordinate) -> Result<String, ApiError> {
    let config = FrontendConfig::new();
    let url = format!(
        "{}?format=jsonv2&lat={}&lon={}",
        config.nominatim_url(),
        coordinate.lat,
        coordinate.lng
    );
    let response = reqwest::Client::new().get(url).send().await?;
    let body: ReverseResponse = response.json().await?;
    Ok(strip_postal_code(&body.display_name))
}

/// Nominatim display names with more than three comma-separated
/// segments carry the postal code in the third position; the
/// back-office drops it. Three or fewer segments pass through.
pub(crate) fn strip_postal_code(display_name: &str) -> String {
    let mut segments: Vec<&str> = display_name.split(',').map(str::trim).collect();
    if segments.len() > 3 {
        segments.remove(2);
    }
    segments.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_segments_drop_the_third() {
        assert_eq!(strip_postal_code("A, B, 12345, C, D"), "A, B, C, D");
    }

    #[test]
    fn test_four_segments_drop_the_third() {
        assert_eq!(
            strip_postal_code("12 Rue de Rivoli, Paris, 75001, France"),
            "12 Rue de Rivoli, Paris, France"
        );
    }

    #[test]
    fn test_three_segments_pass_through() {
        assert_eq!(strip_postal_code("A, B, C"), "A, B, C");
    }

    #[test]
    fn test_single_segment_passes_through() {
        assert_eq!(strip_postal_code("Paris"), "Paris");
    }
}
