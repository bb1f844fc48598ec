// src/models/destination.rs
// DOCUMENTATION: Destination data models for MongoDB and API layer
// PURPOSE: Stored document, request payloads and response shapes for destinations

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::common::{Coordinates, LocalizedText, RecordStatus};
use super::validation::{capitalize_first, normalize_optional, validate_image_url};

/// Climate classification for a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Climate {
    Tropical,
    #[default]
    Temperate,
    Continental,
    Polar,
    Arid,
    Mediterranean,
}

/// Destination document as stored in MongoDB
/// DOCUMENTATION: Field names are camelCase on disk; `isActive` carries the
/// record status and timestamps are native BSON datetimes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub country: String,
    pub description: LocalizedText,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub climate: Climate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_time_to_visit: Option<String>,
    #[serde(rename = "isActive", default)]
    pub status: RecordStatus,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Destination {
    /// Build a fresh document from a validated creation payload.
    pub fn from_request(request: CreateDestinationRequest) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: request.name,
            country: request.country,
            description: request.description,
            coordinates: request.coordinates,
            image_url: request.image_url,
            climate: request.climate,
            best_time_to_visit: request.best_time_to_visit,
            status: RecordStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Convert to API response with the derived hotel count attached.
    pub fn to_response(&self, hotel_count: i64) -> DestinationResponse {
        DestinationResponse {
            id: self.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: self.name.clone(),
            country: self.country.clone(),
            description: self.description.clone(),
            coordinates: self.coordinates,
            image_url: self.image_url.clone(),
            climate: self.climate,
            best_time_to_visit: self.best_time_to_visit.clone(),
            is_active: self.status.is_active(),
            hotel_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Compact form embedded in hotel list responses.
    pub fn summary(&self) -> DestinationSummary {
        DestinationSummary {
            id: self.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: self.name.clone(),
            country: self.country.clone(),
            description: None,
            coordinates: None,
        }
    }

    /// Summary with description and coordinates, used on hotel detail views.
    pub fn detailed_summary(&self) -> DestinationSummary {
        DestinationSummary {
            id: self.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: self.name.clone(),
            country: self.country.clone(),
            description: Some(self.description.clone()),
            coordinates: Some(self.coordinates),
        }
    }

    pub fn to_suggestion(&self) -> DestinationSuggestion {
        DestinationSuggestion {
            id: self.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: self.name.clone(),
            country: self.country.clone(),
        }
    }
}

/// Payload for POST /api/destinations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDestinationRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Destination name must be between 1 and 100 characters"
    ))]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Country name must be between 1 and 100 characters"
    ))]
    pub country: String,
    #[validate]
    pub description: LocalizedText,
    #[validate]
    pub coordinates: Coordinates,
    #[validate(custom = "validate_image_url")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub climate: Climate,
    #[validate(length(max = 200, message = "Best time to visit cannot exceed 200 characters"))]
    pub best_time_to_visit: Option<String>,
}

impl CreateDestinationRequest {
    /// Canonicalize free-text fields before validation. Name and country get
    /// first-letter capitalization so `paris`, `PARIS` and `Paris` all store
    /// identically and the duplicate probe stays reliable.
    pub fn normalize(&mut self) {
        self.name = capitalize_first(self.name.trim());
        self.country = capitalize_first(self.country.trim());
        self.description.normalize();
        normalize_optional(&mut self.image_url);
        normalize_optional(&mut self.best_time_to_visit);
    }
}

/// Payload for PUT /api/destinations/{id}. Every field is optional; absent
/// fields keep their stored value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDestinationRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Destination name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Country name must be between 1 and 100 characters"
    ))]
    pub country: Option<String>,
    #[validate]
    pub description: Option<LocalizedText>,
    #[validate]
    pub coordinates: Option<Coordinates>,
    #[validate(custom = "validate_image_url")]
    pub image_url: Option<String>,
    pub climate: Option<Climate>,
    #[validate(length(max = 200, message = "Best time to visit cannot exceed 200 characters"))]
    pub best_time_to_visit: Option<String>,
    pub is_active: Option<RecordStatus>,
}

impl UpdateDestinationRequest {
    pub fn normalize(&mut self) {
        if let Some(name) = &self.name {
            self.name = Some(capitalize_first(name.trim()));
        }
        if let Some(country) = &self.country {
            self.country = Some(capitalize_first(country.trim()));
        }
        if let Some(description) = &mut self.description {
            description.normalize();
        }
        normalize_optional(&mut self.image_url);
        normalize_optional(&mut self.best_time_to_visit);
    }
}

/// Query parameters for GET /api/destinations
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub country: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Query parameters for GET /api/destinations/search/suggestions
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DestinationSuggestionQuery {
    pub q: Option<String>,
    pub limit: Option<i64>,
}

/// Destination as returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationResponse {
    pub id: String,
    pub name: String,
    pub country: String,
    pub description: LocalizedText,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub climate: Climate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_time_to_visit: Option<String>,
    pub is_active: bool,
    pub hotel_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compact destination embedded in hotel responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSummary {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Typeahead entry for the destination search box.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSuggestion {
    pub id: String,
    pub name: String,
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validation::validate_request;

    fn sample_request() -> CreateDestinationRequest {
        CreateDestinationRequest {
            name: "paris".to_string(),
            country: "france".to_string(),
            description: LocalizedText {
                en: "  The city of light.  ".to_string(),
                ar: "مدينة النور".to_string(),
            },
            coordinates: Coordinates {
                latitude: 48.8566,
                longitude: 2.3522,
            },
            image_url: Some("  https://images.unsplash.com/photo-1502602898657  ".to_string()),
            climate: Climate::Temperate,
            best_time_to_visit: None,
        }
    }

    #[test]
    fn test_normalize_capitalizes_name_and_country() {
        let mut request = sample_request();
        request.normalize();
        assert_eq!(request.name, "Paris");
        assert_eq!(request.country, "France");
        assert_eq!(request.description.en, "The city of light.");
        assert_eq!(
            request.image_url.as_deref(),
            Some("https://images.unsplash.com/photo-1502602898657")
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut request = sample_request();
        request.normalize();
        let first = request.clone();
        request.normalize();
        assert_eq!(request.name, first.name);
        assert_eq!(request.country, first.country);
        assert_eq!(request.description.en, first.description.en);
    }

    #[test]
    fn test_validation_collects_all_violations() {
        let mut request = sample_request();
        request.name = String::new();
        request.coordinates.latitude = 95.0;
        request.description.ar = String::new();

        match validate_request(&request) {
            Err(crate::errors::CatalogError::Validation(violations)) => {
                let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
                assert!(fields.contains(&"name"));
                assert!(fields.contains(&"coordinates.latitude"));
                assert!(fields.contains(&"description.ar"));
            }
            other => panic!("expected validation failure, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_invalid_image_url_rejected() {
        let mut request = sample_request();
        request.image_url = Some("https://example.com/not-an-image".to_string());
        let result = validate_request(&request);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_request_starts_active() {
        let mut request = sample_request();
        request.normalize();
        let destination = Destination::from_request(request);
        assert!(destination.status.is_active());
        assert!(destination.id.is_none());
        assert_eq!(destination.name, "Paris");
    }

    #[test]
    fn test_update_status_accepts_wire_boolean() {
        let update: UpdateDestinationRequest =
            serde_json::from_str(r#"{"isActive": false}"#).unwrap();
        assert_eq!(update.is_active, Some(RecordStatus::Deactivated));
        assert!(update.name.is_none());
    }
}
