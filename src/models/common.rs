// src/models/common.rs
// DOCUMENTATION: Shared value types and response envelopes
// PURPOSE: Types used by both destination and hotel models

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::Validate;

/// Bilingual text value. Both languages are always required; neither is a
/// fallback for the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LocalizedText {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "English description must be between 1 and 1000 characters"
    ))]
    pub en: String,
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Arabic description must be between 1 and 1000 characters"
    ))]
    pub ar: String,
}

impl LocalizedText {
    pub fn normalize(&mut self) {
        self.en = self.en.trim().to_string();
        self.ar = self.ar.trim().to_string();
    }
}

/// Geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinates {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

/// Lifecycle state of a catalog record.
/// DOCUMENTATION: Stored and transmitted as the boolean `isActive` field,
/// so existing documents and clients keep working unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordStatus {
    #[default]
    Active,
    Deactivated,
}

impl RecordStatus {
    pub fn is_active(self) -> bool {
        matches!(self, RecordStatus::Active)
    }
}

impl Serialize for RecordStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(self.is_active())
    }
}

impl<'de> Deserialize<'de> for RecordStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let active = bool::deserialize(deserializer)?;
        Ok(if active {
            RecordStatus::Active
        } else {
            RecordStatus::Deactivated
        })
    }
}

/// Pagination block attached to every list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub current: i64,
    pub pages: i64,
    pub total: i64,
    pub limit: i64,
}

impl PaginationMeta {
    /// DOCUMENTATION: `pages` is the ceiling of total / limit, zero when the
    /// filtered set is empty.
    pub fn new(page: i64, limit: i64, total: u64) -> Self {
        let total = total as i64;
        let pages = if total == 0 {
            0
        } else {
            (total + limit - 1) / limit
        };
        Self {
            current: page,
            pages,
            total,
            limit,
        }
    }
}

/// Envelope for list endpoints: `{success, data, pagination}`.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Envelope for single-record and suggestion endpoints.
#[derive(Debug, Serialize)]
pub struct ItemResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ItemResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: &str) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.to_string()),
        }
    }
}

/// Envelope for operations that return no record, such as soft deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_meta_rounds_up() {
        let meta = PaginationMeta::new(1, 10, 25);
        assert_eq!(meta.current, 1);
        assert_eq!(meta.pages, 3);
        assert_eq!(meta.total, 25);
        assert_eq!(meta.limit, 10);
    }

    #[test]
    fn test_pagination_meta_exact_multiple() {
        let meta = PaginationMeta::new(2, 10, 30);
        assert_eq!(meta.pages, 3);
    }

    #[test]
    fn test_pagination_meta_empty_set() {
        let meta = PaginationMeta::new(1, 10, 0);
        assert_eq!(meta.pages, 0);
        assert_eq!(meta.total, 0);
    }

    #[test]
    fn test_record_status_serializes_as_bool() {
        let json = serde_json::to_string(&RecordStatus::Active).unwrap();
        assert_eq!(json, "true");
        let json = serde_json::to_string(&RecordStatus::Deactivated).unwrap();
        assert_eq!(json, "false");
    }

    #[test]
    fn test_record_status_deserializes_from_bool() {
        let status: RecordStatus = serde_json::from_str("true").unwrap();
        assert_eq!(status, RecordStatus::Active);
        let status: RecordStatus = serde_json::from_str("false").unwrap();
        assert_eq!(status, RecordStatus::Deactivated);
        assert!(!status.is_active());
    }

    #[test]
    fn test_record_status_defaults_to_active() {
        assert_eq!(RecordStatus::default(), RecordStatus::Active);
    }

    #[test]
    fn test_localized_text_normalize_trims() {
        let mut text = LocalizedText {
            en: "  A city of light  ".to_string(),
            ar: " مدينة النور ".to_string(),
        };
        text.normalize();
        assert_eq!(text.en, "A city of light");
        assert_eq!(text.ar, "مدينة النور");
    }

    #[test]
    fn test_coordinates_range() {
        use validator::Validate;

        let valid = Coordinates {
            latitude: 48.8566,
            longitude: 2.3522,
        };
        assert!(valid.validate().is_ok());

        let invalid = Coordinates {
            latitude: 91.0,
            longitude: 200.0,
        };
        let errors = invalid.validate().unwrap_err();
        assert!(errors.errors().contains_key("latitude"));
        assert!(errors.errors().contains_key("longitude"));
    }
}
