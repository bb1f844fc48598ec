// src/models/hotel.rs
// DOCUMENTATION: Hotel data models for MongoDB and API layer
// PURPOSE: Stored document, nested value objects, request payloads and
// response shapes for hotels

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::common::{Coordinates, LocalizedText, RecordStatus};
use super::destination::DestinationSummary;
use super::validation::{
    capitalize_first, normalize_optional, validate_image_url, validate_phone, validate_website,
};
use crate::errors::{CatalogError, FieldViolation};

/// Hotel-level amenity. Wire values are the human-readable labels shown to
/// travelers, so multi-word variants carry explicit renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Amenity {
    WiFi,
    Parking,
    Pool,
    Gym,
    Spa,
    Restaurant,
    Bar,
    #[serde(rename = "Room Service")]
    RoomService,
    Laundry,
    #[serde(rename = "Airport Shuttle")]
    AirportShuttle,
    #[serde(rename = "Pet Friendly")]
    PetFriendly,
    #[serde(rename = "Business Center")]
    BusinessCenter,
    #[serde(rename = "Conference Room")]
    ConferenceRoom,
    #[serde(rename = "Beach Access")]
    BeachAccess,
    #[serde(rename = "Mountain View")]
    MountainView,
    Aquarium,
    #[serde(rename = "Water Park")]
    WaterPark,
    Helipad,
}

/// Per-room facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomFacility {
    #[serde(rename = "Air Conditioning")]
    AirConditioning,
    WiFi,
    #[serde(rename = "TV")]
    Tv,
    #[serde(rename = "Mini Bar")]
    MiniBar,
    Safe,
    Balcony,
    #[serde(rename = "Sea View")]
    SeaView,
    #[serde(rename = "City View")]
    CityView,
    #[serde(rename = "Garden View")]
    GardenView,
    Kitchenette,
    Sofa,
    #[serde(rename = "Work Desk")]
    WorkDesk,
    #[serde(rename = "Coffee Machine")]
    CoffeeMachine,
    Bathtub,
    Shower,
    #[serde(rename = "Room Service")]
    RoomService,
}

/// Supported price currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    AED,
    SAR,
    EGP,
    AUD,
    INR,
}

/// Street address of a hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Street address must be between 1 and 200 characters"
    ))]
    pub street: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "City name must be between 1 and 100 characters"
    ))]
    pub city: String,
    #[validate(length(max = 20, message = "Postal code cannot exceed 20 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl Address {
    pub fn normalize(&mut self) {
        self.street = self.street.trim().to_string();
        self.city = capitalize_first(self.city.trim());
        normalize_optional(&mut self.postal_code);
    }
}

/// Contact channels for a hotel. Phone and email are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[validate(custom = "validate_phone")]
    pub phone: String,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(custom = "validate_website")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl ContactInfo {
    pub fn normalize(&mut self) {
        self.phone = self.phone.trim().to_string();
        self.email = self.email.trim().to_lowercase();
        normalize_optional(&mut self.website);
    }
}

/// Nightly price band for the hotel as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub min: f64,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub max: f64,
    #[serde(default)]
    pub currency: Currency,
}

impl PriceRange {
    /// The band must be ordered. Both ends are reported when it is not,
    /// because a client fixing only one of them may still be wrong.
    pub fn check_ordering(&self) -> Result<(), CatalogError> {
        if self.min > self.max {
            return Err(CatalogError::Validation(vec![
                FieldViolation::new(
                    "priceRange.min",
                    "Minimum price cannot be greater than maximum price",
                ),
                FieldViolation::new(
                    "priceRange.max",
                    "Maximum price cannot be less than minimum price",
                ),
            ]));
        }
        Ok(())
    }
}

/// A bookable room category within a hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Room type name must be between 1 and 100 characters"
    ))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    #[serde(default)]
    pub facilities: Vec<RoomFacility>,
    #[validate(range(min = 1, max = 10, message = "Max occupancy must be between 1 and 10"))]
    pub max_occupancy: i32,
    #[validate(length(max = 50, message = "Room size cannot exceed 50 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl RoomType {
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        normalize_optional(&mut self.size);
    }
}

/// Bilingual description of a nearby attraction. Both languages optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AttractionDescription {
    #[validate(length(max = 200, message = "Description cannot exceed 200 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[validate(length(max = 200, message = "Description cannot exceed 200 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ar: Option<String>,
}

/// Point of interest close to the hotel, with a free-form distance label
/// such as "500 m" or "10 min walk".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NearbyAttraction {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Attraction name must be between 1 and 100 characters"
    ))]
    pub name: String,
    #[validate(length(min = 1, max = 20, message = "Distance cannot exceed 20 characters"))]
    pub distance: String,
    #[validate]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<AttractionDescription>,
}

impl NearbyAttraction {
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.distance = self.distance.trim().to_string();
        if let Some(description) = &mut self.description {
            normalize_optional(&mut description.en);
            normalize_optional(&mut description.ar);
        }
    }
}

/// Gallery entry. At most one image per hotel carries the primary flag,
/// enforced on every save by `ensure_primary_image`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HotelImage {
    #[validate(custom = "validate_image_url")]
    pub url: String,
    #[validate(length(max = 200, message = "Image caption cannot exceed 200 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

impl HotelImage {
    pub fn normalize(&mut self) {
        self.url = self.url.trim().to_string();
        normalize_optional(&mut self.caption);
    }
}

/// Booking availability window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default = "default_check_in")]
    pub check_in_time: String,
    #[serde(default = "default_check_out")]
    pub check_out_time: String,
}

impl Default for Availability {
    fn default() -> Self {
        Self {
            is_available: true,
            check_in_time: default_check_in(),
            check_out_time: default_check_out(),
        }
    }
}

fn default_available() -> bool {
    true
}

fn default_check_in() -> String {
    "15:00".to_string()
}

fn default_check_out() -> String {
    "11:00".to_string()
}

/// Repair the primary-image flags in place. An empty gallery is left alone.
/// With no flagged image the first becomes primary; with more than one only
/// the first image keeps the flag. Never an error, always a silent repair.
pub fn ensure_primary_image(images: &mut [HotelImage]) {
    if images.is_empty() {
        return;
    }
    let flagged = images.iter().filter(|image| image.is_primary).count();
    match flagged {
        0 => images[0].is_primary = true,
        1 => {}
        _ => {
            for (index, image) in images.iter_mut().enumerate() {
                image.is_primary = index == 0;
            }
        }
    }
}

/// Hotel document as stored in MongoDB
/// DOCUMENTATION: `destination` holds the owning destination's ObjectId.
/// Responses replace it with an embedded destination summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub destination: ObjectId,
    pub description: LocalizedText,
    pub address: Address,
    pub coordinates: Coordinates,
    pub contact: ContactInfo,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    pub star_rating: i32,
    pub price_range: PriceRange,
    #[serde(default)]
    pub room_types: Vec<RoomType>,
    #[serde(default)]
    pub nearby_attractions: Vec<NearbyAttraction>,
    #[serde(default)]
    pub images: Vec<HotelImage>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(rename = "isActive", default)]
    pub status: RecordStatus,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Hotel {
    /// Build a fresh document from a validated creation payload and the
    /// resolved destination id.
    pub fn from_request(request: CreateHotelRequest, destination: ObjectId) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: request.name,
            destination,
            description: request.description,
            address: request.address,
            coordinates: request.coordinates,
            contact: request.contact,
            amenities: request.amenities,
            star_rating: request.star_rating,
            price_range: request.price_range,
            room_types: request.room_types,
            nearby_attractions: request.nearby_attractions,
            images: request.images,
            availability: request.availability.unwrap_or_default(),
            status: RecordStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// The display image: the flagged one, else the first, else none.
    /// Derived on read, never stored.
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .iter()
            .find(|image| image.is_primary)
            .or_else(|| self.images.first())
            .map(|image| image.url.as_str())
    }

    /// Convert to API response with the destination summary embedded in
    /// place of the raw reference.
    pub fn to_response(&self, destination: Option<DestinationSummary>) -> HotelResponse {
        HotelResponse {
            id: self.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: self.name.clone(),
            destination,
            description: self.description.clone(),
            address: self.address.clone(),
            coordinates: self.coordinates,
            contact: self.contact.clone(),
            amenities: self.amenities.clone(),
            star_rating: self.star_rating,
            price_range: self.price_range,
            room_types: self.room_types.clone(),
            nearby_attractions: self.nearby_attractions.clone(),
            images: self.images.clone(),
            availability: self.availability.clone(),
            is_active: self.status.is_active(),
            primary_image: self.primary_image().map(str::to_string),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn to_suggestion(&self, destination: Option<DestinationSummary>) -> HotelSuggestion {
        HotelSuggestion {
            id: self.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: self.name.clone(),
            city: self.address.city.clone(),
            star_rating: self.star_rating,
            destination,
        }
    }
}

/// Payload for POST /api/hotels. `destination` is the hex id of an existing
/// destination.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotelRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Hotel name must be between 1 and 100 characters"
    ))]
    pub name: String,
    pub destination: String,
    #[validate]
    pub description: LocalizedText,
    #[validate]
    pub address: Address,
    #[validate]
    pub coordinates: Coordinates,
    #[validate]
    pub contact: ContactInfo,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[validate(range(min = 1, max = 5, message = "Star rating must be between 1 and 5"))]
    pub star_rating: i32,
    #[validate]
    pub price_range: PriceRange,
    #[validate]
    #[serde(default)]
    pub room_types: Vec<RoomType>,
    #[validate]
    #[serde(default)]
    pub nearby_attractions: Vec<NearbyAttraction>,
    #[validate]
    #[serde(default)]
    pub images: Vec<HotelImage>,
    pub availability: Option<Availability>,
}

impl CreateHotelRequest {
    pub fn normalize(&mut self) {
        self.name = capitalize_first(self.name.trim());
        self.destination = self.destination.trim().to_string();
        self.description.normalize();
        self.address.normalize();
        self.contact.normalize();
        for room_type in &mut self.room_types {
            room_type.normalize();
        }
        for attraction in &mut self.nearby_attractions {
            attraction.normalize();
        }
        for image in &mut self.images {
            image.normalize();
        }
    }
}

/// Payload for PUT /api/hotels/{id}. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHotelRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Hotel name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,
    pub destination: Option<String>,
    #[validate]
    pub description: Option<LocalizedText>,
    #[validate]
    pub address: Option<Address>,
    #[validate]
    pub coordinates: Option<Coordinates>,
    #[validate]
    pub contact: Option<ContactInfo>,
    pub amenities: Option<Vec<Amenity>>,
    #[validate(range(min = 1, max = 5, message = "Star rating must be between 1 and 5"))]
    pub star_rating: Option<i32>,
    #[validate]
    pub price_range: Option<PriceRange>,
    #[validate]
    pub room_types: Option<Vec<RoomType>>,
    #[validate]
    pub nearby_attractions: Option<Vec<NearbyAttraction>>,
    #[validate]
    pub images: Option<Vec<HotelImage>>,
    pub availability: Option<Availability>,
    pub is_active: Option<RecordStatus>,
}

impl UpdateHotelRequest {
    pub fn normalize(&mut self) {
        if let Some(name) = &self.name {
            self.name = Some(capitalize_first(name.trim()));
        }
        if let Some(destination) = &self.destination {
            self.destination = Some(destination.trim().to_string());
        }
        if let Some(description) = &mut self.description {
            description.normalize();
        }
        if let Some(address) = &mut self.address {
            address.normalize();
        }
        if let Some(contact) = &mut self.contact {
            contact.normalize();
        }
        if let Some(room_types) = &mut self.room_types {
            for room_type in room_types {
                room_type.normalize();
            }
        }
        if let Some(attractions) = &mut self.nearby_attractions {
            for attraction in attractions {
                attraction.normalize();
            }
        }
        if let Some(images) = &mut self.images {
            for image in images {
                image.normalize();
            }
        }
    }
}

/// Query parameters for GET /api/hotels
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub destination: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub star_rating: Option<i64>,
    pub amenities: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Query parameters for GET /api/hotels/destination/{destinationId}
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelsByDestinationQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Query parameters for GET /api/hotels/search/suggestions
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HotelSuggestionQuery {
    pub q: Option<String>,
    pub destination: Option<String>,
    pub limit: Option<i64>,
}

/// Hotel as returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: String,
    pub name: String,
    pub destination: Option<DestinationSummary>,
    pub description: LocalizedText,
    pub address: Address,
    pub coordinates: Coordinates,
    pub contact: ContactInfo,
    pub amenities: Vec<Amenity>,
    pub star_rating: i32,
    pub price_range: PriceRange,
    pub room_types: Vec<RoomType>,
    pub nearby_attractions: Vec<NearbyAttraction>,
    pub images: Vec<HotelImage>,
    pub availability: Availability,
    pub is_active: bool,
    /// Always present, null when the hotel has no images at all.
    pub primary_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Typeahead entry for the hotel search box.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSuggestion {
    pub id: String,
    pub name: String,
    pub city: String,
    pub star_rating: i32,
    pub destination: Option<DestinationSummary>,
}

/// Envelope for GET /api/hotels/destination/{destinationId}, which carries
/// the destination itself next to the page of hotels.
#[derive(Debug, Serialize)]
pub struct HotelsByDestinationResponse {
    pub success: bool,
    pub data: Vec<HotelResponse>,
    pub destination: DestinationSummary,
    pub pagination: super::common::PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validation::validate_request;

    fn image(url: &str, is_primary: bool) -> HotelImage {
        HotelImage {
            url: url.to_string(),
            caption: None,
            is_primary,
        }
    }

    fn sample_request() -> CreateHotelRequest {
        CreateHotelRequest {
            name: "hotel ritz paris".to_string(),
            destination: "64f1b2a3c4d5e6f7a8b9c0d1".to_string(),
            description: LocalizedText {
                en: "Legendary palace hotel on Place Vendôme.".to_string(),
                ar: "فندق قصر أسطوري في ساحة فاندوم".to_string(),
            },
            address: Address {
                street: "15 Place Vendôme".to_string(),
                city: "paris".to_string(),
                postal_code: Some("75001".to_string()),
            },
            coordinates: Coordinates {
                latitude: 48.8677,
                longitude: 2.3281,
            },
            contact: ContactInfo {
                phone: "+33 1 43 16 30 30".to_string(),
                email: "Resa@RitzParis.com".to_string(),
                website: Some("https://www.ritzparis.com".to_string()),
            },
            amenities: vec![Amenity::WiFi, Amenity::Spa, Amenity::Restaurant],
            star_rating: 5,
            price_range: PriceRange {
                min: 1200.0,
                max: 25000.0,
                currency: Currency::EUR,
            },
            room_types: vec![RoomType {
                name: "Suite Impériale".to_string(),
                price: 25000.0,
                facilities: vec![RoomFacility::AirConditioning, RoomFacility::MiniBar],
                max_occupancy: 4,
                size: Some("218 sqm".to_string()),
            }],
            nearby_attractions: vec![],
            images: vec![image("https://example.com/ritz.jpg", false)],
            availability: None,
        }
    }

    #[test]
    fn test_normalize_canonicalizes_fields() {
        let mut request = sample_request();
        request.normalize();
        assert_eq!(request.name, "Hotel ritz paris");
        assert_eq!(request.address.city, "Paris");
        assert_eq!(request.contact.email, "resa@ritzparis.com");
    }

    #[test]
    fn test_primary_repair_flags_first_when_none_flagged() {
        let mut images = vec![
            image("https://a.com/1.jpg", false),
            image("https://a.com/2.jpg", false),
        ];
        ensure_primary_image(&mut images);
        assert!(images[0].is_primary);
        assert!(!images[1].is_primary);
    }

    #[test]
    fn test_primary_repair_keeps_single_flag() {
        let mut images = vec![
            image("https://a.com/1.jpg", false),
            image("https://a.com/2.jpg", true),
        ];
        ensure_primary_image(&mut images);
        assert!(!images[0].is_primary);
        assert!(images[1].is_primary);
    }

    #[test]
    fn test_primary_repair_collapses_multiple_flags_to_first() {
        let mut images = vec![
            image("https://a.com/1.jpg", true),
            image("https://a.com/2.jpg", true),
            image("https://a.com/3.jpg", true),
        ];
        ensure_primary_image(&mut images);
        assert!(images[0].is_primary);
        assert!(!images[1].is_primary);
        assert!(!images[2].is_primary);
    }

    #[test]
    fn test_primary_repair_empty_gallery_is_noop() {
        let mut images: Vec<HotelImage> = vec![];
        ensure_primary_image(&mut images);
        assert!(images.is_empty());
    }

    #[test]
    fn test_primary_image_accessor() {
        let mut request = sample_request();
        request.images = vec![
            image("https://a.com/1.jpg", false),
            image("https://a.com/2.jpg", true),
        ];
        let hotel = Hotel::from_request(request, ObjectId::new());
        assert_eq!(hotel.primary_image(), Some("https://a.com/2.jpg"));
    }

    #[test]
    fn test_primary_image_falls_back_to_first() {
        let mut request = sample_request();
        request.images = vec![
            image("https://a.com/1.jpg", false),
            image("https://a.com/2.jpg", false),
        ];
        let hotel = Hotel::from_request(request, ObjectId::new());
        assert_eq!(hotel.primary_image(), Some("https://a.com/1.jpg"));
    }

    #[test]
    fn test_primary_image_none_for_empty_gallery() {
        let mut request = sample_request();
        request.images = vec![];
        let hotel = Hotel::from_request(request, ObjectId::new());
        assert_eq!(hotel.primary_image(), None);
    }

    #[test]
    fn test_price_ordering_rejected_with_both_fields() {
        let range = PriceRange {
            min: 500.0,
            max: 100.0,
            currency: Currency::USD,
        };
        match range.check_ordering() {
            Err(CatalogError::Validation(violations)) => {
                let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
                assert_eq!(fields, vec!["priceRange.min", "priceRange.max"]);
            }
            other => panic!("expected validation failure, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_price_ordering_allows_equal_bounds() {
        let range = PriceRange {
            min: 100.0,
            max: 100.0,
            currency: Currency::USD,
        };
        assert!(range.check_ordering().is_ok());
    }

    #[test]
    fn test_validation_reports_nested_image_url() {
        let mut request = sample_request();
        request.images = vec![image("not-a-url", false)];
        match validate_request(&request) {
            Err(CatalogError::Validation(violations)) => {
                assert!(violations.iter().any(|v| v.field == "images.0.url"));
            }
            other => panic!("expected validation failure, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_star_rating_bounds() {
        let mut request = sample_request();
        request.star_rating = 6;
        assert!(validate_request(&request).is_err());
        request.star_rating = 0;
        assert!(validate_request(&request).is_err());
        request.star_rating = 3;
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_name_length_bounds() {
        let mut request = sample_request();
        request.name = "x".repeat(100);
        assert!(validate_request(&request).is_ok());
        request.name = "x".repeat(101);
        match validate_request(&request) {
            Err(CatalogError::Validation(violations)) => {
                assert!(violations.iter().any(|v| v.field == "name"));
            }
            other => panic!("expected validation failure, got {:?}", other.err()),
        }

        let update: UpdateHotelRequest =
            serde_json::from_str(&format!(r#"{{"name":"{}"}}"#, "x".repeat(101))).unwrap();
        assert!(validate_request(&update).is_err());
    }

    #[test]
    fn test_amenity_wire_labels() {
        let json = serde_json::to_string(&Amenity::RoomService).unwrap();
        assert_eq!(json, "\"Room Service\"");
        let amenity: Amenity = serde_json::from_str("\"Airport Shuttle\"").unwrap();
        assert_eq!(amenity, Amenity::AirportShuttle);
        let json = serde_json::to_string(&Amenity::WiFi).unwrap();
        assert_eq!(json, "\"WiFi\"");
    }

    #[test]
    fn test_availability_defaults() {
        let availability = Availability::default();
        assert!(availability.is_available);
        assert_eq!(availability.check_in_time, "15:00");
        assert_eq!(availability.check_out_time, "11:00");

        let parsed: Availability = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Availability::default());
    }
}
