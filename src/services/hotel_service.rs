// src/services/hotel_service.rs
// DOCUMENTATION: Business logic for hotels
// PURPOSE: Runs the fixed save pipeline (normalize, validate, referential
// check, primary-image repair, price ordering) and embeds destination
// summaries into responses

use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;
use mongodb::Database;

use crate::db::{query, DestinationRepository, HotelRepository};
use crate::errors::CatalogError;
use crate::models::validation::validate_request;
use crate::models::{
    ensure_primary_image, CreateHotelRequest, DestinationSummary, Hotel, HotelListQuery,
    HotelResponse, HotelSuggestion, HotelSuggestionQuery, HotelsByDestinationQuery,
    PaginationMeta, UpdateHotelRequest,
};
use crate::services::parse_object_id;

const NOT_FOUND: &str = "Hotel not found";
const DESTINATION_NOT_FOUND: &str = "Destination not found";

pub struct HotelService;

impl HotelService {
    /// Create a hotel. Pipeline order is fixed: normalize, validate, resolve
    /// the destination reference, repair primary-image flags, check price
    /// ordering. Validation must precede the referential check so a payload
    /// that is both malformed and dangling reports the field errors.
    pub async fn create(
        db: &Database,
        mut request: CreateHotelRequest,
    ) -> Result<HotelResponse, CatalogError> {
        request.normalize();
        validate_request(&request)?;

        let destination_id = ObjectId::parse_str(&request.destination)
            .map_err(|_| CatalogError::DestinationNotFound)?;
        let destination = DestinationRepository::find_by_id(db, destination_id)
            .await?
            .ok_or(CatalogError::DestinationNotFound)?;

        ensure_primary_image(&mut request.images);
        request.price_range.check_ordering()?;

        let hotel =
            HotelRepository::insert(db, Hotel::from_request(request, destination_id)).await?;
        Ok(hotel.to_response(Some(destination.summary())))
    }

    /// Paged listing of active hotels with destination summaries embedded.
    pub async fn list(
        db: &Database,
        query: HotelListQuery,
    ) -> Result<(Vec<HotelResponse>, PaginationMeta), CatalogError> {
        let window = query::page_window(query.page, query.limit);
        let (hotels, total) = HotelRepository::list(db, &query, &window).await?;
        let summaries = Self::destination_summaries(db, &hotels).await?;

        let data = hotels
            .iter()
            .map(|hotel| hotel.to_response(summaries.get(&hotel.destination).cloned()))
            .collect();

        Ok((data, PaginationMeta::new(window.page, window.limit, total)))
    }

    /// Single hotel by id, with the fuller destination summary that detail
    /// views show (description and coordinates included).
    pub async fn get(db: &Database, id: &str) -> Result<HotelResponse, CatalogError> {
        let object_id = parse_object_id(id, NOT_FOUND)?;
        let hotel = HotelRepository::get_by_id(db, object_id).await?;
        let destination = DestinationRepository::find_by_id(db, hotel.destination).await?;
        Ok(hotel.to_response(destination.map(|d| d.detailed_summary())))
    }

    /// The active hotels of one destination, plus the destination itself for
    /// the page header. Unknown destination ids are a 404, whatever their
    /// active state the destination is always served.
    pub async fn list_for_destination(
        db: &Database,
        destination_id: &str,
        query: HotelsByDestinationQuery,
    ) -> Result<(DestinationSummary, Vec<HotelResponse>, PaginationMeta), CatalogError> {
        let object_id = parse_object_id(destination_id, DESTINATION_NOT_FOUND)?;
        let destination = DestinationRepository::find_by_id(db, object_id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(DESTINATION_NOT_FOUND.to_string()))?;

        let window = query::page_window(query.page, query.limit);
        let (hotels, total) =
            HotelRepository::list_for_destination(db, object_id, &query, &window).await?;

        let summary = destination.summary();
        let data = hotels
            .iter()
            .map(|hotel| hotel.to_response(Some(summary.clone())))
            .collect();

        Ok((summary, data, PaginationMeta::new(window.page, window.limit, total)))
    }

    /// Partial update. Supplied fields re-run the same pipeline steps as
    /// creation: a new destination must exist, a new gallery gets its
    /// primary flag repaired, a new price band must be ordered.
    pub async fn update(
        db: &Database,
        id: &str,
        mut request: UpdateHotelRequest,
    ) -> Result<HotelResponse, CatalogError> {
        let object_id = parse_object_id(id, NOT_FOUND)?;
        request.normalize();
        validate_request(&request)?;

        let new_destination = match request.destination.as_deref() {
            Some(raw) => {
                let destination_id =
                    ObjectId::parse_str(raw).map_err(|_| CatalogError::DestinationNotFound)?;
                DestinationRepository::find_by_id(db, destination_id)
                    .await?
                    .ok_or(CatalogError::DestinationNotFound)?;
                Some(destination_id)
            }
            None => None,
        };

        if let Some(images) = &mut request.images {
            ensure_primary_image(images);
        }
        if let Some(price_range) = &request.price_range {
            price_range.check_ordering()?;
        }

        let hotel = HotelRepository::update(db, object_id, &request, new_destination).await?;
        let destination = DestinationRepository::find_by_id(db, hotel.destination).await?;
        Ok(hotel.to_response(destination.map(|d| d.summary())))
    }

    /// Soft delete. The destination's hotelCount drops immediately because
    /// counts only consider active hotels.
    pub async fn delete(db: &Database, id: &str) -> Result<(), CatalogError> {
        let object_id = parse_object_id(id, NOT_FOUND)?;
        HotelRepository::soft_delete(db, object_id).await?;
        Ok(())
    }

    /// Typeahead suggestions, optionally scoped to one destination. Terms
    /// under two characters return an empty list.
    pub async fn suggestions(
        db: &Database,
        query: HotelSuggestionQuery,
    ) -> Result<Vec<HotelSuggestion>, CatalogError> {
        let term = query.q.as_deref().map(str::trim).unwrap_or("");
        if term.chars().count() < 2 {
            return Ok(Vec::new());
        }

        let destination = match query.destination.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(ObjectId::parse_str(raw).map_err(|_| {
                CatalogError::InvalidQuery(
                    "destination must be a valid destination id".to_string(),
                )
            })?),
            _ => None,
        };

        let limit = query::suggestion_limit(query.limit);
        let hotels = HotelRepository::suggestions(db, term, destination, limit).await?;
        let summaries = Self::destination_summaries(db, &hotels).await?;

        Ok(hotels
            .iter()
            .map(|hotel| hotel.to_suggestion(summaries.get(&hotel.destination).cloned()))
            .collect())
    }

    /// Batched destination lookup keyed by id, one query per page of hotels.
    async fn destination_summaries(
        db: &Database,
        hotels: &[Hotel],
    ) -> Result<HashMap<ObjectId, DestinationSummary>, CatalogError> {
        let mut ids: Vec<ObjectId> = hotels.iter().map(|hotel| hotel.destination).collect();
        ids.sort_unstable();
        ids.dedup();

        let destinations = DestinationRepository::find_by_ids(db, &ids).await?;
        Ok(destinations
            .iter()
            .filter_map(|destination| destination.id.map(|id| (id, destination.summary())))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, ContactInfo, Coordinates, Currency, LocalizedText, PriceRange};

    // The driver connects lazily, so guard paths that return before any
    // query can run against a handle with no server behind it.
    async fn test_db() -> Database {
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        client.database("travel-app-tests")
    }

    fn valid_request_with_destination(destination: &str) -> CreateHotelRequest {
        CreateHotelRequest {
            name: "Harbor View".to_string(),
            destination: destination.to_string(),
            description: LocalizedText {
                en: "Quiet rooms over the old port.".to_string(),
                ar: "غرف هادئة تطل على الميناء القديم".to_string(),
            },
            address: Address {
                street: "1 Quay Street".to_string(),
                city: "Sydney".to_string(),
                postal_code: None,
            },
            coordinates: Coordinates {
                latitude: -33.8688,
                longitude: 151.2093,
            },
            contact: ContactInfo {
                phone: "+61 2 9250 3100".to_string(),
                email: "stay@harborview.example".to_string(),
                website: None,
            },
            amenities: vec![],
            star_rating: 4,
            price_range: PriceRange {
                min: 200.0,
                max: 600.0,
                currency: Currency::AUD,
            },
            room_types: vec![],
            nearby_attractions: vec![],
            images: vec![],
            availability: None,
        }
    }

    #[test]
    fn test_create_dangling_destination_is_not_found() {
        tokio_test::block_on(async {
            let db = test_db().await;
            let request = valid_request_with_destination("not-a-hex-id");
            match HotelService::create(&db, request).await {
                Err(CatalogError::DestinationNotFound) => {}
                other => panic!("expected DestinationNotFound, got {:?}", other.err()),
            }
        });
    }

    #[test]
    fn test_update_dangling_destination_is_not_found() {
        tokio_test::block_on(async {
            let db = test_db().await;
            let request: UpdateHotelRequest =
                serde_json::from_str(r#"{"destination":"not-a-hex-id"}"#).unwrap();
            match HotelService::update(&db, &ObjectId::new().to_hex(), request).await {
                Err(CatalogError::DestinationNotFound) => {}
                other => panic!("expected DestinationNotFound, got {:?}", other.err()),
            }
        });
    }

    #[test]
    fn test_suggestions_short_term_returns_empty() {
        tokio_test::block_on(async {
            let db = test_db().await;
            let query = HotelSuggestionQuery {
                q: Some(" r ".to_string()),
                destination: None,
                limit: None,
            };
            let suggestions = HotelService::suggestions(&db, query).await.unwrap();
            assert!(suggestions.is_empty());
        });
    }

    #[test]
    fn test_suggestions_reject_malformed_destination_filter() {
        tokio_test::block_on(async {
            let db = test_db().await;
            let query = HotelSuggestionQuery {
                q: Some("ritz".to_string()),
                destination: Some("not-a-hex-id".to_string()),
                limit: None,
            };
            match HotelService::suggestions(&db, query).await {
                Err(CatalogError::InvalidQuery(_)) => {}
                other => panic!("expected InvalidQuery, got {:?}", other.err()),
            }
        });
    }
}
