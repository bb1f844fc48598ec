// src/services/destination_service.rs
// DOCUMENTATION: Business logic for destinations
// PURPOSE: Normalization, validation and duplicate checks between handlers
// and repository

use mongodb::bson::oid::ObjectId;
use mongodb::Database;

use crate::db::{query, DestinationRepository, HotelRepository};
use crate::errors::CatalogError;
use crate::models::validation::validate_request;
use crate::models::{
    CreateDestinationRequest, Destination, DestinationListQuery, DestinationResponse,
    DestinationSuggestion, DestinationSuggestionQuery, PaginationMeta, UpdateDestinationRequest,
};
use crate::services::parse_object_id;

const NOT_FOUND: &str = "Destination not found";
const DUPLICATE: &str = "Destination with this name and country already exists";

pub struct DestinationService;

impl DestinationService {
    /// Create a destination. The payload is canonicalized before validation
    /// so the duplicate probe sees the same casing the store will.
    pub async fn create(
        db: &Database,
        mut request: CreateDestinationRequest,
    ) -> Result<DestinationResponse, CatalogError> {
        request.normalize();
        validate_request(&request)?;

        let duplicate =
            DestinationRepository::find_duplicate(db, &request.name, &request.country).await?;
        if let Some(existing) = duplicate {
            log::warn!(
                "Rejected duplicate destination {}/{} (existing {})",
                request.name,
                request.country,
                existing.id.map(|id| id.to_hex()).unwrap_or_default()
            );
            return Err(CatalogError::Conflict(DUPLICATE.to_string()));
        }

        let destination =
            DestinationRepository::insert(db, Destination::from_request(request)).await?;
        // brand new destination, no hotels can reference it yet
        Ok(destination.to_response(0))
    }

    /// Paged listing of active destinations, each with its hotelCount.
    pub async fn list(
        db: &Database,
        query: DestinationListQuery,
    ) -> Result<(Vec<DestinationResponse>, PaginationMeta), CatalogError> {
        let window = query::page_window(query.page, query.limit);
        let (destinations, total) = DestinationRepository::list(db, &query, &window).await?;

        let ids: Vec<ObjectId> = destinations.iter().filter_map(|d| d.id).collect();
        let counts = HotelRepository::count_active_by_destination(db, &ids).await?;

        let data = destinations
            .iter()
            .map(|destination| {
                let count = destination
                    .id
                    .and_then(|id| counts.get(&id).copied())
                    .unwrap_or(0);
                destination.to_response(count)
            })
            .collect();

        Ok((data, PaginationMeta::new(window.page, window.limit, total)))
    }

    /// Single destination by id. Serves deactivated records too, so admin
    /// tooling can still inspect them.
    pub async fn get(db: &Database, id: &str) -> Result<DestinationResponse, CatalogError> {
        let object_id = parse_object_id(id, NOT_FOUND)?;
        let destination = DestinationRepository::get_by_id(db, object_id).await?;
        let count = HotelRepository::count_active_for_destination(db, object_id).await?;
        Ok(destination.to_response(count as i64))
    }

    /// Partial update. Supplied fields go through the same normalization and
    /// validation as creation, so an update can never corrupt a record.
    pub async fn update(
        db: &Database,
        id: &str,
        mut request: UpdateDestinationRequest,
    ) -> Result<DestinationResponse, CatalogError> {
        let object_id = parse_object_id(id, NOT_FOUND)?;
        request.normalize();
        validate_request(&request)?;

        let destination = DestinationRepository::update(db, object_id, &request).await?;
        let count = HotelRepository::count_active_for_destination(db, object_id).await?;
        Ok(destination.to_response(count as i64))
    }

    /// Soft delete. Hotels referencing the destination are left untouched.
    pub async fn delete(db: &Database, id: &str) -> Result<(), CatalogError> {
        let object_id = parse_object_id(id, NOT_FOUND)?;
        DestinationRepository::soft_delete(db, object_id).await?;
        Ok(())
    }

    /// Typeahead suggestions. Terms shorter than two characters return an
    /// empty list instead of an error so clients can fire on every keystroke.
    pub async fn suggestions(
        db: &Database,
        query: DestinationSuggestionQuery,
    ) -> Result<Vec<DestinationSuggestion>, CatalogError> {
        let term = query.q.as_deref().map(str::trim).unwrap_or("");
        if term.chars().count() < 2 {
            return Ok(Vec::new());
        }

        let limit = query::suggestion_limit(query.limit);
        let destinations = DestinationRepository::suggestions(db, term, limit).await?;
        Ok(destinations.iter().map(Destination::to_suggestion).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The driver connects lazily, so guard paths that return before any
    // query can run against a handle with no server behind it.
    async fn test_db() -> Database {
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        client.database("travel-app-tests")
    }

    #[test]
    fn test_suggestions_short_term_returns_empty() {
        tokio_test::block_on(async {
            let db = test_db().await;
            let query = DestinationSuggestionQuery {
                q: Some("p".to_string()),
                limit: None,
            };
            let suggestions = DestinationService::suggestions(&db, query).await.unwrap();
            assert!(suggestions.is_empty());

            let blank = DestinationSuggestionQuery::default();
            let suggestions = DestinationService::suggestions(&db, blank).await.unwrap();
            assert!(suggestions.is_empty());
        });
    }

    #[test]
    fn test_get_maps_malformed_id_to_not_found() {
        tokio_test::block_on(async {
            let db = test_db().await;
            match DestinationService::get(&db, "not-a-hex-id").await {
                Err(CatalogError::NotFound(message)) => {
                    assert_eq!(message, "Destination not found");
                }
                other => panic!("expected NotFound, got {:?}", other.err()),
            }
        });
    }
}
