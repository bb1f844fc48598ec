// src/db/destination_repository.rs
// DOCUMENTATION: Database access layer for destination documents
// PURPOSE: Abstract MongoDB operations from business logic

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::db::query::{self, PageWindow};
use crate::db::to_bson_value;
use crate::errors::CatalogError;
use crate::models::{Destination, DestinationListQuery, UpdateDestinationRequest};

const COLLECTION: &str = "destinations";

/// DestinationRepository: all database operations for destinations
pub struct DestinationRepository;

impl DestinationRepository {
    fn collection(db: &Database) -> Collection<Destination> {
        db.collection::<Destination>(COLLECTION)
    }

    /// Insert a new destination and return the stored document.
    /// Used by POST /api/destinations
    pub async fn insert(
        db: &Database,
        destination: Destination,
    ) -> Result<Destination, CatalogError> {
        let result = Self::collection(db)
            .insert_one(&destination)
            .await
            .map_err(|e| {
                log::error!("Failed to insert destination: {}", e);
                CatalogError::Database(e.to_string())
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            CatalogError::Database("insert did not return an ObjectId".to_string())
        })?;

        let created = Self::get_by_id(db, id).await?;
        log::info!("Created destination {} ({})", created.name, id.to_hex());
        Ok(created)
    }

    /// Fetch by id without translating absence into an error.
    /// Used by the hotel referential check, which reports absence as its own
    /// error type.
    pub async fn find_by_id(
        db: &Database,
        id: ObjectId,
    ) -> Result<Option<Destination>, CatalogError> {
        Self::collection(db)
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| {
                log::error!("Database error fetching destination {}: {}", id.to_hex(), e);
                CatalogError::Database(e.to_string())
            })
    }

    /// Fetch by id, 404 when missing. Soft-deleted records are still
    /// returned; only listings hide them.
    /// Used by GET /api/destinations/{id}
    pub async fn get_by_id(db: &Database, id: ObjectId) -> Result<Destination, CatalogError> {
        Self::find_by_id(db, id).await?.ok_or_else(|| {
            log::warn!("Destination not found: {}", id.to_hex());
            CatalogError::NotFound("Destination not found".to_string())
        })
    }

    /// Paged listing of active destinations with search and country filters.
    /// Returns (documents, total matching count) for pagination.
    /// Used by GET /api/destinations
    pub async fn list(
        db: &Database,
        query: &DestinationListQuery,
        window: &PageWindow,
    ) -> Result<(Vec<Destination>, u64), CatalogError> {
        let filter = query::destination_filter(query);
        let sort = query::sort_doc(
            query.sort_by.as_deref().unwrap_or("name"),
            query.sort_order.as_deref().unwrap_or("asc"),
        );
        let collection = Self::collection(db);

        let total = collection
            .count_documents(filter.clone())
            .await
            .map_err(|e| {
                log::error!("Destination count query failed: {}", e);
                CatalogError::Database(e.to_string())
            })?;

        let cursor = collection
            .find(filter)
            .sort(sort)
            .skip(window.skip)
            .limit(window.limit)
            .await
            .map_err(|e| {
                log::error!("Destination list query failed: {}", e);
                CatalogError::Database(e.to_string())
            })?;

        let destinations: Vec<Destination> = cursor.try_collect().await.map_err(|e| {
            log::error!("Destination cursor failed: {}", e);
            CatalogError::Database(e.to_string())
        })?;

        log::debug!(
            "Listed {} destinations (page {}, total {})",
            destinations.len(),
            window.page,
            total
        );
        Ok((destinations, total))
    }

    /// Case-insensitive duplicate probe on (name, country), spanning active
    /// and deactivated records.
    /// Used by POST /api/destinations
    pub async fn find_duplicate(
        db: &Database,
        name: &str,
        country: &str,
    ) -> Result<Option<Destination>, CatalogError> {
        Self::collection(db)
            .find_one(query::duplicate_destination_filter(name, country))
            .await
            .map_err(|e| {
                log::error!("Duplicate probe failed for {}/{}: {}", name, country, e);
                CatalogError::Database(e.to_string())
            })
    }

    /// Partial update: only fields present in the request are written.
    /// Used by PUT /api/destinations/{id}
    pub async fn update(
        db: &Database,
        id: ObjectId,
        update: &UpdateDestinationRequest,
    ) -> Result<Destination, CatalogError> {
        let mut set = Document::new();
        if let Some(name) = update.name.as_deref() {
            set.insert("name", name);
        }
        if let Some(country) = update.country.as_deref() {
            set.insert("country", country);
        }
        if let Some(description) = &update.description {
            set.insert("description", to_bson_value(description)?);
        }
        if let Some(coordinates) = &update.coordinates {
            set.insert("coordinates", to_bson_value(coordinates)?);
        }
        if let Some(image_url) = update.image_url.as_deref() {
            set.insert("imageUrl", image_url);
        }
        if let Some(climate) = &update.climate {
            set.insert("climate", to_bson_value(climate)?);
        }
        if let Some(best_time) = update.best_time_to_visit.as_deref() {
            set.insert("bestTimeToVisit", best_time);
        }
        if let Some(status) = &update.is_active {
            set.insert("isActive", status.is_active());
        }
        set.insert("updatedAt", BsonDateTime::now());

        let updated = Self::collection(db)
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| {
                log::error!("Update failed for destination {}: {}", id.to_hex(), e);
                CatalogError::Database(e.to_string())
            })?
            .ok_or_else(|| CatalogError::NotFound("Destination not found".to_string()))?;

        log::info!("Updated destination {}", id.to_hex());
        Ok(updated)
    }

    /// Soft delete: flips isActive to false, the document stays in place.
    /// Used by DELETE /api/destinations/{id}
    pub async fn soft_delete(db: &Database, id: ObjectId) -> Result<Destination, CatalogError> {
        let deleted = Self::collection(db)
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": { "isActive": false, "updatedAt": BsonDateTime::now() } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| {
                log::error!("Delete failed for destination {}: {}", id.to_hex(), e);
                CatalogError::Database(e.to_string())
            })?
            .ok_or_else(|| CatalogError::NotFound("Destination not found".to_string()))?;

        log::info!("Deactivated destination {}", id.to_hex());
        Ok(deleted)
    }

    /// Typeahead lookup over active destinations.
    /// Used by GET /api/destinations/search/suggestions
    pub async fn suggestions(
        db: &Database,
        term: &str,
        limit: i64,
    ) -> Result<Vec<Destination>, CatalogError> {
        let cursor = Self::collection(db)
            .find(query::destination_suggestion_filter(term))
            .limit(limit)
            .await
            .map_err(|e| {
                log::error!("Destination suggestion query failed: {}", e);
                CatalogError::Database(e.to_string())
            })?;

        cursor.try_collect().await.map_err(|e| {
            log::error!("Destination suggestion cursor failed: {}", e);
            CatalogError::Database(e.to_string())
        })
    }

    /// Batched fetch used to embed destination summaries into hotel lists.
    pub async fn find_by_ids(
        db: &Database,
        ids: &[ObjectId],
    ) -> Result<Vec<Destination>, CatalogError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let cursor = Self::collection(db)
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await
            .map_err(|e| {
                log::error!("Destination batch query failed: {}", e);
                CatalogError::Database(e.to_string())
            })?;

        cursor.try_collect().await.map_err(|e| {
            log::error!("Destination batch cursor failed: {}", e);
            CatalogError::Database(e.to_string())
        })
    }
}
