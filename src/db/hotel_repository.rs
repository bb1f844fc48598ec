// src/db/hotel_repository.rs
// DOCUMENTATION: Database access layer for hotel documents
// PURPOSE: Abstract MongoDB operations from business logic, including the
// aggregation that feeds destination hotel counts

use std::collections::HashMap;

use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, DateTime as BsonDateTime, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

use crate::db::query::{self, PageWindow};
use crate::db::to_bson_value;
use crate::errors::CatalogError;
use crate::models::{Hotel, HotelListQuery, HotelsByDestinationQuery, UpdateHotelRequest};

const COLLECTION: &str = "hotels";

/// HotelRepository: all database operations for hotels
pub struct HotelRepository;

impl HotelRepository {
    fn collection(db: &Database) -> Collection<Hotel> {
        db.collection::<Hotel>(COLLECTION)
    }

    /// Insert a new hotel and return the stored document.
    /// Used by POST /api/hotels
    pub async fn insert(db: &Database, hotel: Hotel) -> Result<Hotel, CatalogError> {
        let result = Self::collection(db).insert_one(&hotel).await.map_err(|e| {
            log::error!("Failed to insert hotel: {}", e);
            CatalogError::Database(e.to_string())
        })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            CatalogError::Database("insert did not return an ObjectId".to_string())
        })?;

        let created = Self::get_by_id(db, id).await?;
        log::info!("Created hotel {} ({})", created.name, id.to_hex());
        Ok(created)
    }

    pub async fn find_by_id(db: &Database, id: ObjectId) -> Result<Option<Hotel>, CatalogError> {
        Self::collection(db)
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| {
                log::error!("Database error fetching hotel {}: {}", id.to_hex(), e);
                CatalogError::Database(e.to_string())
            })
    }

    /// Fetch by id, 404 when missing. Soft-deleted hotels are still
    /// returned on direct reads.
    /// Used by GET /api/hotels/{id}
    pub async fn get_by_id(db: &Database, id: ObjectId) -> Result<Hotel, CatalogError> {
        Self::find_by_id(db, id).await?.ok_or_else(|| {
            log::warn!("Hotel not found: {}", id.to_hex());
            CatalogError::NotFound("Hotel not found".to_string())
        })
    }

    /// Paged listing of active hotels with the full filter set: search,
    /// destination, price band, star floor and amenities.
    /// Returns (documents, total matching count) for pagination.
    /// Used by GET /api/hotels
    pub async fn list(
        db: &Database,
        query: &HotelListQuery,
        window: &PageWindow,
    ) -> Result<(Vec<Hotel>, u64), CatalogError> {
        let filter = query::hotel_filter(query)?;
        let sort = query::sort_doc(
            query.sort_by.as_deref().unwrap_or("name"),
            query.sort_order.as_deref().unwrap_or("asc"),
        );
        Self::page(db, filter, sort, window).await
    }

    /// Paged listing of the active hotels of one destination, best rated
    /// first unless the caller overrides the sort.
    /// Used by GET /api/hotels/destination/{destinationId}
    pub async fn list_for_destination(
        db: &Database,
        destination: ObjectId,
        query: &HotelsByDestinationQuery,
        window: &PageWindow,
    ) -> Result<(Vec<Hotel>, u64), CatalogError> {
        let filter = query::active_hotels_filter(destination);
        let sort = query::sort_doc(
            query.sort_by.as_deref().unwrap_or("starRating"),
            query.sort_order.as_deref().unwrap_or("desc"),
        );
        Self::page(db, filter, sort, window).await
    }

    async fn page(
        db: &Database,
        filter: Document,
        sort: Document,
        window: &PageWindow,
    ) -> Result<(Vec<Hotel>, u64), CatalogError> {
        let collection = Self::collection(db);

        let total = collection
            .count_documents(filter.clone())
            .await
            .map_err(|e| {
                log::error!("Hotel count query failed: {}", e);
                CatalogError::Database(e.to_string())
            })?;

        let cursor = collection
            .find(filter)
            .sort(sort)
            .skip(window.skip)
            .limit(window.limit)
            .await
            .map_err(|e| {
                log::error!("Hotel list query failed: {}", e);
                CatalogError::Database(e.to_string())
            })?;

        let hotels: Vec<Hotel> = cursor.try_collect().await.map_err(|e| {
            log::error!("Hotel cursor failed: {}", e);
            CatalogError::Database(e.to_string())
        })?;

        log::debug!(
            "Listed {} hotels (page {}, total {})",
            hotels.len(),
            window.page,
            total
        );
        Ok((hotels, total))
    }

    /// Partial update: only fields present in the request are written. The
    /// destination reference arrives pre-resolved because the service has
    /// already verified it exists.
    /// Used by PUT /api/hotels/{id}
    pub async fn update(
        db: &Database,
        id: ObjectId,
        update: &UpdateHotelRequest,
        destination: Option<ObjectId>,
    ) -> Result<Hotel, CatalogError> {
        let mut set = Document::new();
        if let Some(name) = update.name.as_deref() {
            set.insert("name", name);
        }
        if let Some(destination) = destination {
            set.insert("destination", destination);
        }
        if let Some(description) = &update.description {
            set.insert("description", to_bson_value(description)?);
        }
        if let Some(address) = &update.address {
            set.insert("address", to_bson_value(address)?);
        }
        if let Some(coordinates) = &update.coordinates {
            set.insert("coordinates", to_bson_value(coordinates)?);
        }
        if let Some(contact) = &update.contact {
            set.insert("contact", to_bson_value(contact)?);
        }
        if let Some(amenities) = &update.amenities {
            set.insert("amenities", to_bson_value(amenities)?);
        }
        if let Some(star_rating) = update.star_rating {
            set.insert("starRating", star_rating);
        }
        if let Some(price_range) = &update.price_range {
            set.insert("priceRange", to_bson_value(price_range)?);
        }
        if let Some(room_types) = &update.room_types {
            set.insert("roomTypes", to_bson_value(room_types)?);
        }
        if let Some(attractions) = &update.nearby_attractions {
            set.insert("nearbyAttractions", to_bson_value(attractions)?);
        }
        if let Some(images) = &update.images {
            set.insert("images", to_bson_value(images)?);
        }
        if let Some(availability) = &update.availability {
            set.insert("availability", to_bson_value(availability)?);
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
                log::error!("Update failed for hotel {}: {}", id.to_hex(), e);
                CatalogError::Database(e.to_string())
            })?
            .ok_or_else(|| CatalogError::NotFound("Hotel not found".to_string()))?;

        log::info!("Updated hotel {}", id.to_hex());
        Ok(updated)
    }

    /// Soft delete: flips isActive to false, the document stays in place.
    /// Used by DELETE /api/hotels/{id}
    pub async fn soft_delete(db: &Database, id: ObjectId) -> Result<Hotel, CatalogError> {
        let deleted = Self::collection(db)
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": { "isActive": false, "updatedAt": BsonDateTime::now() } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| {
                log::error!("Delete failed for hotel {}: {}", id.to_hex(), e);
                CatalogError::Database(e.to_string())
            })?
            .ok_or_else(|| CatalogError::NotFound("Hotel not found".to_string()))?;

        log::info!("Deactivated hotel {}", id.to_hex());
        Ok(deleted)
    }

    /// Typeahead lookup over active hotels, optionally scoped to one
    /// destination.
    /// Used by GET /api/hotels/search/suggestions
    pub async fn suggestions(
        db: &Database,
        term: &str,
        destination: Option<ObjectId>,
        limit: i64,
    ) -> Result<Vec<Hotel>, CatalogError> {
        let cursor = Self::collection(db)
            .find(query::hotel_suggestion_filter(term, destination))
            .limit(limit)
            .await
            .map_err(|e| {
                log::error!("Hotel suggestion query failed: {}", e);
                CatalogError::Database(e.to_string())
            })?;

        cursor.try_collect().await.map_err(|e| {
            log::error!("Hotel suggestion cursor failed: {}", e);
            CatalogError::Database(e.to_string())
        })
    }

    /// Number of active hotels in one destination. Feeds the hotelCount
    /// field on destination detail responses.
    pub async fn count_active_for_destination(
        db: &Database,
        destination: ObjectId,
    ) -> Result<u64, CatalogError> {
        Self::collection(db)
            .count_documents(query::active_hotels_filter(destination))
            .await
            .map_err(|e| {
                log::error!(
                    "Hotel count failed for destination {}: {}",
                    destination.to_hex(),
                    e
                );
                CatalogError::Database(e.to_string())
            })
    }

    /// Active-hotel counts for a batch of destinations in one aggregation,
    /// so a destination listing does not issue a count per row. Destinations
    /// without hotels are simply absent from the map.
    pub async fn count_active_by_destination(
        db: &Database,
        destinations: &[ObjectId],
    ) -> Result<HashMap<ObjectId, i64>, CatalogError> {
        if destinations.is_empty() {
            return Ok(HashMap::new());
        }

        let pipeline = vec![
            doc! { "$match": {
                "destination": { "$in": destinations.to_vec() },
                "isActive": true,
            } },
            doc! { "$group": { "_id": "$destination", "count": { "$sum": 1 } } },
        ];

        let mut cursor = Self::collection(db).aggregate(pipeline).await.map_err(|e| {
            log::error!("Hotel count aggregation failed: {}", e);
            CatalogError::Database(e.to_string())
        })?;

        let mut counts = HashMap::new();
        while let Some(entry) = cursor.try_next().await.map_err(|e| {
            log::error!("Hotel count cursor failed: {}", e);
            CatalogError::Database(e.to_string())
        })? {
            if let Ok(id) = entry.get_object_id("_id") {
                let count = match entry.get("count") {
                    Some(Bson::Int32(n)) => i64::from(*n),
                    Some(Bson::Int64(n)) => *n,
                    _ => 0,
                };
                counts.insert(id, count);
            }
        }
        Ok(counts)
    }
}
