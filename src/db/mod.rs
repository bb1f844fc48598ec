// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod destination_repository;
pub mod hotel_repository;
pub mod query;

pub use destination_repository::*;
pub use hotel_repository::*;

use mongodb::bson::{self, Bson};
use serde::Serialize;

use crate::errors::CatalogError;

/// Serialize a model value into BSON for a `$set` document.
pub(crate) fn to_bson_value<T: Serialize>(value: &T) -> Result<Bson, CatalogError> {
    bson::to_bson(value).map_err(|e| {
        log::error!("BSON serialization failed: {}", e);
        CatalogError::Database(e.to_string())
    })
}
