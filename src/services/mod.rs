// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod destination_service;
pub mod hotel_service;

pub use destination_service::*;
pub use hotel_service::*;

use mongodb::bson::oid::ObjectId;

use crate::errors::CatalogError;

/// Parse a path id. A malformed id cannot address any record, so it reports
/// the same way as a well-formed id that matches nothing.
pub(crate) fn parse_object_id(id: &str, not_found: &str) -> Result<ObjectId, CatalogError> {
    ObjectId::parse_str(id).map_err(|_| {
        log::warn!("Malformed object id in path: {}", id);
        CatalogError::NotFound(not_found.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_accepts_hex() {
        let id = ObjectId::new();
        let parsed = parse_object_id(&id.to_hex(), "Hotel not found").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_object_id_maps_malformed_to_not_found() {
        match parse_object_id("not-hex", "Hotel not found") {
            Err(CatalogError::NotFound(message)) => assert_eq!(message, "Hotel not found"),
            other => panic!("expected NotFound, got {:?}", other.err()),
        }
    }
}
