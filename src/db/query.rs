// src/db/query.rs
// DOCUMENTATION: MongoDB filter and sort document builders
// PURPOSE: Translate request query parameters into BSON filters shared by
// the repositories

use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::errors::CatalogError;
use crate::models::{DestinationListQuery, HotelListQuery};

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;
pub const DEFAULT_SUGGESTION_LIMIT: i64 = 5;

/// Resolved pagination window. `skip` is precomputed for the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
    pub skip: u64,
}

/// Clamp raw pagination parameters into a usable window. Pages below one
/// are lifted to one, the limit is capped so a single request cannot pull
/// the whole collection.
pub fn page_window(page: Option<i64>, limit: Option<i64>) -> PageWindow {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    PageWindow {
        page,
        limit,
        skip: page.saturating_sub(1).saturating_mul(limit) as u64,
    }
}

pub fn suggestion_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT).clamp(1, MAX_PAGE_SIZE)
}

/// Sort specification for a cursor. Any stored field path is accepted,
/// including dotted ones such as `priceRange.min`. Descending only on an
/// explicit `desc`.
pub fn sort_doc(sort_by: &str, sort_order: &str) -> Document {
    let direction = if sort_order == "desc" { -1 } else { 1 };
    doc! { sort_by: direction }
}

/// Filter for GET /api/destinations. Soft-deleted records are always
/// excluded; search runs case-insensitively over name, country and both
/// description languages.
pub fn destination_filter(query: &DestinationListQuery) -> Document {
    let mut filter = doc! { "isActive": true };

    if let Some(search) = non_empty(&query.search) {
        filter.insert(
            "$or",
            vec![
                doc! { "name": { "$regex": search, "$options": "i" } },
                doc! { "country": { "$regex": search, "$options": "i" } },
                doc! { "description.en": { "$regex": search, "$options": "i" } },
                doc! { "description.ar": { "$regex": search, "$options": "i" } },
            ],
        );
    }

    if let Some(country) = non_empty(&query.country) {
        filter.insert("country", doc! { "$regex": country, "$options": "i" });
    }

    filter
}

/// Filter for GET /api/hotels. Fails with InvalidQuery when the destination
/// parameter is not a well-formed document id.
pub fn hotel_filter(query: &HotelListQuery) -> Result<Document, CatalogError> {
    let mut filter = doc! { "isActive": true };

    if let Some(destination) = non_empty(&query.destination) {
        let id = ObjectId::parse_str(destination).map_err(|_| {
            CatalogError::InvalidQuery("destination must be a valid destination id".to_string())
        })?;
        filter.insert("destination", id);
    }

    if let Some(search) = non_empty(&query.search) {
        filter.insert(
            "$or",
            vec![
                doc! { "name": { "$regex": search, "$options": "i" } },
                doc! { "description.en": { "$regex": search, "$options": "i" } },
                doc! { "description.ar": { "$regex": search, "$options": "i" } },
                doc! { "address.city": { "$regex": search, "$options": "i" } },
            ],
        );
    }

    // Both price bounds apply to the low end of the hotel's band, so the
    // filter answers "starts within this budget"
    if query.min_price.is_some() || query.max_price.is_some() {
        let mut bounds = Document::new();
        if let Some(min) = query.min_price {
            bounds.insert("$gte", min);
        }
        if let Some(max) = query.max_price {
            bounds.insert("$lte", max);
        }
        filter.insert("priceRange.min", bounds);
    }

    if let Some(stars) = query.star_rating {
        filter.insert("starRating", doc! { "$gte": stars });
    }

    if let Some(raw) = non_empty(&query.amenities) {
        let amenities: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .collect();
        if !amenities.is_empty() {
            filter.insert("amenities", doc! { "$in": amenities });
        }
    }

    Ok(filter)
}

/// Typeahead filter over active destinations by name or country prefix of
/// the typed term (substring match, case-insensitive).
pub fn destination_suggestion_filter(term: &str) -> Document {
    doc! {
        "isActive": true,
        "$or": [
            { "name": { "$regex": term, "$options": "i" } },
            { "country": { "$regex": term, "$options": "i" } },
        ],
    }
}

/// Typeahead filter over active hotels by name or city, optionally scoped
/// to one destination.
pub fn hotel_suggestion_filter(term: &str, destination: Option<ObjectId>) -> Document {
    let mut filter = doc! {
        "isActive": true,
        "$or": [
            { "name": { "$regex": term, "$options": "i" } },
            { "address.city": { "$regex": term, "$options": "i" } },
        ],
    };
    if let Some(id) = destination {
        filter.insert("destination", id);
    }
    filter
}

/// Case-insensitive exact match on (name, country), used to reject duplicate
/// destinations. The probe deliberately ignores isActive so a deactivated
/// "Paris, France" still blocks a new one. Regex metacharacters in the stored
/// values are escaped before anchoring.
pub fn duplicate_destination_filter(name: &str, country: &str) -> Document {
    doc! {
        "name": { "$regex": format!("^{}$", regex::escape(name)), "$options": "i" },
        "country": { "$regex": format!("^{}$", regex::escape(country)), "$options": "i" },
    }
}

/// Active hotels belonging to one destination, shared by the hotel listing
/// and the destination's hotelCount.
pub fn active_hotels_filter(destination: ObjectId) -> Document {
    doc! { "destination": destination, "isActive": true }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    #[test]
    fn test_page_window_defaults() {
        let window = page_window(None, None);
        assert_eq!(window.page, 1);
        assert_eq!(window.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(window.skip, 0);
    }

    #[test]
    fn test_page_window_skip_math() {
        let window = page_window(Some(3), Some(20));
        assert_eq!(window.skip, 40);
        assert_eq!(window.limit, 20);
    }

    #[test]
    fn test_page_window_clamps_out_of_range_values() {
        let window = page_window(Some(0), Some(5000));
        assert_eq!(window.page, 1);
        assert_eq!(window.limit, MAX_PAGE_SIZE);

        let window = page_window(Some(-2), Some(0));
        assert_eq!(window.page, 1);
        assert_eq!(window.limit, 1);
    }

    #[test]
    fn test_page_window_huge_page_saturates() {
        let window = page_window(Some(i64::MAX), Some(50));
        assert_eq!(window.page, i64::MAX);
        assert_eq!(window.skip, i64::MAX as u64);
    }

    #[test]
    fn test_suggestion_limit_default() {
        assert_eq!(suggestion_limit(None), DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(suggestion_limit(Some(8)), 8);
        assert_eq!(suggestion_limit(Some(1000)), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_sort_doc_directions() {
        assert_eq!(sort_doc("name", "asc"), doc! { "name": 1 });
        assert_eq!(sort_doc("starRating", "desc"), doc! { "starRating": -1 });
        // anything other than desc sorts ascending
        assert_eq!(sort_doc("priceRange.min", "downward"), doc! { "priceRange.min": 1 });
    }

    #[test]
    fn test_destination_filter_always_scopes_to_active() {
        let filter = destination_filter(&DestinationListQuery::default());
        assert_eq!(filter, doc! { "isActive": true });
    }

    #[test]
    fn test_destination_filter_search_spans_bilingual_fields() {
        let query = DestinationListQuery {
            search: Some("paris".to_string()),
            ..Default::default()
        };
        let filter = destination_filter(&query);
        let branches = filter.get_array("$or").unwrap();
        assert_eq!(branches.len(), 4);
        assert_eq!(
            branches[2],
            Bson::Document(doc! { "description.en": { "$regex": "paris", "$options": "i" } })
        );
        assert_eq!(
            branches[3],
            Bson::Document(doc! { "description.ar": { "$regex": "paris", "$options": "i" } })
        );
    }

    #[test]
    fn test_destination_filter_ignores_blank_search() {
        let query = DestinationListQuery {
            search: Some("   ".to_string()),
            country: Some(String::new()),
            ..Default::default()
        };
        let filter = destination_filter(&query);
        assert_eq!(filter, doc! { "isActive": true });
    }

    #[test]
    fn test_destination_filter_country() {
        let query = DestinationListQuery {
            country: Some("France".to_string()),
            ..Default::default()
        };
        let filter = destination_filter(&query);
        assert_eq!(
            filter.get_document("country").unwrap(),
            &doc! { "$regex": "France", "$options": "i" }
        );
    }

    #[test]
    fn test_hotel_filter_price_band() {
        let query = HotelListQuery {
            min_price: Some(100.0),
            max_price: Some(300.0),
            ..Default::default()
        };
        let filter = hotel_filter(&query).unwrap();
        assert_eq!(
            filter.get_document("priceRange.min").unwrap(),
            &doc! { "$gte": 100.0, "$lte": 300.0 }
        );
    }

    #[test]
    fn test_hotel_filter_single_price_bound() {
        let query = HotelListQuery {
            max_price: Some(250.0),
            ..Default::default()
        };
        let filter = hotel_filter(&query).unwrap();
        assert_eq!(
            filter.get_document("priceRange.min").unwrap(),
            &doc! { "$lte": 250.0 }
        );
    }

    #[test]
    fn test_hotel_filter_star_rating_is_a_floor() {
        let query = HotelListQuery {
            star_rating: Some(4),
            ..Default::default()
        };
        let filter = hotel_filter(&query).unwrap();
        assert_eq!(
            filter.get_document("starRating").unwrap(),
            &doc! { "$gte": 4_i64 }
        );
    }

    #[test]
    fn test_hotel_filter_amenities_list() {
        let query = HotelListQuery {
            amenities: Some("WiFi, Pool ,Spa".to_string()),
            ..Default::default()
        };
        let filter = hotel_filter(&query).unwrap();
        assert_eq!(
            filter.get_document("amenities").unwrap(),
            &doc! { "$in": ["WiFi", "Pool", "Spa"] }
        );
    }

    #[test]
    fn test_hotel_filter_destination_id() {
        let id = ObjectId::new();
        let query = HotelListQuery {
            destination: Some(id.to_hex()),
            ..Default::default()
        };
        let filter = hotel_filter(&query).unwrap();
        assert_eq!(filter.get_object_id("destination").unwrap(), id);
    }

    #[test]
    fn test_hotel_filter_rejects_malformed_destination_id() {
        let query = HotelListQuery {
            destination: Some("not-an-id".to_string()),
            ..Default::default()
        };
        match hotel_filter(&query) {
            Err(CatalogError::InvalidQuery(_)) => {}
            other => panic!("expected InvalidQuery, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_hotel_filter_search_includes_city() {
        let query = HotelListQuery {
            search: Some("beach".to_string()),
            ..Default::default()
        };
        let filter = hotel_filter(&query).unwrap();
        let branches = filter.get_array("$or").unwrap();
        assert_eq!(
            branches[3],
            Bson::Document(doc! { "address.city": { "$regex": "beach", "$options": "i" } })
        );
    }

    #[test]
    fn test_duplicate_filter_escapes_and_anchors() {
        let filter = duplicate_destination_filter("St. Barth (FWI)", "France");
        let name = filter.get_document("name").unwrap();
        assert_eq!(
            name.get_str("$regex").unwrap(),
            r"^St\. Barth \(FWI\)$"
        );
        assert_eq!(name.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_active_hotels_filter() {
        let id = ObjectId::new();
        let filter = active_hotels_filter(id);
        assert_eq!(filter, doc! { "destination": id, "isActive": true });
    }

    #[test]
    fn test_hotel_suggestion_filter_scoped_to_destination() {
        let id = ObjectId::new();
        let filter = hotel_suggestion_filter("ritz", Some(id));
        assert_eq!(filter.get_object_id("destination").unwrap(), id);
        assert!(filter.get_array("$or").is_ok());

        let unscoped = hotel_suggestion_filter("ritz", None);
        assert!(unscoped.get_object_id("destination").is_err());
    }
}
