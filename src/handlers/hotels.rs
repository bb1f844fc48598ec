// src/handlers/hotels.rs
// DOCUMENTATION: HTTP handlers for hotel operations
// PURPOSE: Parse requests, call services, return enveloped responses

use actix_web::{web, HttpResponse, Responder};
use mongodb::Database;

use crate::errors::CatalogError;
use crate::models::{
    CreateHotelRequest, HotelListQuery, HotelSuggestionQuery, HotelsByDestinationQuery,
    HotelsByDestinationResponse, ItemResponse, ListResponse, MessageResponse, UpdateHotelRequest,
};
use crate::services::HotelService;

/// GET /api/hotels
/// Paged listing of active hotels with search, price, star and amenity filters
pub async fn list_hotels(
    db: web::Data<Database>,
    query: web::Query<HotelListQuery>,
) -> Result<impl Responder, CatalogError> {
    let (data, pagination) = HotelService::list(db.get_ref(), query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ListResponse {
        success: true,
        data,
        pagination,
    }))
}

/// GET /api/hotels/{id}
/// Single hotel with its destination embedded, soft-deleted ones included
pub async fn get_hotel(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<impl Responder, CatalogError> {
    let hotel = HotelService::get(db.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ItemResponse::new(hotel)))
}

/// GET /api/hotels/destination/{destinationId}
/// Active hotels of one destination, best rated first
pub async fn hotels_by_destination(
    db: web::Data<Database>,
    path: web::Path<String>,
    query: web::Query<HotelsByDestinationQuery>,
) -> Result<impl Responder, CatalogError> {
    let (destination, data, pagination) =
        HotelService::list_for_destination(db.get_ref(), &path.into_inner(), query.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(HotelsByDestinationResponse {
        success: true,
        data,
        destination,
        pagination,
    }))
}

/// POST /api/hotels
/// Create a hotel referencing an existing destination
pub async fn create_hotel(
    db: web::Data<Database>,
    body: web::Json<CreateHotelRequest>,
) -> Result<impl Responder, CatalogError> {
    let hotel = HotelService::create(db.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ItemResponse::with_message(
        hotel,
        "Hotel created successfully",
    )))
}

/// PUT /api/hotels/{id}
/// Partial update of a hotel
pub async fn update_hotel(
    db: web::Data<Database>,
    path: web::Path<String>,
    body: web::Json<UpdateHotelRequest>,
) -> Result<impl Responder, CatalogError> {
    let hotel = HotelService::update(db.get_ref(), &path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ItemResponse::with_message(
        hotel,
        "Hotel updated successfully",
    )))
}

/// DELETE /api/hotels/{id}
/// Soft delete a hotel
pub async fn delete_hotel(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<impl Responder, CatalogError> {
    HotelService::delete(db.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Hotel deleted successfully")))
}

/// GET /api/hotels/search/suggestions
/// Typeahead lookup by hotel name or city, optionally scoped to a destination
pub async fn hotel_suggestions(
    db: web::Data<Database>,
    query: web::Query<HotelSuggestionQuery>,
) -> Result<impl Responder, CatalogError> {
    let suggestions = HotelService::suggestions(db.get_ref(), query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ItemResponse::new(suggestions)))
}

/// Configuration for hotel routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/hotels")
            .route("", web::get().to(list_hotels))
            .route("", web::post().to(create_hotel))
            .route("/search/suggestions", web::get().to(hotel_suggestions))
            .route("/destination/{destinationId}", web::get().to(hotels_by_destination))
            .route("/{id}", web::get().to(get_hotel))
            .route("/{id}", web::put().to(update_hotel))
            .route("/{id}", web::delete().to(delete_hotel)),
    );
}
