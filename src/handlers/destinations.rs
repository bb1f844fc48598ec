// src/handlers/destinations.rs
// DOCUMENTATION: HTTP handlers for destination operations
// PURPOSE: Parse requests, call services, return enveloped responses

use actix_web::{web, HttpResponse, Responder};
use mongodb::Database;

use crate::errors::CatalogError;
use crate::models::{
    CreateDestinationRequest, DestinationListQuery, DestinationSuggestionQuery, ItemResponse,
    ListResponse, MessageResponse, UpdateDestinationRequest,
};
use crate::services::DestinationService;

/// GET /api/destinations
/// Paged listing of active destinations with search, country filter and sort
pub async fn list_destinations(
    db: web::Data<Database>,
    query: web::Query<DestinationListQuery>,
) -> Result<impl Responder, CatalogError> {
    let (data, pagination) = DestinationService::list(db.get_ref(), query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ListResponse {
        success: true,
        data,
        pagination,
    }))
}

/// GET /api/destinations/{id}
/// Single destination, soft-deleted ones included
pub async fn get_destination(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<impl Responder, CatalogError> {
    let destination = DestinationService::get(db.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ItemResponse::new(destination)))
}

/// POST /api/destinations
/// Create a destination
pub async fn create_destination(
    db: web::Data<Database>,
    body: web::Json<CreateDestinationRequest>,
) -> Result<impl Responder, CatalogError> {
    let destination = DestinationService::create(db.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ItemResponse::with_message(
        destination,
        "Destination created successfully",
    )))
}

/// PUT /api/destinations/{id}
/// Partial update of a destination
pub async fn update_destination(
    db: web::Data<Database>,
    path: web::Path<String>,
    body: web::Json<UpdateDestinationRequest>,
) -> Result<impl Responder, CatalogError> {
    let destination =
        DestinationService::update(db.get_ref(), &path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ItemResponse::with_message(
        destination,
        "Destination updated successfully",
    )))
}

/// DELETE /api/destinations/{id}
/// Soft delete a destination
pub async fn delete_destination(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> Result<impl Responder, CatalogError> {
    DestinationService::delete(db.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Destination deleted successfully")))
}

/// GET /api/destinations/search/suggestions
/// Typeahead lookup by name or country
pub async fn destination_suggestions(
    db: web::Data<Database>,
    query: web::Query<DestinationSuggestionQuery>,
) -> Result<impl Responder, CatalogError> {
    let suggestions = DestinationService::suggestions(db.get_ref(), query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ItemResponse::new(suggestions)))
}

/// Configuration for destination routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/destinations")
            .route("", web::get().to(list_destinations))
            .route("", web::post().to(create_destination))
            .route("/search/suggestions", web::get().to(destination_suggestions))
            .route("/{id}", web::get().to(get_destination))
            .route("/{id}", web::put().to(update_destination))
            .route("/{id}", web::delete().to(delete_destination)),
    );
}
