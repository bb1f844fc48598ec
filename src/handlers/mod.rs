// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod destinations;
pub mod health;
pub mod hotels;

pub use destinations::config as destinations_config;
pub use health::config as health_config;
pub use hotels::config as hotels_config;
