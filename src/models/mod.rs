// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod common;
pub mod destination;
pub mod hotel;
pub mod validation;

pub use common::*;
pub use destination::*;
pub use hotel::*;
