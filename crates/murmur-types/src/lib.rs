//! Types shared between the storage layer, the domain services and the HTTP surface.

pub mod api;
pub mod models;
