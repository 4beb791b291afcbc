//! Firestore backend
//!
//! Documents are written through the v1 REST API, authenticated with an
//! OAuth bearer token.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod value;

pub use client::FirestoreClient;
