//! Client-side data layer for the Nyxta hostel backend.
//!
//! Three pieces: a typed REST client ([`ApiClient`]), the branch
//! normalizer ([`normalize`]) that reconciles the backend's drifting
//! schema into [`nyxta_core::Branch`], and the gallery aggregator
//! ([`gallery`]) that cleans, deduplicates and filters gallery images.

mod client;
mod error;
pub mod gallery;
pub mod normalize;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
