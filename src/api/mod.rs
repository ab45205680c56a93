//! Museum API collaborators: the catalog loader and IIIF image URLs.

pub mod client;
pub mod iiif;

pub use client::{fetch_artworks, fetch_image, ApiError, ApiResult};
