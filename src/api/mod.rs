//! Catalog API
//!
//! Client for the TMDB list endpoints and image URL helpers.

mod image;
mod movies;

pub use image::*;
pub use movies::*;
