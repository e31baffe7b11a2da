//! Image URLs
//!
//! Catalog image paths are relative; the CDN serves them under a size tag.

use std::fmt;

/// TMDB image size tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    /// Carousel tiles
    W500,
    /// Poster fallback in the detail panel
    W780,
    /// Banner and detail cover
    #[default]
    Original,
}

impl ImageSize {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::Original => "original",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute URL for an image path, or `None` when the path is empty
pub fn image_url(base: &str, path: &str, size: ImageSize) -> Option<String> {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return None;
    }
    let base = base.trim_end_matches('/');
    Some(format!("{}/{}/{}", base, size, path))
}

/// CSS `background-image` value: optional gradient layered over the image
pub fn background_image(gradient: Option<&str>, url: Option<&str>) -> String {
    match (gradient, url) {
        (Some(g), Some(u)) => format!("background-image: {}, url({});", g, u),
        (None, Some(u)) => format!("background-image: url({});", u),
        (Some(g), None) => format!("background-image: {};", g),
        (None, None) => String::new(),
    }
}
