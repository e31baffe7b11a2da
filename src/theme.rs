//! Theme
//!
//! Palette as CSS custom properties, plus the carousel motion rules.

use leptos_carousel::Variant;

pub struct Palette {
    pub red: &'static str,
    pub black_very_dark: &'static str,
    pub black_darker: &'static str,
    pub black_lighter: &'static str,
    pub white_lighter: &'static str,
    pub white_darker: &'static str,
}

pub const DARK: Palette = Palette {
    red: "#E51013",
    black_very_dark: "#141414",
    black_darker: "#181818",
    black_lighter: "#2F2F2F",
    white_lighter: "#FFFFFF",
    white_darker: "#E5E5E5",
};

/// Gradient laid over the banner backdrop
pub const BANNER_GRADIENT: &str = "linear-gradient(rgba(0, 0, 0, 0), rgba(0, 0, 0, 1))";
/// Gradient laid over the detail cover
pub const COVER_GRADIENT: &str = "linear-gradient(to top, black, transparent)";

impl Palette {
    fn css_vars(&self) -> String {
        format!(
            ":root {{ --red: {}; --black-very-dark: {}; --black-darker: {}; \
             --black-lighter: {}; --white-lighter: {}; --white-darker: {}; }}",
            self.red,
            self.black_very_dark,
            self.black_darker,
            self.black_lighter,
            self.white_lighter,
            self.white_darker
        )
    }
}

/// Stylesheet injected once by the app shell
pub fn stylesheet(palette: &Palette) -> String {
    [
        palette.css_vars(),
        Variant::keyframes(Variant::RowHidden, Variant::RowVisible, "row-enter"),
        Variant::keyframes(Variant::RowVisible, Variant::RowExit, "row-exit"),
        Variant::RowVisible.animation_rule(".slider-row.entering", "row-enter"),
        Variant::RowExit.animation_rule(".slider-row.leaving", "row-exit"),
        Variant::BoxNormal.rule(".movie-box"),
        Variant::BoxHover.rule(".movie-box:hover"),
        Variant::InfoHidden.rule(".movie-box .movie-info"),
        Variant::InfoHover.rule(".movie-box:hover .movie-info"),
        Variant::keyframes(Variant::OverlayHidden, Variant::OverlayVisible, "overlay-in"),
        Variant::OverlayVisible.animation_rule(".overlay, .big-movie", "overlay-in"),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_contains_palette_and_motion() {
        let css = stylesheet(&DARK);
        assert!(css.contains("--black-lighter: #2F2F2F"));
        assert!(css.contains("@keyframes row-enter"));
        assert!(css.contains("@keyframes row-exit"));
        assert!(css.contains(
            ".movie-box:hover { transform: scale(1.3) translateY(-50px); \
             transition: transform 300ms ease-in-out 200ms; }"
        ));
        assert!(css.contains(".slider-row.leaving { animation: row-exit 1000ms"));
    }
}
