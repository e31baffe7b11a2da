//! Motion Variants
//!
//! Named visual states for carousel rows, tiles and overlays, each with an
//! explicit timing. Rendered to plain CSS so the windowing code never has
//! to know about animation.

use std::fmt::Write;

/// Row slide duration; a transition is complete once this has elapsed
pub const ROW_TRANSITION_MS: u32 = 1000;

/// Timing curve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseInOut,
}

impl Easing {
    pub const fn as_css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Duration, delay and curve of a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Timing {
    pub const fn tween(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseInOut,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Value for a CSS `transition` declaration
    pub fn css_transition(&self, property: &str) -> String {
        format!(
            "{} {}ms {} {}ms",
            property,
            self.duration_ms,
            self.easing.as_css(),
            self.delay_ms
        )
    }

    /// Value for a CSS `animation` declaration, holding the final frame
    pub fn css_animation(&self, name: &str) -> String {
        format!(
            "{} {}ms {} {}ms forwards",
            name,
            self.duration_ms,
            self.easing.as_css(),
            self.delay_ms
        )
    }
}

/// Named visual states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Incoming row, parked off-screen right
    RowHidden,
    RowVisible,
    /// Outgoing row, sliding off-screen left
    RowExit,
    BoxNormal,
    BoxHover,
    InfoHidden,
    InfoHover,
    OverlayHidden,
    OverlayVisible,
}

impl Variant {
    pub const ALL: [Variant; 9] = [
        Variant::RowHidden,
        Variant::RowVisible,
        Variant::RowExit,
        Variant::BoxNormal,
        Variant::BoxHover,
        Variant::InfoHidden,
        Variant::InfoHover,
        Variant::OverlayHidden,
        Variant::OverlayVisible,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Variant::RowHidden => "row-hidden",
            Variant::RowVisible => "row-visible",
            Variant::RowExit => "row-exit",
            Variant::BoxNormal => "box-normal",
            Variant::BoxHover => "box-hover",
            Variant::InfoHidden => "info-hidden",
            Variant::InfoHover => "info-hover",
            Variant::OverlayHidden => "overlay-hidden",
            Variant::OverlayVisible => "overlay-visible",
        }
    }

    /// Animated CSS property
    pub const fn property(self) -> &'static str {
        match self {
            Variant::RowHidden
            | Variant::RowVisible
            | Variant::RowExit
            | Variant::BoxNormal
            | Variant::BoxHover => "transform",
            Variant::InfoHidden
            | Variant::InfoHover
            | Variant::OverlayHidden
            | Variant::OverlayVisible => "opacity",
        }
    }

    /// Value of [`Variant::property`] in this state
    pub const fn value(self) -> &'static str {
        match self {
            Variant::RowHidden => "translateX(100vw)",
            Variant::RowVisible => "translateX(0)",
            Variant::RowExit => "translateX(-100vw)",
            Variant::BoxNormal => "scale(1)",
            Variant::BoxHover => "scale(1.3) translateY(-50px)",
            Variant::InfoHidden | Variant::OverlayHidden => "0",
            Variant::InfoHover | Variant::OverlayVisible => "1",
        }
    }

    /// Timing used when moving into this state
    pub const fn timing(self) -> Timing {
        match self {
            Variant::RowHidden => Timing::tween(0),
            Variant::RowVisible | Variant::RowExit => Timing::tween(ROW_TRANSITION_MS),
            Variant::BoxNormal | Variant::InfoHidden => Timing::tween(300),
            Variant::BoxHover | Variant::InfoHover => Timing::tween(300).delayed(200),
            Variant::OverlayHidden | Variant::OverlayVisible => Timing::tween(300),
        }
    }

    pub fn declaration(self) -> String {
        format!("{}: {}", self.property(), self.value())
    }

    /// `selector { <state>; transition: <timing> }`
    pub fn rule(self, selector: &str) -> String {
        format!(
            "{} {{ {}; transition: {}; }}",
            selector,
            self.declaration(),
            self.timing().css_transition(self.property())
        )
    }

    /// Keyframes moving from one state to another under `name`
    pub fn keyframes(from: Variant, to: Variant, name: &str) -> String {
        let mut css = String::new();
        let _ = write!(
            css,
            "@keyframes {} {{ from {{ {}; }} to {{ {}; }} }}",
            name,
            from.declaration(),
            to.declaration()
        );
        css
    }

    /// `selector { animation: ... }` playing `name` with this state's timing
    pub fn animation_rule(self, selector: &str, name: &str) -> String {
        format!(
            "{} {{ animation: {}; }}",
            selector,
            self.timing().css_animation(name)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_timing() {
        let timing = Variant::BoxHover.timing();
        assert_eq!(timing.duration_ms, 300);
        assert_eq!(timing.delay_ms, 200);
        assert_eq!(timing.css_transition("transform"), "transform 300ms ease-in-out 200ms");
    }

    #[test]
    fn test_row_uses_transition_duration() {
        assert_eq!(Variant::RowVisible.timing().duration_ms, ROW_TRANSITION_MS);
        assert_eq!(Variant::RowExit.timing().duration_ms, ROW_TRANSITION_MS);
    }

    #[test]
    fn test_rule() {
        assert_eq!(
            Variant::InfoHover.rule(".tile:hover .info"),
            ".tile:hover .info { opacity: 1; transition: opacity 300ms ease-in-out 200ms; }"
        );
    }

    #[test]
    fn test_keyframes_and_animation() {
        let frames = Variant::keyframes(Variant::RowHidden, Variant::RowVisible, "row-enter");
        assert_eq!(
            frames,
            "@keyframes row-enter { from { transform: translateX(100vw); } \
             to { transform: translateX(0); } }"
        );
        assert_eq!(
            Variant::RowExit.animation_rule(".row.leaving", "row-exit"),
            ".row.leaving { animation: row-exit 1000ms ease-in-out 0ms forwards; }"
        );
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<_> = Variant::ALL.iter().map(|v| v.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Variant::ALL.len());
    }
}
