use std::str::FromStr;

use crate::foundation::{
    core::{Offset, Rgb8},
    error::{TextMotionError, TextMotionResult},
};

/// Animation style applied to the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationStyle {
    /// Progressive typewriter reveal with hard cuts between frames.
    Typing,
    /// Full text whose opacity ramps up.
    FadeIn,
    /// Full text whose opacity ramps down.
    FadeOut,
    /// Text enters from the right, moving left.
    SlideLeft,
    /// Text enters from the left, moving right.
    SlideRight,
    /// Text enters from below, moving up.
    SlideUp,
    /// Text enters from above, moving down.
    SlideDown,
    /// Two-state grow (or shrink) animation.
    Scale,
    /// Spiral reveal outward from the center of the text.
    Rotate,
}

/// How a style's timing is distributed across edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimingFamily {
    /// One smart-animate edge carrying the whole duration.
    Scale,
    /// Instant cuts with the whole per-edge budget spent waiting.
    Typing,
    /// Dissolves with a short tween carved out of each edge budget.
    Tweened,
}

impl AnimationStyle {
    /// All styles, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Typing,
        Self::FadeIn,
        Self::FadeOut,
        Self::SlideLeft,
        Self::SlideRight,
        Self::SlideUp,
        Self::SlideDown,
        Self::Scale,
        Self::Rotate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::FadeIn => "fade-in",
            Self::FadeOut => "fade-out",
            Self::SlideLeft => "slide-left",
            Self::SlideRight => "slide-right",
            Self::SlideUp => "slide-up",
            Self::SlideDown => "slide-down",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
        }
    }

    pub fn is_slide(self) -> bool {
        self.slide_origin().is_some()
    }

    /// Side a slide style enters from, as a unit offset (`y` grows downward).
    pub fn slide_origin(self) -> Option<Offset> {
        match self {
            Self::SlideLeft => Some(Offset::new(1.0, 0.0)),
            Self::SlideRight => Some(Offset::new(-1.0, 0.0)),
            Self::SlideUp => Some(Offset::new(0.0, 1.0)),
            Self::SlideDown => Some(Offset::new(0.0, -1.0)),
            _ => None,
        }
    }

    /// Timing policy family used by the allocator.
    pub fn timing_family(self) -> TimingFamily {
        match self {
            Self::Scale => TimingFamily::Scale,
            Self::Typing => TimingFamily::Typing,
            _ => TimingFamily::Tweened,
        }
    }

    /// Whether the reaction graph loops back to the first frame.
    pub fn loops(self) -> bool {
        self != Self::Scale
    }
}

impl FromStr for AnimationStyle {
    type Err = TextMotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        if key.is_empty() {
            return Err(TextMotionError::invalid_config("style must be non-empty"));
        }
        match key.as_str() {
            "typing" => Ok(Self::Typing),
            "fadein" => Ok(Self::FadeIn),
            "fadeout" => Ok(Self::FadeOut),
            "slideleft" => Ok(Self::SlideLeft),
            "slideright" => Ok(Self::SlideRight),
            "slideup" => Ok(Self::SlideUp),
            "slidedown" => Ok(Self::SlideDown),
            "scale" => Ok(Self::Scale),
            "rotate" => Ok(Self::Rotate),
            _ => Err(TextMotionError::invalid_config(format!(
                "unknown style '{}'",
                s.trim()
            ))),
        }
    }
}

/// Granularity of progressive disclosure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealUnit {
    #[default]
    Letter,
    Word,
}

impl FromStr for RevealUnit {
    type Err = TextMotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "letter" | "letters" | "char" | "character" => Ok(Self::Letter),
            "word" | "words" => Ok(Self::Word),
            _ => Err(TextMotionError::invalid_config(format!(
                "unknown reveal unit '{}'",
                s.trim()
            ))),
        }
    }
}

/// Which end of the text (or which end state) the animation starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Forward,
    Backwards,
}

impl Direction {
    pub fn is_backwards(self) -> bool {
        self == Self::Backwards
    }
}

impl FromStr for Direction {
    type Err = TextMotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "forward" | "forwards" => Ok(Self::Forward),
            "backward" | "backwards" | "reverse" => Ok(Self::Backwards),
            _ => Err(TextMotionError::invalid_config(format!(
                "unknown direction '{}'",
                s.trim()
            ))),
        }
    }
}

/// Lowercase and drop separators so `fade-in`, `fade_in` and `FadeIn` compare equal.
fn normalize_key(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Flat configuration record as sent by a host UI.
///
/// Loosely typed so it can be deserialized from arbitrary JSON before validation;
/// convert with [`AnimationConfig::from_raw`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    pub text: String,
    /// `"letter"` or `"word"`; defaults to letter.
    #[serde(default)]
    pub reveal_unit: Option<String>,
    /// `"forward"` or `"backwards"`; defaults to forward.
    #[serde(default)]
    pub direction: Option<String>,
    /// Style name, e.g. `"typing"` or `"slide-left"`.
    pub style: String,
    pub total_duration_ms: f64,
    /// `#RRGGBB` text color. Kept as raw JSON: anything that is not a well-formed hex
    /// string, including non-string values, becomes white.
    #[serde(default)]
    pub color: Option<serde_json::Value>,
}

/// Validated, immutable animation request.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    /// Never blank once validated.
    pub text: String,
    pub style: AnimationStyle,
    pub reveal_unit: RevealUnit,
    pub direction: Direction,
    /// Finite and `> 0`.
    pub total_duration_ms: f64,
    pub color: Rgb8,
}

impl AnimationConfig {
    /// Build and validate a config.
    pub fn new(
        text: impl Into<String>,
        style: AnimationStyle,
        reveal_unit: RevealUnit,
        direction: Direction,
        total_duration_ms: f64,
    ) -> TextMotionResult<Self> {
        let cfg = Self {
            text: text.into(),
            style,
            reveal_unit,
            direction,
            total_duration_ms,
            color: Rgb8::WHITE,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_color(mut self, color: Rgb8) -> Self {
        self.color = color;
        self
    }

    /// Parse and validate a host-supplied record.
    pub fn from_raw(raw: &RawConfig) -> TextMotionResult<Self> {
        let style = raw.style.parse::<AnimationStyle>()?;
        let reveal_unit = match raw.reveal_unit.as_deref() {
            None => RevealUnit::default(),
            Some(s) => s.parse()?,
        };
        let direction = match raw.direction.as_deref() {
            None => Direction::default(),
            Some(s) => s.parse()?,
        };
        let color = raw
            .color
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .map(Rgb8::from_hex_or_white)
            .unwrap_or_default();

        let cfg = Self {
            text: raw.text.clone(),
            style,
            reveal_unit,
            direction,
            total_duration_ms: raw.total_duration_ms,
            color,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a JSON-encoded [`RawConfig`] and validate it.
    pub fn from_json(s: &str) -> TextMotionResult<Self> {
        let raw: RawConfig = serde_json::from_str(s)?;
        Self::from_raw(&raw)
    }

    /// Check the invariants every synthesis relies on.
    pub fn validate(&self) -> TextMotionResult<()> {
        if self.text.trim().is_empty() {
            return Err(TextMotionError::invalid_config("text must not be empty"));
        }
        if !self.total_duration_ms.is_finite() || self.total_duration_ms <= 0.0 {
            return Err(TextMotionError::invalid_config(format!(
                "totalDurationMs must be finite and > 0 (got {})",
                self.total_duration_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
