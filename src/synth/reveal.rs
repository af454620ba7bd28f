//! Text revelation: what each frame of a text animation shows.
//!
//! Every style is a pure handler `(config, frame_index, frame_count) -> FrameDescriptor`
//! picked from a closed table by [`handler_for`]. Frames never depend on each other, so any
//! frame can be recomputed on its own.

use crate::{
    config::model::{AnimationConfig, AnimationStyle, RevealUnit},
    foundation::core::{FrameIndex, Offset},
};

/// Smallest relative font scale, used by the collapsed scale state.
pub const MIN_RELATIVE_SCALE: f64 = 0.01;

/// Opacity ramps finish at 1/1.2 of the way through the frames, then hold.
pub const FADE_RATE: f64 = 1.2;

/// Rotate (letter): end of the core outward reveal.
pub const ROTATE_LETTER_CORE_END: f64 = 0.5;
/// Rotate (letter, backwards): reverse progress below which the text fades out.
pub const ROTATE_COLLAPSE_FADE: f64 = 0.3;
/// Rotate (word): only the center word is visible below this progress.
pub const ROTATE_WORD_CENTER_END: f64 = 0.3;
/// Rotate (word): every word is visible from this progress on.
pub const ROTATE_WORD_FULL_START: f64 = 0.7;

/// Visual state of a single frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDescriptor {
    /// Position of the frame in the sequence.
    pub index: FrameIndex,
    /// Text content shown in this frame.
    pub visible_text: String,
    /// Node opacity in `[0, 1]`.
    pub opacity: f64,
    /// Font size relative to the configured size, in `(0, 1]`.
    pub relative_font_scale: f64,
    /// Normalized displacement from the resting position (slide styles only).
    pub offset: Offset,
}

impl FrameDescriptor {
    fn full(index: usize, text: String) -> Self {
        Self {
            index: FrameIndex(index),
            visible_text: text,
            opacity: 1.0,
            relative_font_scale: 1.0,
            offset: Offset::ZERO,
        }
    }

    /// Host-facing variant name, 1-based (`"Frame=1"` for index 0).
    pub fn variant_name(&self) -> String {
        format!("Frame={}", self.index.0 + 1)
    }

    /// True when nothing would be drawn.
    pub fn is_blank(&self) -> bool {
        self.visible_text.is_empty() || self.opacity <= 0.0
    }
}

/// Signature shared by every style handler.
pub type StyleHandler = fn(&AnimationConfig, usize, usize) -> FrameDescriptor;

/// Handler table keyed on style.
pub fn handler_for(style: AnimationStyle) -> StyleHandler {
    match style {
        AnimationStyle::Typing => render_typing,
        AnimationStyle::FadeIn => render_fade_in,
        AnimationStyle::FadeOut => render_fade_out,
        AnimationStyle::SlideLeft
        | AnimationStyle::SlideRight
        | AnimationStyle::SlideUp
        | AnimationStyle::SlideDown => render_slide,
        AnimationStyle::Scale => render_scale,
        AnimationStyle::Rotate => render_rotate,
    }
}

/// Compute the descriptor for `frame_index` out of `frame_count` frames.
pub fn render_frame(
    config: &AnimationConfig,
    frame_index: usize,
    frame_count: usize,
) -> FrameDescriptor {
    handler_for(config.style)(config, frame_index, frame_count)
}

/// `frame_index / (frame_count - 1)` clamped to `[0, 1]`; a single frame is complete.
pub fn progress(frame_index: usize, frame_count: usize) -> f64 {
    if frame_count <= 1 {
        return 1.0;
    }
    (frame_index as f64 / (frame_count - 1) as f64).clamp(0.0, 1.0)
}

/// Text split into reveal units, keeping the separator needed to rejoin them.
struct Units<'a> {
    items: Vec<&'a str>,
    sep: &'static str,
}

impl<'a> Units<'a> {
    fn split(text: &'a str, unit: RevealUnit) -> Self {
        if text.trim().is_empty() {
            return Self {
                items: Vec::new(),
                sep: "",
            };
        }
        match unit {
            RevealUnit::Letter => Self {
                items: text
                    .char_indices()
                    .map(|(i, c)| &text[i..i + c.len_utf8()])
                    .collect(),
                sep: "",
            },
            RevealUnit::Word => Self {
                items: text.split(' ').collect(),
                sep: " ",
            },
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn prefix(&self, k: usize) -> String {
        let k = k.min(self.len());
        self.items[..k].join(self.sep)
    }

    fn suffix(&self, k: usize) -> String {
        let k = k.min(self.len());
        self.items[self.len() - k..].join(self.sep)
    }

    fn select(&self, mask: &[bool]) -> String {
        self.items
            .iter()
            .zip(mask)
            .filter(|(_, keep)| **keep)
            .map(|(item, _)| *item)
            .collect::<Vec<_>>()
            .join(self.sep)
    }
}

fn render_typing(
    config: &AnimationConfig,
    frame_index: usize,
    _frame_count: usize,
) -> FrameDescriptor {
    let units = Units::split(&config.text, config.reveal_unit);
    let text = if config.direction.is_backwards() {
        units.suffix(frame_index)
    } else {
        units.prefix(frame_index)
    };
    FrameDescriptor::full(frame_index, text)
}

fn render_fade_in(
    config: &AnimationConfig,
    frame_index: usize,
    frame_count: usize,
) -> FrameDescriptor {
    let p = progress(frame_index, frame_count);
    FrameDescriptor {
        opacity: (p * FADE_RATE).min(1.0),
        ..FrameDescriptor::full(frame_index, config.text.clone())
    }
}

fn render_fade_out(
    config: &AnimationConfig,
    frame_index: usize,
    frame_count: usize,
) -> FrameDescriptor {
    let p = progress(frame_index, frame_count);
    FrameDescriptor {
        opacity: (1.0 - p * FADE_RATE).max(0.0),
        ..FrameDescriptor::full(frame_index, config.text.clone())
    }
}

fn render_slide(
    config: &AnimationConfig,
    frame_index: usize,
    frame_count: usize,
) -> FrameDescriptor {
    let p = progress(frame_index, frame_count);
    let backwards = config.direction.is_backwards();

    let text = match config.reveal_unit {
        RevealUnit::Word => config.text.clone(),
        RevealUnit::Letter => {
            let units = Units::split(&config.text, RevealUnit::Letter);
            let k = (p * units.len() as f64).round() as usize;
            if backwards {
                units.suffix(k)
            } else {
                units.prefix(k)
            }
        }
    };

    let origin = config.style.slide_origin().unwrap_or(Offset::ZERO);
    let origin = if backwards { origin.scale(-1.0) } else { origin };
    FrameDescriptor {
        offset: origin.scale(1.0 - p),
        ..FrameDescriptor::full(frame_index, text)
    }
}

fn render_scale(
    config: &AnimationConfig,
    frame_index: usize,
    frame_count: usize,
) -> FrameDescriptor {
    let reached_end = progress(frame_index, frame_count) >= 1.0;
    let grown = reached_end != config.direction.is_backwards();
    let (opacity, relative_font_scale) = if grown {
        (1.0, 1.0)
    } else {
        (0.0, MIN_RELATIVE_SCALE)
    };
    FrameDescriptor {
        opacity,
        relative_font_scale,
        ..FrameDescriptor::full(frame_index, config.text.clone())
    }
}

fn render_rotate(
    config: &AnimationConfig,
    frame_index: usize,
    frame_count: usize,
) -> FrameDescriptor {
    let units = Units::split(&config.text, config.reveal_unit);
    let p = progress(frame_index, frame_count);
    // Backwards replays the forward spiral on the complement, collapsing to the center.
    let rp = if config.direction.is_backwards() {
        1.0 - p
    } else {
        p
    };

    let mask = match config.reveal_unit {
        RevealUnit::Letter => spiral_letter_mask(units.len(), rp),
        RevealUnit::Word => spiral_word_mask(units.len(), rp),
    };

    let opacity = if config.direction.is_backwards()
        && config.reveal_unit == RevealUnit::Letter
        && rp < ROTATE_COLLAPSE_FADE
    {
        rp / ROTATE_COLLAPSE_FADE
    } else {
        1.0
    };

    FrameDescriptor {
        opacity,
        ..FrameDescriptor::full(frame_index, units.select(&mask))
    }
}

/// Twice the distance of unit `i` from the center of `len` units; integral for any `len`.
fn center_distance2(i: usize, len: usize) -> usize {
    (2 * i).abs_diff(len.saturating_sub(1))
}

/// Letter spiral: the core (inner half of the radius) grows outward during the first half,
/// then the outer letters are added alternately left and right.
fn spiral_letter_mask(len: usize, p: f64) -> Vec<bool> {
    if len == 0 || p <= 0.0 {
        return vec![false; len];
    }
    let max_d2 = len.saturating_sub(1) as f64;
    let core_d2 = max_d2 / 2.0;

    if p <= ROTATE_LETTER_CORE_END {
        let radius = (p / ROTATE_LETTER_CORE_END) * core_d2;
        // The center letter (or pair) shows as soon as anything does.
        let radius = radius.max(1.0);
        return (0..len)
            .map(|i| center_distance2(i, len) as f64 <= radius)
            .collect();
    }

    let mut mask: Vec<bool> = (0..len)
        .map(|i| center_distance2(i, len) as f64 <= core_d2.max(1.0))
        .collect();

    let mut outer: Vec<usize> = (0..len).filter(|&i| !mask[i]).collect();
    outer.sort_by_key(|&i| (center_distance2(i, len), i));

    let fill = (p - ROTATE_LETTER_CORE_END) / (1.0 - ROTATE_LETTER_CORE_END);
    // Rounding up completes the text before the last frame, so neighbouring frames
    // can repeat (e.g. the last two frames of a short word are both full text).
    let take = (fill * outer.len() as f64).ceil() as usize;
    for &i in outer.iter().take(take) {
        mask[i] = true;
    }
    mask
}

/// Word spiral: center word alone, then a radius sweeping to the edges, then everything.
fn spiral_word_mask(len: usize, p: f64) -> Vec<bool> {
    if len == 0 || p <= 0.0 {
        return vec![false; len];
    }
    if p >= ROTATE_WORD_FULL_START {
        return vec![true; len];
    }

    let radius = if p < ROTATE_WORD_CENTER_END {
        1.0
    } else {
        let max_d2 = len.saturating_sub(1) as f64;
        let t = (p - ROTATE_WORD_CENTER_END) / (ROTATE_WORD_FULL_START - ROTATE_WORD_CENTER_END);
        1.0 + t * (max_d2 - 1.0).max(0.0)
    };
    (0..len)
        .map(|i| center_distance2(i, len) as f64 <= radius)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/synth/reveal.rs"]
mod tests;
