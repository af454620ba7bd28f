use crate::config::model::{AnimationStyle, RevealUnit};

/// Scale animates between two fixed states regardless of text.
pub const SCALE_FRAME_COUNT: usize = 2;

/// Number of reveal units in `text`.
///
/// Letters are Unicode scalar values; words are separated by single spaces, so
/// consecutive spaces produce empty words and a join reproduces the input exactly.
/// Blank text has zero units.
pub fn unit_count(text: &str, unit: RevealUnit) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    match unit {
        RevealUnit::Letter => text.chars().count(),
        RevealUnit::Word => text.split(' ').count(),
    }
}

/// Total number of frames for a request: one per revealed unit plus the empty start frame.
///
/// Returns `1` for blank text on non-scale styles; callers must reject that case.
pub fn compute_frame_count(style: AnimationStyle, unit: RevealUnit, text: &str) -> usize {
    if style == AnimationStyle::Scale {
        return SCALE_FRAME_COUNT;
    }
    unit_count(text, unit) + 1
}

#[cfg(test)]
#[path = "../../tests/unit/synth/count.rs"]
mod tests;
