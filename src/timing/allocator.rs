use crate::config::model::{AnimationStyle, TimingFamily};

/// Minimum tween length so a dissolve is perceivable.
pub const MIN_TRANSITION_MS: f64 = 50.0;
/// Minimum hold before a dissolve starts.
pub const MIN_WAIT_MS: f64 = 10.0;
/// Share of each edge budget spent tweening for dissolve styles.
pub const TWEEN_SHARE: f64 = 0.2;
/// Near-instant delay before the single scale edge fires.
pub const SCALE_LEAD_IN_MS: f64 = 1.0;
/// Rounding slack allowed before a realized duration counts as over budget.
pub const BUDGET_EPSILON_MS: f64 = 1e-6;

/// How the host moves from one frame to the next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionKind {
    /// Hard cut.
    Instant,
    /// Cross-fade between frames.
    Dissolve,
    /// Host-interpolated morph of matching layers.
    SmartAnimate,
}

/// Timing of one outgoing edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingEntry {
    /// Hold time on the source frame before the transition starts.
    pub wait_ms: f64,
    /// Length of the transition itself.
    pub transition_ms: f64,
    /// Transition kind.
    pub kind: TransitionKind,
}

impl TimingEntry {
    /// Wall-clock time this entry occupies.
    pub fn span_ms(&self) -> f64 {
        self.wait_ms + self.transition_ms
    }
}

/// Distribute `total_duration_ms` over the outgoing edges of `frame_count` frames.
///
/// One entry per frame (including the loop edge) except scale, which gets exactly one.
/// The 50 ms / 10 ms floors can push the realized total past the request when each edge
/// gets less than 250 ms; see [`TimingBudget`].
#[tracing::instrument]
pub fn allocate_timing(
    style: AnimationStyle,
    total_duration_ms: f64,
    frame_count: usize,
) -> Vec<TimingEntry> {
    match style.timing_family() {
        TimingFamily::Scale => vec![TimingEntry {
            wait_ms: SCALE_LEAD_IN_MS,
            transition_ms: total_duration_ms,
            kind: TransitionKind::SmartAnimate,
        }],
        _ if frame_count == 0 => Vec::new(),
        TimingFamily::Typing => {
            let per_edge = total_duration_ms / frame_count as f64;
            vec![
                TimingEntry {
                    wait_ms: per_edge,
                    transition_ms: 0.0,
                    kind: TransitionKind::Instant,
                };
                frame_count
            ]
        }
        TimingFamily::Tweened => {
            let per_edge = total_duration_ms / frame_count as f64;
            let transition_ms = (per_edge * TWEEN_SHARE).max(MIN_TRANSITION_MS);
            let wait_ms = (per_edge - transition_ms).max(MIN_WAIT_MS);
            vec![
                TimingEntry {
                    wait_ms,
                    transition_ms,
                    kind: TransitionKind::Dissolve,
                };
                frame_count
            ]
        }
    }
}

/// Requested versus realized duration of a timing allocation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBudget {
    /// Duration asked for.
    pub requested_ms: f64,
    /// Duration the entries actually add up to.
    pub realized_ms: f64,
}

impl TimingBudget {
    /// Measure `entries` against `requested_ms`.
    ///
    /// Scale carries its whole budget in the transition, so only the transition counts there.
    pub fn measure(style: AnimationStyle, requested_ms: f64, entries: &[TimingEntry]) -> Self {
        let realized_ms = match style.timing_family() {
            TimingFamily::Scale => entries.iter().map(|e| e.transition_ms).sum(),
            _ => entries.iter().map(TimingEntry::span_ms).sum(),
        };
        Self {
            requested_ms,
            realized_ms,
        }
    }

    /// Realized minus requested.
    pub fn overrun_ms(&self) -> f64 {
        self.realized_ms - self.requested_ms
    }

    /// True when the floors pushed the total over the request.
    pub fn is_exceeded(&self) -> bool {
        self.overrun_ms() > BUDGET_EPSILON_MS * self.requested_ms.abs().max(1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/allocator.rs"]
mod tests;
