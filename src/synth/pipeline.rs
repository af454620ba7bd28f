use crate::{
    config::model::AnimationConfig,
    foundation::{
        core::FrameIndex,
        error::{TextMotionError, TextMotionResult},
    },
    graph::reaction::{ReactionGraph, build_graph},
    synth::{
        count::compute_frame_count,
        reveal::{FrameDescriptor, render_frame},
    },
    timing::allocator::{TimingBudget, allocate_timing},
};

/// Non-fatal conditions surfaced alongside a successful synthesis.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SynthesisWarning {
    /// Timing floors pushed the realized duration past the requested one.
    TimingBudgetExceeded {
        /// Duration asked for.
        #[serde(rename = "requestedMs")]
        requested_ms: f64,
        /// Duration the edges add up to.
        #[serde(rename = "realizedMs")]
        realized_ms: f64,
    },
}

impl std::fmt::Display for SynthesisWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimingBudgetExceeded {
                requested_ms,
                realized_ms,
            } => write!(
                f,
                "timing budget exceeded: requested {requested_ms} ms, realized {realized_ms} ms"
            ),
        }
    }
}

/// Frames plus transition graph for one request. Never mutated after construction.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Synthesis {
    /// Request this synthesis was built from.
    pub config: AnimationConfig,
    /// Frame descriptors in index order.
    pub frames: Vec<FrameDescriptor>,
    /// Timed transitions between the frames.
    pub graph: ReactionGraph,
    /// Requested versus realized duration.
    pub budget: TimingBudget,
    /// Advisory conditions; empty in the common case.
    pub warnings: Vec<SynthesisWarning>,
}

impl Synthesis {
    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Descriptor of `index`, if in range.
    pub fn frame(&self, index: FrameIndex) -> Option<&FrameDescriptor> {
        self.frames.get(index.0)
    }

    /// Realized duration as the budget measures it. For scale this excludes the lead-in
    /// wait, so it can be shorter than [`ReactionGraph::total_span_ms`].
    pub fn realized_duration_ms(&self) -> f64 {
        self.budget.realized_ms
    }
}

/// Build every frame and the reaction graph for `config`.
///
/// All-or-nothing: any failure returns an error and no partial frame set.
#[tracing::instrument(
    skip(config),
    fields(style = config.style.as_str(), unit = ?config.reveal_unit)
)]
pub fn synthesize(config: &AnimationConfig) -> TextMotionResult<Synthesis> {
    config.validate()?;

    let frame_count = compute_frame_count(config.style, config.reveal_unit, &config.text);
    if frame_count < 2 {
        return Err(TextMotionError::invalid_config("text must not be empty"));
    }
    tracing::debug!(frame_count, "computed frame count");

    let frames = (0..frame_count)
        .map(|i| render_frame(config, i, frame_count))
        .collect::<Vec<_>>();

    let timing = allocate_timing(config.style, config.total_duration_ms, frame_count);
    let graph = build_graph(frame_count, &timing, config.style)?;

    let mut warnings = Vec::new();
    let budget = TimingBudget::measure(config.style, config.total_duration_ms, &timing);
    if budget.is_exceeded() {
        tracing::warn!(
            requested_ms = budget.requested_ms,
            realized_ms = budget.realized_ms,
            "timing floors exceed requested duration"
        );
        warnings.push(SynthesisWarning::TimingBudgetExceeded {
            requested_ms: budget.requested_ms,
            realized_ms: budget.realized_ms,
        });
    }

    Ok(Synthesis {
        config: config.clone(),
        frames,
        graph,
        budget,
        warnings,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/synth/pipeline.rs"]
mod tests;
