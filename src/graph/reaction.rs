use crate::{
    config::model::AnimationStyle,
    foundation::{
        core::FrameIndex,
        error::{TextMotionError, TextMotionResult},
    },
    timing::allocator::{TimingEntry, TransitionKind},
};

/// One timed transition between two frames.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingEdge {
    /// Source frame.
    pub from_frame: FrameIndex,
    /// Target frame.
    pub to_frame: FrameIndex,
    /// Hold on the source frame before transitioning.
    pub wait_ms: f64,
    /// Transition length.
    pub transition_ms: f64,
    /// Transition kind.
    pub transition_kind: TransitionKind,
}

impl TimingEdge {
    /// Wall-clock time this edge occupies.
    pub fn span_ms(&self) -> f64 {
        self.wait_ms + self.transition_ms
    }
}

/// Whether playback loops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topology {
    /// The last frame links back to the first; plays indefinitely.
    Cyclic,
    /// No edge leaves the last frame; plays once.
    Terminal,
}

/// Immutable set of timed transitions over frames `0..frame_count`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionGraph {
    frame_count: usize,
    topology: Topology,
    edges: Vec<TimingEdge>,
}

impl ReactionGraph {
    /// Number of frames the graph spans.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Loop policy.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Edges in registration order (ascending source frame).
    pub fn edges(&self) -> &[TimingEdge] {
        &self.edges
    }

    /// True if an edge wraps from the last frame back to the first.
    pub fn is_cyclic(&self) -> bool {
        self.topology == Topology::Cyclic
    }

    /// Outgoing edge of `frame`, if any.
    pub fn edge_from(&self, frame: FrameIndex) -> Option<&TimingEdge> {
        self.edges.iter().find(|e| e.from_frame == frame)
    }

    /// Total time for one pass over all edges.
    pub fn total_span_ms(&self) -> f64 {
        self.edges.iter().map(TimingEdge::span_ms).sum()
    }
}

/// Chain `frame_count` frames with the given timing.
///
/// Scale yields the single terminal edge `0 -> 1`; every other style links `i -> (i + 1) % n`
/// for all frames. Direction never changes topology: it is already baked into frame content.
#[tracing::instrument(skip(timing))]
pub fn build_graph(
    frame_count: usize,
    timing: &[TimingEntry],
    style: AnimationStyle,
) -> TextMotionResult<ReactionGraph> {
    if frame_count < 2 {
        return Err(TextMotionError::insufficient_frames(format!(
            "insufficient frames for a transition graph (got {frame_count}, need at least 2)"
        )));
    }

    let (topology, edge_count) = if style.loops() {
        (Topology::Cyclic, frame_count)
    } else {
        (Topology::Terminal, frame_count - 1)
    };

    if timing.len() < edge_count {
        return Err(TextMotionError::graph(format!(
            "{} timing entries for {edge_count} edges",
            timing.len()
        )));
    }

    let edges = (0..edge_count)
        .zip(timing)
        .map(|(i, t)| TimingEdge {
            from_frame: FrameIndex(i),
            to_frame: FrameIndex(i).next_wrapping(frame_count),
            wait_ms: t.wait_ms,
            transition_ms: t.transition_ms,
            transition_kind: t.kind,
        })
        .collect::<Vec<_>>();

    tracing::debug!(frame_count, edges = edges.len(), ?topology, "built reaction graph");

    Ok(ReactionGraph {
        frame_count,
        topology,
        edges,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/graph/reaction.rs"]
mod tests;
