use crate::{
    foundation::core::FrameIndex,
    graph::reaction::{ReactionGraph, Topology},
    timing::allocator::TransitionKind,
};

/// In-flight transition at a sampled time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSample {
    /// Frame being transitioned to.
    pub to: FrameIndex,
    /// Transition kind.
    pub kind: TransitionKind,
    /// Progress through the transition in `[0, 1)`.
    pub progress: f64,
}

/// What a viewer would see at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSample {
    /// Time that was sampled, after clamping.
    pub at_ms: f64,
    /// Frame currently shown (the source frame while transitioning).
    pub frame: FrameIndex,
    /// Active transition, if the sample falls inside one.
    pub transition: Option<TransitionSample>,
    /// True once a terminal graph has played all its edges.
    pub finished: bool,
}

/// Stateless sampler over a reaction graph.
///
/// Each edge holds its source frame for `wait_ms`, then spends `transition_ms` moving to its
/// target. Cyclic graphs repeat forever; terminal graphs stop on their last target.
#[derive(Clone, Copy, Debug)]
pub struct Playback<'a> {
    graph: &'a ReactionGraph,
    cycle_ms: f64,
}

impl<'a> Playback<'a> {
    /// Wrap `graph` for sampling.
    pub fn new(graph: &'a ReactionGraph) -> Self {
        Self {
            graph,
            cycle_ms: graph.total_span_ms(),
        }
    }

    /// Length of one pass over all edges.
    pub fn cycle_ms(&self) -> f64 {
        self.cycle_ms
    }

    /// Sample the state at `at_ms`. Negative or non-finite times clamp to 0.
    pub fn sample(&self, at_ms: f64) -> PlaybackSample {
        let at_ms = if at_ms.is_finite() { at_ms.max(0.0) } else { 0.0 };
        let edges = self.graph.edges();

        let hold = |frame: FrameIndex, finished: bool| PlaybackSample {
            at_ms,
            frame,
            transition: None,
            finished,
        };

        let Some(last) = edges.last() else {
            return hold(FrameIndex(0), true);
        };
        if self.cycle_ms <= 0.0 {
            return hold(FrameIndex(0), self.graph.topology() == Topology::Terminal);
        }

        let mut t = match self.graph.topology() {
            Topology::Cyclic => at_ms % self.cycle_ms,
            Topology::Terminal if at_ms >= self.cycle_ms => return hold(last.to_frame, true),
            Topology::Terminal => at_ms,
        };

        for edge in edges {
            if t < edge.wait_ms {
                return hold(edge.from_frame, false);
            }
            t -= edge.wait_ms;
            if t < edge.transition_ms {
                return PlaybackSample {
                    at_ms,
                    frame: edge.from_frame,
                    transition: Some(TransitionSample {
                        to: edge.to_frame,
                        kind: edge.transition_kind,
                        progress: t / edge.transition_ms,
                    }),
                    finished: false,
                };
            }
            t -= edge.transition_ms;
        }

        // Rounding left a sliver past the final edge.
        hold(last.to_frame, self.graph.topology() == Topology::Terminal)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/timeline.rs"]
mod tests;
