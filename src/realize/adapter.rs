//! Boundary between the pure engine and a host document.
//!
//! A host implements [`FrameRealizer`]; [`realize`] drives it in the order the host needs:
//! every frame node first, then the sequence grouping them, then edges in ascending source
//! order. If registration stops part way, every registered edge points at realized frames.

use crate::{
    config::model::{AnimationConfig, RawConfig},
    foundation::{
        core::{Offset, Rgb8},
        error::{TextMotionError, TextMotionResult},
    },
    graph::reaction::TimingEdge,
    synth::{
        pipeline::{Synthesis, synthesize},
        reveal::FrameDescriptor,
    },
    timing::allocator::TransitionKind,
};

/// Host-side materialization of frames and timed transitions.
///
/// Ordering contract: `create_frame_node` is called for frames in ascending index order,
/// `combine_frames_into_sequence` once after all frames exist, and
/// `register_timed_transition` once per graph edge in graph order.
pub trait FrameRealizer {
    /// Handle to a realized frame node.
    type Frame: Clone;
    /// Handle to the grouped sequence.
    type Sequence;

    /// Materialize one frame with the given text color.
    fn create_frame_node(
        &mut self,
        descriptor: &FrameDescriptor,
        color: Rgb8,
    ) -> TextMotionResult<Self::Frame>;

    /// Group realized frames into a single navigable unit.
    fn combine_frames_into_sequence(
        &mut self,
        frames: &[Self::Frame],
    ) -> TextMotionResult<Self::Sequence>;

    /// Register one timed edge between two realized frames.
    fn register_timed_transition(
        &mut self,
        from: &Self::Frame,
        to: &Self::Frame,
        edge: &TimingEdge,
    ) -> TextMotionResult<()>;
}

/// Result of a successful realization.
#[derive(Clone, Debug)]
pub struct Realized<S> {
    /// Sequence handle returned by the host.
    pub sequence: S,
    /// Frames realized.
    pub frame_count: usize,
    /// Edges registered.
    pub edge_count: usize,
}

/// Drive `realizer` through every frame and edge of `synthesis`.
///
/// Host failures stop the run and come back as a single [`TextMotionError::Realization`].
/// Nothing is retried.
#[tracing::instrument(skip_all, fields(frames = synthesis.frame_count()))]
pub fn realize<R: FrameRealizer>(
    synthesis: &Synthesis,
    realizer: &mut R,
) -> TextMotionResult<Realized<R::Sequence>> {
    let color = synthesis.config.color;

    let mut handles = Vec::with_capacity(synthesis.frames.len());
    for frame in &synthesis.frames {
        let handle = realizer
            .create_frame_node(frame, color)
            .map_err(|e| step_failed(&format!("create frame {}", frame.index.0), e))?;
        handles.push(handle);
    }

    let sequence = realizer
        .combine_frames_into_sequence(&handles)
        .map_err(|e| step_failed("combine frames", e))?;

    let edges = synthesis.graph.edges();
    for edge in edges {
        let (Some(from), Some(to)) = (handles.get(edge.from_frame.0), handles.get(edge.to_frame.0))
        else {
            return Err(TextMotionError::graph(format!(
                "edge {} -> {} references an unrealized frame",
                edge.from_frame.0, edge.to_frame.0
            )));
        };
        realizer
            .register_timed_transition(from, to, edge)
            .map_err(|e| {
                step_failed(
                    &format!("register edge {} -> {}", edge.from_frame.0, edge.to_frame.0),
                    e,
                )
            })?;
    }

    Ok(Realized {
        sequence,
        frame_count: handles.len(),
        edge_count: edges.len(),
    })
}

fn step_failed(step: &str, err: TextMotionError) -> TextMotionError {
    let err = match err {
        TextMotionError::Realization(msg) => TextMotionError::realization(format!("{step}: {msg}")),
        other => TextMotionError::realization(format!("{step}: {other}")),
    };
    tracing::warn!(error = %err, "realization failed");
    err
}

/// Outbound status event reported after a request completes or fails.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisStatus {
    /// Whether frames and graph were fully realized.
    pub success: bool,
    /// Frame count on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_count: Option<usize>,
    /// Human-readable failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Advisory warnings (e.g. timing budget overruns).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl SynthesisStatus {
    /// Status for a completed synthesis.
    pub fn succeeded(synthesis: &Synthesis) -> Self {
        Self {
            success: true,
            frame_count: Some(synthesis.frame_count()),
            error: None,
            warnings: synthesis.warnings.iter().map(ToString::to_string).collect(),
        }
    }

    /// Status for a failed request.
    pub fn failed(err: &TextMotionError) -> Self {
        Self {
            success: false,
            frame_count: None,
            error: Some(err.to_string()),
            warnings: Vec::new(),
        }
    }

    /// Fold a request result into a status event.
    pub fn from_result(result: &TextMotionResult<Synthesis>) -> Self {
        match result {
            Ok(s) => Self::succeeded(s),
            Err(e) => Self::failed(e),
        }
    }
}

/// Parse, synthesize and realize; always yields a status event.
pub fn run_request<R: FrameRealizer>(raw: &RawConfig, realizer: &mut R) -> SynthesisStatus {
    let result = AnimationConfig::from_raw(raw)
        .and_then(|cfg| synthesize(&cfg))
        .and_then(|synthesis| realize(&synthesis, realizer).map(|_| synthesis));
    if let Err(e) = &result {
        tracing::warn!(error = %e, "synthesis request failed");
    }
    SynthesisStatus::from_result(&result)
}

/// Identifier of a node held by [`InMemoryRealizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct NodeId(pub usize);

/// Frame node as recorded by [`InMemoryRealizer`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizedNode {
    /// Node identifier.
    pub id: NodeId,
    /// Variant name, e.g. `Frame=1`.
    pub name: String,
    /// Text content.
    pub text: String,
    /// Fill color as `#RRGGBB`.
    pub color: String,
    /// Node opacity.
    pub opacity: f64,
    /// Relative font scale.
    pub relative_font_scale: f64,
    /// Positional offset.
    pub offset: Offset,
}

/// Timed transition as recorded by [`InMemoryRealizer`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizedTransition {
    /// Source node.
    pub from: NodeId,
    /// Target node.
    pub to: NodeId,
    /// Hold before transitioning.
    pub wait_ms: f64,
    /// Transition length.
    pub transition_ms: f64,
    /// Transition kind.
    pub kind: TransitionKind,
}

/// Realizer that records everything in memory, for tests and manifests.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct InMemoryRealizer {
    nodes: Vec<RealizedNode>,
    transitions: Vec<RealizedTransition>,
    sequences: Vec<Vec<NodeId>>,
}

impl InMemoryRealizer {
    /// Create an empty realizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame nodes in creation order.
    pub fn nodes(&self) -> &[RealizedNode] {
        &self.nodes
    }

    /// Transitions in registration order.
    pub fn transitions(&self) -> &[RealizedTransition] {
        &self.transitions
    }

    /// Sequences, each listing its member nodes.
    pub fn sequences(&self) -> &[Vec<NodeId>] {
        &self.sequences
    }
}

impl FrameRealizer for InMemoryRealizer {
    type Frame = NodeId;
    type Sequence = usize;

    fn create_frame_node(
        &mut self,
        descriptor: &FrameDescriptor,
        color: Rgb8,
    ) -> TextMotionResult<NodeId> {
        let id = NodeId(self.nodes.len());
        self.nodes.push(RealizedNode {
            id,
            name: descriptor.variant_name(),
            text: descriptor.visible_text.clone(),
            color: color.to_hex(),
            opacity: descriptor.opacity,
            relative_font_scale: descriptor.relative_font_scale,
            offset: descriptor.offset,
        });
        Ok(id)
    }

    fn combine_frames_into_sequence(&mut self, frames: &[NodeId]) -> TextMotionResult<usize> {
        if frames.is_empty() {
            return Err(TextMotionError::realization("cannot combine zero frames"));
        }
        self.sequences.push(frames.to_vec());
        Ok(self.sequences.len() - 1)
    }

    fn register_timed_transition(
        &mut self,
        from: &NodeId,
        to: &NodeId,
        edge: &TimingEdge,
    ) -> TextMotionResult<()> {
        if from.0 >= self.nodes.len() || to.0 >= self.nodes.len() {
            return Err(TextMotionError::realization(format!(
                "unknown node in transition {} -> {}",
                from.0, to.0
            )));
        }
        self.transitions.push(RealizedTransition {
            from: *from,
            to: *to,
            wait_ms: edge.wait_ms,
            transition_ms: edge.transition_ms,
            kind: edge.transition_kind,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/realize/adapter.rs"]
mod tests;
