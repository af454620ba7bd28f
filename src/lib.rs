//! textmotion turns a text string and an animation style into discrete keyframes and a timed
//! transition graph that a design-tool host can replay.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: `RawConfig -> AnimationConfig` (parse and validate the host's flat record)
//! 2. **Count**: how many frames the style/unit/text combination needs
//! 3. **Reveal**: `(config, frame index) -> FrameDescriptor`, one pure handler per style
//! 4. **Time**: split the total duration into per-edge waits and transitions
//! 5. **Chain**: link frames into a cyclic or terminal `ReactionGraph`
//! 6. **Realize** (host side): drive a [`FrameRealizer`] to create nodes and register edges
//!
//! Steps 1-5 are pure and deterministic: identical input gives identical frames and edges.
//! [`synthesize`] runs them all at once and either returns everything or an error.
#![forbid(unsafe_code)]

mod config;
mod foundation;
mod graph;
mod playback;
mod realize;
mod synth;
mod timing;

pub use config::model::{
    AnimationConfig, AnimationStyle, Direction, RawConfig, RevealUnit, TimingFamily,
};
pub use foundation::core::{FrameIndex, Offset, Rgb8};
pub use foundation::error::{TextMotionError, TextMotionResult};
pub use graph::reaction::{ReactionGraph, TimingEdge, Topology, build_graph};
pub use playback::timeline::{Playback, PlaybackSample, TransitionSample};
pub use realize::adapter::{
    FrameRealizer, InMemoryRealizer, NodeId, Realized, RealizedNode, RealizedTransition,
    SynthesisStatus, realize, run_request,
};
pub use synth::count::{SCALE_FRAME_COUNT, compute_frame_count, unit_count};
pub use synth::pipeline::{Synthesis, SynthesisWarning, synthesize};
pub use synth::reveal::{
    FADE_RATE, FrameDescriptor, MIN_RELATIVE_SCALE, StyleHandler, handler_for, progress,
    render_frame,
};
pub use timing::allocator::{
    MIN_TRANSITION_MS, MIN_WAIT_MS, SCALE_LEAD_IN_MS, TimingBudget, TimingEntry, TransitionKind,
    allocate_timing,
};
