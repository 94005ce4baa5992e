//! Render reporting
//!
//! The core never draws. Each frame it reports model transforms, tints and
//! texture handles to a [`RenderSink`] owned by the host.

pub mod frame;
pub mod instance;
pub mod sink;

pub use frame::{Hud, HudTextures, compose_frame, score_digits};
pub use instance::{InstanceBatch, InstanceRaw};
pub use sink::{RenderItem, RenderSink, model_matrix};
