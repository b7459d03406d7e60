//! Frame-driven engine for interactive fractal viewing.
//!
//! # Architecture
//!
//! The engine follows the ports & adapters pattern:
//! - **Input**: `EngineCommand` values, queued and applied at frame boundaries
//! - **Output**: `UniformSink` trait receiving one `EngineSnapshot` per frame
//! - **Core**: viewport, gradient, settings and accumulation state from `core/`

pub mod commands;
mod engine;
pub mod ports;
pub mod queue;
pub mod snapshot;

pub use commands::{EngineCommand, GradientEdit, SettingEdit};
pub use engine::Engine;
pub use ports::UniformSink;
pub use snapshot::EngineSnapshot;
