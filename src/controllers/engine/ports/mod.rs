//! Port definitions for the engine.
//!
//! Contains trait definitions that define interfaces between the engine
//! and the external render stage.

pub mod uniform_sink;

pub use uniform_sink::UniformSink;
