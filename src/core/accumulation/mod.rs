pub mod controller;

pub use controller::{AccumulationController, AccumulationPhase, SETTLE_FRAMES};
