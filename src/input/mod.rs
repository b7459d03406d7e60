pub mod events;
pub mod pointer;

#[cfg(feature = "gui")]
pub mod gui;

pub use events::InputEvent;
pub use pointer::PointerTracker;
