pub mod controls_panel;
pub mod winit_adapter;

pub use controls_panel::{ControlsView, controls_panel};
pub use winit_adapter::WinitInputAdapter;
