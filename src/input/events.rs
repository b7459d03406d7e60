/// Raw input arriving from the windowing layer, already in viewport pixel coordinates
/// (origin top-left, y pointing down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Resized { width: u32, height: u32 },
    PointerPressed { x: f64, y: f64 },
    PointerMoved { x: f64, y: f64 },
    PointerReleased { x: f64, y: f64 },
    /// Pointer left the viewport.
    PointerLeft,
    FocusLost,
    Scrolled { y_offset: f64 },
}
