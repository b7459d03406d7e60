//! Turns raw pointer input into engine commands.
//!
//! Drag state survives between frames: a press records its position, movement away
//! from it starts a drag that pans by the per-event delta, and a release where the
//! press happened is a click. Leaving the viewport or losing focus drops the gesture.

use crate::controllers::engine::commands::EngineCommand;
use crate::input::events::InputEvent;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerTracker {
    pressed_at: Option<(f64, f64)>,
    last_position: (f64, f64),
    dragging: bool,
}

impl PointerTracker {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub fn handle(&mut self, event: InputEvent) -> Option<EngineCommand> {
        match event {
            InputEvent::Resized { width, height } => Some(EngineCommand::Resize { width, height }),
            InputEvent::Scrolled { y_offset } => Some(EngineCommand::Zoom {
                scroll_delta: y_offset,
            }),
            InputEvent::PointerPressed { x, y } => {
                self.pressed_at = Some((x, y));
                self.last_position = (x, y);
                self.dragging = false;
                None
            }
            InputEvent::PointerMoved { x, y } => self.drag_to(x, y),
            InputEvent::PointerReleased { x, y } => {
                let pressed_at = self.pressed_at?;
                let command = if self.dragging {
                    self.drag_to(x, y)
                } else if pressed_at == (x, y) {
                    Some(EngineCommand::CenterOn { x, y })
                } else {
                    // moved between press and release without a move event in between
                    Some(EngineCommand::Pan {
                        dx: x - pressed_at.0,
                        dy: y - pressed_at.1,
                    })
                };

                self.reset();
                command
            }
            InputEvent::PointerLeft | InputEvent::FocusLost => {
                self.reset();
                None
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn drag_to(&mut self, x: f64, y: f64) -> Option<EngineCommand> {
        let pressed_at = self.pressed_at?;

        if !self.dragging && pressed_at == (x, y) {
            return None;
        }

        self.dragging = true;
        let (last_x, last_y) = self.last_position;
        self.last_position = (x, y);

        if (last_x, last_y) == (x, y) {
            return None;
        }

        Some(EngineCommand::Pan {
            dx: x - last_x,
            dy: y - last_y,
        })
    }
}
