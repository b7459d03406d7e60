use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::input::events::InputEvent;

/// Pixel-precise wheels (touchpads) report distances; this many pixels count as one notch.
pub const PIXELS_PER_SCROLL_LINE: f64 = 40.0;

/// Translates winit window events into [`InputEvent`]s.
///
/// winit reports button presses without a position, so the last cursor position is
/// remembered here. Presses before the cursor has entered the window are dropped.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WinitInputAdapter {
    cursor: Option<(f64, f64)>,
}

impl WinitInputAdapter {
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::Resized(size) => Some(InputEvent::Resized {
                width: size.width,
                height: size.height,
            }),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some((position.x, position.y));
                Some(InputEvent::PointerMoved {
                    x: position.x,
                    y: position.y,
                })
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                Some(InputEvent::PointerLeft)
            }
            WindowEvent::Focused(false) => Some(InputEvent::FocusLost),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.cursor?;
                match state {
                    ElementState::Pressed => Some(InputEvent::PointerPressed { x, y }),
                    ElementState::Released => Some(InputEvent::PointerReleased { x, y }),
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let y_offset = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                    MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_SCROLL_LINE,
                };
                Some(InputEvent::Scrolled { y_offset })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::{DeviceId, TouchPhase};

    #[allow(unused_unsafe)]
    fn device_id() -> DeviceId {
        unsafe { DeviceId::dummy() }
    }

    #[test]
    fn test_resize_translates_to_resized() {
        let mut adapter = WinitInputAdapter::default();

        let event = adapter.translate(&WindowEvent::Resized(PhysicalSize::new(640, 480)));

        assert_eq!(event, Some(InputEvent::Resized { width: 640, height: 480 }));
    }

    #[test]
    fn test_focus_loss_translates_and_focus_gain_is_ignored() {
        let mut adapter = WinitInputAdapter::default();

        assert_eq!(adapter.translate(&WindowEvent::Focused(false)), Some(InputEvent::FocusLost));
        assert_eq!(adapter.translate(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn test_press_uses_last_cursor_position() {
        let mut adapter = WinitInputAdapter::default();
        let press = WindowEvent::MouseInput {
            device_id: device_id(),
            state: ElementState::Pressed,
            button: MouseButton::Left,
        };

        assert_eq!(adapter.translate(&press), None);

        adapter.translate(&WindowEvent::CursorMoved {
            device_id: device_id(),
            position: PhysicalPosition::new(12.0, 34.0),
        });

        assert_eq!(
            adapter.translate(&press),
            Some(InputEvent::PointerPressed { x: 12.0, y: 34.0 })
        );
    }

    #[test]
    fn test_right_button_is_ignored() {
        let mut adapter = WinitInputAdapter::default();
        adapter.translate(&WindowEvent::CursorMoved {
            device_id: device_id(),
            position: PhysicalPosition::new(1.0, 1.0),
        });

        let event = adapter.translate(&WindowEvent::MouseInput {
            device_id: device_id(),
            state: ElementState::Pressed,
            button: MouseButton::Right,
        });

        assert_eq!(event, None);
    }

    #[test]
    fn test_wheel_deltas_become_scroll_offsets() {
        let mut adapter = WinitInputAdapter::default();

        let lines = adapter.translate(&WindowEvent::MouseWheel {
            device_id: device_id(),
            delta: MouseScrollDelta::LineDelta(0.0, 2.0),
            phase: TouchPhase::Moved,
        });
        let pixels = adapter.translate(&WindowEvent::MouseWheel {
            device_id: device_id(),
            delta: MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -80.0)),
            phase: TouchPhase::Moved,
        });

        assert_eq!(lines, Some(InputEvent::Scrolled { y_offset: 2.0 }));
        assert_eq!(pixels, Some(InputEvent::Scrolled { y_offset: -2.0 }));
    }

    #[test]
    fn test_cursor_left_forgets_position() {
        let mut adapter = WinitInputAdapter::default();
        adapter.translate(&WindowEvent::CursorMoved {
            device_id: device_id(),
            position: PhysicalPosition::new(5.0, 5.0),
        });

        assert_eq!(
            adapter.translate(&WindowEvent::CursorLeft { device_id: device_id() }),
            Some(InputEvent::PointerLeft)
        );
        assert_eq!(
            adapter.translate(&WindowEvent::MouseInput {
                device_id: device_id(),
                state: ElementState::Released,
                button: MouseButton::Left,
            }),
            None
        );
    }
}
