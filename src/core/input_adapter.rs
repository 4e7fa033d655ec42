use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use super::controller::{Button, ButtonMask, Controller};
use super::input_router::InputEvent;

/// Pixel scroll distance treated as one wheel line (touchpads)
const PIXELS_PER_LINE: f32 = 40.0;

/// Adapter that bridges Winit events to router input events
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed: ButtonMask,
    /// Physical-to-logical divisor
    scale_factor: f64,
}

impl WinitController {
    /// Create a new WinitController with no pressed buttons
    pub fn new(scale_factor: f64) -> Self {
        Self {
            pressed: ButtonMask::EMPTY,
            scale_factor,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Process a Winit WindowEvent, returning the input event it maps to
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                let button = Self::mouse_button_to_button(*button)?;
                Some(self.set_button(button, *state))
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(self.scale_factor);
                Some(InputEvent::PointerMoved(Vec2::new(logical.x, logical.y)))
            }
            WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Wheel(Self::wheel_lines(*delta))),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                None
            }
            _ => None,
        }
    }

    /// Update the pressed mask and report the full mask afterwards
    fn set_button(&mut self, button: Button, state: ElementState) -> InputEvent {
        self.pressed = match state {
            ElementState::Pressed => self.pressed.with(button),
            ElementState::Released => self.pressed.without(button),
        };
        InputEvent::Buttons(self.pressed)
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::Primary),
            MouseButton::Right => Some(Button::Secondary),
            MouseButton::Middle => Some(Button::Tertiary),
            _ => None,
        }
    }

    /// Wheel movement in lines; positive means scrolling up
    fn wheel_lines(delta: MouseScrollDelta) -> f32 {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Controller for WinitController {
    fn button_mask(&self) -> ButtonMask {
        self.pressed
    }
}
