use glam::Vec2;
use log::trace;

use super::controller::{Button, ButtonMask};
use crate::canvas::Canvas;

/// Raw input, already translated out of the windowing toolkit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to a device-space position
    PointerMoved(Vec2),
    /// A button was pressed or released; carries the full mask afterwards
    Buttons(ButtonMask),
    /// Wheel delta in lines, positive zooms in
    Wheel(f32),
}

/// Editing actions currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldButtons {
    pub paint: bool,
    pub erase: bool,
    pub pan: bool,
}

impl HeldButtons {
    pub fn from_mask(mask: ButtonMask) -> Self {
        Self {
            paint: mask.contains(Button::Primary),
            erase: mask.contains(Button::Secondary),
            pan: mask.contains(Button::Tertiary),
        }
    }
}

/// Turns input events into canvas mutations.
///
/// Held state is recomputed from the whole button mask on every button
/// event, so several actions can be active at once. On a move, panning is
/// applied before painting and erasing.
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    held: HeldButtons,
    last_pointer: Option<Vec2>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> HeldButtons {
        self.held
    }

    pub fn last_pointer(&self) -> Option<Vec2> {
        self.last_pointer
    }

    /// Apply one event. Returns true if canvas geometry changed and the
    /// mesh needs rebuilding.
    pub fn handle(&mut self, canvas: &mut Canvas, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerMoved(position) => self.pointer_moved(canvas, position),
            InputEvent::Buttons(mask) => {
                self.held = HeldButtons::from_mask(mask);
                trace!("held buttons: {:?}", self.held);
                false
            }
            InputEvent::Wheel(delta) => {
                let before = canvas.scale();
                canvas.zoom(delta);
                canvas.scale() != before
            }
        }
    }

    fn pointer_moved(&mut self, canvas: &mut Canvas, position: Vec2) -> bool {
        let previous = self.last_pointer.replace(position).unwrap_or(position);
        let mut changed = false;

        if self.held.pan {
            let delta = position - previous;
            if delta != Vec2::ZERO {
                canvas.pan(delta);
                changed = true;
            }
        }

        if self.held.paint {
            if let Some((row, col)) = canvas.cell_at(position) {
                changed |= canvas.paint(row, col);
            }
        }

        if self.held.erase {
            if let Some((row, col)) = canvas.cell_at(position) {
                changed |= canvas.erase(row, col);
            }
        }

        changed
    }
}
