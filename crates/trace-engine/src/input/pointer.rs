use glam::Vec2;
use crate::input::queue::{InputEvent, InputQueue};

/// Polled pointer view: "is a finger/mouse button held, and where".
///
/// Game code that thinks in per-frame polling (rather than events) reads this
/// after the runner has folded the frame's events into it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    held: bool,
    position: Vec2,
    /// Set when a press started during the last `apply`.
    pressed_this_frame: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold this frame's events into the state, in arrival order.
    pub fn apply(&mut self, input: &InputQueue) {
        self.pressed_this_frame = false;
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    self.held = true;
                    self.pressed_this_frame = true;
                    self.position = Vec2::new(x, y);
                }
                InputEvent::PointerMove { x, y } => {
                    self.position = Vec2::new(x, y);
                }
                InputEvent::PointerUp { x, y } => {
                    self.held = false;
                    self.position = Vec2::new(x, y);
                }
                _ => {}
            }
        }
    }

    /// Position of the held pointer, or `None` when nothing is pressed.
    pub fn held_position(&self) -> Option<Vec2> {
        self.held.then_some(self.position)
    }

    /// Position of a press that began this frame.
    pub fn pressed_position(&self) -> Option<Vec2> {
        self.pressed_this_frame.then_some(self.position)
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Last known position, pressed or not.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Forget any press, e.g. when the scene changes under the finger.
    pub fn release(&mut self) {
        self.held = false;
        self.pressed_this_frame = false;
    }
}
