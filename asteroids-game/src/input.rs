use std::collections::HashSet;
use glam::Vec2;

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum KeyCode {
    A,
    D,
    W,
    S,
    P,
    Space
}

/// Keyboard and mouse state for one tick, as reported by the front end.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    pub mouse_pos: Vec2,
    pub mouse_left_down: bool
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key held this tick.
    pub fn hold(mut self, key_code: KeyCode) -> Self {
        self.keys_down.insert(key_code);
        self
    }

    /// Key went down this tick.
    pub fn press(mut self, key_code: KeyCode) -> Self {
        self.keys_pressed.insert(key_code);
        self.keys_down.insert(key_code);
        self
    }

    pub fn drag_at(mut self, mouse_pos: Vec2) -> Self {
        self.mouse_pos = mouse_pos;
        self.mouse_left_down = true;
        self
    }

    pub fn is_key_down(&self, key_code: KeyCode) -> bool {
        self.keys_down.contains(&key_code)
    }

    pub fn is_key_pressed(&self, key_code: KeyCode) -> bool {
        self.keys_pressed.contains(&key_code)
    }
}
