//! Keyboard and mouse input

use std::collections::HashSet;

use glam::Vec2;

/// Keys the arena reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Space,
    Enter,
    /// Number row key `0..=9`
    Digit(u8),
}

impl Key {
    pub const DIGITS: [Key; 10] = [
        Key::Digit(0),
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

/// Queries the arena makes against the input collaborator.
///
/// The `was_*_pressed` queries are edge-triggered: they return true exactly
/// once per physical press, until the key or button is released.
pub trait InputSource {
    fn is_key_held(&self, key: Key) -> bool;
    fn was_key_pressed(&mut self, key: Key) -> bool;
    fn is_mouse_button_held(&self, button: MouseButton) -> bool;
    fn was_mouse_button_pressed(&mut self, button: MouseButton) -> bool;
    fn cursor_position(&self) -> Vec2;
}

/// Held/queried state for one kind of control
#[derive(Debug, Clone)]
struct EdgeTracker<T> {
    down: HashSet<T>,
    queried: HashSet<T>,
}

impl<T> Default for EdgeTracker<T> {
    fn default() -> Self {
        Self {
            down: HashSet::new(),
            queried: HashSet::new(),
        }
    }
}

impl<T: Copy + Eq + std::hash::Hash> EdgeTracker<T> {
    fn press(&mut self, control: T) {
        self.down.insert(control);
    }

    fn release(&mut self, control: T) {
        self.down.remove(&control);
        self.queried.remove(&control);
    }

    fn is_down(&self, control: T) -> bool {
        self.down.contains(&control)
    }

    fn pressed(&mut self, control: T) -> bool {
        if self.queried.contains(&control) || !self.down.contains(&control) {
            return false;
        }
        self.queried.insert(control);
        true
    }
}

/// Input state fed by platform events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: EdgeTracker<Key>,
    buttons: EdgeTracker<MouseButton>,
    cursor: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_key(&mut self, key: Key) {
        self.keys.press(key);
    }

    pub fn release_key(&mut self, key: Key) {
        self.keys.release(key);
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.buttons.press(button);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons.release(button);
    }

    pub fn move_cursor(&mut self, pos: Vec2) {
        self.cursor = pos;
    }
}

impl InputSource for InputState {
    fn is_key_held(&self, key: Key) -> bool {
        self.keys.is_down(key)
    }

    fn was_key_pressed(&mut self, key: Key) -> bool {
        self.keys.pressed(key)
    }

    fn is_mouse_button_held(&self, button: MouseButton) -> bool {
        self.buttons.is_down(button)
    }

    fn was_mouse_button_pressed(&mut self, button: MouseButton) -> bool {
        self.buttons.pressed(button)
    }

    fn cursor_position(&self) -> Vec2 {
        self.cursor
    }
}
