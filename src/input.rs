//! Input handling.
//!
//! Translates winit window events into the small set of discrete events the
//! game understands and queues them in arrival order until the next frame.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Named keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Return,
    Backspace,
    Y,
    N,
    Space,
    I,
    Escape,
    Other,
}

impl Key {
    pub fn from_code(code: KeyCode) -> Key {
        match code {
            KeyCode::Enter | KeyCode::NumpadEnter => Key::Return,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::KeyY => Key::Y,
            KeyCode::KeyN => Key::N,
            KeyCode::Space => Key::Space,
            KeyCode::KeyI => Key::I,
            KeyCode::Escape => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// One discrete input event. Positions are in UI points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close requested
    Quit,
    /// Key pressed, with the character it typed (if any)
    Key { key: Key, text: Option<char> },
    PointerMoved(Vec2),
    PointerPressed(Vec2),
}

impl InputEvent {
    /// A bare key press with no typed text
    pub fn key(key: Key) -> Self {
        InputEvent::Key { key, text: None }
    }

    /// A key press that typed `c`, with the named key derived from it
    pub fn typed(c: char) -> Self {
        let key = match c.to_ascii_lowercase() {
            'y' => Key::Y,
            'n' => Key::N,
            'i' => Key::I,
            ' ' => Key::Space,
            _ => Key::Other,
        };
        InputEvent::Key { key, text: Some(c) }
    }

    /// Key presses for every character of `text`, in order
    pub fn typed_str(text: &str) -> Vec<InputEvent> {
        text.chars().map(InputEvent::typed).collect()
    }
}

/// Input state tracking
pub struct InputQueue {
    events: Vec<InputEvent>,
    /// Last known pointer position (winit reports button presses without one)
    pointer: Vec2,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            pointer: Vec2::ZERO,
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        if let InputEvent::PointerMoved(pos) | InputEvent::PointerPressed(pos) = event {
            self.pointer = pos;
        }
        self.events.push(event);
    }

    /// Translate and queue a window event. `scale_factor` converts physical
    /// pixels to UI points.
    pub fn handle_window_event(&mut self, event: &WindowEvent, scale_factor: f64) {
        match event {
            WindowEvent::CloseRequested => self.push(InputEvent::Quit),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let key = match event.physical_key {
                    PhysicalKey::Code(code) => Key::from_code(code),
                    PhysicalKey::Unidentified(_) => Key::Other,
                };
                let text = event.text.as_ref().and_then(|t| t.chars().next());
                self.push(InputEvent::Key { key, text });
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pos = Vec2::new(
                    (position.x / scale_factor) as f32,
                    (position.y / scale_factor) as f32,
                );
                self.push(InputEvent::PointerMoved(pos));
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let pos = self.pointer;
                self.push(InputEvent::PointerPressed(pos));
            }
            _ => {}
        }
    }

    /// Take this frame's events, oldest first
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
