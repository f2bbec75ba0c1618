//! Name confirmation dialog.
//!
//! Shown over name entry when a non-empty draft is submitted. Answers with
//! Y (accept), N (deny) or a window close, which is kept distinct from a deny.

use crate::constants::*;
use crate::events::{Cue, EventQueue, GameEvent};
use crate::input::{InputEvent, Key};
use std::f32::consts::TAU;

/// How the dialog was answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAnswer {
    /// "Blood oath": keep the name
    Accepted,
    /// Back to editing, draft untouched
    Denied,
    /// Window closed while the dialog was open
    Quit,
}

impl ConfirmAnswer {
    /// Whether the candidate name was accepted
    pub fn accepted(self) -> bool {
        self == ConfirmAnswer::Accepted
    }
}

pub struct ConfirmDialog {
    candidate: String,
    /// Animation phase in radians, wraps at TAU. Has no effect on the answer.
    pulse: f32,
}

impl ConfirmDialog {
    /// Open the dialog for `candidate`
    pub fn open(candidate: impl Into<String>, events: &mut EventQueue) -> Self {
        events.push(GameEvent::PlayCue(Cue::Confirm));
        Self {
            candidate: candidate.into(),
            pulse: 0.0,
        }
    }

    /// Feed one input event. Returns the answer once one arrives.
    pub fn handle(&mut self, event: &InputEvent, events: &mut EventQueue) -> Option<ConfirmAnswer> {
        match event {
            InputEvent::Quit => Some(ConfirmAnswer::Quit),
            InputEvent::Key { key: Key::Y, .. } => Some(ConfirmAnswer::Accepted),
            InputEvent::Key { key: Key::N, .. } => {
                events.push(GameEvent::PlayCue(Cue::Deny));
                Some(ConfirmAnswer::Denied)
            }
            _ => None,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pulse = (self.pulse + dt * CONFIRM_PULSE_SPEED) % TAU;
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    pub fn pulse(&self) -> f32 {
        self.pulse
    }

    /// Border brightness, 0.0 to 1.0
    pub fn border_glow(&self) -> f32 {
        self.pulse.sin().abs()
    }

    /// Half-width of the pulsing garnet
    pub fn gem_size(&self) -> f32 {
        CONFIRM_GEM_BASE_SIZE + CONFIRM_GEM_PULSE_SIZE * (self.pulse * 2.0).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(name: &str) -> (ConfirmDialog, EventQueue) {
        let mut events = EventQueue::new();
        let dialog = ConfirmDialog::open(name, &mut events);
        (dialog, events)
    }

    #[test]
    fn test_open_plays_confirm_cue() {
        let (dialog, events) = open("Vex");
        assert_eq!(dialog.candidate(), "Vex");
        assert_eq!(events.pending(), [GameEvent::PlayCue(Cue::Confirm)]);
    }

    #[test]
    fn test_yes_accepts() {
        let (mut dialog, mut events) = open("Vex");
        let answer = dialog.handle(&InputEvent::typed('y'), &mut events);
        assert_eq!(answer, Some(ConfirmAnswer::Accepted));
        assert!(answer.unwrap().accepted());
    }

    #[test]
    fn test_no_denies_with_cue() {
        let (mut dialog, mut events) = open("Vex");
        let answer = dialog.handle(&InputEvent::key(Key::N), &mut events);
        assert_eq!(answer, Some(ConfirmAnswer::Denied));
        assert!(!answer.unwrap().accepted());
        assert_eq!(events.cue_count(Cue::Deny), 1);
    }

    #[test]
    fn test_quit_is_distinct_from_deny() {
        let (mut dialog, mut events) = open("Vex");
        let answer = dialog.handle(&InputEvent::Quit, &mut events);
        assert_eq!(answer, Some(ConfirmAnswer::Quit));
        assert!(!answer.unwrap().accepted());
        assert_eq!(events.cue_count(Cue::Deny), 0);
    }

    #[test]
    fn test_other_input_is_ignored() {
        let (mut dialog, mut events) = open("Vex");
        assert_eq!(dialog.handle(&InputEvent::key(Key::Return), &mut events), None);
        assert_eq!(dialog.handle(&InputEvent::typed('x'), &mut events), None);
        assert_eq!(
            dialog.handle(&InputEvent::PointerPressed(glam::Vec2::ZERO), &mut events),
            None
        );
    }

    #[test]
    fn test_pulse_wraps() {
        let (mut dialog, _) = open("Vex");
        for _ in 0..100 {
            dialog.update(0.1);
            assert!(dialog.pulse() >= 0.0 && dialog.pulse() < TAU);
        }
        let size = dialog.gem_size();
        assert!((20.0..=40.0).contains(&size));
    }
}
