//! Name entry stage.
//!
//! Captures up to twelve alphanumeric characters while a blood-writing
//! animation reveals them. Return either opens the confirmation dialog or,
//! with nothing typed, hands out an auto-generated "Rouge" name.

use super::confirm::{ConfirmAnswer, ConfirmDialog};
use super::StageOutcome;
use crate::constants::*;
use crate::events::{Cue, EventQueue, GameEvent, Track};
use crate::input::{InputEvent, Key};
use rand::Rng;

/// Epithets for an auto-generated name
pub const DARK_TITLES: [&str; 5] = [
    "the Bloodsoaked",
    "of the Crimson Veil",
    "the Garnet Ghost",
    "Bearer of the Dark Shard",
    "the Void-Touched",
];

/// Name for a shadowborn who submitted an empty draft
pub fn auto_name(rng: &mut impl Rng) -> String {
    let title = DARK_TITLES[rng.gen_range(0..DARK_TITLES.len())];
    format!("{} {}", AUTO_NAME_PREFIX, title)
}

/// The in-progress name. Only ever holds alphanumeric characters, at most
/// `MAX_NAME_LEN` of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftName {
    text: String,
}

impl DraftName {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `c` if it is alphanumeric and there is room. Returns whether it was taken.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_alphanumeric() || self.len() >= MAX_NAME_LEN {
            return false;
        }
        self.text.push(c);
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Progressive reveal of the draft name
#[derive(Debug, Clone, Default)]
pub struct RevealAnimation {
    /// Cursor position in characters (fractional)
    position: f32,
    complete: bool,
}

impl RevealAnimation {
    /// Advance the cursor. Returns true on the frame the reveal completes.
    pub fn update(&mut self, len: usize, dt: f32) -> bool {
        if self.complete || len == 0 {
            return false;
        }
        self.position += dt * REVEAL_CHARS_PER_SECOND;
        if self.position >= len as f32 {
            self.complete = true;
            return true;
        }
        false
    }

    /// The draft grew: keep the cursor where it is but reveal again
    pub fn invalidate(&mut self) {
        self.complete = false;
    }

    /// The draft shrank: reveal from the start
    pub fn restart(&mut self) {
        self.position = 0.0;
        self.complete = false;
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// How far into a draft of `len` characters the reveal has got
    pub fn progress(&self, len: usize) -> f32 {
        self.position.min(len as f32)
    }

    /// Opacity of character `index` (0.0 to 1.0), or None while still hidden.
    /// Characters behind the cursor are solid; the one under it fades in.
    pub fn char_alpha(&self, index: usize, len: usize) -> Option<f32> {
        let coverage = self.progress(len) - index as f32;
        (coverage > 0.0).then(|| coverage.min(1.0))
    }
}

pub struct NameEntry {
    draft: DraftName,
    reveal: RevealAnimation,
    /// Drives the caret blink
    caret_timer: f32,
    /// Nested confirmation sub-state
    confirm: Option<ConfirmDialog>,
}

impl NameEntry {
    pub fn new() -> Self {
        Self {
            draft: DraftName::new(),
            reveal: RevealAnimation::default(),
            caret_timer: 0.0,
            confirm: None,
        }
    }

    /// Enter the stage, starting its music
    pub fn begin(events: &mut EventQueue) -> Self {
        events.push(GameEvent::PlayMusic(Track::NameEntry));
        Self::new()
    }

    /// Feed one input event. Returns the outcome once the stage ends.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        rng: &mut impl Rng,
        events: &mut EventQueue,
    ) -> Option<StageOutcome<String>> {
        if let Some(dialog) = &mut self.confirm {
            return match dialog.handle(event, events)? {
                ConfirmAnswer::Accepted => {
                    events.push(GameEvent::PlayCue(Cue::NameConfirm));
                    Some(self.finish(StageOutcome::Done(self.draft.as_str().to_string()), events))
                }
                ConfirmAnswer::Denied => {
                    self.confirm = None;
                    None
                }
                ConfirmAnswer::Quit => Some(self.finish(StageOutcome::Cancelled, events)),
            };
        }

        match event {
            InputEvent::Quit => Some(self.finish(StageOutcome::Cancelled, events)),
            InputEvent::Key { key: Key::Return, .. } => {
                if self.draft.is_empty() {
                    let name = auto_name(rng);
                    events.push(GameEvent::PlayCue(Cue::Confirm));
                    Some(self.finish(StageOutcome::Done(name), events))
                } else {
                    self.confirm = Some(ConfirmDialog::open(self.draft.as_str(), events));
                    None
                }
            }
            InputEvent::Key { key: Key::Backspace, .. } => {
                self.draft.pop();
                self.reveal.restart();
                None
            }
            InputEvent::Key { text: Some(c), .. } => {
                if self.draft.push(*c) {
                    self.reveal.invalidate();
                }
                None
            }
            _ => None,
        }
    }

    /// Per-frame update after this frame's input has been handled
    pub fn update(&mut self, dt: f32, events: &mut EventQueue) {
        if let Some(dialog) = &mut self.confirm {
            dialog.update(dt);
            return;
        }
        self.caret_timer += dt;
        if self.reveal.update(self.draft.len(), dt) {
            events.push(GameEvent::PlayCue(Cue::Drip));
        }
    }

    /// Handle a whole frame: every event in order, then the clock
    pub fn advance(
        &mut self,
        input: &[InputEvent],
        dt: f32,
        rng: &mut impl Rng,
        events: &mut EventQueue,
    ) -> Option<StageOutcome<String>> {
        for event in input {
            if let Some(outcome) = self.handle(event, rng, events) {
                return Some(outcome);
            }
        }
        self.update(dt, events);
        None
    }

    fn finish(&mut self, outcome: StageOutcome<String>, events: &mut EventQueue) -> StageOutcome<String> {
        self.confirm = None;
        events.push(GameEvent::StopMusic);
        outcome
    }

    pub fn draft(&self) -> &DraftName {
        &self.draft
    }

    pub fn reveal(&self) -> &RevealAnimation {
        &self.reveal
    }

    pub fn confirm_dialog(&self) -> Option<&ConfirmDialog> {
        self.confirm.as_ref()
    }

    /// The caret blinks twice a second until the reveal completes
    pub fn caret_visible(&self) -> bool {
        !self.reveal.is_complete()
            && self.caret_timer % CARET_BLINK_PERIOD < CARET_BLINK_PERIOD * CARET_VISIBLE_FRACTION
    }
}

impl Default for NameEntry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn type_name(entry: &mut NameEntry, text: &str, rng: &mut StdRng, events: &mut EventQueue) {
        let input = InputEvent::typed_str(text);
        assert!(entry.advance(&input, 0.0, rng, events).is_none());
    }

    #[test]
    fn test_draft_rejects_non_alphanumeric() {
        let mut draft = DraftName::new();
        assert!(draft.push('A'));
        assert!(!draft.push('-'));
        assert!(!draft.push(' '));
        assert!(draft.push('7'));
        assert_eq!(draft.as_str(), "A7");
    }

    #[test]
    fn test_draft_caps_length() {
        let mut draft = DraftName::new();
        for c in "abcdefghijklmnop".chars() {
            draft.push(c);
        }
        assert_eq!(draft.len(), MAX_NAME_LEN);
        assert_eq!(draft.as_str(), "abcdefghijkl");
    }

    #[test]
    fn test_draft_counts_characters_not_bytes() {
        let mut draft = DraftName::new();
        for _ in 0..20 {
            draft.push('é');
        }
        assert_eq!(draft.len(), 12);
    }

    #[test]
    fn test_draft_invariant_under_random_edits() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut entry = NameEntry::new();
        let mut events = EventQueue::new();
        let pool = ['a', 'Z', '3', '!', ' ', '_', 'ß', '\u{7f}'];
        for _ in 0..2000 {
            let event = if rng.gen_bool(0.2) {
                InputEvent::key(Key::Backspace)
            } else {
                InputEvent::typed(pool[rng.gen_range(0..pool.len())])
            };
            entry.handle(&event, &mut rng, &mut events);
            let draft = entry.draft();
            assert!(draft.len() <= MAX_NAME_LEN);
            assert!(draft.as_str().chars().all(char::is_alphanumeric));
        }
    }

    #[test]
    fn test_begin_starts_music() {
        let mut events = EventQueue::new();
        let _entry = NameEntry::begin(&mut events);
        assert_eq!(events.pending(), [GameEvent::PlayMusic(Track::NameEntry)]);
    }

    #[test]
    fn test_empty_submit_auto_names() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut events = EventQueue::new();
        let mut entry = NameEntry::new();
        let outcome = entry.advance(&[InputEvent::key(Key::Return)], 0.016, &mut rng, &mut events);

        let name = match outcome {
            Some(StageOutcome::Done(name)) => name,
            other => panic!("expected a name, got {:?}", other),
        };
        assert!(name.starts_with("Rouge "));
        assert!(DARK_TITLES.iter().any(|t| name.ends_with(t)));
        assert!(entry.confirm_dialog().is_none());
        assert_eq!(events.cue_count(Cue::Confirm), 1);
    }

    #[test]
    fn test_auto_name_covers_all_titles_evenly() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0usize; 5];
        let samples = 10_000;
        for _ in 0..samples {
            let name = auto_name(&mut rng);
            let title = name.strip_prefix("Rouge ").unwrap();
            let idx = DARK_TITLES.iter().position(|t| *t == title).unwrap();
            counts[idx] += 1;
        }
        for count in counts {
            // Expected 2000 each; allow generous slack.
            assert!((1700..=2300).contains(&count), "counts {:?}", counts);
        }
    }

    #[test]
    fn test_confirm_yes_finishes_with_draft() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut events = EventQueue::new();
        let mut entry = NameEntry::new();
        type_name(&mut entry, "Vex", &mut rng, &mut events);

        assert!(entry.handle(&InputEvent::key(Key::Return), &mut rng, &mut events).is_none());
        assert_eq!(entry.confirm_dialog().unwrap().candidate(), "Vex");

        let outcome = entry.handle(&InputEvent::typed('y'), &mut rng, &mut events);
        assert_eq!(outcome, Some(StageOutcome::Done("Vex".to_string())));
        assert_eq!(events.cue_count(Cue::NameConfirm), 1);
        assert_eq!(events.pending().last(), Some(&GameEvent::StopMusic));
    }

    #[test]
    fn test_confirm_no_resumes_with_draft_intact() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut events = EventQueue::new();
        let mut entry = NameEntry::new();
        type_name(&mut entry, "Vex", &mut rng, &mut events);

        entry.handle(&InputEvent::key(Key::Return), &mut rng, &mut events);
        let outcome = entry.handle(&InputEvent::key(Key::N), &mut rng, &mut events);
        assert_eq!(outcome, None);
        assert!(entry.confirm_dialog().is_none());
        assert_eq!(entry.draft().as_str(), "Vex");

        // Editing resumes where it left off
        type_name(&mut entry, "a", &mut rng, &mut events);
        assert_eq!(entry.draft().as_str(), "Vexa");
    }

    #[test]
    fn test_keys_go_to_dialog_while_open() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut events = EventQueue::new();
        let mut entry = NameEntry::new();
        type_name(&mut entry, "Vex", &mut rng, &mut events);
        entry.handle(&InputEvent::key(Key::Return), &mut rng, &mut events);

        // Neither typing nor backspace reaches the draft
        entry.handle(&InputEvent::typed('q'), &mut rng, &mut events);
        entry.handle(&InputEvent::key(Key::Backspace), &mut rng, &mut events);
        assert_eq!(entry.draft().as_str(), "Vex");
        assert!(entry.confirm_dialog().is_some());
    }

    #[test]
    fn test_quit_cancels_from_entry_and_dialog() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut events = EventQueue::new();

        let mut entry = NameEntry::new();
        type_name(&mut entry, "Ash", &mut rng, &mut events);
        assert_eq!(
            entry.handle(&InputEvent::Quit, &mut rng, &mut events),
            Some(StageOutcome::Cancelled)
        );

        let mut entry = NameEntry::new();
        type_name(&mut entry, "Ash", &mut rng, &mut events);
        entry.handle(&InputEvent::key(Key::Return), &mut rng, &mut events);
        assert_eq!(
            entry.handle(&InputEvent::Quit, &mut rng, &mut events),
            Some(StageOutcome::Cancelled)
        );
    }

    #[test]
    fn test_reveal_completes_once_with_drip() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut events = EventQueue::new();
        let mut entry = NameEntry::new();
        type_name(&mut entry, "Ash", &mut rng, &mut events);

        // 3 characters at 10/s take 0.3s
        for _ in 0..10 {
            entry.advance(&[], 0.05, &mut rng, &mut events);
        }
        assert!(entry.reveal().is_complete());
        assert_eq!(events.cue_count(Cue::Drip), 1);
        assert!(!entry.caret_visible());
    }

    #[test]
    fn test_append_restarts_reveal_from_cursor() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut events = EventQueue::new();
        let mut entry = NameEntry::new();
        type_name(&mut entry, "Ash", &mut rng, &mut events);
        for _ in 0..10 {
            entry.advance(&[], 0.05, &mut rng, &mut events);
        }

        type_name(&mut entry, "e", &mut rng, &mut events);
        assert!(!entry.reveal().is_complete());
        assert!(entry.reveal().progress(4) >= 3.0);

        entry.advance(&[], 0.2, &mut rng, &mut events);
        assert!(entry.reveal().is_complete());
        assert_eq!(events.cue_count(Cue::Drip), 2);
    }

    #[test]
    fn test_backspace_restarts_reveal_from_zero() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut events = EventQueue::new();
        let mut entry = NameEntry::new();
        type_name(&mut entry, "Ash", &mut rng, &mut events);
        for _ in 0..10 {
            entry.advance(&[], 0.05, &mut rng, &mut events);
        }

        entry.advance(&[InputEvent::key(Key::Backspace)], 0.0, &mut rng, &mut events);
        assert_eq!(entry.draft().as_str(), "As");
        assert!(!entry.reveal().is_complete());
        assert_eq!(entry.reveal().progress(2), 0.0);
    }

    #[test]
    fn test_rejected_char_keeps_reveal_complete() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut events = EventQueue::new();
        let mut entry = NameEntry::new();
        type_name(&mut entry, "Ash", &mut rng, &mut events);
        for _ in 0..10 {
            entry.advance(&[], 0.05, &mut rng, &mut events);
        }
        entry.advance(&[InputEvent::typed('#')], 0.0, &mut rng, &mut events);
        assert!(entry.reveal().is_complete());
    }

    #[test]
    fn test_caret_blinks_twice_per_second() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut events = EventQueue::new();
        let mut entry = NameEntry::new();

        entry.advance(&[], 0.25, &mut rng, &mut events);
        assert!(entry.caret_visible());
        entry.advance(&[], 0.5, &mut rng, &mut events);
        assert!(!entry.caret_visible());
        entry.advance(&[], 0.5, &mut rng, &mut events);
        assert!(entry.caret_visible());
    }

    #[test]
    fn test_char_alpha_fades_cursor_character() {
        let mut reveal = RevealAnimation::default();
        reveal.update(4, 0.125); // position 1.25
        assert_eq!(reveal.char_alpha(0, 4), Some(1.0));
        assert_eq!(reveal.char_alpha(1, 4), Some(0.25));
        assert_eq!(reveal.char_alpha(2, 4), None);
    }
}
