//! Game event system for decoupled communication between systems.
//!
//! Creation stages and screens emit events, the shell consumes them once per
//! frame. This keeps audio out of game logic: a stage only says which cue
//! should play, never how.

/// Short sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    StartCreation,
    NameConfirm,
    ClassSelect,
    CreationComplete,
    Drip,
    Confirm,
    Deny,
}

impl Cue {
    pub const ALL: [Cue; 7] = [
        Cue::StartCreation,
        Cue::NameConfirm,
        Cue::ClassSelect,
        Cue::CreationComplete,
        Cue::Drip,
        Cue::Confirm,
        Cue::Deny,
    ];

    /// File name under the sounds directory
    pub fn file_name(self) -> &'static str {
        match self {
            Cue::StartCreation => "creation_start.wav",
            Cue::NameConfirm => "name_confirm.wav",
            Cue::ClassSelect => "class_select.wav",
            Cue::CreationComplete => "creation_complete.wav",
            Cue::Drip => "blood_drip.wav",
            Cue::Confirm => "confirm.wav",
            Cue::Deny => "deny.wav",
        }
    }
}

/// Looping background music
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    TitleTheme,
    CreationTheme,
    NameEntry,
    ClassSelect,
    SummaryTheme,
    GameTheme,
}

impl Track {
    /// File name under the sounds directory
    pub fn file_name(self) -> &'static str {
        match self {
            Track::TitleTheme => "title_theme.mp3",
            Track::CreationTheme => "creation_theme.mp3",
            Track::NameEntry => "name_entry.mp3",
            Track::ClassSelect => "class_select.mp3",
            Track::SummaryTheme => "summary_theme.mp3",
            Track::GameTheme => "game_theme.mp3",
        }
    }
}

/// Game events that systems can emit and subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Fire-and-forget sound effect
    PlayCue(Cue),
    /// Replace the current background music
    PlayMusic(Track),
    /// Silence the background music
    StopMusic,
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Pending events, oldest first
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    /// Count pending plays of one cue
    pub fn cue_count(&self, cue: Cue) -> usize {
        self.events
            .iter()
            .filter(|e| **e == GameEvent::PlayCue(cue))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::PlayMusic(Track::TitleTheme));
        queue.push(GameEvent::PlayCue(Cue::Confirm));
        queue.push(GameEvent::StopMusic);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            [
                GameEvent::PlayMusic(Track::TitleTheme),
                GameEvent::PlayCue(Cue::Confirm),
                GameEvent::StopMusic,
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cue_count() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::PlayCue(Cue::Drip));
        queue.push(GameEvent::PlayCue(Cue::Deny));
        queue.push(GameEvent::PlayCue(Cue::Drip));
        assert_eq!(queue.cue_count(Cue::Drip), 2);
        assert_eq!(queue.cue_count(Cue::Confirm), 0);
    }

    #[test]
    fn test_every_cue_has_a_wav() {
        for cue in Cue::ALL {
            assert!(cue.file_name().ends_with(".wav"));
        }
    }
}
