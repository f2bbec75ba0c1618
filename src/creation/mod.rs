//! Character creation flow.
//!
//! Sequences the stages of building a shadowborn:
//!
//! `NameEntry -> NameConfirm -> ClassSelect -> RollStats -> Assemble -> Done`
//!
//! `NameConfirm` is nested inside name entry. A window close during name
//! entry, the confirmation dialog or class selection ends the flow as
//! `Cancelled` and no character is produced. Stat rolling and assembly have
//! no input and complete in the same frame the class is picked.
//!
//! The flow is stepped once per frame with that frame's input events and
//! elapsed time, so it never blocks and can be driven by a script in tests.

pub mod assembly;
pub mod class_select;
pub mod confirm;
pub mod name_entry;
pub mod stats;

pub use class_select::ClassSelect;
pub use name_entry::NameEntry;

use crate::character::Character;
use crate::classes::DarkClass;
use crate::events::{Cue, EventQueue, GameEvent};
use crate::input::InputEvent;
use glam::Vec2;
use rand::Rng;

/// How a single stage ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome<T> {
    Done(T),
    Cancelled,
}

/// How the whole flow ended
#[derive(Debug, Clone, PartialEq)]
pub enum CreationOutcome {
    Created(Character),
    Cancelled,
}

/// Observable position in the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationState {
    NameEntry,
    NameConfirm,
    ClassSelect,
    RollStats,
    Assemble,
    Done,
    Cancelled,
}

enum Stage {
    Name(NameEntry),
    Class { name: String, select: ClassSelect },
    Finished(CreationState),
}

pub struct CreationFlow {
    stage: Stage,
    viewport: Vec2,
}

impl CreationFlow {
    /// Start a new flow at name entry
    pub fn begin(viewport: Vec2, events: &mut EventQueue) -> Self {
        events.push(GameEvent::PlayCue(Cue::StartCreation));
        log::debug!("creation: entering {:?}", CreationState::NameEntry);
        Self {
            stage: Stage::Name(NameEntry::begin(events)),
            viewport,
        }
    }

    pub fn state(&self) -> CreationState {
        match &self.stage {
            Stage::Name(entry) if entry.confirm_dialog().is_some() => CreationState::NameConfirm,
            Stage::Name(_) => CreationState::NameEntry,
            Stage::Class { .. } => CreationState::ClassSelect,
            Stage::Finished(state) => *state,
        }
    }

    /// Step the flow by one frame. Events are handled in order; once a stage
    /// ends, the remaining events of the frame go to the next stage.
    /// Returns the outcome on the frame the flow ends, None otherwise.
    pub fn advance(
        &mut self,
        input: &[InputEvent],
        dt: f32,
        rng: &mut impl Rng,
        events: &mut EventQueue,
    ) -> Option<CreationOutcome> {
        for event in input {
            if let Some(outcome) = self.handle(event, rng, events) {
                return Some(outcome);
            }
        }
        match &mut self.stage {
            Stage::Name(entry) => entry.update(dt, events),
            Stage::Class { select, .. } => select.update(),
            Stage::Finished(_) => {}
        }
        None
    }

    fn handle(
        &mut self,
        event: &InputEvent,
        rng: &mut impl Rng,
        events: &mut EventQueue,
    ) -> Option<CreationOutcome> {
        match &mut self.stage {
            Stage::Name(entry) => match entry.handle(event, rng, events)? {
                StageOutcome::Done(name) => {
                    log::debug!("creation: name {:?} accepted, entering {:?}", name, CreationState::ClassSelect);
                    self.stage = Stage::Class {
                        name,
                        select: ClassSelect::begin(self.viewport, events),
                    };
                    None
                }
                StageOutcome::Cancelled => Some(self.cancel()),
            },
            Stage::Class { name, select } => match select.handle(event, events)? {
                StageOutcome::Done(class) => {
                    let name = std::mem::take(name);
                    Some(self.complete(name, class, rng, events))
                }
                StageOutcome::Cancelled => Some(self.cancel()),
            },
            Stage::Finished(_) => None,
        }
    }

    fn complete(
        &mut self,
        name: String,
        class: DarkClass,
        rng: &mut impl Rng,
        events: &mut EventQueue,
    ) -> CreationOutcome {
        log::debug!("creation: {} chosen, entering {:?}", class.name(), CreationState::RollStats);
        let stats = stats::roll_stats(class, rng);
        log::debug!("creation: rolled {:?}, entering {:?}", stats, CreationState::Assemble);
        let character = assembly::assemble(name, class, stats, rng);
        events.push(GameEvent::PlayCue(Cue::CreationComplete));
        self.stage = Stage::Finished(CreationState::Done);
        CreationOutcome::Created(character)
    }

    fn cancel(&mut self) -> CreationOutcome {
        log::info!("creation cancelled from {:?}", self.state());
        self.stage = Stage::Finished(CreationState::Cancelled);
        CreationOutcome::Cancelled
    }

    /// Re-run layouts after the window changed size
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        if let Stage::Class { select, .. } = &mut self.stage {
            select.set_viewport(viewport);
        }
    }

    pub fn name_entry(&self) -> Option<&NameEntry> {
        match &self.stage {
            Stage::Name(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn class_select(&self) -> Option<&ClassSelect> {
        match &self.stage {
            Stage::Class { select, .. } => Some(select),
            _ => None,
        }
    }
}

/// Run a whole creation flow over a finite sequence of frames, each a batch
/// of input events and the time it took. Returns the character, or None if
/// the flow was cancelled or the frames ran out first.
pub fn create_character<I>(
    frames: I,
    viewport: Vec2,
    rng: &mut impl Rng,
    events: &mut EventQueue,
) -> Option<Character>
where
    I: IntoIterator<Item = (Vec<InputEvent>, f32)>,
{
    let mut flow = CreationFlow::begin(viewport, events);
    for (input, dt) in frames {
        match flow.advance(&input, dt, rng, events) {
            Some(CreationOutcome::Created(character)) => return Some(character),
            Some(CreationOutcome::Cancelled) => return None,
            None => {}
        }
    }
    None
}
