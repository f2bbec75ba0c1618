//! Top-level screen state machine.
//!
//! `Title -(Space)-> FadeOut -(2s)-> Creation -> Summary -(Y)-> Game`,
//! with `Summary -(N)-> Creation` throwing the character away. A window
//! close on any screen, or a cancelled creation, ends the program.

use crate::character::Character;
use crate::constants::*;
use crate::creation::{CreationFlow, CreationOutcome};
use crate::events::{EventQueue, GameEvent, Track};
use crate::input::{InputEvent, Key};
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowControl {
    Continue,
    Exit,
}

pub enum Screen {
    Title,
    FadeOut { elapsed: f32 },
    Creation(CreationFlow),
    Summary(Character),
    Game { character: Character, show_inventory: bool },
}

pub struct ScreenFlow {
    screen: Screen,
    viewport: Vec2,
    /// Seconds since the program started
    time: f32,
}

impl ScreenFlow {
    pub fn new(viewport: Vec2, events: &mut EventQueue) -> Self {
        events.push(GameEvent::PlayMusic(Track::TitleTheme));
        Self {
            screen: Screen::Title,
            viewport,
            time: 0.0,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        if let Screen::Creation(flow) = &mut self.screen {
            flow.set_viewport(viewport);
        }
    }

    /// Step the current screen by one frame
    pub fn advance(
        &mut self,
        input: &[InputEvent],
        dt: f32,
        rng: &mut impl Rng,
        events: &mut EventQueue,
    ) -> FlowControl {
        self.time += dt;

        if let Screen::Creation(flow) = &mut self.screen {
            return match flow.advance(input, dt, rng, events) {
                Some(CreationOutcome::Created(character)) => {
                    self.show_summary(character, rng, events);
                    FlowControl::Continue
                }
                Some(CreationOutcome::Cancelled) => FlowControl::Exit,
                None => FlowControl::Continue,
            };
        }

        for event in input {
            match *event {
                InputEvent::Quit => return FlowControl::Exit,
                InputEvent::Key { key, .. } => self.handle_key(key, events),
                _ => {}
            }
        }

        if let Screen::FadeOut { elapsed } = &mut self.screen {
            *elapsed += dt;
            if *elapsed >= FADE_DURATION {
                self.screen = self.creation_screen(events);
            }
        }
        FlowControl::Continue
    }

    fn handle_key(&mut self, key: Key, events: &mut EventQueue) {
        let screen = std::mem::replace(&mut self.screen, Screen::Title);
        self.screen = match (screen, key) {
            (Screen::Title, Key::Space) => Screen::FadeOut { elapsed: 0.0 },
            (Screen::Summary(character), Key::Y) => {
                events.push(GameEvent::PlayMusic(Track::GameTheme));
                log::info!("{} enters the dark", character.name);
                Screen::Game {
                    character,
                    show_inventory: false,
                }
            }
            (Screen::Summary(character), Key::N) => {
                log::info!("{} discarded", character.name);
                self.creation_screen(events)
            }
            (Screen::Game { character, show_inventory }, Key::I) => Screen::Game {
                character,
                show_inventory: !show_inventory,
            },
            (screen, _) => screen,
        };
    }

    fn creation_screen(&self, events: &mut EventQueue) -> Screen {
        events.push(GameEvent::PlayMusic(Track::CreationTheme));
        Screen::Creation(CreationFlow::begin(self.viewport, events))
    }

    fn show_summary(&mut self, mut character: Character, rng: &mut impl Rng, events: &mut EventQueue) {
        character.name = apply_flow_epithet(&character.name, rng);
        match serde_json::to_string(&character) {
            Ok(json) => log::info!("shadowborn created: {}", json),
            Err(e) => log::warn!("could not serialize character: {}", e),
        }
        events.push(GameEvent::PlayMusic(Track::SummaryTheme));
        self.screen = Screen::Summary(character);
    }
}

/// Give a hand-picked name a second epithet. Auto-generated names already
/// carry one and are returned unchanged.
pub fn apply_flow_epithet(name: &str, rng: &mut impl Rng) -> String {
    if name.starts_with(AUTO_NAME_PREFIX) {
        return name.to_string();
    }
    match FLOW_EPITHETS.choose(rng) {
        Some(epithet) => format!("{} {}", name, epithet),
        None => name.to_string(),
    }
}

/// Background tint of the title screen: steps through ten shades of
/// near-black crimson every 300 ms
pub fn title_tint(time: f32) -> [u8; 3] {
    let step = (time / TITLE_PULSE_STEP) as u32 % TITLE_PULSE_STEPS;
    [10 + (step / 2) as u8, 0, 5 + (step / 3) as u8]
}

/// The title prompt shows for the first half of every period
pub fn title_prompt_visible(time: f32) -> bool {
    time % TITLE_PROMPT_PERIOD < TITLE_PROMPT_PERIOD / 2.0
}

/// Opacity of the black overlay while fading out of the title
pub fn fade_alpha(elapsed: f32) -> f32 {
    (elapsed / FADE_DURATION).clamp(0.0, 1.0)
}
