//! Class selection stage.
//!
//! Lays the four classes out in a 2x2 grid of buttons. Hovering shows the
//! class description as a tooltip; pressing inside a button picks the class.

use super::StageOutcome;
use crate::classes::DarkClass;
use crate::constants::*;
use crate::events::{Cue, EventQueue, GameEvent, Track};
use crate::input::InputEvent;
use glam::Vec2;

/// Axis-aligned hit box. Half-open: the max edges are outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl HitRect {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let min = center - size / 2.0;
        Self { min, max: min + size }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }

    pub fn overlaps(&self, other: &HitRect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// A selectable class button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassOption {
    pub class: DarkClass,
    pub rect: HitRect,
}

/// Place every class in catalog order: first column top to bottom, then the second.
pub fn layout_class_grid(viewport: Vec2) -> [ClassOption; 4] {
    let center = viewport / 2.0;
    let size = Vec2::new(CLASS_BUTTON_WIDTH, CLASS_BUTTON_HEIGHT);
    DarkClass::ALL.map(|class| {
        let i = class as usize;
        let (column, row) = (i / CLASS_GRID_ROWS, i % CLASS_GRID_ROWS);
        let x = if column == 0 {
            center.x - CLASS_COLUMN_OFFSET
        } else {
            center.x + CLASS_COLUMN_OFFSET
        };
        let y = center.y + CLASS_FIRST_ROW_OFFSET + row as f32 * CLASS_ROW_SPACING;
        ClassOption {
            class,
            rect: HitRect::from_center_size(Vec2::new(x, y), size),
        }
    })
}

/// What the tooltip should show this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tooltip {
    pub text: &'static str,
    /// Top-left corner of the tooltip box
    pub anchor: Vec2,
}

pub struct ClassSelect {
    options: [ClassOption; 4],
    pointer: Option<Vec2>,
    hovered: Option<DarkClass>,
}

impl ClassSelect {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            options: layout_class_grid(viewport),
            pointer: None,
            hovered: None,
        }
    }

    /// Enter the stage, starting its music
    pub fn begin(viewport: Vec2, events: &mut EventQueue) -> Self {
        events.push(GameEvent::PlayMusic(Track::ClassSelect));
        Self::new(viewport)
    }

    /// Re-run the layout after the window changed size
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.options = layout_class_grid(viewport);
        self.hovered = self.pointer.and_then(|p| self.class_at(p));
    }

    /// The class whose button contains `point`, if exactly one does
    pub fn class_at(&self, point: Vec2) -> Option<DarkClass> {
        let mut hits = self.options.iter().filter(|o| o.rect.contains(point));
        match (hits.next(), hits.next()) {
            (Some(option), None) => Some(option.class),
            _ => None,
        }
    }

    /// Feed one input event. Returns the outcome once the stage ends.
    pub fn handle(&mut self, event: &InputEvent, events: &mut EventQueue) -> Option<StageOutcome<DarkClass>> {
        match *event {
            InputEvent::Quit => {
                events.push(GameEvent::StopMusic);
                Some(StageOutcome::Cancelled)
            }
            InputEvent::PointerMoved(pos) => {
                self.pointer = Some(pos);
                None
            }
            InputEvent::PointerPressed(pos) => {
                self.pointer = Some(pos);
                let class = self.class_at(pos)?;
                events.push(GameEvent::PlayCue(Cue::ClassSelect));
                events.push(GameEvent::StopMusic);
                Some(StageOutcome::Done(class))
            }
            InputEvent::Key { .. } => None,
        }
    }

    /// Per-frame update after this frame's input has been handled
    pub fn update(&mut self) {
        self.hovered = self.pointer.and_then(|p| self.class_at(p));
    }

    /// Handle a whole frame: every event in order, then the hover state
    pub fn advance(&mut self, input: &[InputEvent], events: &mut EventQueue) -> Option<StageOutcome<DarkClass>> {
        for event in input {
            if let Some(outcome) = self.handle(event, events) {
                return Some(outcome);
            }
        }
        self.update();
        None
    }

    pub fn options(&self) -> &[ClassOption; 4] {
        &self.options
    }

    pub fn hovered(&self) -> Option<DarkClass> {
        self.hovered
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        let class = self.hovered?;
        let pointer = self.pointer?;
        Some(Tooltip {
            text: class.def().description,
            anchor: pointer + Vec2::splat(TOOLTIP_OFFSET),
        })
    }

    /// Center of a class button, handy for scripted input
    pub fn button_center(&self, class: DarkClass) -> Vec2 {
        self.options[class as usize].rect.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

    #[test]
    fn test_layout_places_columns_in_catalog_order() {
        let grid = layout_class_grid(VIEWPORT);
        let centers: Vec<Vec2> = grid.iter().map(|o| o.rect.center()).collect();
        assert_eq!(centers[0], Vec2::new(440.0, 260.0));
        assert_eq!(centers[1], Vec2::new(440.0, 460.0));
        assert_eq!(centers[2], Vec2::new(840.0, 260.0));
        assert_eq!(centers[3], Vec2::new(840.0, 460.0));
        assert_eq!(grid[3].class, DarkClass::GarnetApostle);
        assert_eq!(grid[0].rect.size(), Vec2::new(300.0, 80.0));
    }

    #[test]
    fn test_layout_never_overlaps() {
        for viewport in [VIEWPORT, Vec2::new(800.0, 600.0), Vec2::new(1920.0, 1080.0), Vec2::ZERO] {
            let grid = layout_class_grid(viewport);
            for (i, a) in grid.iter().enumerate() {
                for b in &grid[i + 1..] {
                    assert!(!a.rect.overlaps(&b.rect), "{:?} overlaps {:?}", a.class, b.class);
                }
            }
        }
    }

    #[test]
    fn test_hit_rect_edges() {
        let rect = HitRect::from_center_size(Vec2::new(10.0, 10.0), Vec2::new(4.0, 2.0));
        assert!(rect.contains(Vec2::new(8.0, 9.0)));
        assert!(!rect.contains(Vec2::new(12.0, 10.0)));
        assert!(!rect.contains(Vec2::new(10.0, 11.0)));
    }

    #[test]
    fn test_press_inside_selects_that_class() {
        for class in DarkClass::ALL {
            let mut events = EventQueue::new();
            let mut select = ClassSelect::new(VIEWPORT);
            let corner = select.options()[class as usize].rect.min;
            let outcome = select.advance(&[InputEvent::PointerPressed(corner)], &mut events);
            assert_eq!(outcome, Some(StageOutcome::Done(class)));
            assert_eq!(events.cue_count(Cue::ClassSelect), 1);
        }
    }

    #[test]
    fn test_press_outside_never_ends_stage() {
        let mut events = EventQueue::new();
        let mut select = ClassSelect::new(VIEWPORT);
        let misses = [
            Vec2::new(640.0, 360.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(590.0, 260.0),
            Vec2::new(440.0, 300.0),
            Vec2::new(1279.0, 719.0),
        ];
        for pos in misses {
            assert_eq!(select.advance(&[InputEvent::PointerPressed(pos)], &mut events), None);
        }
        assert!(events.is_empty());
    }

    #[test]
    fn test_hover_shows_tooltip_near_pointer() {
        let mut events = EventQueue::new();
        let mut select = ClassSelect::new(VIEWPORT);
        let pos = select.button_center(DarkClass::Nightblade);
        select.advance(&[InputEvent::PointerMoved(pos)], &mut events);

        assert_eq!(select.hovered(), Some(DarkClass::Nightblade));
        let tooltip = select.tooltip().unwrap();
        assert!(tooltip.text.starts_with("Shadowy assassin"));
        assert_eq!(tooltip.anchor, pos + Vec2::splat(20.0));

        select.advance(&[InputEvent::PointerMoved(Vec2::ZERO)], &mut events);
        assert_eq!(select.hovered(), None);
        assert!(select.tooltip().is_none());
    }

    #[test]
    fn test_quit_cancels() {
        let mut events = EventQueue::new();
        let mut select = ClassSelect::begin(VIEWPORT, &mut events);
        let outcome = select.advance(&[InputEvent::Quit], &mut events);
        assert_eq!(outcome, Some(StageOutcome::Cancelled));
    }

    #[test]
    fn test_keys_are_ignored() {
        let mut events = EventQueue::new();
        let mut select = ClassSelect::new(VIEWPORT);
        let outcome = select.advance(&InputEvent::typed_str("yn \n"), &mut events);
        assert_eq!(outcome, None);
    }

    #[test]
    fn test_relayout_follows_viewport() {
        let mut select = ClassSelect::new(VIEWPORT);
        select.set_viewport(Vec2::new(1920.0, 1080.0));
        assert_eq!(select.button_center(DarkClass::Bloodmancer), Vec2::new(760.0, 440.0));
    }
}
