//! Selection menu event.
//!
//! The highlighted entry moves one step per change of the vertical input
//! direction, not per tick: holding a direction scrolls once. Stepping past
//! either end wraps around. Confirm is honored only after
//! [`MIN_DISPLAY_SECS`] so the press that opened the menu cannot also pick
//! an entry.

use crate::actions::{ActionGenerator, GameAction, MenuEntry};
use crate::modal::{MIN_DISPLAY_SECS, blink_on};
use crate::resources::input::InputState;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;

#[derive(Debug, Clone)]
pub struct SelectionMenu {
    pub title: Option<String>,
    pub entries: Vec<MenuEntry>,
    selected: usize,
    /// Vertical direction seen on the previous update.
    last_direction: i32,
    started_at: Option<f32>,
    done: bool,
}

impl SelectionMenu {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self {
            title: None,
            entries,
            selected: 0,
            last_direction: 0,
            started_at: None,
            done: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Start with `index` highlighted, clamped to the entry range.
    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected = index.min(self.entries.len().saturating_sub(1));
        self
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    fn step(&mut self, direction: i32) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        self.selected = if direction > 0 {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }

    /// Browse and confirm. Returns the chosen entry's action when confirmed.
    ///
    /// Confirming an empty menu closes it without an action.
    pub fn update(&mut self, time: &WorldTime, input: &InputState) -> Option<GameAction> {
        let start = *self.started_at.get_or_insert(time.elapsed);

        let direction = input.vertical_step();
        if direction != self.last_direction {
            if direction != 0 {
                self.step(direction);
            }
            self.last_direction = direction;
        }

        if input.confirm.active && time.elapsed - start >= MIN_DISPLAY_SECS {
            self.done = true;
            return self
                .entries
                .get(self.selected)
                .map(|entry| entry.action.clone());
        }
        None
    }

    /// Whether the highlight is drawn this frame.
    pub fn highlight_visible(&self, game_time: f32) -> bool {
        blink_on(game_time)
    }
}

/// Interaction menu for `subject`: every available generator choice, each
/// bound to the subject by name.
pub fn object_interaction_menu(
    subject: &str,
    generator: &ActionGenerator,
    signals: &WorldSignals,
) -> SelectionMenu {
    SelectionMenu::new(generator.entries(subject, signals)).with_title(subject)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ObjectAction;

    fn at(elapsed: f32) -> WorldTime {
        WorldTime {
            elapsed,
            delta: 0.016,
            ..WorldTime::default()
        }
    }

    fn three_entries() -> SelectionMenu {
        SelectionMenu::new(vec![
            MenuEntry::new("a", GameAction::set_flag("a")),
            MenuEntry::new("b", GameAction::set_flag("b")),
            MenuEntry::new("c", GameAction::set_flag("c")),
        ])
    }

    fn holding_down() -> InputState {
        let mut input = InputState::default();
        input.direction_down.active = true;
        input
    }

    fn holding_up() -> InputState {
        let mut input = InputState::default();
        input.direction_up.active = true;
        input
    }

    #[test]
    fn held_direction_steps_once() {
        let mut menu = three_entries();
        for tick in 0..10 {
            menu.update(&at(tick as f32 * 0.016), &holding_down());
        }
        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn each_edge_steps_once() {
        let mut menu = three_entries();
        menu.update(&at(0.0), &holding_down());
        menu.update(&at(0.1), &InputState::default());
        menu.update(&at(0.2), &holding_down());
        assert_eq!(menu.selected(), 2);
    }

    #[test]
    fn reversing_direction_is_an_edge() {
        let mut menu = three_entries();
        menu.update(&at(0.0), &holding_down());
        menu.update(&at(0.1), &holding_up());
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut menu = three_entries();
        menu.update(&at(0.0), &holding_up());
        assert_eq!(menu.selected(), 2);

        let mut menu = three_entries().with_selection(2);
        menu.update(&at(0.0), &holding_down());
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn confirm_returns_highlighted_action_after_minimum_display() {
        let mut menu = three_entries().with_selection(1);
        let mut confirm = InputState::default();
        confirm.confirm.active = true;

        assert_eq!(menu.update(&at(3.0), &confirm), None);
        assert_eq!(menu.update(&at(3.4), &confirm), None);
        assert!(!menu.is_done());
        assert_eq!(
            menu.update(&at(3.6), &confirm),
            Some(GameAction::set_flag("b"))
        );
        assert!(menu.is_done());
    }

    #[test]
    fn empty_menu_closes_without_action() {
        let mut menu = SelectionMenu::new(vec![]);
        let mut confirm = InputState::default();
        confirm.confirm.active = true;
        menu.update(&at(0.0), &holding_down());
        assert_eq!(menu.update(&at(1.0), &confirm), None);
        assert!(menu.is_done());
    }

    #[test]
    fn selection_is_clamped() {
        let menu = three_entries().with_selection(9);
        assert_eq!(menu.selected(), 2);
    }

    #[test]
    fn interaction_menu_binds_subject() {
        let generator = ActionGenerator::new()
            .with_choice("Look", ObjectAction::run(GameAction::message("An old well.")));
        let menu = object_interaction_menu("well", &generator, &WorldSignals::default());
        assert_eq!(menu.title.as_deref(), Some("well"));
        assert_eq!(menu.entries.len(), 1);
        assert!(matches!(
            &menu.entries[0].action,
            GameAction::Object { object, .. } if object == "well"
        ));
    }
}
