//! Game actions as plain data.
//!
//! Everything that game logic can ask the runtime to do is expressed as a
//! [`GameAction`] record: show a message, open a menu, set a flag, teleport
//! the avatar, enter a map. Object-relative behavior is an [`ObjectAction`]
//! that only becomes runnable once it is bound to a subject by name through
//! [`GameAction::Object`].
//!
//! Actions are executed by
//! [`apply_game_action`](crate::systems::actions::apply_game_action), the
//! single place where they touch the world.
//!
//! Submodules overview
//! - [`condition`] – predicates over [`WorldSignals`] used to gate actions

pub mod condition;

use serde::{Deserialize, Serialize};

use crate::actions::condition::Condition;
use crate::modal::conversation::Conversation;
use crate::resources::worldsignals::WorldSignals;

/// A labelled choice in a selection menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    pub action: GameAction,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, action: GameAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameAction {
    Noop,
    /// Enqueue a message box.
    ShowMessage { text: String },
    /// Enqueue a selection menu with `selection` initially highlighted.
    ShowMenu {
        entries: Vec<MenuEntry>,
        selection: usize,
    },
    /// Defer `action` until every event queued before it has finished.
    Queue { action: Box<GameAction> },
    /// Apply several actions in order.
    Sequence { actions: Vec<GameAction> },
    SetFlag { key: String, value: bool },
    SetValue { key: String, value: i32 },
    AddValue { key: String, amount: i32 },
    /// Move the avatar's top-left corner to a world position.
    TeleportTo { x: f32, y: f32 },
    /// Centre the avatar inside tile (`i`, `j`) of the current map.
    TeleportToTile { i: u32, j: u32 },
    EnterMap { name: String },
    /// Run an object action against the named object of the current map.
    Object { object: String, action: ObjectAction },
}

impl GameAction {
    pub fn message(text: impl Into<String>) -> Self {
        GameAction::ShowMessage { text: text.into() }
    }

    pub fn queued(action: GameAction) -> Self {
        GameAction::Queue {
            action: Box::new(action),
        }
    }

    pub fn sequence(actions: impl IntoIterator<Item = GameAction>) -> Self {
        GameAction::Sequence {
            actions: actions.into_iter().collect(),
        }
    }

    pub fn set_flag(key: impl Into<String>) -> Self {
        GameAction::SetFlag {
            key: key.into(),
            value: true,
        }
    }

    pub fn on_object(object: impl Into<String>, action: ObjectAction) -> Self {
        GameAction::Object {
            object: object.into(),
            action,
        }
    }
}

/// Behavior that needs a subject object to run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectAction {
    /// Open the menu produced by the subject's action generator.
    ShowInteractionMenu,
    /// Compile and show a conversation about the subject.
    Converse { conversation: Conversation },
    /// Run a plain game action.
    Run { action: Box<GameAction> },
}

impl ObjectAction {
    pub fn run(action: GameAction) -> Self {
        ObjectAction::Run {
            action: Box::new(action),
        }
    }
}

/// One option offered by an object's interaction menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionChoice {
    pub label: String,
    pub action: ObjectAction,
    /// Only offered while this holds.
    pub when: Option<Condition>,
}

/// Produces the interaction-menu entries for an object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionGenerator {
    pub choices: Vec<ActionChoice>,
}

impl ActionGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_choice(mut self, label: impl Into<String>, action: ObjectAction) -> Self {
        self.choices.push(ActionChoice {
            label: label.into(),
            action,
            when: None,
        });
        self
    }

    pub fn with_choice_when(
        mut self,
        label: impl Into<String>,
        action: ObjectAction,
        when: Condition,
    ) -> Self {
        self.choices.push(ActionChoice {
            label: label.into(),
            action,
            when: Some(when),
        });
        self
    }

    /// Menu entries currently available, each bound to `subject`.
    pub fn entries(&self, subject: &str, signals: &WorldSignals) -> Vec<MenuEntry> {
        self.choices
            .iter()
            .filter(|choice| choice.when.as_ref().is_none_or(|c| c.evaluate(signals)))
            .map(|choice| {
                MenuEntry::new(
                    choice.label.clone(),
                    GameAction::on_object(subject, choice.action.clone()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_binds_entries_to_subject() {
        let generator = ActionGenerator::new()
            .with_choice("Look", ObjectAction::run(GameAction::message("A crate.")));
        let entries = generator.entries("crate", &WorldSignals::default());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Look");
        match &entries[0].action {
            GameAction::Object { object, .. } => assert_eq!(object, "crate"),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn generator_filters_by_condition() {
        let generator = ActionGenerator::new()
            .with_choice("Look", ObjectAction::run(GameAction::Noop))
            .with_choice_when(
                "Unlock",
                ObjectAction::run(GameAction::set_flag("door_open")),
                Condition::has_flag("has_key"),
            );

        let mut signals = WorldSignals::default();
        assert_eq!(generator.entries("door", &signals).len(), 1);
        signals.set_flag("has_key", true);
        let entries = generator.entries("door", &signals);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].label, "Unlock");
    }

    #[test]
    fn actions_deserialize_from_json() {
        let json = r#"{"Sequence":{"actions":[{"SetFlag":{"key":"seen","value":true}},"Noop"]}}"#;
        let action: GameAction = serde_json::from_str(json).expect("valid action json");
        assert_eq!(
            action,
            GameAction::sequence([GameAction::set_flag("seen"), GameAction::Noop])
        );
    }
}
