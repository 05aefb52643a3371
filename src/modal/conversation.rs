//! Dialogue trees compiled into selection menus.
//!
//! A [`Conversation`] is a list of questions the player may ask about a
//! subject object. Compiling it offers every currently available question
//! as a menu entry; picking one shows the answers as message boxes and then
//! runs the question's follow-up, bound to the same subject.

use serde::{Deserialize, Serialize};

use crate::actions::condition::Condition;
use crate::actions::{GameAction, MenuEntry, ObjectAction};
use crate::modal::selectionmenu::SelectionMenu;
use crate::resources::worldsignals::WorldSignals;

/// Label of the filler entry shown when no question is available.
pub const EMPTY_CONVERSATION_LABEL: &str = "...";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub speaker: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub answers: Vec<Answer>,
    /// Offered only while this holds; always offered when absent.
    #[serde(default)]
    pub available: Option<Condition>,
    /// Runs after the answers are dismissed.
    #[serde(default)]
    pub on_select: Option<ObjectAction>,
}

impl Question {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answers: Vec::new(),
            available: None,
            on_select: None,
        }
    }

    pub fn answer(mut self, speaker: impl Into<String>, text: impl Into<String>) -> Self {
        self.answers.push(Answer {
            speaker: speaker.into(),
            text: text.into(),
        });
        self
    }

    pub fn available_when(mut self, condition: Condition) -> Self {
        self.available = Some(condition);
        self
    }

    pub fn then(mut self, action: ObjectAction) -> Self {
        self.on_select = Some(action);
        self
    }

    pub fn is_available(&self, signals: &WorldSignals) -> bool {
        self.available
            .as_ref()
            .is_none_or(|condition| condition.evaluate(signals))
    }

    /// Action run when this question is picked while talking to `subject`.
    pub fn selection_action(&self, subject: &str) -> GameAction {
        let mut actions: Vec<GameAction> = self
            .answers
            .iter()
            .map(|a| GameAction::message(format!("{}:\n\n{}", a.speaker, a.text)))
            .collect();
        if let Some(follow_up) = &self.on_select {
            actions.push(GameAction::queued(GameAction::on_object(
                subject,
                follow_up.clone(),
            )));
        }
        GameAction::sequence(actions)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub questions: Vec<Question>,
}

impl Conversation {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Build the menu for the questions available right now. Never empty.
    pub fn compile(&self, subject: &str, signals: &WorldSignals) -> SelectionMenu {
        let mut entries: Vec<MenuEntry> = self
            .questions
            .iter()
            .filter(|q| q.is_available(signals))
            .map(|q| MenuEntry::new(q.prompt.clone(), q.selection_action(subject)))
            .collect();
        if entries.is_empty() {
            entries.push(MenuEntry::new(EMPTY_CONVERSATION_LABEL, GameAction::Noop));
        }
        SelectionMenu::new(entries).with_title(subject)
    }
}
