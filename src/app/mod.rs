use crate::config::QuizConfig;
use crate::error::{QuizError, ValidationError};
use crate::history::HistoryStore;
use crate::model::{AppState, Category, Difficulty, HistoryEntry, Question, QuizResult};
use crate::session::{Advance, QuizSession};
use crate::storage::KeyValueStore;
use crate::validation::{QuizParameters, validate_quiz_parameters};
use serde::{Deserialize, Serialize};

// Submodules
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod requests;
pub mod view_models;

pub use requests::{Envelope, Reply};

/// Home-screen choices, persisted between runs through eframe storage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub topic_id: Option<i64>,
    pub topic_name: String,
    pub difficulty: Difficulty,
    pub count: u32,
}

impl Preferences {
    pub fn from_config(config: &QuizConfig) -> Self {
        Self {
            topic_id: None,
            topic_name: String::new(),
            difficulty: config.settings.default_difficulty,
            count: config.settings.default_count,
        }
    }
}

pub struct QuizApp {
    pub config: QuizConfig,
    pub state: AppState,
    pub prefs: Preferences,
    pub categories: Vec<Category>,
    pub categories_loading: bool,
    pub category_error: Option<String>,
    pub search: String,
    /// The user clicked a category, so search no longer auto-selects.
    pub manual_selection: bool,
    pub session: Option<QuizSession>,
    pub result: Option<QuizResult>,
    pub history_entries: Vec<HistoryEntry>,
    pub message: String,
    history: HistoryStore,
    requests: requests::RequestState,
}

impl QuizApp {
    pub fn new(config: QuizConfig, store: Box<dyn KeyValueStore>) -> Self {
        let history = HistoryStore::new(store, config.storage.history_key.clone());
        let history_entries = history.load();
        let prefs = Preferences::from_config(&config);

        Self {
            config,
            state: AppState::Home,
            prefs,
            categories: Vec::new(),
            categories_loading: false,
            category_error: None,
            search: String::new(),
            manual_selection: false,
            session: None,
            result: None,
            history_entries,
            message: String::new(),
            history,
            requests: requests::RequestState::new(),
        }
    }

    /// Applies saved preferences, ignoring a count the config no longer allows.
    pub fn restore_preferences(&mut self, saved: Preferences) {
        let count = if self.config.settings.question_counts.contains(&saved.count) {
            saved.count
        } else {
            self.config.settings.default_count
        };
        self.prefs = Preferences { count, ..saved };
    }
}
