use super::*;

impl QuizApp {
    /// Back to the home view, abandoning any quiz or pending question fetch.
    pub fn go_home(&mut self) {
        self.abandon_question_request();
        self.session = None;
        self.result = None;
        self.state = AppState::Home;
    }

    pub fn open_history(&mut self) {
        self.load_history();
        self.state = AppState::History;
    }

    pub fn dismiss_message(&mut self) {
        self.message.clear();
    }

    pub fn choose_category(&mut self, id: i64, name: &str) {
        self.prefs.topic_id = Some(id);
        self.prefs.topic_name = name.to_owned();
        self.manual_selection = true;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.prefs.difficulty = difficulty;
    }

    pub fn set_count(&mut self, count: u32) {
        self.prefs.count = count;
    }

    /// Re-runs the search auto-selection after the search text changed.
    ///
    /// A non-empty search resets the manual flag and selects the first match;
    /// clearing the search goes back to the first category unless the user
    /// picked one by hand.
    pub fn search_changed(&mut self) {
        if !self.search.is_empty() {
            self.manual_selection = false;
        }
        if self.manual_selection {
            return;
        }
        let first = if self.search.is_empty() {
            self.categories.first()
        } else {
            self.filtered_categories().into_iter().next()
        };
        if let Some(category) = first.cloned() {
            self.prefs.topic_id = Some(category.id);
            self.prefs.topic_name = category.name;
        }
    }

    pub(crate) fn select_first_category(&mut self) {
        if let Some(category) = self.categories.first().cloned() {
            self.prefs.topic_id = Some(category.id);
            self.prefs.topic_name = category.name;
        }
    }
}
