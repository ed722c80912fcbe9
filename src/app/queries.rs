use super::*;

impl QuizApp {
    /// Result of the finished quiz, once there is one.
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// Progress through the running quiz in percent.
    pub fn progress(&self) -> f32 {
        self.session.as_ref().map_or(0.0, QuizSession::progress)
    }

    /// Categories whose name contains the search text, ignoring case.
    pub fn filtered_categories(&self) -> Vec<&Category> {
        let needle = self.search.to_lowercase();
        self.categories
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }
}
