use super::*;
use crate::view_models::{HistoryRow, OptionButton, OptionTone, QuizHeader, ReviewRow};

impl QuizApp {
    pub fn quiz_header(&self) -> Option<QuizHeader> {
        let session = self.session.as_ref()?;
        let shown_total = match session.requested_count() {
            0 => session.total() as u32,
            n => n,
        };
        let topic = if session.topic().is_empty() {
            "General Knowledge".to_owned()
        } else {
            session.topic().to_owned()
        };
        Some(QuizHeader {
            topic,
            difficulty: session.difficulty().to_string(),
            position: format!("{}/{}", session.current_index() + 1, shown_total),
            next_label: if session.current_index() + 1 < session.total() {
                "Next Question"
            } else {
                "Finish Quiz"
            },
        })
    }

    /// Buttons for the current question in their shuffled order. Once an
    /// option is picked it is coloured by correctness and the set is locked.
    pub fn option_buttons(&self) -> Vec<OptionButton> {
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        let Some(question) = session.current_question() else {
            return Vec::new();
        };
        let selected = session.selected();
        session
            .options()
            .iter()
            .map(|option| {
                let tone = match selected {
                    Some(s) if s == option && question.is_correct(option) => OptionTone::Correct,
                    Some(s) if s == option => OptionTone::Wrong,
                    _ => OptionTone::Neutral,
                };
                OptionButton {
                    text: option.clone(),
                    tone,
                    enabled: selected.is_none(),
                }
            })
            .collect()
    }

    pub fn review_rows(&self) -> Vec<ReviewRow> {
        self.result
            .as_ref()
            .map(|r| {
                r.answers
                    .iter()
                    .enumerate()
                    .map(|(i, a)| ReviewRow::from_record(i + 1, a))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn history_rows(&self) -> Vec<HistoryRow> {
        self.history_entries.iter().map(HistoryRow::from_entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn app_in_quiz() -> QuizApp {
        let config = QuizConfig::load().unwrap();
        let mut app = QuizApp::new(config, Box::new(MemoryStore::new()));
        app.start_session(
            vec![
                Question::new("Capital of France?", "Paris", vec!["Berlin".into(), "Madrid".into()]),
                Question::new("2 + 2?", "4", vec!["3".into()]),
            ],
            "Geography",
            Difficulty::Medium,
            5,
        );
        app
    }

    #[test]
    fn buttons_unlock_until_a_choice_is_made() {
        let mut app = app_in_quiz();
        let buttons = app.option_buttons();
        assert_eq!(buttons.len(), 3);
        assert!(buttons.iter().all(|b| b.enabled && b.tone == OptionTone::Neutral));

        app.select_option("Berlin");
        let buttons = app.option_buttons();
        assert!(buttons.iter().all(|b| !b.enabled));
        let berlin = buttons.iter().find(|b| b.text == "Berlin").unwrap();
        assert_eq!(berlin.tone, OptionTone::Wrong);
        let paris = buttons.iter().find(|b| b.text == "Paris").unwrap();
        assert_eq!(paris.tone, OptionTone::Neutral);
    }

    #[test]
    fn header_uses_requested_count_and_final_label() {
        let mut app = app_in_quiz();
        let header = app.quiz_header().unwrap();
        assert_eq!(header.position, "1/5");
        assert_eq!(header.next_label, "Next Question");
        assert_eq!(header.difficulty, "Medium");

        app.select_option("Paris");
        app.advance();
        assert_eq!(app.quiz_header().unwrap().next_label, "Finish Quiz");
    }

    #[test]
    fn review_rows_follow_answer_order() {
        let mut app = app_in_quiz();
        app.select_option("Paris");
        app.advance();
        app.select_option("3");
        app.advance();

        let rows = app.review_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, 1);
        assert!(rows[0].is_correct);
        assert_eq!(rows[1].correct_answer.as_deref(), Some("4"));
        assert_eq!(app.history_rows().len(), 1);
    }
}
