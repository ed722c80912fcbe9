use super::*;

impl QuizApp {
    /// Validates the home-screen choices and fetches questions for them.
    pub fn start_quiz(&mut self) {
        let params = match validate_quiz_parameters(
            self.prefs.topic_id,
            Some(self.prefs.difficulty.as_str()),
            Some(self.prefs.count),
            &self.config.settings.question_counts,
        ) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("quiz parameters rejected: {e}");
                self.message = e.user_message().to_owned();
                return;
            }
        };
        let topic_name = self.prefs.topic_name.clone();
        self.request_questions(params, topic_name);
    }

    /// Starts a session over already-fetched questions.
    pub fn start_session(
        &mut self,
        questions: Vec<Question>,
        topic: impl Into<String>,
        difficulty: Difficulty,
        count: u32,
    ) {
        let session = QuizSession::start(questions, topic, difficulty, count);
        self.state = if session.is_empty() {
            AppState::NoData
        } else {
            AppState::Quiz
        };
        self.session = Some(session);
        self.result = None;
        self.message.clear();
    }

    pub fn select_option(&mut self, option: &str) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(e) = session.select_option(option) {
            log::warn!("selection rejected: {e}");
            self.message = e.user_message();
        }
    }

    /// Scores the current question. On the last one the result is recorded
    /// once and the results view is shown.
    pub fn advance(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.advance() {
            Ok(Advance::Next(_)) => self.message.clear(),
            Ok(Advance::Finished(result)) => {
                // A failed history write leaves its message for the results view.
                self.message.clear();
                self.record_result(&result);
                self.result = Some(result);
                self.state = AppState::Results;
            }
            Err(e) => {
                log::warn!("advance rejected: {e}");
                self.message = e.user_message();
            }
        }
    }

    /// Persists `result` and refreshes the cached history list.
    pub fn record_result(&mut self, result: &QuizResult) {
        match self.history.record(result) {
            Ok(entries) => self.history_entries = entries,
            Err(e) => {
                log::error!("could not record quiz result: {e}");
                self.message = e.user_message();
                self.history_entries = self.history.load();
            }
        }
    }

    pub fn load_history(&mut self) -> &[HistoryEntry] {
        self.history_entries = self.history.load();
        &self.history_entries
    }

    pub fn clear_history(&mut self) {
        match self.history.clear() {
            Ok(()) => self.history_entries.clear(),
            Err(e) => {
                log::error!("could not clear history: {e}");
                self.message = e.user_message();
            }
        }
    }

    /// Fetches a fresh set of questions with the finished quiz's settings.
    pub fn retake_quiz(&mut self) {
        match self.retake_parameters() {
            Some(Ok((params, topic_name))) => self.request_questions(params, topic_name),
            Some(Err(e)) => {
                log::warn!("cannot retake quiz: {e}");
                self.message = "Could not restart quiz. Please try again later.".to_owned();
            }
            None => {}
        }
    }

    /// Parameters for repeating the finished quiz. The topic id is looked up
    /// by name in the loaded catalog.
    pub(crate) fn retake_parameters(
        &self,
    ) -> Option<Result<(QuizParameters, String), ValidationError>> {
        let result = self.result.as_ref()?;
        let count = self
            .session
            .as_ref()
            .map(QuizSession::requested_count)
            .filter(|c| *c > 0)
            .unwrap_or(result.total);
        let topic_id = self.category_by_name(&result.topic).map(|c| c.id);

        let params = validate_quiz_parameters(
            topic_id,
            Some(result.difficulty.as_str()),
            Some(count),
            &self.config.settings.question_counts,
        );
        Some(params.map(|p| (p, result.topic.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ResponseCode, StorageError, UpstreamError};
    use crate::storage::MemoryStore;

    /// Reads succeed with nothing stored; every write fails.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("read-only".into()))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("read-only".into()))
        }
    }

    fn app() -> QuizApp {
        let config = QuizConfig::load().unwrap();
        QuizApp::new(config, Box::new(MemoryStore::new()))
    }

    fn questions() -> Vec<Question> {
        vec![
            Question::new("Capital of France?", "Paris", vec!["Berlin".into(), "Madrid".into()]),
            Question::new("2 + 2?", "4", vec!["3".into(), "5".into()]),
            Question::new("Largest planet?", "Jupiter", vec!["Mars".into(), "Venus".into()]),
        ]
    }

    fn play(app: &mut QuizApp, answers: &[&str]) {
        for answer in answers {
            app.select_option(answer);
            app.advance();
        }
    }

    fn categories() -> Vec<Category> {
        vec![
            Category {
                id: 9,
                name: "General Knowledge".into(),
            },
            Category {
                id: 18,
                name: "Science: Computers".into(),
            },
        ]
    }

    #[test]
    fn finishing_records_history_exactly_once() {
        let mut app = app();
        app.start_session(questions(), "General Knowledge", Difficulty::Easy, 3);
        assert_eq!(app.state, AppState::Quiz);

        play(&mut app, &["Paris", "3", "Jupiter"]);

        assert_eq!(app.state, AppState::Results);
        let result = app.result().unwrap().clone();
        assert_eq!((result.score, result.total), (2, 3));
        assert_eq!(app.history_entries.len(), 1);
        assert_eq!(app.history_entries[0].percentage, 67);

        // Revisiting the results and recording again must not duplicate.
        app.record_result(&result);
        assert_eq!(app.load_history().len(), 1);
    }

    #[test]
    fn failed_history_write_is_reported_on_results() {
        let config = QuizConfig::load().unwrap();
        let mut app = QuizApp::new(config, Box::new(ReadOnlyStore));
        app.start_session(
            vec![Question::new("Capital of France?", "Paris", vec!["Berlin".into()])],
            "Geography",
            Difficulty::Easy,
            3,
        );
        play(&mut app, &["Paris"]);

        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.result().map(|r| r.score), Some(1));
        assert_eq!(app.message, "Could not save your quiz history.");
        assert!(app.history_entries.is_empty());
    }

    #[test]
    fn advance_without_selection_sets_a_message() {
        let mut app = app();
        app.start_session(questions(), "General Knowledge", Difficulty::Easy, 3);
        app.advance();

        assert_eq!(app.state, AppState::Quiz);
        assert!(!app.message.is_empty());
        assert_eq!(app.session.as_ref().unwrap().current_index(), 0);
    }

    #[test]
    fn empty_question_list_shows_no_data() {
        let mut app = app();
        app.start_session(Vec::new(), "General Knowledge", Difficulty::Easy, 3);
        assert_eq!(app.state, AppState::NoData);
        assert!(app.result().is_none());
    }

    #[test]
    fn start_quiz_without_topic_stays_home() {
        let mut app = app();
        app.start_quiz();
        assert_eq!(app.state, AppState::Home);
        assert_eq!(app.message, "Please select a valid topic category.");
        assert!(!app.has_pending_requests());
    }

    #[test]
    fn question_reply_starts_a_session() {
        let mut app = app();
        let ticket = app.begin_question_request();
        assert_eq!(app.state, AppState::Loading);

        app.handle_reply(Envelope {
            ticket,
            reply: Reply::Questions {
                params: QuizParameters {
                    topic_id: 9,
                    difficulty: Difficulty::Medium,
                    count: 3,
                },
                topic_name: "General Knowledge".into(),
                questions: Ok(questions()),
            },
        });

        assert_eq!(app.state, AppState::Quiz);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.difficulty(), Difficulty::Medium);
        assert_eq!(session.topic(), "General Knowledge");
        assert!(!app.has_pending_requests());
    }

    #[test]
    fn reply_after_leaving_the_loading_view_is_ignored() {
        let mut app = app();
        let ticket = app.begin_question_request();
        app.go_home();

        app.handle_reply(Envelope {
            ticket,
            reply: Reply::Questions {
                params: QuizParameters {
                    topic_id: 9,
                    difficulty: Difficulty::Easy,
                    count: 3,
                },
                topic_name: "General Knowledge".into(),
                questions: Ok(questions()),
            },
        });

        assert_eq!(app.state, AppState::Home);
        assert!(app.session.is_none());
    }

    #[test]
    fn upstream_failure_returns_home_with_generic_message() {
        let mut app = app();
        let ticket = app.begin_question_request();
        app.handle_reply(Envelope {
            ticket,
            reply: Reply::Questions {
                params: QuizParameters {
                    topic_id: 9,
                    difficulty: Difficulty::Hard,
                    count: 10,
                },
                topic_name: "General Knowledge".into(),
                questions: Err(UpstreamError::ResponseCode(ResponseCode::NoResults).into()),
            },
        });

        assert_eq!(app.state, AppState::Home);
        assert_eq!(
            app.message,
            "No questions found for this selection. Please try different settings."
        );
    }

    #[test]
    fn category_reply_selects_the_first_topic() {
        let mut app = app();
        let ticket = app.begin_category_request();
        app.handle_reply(Envelope {
            ticket,
            reply: Reply::Categories(Ok(categories())),
        });

        assert_eq!(app.prefs.topic_id, Some(9));
        assert_eq!(app.prefs.topic_name, "General Knowledge");
        assert!(!app.categories_loading);
    }

    #[test]
    fn retake_resolves_topic_id_by_name() {
        let mut app = app();
        app.categories = categories();
        app.start_session(questions(), "Science: Computers", Difficulty::Hard, 3);
        play(&mut app, &["Paris", "4", "Jupiter"]);
        assert_eq!(app.state, AppState::Results);

        let (params, topic_name) = app.retake_parameters().unwrap().unwrap();
        assert_eq!(params.topic_id, 18);
        assert_eq!(params.difficulty, Difficulty::Hard);
        assert_eq!(params.count, 3);
        assert_eq!(topic_name, "Science: Computers");
    }

    #[test]
    fn retake_with_unknown_topic_reports_an_error() {
        let mut app = app();
        app.start_session(questions(), "Unlisted", Difficulty::Easy, 3);
        play(&mut app, &["Paris", "4", "Jupiter"]);

        app.retake_quiz();
        assert_eq!(app.state, AppState::Results);
        assert_eq!(app.message, "Could not restart quiz. Please try again later.");
        assert!(!app.has_pending_requests());
    }

    #[test]
    fn clear_history_empties_the_cached_list() {
        let mut app = app();
        app.start_session(questions(), "General Knowledge", Difficulty::Easy, 3);
        play(&mut app, &["Paris", "4", "Jupiter"]);
        assert_eq!(app.history_entries.len(), 1);

        app.clear_history();
        assert!(app.history_entries.is_empty());
        assert!(app.load_history().is_empty());
    }
}
