use crate::error::{PreconditionViolation, QuizError};
use crate::model::{AnswerRecord, Difficulty, Question, QuizResult};
use crate::shuffle::shuffle;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Answering(usize),
    Finished,
    /// Started without questions. Terminal, and distinct from `Finished`.
    Empty,
}

/// Outcome of a successful [`QuizSession::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Next(usize),
    Finished(QuizResult),
}

/// One run through a fixed list of questions.
///
/// Selecting an option never scores; `advance` scores the current question
/// exactly once and moves on. The option order for the current question is
/// shuffled when the index is entered and stays put until the next advance.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
    answers: Vec<AnswerRecord>,
    selected: Option<String>,
    topic: String,
    difficulty: Difficulty,
    requested_count: u32,
    state: SessionState,
    options: Vec<String>,
    result: Option<QuizResult>,
    rng: StdRng,
}

impl QuizSession {
    pub fn start(
        questions: Vec<Question>,
        topic: impl Into<String>,
        difficulty: Difficulty,
        requested_count: u32,
    ) -> Self {
        Self::with_rng(
            questions,
            topic,
            difficulty,
            requested_count,
            StdRng::from_entropy(),
        )
    }

    pub fn with_rng(
        questions: Vec<Question>,
        topic: impl Into<String>,
        difficulty: Difficulty,
        requested_count: u32,
        rng: StdRng,
    ) -> Self {
        let state = if questions.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Answering(0)
        };
        let mut session = Self {
            questions,
            current_index: 0,
            score: 0,
            answers: Vec::new(),
            selected: None,
            topic: topic.into(),
            difficulty,
            requested_count,
            state,
            options: Vec::new(),
            result: None,
            rng,
        };
        session.enter_current_question();
        log::info!(
            "session started: {} questions, state {:?}",
            session.questions.len(),
            session.state
        );
        session
    }

    fn enter_current_question(&mut self) {
        let unshuffled = self.current_question().map(Question::options);
        self.options = match unshuffled {
            Some(options) => shuffle(&mut self.rng, &options),
            None => Vec::new(),
        };
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    pub fn is_empty(&self) -> bool {
        self.state == SessionState::Empty
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn requested_count(&self) -> u32 {
        self.requested_count
    }

    /// The question being answered, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::Answering(i) => self.questions.get(i),
            _ => None,
        }
    }

    /// Shuffled options for the current question. Stable between advances.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Tentatively selects `option`; a later call before `advance` replaces it.
    pub fn select_option(&mut self, option: &str) -> Result<(), QuizError> {
        let question = self
            .current_question()
            .ok_or(PreconditionViolation::NotAnswering)?;
        if !question.has_option(option) {
            return Err(PreconditionViolation::UnknownOption(option.to_owned()).into());
        }
        self.selected = Some(option.to_owned());
        Ok(())
    }

    /// Scores the current question and moves to the next one or finishes.
    ///
    /// Without a selection nothing changes and
    /// [`PreconditionViolation::NoSelection`] is returned.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        let SessionState::Answering(index) = self.state else {
            return Err(PreconditionViolation::NotAnswering.into());
        };
        let selected = self
            .selected
            .clone()
            .ok_or(PreconditionViolation::NoSelection)?;
        let question = &self.questions[index];

        let is_correct = question.is_correct(&selected);
        self.answers.push(AnswerRecord {
            question_text: question.text.clone(),
            selected_option: Some(selected),
            correct_option: question.correct_answer.clone(),
            is_correct,
        });
        if is_correct {
            self.score += 1;
        }
        self.selected = None;

        if index + 1 < self.questions.len() {
            self.current_index = index + 1;
            self.state = SessionState::Answering(self.current_index);
            self.enter_current_question();
            log::debug!("advanced to question {}", self.current_index + 1);
            return Ok(Advance::Next(self.current_index));
        }

        self.state = SessionState::Finished;
        self.options.clear();
        let result = QuizResult {
            score: self.score,
            total: self.questions.len() as u32,
            answers: self.answers.clone(),
            topic: self.topic.clone(),
            difficulty: self.difficulty,
        };
        log::info!(
            "quiz finished: {}/{} on {} ({})",
            result.score,
            result.total,
            result.topic,
            result.difficulty
        );
        self.result = Some(result.clone());
        Ok(Advance::Finished(result))
    }

    /// Percentage through the quiz: `(index + 1) / len * 100`, `100` once
    /// finished and `0` for an empty session.
    pub fn progress(&self) -> f32 {
        match self.state {
            SessionState::Answering(i) => (i + 1) as f32 / self.questions.len() as f32 * 100.0,
            SessionState::Finished => 100.0,
            SessionState::Empty => 0.0,
        }
    }

    /// The completed result; only available once finished.
    pub fn result(&self) -> Result<&QuizResult, QuizError> {
        self.result
            .as_ref()
            .ok_or_else(|| PreconditionViolation::NotFinished.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(text: &str, correct: &str, incorrect: &[&str]) -> Question {
        Question::new(
            text,
            correct,
            incorrect.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn three_questions() -> Vec<Question> {
        vec![
            q("Capital of France?", "Paris", &["Berlin", "Madrid", "Lisbon"]),
            q("2 + 2?", "4", &["3", "5", "22"]),
            q("Largest planet?", "Jupiter", &["Mars", "Venus", "Earth"]),
        ]
    }

    fn session(questions: Vec<Question>) -> QuizSession {
        QuizSession::with_rng(
            questions,
            "General Knowledge",
            Difficulty::Easy,
            3,
            StdRng::seed_from_u64(11),
        )
    }

    #[test]
    fn single_question_end_to_end() {
        let mut s = session(vec![q(
            "Capital of France?",
            "Paris",
            &["Berlin", "Madrid", "Lisbon"],
        )]);
        s.select_option("Paris").unwrap();
        let outcome = s.advance().unwrap();

        let Advance::Finished(result) = outcome else {
            panic!("expected the quiz to finish");
        };
        assert_eq!(result.score, 1);
        assert_eq!(result.total, 1);
        assert_eq!(result.answers.len(), 1);
        assert_eq!(result.answers[0].selected_option.as_deref(), Some("Paris"));
        assert_eq!(result.answers[0].correct_option, "Paris");
        assert!(result.answers[0].is_correct);
        assert_eq!(s.state(), SessionState::Finished);
        assert_eq!(s.result().unwrap(), &result);
    }

    #[test]
    fn two_of_three_correct() {
        let mut s = session(three_questions());
        for answer in ["Paris", "5", "Jupiter"] {
            s.select_option(answer).unwrap();
            s.advance().unwrap();
        }
        let result = s.result().unwrap();
        assert_eq!(result.score, 2);
        assert_eq!(result.total, 3);
        assert_eq!(result.percentage(), 67);
    }

    #[test]
    fn score_matches_correct_records() {
        let mut s = session(three_questions());
        for answer in ["Lisbon", "4", "Mars"] {
            s.select_option(answer).unwrap();
            s.advance().unwrap();
        }
        let correct = s.answers().iter().filter(|a| a.is_correct).count() as u32;
        assert_eq!(s.score(), correct);
        assert!(s.score() as usize <= s.total());
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn advance_without_selection_is_rejected_and_changes_nothing() {
        let mut s = session(three_questions());
        let options_before = s.options().to_vec();

        let err = s.advance().unwrap_err();
        assert!(matches!(
            err,
            QuizError::Precondition(PreconditionViolation::NoSelection)
        ));
        assert_eq!(s.state(), SessionState::Answering(0));
        assert_eq!(s.score(), 0);
        assert!(s.answers().is_empty());
        assert_eq!(s.options(), options_before.as_slice());
    }

    #[test]
    fn reselecting_keeps_only_the_last_choice() {
        let mut s = session(three_questions());
        s.select_option("Berlin").unwrap();
        s.select_option("Paris").unwrap();
        s.advance().unwrap();

        assert_eq!(s.answers().len(), 1);
        assert_eq!(s.answers()[0].selected_option.as_deref(), Some("Paris"));
        assert_eq!(s.score(), 1);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn options_stay_stable_until_advance() {
        let mut s = session(three_questions());
        let first = s.options().to_vec();
        s.select_option("Madrid").unwrap();
        assert_eq!(s.options(), first.as_slice());
        assert_eq!(first.len(), 4);

        s.advance().unwrap();
        let mut second = s.options().to_vec();
        second.sort();
        assert_eq!(second, vec!["22", "3", "4", "5"]);
    }

    #[test]
    fn empty_question_list_is_its_own_terminal_state() {
        let mut s = session(Vec::new());
        assert_eq!(s.state(), SessionState::Empty);
        assert!(!s.is_finished());
        assert_eq!(s.progress(), 0.0);
        assert!(s.select_option("x").is_err());
        assert!(s.advance().is_err());
        assert!(s.result().is_err());
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_100() {
        let mut s = session(three_questions());
        let mut last = s.progress();
        assert!((last - 100.0 / 3.0).abs() < 1e-3);
        for answer in ["Paris", "4", "Jupiter"] {
            s.select_option(answer).unwrap();
            s.advance().unwrap();
            assert!(s.progress() >= last);
            last = s.progress();
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn finished_session_rejects_further_input() {
        let mut s = session(vec![q("Q", "A", &["B"])]);
        s.select_option("A").unwrap();
        s.advance().unwrap();
        assert!(matches!(
            s.select_option("A"),
            Err(QuizError::Precondition(PreconditionViolation::NotAnswering))
        ));
        assert!(s.advance().is_err());
        assert_eq!(s.answers().len(), 1);
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut s = session(three_questions());
        assert!(matches!(
            s.select_option("Rome"),
            Err(QuizError::Precondition(PreconditionViolation::UnknownOption(_)))
        ));
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn records_follow_question_order() {
        let mut s = session(three_questions());
        for answer in ["Paris", "4", "Jupiter"] {
            s.select_option(answer).unwrap();
            s.advance().unwrap();
        }
        let texts: Vec<_> = s.answers().iter().map(|a| a.question_text.as_str()).collect();
        assert_eq!(texts, vec!["Capital of France?", "2 + 2?", "Largest planet?"]);
    }
}
