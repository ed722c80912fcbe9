use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Lowercase form expected by the `difficulty` query parameter.
    pub fn api_value(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Exact, case-sensitive match against the display labels.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == label)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trivia topic as listed by the category endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// One multiple-choice question, already entity-decoded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Self {
        Self {
            text: text.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers,
        }
    }

    /// Unshuffled option set: incorrect answers followed by the correct one.
    pub fn options(&self) -> Vec<String> {
        let mut options = self.incorrect_answers.clone();
        options.push(self.correct_answer.clone());
        options
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.correct_answer == option || self.incorrect_answers.iter().any(|o| o == option)
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_text: String,
    /// `None` only for records that were logged without an answer.
    #[serde(default)]
    pub selected_option: Option<String>,
    pub correct_option: String,
    pub is_correct: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub answers: Vec<AnswerRecord>,
    pub topic: String,
    pub difficulty: Difficulty,
}

impl QuizResult {
    pub fn percentage(&self) -> u32 {
        percentage(self.score, self.total)
    }
}

/// `round(score / total * 100)`, rounding halves up; `0` when `total` is `0`.
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (score, total) = (u64::from(score), u64::from(total));
    ((score * 200 + total) / (total * 2)) as u32
}

/// A persisted attempt. Field names follow the stored JSON shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    #[serde(rename = "date")]
    pub timestamp: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub difficulty: String,
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
}

impl HistoryEntry {
    pub fn from_result(result: &QuizResult, timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            topic: result.topic.clone(),
            difficulty: result.difficulty.as_str().to_owned(),
            score: result.score,
            total: result.total,
            percentage: result.percentage(),
        }
    }

    /// Two entries describe the same outcome when everything but the
    /// timestamp matches.
    pub fn same_outcome(&self, other: &HistoryEntry) -> bool {
        self.topic == other.topic
            && self.difficulty == other.difficulty
            && self.score == other.score
            && self.total == other.total
            && self.percentage == other.percentage
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Home,
    Loading,
    Quiz,
    NoData,
    Results,
    History,
}
