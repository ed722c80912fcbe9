// src/view_models.rs

use crate::model::{AnswerRecord, HistoryEntry};

/// Colour hint for an answer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionTone {
    Neutral,
    Correct,
    Wrong,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionButton {
    pub text: String,
    pub tone: OptionTone,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizHeader {
    pub topic: String,
    pub difficulty: String,
    pub position: String,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRow {
    pub number: usize,
    pub question: String,
    pub your_answer: String,
    pub is_correct: bool,
    /// Shown only when the answer was wrong.
    pub correct_answer: Option<String>,
}

impl ReviewRow {
    pub fn from_record(number: usize, record: &AnswerRecord) -> Self {
        Self {
            number,
            question: record.question_text.clone(),
            your_answer: record
                .selected_option
                .clone()
                .unwrap_or_else(|| "No Answer".to_owned()),
            is_correct: record.is_correct,
            correct_answer: (!record.is_correct).then(|| record.correct_option.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    pub date: String,
    pub summary: String,
}

impl HistoryRow {
    pub fn from_entry(entry: &HistoryEntry) -> Self {
        let topic = if entry.topic.is_empty() {
            "General"
        } else {
            entry.topic.as_str()
        };
        let difficulty = if entry.difficulty.is_empty() {
            "Easy"
        } else {
            entry.difficulty.as_str()
        };
        Self {
            date: entry.timestamp.clone(),
            summary: format!(
                "{topic} ({difficulty}) - {}/{} ({}%)",
                entry.score, entry.total, entry.percentage
            ),
        }
    }
}
