use crate::api::{QuestionResponse, RawQuestion};
use crate::error::{ResponseCode, UpstreamError, ValidationError};
use crate::model::Difficulty;

/// Parameters that passed [`validate_quiz_parameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizParameters {
    pub topic_id: i64,
    pub difficulty: Difficulty,
    pub count: u32,
}

/// Checks topic, then difficulty, then count; the first failure is returned.
pub fn validate_quiz_parameters(
    topic: Option<i64>,
    difficulty: Option<&str>,
    count: Option<u32>,
    allowed_counts: &[u32],
) -> Result<QuizParameters, ValidationError> {
    let topic_id = topic
        .filter(|id| *id > 0)
        .ok_or(ValidationError::InvalidTopic)?;
    let difficulty = difficulty
        .and_then(Difficulty::from_label)
        .ok_or(ValidationError::InvalidDifficulty)?;
    let count = count
        .filter(|c| allowed_counts.contains(c))
        .ok_or(ValidationError::InvalidCount)?;

    Ok(QuizParameters {
        topic_id,
        difficulty,
        count,
    })
}

/// Checks presence, then the response code, then that results are non-empty.
pub fn validate_quiz_response(
    data: Option<&QuestionResponse>,
) -> Result<&[RawQuestion], UpstreamError> {
    let data = data.ok_or(UpstreamError::NullResponse)?;
    if let Some(code) = ResponseCode::from_code(data.response_code) {
        return Err(UpstreamError::ResponseCode(code));
    }
    match data.results.as_deref() {
        Some(results) if !results.is_empty() => Ok(results),
        _ => Err(UpstreamError::EmptyResults),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTS: [u32; 3] = [3, 5, 10];

    fn raw() -> RawQuestion {
        RawQuestion {
            question: "Q".into(),
            correct_answer: "A".into(),
            incorrect_answers: vec!["B".into()],
            category: None,
            difficulty: None,
        }
    }

    #[test]
    fn zero_topic_is_invalid() {
        assert_eq!(
            validate_quiz_parameters(Some(0), Some("Easy"), Some(3), &COUNTS),
            Err(ValidationError::InvalidTopic)
        );
        assert_eq!(
            validate_quiz_parameters(None, Some("Easy"), Some(3), &COUNTS),
            Err(ValidationError::InvalidTopic)
        );
    }

    #[test]
    fn checks_run_in_order() {
        assert_eq!(
            validate_quiz_parameters(Some(-1), Some("Extreme"), Some(7), &COUNTS),
            Err(ValidationError::InvalidTopic)
        );
        assert_eq!(
            validate_quiz_parameters(Some(9), Some("Extreme"), Some(7), &COUNTS),
            Err(ValidationError::InvalidDifficulty)
        );
        assert_eq!(
            validate_quiz_parameters(Some(9), None, Some(3), &COUNTS),
            Err(ValidationError::InvalidDifficulty)
        );
        assert_eq!(
            validate_quiz_parameters(Some(9), Some("Hard"), Some(7), &COUNTS),
            Err(ValidationError::InvalidCount)
        );
    }

    #[test]
    fn valid_parameters_pass() {
        let params = validate_quiz_parameters(Some(18), Some("Medium"), Some(10), &COUNTS).unwrap();
        assert_eq!(params.topic_id, 18);
        assert_eq!(params.difficulty, Difficulty::Medium);
        assert_eq!(params.count, 10);
    }

    #[test]
    fn response_code_is_checked_before_results() {
        let data = QuestionResponse {
            response_code: 2,
            results: Some(Vec::new()),
        };
        assert_eq!(
            validate_quiz_response(Some(&data)),
            Err(UpstreamError::ResponseCode(ResponseCode::InvalidParameter))
        );
    }

    #[test]
    fn missing_or_empty_results_are_rejected() {
        assert_eq!(validate_quiz_response(None), Err(UpstreamError::NullResponse));

        let empty = QuestionResponse {
            response_code: 0,
            results: Some(Vec::new()),
        };
        assert_eq!(validate_quiz_response(Some(&empty)), Err(UpstreamError::EmptyResults));

        let absent = QuestionResponse {
            response_code: 0,
            results: None,
        };
        assert_eq!(validate_quiz_response(Some(&absent)), Err(UpstreamError::EmptyResults));
    }

    #[test]
    fn good_response_yields_its_results() {
        let data = QuestionResponse {
            response_code: 0,
            results: Some(vec![raw()]),
        };
        assert_eq!(validate_quiz_response(Some(&data)).unwrap().len(), 1);
    }
}
