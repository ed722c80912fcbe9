// src/api.rs
//
// Open Trivia DB client. Native builds use the blocking reqwest client from a
// worker thread; wasm builds go through the browser's fetch.

use crate::config::ApiConfig;
use crate::error::QuizError;
use crate::model::{Category, Question};
use crate::validation::{QuizParameters, validate_quiz_response};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CategoryList {
    #[serde(default)]
    trivia_categories: Vec<Category>,
}

/// Body of the question endpoint, before validation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct QuestionResponse {
    pub response_code: i64,
    #[serde(default)]
    pub results: Option<Vec<RawQuestion>>,
}

/// A question exactly as the API sends it, HTML entities included.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

pub fn questions_url(api: &ApiConfig, params: &QuizParameters) -> String {
    let separator = if api.questions_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}amount={}&category={}&difficulty={}&type={}",
        api.questions_url,
        separator,
        params.count,
        params.topic_id,
        params.difficulty.api_value(),
        api.question_type
    )
}

pub fn parse_categories(body: &str) -> Result<Vec<Category>, QuizError> {
    let list: CategoryList = serde_json::from_str(body)
        .map_err(|e| crate::error::UpstreamError::Malformed(e.to_string()))?;
    Ok(list.trivia_categories)
}

/// `null` bodies parse to `None` so validation can report them.
pub fn parse_question_response(body: &str) -> Result<Option<QuestionResponse>, QuizError> {
    serde_json::from_str(body)
        .map_err(|e| crate::error::UpstreamError::Malformed(e.to_string()).into())
}

/// Decodes HTML entities once, at ingestion. Everything downstream (display,
/// scoring, history) sees the decoded text.
pub fn ingest_questions(raw: &[RawQuestion]) -> Vec<Question> {
    raw.iter()
        .map(|r| {
            log::debug!(
                "ingesting {} question from {}",
                r.difficulty.as_deref().unwrap_or("unrated"),
                r.category.as_deref().map(decode).unwrap_or_else(|| "unknown category".into())
            );
            Question {
                text: decode(&r.question),
                correct_answer: decode(&r.correct_answer),
                incorrect_answers: r.incorrect_answers.iter().map(|a| decode(a)).collect(),
            }
        })
        .collect()
}

fn decode(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Parses, validates and ingests a question endpoint body.
pub fn questions_from_body(body: &str) -> Result<Vec<Question>, QuizError> {
    let response = parse_question_response(body)?;
    let raw = validate_quiz_response(response.as_ref()).inspect_err(|e| {
        log::warn!("question response rejected: {e}");
    })?;
    Ok(ingest_questions(raw))
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_text(url: &str) -> Result<String, QuizError> {
    use reqwest::header::USER_AGENT;

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .header(USER_AGENT, concat!("trivia-quiz/", env!("CARGO_PKG_VERSION")))
        .send()
        .map_err(|e| QuizError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(QuizError::Network(format!(
            "HTTP {} from {url}",
            response.status()
        )));
    }
    response.text().map_err(|e| QuizError::Network(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_categories(api: &ApiConfig) -> Result<Vec<Category>, QuizError> {
    let body = fetch_text(&api.categories_url)?;
    parse_categories(&body)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(api: &ApiConfig, params: &QuizParameters) -> Result<Vec<Question>, QuizError> {
    let body = fetch_text(&questions_url(api, params))?;
    questions_from_body(&body)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, QuizError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    fn js_err(err: wasm_bindgen::JsValue) -> QuizError {
        QuizError::Network(format!("{err:?}"))
    }

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let window = web_sys::window().ok_or_else(|| QuizError::Network("no window".into()))?;
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| QuizError::Network("fetch did not return a Response".into()))?;

    if !response.ok() {
        return Err(QuizError::Network(format!(
            "HTTP {} from {url}",
            response.status()
        )));
    }

    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    text.as_string()
        .ok_or_else(|| QuizError::Network("response body is not text".into()))
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_categories(api: &ApiConfig) -> Result<Vec<Category>, QuizError> {
    let body = fetch_text(&api.categories_url).await?;
    parse_categories(&body)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(
    api: &ApiConfig,
    params: &QuizParameters,
) -> Result<Vec<Question>, QuizError> {
    let body = fetch_text(&questions_url(api, params)).await?;
    questions_from_body(&body)
}
