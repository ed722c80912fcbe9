use super::*;
use crate::api;
use crate::config::ApiConfig;
use std::sync::mpsc::{Receiver, Sender, channel};

/// What a background fetch produced.
#[derive(Debug)]
pub enum Reply {
    Categories(Result<Vec<Category>, QuizError>),
    Questions {
        params: QuizParameters,
        topic_name: String,
        questions: Result<Vec<Question>, QuizError>,
    },
}

/// A reply tagged with the ticket of the request that produced it.
#[derive(Debug)]
pub struct Envelope {
    pub ticket: u64,
    pub reply: Reply,
}

/// One outstanding request per kind. A reply whose ticket is no longer the
/// awaited one belongs to an abandoned view and is dropped.
pub(crate) struct RequestState {
    next_ticket: u64,
    awaiting_categories: Option<u64>,
    awaiting_questions: Option<u64>,
    tx: Sender<Envelope>,
    rx: Receiver<Envelope>,
}

impl RequestState {
    pub(crate) fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            next_ticket: 0,
            awaiting_categories: None,
            awaiting_questions: None,
            tx,
            rx,
        }
    }

    fn issue(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }
}

impl QuizApp {
    pub fn has_pending_requests(&self) -> bool {
        self.requests.awaiting_categories.is_some() || self.requests.awaiting_questions.is_some()
    }

    pub fn load_categories(&mut self) {
        let ticket = self.begin_category_request();
        spawn_categories(self.config.api.clone(), self.requests.tx.clone(), ticket);
    }

    pub(crate) fn begin_category_request(&mut self) -> u64 {
        let ticket = self.requests.issue();
        self.requests.awaiting_categories = Some(ticket);
        self.categories_loading = true;
        self.category_error = None;
        ticket
    }

    /// Marks a question request as outstanding and moves to the loading view.
    pub(crate) fn begin_question_request(&mut self) -> u64 {
        let ticket = self.requests.issue();
        self.requests.awaiting_questions = Some(ticket);
        self.message.clear();
        self.state = AppState::Loading;
        ticket
    }

    pub(crate) fn request_questions(&mut self, params: QuizParameters, topic_name: String) {
        let ticket = self.begin_question_request();
        log::info!(
            "fetching {} {} questions for topic {} ({topic_name})",
            params.count,
            params.difficulty,
            params.topic_id
        );

        spawn_questions(
            self.config.api.clone(),
            params,
            topic_name,
            self.requests.tx.clone(),
            ticket,
        );
    }

    /// Forgets the outstanding question request; its reply will be ignored.
    pub(crate) fn abandon_question_request(&mut self) {
        if let Some(ticket) = self.requests.awaiting_questions.take() {
            log::debug!("abandoning question request {ticket}");
        }
    }

    /// Drains finished requests. Called once per frame.
    pub fn poll_requests(&mut self) {
        while let Ok(envelope) = self.requests.rx.try_recv() {
            self.handle_reply(envelope);
        }
    }

    pub fn handle_reply(&mut self, envelope: Envelope) {
        let Envelope { ticket, reply } = envelope;
        match reply {
            Reply::Categories(result) => {
                if self.requests.awaiting_categories != Some(ticket) {
                    log::debug!("ignoring stale category reply {ticket}");
                    return;
                }
                self.requests.awaiting_categories = None;
                self.apply_categories(result);
            }
            Reply::Questions {
                params,
                topic_name,
                questions,
            } => {
                if self.requests.awaiting_questions != Some(ticket) {
                    log::debug!("ignoring stale question reply {ticket}");
                    return;
                }
                self.requests.awaiting_questions = None;
                self.apply_questions(params, topic_name, questions);
            }
        }
    }

    fn apply_categories(&mut self, result: Result<Vec<Category>, QuizError>) {
        self.categories_loading = false;
        match result {
            Ok(categories) => {
                log::info!("loaded {} categories", categories.len());
                self.categories = categories;
                let known = self
                    .prefs
                    .topic_id
                    .is_some_and(|id| self.categories.iter().any(|c| c.id == id));
                if !known {
                    self.select_first_category();
                }
            }
            Err(e) => {
                log::error!("could not load categories: {e}");
                self.category_error = Some(e.user_message());
            }
        }
    }

    fn apply_questions(
        &mut self,
        params: QuizParameters,
        topic_name: String,
        questions: Result<Vec<Question>, QuizError>,
    ) {
        match questions {
            Ok(questions) => {
                self.start_session(questions, topic_name, params.difficulty, params.count);
            }
            Err(e) => {
                log::error!("could not start quiz: {e}");
                self.message = e.user_message();
                self.state = AppState::Home;
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_categories(api_config: ApiConfig, tx: Sender<Envelope>, ticket: u64) {
    std::thread::spawn(move || {
        let reply = Reply::Categories(api::fetch_categories(&api_config));
        let _ = tx.send(Envelope { ticket, reply });
    });
}

#[cfg(target_arch = "wasm32")]
fn spawn_categories(api_config: ApiConfig, tx: Sender<Envelope>, ticket: u64) {
    wasm_bindgen_futures::spawn_local(async move {
        let reply = Reply::Categories(api::fetch_categories(&api_config).await);
        let _ = tx.send(Envelope { ticket, reply });
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_questions(
    api_config: ApiConfig,
    params: QuizParameters,
    topic_name: String,
    tx: Sender<Envelope>,
    ticket: u64,
) {
    std::thread::spawn(move || {
        let questions = api::fetch_questions(&api_config, &params);
        let reply = Reply::Questions {
            params,
            topic_name,
            questions,
        };
        let _ = tx.send(Envelope { ticket, reply });
    });
}

#[cfg(target_arch = "wasm32")]
fn spawn_questions(
    api_config: ApiConfig,
    params: QuizParameters,
    topic_name: String,
    tx: Sender<Envelope>,
    ticket: u64,
) {
    wasm_bindgen_futures::spawn_local(async move {
        let questions = api::fetch_questions(&api_config, &params).await;
        let reply = Reply::Questions {
            params,
            topic_name,
            questions,
        };
        let _ = tx.send(Envelope { ticket, reply });
    });
}
