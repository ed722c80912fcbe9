pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod session;
pub mod shuffle;
pub mod storage;
pub mod ui;
pub mod validation;
pub mod view_models;

pub use app::QuizApp;
