mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_requests();
        // Replies arrive off the UI thread, keep polling while any is pending.
        if self.has_pending_requests() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        top_panel(self, ctx);
        bottom_panel(ctx);

        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Loading => views::loading::ui_loading(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::NoData => views::no_data::ui_no_data(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
            AppState::History => views::history::ui_history(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
