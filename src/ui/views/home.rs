use crate::QuizApp;
use crate::model::Difficulty;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::{centered_panel, error_alert};
use egui::{ComboBox, Context, RichText, ScrollArea, TextEdit};

pub fn ui_home(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 520.0, 480.0, |ui| {
        let panel_width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.heading("🧠 Trivia Quiz");
            ui.label("Pick a topic, a difficulty and how many questions.");
        });
        ui.add_space(10.0);

        if !app.message.is_empty() {
            let message = app.message.clone();
            if error_alert(ui, &message) {
                app.dismiss_message();
            }
            ui.add_space(8.0);
        }

        ui.label(RichText::new("Topic").strong());
        let search = ui.add(
            TextEdit::singleline(&mut app.search)
                .hint_text("Search topics…")
                .desired_width(panel_width),
        );
        if search.changed() {
            app.search_changed();
        }
        ui.add_space(4.0);

        if app.categories_loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading topics…");
            });
        } else if let Some(err) = app.category_error.clone() {
            ui.colored_label(ui.visuals().error_fg_color, err);
            if ui.button("🔄 Retry").clicked() {
                app.load_categories();
            }
        } else {
            let mut chosen = None;
            ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                let categories = app.filtered_categories();
                if categories.is_empty() {
                    ui.label("No topics match your search.");
                }
                for category in categories {
                    let selected = app.prefs.topic_id == Some(category.id);
                    if ui.selectable_label(selected, &category.name).clicked() {
                        chosen = Some((category.id, category.name.clone()));
                    }
                }
            });
            if let Some((id, name)) = chosen {
                app.choose_category(id, &name);
            }
        }
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Difficulty").strong());
            let mut difficulty = app.prefs.difficulty;
            ComboBox::from_id_salt("difficulty")
                .selected_text(difficulty.as_str())
                .show_ui(ui, |ui| {
                    for d in Difficulty::ALL {
                        ui.selectable_value(&mut difficulty, d, d.as_str());
                    }
                });
            if difficulty != app.prefs.difficulty {
                app.set_difficulty(difficulty);
            }

            ui.add_space(16.0);
            ui.label(RichText::new("Questions").strong());
            let mut count = app.prefs.count;
            ComboBox::from_id_salt("count")
                .selected_text(count.to_string())
                .show_ui(ui, |ui| {
                    for c in app.config.settings.question_counts.clone() {
                        ui.selectable_value(&mut count, c, c.to_string());
                    }
                });
            if count != app.prefs.count {
                app.set_count(count);
            }
        });
        ui.add_space(14.0);

        let ready = app.prefs.topic_id.is_some();
        if big_list_button(ui, "▶ Start Quiz", panel_width, 40.0, ready) {
            app.start_quiz();
        }
        ui.add_space(4.0);
        if big_list_button(ui, "📜 View History", panel_width, 36.0, true) {
            app.open_history();
        }
    });
}
