// src/ui/helpers.rs
use crate::view_models::{OptionButton, OptionTone};
use egui::{Button, Color32, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Answer button coloured by its tone once a choice has been made.
pub fn option_button(ui: &mut Ui, option: &OptionButton, width: f32) -> bool {
    let mut button = Button::new(option.text.as_str()).min_size(Vec2::new(width, 36.0));
    button = match option.tone {
        OptionTone::Correct => button.fill(Color32::DARK_GREEN),
        OptionTone::Wrong => button.fill(Color32::DARK_RED),
        OptionTone::Neutral => button,
    };
    ui.add_enabled(option.enabled, button).clicked()
}
