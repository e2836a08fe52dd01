//! # Chat Screen
//!
//! The tutoring conversation: level selector, scrolling message history, and
//! the input row. Renders from a cloned state snapshot; user actions go
//! through the [`App`] handlers.

use crate::app::{App, AppState};
use crate::ui::theme::Colors;
use crate::ui::widgets::layouts;
use egui;
use shared::{DifficultyLevel, Message, Role};

/// Height reserved below the scroll area for the separator and input row.
const INPUT_ROW_HEIGHT: f32 = 64.0;

/// Render the chat screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let colors = state.settings.theme_config.colors();

    render_header(ui, state, app, &colors);
    ui.separator();
    render_history(ui, state, &colors);
    ui.separator();
    render_input_row(ui, state, app);
}

/// Header: title, level-selection buttons, backend status
fn render_header(ui: &mut egui::Ui, state: &AppState, app: &mut App, colors: &Colors) {
    ui.vertical_centered(|ui| {
        ui.heading("Pythagore Math Tutor");
    });
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        for &level in DifficultyLevel::all() {
            let selected = state.chat.level == level;
            let button = if selected {
                egui::Button::new(level.label()).fill(colors.accent_active)
            } else {
                egui::Button::new(level.label())
            };

            if ui.add(button).clicked() {
                app.handle_level_select(level);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            match state.backend_healthy {
                Some(true) => ui.colored_label(colors.success, "● Online"),
                Some(false) => ui.colored_label(colors.error, "○ Offline"),
                None => ui.colored_label(colors.text_dim, "○ Connecting..."),
            };
        });
    });
}

/// Message history: auto-scrolls to the latest entry
fn render_history(ui: &mut egui::Ui, state: &AppState, colors: &Colors) {
    let history_height = (ui.available_height() - INPUT_ROW_HEIGHT).max(0.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .max_height(history_height)
        .show(ui, |ui| {
            if state.chat.messages.is_empty() && !state.chat.sending {
                layouts::render_centered(ui, |ui| {
                    ui.colored_label(colors.text_dim, "Ask your math question to get started.");
                });
                return;
            }

            for message in &state.chat.messages {
                render_message(ui, message, colors);
                ui.add_space(6.0);
            }

            if state.chat.sending {
                let dots = thinking_dots(ui.ctx());
                ui.colored_label(colors.text_dim, format!("Thinking{}", dots));
            }
        });
}

/// One message bubble, student right-aligned, tutor left-aligned
fn render_message(ui: &mut egui::Ui, message: &Message, colors: &Colors) {
    let (align, author) = match message.role {
        Role::Student => (egui::Align::Max, "You"),
        Role::Tutor => (egui::Align::Min, "Tutor"),
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        ui.group(|ui| {
            ui.set_max_width(ui.available_width() * 0.8);
            ui.colored_label(colors.text_dim, author);
            ui.label(&message.content);
        });
    });
}

/// Input row: single-line edit plus Send button
///
/// Enter (without Shift) sends; both controls are disabled while a request
/// is in flight.
fn render_input_row(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let input_enabled = !state.chat.sending;

    ui.horizontal(|ui| {
        // Edit the live input buffer; the snapshot only drives enablement.
        let app_state = app.state.clone();
        let mut state_write = app_state.write();

        let text_edit = egui::TextEdit::singleline(&mut state_write.chat.input)
            .desired_width(ui.available_width() - 64.0)
            .hint_text("Ask your math question...");
        let response = ui.add_enabled(input_enabled, text_edit);

        let can_send = input_enabled && !state_write.chat.input.trim().is_empty();
        drop(state_write);

        let enter_pressed = response.lost_focus()
            && response
                .ctx
                .input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);

        let send_clicked = ui.add_enabled(can_send, egui::Button::new("Send")).clicked();

        if (enter_pressed && can_send) || send_clicked {
            app.handle_send_click();
            response.request_focus();
        }
    });
}

/// Animated thinking indicator, cycling twice per second
fn thinking_dots(ctx: &egui::Context) -> &'static str {
    let time = ctx.input(|i| i.time);
    match ((time * 2.0) as usize) % 4 {
        0 => ".",
        1 => "..",
        2 => "...",
        _ => "",
    }
}
