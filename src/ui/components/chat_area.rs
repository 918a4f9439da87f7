use chrono::Utc;
use eframe::egui;

use crate::common::ChatCommand;
use crate::ui::state::MessageList;

use super::message_bubble::{self, BubbleView};

/// Danh sách tin nhắn theo đúng thứ tự thêm vào; không sắp xếp lại.
pub fn render(
    ui: &mut egui::Ui,
    messages: &MessageList,
    own_initials: &str,
    scroll_to_bottom: &mut bool,
) -> Option<ChatCommand> {
    let now = Utc::now();
    let mut command = None;

    egui::ScrollArea::vertical()
        .id_salt("message_list")
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(12.0);
            date_separator(ui, "Today");

            if messages.is_empty() {
                ui.vertical_centered(|ui| ui.weak("No messages yet"));
            }

            for message in messages.messages() {
                let view = BubbleView::new(message, own_initials, now);
                if let Some(action) = message_bubble::render(ui, &view) {
                    command = Some(action);
                }
                ui.add_space(10.0);
            }

            if *scroll_to_bottom {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                *scroll_to_bottom = false;
            }
        });

    command
}

fn date_separator(ui: &mut egui::Ui, label: &str) {
    ui.vertical_centered(|ui| {
        egui::Frame::new()
            .fill(ui.visuals().faint_bg_color)
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::symmetric(12, 3))
            .show(ui, |ui| ui.weak(label));
    });
    ui.add_space(12.0);
}
