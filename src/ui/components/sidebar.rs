use crate::common::format::initials;
use crate::common::{Channel, ChatCommand, Contact};
use crate::ui::state::{AppState, SidebarTab};
use eframe::egui::{self, RichText};

use super::avatar;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<ChatCommand> {
    let mut clicked: Option<String> = None;
    let sidebar = &mut state.sidebar;

    ui.add_space(8.0);
    ui.heading("ChatApp");
    ui.add_space(6.0);
    ui.add(
        egui::TextEdit::singleline(&mut sidebar.search_query)
            .hint_text("Search conversations...")
            .desired_width(f32::INFINITY),
    );
    ui.separator();

    ui.columns(2, |columns| {
        columns[0].selectable_value(&mut sidebar.active_tab, SidebarTab::Channels, "# Channels");
        columns[1].selectable_value(&mut sidebar.active_tab, SidebarTab::Messages, "Messages");
    });
    ui.separator();

    let footer_height = 56.0;
    egui::ScrollArea::vertical()
        .id_salt("sidebar_list")
        .max_height((ui.available_height() - footer_height).max(0.0))
        .auto_shrink([false, true])
        .show(ui, |ui| match sidebar.active_tab {
            SidebarTab::Channels => {
                ui.label(RichText::new("CHANNELS").small().weak());
                let channels = sidebar.filtered_channels();
                if channels.is_empty() {
                    ui.weak("No matches");
                }
                for channel in channels {
                    if channel_row(ui, channel, sidebar.is_selected(&channel.id)) {
                        clicked = Some(channel.id.clone());
                    }
                }
            }
            SidebarTab::Messages => {
                ui.label(RichText::new("DIRECT MESSAGES").small().weak());
                let contacts = sidebar.filtered_contacts();
                if contacts.is_empty() {
                    ui.weak("No matches");
                }
                for contact in contacts {
                    if contact_row(ui, contact, sidebar.is_selected(&contact.id)) {
                        clicked = Some(contact.id.clone());
                    }
                }
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        avatar::render(ui, &state.profile_initials, 32.0, true);
        ui.vertical(|ui| {
            ui.strong(&state.profile_name);
            ui.colored_label(avatar::ONLINE, RichText::new("Online").small());
        });
    });

    // Chỉ đổi highlight trong sidebar; cửa sổ chat vẫn hiển thị cuộc trò chuyện cố định.
    let id = clicked?;
    state.sidebar.select(&id);
    Some(ChatCommand::OpenConversation { id })
}

fn unread_badge(ui: &mut egui::Ui, unread: Option<u32>) {
    if let Some(count) = unread.filter(|count| *count > 0) {
        egui::Frame::new()
            .fill(ui.visuals().selection.bg_fill)
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::symmetric(6, 1))
            .show(ui, |ui| {
                ui.label(RichText::new(count.to_string()).small().strong());
            });
    }
}

fn channel_row(ui: &mut egui::Ui, channel: &Channel, selected: bool) -> bool {
    ui.horizontal(|ui| {
        let clicked = ui
            .selectable_label(selected, format!("#  {}", channel.name))
            .clicked();
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            unread_badge(ui, channel.unread);
        });
        clicked
    })
    .inner
}

fn contact_row(ui: &mut egui::Ui, contact: &Contact, selected: bool) -> bool {
    let row = ui.horizontal(|ui| {
        avatar::render(ui, &initials(&contact.name), 32.0, contact.is_online);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.strong(&contact.name);
                if let Some(last_active) = &contact.last_active {
                    ui.weak(last_active);
                }
            });
            if let Some(preview) = &contact.last_message {
                ui.add(egui::Label::new(RichText::new(preview).small().weak()).truncate());
            }
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            unread_badge(ui, contact.unread);
        });
    });

    let response = ui.interact(
        row.response.rect,
        ui.id().with(("contact", &contact.id)),
        egui::Sense::click(),
    );
    if selected || response.hovered() {
        ui.painter().rect_stroke(
            row.response.rect,
            egui::CornerRadius::same(6),
            egui::Stroke::new(1.0, ui.visuals().selection.stroke.color),
            egui::StrokeKind::Outside,
        );
    }
    response.clicked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::ui::components::testing::{click, input, painted_text, text_rect};
    use crate::ui::state::{MessageList, SidebarState};

    fn app_state() -> AppState {
        AppState::new(
            fixtures::conversation(),
            MessageList::new(crate::config::LocalUser::default().sender(), Vec::new()),
            SidebarState::new(fixtures::channels(), fixtures::contacts()),
            "Your Name".to_string(),
            "YU".to_string(),
        )
    }

    fn frame(
        ctx: &egui::Context,
        state: &mut AppState,
        events: Vec<egui::Event>,
    ) -> (Option<ChatCommand>, egui::FullOutput) {
        let mut command = None;
        let output = ctx.run(input(events, egui::Modifiers::NONE), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                command = render(ui, state);
            });
        });
        (command, output)
    }

    #[test]
    fn channels_tab_lists_channels_with_unread_badges() {
        let ctx = egui::Context::default();
        let mut state = app_state();
        let (command, output) = frame(&ctx, &mut state, Vec::new());

        assert_eq!(command, None);
        let text = painted_text(&output);
        let expected = ["ChatApp", "#  general", "#  random", "#  dev-team", "5", "Your Name"];
        for expected in expected {
            assert!(text.iter().any(|t| t == expected), "missing {expected}");
        }
    }

    #[test]
    fn unmatched_search_shows_placeholder() {
        let ctx = egui::Context::default();
        let mut state = app_state();
        state.sidebar.search_query = "zzz".to_string();
        let (_, output) = frame(&ctx, &mut state, Vec::new());

        let text = painted_text(&output);
        assert!(text.iter().any(|t| t == "No matches"));
        assert!(!text.iter().any(|t| t == "#  general"));
    }

    #[test]
    fn messages_tab_lists_contacts() {
        let ctx = egui::Context::default();
        let mut state = app_state();
        state.sidebar.active_tab = SidebarTab::Messages;
        let (_, output) = frame(&ctx, &mut state, Vec::new());

        let text = painted_text(&output);
        for expected in ["Alice Johnson", "Hey! How are you doing?", "2m", "AJ"] {
            assert!(text.iter().any(|t| t == expected), "missing {expected}");
        }
    }

    fn click_text(
        ctx: &egui::Context,
        state: &mut AppState,
        label: &str,
    ) -> Option<ChatCommand> {
        let (_, output) = frame(ctx, state, Vec::new());
        let target = text_rect(&output, label)
            .unwrap_or_else(|| panic!("{label} not painted"))
            .center();

        let mut command = None;
        for events in click(target) {
            command = frame(ctx, state, events).0.or(command);
        }
        command
    }

    #[test]
    fn clicking_a_channel_row_selects_it() {
        let ctx = egui::Context::default();
        let mut state = app_state();

        let command = click_text(&ctx, &mut state, "#  random");

        assert_eq!(
            command,
            Some(ChatCommand::OpenConversation {
                id: "random".to_string()
            })
        );
        assert!(state.sidebar.is_selected("random"));
        assert!(!state.sidebar.is_selected("general"));
    }

    #[test]
    fn clicking_a_contact_row_selects_it() {
        let ctx = egui::Context::default();
        let mut state = app_state();
        state.sidebar.active_tab = SidebarTab::Messages;

        let command = click_text(&ctx, &mut state, "Bob Smith");

        assert_eq!(
            command,
            Some(ChatCommand::OpenConversation {
                id: "2".to_string()
            })
        );
        assert!(state.sidebar.is_selected("2"));
        assert_eq!(state.sidebar.active_tab, SidebarTab::Messages);
    }
}
