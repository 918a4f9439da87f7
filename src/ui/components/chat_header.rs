use eframe::egui::{self, RichText};

use crate::common::format::{initials, member_label, presence_label};
use crate::common::{ChatKind, Conversation};

use super::avatar;

pub fn render(ui: &mut egui::Ui, conversation: &Conversation) {
    ui.horizontal(|ui| {
        ui.set_min_height(48.0);

        match conversation.kind {
            ChatKind::Channel => {
                ui.label(RichText::new("#").heading().strong());
                ui.vertical(|ui| {
                    ui.heading(&conversation.name);
                    if let Some(members) = member_label(conversation.member_count) {
                        ui.weak(members);
                    }
                });
            }
            ChatKind::Direct => {
                avatar::render(
                    ui,
                    &initials(&conversation.name),
                    40.0,
                    conversation.is_online,
                );
                ui.vertical(|ui| {
                    ui.heading(&conversation.name);
                    ui.horizontal(|ui| {
                        let color = if conversation.is_online {
                            avatar::ONLINE
                        } else {
                            ui.visuals().weak_text_color()
                        };
                        ui.colored_label(color, "●");
                        ui.weak(presence_label(conversation.is_online));
                    });
                });
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::ui::components::testing::painted_text;

    fn header_text(conversation: &Conversation) -> Vec<String> {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| render(ui, conversation));
        });
        painted_text(&output)
    }

    #[test]
    fn channel_header_shows_member_count() {
        let text = header_text(&fixtures::conversation());
        assert!(text.iter().any(|t| t == "general"));
        assert!(text.iter().any(|t| t == "24 members"));
    }

    #[test]
    fn direct_header_shows_initials_and_presence() {
        let mut conversation = Conversation {
            kind: ChatKind::Direct,
            name: "Bob Smith".to_string(),
            member_count: None,
            is_online: true,
            typing: None,
        };
        let text = header_text(&conversation);
        assert!(text.iter().any(|t| t == "Bob Smith"));
        assert!(text.iter().any(|t| t == "BS"));
        assert!(text.iter().any(|t| t == "Active now"));
        assert!(!text.iter().any(|t| t.contains("member")));

        conversation.is_online = false;
        let text = header_text(&conversation);
        assert!(text.iter().any(|t| t == "Last seen recently"));
    }
}
