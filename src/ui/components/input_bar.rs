use eframe::egui::{self, RichText};

use crate::ui::state::Composer;

/// Ô nhập tin nhắn. Trả về nội dung đã trim khi người dùng gửi.
pub fn render(
    ui: &mut egui::Ui,
    composer: &mut Composer,
    placeholder: &str,
    max_height: f32,
    typing: Option<&str>,
) -> Option<String> {
    let mut sent = None;

    ui.horizontal(|ui| {
        let button_width = 44.0;
        let mut enter_pressed = None;

        egui::ScrollArea::vertical()
            .id_salt("composer_scroll")
            .max_height(max_height)
            .max_width((ui.available_width() - button_width).max(0.0))
            .stick_to_bottom(true)
            .show(ui, |ui| {
                // Shift+Enter chèn xuống dòng; Enter không kèm phím bổ trợ thì gửi.
                let response = ui.add(
                    egui::TextEdit::multiline(&mut composer.buffer)
                        .hint_text(placeholder)
                        .desired_rows(1)
                        .desired_width(f32::INFINITY)
                        .return_key(egui::KeyboardShortcut::new(
                            egui::Modifiers::SHIFT,
                            egui::Key::Enter,
                        )),
                );

                if response.has_focus() {
                    enter_pressed = ui.input(|i| {
                        i.key_pressed(egui::Key::Enter)
                            .then_some(i.modifiers.shift)
                    });
                }
            });

        if let Some(shift_held) = enter_pressed {
            sent = composer.press_enter(shift_held);
        }

        if composer.can_send() {
            if ui.button(RichText::new("➤").heading()).on_hover_text("Send").clicked() {
                sent = composer.submit();
            }
        } else {
            let mic = if composer.recording { "⏹" } else { "🎤" };
            if ui.button(RichText::new(mic).heading()).clicked() {
                composer.toggle_recording();
            }
        }
    });

    if let Some(name) = typing {
        ui.label(RichText::new(format!("{name} is typing...")).small().weak());
    }

    sent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::testing::{input, key, painted_text};

    struct Harness {
        ctx: egui::Context,
        composer: Composer,
    }

    impl Harness {
        fn new(buffer: &str) -> Self {
            let mut harness = Self {
                ctx: egui::Context::default(),
                composer: Composer {
                    buffer: buffer.to_string(),
                    ..Default::default()
                },
            };
            harness.frame(Vec::new(), egui::Modifiers::NONE);
            harness
        }

        fn frame(
            &mut self,
            events: Vec<egui::Event>,
            modifiers: egui::Modifiers,
        ) -> (Option<String>, egui::FullOutput) {
            let mut sent = None;
            let composer = &mut self.composer;
            let output = self.ctx.run(input(events, modifiers), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    sent = render(ui, composer, "Message #general", 120.0, Some("Alice"));
                });
            });
            (sent, output)
        }

        fn focus_editor(&mut self) {
            self.frame(
                vec![key(egui::Key::Tab, egui::Modifiers::NONE)],
                egui::Modifiers::NONE,
            );
        }

        fn type_text(&mut self, text: &str) -> Option<String> {
            self.frame(vec![egui::Event::Text(text.to_string())], egui::Modifiers::NONE)
                .0
        }

        fn enter(&mut self, modifiers: egui::Modifiers) -> Option<String> {
            self.frame(vec![key(egui::Key::Enter, modifiers)], modifiers).0
        }
    }

    #[test]
    fn shift_enter_inserts_newline_and_enter_sends() {
        let mut harness = Harness::new("");
        harness.focus_editor();

        assert_eq!(harness.type_text("hi"), None);
        assert_eq!(harness.composer.buffer, "hi");

        assert_eq!(harness.enter(egui::Modifiers::SHIFT), None);
        assert_eq!(harness.composer.buffer, "hi\n");

        assert_eq!(harness.enter(egui::Modifiers::NONE).as_deref(), Some("hi"));
        assert!(harness.composer.buffer.is_empty());
    }

    #[test]
    fn enter_on_blank_buffer_sends_nothing() {
        let mut harness = Harness::new("");
        harness.focus_editor();
        harness.type_text("   ");

        assert_eq!(harness.enter(egui::Modifiers::NONE), None);
        assert_eq!(harness.composer.buffer, "   ");
    }

    #[test]
    fn enter_without_focus_is_ignored() {
        let mut harness = Harness::new("draft");
        assert_eq!(harness.enter(egui::Modifiers::NONE), None);
        assert_eq!(harness.composer.buffer, "draft");
    }

    #[test]
    fn mic_shows_for_blank_buffer_and_send_for_text() {
        let mut harness = Harness::new("");
        let (_, output) = harness.frame(Vec::new(), egui::Modifiers::NONE);
        let text = painted_text(&output);
        assert!(text.iter().any(|t| t == "🎤"));
        assert!(!text.iter().any(|t| t == "➤"));
        assert!(text.iter().any(|t| t == "Alice is typing..."));

        harness.composer.buffer = "hello".to_string();
        let (_, output) = harness.frame(Vec::new(), egui::Modifiers::NONE);
        let text = painted_text(&output);
        assert!(text.iter().any(|t| t == "➤"));
        assert!(!text.iter().any(|t| t == "🎤"));
    }

    #[test]
    fn editor_height_is_capped() {
        let ctx = egui::Context::default();
        let mut composer = Composer {
            buffer: vec!["line"; 40].join("\n"),
            ..Default::default()
        };
        let mut height = 0.0;

        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let top = ui.cursor().min.y;
                    render(ui, &mut composer, "Message #general", 120.0, None);
                    height = ui.cursor().min.y - top;
                });
            });
        }

        assert!(height > 0.0);
        assert!(height < 120.0 + 40.0, "composer grew to {height}");
    }
}
