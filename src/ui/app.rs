use chrono::Utc;
use eframe::egui;

use crate::common::ChatCommand;
use crate::config::AppConfig;
use crate::fixtures;

use super::components::{chat_area, chat_header, input_bar, sidebar};
use super::state::{AppState, MessageList, SidebarState};

pub struct ChatApp {
    state: AppState,
    composer_max_height: f32,
}

impl ChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::from_config(config)
    }

    fn from_config(config: &AppConfig) -> Self {
        let local_user = config.local_user.sender();
        let seed = fixtures::messages(Utc::now(), &local_user);
        let messages = MessageList::new(local_user, seed);
        let sidebar = SidebarState::new(fixtures::channels(), fixtures::contacts());

        log::info!(
            "Loaded {} messages, {} channels, {} contacts",
            messages.len(),
            sidebar.channels.len(),
            sidebar.contacts.len()
        );

        Self {
            state: AppState::new(
                fixtures::conversation(),
                messages,
                sidebar,
                config.local_user.profile_name.clone(),
                config.local_user.initials.clone(),
            ),
            composer_max_height: config.composer_max_height,
        }
    }

    fn handle_command(&mut self, ctx: &egui::Context, command: ChatCommand) {
        match command {
            ChatCommand::SendMessage(content) => self.state.send_message(&content),
            ChatCommand::CopyText(text) => {
                log::debug!("Copied {} characters to clipboard", text.chars().count());
                ctx.copy_text(text);
            }
            ChatCommand::OpenConversation { id } => {
                log::debug!(
                    "Sidebar selected {id}; message pane stays on {}",
                    self.state.conversation.name
                );
            }
        }
    }

    /// Vẽ toàn bộ màn hình và xử lý các lệnh phát sinh trong frame này.
    fn show(&mut self, ctx: &egui::Context) {
        let mut commands = Vec::new();

        egui::SidePanel::left("chat_sidebar")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                commands.extend(sidebar::render(ui, &mut self.state));
            });

        egui::TopBottomPanel::top("chat_header").show(ctx, |ui| {
            chat_header::render(ui, &self.state.conversation);
        });

        egui::TopBottomPanel::bottom("chat_input").show(ctx, |ui| {
            ui.add_space(8.0);
            let placeholder = self.state.conversation.placeholder();
            if let Some(content) = input_bar::render(
                ui,
                &mut self.state.composer,
                &placeholder,
                self.composer_max_height,
                self.state.conversation.typing.as_deref(),
            ) {
                commands.push(ChatCommand::SendMessage(content));
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            commands.extend(chat_area::render(
                ui,
                &self.state.messages,
                &self.state.profile_initials,
                &mut self.state.scroll_to_bottom,
            ));
        });

        for command in commands {
            self.handle_command(ctx, command);
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
