use chrono::{DateTime, Utc};
use eframe::egui::{self, Color32, RichText};

use crate::common::format::{initials, relative_time};
use crate::common::{ChatCommand, ChatMessage};

use super::avatar;

const BUBBLE_MAX_WIDTH: f32 = 420.0;
const AVATAR_SIZE: f32 = 36.0;
const ACCENT: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);
const ACCENT_TINT: Color32 = Color32::from_rgba_premultiplied(0x0C, 0x1A, 0x31, 0x33);
const RECEIVED_FILL: Color32 = Color32::from_rgb(0x22, 0x2A, 0x35);
const MUTED_FILL: Color32 = Color32::from_rgb(0x2A, 0x30, 0x3A);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPreview {
    pub caption: String,
    pub snippet: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionChip {
    pub label: String,
    pub highlighted: bool,
}

/// Nội dung hiển thị của một bubble, tách khỏi egui để dễ kiểm thử.
#[derive(Debug, Clone)]
pub struct BubbleView<'a> {
    pub id: &'a str,
    pub is_own: bool,
    /// Only shown above other people's bubbles.
    pub sender_name: Option<&'a str>,
    pub avatar_initials: String,
    pub time: String,
    pub content: &'a str,
    pub reply: Option<ReplyPreview>,
    pub reactions: Vec<ReactionChip>,
}

impl<'a> BubbleView<'a> {
    pub fn new(message: &'a ChatMessage, own_initials: &str, now: DateTime<Utc>) -> Self {
        let avatar_initials = if message.is_own {
            own_initials.to_string()
        } else {
            initials(&message.sender.name)
        };

        Self {
            id: &message.id,
            is_own: message.is_own,
            sender_name: (!message.is_own).then_some(message.sender.name.as_str()),
            avatar_initials,
            time: relative_time(message.timestamp, now),
            content: &message.content,
            reply: message.reply_to.as_ref().map(|reply| ReplyPreview {
                caption: format!("Replying to {}", reply.sender),
                snippet: reply.content.clone(),
            }),
            reactions: message
                .reactions
                .iter()
                .map(|reaction| ReactionChip {
                    label: format!("{} {}", reaction.emoji, reaction.count),
                    highlighted: reaction.has_reacted,
                })
                .collect(),
        }
    }
}

pub fn render(ui: &mut egui::Ui, view: &BubbleView<'_>) -> Option<ChatCommand> {
    let mut command = None;
    let layout = if view.is_own {
        egui::Layout::right_to_left(egui::Align::Min)
    } else {
        egui::Layout::left_to_right(egui::Align::Min)
    };

    ui.with_layout(layout, |ui| {
        avatar::render(ui, &view.avatar_initials, AVATAR_SIZE, false);
        ui.add_space(8.0);

        let column = if view.is_own {
            egui::Layout::top_down(egui::Align::Max)
        } else {
            egui::Layout::top_down(egui::Align::Min)
        };
        ui.with_layout(column, |ui| {
            ui.set_max_width(BUBBLE_MAX_WIDTH);

            if let Some(name) = view.sender_name {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(name).strong());
                    ui.label(RichText::new(&view.time).small().weak());
                });
            }

            if let Some(reply) = &view.reply {
                render_reply(ui, reply, view.is_own);
            }

            command = render_body(ui, view);

            if !view.reactions.is_empty() {
                ui.horizontal(|ui| {
                    for chip in &view.reactions {
                        render_reaction(ui, chip);
                    }
                });
            }
        });
    });

    command
}

fn render_reply(ui: &mut egui::Ui, reply: &ReplyPreview, is_own: bool) {
    let border = if is_own {
        ACCENT.gamma_multiply(0.3)
    } else {
        Color32::GRAY.gamma_multiply(0.3)
    };

    egui::Frame::new()
        .fill(MUTED_FILL.gamma_multiply(0.5))
        .stroke(egui::Stroke::new(1.0, border))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.label(RichText::new(&reply.caption).small().weak());
            ui.add(egui::Label::new(RichText::new(&reply.snippet).weak()).truncate());
        });
}

fn render_body(ui: &mut egui::Ui, view: &BubbleView<'_>) -> Option<ChatCommand> {
    let (fill, text) = if view.is_own {
        (ACCENT, Color32::WHITE)
    } else {
        (RECEIVED_FILL, ui.visuals().text_color())
    };

    let frame = egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(14))
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.add(egui::Label::new(RichText::new(view.content).color(text)).wrap());
            if view.is_own {
                ui.label(
                    RichText::new(&view.time)
                        .small()
                        .color(Color32::WHITE.gamma_multiply(0.7)),
                );
            }
        });

    let response = ui.interact(
        frame.response.rect,
        ui.id().with(("bubble", view.id)),
        egui::Sense::click(),
    );

    let mut command = None;
    response.context_menu(|ui| {
        if ui.button("Copy text").clicked() {
            command = Some(ChatCommand::CopyText(view.content.to_string()));
            ui.close();
        }
    });
    command
}

fn render_reaction(ui: &mut egui::Ui, chip: &ReactionChip) {
    let (fill, stroke, text) = if chip.highlighted {
        (ACCENT_TINT, egui::Stroke::new(1.0, ACCENT.gamma_multiply(0.4)), ACCENT)
    } else {
        (MUTED_FILL, egui::Stroke::NONE, ui.visuals().weak_text_color())
    };

    egui::Frame::new()
        .fill(fill)
        .stroke(stroke)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(&chip.label).small().color(text));
        });
}
