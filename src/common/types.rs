use chrono::{DateTime, Utc};

/// Người gửi một tin nhắn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: String,
    pub name: String,
    /// Placeholder path, never resolved; the UI falls back to initials.
    pub avatar: Option<String>,
}

/// Một emoji reaction gắn vào tin nhắn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub emoji: String,
    pub count: u32,
    pub has_reacted: bool,
}

/// Snapshot of the message being replied to. Not a live link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyReference {
    pub id: String,
    pub content: String,
    pub sender: String,
}

/// Domain model đại diện một tin nhắn chat.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub is_own: bool,
    pub reactions: Vec<Reaction>,
    pub reply_to: Option<ReplyReference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    Channel,
    Direct,
}

/// Một kênh trong sidebar.
#[derive(Debug, Clone)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub unread: Option<u32>,
    pub is_active: bool,
}

/// Một người dùng trong danh sách tin nhắn trực tiếp.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub is_online: bool,
    pub last_message: Option<String>,
    /// Short label such as "2m" or "1h".
    pub last_active: Option<String>,
    pub unread: Option<u32>,
}

/// Cuộc trò chuyện đang hiển thị trong cửa sổ chính.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub kind: ChatKind,
    pub name: String,
    pub member_count: Option<u32>,
    pub is_online: bool,
    pub typing: Option<String>,
}

impl Conversation {
    pub fn placeholder(&self) -> String {
        match self.kind {
            ChatKind::Channel => format!("Message #{}", self.name),
            ChatKind::Direct => format!("Message {}", self.name),
        }
    }
}
