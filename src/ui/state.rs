use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::common::{Channel, ChatMessage, Contact, Conversation, Sender};

/// Danh sách tin nhắn, chỉ cho phép thêm vào cuối.
pub struct MessageList {
    messages: Vec<ChatMessage>,
    ids: HashSet<String>,
    local_user: Sender,
}

impl MessageList {
    pub fn new(local_user: Sender, seed: Vec<ChatMessage>) -> Self {
        let mut list = Self {
            messages: Vec::with_capacity(seed.len()),
            ids: HashSet::with_capacity(seed.len()),
            local_user,
        };

        for message in seed {
            if list.ids.contains(&message.id) {
                log::warn!("Dropping seed message with duplicate id {}", message.id);
                continue;
            }
            list.ids.insert(message.id.clone());
            list.messages.push(message);
        }

        list
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn append(&mut self, content: &str) -> Option<&ChatMessage> {
        self.append_at(content, Utc::now())
    }

    /// Thêm tin nhắn của người dùng cục bộ. Nội dung rỗng hoặc chỉ có khoảng trắng bị bỏ qua.
    pub fn append_at(&mut self, content: &str, now: DateTime<Utc>) -> Option<&ChatMessage> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        let id = self.fresh_id(now);
        self.ids.insert(id.clone());
        self.messages.push(ChatMessage {
            id,
            content: content.to_string(),
            sender: self.local_user.clone(),
            timestamp: now,
            is_own: true,
            reactions: Vec::new(),
            reply_to: None,
        });

        let message = self.messages.last()?;
        log::debug!("Appended message {} ({} total)", message.id, self.messages.len());
        Some(message)
    }

    fn fresh_id(&self, now: DateTime<Utc>) -> String {
        let mut id = format!("msg-{}", now.timestamp_millis());
        while self.ids.contains(&id) {
            let suffix = uuid::Uuid::new_v4().simple().to_string();
            id = format!("msg-{}-{}", now.timestamp_millis(), &suffix[..8]);
        }
        id
    }
}

/// Ô soạn tin nhắn.
#[derive(Default)]
pub struct Composer {
    pub buffer: String,
    /// Cosmetic only; nothing is recorded.
    pub recording: bool,
}

impl Composer {
    pub fn can_send(&self) -> bool {
        !self.buffer.trim().is_empty()
    }

    /// Lấy nội dung đã trim và xoá buffer. Buffer trống thì không làm gì.
    pub fn submit(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let content = self.buffer.trim().to_string();
        self.buffer.clear();
        Some(content)
    }

    /// Enter submits; Shift+Enter leaves the newline to the text widget.
    pub fn press_enter(&mut self, shift_held: bool) -> Option<String> {
        if shift_held { None } else { self.submit() }
    }

    pub fn toggle_recording(&mut self) {
        self.recording = !self.recording;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarTab {
    #[default]
    Channels,
    Messages,
}

/// Trạng thái riêng của sidebar, không chia sẻ với cửa sổ chat.
pub struct SidebarState {
    pub channels: Vec<Channel>,
    pub contacts: Vec<Contact>,
    pub search_query: String,
    pub active_tab: SidebarTab,
    pub selected_id: Option<String>,
}

impl SidebarState {
    pub fn new(channels: Vec<Channel>, contacts: Vec<Contact>) -> Self {
        let selected_id = channels
            .iter()
            .find(|channel| channel.is_active)
            .map(|channel| channel.id.clone());

        Self {
            channels,
            contacts,
            search_query: String::new(),
            active_tab: SidebarTab::default(),
            selected_id,
        }
    }

    pub fn filtered_channels(&self) -> Vec<&Channel> {
        let query = self.search_query.to_lowercase();
        self.channels
            .iter()
            .filter(|channel| channel.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn filtered_contacts(&self) -> Vec<&Contact> {
        let query = self.search_query.to_lowercase();
        self.contacts
            .iter()
            .filter(|contact| contact.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    pub fn select(&mut self, id: &str) {
        self.selected_id = Some(id.to_string());
    }
}

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub conversation: Conversation,
    pub messages: MessageList,
    pub composer: Composer,
    pub sidebar: SidebarState,
    pub profile_name: String,
    pub profile_initials: String,
    pub scroll_to_bottom: bool,
}

impl AppState {
    pub fn new(
        conversation: Conversation,
        messages: MessageList,
        sidebar: SidebarState,
        profile_name: String,
        profile_initials: String,
    ) -> Self {
        Self {
            conversation,
            messages,
            composer: Composer::default(),
            sidebar,
            profile_name,
            profile_initials,
            scroll_to_bottom: true,
        }
    }

    pub fn send_message(&mut self, content: &str) {
        if self.messages.append(content).is_some() {
            self.scroll_to_bottom = true;
        }
    }
}
