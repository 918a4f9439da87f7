//! Hardcoded sample data used in place of a backend.

use chrono::{DateTime, Duration, Utc};

use crate::common::{
    Channel, ChatKind, ChatMessage, Contact, Conversation, Reaction, ReplyReference, Sender,
};

const PLACEHOLDER_AVATAR: &str = "/api/placeholder/32/32";

fn sender(id: &str, name: &str) -> Sender {
    Sender {
        id: id.to_string(),
        name: name.to_string(),
        avatar: Some(PLACEHOLDER_AVATAR.to_string()),
    }
}

fn reaction(emoji: &str, count: u32, has_reacted: bool) -> Reaction {
    Reaction {
        emoji: emoji.to_string(),
        count,
        has_reacted,
    }
}

fn message(
    id: &str,
    content: &str,
    sender: Sender,
    timestamp: DateTime<Utc>,
    is_own: bool,
) -> ChatMessage {
    ChatMessage {
        id: id.to_string(),
        content: content.to_string(),
        sender,
        timestamp,
        is_own,
        reactions: Vec::new(),
        reply_to: None,
    }
}

/// The conversation shown in the message pane.
pub fn conversation() -> Conversation {
    Conversation {
        kind: ChatKind::Channel,
        name: "general".to_string(),
        member_count: Some(24),
        is_online: false,
        typing: Some("Alice".to_string()),
    }
}

/// Bảy tin nhắn mẫu của kênh #general, cách nhau 5 phút, tin cuối cùng 30 phút trước `now`.
pub fn messages(now: DateTime<Utc>, local_user: &Sender) -> Vec<ChatMessage> {
    let minutes_ago = |minutes: i64| now - Duration::minutes(minutes);
    let alice = sender("alice", "Alice Johnson");
    let bob = sender("bob", "Bob Smith");
    let charlie = sender("charlie", "Charlie Brown");

    let mut welcome = message(
        "1",
        "Hey everyone! Welcome to our team chat. Feel free to share ideas and collaborate here! 🚀",
        alice,
        minutes_ago(60),
        false,
    );
    welcome.reactions = vec![reaction("👍", 3, false), reaction("🎉", 1, true)];

    let mut question = message(
        "4",
        "Actually, I do have a question about the database schema. Can we discuss it?",
        charlie.clone(),
        minutes_ago(45),
        false,
    );
    question.reply_to = Some(ReplyReference {
        id: "3".to_string(),
        content: "Let me know if you need any help with the project setup.".to_string(),
        sender: local_user.name.clone(),
    });

    let mut agreed = message(
        "7",
        "Sounds good to me! 👍",
        local_user.clone(),
        minutes_ago(30),
        true,
    );
    agreed.reactions = vec![reaction("✅", 2, false)];

    vec![
        welcome,
        message(
            "2",
            "Thanks Alice! Excited to work with everyone.",
            bob,
            minutes_ago(55),
            false,
        ),
        message(
            "3",
            "Same here! Looking forward to building something amazing together. Let me know if you need any help with the project setup.",
            local_user.clone(),
            minutes_ago(50),
            true,
        ),
        question,
        message(
            "5",
            "Of course! Let's schedule a quick call to go over it. I'm free this afternoon.",
            local_user.clone(),
            minutes_ago(40),
            true,
        ),
        message(
            "6",
            "Perfect! How about 3 PM? I'll send a calendar invite.",
            charlie,
            minutes_ago(35),
            false,
        ),
        agreed,
    ]
}

pub fn channels() -> Vec<Channel> {
    let channel = |id: &str, unread: Option<u32>, is_active: bool| Channel {
        id: id.to_string(),
        name: id.to_string(),
        unread,
        is_active,
    };

    vec![
        channel("general", Some(5), true),
        channel("random", None, false),
        channel("dev-team", Some(1), false),
    ]
}

pub fn contacts() -> Vec<Contact> {
    let contact = |id: &str, name: &str, is_online: bool, last: &str, ago: &str| Contact {
        id: id.to_string(),
        name: name.to_string(),
        is_online,
        last_message: Some(last.to_string()),
        last_active: Some(ago.to_string()),
        unread: None,
    };

    let mut alice = contact("1", "Alice Johnson", true, "Hey! How are you doing?", "2m");
    alice.unread = Some(2);

    vec![
        alice,
        contact("2", "Bob Smith", false, "Thanks for the help!", "1h"),
        contact("3", "Charlie Brown", true, "See you tomorrow", "3h"),
    ]
}
