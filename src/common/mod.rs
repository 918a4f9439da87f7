pub mod commands;
pub mod format;
pub mod types;

pub use commands::ChatCommand;
pub use types::{
    Channel, ChatKind, ChatMessage, Contact, Conversation, Reaction, ReplyReference, Sender,
};
