/// Lệnh các component UI gửi lên `ChatApp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Composer submitted a non-blank, trimmed message.
    SendMessage(String),
    /// Copy nội dung tin nhắn vào clipboard
    CopyText(String),
    /// A sidebar row was clicked.
    /// - id: channel id hoặc contact id
    OpenConversation { id: String },
}
