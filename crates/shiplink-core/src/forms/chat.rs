// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Chat thread

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Me,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    Text(String),
    /// Attached photo, identified by its file name
    Image(String),
    Location { latitude: f64, longitude: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub body: MessageBody,
    pub time: String,
}

impl ChatMessage {
    fn new(sender: Sender, body: MessageBody, time: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            body,
            time: time.into(),
        }
    }

    fn now(body: MessageBody) -> Self {
        Self::new(Sender::Me, body, current_time_label())
    }
}

/// Clock label shown under a message, e.g. "10:36 AM"
fn current_time_label() -> String {
    chrono::Local::now().format("%I:%M %p").to_string()
}

/// Messages of the open conversation plus the composer state
#[derive(Debug, Clone)]
pub struct ChatThread {
    messages: Vec<ChatMessage>,
    pub draft: String,
    pub show_attach_menu: bool,
}

impl Default for ChatThread {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ChatThread {
    /// Thread pre-filled with the sample conversation
    pub fn seeded() -> Self {
        let seed = [
            (Sender::Other, "Hi! I saw your parcel request to Munich. I can help!", "10:30 AM"),
            (Sender::Me, "Great! When are you traveling?", "10:32 AM"),
            (
                Sender::Other,
                "I'm departing on December 18th. The package looks manageable.",
                "10:33 AM",
            ),
            (Sender::Me, "Perfect timing! Can you deliver by the 20th?", "10:35 AM"),
            (Sender::Other, "Absolutely. I'll be in Munich on the 19th.", "10:36 AM"),
        ];

        Self {
            messages: seed
                .into_iter()
                .map(|(sender, text, time)| {
                    ChatMessage::new(sender, MessageBody::Text(text.to_string()), time)
                })
                .collect(),
            draft: String::new(),
            show_attach_menu: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send the current draft. Blank drafts are ignored.
    pub fn send_draft(&mut self) -> Option<&ChatMessage> {
        if self.draft.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        self.push(ChatMessage::now(MessageBody::Text(text)))
    }

    pub fn attach_image(&mut self, file_name: impl Into<String>) -> Option<&ChatMessage> {
        self.show_attach_menu = false;
        self.push(ChatMessage::now(MessageBody::Image(file_name.into())))
    }

    pub fn share_location(&mut self, latitude: f64, longitude: f64) -> Option<&ChatMessage> {
        self.show_attach_menu = false;
        self.push(ChatMessage::now(MessageBody::Location {
            latitude,
            longitude,
        }))
    }

    pub fn toggle_attach_menu(&mut self) {
        self.show_attach_menu = !self.show_attach_menu;
    }

    fn push(&mut self, message: ChatMessage) -> Option<&ChatMessage> {
        tracing::debug!("Chat message {} appended", message.id);
        self.messages.push(message);
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_conversation() {
        let thread = ChatThread::seeded();
        assert_eq!(thread.messages().len(), 5);
        assert_eq!(thread.messages()[0].sender, Sender::Other);
        assert_eq!(thread.messages()[4].time, "10:36 AM");
    }

    #[test]
    fn test_blank_draft_is_ignored() {
        let mut thread = ChatThread::seeded();
        thread.draft = "   ".to_string();
        assert!(thread.send_draft().is_none());
        assert_eq!(thread.messages().len(), 5);
    }

    #[test]
    fn test_send_draft_appends_and_clears() {
        let mut thread = ChatThread::seeded();
        thread.draft = "See you at the station".to_string();

        let sent = thread.send_draft().cloned().unwrap();
        assert_eq!(sent.sender, Sender::Me);
        assert_eq!(sent.body, MessageBody::Text("See you at the station".to_string()));
        assert!(thread.draft.is_empty());
        assert_eq!(thread.messages().len(), 6);
    }

    #[test]
    fn test_attachments_close_menu() {
        let mut thread = ChatThread::seeded();
        thread.toggle_attach_menu();
        assert!(thread.show_attach_menu);

        thread.attach_image("parcel.jpg");
        assert!(!thread.show_attach_menu);

        thread.toggle_attach_menu();
        thread.share_location(48.137, 11.575);
        assert!(!thread.show_attach_menu);
        assert!(matches!(
            thread.messages().last().map(|m| &m.body),
            Some(MessageBody::Location { .. })
        ));
    }

    #[test]
    fn test_message_ids_are_unique() {
        let mut thread = ChatThread::seeded();
        thread.attach_image("a.jpg");
        thread.attach_image("b.jpg");
        let n = thread.messages().len();
        assert_ne!(thread.messages()[n - 1].id, thread.messages()[n - 2].id);
    }
}
