//! Conversation-related types.

use mufasa_model::{Message, Role};

/// The replay state of one conversation.
///
/// Messages are kept in conversation order, and the whole transcript is
/// sent to the model on every turn. There is at most one system message,
/// and when present it is always the first one.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Returns the messages in conversation order.
    #[inline]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the system message, if installed.
    #[inline]
    pub fn system(&self) -> Option<&Message> {
        self.messages.first().filter(|m| m.role == Role::System)
    }

    /// Returns the number of messages, including the system message.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the transcript has no messages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the last message.
    #[inline]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Installs `content` as the system message at index 0, replacing the
    /// previous one.
    pub fn install_system<S: Into<String>>(&mut self, content: S) {
        let system = Message::system(content);
        match self.messages.first_mut() {
            Some(first) if first.role == Role::System => *first = system,
            _ => self.messages.insert(0, system),
        }
    }

    /// Appends a user message.
    #[inline]
    pub fn push_user<S: Into<String>>(&mut self, content: S) {
        self.messages.push(Message::user(content));
    }

    /// Appends an assistant message.
    #[inline]
    pub fn push_assistant<S: Into<String>>(&mut self, content: S) {
        self.messages.push(Message::assistant(content));
    }

    /// Removes every message.
    #[inline]
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::prompt_template_for;

    #[test]
    fn test_install_system_inserts_at_front() {
        let mut transcript = Transcript::default();
        transcript.push_user("hi");
        transcript.install_system("be nice");
        assert_eq!(
            transcript.messages(),
            &[Message::system("be nice"), Message::user("hi")]
        );
    }

    #[test]
    fn test_reinstall_replaces() {
        let mut transcript = Transcript::default();
        transcript.install_system(prompt_template_for("hi-IN").content);
        transcript.push_user("hi");
        transcript.push_assistant("Hello!");
        transcript.install_system(prompt_template_for("bn-IN").content);

        let systems = transcript
            .messages()
            .iter()
            .filter(|m| m.role == Role::System)
            .count();
        assert_eq!(systems, 1);
        assert_eq!(transcript.len(), 3);
        let system = transcript.system().unwrap();
        assert!(system.content.contains("Bengali"));
        assert!(!system.content.contains("Hindi"));
    }

    #[test]
    fn test_clear() {
        let mut transcript = Transcript::default();
        transcript.install_system("x");
        transcript.push_user("y");
        transcript.clear();
        assert!(transcript.is_empty());
        assert!(transcript.system().is_none());
    }
}
