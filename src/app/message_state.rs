use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

/// Footer status line. At most one message at a time; each kind has its own
/// lifetime.
#[derive(Debug, Clone, Default)]
pub struct MessageState {
    current: Option<Message>,
    pub expires_at: Option<Instant>,
}

impl MessageState {
    const ERROR_TIMEOUT: Duration = Duration::from_secs(3);
    const SUCCESS_TIMEOUT: Duration = Duration::from_secs(1);

    pub fn set_error_at(&mut self, text: String, now: Instant) {
        self.set(MessageKind::Error, text, now + Self::ERROR_TIMEOUT);
    }

    pub fn set_success_at(&mut self, text: String, now: Instant) {
        self.set(MessageKind::Success, text, now + Self::SUCCESS_TIMEOUT);
    }

    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.text_of(MessageKind::Error)
    }

    pub fn last_success(&self) -> Option<&str> {
        self.text_of(MessageKind::Success)
    }

    pub fn clear_expired_at(&mut self, now: Instant) {
        if self.expires_at.is_some_and(|expires| expires <= now) {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.expires_at = None;
    }

    fn set(&mut self, kind: MessageKind, text: String, expires_at: Instant) {
        self.current = Some(Message { kind, text });
        self.expires_at = Some(expires_at);
    }

    fn text_of(&self, kind: MessageKind) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|m| m.kind == kind)
            .map(|m| m.text.as_str())
    }
}
