//! Notices the user has to acknowledge, such as a move that was rolled back.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// FIFO queue of unacknowledged notices.
#[derive(Debug, Default)]
pub struct Notices {
    queue: VecDeque<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        tracing::warn!(message = %notice.message, "Notice raised");
        self.queue.push_back(notice);
    }

    /// Acknowledge the oldest notice.
    pub fn pop(&mut self) -> Option<Notice> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_are_acknowledged_oldest_first() {
        let mut notices = Notices::new();
        notices.push(Notice::new("first"));
        notices.push(Notice::new("second"));

        assert_eq!(notices.len(), 2);
        assert_eq!(notices.pop().unwrap().message, "first");
        assert_eq!(notices.pop().unwrap().message, "second");
        assert!(notices.is_empty());
    }
}
