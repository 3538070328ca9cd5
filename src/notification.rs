//! Parse notifications.
//!
//! Non-fatal issues met while reading (unknown entity types, unknown
//! sections, stray sequence records) are collected as `Notification` items
//! instead of aborting the read. They are also traced through the `log`
//! facade where they are raised.
//!
//! After reading, inspect [`Drawing::notifications`](crate::Drawing::notifications).

use std::fmt;

/// What kind of input a notification reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// A section is kept raw, without a typed model.
    NotImplemented,
    /// A record type is not supported and was skipped.
    NotSupported,
    /// Input was dropped or replaced (stray SEQEND, duplicate table entry, ...).
    Warning,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotImplemented => "NotImplemented",
            Self::NotSupported => "NotSupported",
            Self::Warning => "Warning",
        };
        f.write_str(name)
    }
}

/// A single notification produced during reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub message: String,
    /// Source line of the record that raised it, when known
    pub line: Option<usize>,
}

impl Notification {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
            line: None,
        }
    }

    /// Attach a source line; 0 means unknown and is ignored
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = (line > 0).then_some(line);
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "[{}] line {}: {}", self.notification_type, line, self.message),
            None => write!(f, "[{}] {}", self.notification_type, self.message),
        }
    }
}

/// Ordered notifications of one read.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notification without line information.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.items.push(Notification::new(notification_type, message));
    }

    /// Record a notification for the record starting at `line`.
    pub fn notify_at(&mut self, notification_type: NotificationType, message: impl Into<String>, line: usize) {
        self.items.push(Notification::new(notification_type, message).at_line(line));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// All notifications of one type, in reading order.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }
}

impl Extend<Notification> for NotificationCollection {
    fn extend<I: IntoIterator<Item = Notification>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_zero_is_unknown() {
        let n = Notification::new(NotificationType::Warning, "dropped stray SEQEND 2F").at_line(0);
        assert_eq!(n.line, None);
        assert_eq!(n.at_line(41).line, Some(41));
    }

    #[test]
    fn test_collection_filters_by_type() {
        let mut c = NotificationCollection::new();
        assert!(c.is_empty());

        c.notify(NotificationType::Warning, "w1");
        c.notify_at(NotificationType::NotSupported, "WIDGET", 12);
        c.notify(NotificationType::Warning, "w2");

        assert_eq!(c.len(), 3);
        assert_eq!(c.of_type(NotificationType::Warning).len(), 2);
        assert!(c.has_type(NotificationType::NotSupported));
        assert!(!c.has_type(NotificationType::NotImplemented));
    }

    #[test]
    fn test_display() {
        let n = Notification::new(NotificationType::NotImplemented, "section THUMBNAILIMAGE kept raw");
        assert_eq!(n.to_string(), "[NotImplemented] section THUMBNAILIMAGE kept raw");
        let n = Notification::new(NotificationType::Warning, "dropped stray SEQEND").at_line(88);
        assert_eq!(n.to_string(), "[Warning] line 88: dropped stray SEQEND");
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut block = NotificationCollection::new();
        block.notify(NotificationType::Warning, "first");
        block.notify(NotificationType::NotSupported, "second");

        let mut all = NotificationCollection::new();
        all.notify(NotificationType::NotImplemented, "zero");
        all.extend(block);
        let messages: Vec<_> = all.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["zero", "first", "second"]);
    }
}
