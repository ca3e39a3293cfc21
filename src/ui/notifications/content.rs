// SPDX-License-Identifier: MPL-2.0
//! What a banner displays.

use iced::widget::image::Handle;

/// The fields of a system-style notification.
///
/// Every field is optional; a banner lays out whatever is present.
/// Empty strings are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct NotificationContent {
    icon: Option<Handle>,
    source_label: Option<String>,
    title: Option<String>,
    message: Option<String>,
    timestamp: Option<String>,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|s| !s.is_empty())
}

impl NotificationContent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the app icon shown in the header row.
    #[must_use]
    pub fn with_icon(mut self, icon: Handle) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the name of the app or source shown next to the icon.
    #[must_use]
    pub fn with_source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = non_empty(label);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = non_empty(message);
        self
    }

    /// Sets the pre-formatted time string shown at the trailing edge of the header.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = non_empty(timestamp);
        self
    }

    #[must_use]
    pub fn icon(&self) -> Option<&Handle> {
        self.icon.as_ref()
    }

    #[must_use]
    pub fn source_label(&self) -> Option<&str> {
        self.source_label.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_all_text_fields() {
        let content = NotificationContent::new()
            .with_source_label("Mail")
            .with_title("Alice")
            .with_message("Lunch?")
            .with_timestamp("now");

        assert_eq!(content.source_label(), Some("Mail"));
        assert_eq!(content.title(), Some("Alice"));
        assert_eq!(content.message(), Some("Lunch?"));
        assert_eq!(content.timestamp(), Some("now"));
        assert!(content.icon().is_none());
    }

    #[test]
    fn empty_strings_are_absent() {
        let content = NotificationContent::new().with_title("").with_message("");
        assert!(content.title().is_none());
        assert!(content.message().is_none());
    }

    #[test]
    fn icon_handle_is_kept() {
        let icon = Handle::from_rgba(1, 1, vec![255, 0, 0, 255]);
        let content = NotificationContent::new().with_icon(icon);
        assert!(content.icon().is_some());
    }
}
