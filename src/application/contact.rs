//! Contact form state and its delivery seam.

use crate::domain::{SiteError, SiteResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Phone,
        ContactField::Email,
        ContactField::Message,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Phone => "Phone",
            ContactField::Email => "Email",
            ContactField::Message => "How can we help?",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, ContactField::Message)
    }

    /// The field after this one, or `None` after the message.
    pub fn next(self) -> Option<ContactField> {
        match self {
            ContactField::Name => Some(ContactField::Phone),
            ContactField::Phone => Some(ContactField::Email),
            ContactField::Email => Some(ContactField::Message),
            ContactField::Message => None,
        }
    }
}

/// What a submitted form carries. No field is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// Where submitted contact messages go.
pub trait ContactSink: std::fmt::Debug {
    fn deliver(&self, message: &ContactMessage) -> SiteResult<()>;
}

/// The form has no delivery endpoint; every submission is refused.
#[derive(Debug, Default)]
pub struct UnconfiguredSink;

impl ContactSink for UnconfiguredSink {
    fn deliver(&self, _message: &ContactMessage) -> SiteResult<()> {
        Err(SiteError::SubmissionUnavailable)
    }
}

/// Field values and the editing cursor of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub values: ContactMessage,
    /// Field being edited, if any.
    pub editing: Option<ContactField>,
    /// Byte offset of the cursor within the edited field.
    pub cursor_position: usize,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.values.name,
            ContactField::Phone => &self.values.phone,
            ContactField::Email => &self.values.email,
            ContactField::Message => &self.values.message,
        }
    }

    fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.values.name,
            ContactField::Phone => &mut self.values.phone,
            ContactField::Email => &mut self.values.email,
            ContactField::Message => &mut self.values.message,
        }
    }

    /// Starts editing `field` with the cursor at its end.
    pub fn begin(&mut self, field: ContactField) {
        self.editing = Some(field);
        self.cursor_position = self.value(field).len();
    }

    pub fn end(&mut self) {
        self.editing = None;
        self.cursor_position = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let Some(field) = self.editing else { return };
        let position = self.cursor_position;
        self.value_mut(field).insert(position, c);
        self.cursor_position += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        let Some(field) = self.editing else { return };
        let position = self.cursor_position;
        let value = self.value_mut(field);
        if let Some((index, _)) = value[..position].char_indices().next_back() {
            value.remove(index);
            self.cursor_position = index;
        }
    }

    pub fn delete(&mut self) {
        let Some(field) = self.editing else { return };
        let position = self.cursor_position;
        let value = self.value_mut(field);
        if position < value.len() {
            value.remove(position);
        }
    }

    pub fn move_left(&mut self) {
        let Some(field) = self.editing else { return };
        let previous = self.value(field)[..self.cursor_position]
            .char_indices()
            .next_back()
            .map(|(index, _)| index);
        if let Some(index) = previous {
            self.cursor_position = index;
        }
    }

    pub fn move_right(&mut self) {
        let Some(field) = self.editing else { return };
        let next = self.value(field)[self.cursor_position..].chars().next();
        if let Some(c) = next {
            self.cursor_position += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_end(&mut self) {
        if let Some(field) = self.editing {
            self.cursor_position = self.value(field).len();
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
