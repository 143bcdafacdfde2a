//! Contact message types.
//!
//! A [`ContactSubmission`] is what a visitor sends; a [`ContactMessage`] is
//! what the log stores after stamping it with the server's local time.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Format of [`ContactMessage::timestamp`]: `YYYY-MM-DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The visitor-supplied fields of a contact message.
///
/// Every field is optional; absent fields are stored as `null`. Unknown keys
/// in an inbound payload, including a `timestamp`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    /// Sender's name.
    pub name: Option<String>,
    /// Sender's email address.
    pub email: Option<String>,
    /// Message subject line.
    pub subject: Option<String>,
    /// Message body.
    pub message: Option<String>,
}

/// A stored contact message.
///
/// Records carry no identifier; their position in the store is their
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender's name.
    #[serde(default)]
    pub name: Option<String>,
    /// Sender's email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Message subject line.
    #[serde(default)]
    pub subject: Option<String>,
    /// Message body.
    #[serde(default)]
    pub message: Option<String>,
    /// When the log accepted the message, local time in [`TIMESTAMP_FORMAT`].
    pub timestamp: String,
}

impl ContactSubmission {
    /// Create a submission with all four fields set.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            subject: Some(subject.into()),
            message: Some(message.into()),
        }
    }

    /// Stamp this submission with the given time.
    #[must_use]
    pub fn stamp_at(self, at: NaiveDateTime) -> ContactMessage {
        ContactMessage {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Stamp this submission with the current local time.
    #[must_use]
    pub fn stamp_now(self) -> ContactMessage {
        self.stamp_at(Local::now().naive_local())
    }
}

impl ContactMessage {
    /// The display name of the sender, falling back to the email address.
    #[must_use]
    pub fn sender(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
            .unwrap_or("(anonymous)")
    }

    /// Render the message as an indented plain-text block for terminal output.
    #[must_use]
    pub fn to_plain(&self) -> String {
        let mut out = format!("[{}] {}\n", self.timestamp, self.sender());
        if let Some(email) = &self.email {
            out.push_str(&format!("  Email:   {email}\n"));
        }
        if let Some(subject) = &self.subject {
            out.push_str(&format!("  Subject: {subject}\n"));
        }
        if let Some(body) = &self.message {
            for line in body.lines() {
                out.push_str(&format!("  | {line}\n"));
            }
        }
        out
    }
}
