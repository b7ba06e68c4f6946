//! Contact messages as stored by the backend and as submitted by the form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Review lifecycle of a contact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    /// Not yet opened by a maintainer.
    New,
    /// Opened but not answered.
    Read,
    /// Answered.
    Responded,
}

impl ContactStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 3] = [Self::New, Self::Read, Self::Responded];

    /// Wire and display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Responded => "responded",
        }
    }

    /// The next status in the lifecycle, or `None` once responded.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::New => Some(Self::Read),
            Self::Read => Some(Self::Responded),
            Self::Responded => None,
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted contact message.
///
/// Field names follow the backend's JSON (`_id`, camelCase). `created_at` is
/// assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Optional phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// Server-side creation time.
    pub created_at: DateTime<Utc>,
    /// Review status.
    pub status: ContactStatus,
}

/// Body of `POST /contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    /// Builds the payload from validated contact form values.
    ///
    /// Missing keys become empty strings. A blank phone is omitted from the
    /// request body.
    #[must_use]
    pub fn from_values(values: &BTreeMap<String, String>) -> Self {
        let field = |name: &str| values.get(name).cloned().unwrap_or_default();
        Self {
            name: field("name"),
            email: field("email"),
            phone: values
                .get("phone")
                .filter(|p| !p.trim().is_empty())
                .cloned(),
            subject: field("subject"),
            message: field("message"),
        }
    }
}

/// Body of `PUT /contact/:id/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: ContactStatus,
}
