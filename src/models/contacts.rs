//! Contact record and rendered contact channels.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Contact identifiers as published by the content backend.
///
/// Fields are raw strings; nothing about their shape is enforced upstream,
/// so every consumer must tolerate empty or malformed values. A field the
/// backend sends as `null` (or any non-scalar) reads as empty, and a numeric
/// field reads as its decimal digits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Contacts {
    /// Voice line, digits only (e.g. "79991234567").
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    /// WhatsApp number, digits only.
    #[serde(deserialize_with = "lenient_string")]
    pub whatsapp: String,
    /// Sales mailbox.
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    /// Name of the manager answering the lines above.
    #[serde(deserialize_with = "lenient_string")]
    pub manager: String,
}

/// Read one contact field without failing the whole record.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Communication method of a [`ContactChannel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelKind {
    Phone,
    WhatsApp,
    Email,
}

impl ChannelKind {
    /// Accessible name for the link.
    pub fn aria_label(self) -> &'static str {
        match self {
            Self::Phone => "Телефон",
            Self::WhatsApp => "Whatsapp",
            Self::Email => "Email",
        }
    }
}

/// A contact link ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    /// Link target built from the raw identifier (`tel:`, `https://wa.me/`, `mailto:`).
    pub href: String,
    /// Visible text.
    pub label: String,
    /// Secondary line (manager name), if any.
    pub note: Option<String>,
}
