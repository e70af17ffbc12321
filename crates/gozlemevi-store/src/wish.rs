use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::clock::Clock;

pub const MAX_NAME_CHARS: usize = 50;
pub const MAX_MESSAGE_CHARS: usize = 300;

/// One submitted entry on the wall. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wish {
    pub id: String,
    pub name: String,
    pub message: String,
    /// Attached photo as a `data:` URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Creation day in `dd.mm.yyyy` form.
    pub date: String,
    /// Creation instant in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Wish {
    /// Validates `draft` and stamps it with a fresh id and the clock's instant.
    pub fn from_draft(draft: WishDraft, clock: &impl Clock) -> Result<Self, DraftError> {
        let draft = draft.validate()?;
        let now = clock.now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            message: draft.message,
            image: draft.image,
            date: crate::clock::display_date(now.date_naive()),
            timestamp: now.timestamp_millis(),
        })
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("message must not be empty")]
    EmptyMessage,
    #[error("name is {0} characters long, the limit is {}", MAX_NAME_CHARS)]
    NameTooLong(usize),
    #[error("message is {0} characters long, the limit is {}", MAX_MESSAGE_CHARS)]
    MessageTooLong(usize),
}

/// Raw form input before it becomes a [`Wish`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishDraft {
    pub name: String,
    pub message: String,
    pub image: Option<String>,
}

impl WishDraft {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Whether the submit control should be enabled.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.message.trim().is_empty()
    }

    /// Returns the trimmed draft, or the first rule it breaks.
    pub fn validate(self) -> Result<Self, DraftError> {
        let name = self.name.trim();
        let message = self.message.trim();
        if name.is_empty() {
            return Err(DraftError::EmptyName);
        }
        if message.is_empty() {
            return Err(DraftError::EmptyMessage);
        }
        let name_len = name.chars().count();
        if name_len > MAX_NAME_CHARS {
            return Err(DraftError::NameTooLong(name_len));
        }
        let message_len = message.chars().count();
        if message_len > MAX_MESSAGE_CHARS {
            return Err(DraftError::MessageTooLong(message_len));
        }
        Ok(Self {
            name: name.to_owned(),
            message: message.to_owned(),
            image: self.image.filter(|image| !image.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2026, 10, 18, 21, 30, 0).unwrap())
    }

    #[test]
    fn draft_is_trimmed_into_wish() {
        let wish = Wish::from_draft(WishDraft::new("  Ela ", "\tHuzur dilerim \n"), &clock()).unwrap();
        assert_eq!(wish.name, "Ela");
        assert_eq!(wish.message, "Huzur dilerim");
        assert_eq!(wish.date, "18.10.2026");
        assert_eq!(wish.timestamp, clock().0.timestamp_millis());
        assert!(!wish.has_image());
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(
            WishDraft::new("   ", "hello").validate(),
            Err(DraftError::EmptyName)
        );
        assert_eq!(
            WishDraft::new("Ela", " \n ").validate(),
            Err(DraftError::EmptyMessage)
        );
        assert!(!WishDraft::new("Ela", "  ").is_submittable());
    }

    #[test]
    fn length_limits_count_characters() {
        let name = "ş".repeat(MAX_NAME_CHARS);
        assert!(WishDraft::new(name.clone(), "ok").validate().is_ok());
        assert_eq!(
            WishDraft::new(format!("{name}ş"), "ok").validate(),
            Err(DraftError::NameTooLong(MAX_NAME_CHARS + 1))
        );
        let message = "ı".repeat(MAX_MESSAGE_CHARS + 2);
        assert_eq!(
            WishDraft::new("Ela", message).validate(),
            Err(DraftError::MessageTooLong(MAX_MESSAGE_CHARS + 2))
        );
    }

    #[test]
    fn empty_image_is_dropped() {
        let draft = WishDraft::new("Ela", "hi").with_image("").validate().unwrap();
        assert_eq!(draft.image, None);
    }

    #[test]
    fn ids_are_unique() {
        let a = Wish::from_draft(WishDraft::new("A", "a"), &clock()).unwrap();
        let b = Wish::from_draft(WishDraft::new("A", "a"), &clock()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn json_uses_plain_field_names_and_omits_missing_image() {
        let wish = Wish {
            id: "1".into(),
            name: "Ela".into(),
            message: "Huzur".into(),
            image: None,
            date: "18.10.2026".into(),
            timestamp: 1_792_345_800_000,
        };
        let json = serde_json::to_value(&wish).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "name": "Ela",
                "message": "Huzur",
                "date": "18.10.2026",
                "timestamp": 1_792_345_800_000_i64,
            })
        );
        let with_image: Wish = serde_json::from_str(
            r#"{"id":"2","name":"A","message":"B","image":"data:image/png;base64,AA==","date":"01.01.2026","timestamp":5}"#,
        )
        .unwrap();
        assert!(with_image.has_image());
    }
}
