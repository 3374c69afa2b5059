use crate::domain::Document;
use chrono::{DateTime, Utc};

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PHONE_NUMBER: &str = "phoneNumber";
pub const LICENSE_PLATE: &str = "licensePlate";
pub const CREATED_AT: &str = "createdAt";

/// The per-user record kept in the document store under the user's uid.
#[derive(Clone, PartialEq, Debug)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub license_plate: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn to_document(&self) -> Document {
        let document = Document::new()
            .with(NAME, self.name.as_str())
            .with(EMAIL, self.email.as_str())
            .with(PHONE_NUMBER, self.phone_number.as_str())
            .with(LICENSE_PLATE, self.license_plate.as_str());

        match self.created_at {
            Some(created_at) => document.with(CREATED_AT, created_at),
            None => document,
        }
    }

    /// Missing fields read as empty strings.
    pub fn from_document(document: &Document) -> Self {
        let text = |name: &str| document.get_str(name).unwrap_or_default().to_string();

        UserProfile {
            name: text(NAME),
            email: text(EMAIL),
            phone_number: text(PHONE_NUMBER),
            license_plate: text(LICENSE_PLATE),
            created_at: document.get(CREATED_AT).and_then(|value| value.as_timestamp()),
        }
    }
}
