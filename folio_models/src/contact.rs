use nutype::nutype;

use crate::email_address::EmailAddress;

/// Raw contact form payload as submitted by the client, before any
/// validation has happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Honeypot field. Humans never see it; bots tend to fill it in.
    pub website: Option<String>,
}

/// A contact message that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub subject: ContactMessageSubject,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
}

#[nutype(
    validate(len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    validate(len_char_max = 200),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageSubject(String);

#[nutype(
    validate(len_char_max = 5000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds() {
        assert!(ContactMessageAuthorName::try_from("x".repeat(100)).is_ok());
        assert!(ContactMessageAuthorName::try_from("x".repeat(101)).is_err());
        assert!(ContactMessageSubject::try_from("x".repeat(200)).is_ok());
        assert!(ContactMessageSubject::try_from("x".repeat(201)).is_err());
        assert!(ContactMessageContent::try_from("x".repeat(5000)).is_ok());
        assert!(ContactMessageContent::try_from("x".repeat(5001)).is_err());
    }
}
