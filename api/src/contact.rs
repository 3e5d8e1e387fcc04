use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Why a contact submission was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{0} must not be blank")]
    Blank(&'static str),
    #[error("email address looks invalid")]
    InvalidEmail,
}

/// One contact-form submission.
///
/// `contact_id` and `created_at` are assigned by the server; clients send
/// them as `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDto {
    pub contact_id: Option<u64>,
    pub name: String,
    pub email: String,
    pub mobile_number: String,
    pub message: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl ContactDto {
    /// Field-level validation, shared by the client form and the server
    /// endpoint so both reject the same inputs.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Blank("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::Blank("email"));
        }
        if !self.email.contains('@') {
            return Err(ContactError::InvalidEmail);
        }
        if self.mobile_number.trim().is_empty() {
            return Err(ContactError::Blank("mobile number"));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Blank("message"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactDto {
        ContactDto {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            mobile_number: "555-0100".into(),
            message: "Do you ship analytical-engine stickers?".into(),
            ..ContactDto::default()
        }
    }

    #[test]
    fn accepts_a_complete_submission() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn rejects_blank_fields() {
        for (field, dto) in [
            ("name", ContactDto { name: "  ".into(), ..valid() }),
            ("email", ContactDto { email: String::new(), ..valid() }),
            ("mobile number", ContactDto { mobile_number: "\t".into(), ..valid() }),
            ("message", ContactDto { message: String::new(), ..valid() }),
        ] {
            assert_eq!(dto.validate(), Err(ContactError::Blank(field)));
        }
    }

    #[test]
    fn rejects_email_without_at_sign() {
        let dto = ContactDto {
            email: "ada.example.com".into(),
            ..valid()
        };
        assert_eq!(dto.validate(), Err(ContactError::InvalidEmail));
    }
}
