use serde::Serialize;
use thiserror::Error;

pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 1200;

const SUBJECT_PREFIX: &str = "Portfolio contact from";
const BODY_SIGNATURE: &str = "-- Sent from the portfolio";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ContactFieldError {
    #[error("name is required")]
    NameRequired,
    #[error("email is invalid")]
    EmailInvalid,
    #[error("message is too short (min {MESSAGE_MIN_CHARS} characters)")]
    MessageTooShort,
    #[error("message is too long (max {MESSAGE_MAX_CHARS} characters)")]
    MessageTooLong,
}

impl ContactFieldError {
    pub fn field(&self) -> ContactField {
        match self {
            Self::NameRequired => ContactField::Name,
            Self::EmailInvalid => ContactField::Email,
            Self::MessageTooShort | Self::MessageTooLong => ContactField::Message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("contact form is invalid: {}", join_errors(.0))]
pub struct ContactError(pub Vec<ContactFieldError>);

fn join_errors(errors: &[ContactFieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Every failing field, at most one error per field, in form order.
    pub fn field_errors(&self) -> Vec<ContactFieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ContactFieldError::NameRequired);
        }
        if !is_valid_email(&self.email) {
            errors.push(ContactFieldError::EmailInvalid);
        }
        if self.message.chars().count() > MESSAGE_MAX_CHARS {
            errors.push(ContactFieldError::MessageTooLong);
        } else if self.message.trim().chars().count() < MESSAGE_MIN_CHARS {
            errors.push(ContactFieldError::MessageTooShort);
        }

        errors
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ContactError(errors))
        }
    }

    pub fn subject(&self) -> String {
        format!("{SUBJECT_PREFIX} {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}\n\n{BODY_SIGNATURE}",
            self.name, self.email, self.message
        )
    }
}

/// Validate the form and build a `mailto:` link that opens the local mail client.
pub fn mailto_url(form: &ContactForm, recipient: Option<&str>) -> Result<String, ContactError> {
    form.validate()?;

    let recipient = recipient.map(str::trim).unwrap_or_default();
    Ok(format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(&form.subject()),
        urlencoding::encode(&form.body())
    ))
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and some dot in the
/// domain with non-empty text on each side.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm::new(
            "Ada Lovelace",
            "ada@example.com",
            "I would like to talk about a mobile app.",
        )
    }

    #[test]
    fn contact_valid_form_has_no_errors() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn contact_reports_each_failing_field_once() {
        let form = ContactForm::new("   ", "not-an-email", "hi");

        let errors = form.field_errors();

        assert_eq!(
            errors,
            vec![
                ContactFieldError::NameRequired,
                ContactFieldError::EmailInvalid,
                ContactFieldError::MessageTooShort,
            ]
        );
        assert_eq!(errors[2].field(), ContactField::Message);
    }

    #[test]
    fn contact_length_cap_wins_over_minimum() {
        let form = ContactForm {
            message: "x".repeat(MESSAGE_MAX_CHARS + 1),
            ..valid_form()
        };

        assert_eq!(form.field_errors(), vec![ContactFieldError::MessageTooLong]);
    }

    #[test]
    fn contact_message_minimum_ignores_surrounding_whitespace() {
        let form = ContactForm {
            message: "   short    ".to_string(),
            ..valid_form()
        };

        assert_eq!(form.field_errors(), vec![ContactFieldError::MessageTooShort]);
    }

    #[test]
    fn contact_email_shape_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(is_valid_email("a@b.c."));
        assert!(is_valid_email("a@b..c"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn contact_mailto_url_percent_encodes_subject_and_body() {
        let url = mailto_url(&valid_form(), None).expect("valid form");

        assert!(url.starts_with("mailto:?subject=Portfolio%20contact%20from%20Ada%20Lovelace&body="));
        assert!(url.contains("Name%3A%20Ada%20Lovelace%0AEmail%3A%20ada%40example.com"));
        assert!(!url.contains('\n'));
        assert!(!url.contains(' '));
    }

    #[test]
    fn contact_mailto_url_keeps_field_values_as_typed() {
        let form = ContactForm {
            name: " Ada ".to_string(),
            ..valid_form()
        };

        let url = mailto_url(&form, None).expect("valid form");

        assert!(url.starts_with("mailto:?subject=Portfolio%20contact%20from%20%20Ada%20&body="));
        assert!(url.contains("Name%3A%20%20Ada%20%0AEmail"));
    }

    #[test]
    fn contact_mailto_url_includes_recipient_when_configured() {
        let url = mailto_url(&valid_form(), Some(" me@example.com ")).expect("valid form");

        assert!(url.starts_with("mailto:me@example.com?subject="));
    }

    #[test]
    fn contact_mailto_url_rejects_invalid_form() {
        let err = mailto_url(&ContactForm::default(), None).expect_err("empty form must fail");

        assert_eq!(err.0.len(), 3);
        assert!(err.to_string().starts_with("contact form is invalid: name is required"));
    }
}
