//! Contact form state.
//!
//! The form is not wired to any delivery channel: a submission is handed
//! back to the caller, which logs it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What the visitor typed at the moment they pressed "Send Message".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Take the current values and leave every field empty.
    ///
    /// Input is not validated; empty or malformed values are accepted.
    pub fn submit(&mut self) -> ContactSubmission {
        ContactSubmission {
            name: std::mem::take(&mut self.name),
            email: std::mem::take(&mut self.email),
            message: std::mem::take(&mut self.message),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, name.into());
        form.set(ContactField::Email, email.into());
        form.set(ContactField::Message, message.into());
        form
    }

    #[test]
    fn submit_returns_values_and_resets() {
        let mut form = filled("Ada", "ada@example.com", "Hello there");
        let submission = form.submit();
        assert_eq!(
            submission,
            ContactSubmission {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                message: "Hello there".into(),
            }
        );
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn submit_always_leaves_form_empty() {
        let samples = ["", "x", "not-an-email", "  ", "ünïcödé"];
        for name in samples {
            for email in samples {
                for message in samples {
                    let mut form = filled(name, email, message);
                    form.submit();
                    assert!(form.is_empty(), "{name:?} {email:?} {message:?}");
                }
            }
        }
    }

    #[test]
    fn empty_submission_is_accepted() {
        let mut form = ContactForm::default();
        assert_eq!(form.submit(), ContactSubmission::default());
        assert!(form.is_empty());
    }

    #[test]
    fn set_and_get_address_single_field() {
        let mut form = ContactForm::default();
        form.set(ContactField::Email, "a@b.c".into());
        assert_eq!(form.get(ContactField::Email), "a@b.c");
        assert_eq!(form.get(ContactField::Name), "");
        assert_eq!(form.get(ContactField::Message), "");
    }

    #[test]
    fn submission_serializes_for_logging() {
        let submission = filled("Ada", "ada@example.com", "Hi").submit();
        let json = serde_json::to_value(&submission).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hi",
            })
        );
    }
}
