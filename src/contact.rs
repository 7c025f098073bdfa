use std::{fmt, sync::LazyLock, time::Duration};

use regex::Regex;
use thiserror::Error;

/// How long the fake send takes.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the "Message Sent!" notice stays up.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(5000);

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    Missing(Field),
    #[error("{0} is not a valid email address")]
    InvalidEmail(String),
    #[error("a message is already being sent")]
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Reports the first field, in form order, that isn't acceptable.
    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ContactError::Missing(field));
        }
        let email = self.email.trim();
        if !EMAIL.is_match(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Sent,
}

impl SubmitPhase {
    /// Idle -> Submitting, for a valid form only.
    pub fn begin(&mut self, form: &ContactForm) -> Result<(), ContactError> {
        if *self != SubmitPhase::Idle {
            return Err(ContactError::Busy);
        }
        form.validate()?;
        *self = SubmitPhase::Submitting;
        Ok(())
    }

    /// Submitting -> Sent. Returns whether the transition happened.
    pub fn finish(&mut self) -> bool {
        if *self == SubmitPhase::Submitting {
            *self = SubmitPhase::Sent;
            true
        } else {
            false
        }
    }

    /// Sent -> Idle.
    pub fn reset(&mut self) -> bool {
        if *self == SubmitPhase::Sent {
            *self = SubmitPhase::Idle;
            true
        } else {
            false
        }
    }

    pub fn is_submitting(self) -> bool {
        self == SubmitPhase::Submitting
    }
}
