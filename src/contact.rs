use futures_util::future::{self, AbortHandle, AbortRegistration, Abortable, Aborted, Either};
use std::future::Future;
use std::pin::pin;
use thiserror::Error;

use crate::banner::{BannerKind, BannerRequest};

pub const SUBMISSION_TIMEOUT_MS: u32 = 15_000;
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending...";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("The message could not be sent in time, please try again")]
    TimedOut,
    #[error("The message was cancelled")]
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn validate(&self) -> Result<(), ContactError> {
        let filled = [&self.name, &self.email, &self.message]
            .iter()
            .all(|value| !value.is_empty());

        if filled {
            Ok(())
        } else {
            Err(ContactError::MissingFields)
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    status: FormStatus,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn edit(&mut self, field: ContactField, value: String) {
        self.fields.set(field, value);
    }

    /// Enters `Submitting` and hands out the fields to send.
    ///
    /// Returns `None` while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactFields> {
        if self.is_submitting() {
            return None;
        }

        self.status = FormStatus::Submitting;
        Some(self.fields.clone())
    }

    pub fn finish(&mut self, outcome: &Result<(), ContactError>) {
        if outcome.is_ok() {
            self.fields = ContactFields::default();
        }
        self.status = FormStatus::Idle;
    }

    pub fn submit_label(&self) -> &'static str {
        match self.status {
            FormStatus::Idle => SUBMIT_LABEL,
            FormStatus::Submitting => SUBMITTING_LABEL,
        }
    }

    pub fn submit_disabled(&self) -> bool {
        self.is_submitting()
    }
}

pub fn banner_for(outcome: &Result<(), ContactError>) -> BannerRequest {
    match outcome {
        Ok(()) => BannerRequest::new(BannerKind::Success, SUCCESS_MESSAGE),
        Err(error) => BannerRequest::new(BannerKind::Error, error.to_string()),
    }
}

/// Stands in for a network round trip: waits on `delay`, then checks the fields.
pub async fn simulate_submission<D>(fields: &ContactFields, delay: D) -> Result<(), ContactError>
where
    D: Future<Output = ()>,
{
    delay.await;
    fields.validate()
}

pub struct SubmissionTask<D> {
    fields: ContactFields,
    delay: D,
    registration: AbortRegistration,
}

impl<D> SubmissionTask<D>
where
    D: Future<Output = ()>,
{
    pub fn new(fields: ContactFields, delay: D) -> (Self, AbortHandle) {
        let (handle, registration) = AbortHandle::new_pair();
        let task = Self {
            fields,
            delay,
            registration,
        };
        (task, handle)
    }

    pub async fn run_with_timeout<T>(self, timeout: T) -> Result<(), ContactError>
    where
        T: Future<Output = ()>,
    {
        let Self {
            fields,
            delay,
            registration,
        } = self;

        let submission = pin!(Abortable::new(
            async move { simulate_submission(&fields, delay).await },
            registration,
        ));
        let timeout = pin!(timeout);

        match future::select(submission, timeout).await {
            Either::Left((Ok(outcome), _)) => outcome,
            Either::Left((Err(Aborted), _)) => Err(ContactError::Cancelled),
            Either::Right(((), _)) => Err(ContactError::TimedOut),
        }
    }
}
