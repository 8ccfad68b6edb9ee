use reqwest::Client;
use shared::{ErrorBody, NewSubscriber, SUBSCRIBERS, Subscriber, ValidationError, validate_email};
use thiserror::Error;
use tracing::{error, info};

pub const FALLBACK_MESSAGE: &str = "Failed to subscribe";

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Rejected { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

/// Transient message shown after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn from_outcome(outcome: &Result<Subscriber, ClientError>) -> Self {
        match outcome {
            Ok(_) => Self {
                title: "Subscribed!".to_string(),
                description: "You've been added to the waitlist.".to_string(),
                variant: Variant::Default,
            },
            Err(e) => Self {
                title: "Error".to_string(),
                description: e.to_string(),
                variant: Variant::Destructive,
            },
        }
    }

    pub fn show(&self) {
        match self.variant {
            Variant::Default => info!("{}: {}", self.title, self.description),
            Variant::Destructive => error!("{}: {}", self.title, self.description),
        }
    }
}

/// Validates locally, then posts the signup. Nothing is sent for an invalid email.
pub async fn subscribe(client: &Client, base_url: &str, email: &str) -> Result<Subscriber, ClientError> {
    let payload = NewSubscriber {
        email: validate_email(email)?,
    };

    let response = client
        .post(SUBSCRIBERS.url(base_url))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();

        return Err(ClientError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        });
    }

    Ok(response.json().await?)
}

/// Server-provided message, or the generic fallback when the body has none.
pub fn rejection_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|body| body.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}
