//! # Shared Contract
//!
//! Types and routes both ends of the signup flow agree on.
//!
//! ## Payloads
//!
//! To backend
//! - JSON, `{ "email": string }`
//!
//! From backend
//! - 201, the stored subscriber `{ "id", "email", "createdAt" }`
//! - 4xx/5xx, `{ "message" }` and, for validation failures, `"field"`
//!
//! ## Flow
//!
//! - Client validates the email before sending, nothing is sent if it fails
//! - Server validates again, the server's verdict is the one that counts
//! - Client shows the server `message` as is, or a generic fallback if the body is unreadable
//! - Form resets only on success

pub mod routes;
pub mod schema;

pub use routes::{HEALTH, Route, SUBSCRIBERS};
pub use schema::{ErrorBody, NewSubscriber, Subscriber, ValidationError, validate_email};
