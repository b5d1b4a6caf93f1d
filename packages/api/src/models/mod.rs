//! Data models for the application.

mod interview;
mod user;

pub use interview::{Feedback, Interview};
pub use user::{Session, UserInfo};
