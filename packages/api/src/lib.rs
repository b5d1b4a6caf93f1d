//! # API crate — client-side data contracts and authentication for PrepDeck
//!
//! This crate holds everything the PrepDeck frontends share below the UI
//! layer: the records that cross the props boundary, the credential
//! validation rules, and the authentication client the sign-in/sign-up form
//! talks to.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Auth mode + display copy, validated credential input, the [`auth::AuthClient`] interface and its simulated implementation, and the submit flow |
//! | [`models`] | Interview summary records, feedback, users, and sessions |
//!
//! The authentication call is an explicit extension point: the UI only sees
//! the [`auth::AuthClient`] trait, and the default [`auth::SimulatedAuthClient`]
//! stands in for a real network client until one exists. Tests inject their
//! own fakes the same way production will inject the real thing.

pub mod auth;
pub mod models;

pub use models::{Feedback, Interview, Session, UserInfo};
