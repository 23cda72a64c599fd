//! # Eager Birds Core
//!
//! Domain model and access rules for tutor scheduling slots. Storage and
//! sessions live in a hosted backend and are reached through the
//! [`store::SlotStore`] and [`session`] ports; adapters live in
//! `eagerbirds-db`.

pub mod access;
pub mod config;
pub mod errors;
pub mod feed;
pub mod models;
pub mod session;
pub mod store;
