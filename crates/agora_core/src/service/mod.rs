//! Core use-case services and decision functions.
//!
//! # Responsibility
//! - Hold the interval-throttling rule, the availability-resolution rule and
//!   the public-visibility filter that composes them.
//! - Keep host layers (API, CLI, delivery) decoupled from storage details.
//!
//! # Invariants
//! - Decision functions are synchronous computations over already-fetched
//!   data; they never hold locks or spawn background work.

pub mod availability;
pub mod interval_guard;
pub mod notification_service;
