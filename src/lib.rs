#![doc(test(attr(deny(warnings))))]

//! Finman is a menu-driven personal finance record keeper: budgets, income,
//! expenses, and reminders for a single authenticated user, persisted as
//! whole-collection JSON snapshots between sessions.

pub mod cli;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finman tracing initialized.");
    });
}
