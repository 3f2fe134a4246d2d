//! Infrastructure configuration modules.

pub mod commands;
pub mod logging;
pub mod settings;
pub mod wallet;
pub mod webhook;
