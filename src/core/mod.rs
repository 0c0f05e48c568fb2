//! Configuration, clock and response types shared by the handler.

pub mod clock;
pub mod config;
pub mod models;
