//! Lambda entrypoint handler

pub mod handler;

// Re-export the main handler for convenience
pub use handler::handler;
