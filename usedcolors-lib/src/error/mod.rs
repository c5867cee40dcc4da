//! Error types

mod config;
mod diagnostic;
mod facts;

pub use config::*;
pub use diagnostic::*;
pub use facts::*;
