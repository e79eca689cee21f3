//! Line-oriented console front end for rookery.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use command::Command;
pub use config::{SessionConfig, SessionOption};
pub use error::ConsoleError;
pub use session::Session;
