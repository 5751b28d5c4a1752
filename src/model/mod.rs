//! Data model for the greeting demo

pub mod greeting;

pub use greeting::{GreetEntry, GreetLog};
