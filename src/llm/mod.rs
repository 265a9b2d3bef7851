pub mod client;
pub mod filler;
pub mod prompts;
pub mod types;

pub use client::*;
pub use filler::*;
pub use prompts::*;
pub use types::*;
