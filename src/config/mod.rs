pub mod args;
mod structs;
pub mod validators;

pub use args::Cli;
pub use structs::*;
pub(crate) use structs::{default_max_body_size, default_strict_content_type};
pub use validators::validate_config;
