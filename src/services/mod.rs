pub mod alias;
pub mod link_service;

pub use alias::{AliasGenerator, RandomAliasGenerator};
pub use link_service::{DEFAULT_MAX_ALIAS_ATTEMPTS, LinkService, ShortenOutcome};
