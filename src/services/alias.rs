//! Alias generation
//!
//! The link service only depends on [`AliasGenerator`]; production uses
//! [`RandomAliasGenerator`], tests can script the candidates.

use crate::utils::generate_random_code;

/// Source of alias candidates
///
/// Candidates are not required to be unique; the link service checks each
/// one against the index before accepting it.
pub trait AliasGenerator: Send + Sync {
    fn generate(&self, length: usize) -> String;
}

/// Uniform random aliases over `[a-zA-Z]`
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAliasGenerator;

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        generate_random_code(length)
    }
}
