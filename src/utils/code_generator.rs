//! Short code generation strategies.
//!
//! A generator only proposes candidates. Uniqueness against stored links is
//! enforced by the repository, and the shortener service retries on
//! collision.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::utils::base62::{self, ALPHABET};

/// First path segments of the fixed routes. Issuing one as a code would
/// shadow that route, so these are never handed out.
pub const RESERVED_CODES: &[&str] = &["health", "stats", "shorten"];

/// Returns true if `code` collides with a service route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(code))
}

/// Produces candidate short codes.
///
/// Implementations never fail and always return a non-empty base62 string.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Fixed-length codes sampled uniformly from the base62 alphabet.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator producing codes of `length` characters (at least one).
    pub fn new(length: usize) -> Self {
        Self {
            length: length.max(1),
        }
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Base62 encoding of a monotonically increasing counter.
///
/// Codes are left-padded with `'0'` to `min_length` until the counter
/// outgrows that width.
#[derive(Debug)]
pub struct SequentialCodeGenerator {
    counter: AtomicU64,
    min_length: usize,
}

impl SequentialCodeGenerator {
    pub fn new(min_length: usize) -> Self {
        Self::with_offset(min_length, 0)
    }

    /// Starts counting from `offset` instead of zero.
    pub fn with_offset(min_length: usize, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            min_length,
        }
    }
}

impl CodeGenerator for SequentialCodeGenerator {
    fn generate(&self) -> String {
        let value = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{:0>width$}", base62::encode(value), width = self.min_length)
    }
}

/// SHA-256 of a per-instance salt and a counter, reduced to base62 digits.
pub struct HashCodeGenerator {
    salt: [u8; 16],
    counter: AtomicU64,
    length: usize,
}

impl HashCodeGenerator {
    /// Creates a generator with a freshly drawn random salt.
    pub fn new(length: usize) -> Self {
        let mut salt = [0u8; 16];
        rand::rng().fill(&mut salt);
        Self::with_salt(length, salt)
    }

    /// Creates a generator with a fixed salt; output is deterministic.
    pub fn with_salt(length: usize, salt: [u8; 16]) -> Self {
        Self {
            salt,
            counter: AtomicU64::new(0),
            length: length.max(1),
        }
    }
}

impl CodeGenerator for HashCodeGenerator {
    fn generate(&self) -> String {
        let nonce = self.counter.fetch_add(1, Ordering::Relaxed);

        let mut hasher = Sha256::new();
        hasher.update(self.salt);
        hasher.update(nonce.to_be_bytes());
        let digest = hasher.finalize();

        let mut head = [0u8; 16];
        head.copy_from_slice(&digest[..16]);
        let mut value = u128::from_be_bytes(head);

        let mut code = String::with_capacity(self.length);
        for _ in 0..self.length {
            code.push(ALPHABET[(value % 62) as usize] as char);
            value /= 62;
        }
        code
    }
}

impl fmt::Debug for HashCodeGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashCodeGenerator")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

/// Which generator the service is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeStrategy {
    #[default]
    Random,
    Sequential,
    Hash,
}

impl CodeStrategy {
    /// Builds the generator for this strategy.
    pub fn build(self, length: usize) -> Arc<dyn CodeGenerator> {
        match self {
            CodeStrategy::Random => Arc::new(RandomCodeGenerator::new(length)),
            CodeStrategy::Sequential => Arc::new(SequentialCodeGenerator::new(length)),
            CodeStrategy::Hash => Arc::new(HashCodeGenerator::new(length)),
        }
    }
}

impl FromStr for CodeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(CodeStrategy::Random),
            "sequential" => Ok(CodeStrategy::Sequential),
            "hash" => Ok(CodeStrategy::Hash),
            other => Err(format!(
                "unknown code strategy '{other}', expected 'random', 'sequential' or 'hash'"
            )),
        }
    }
}

impl fmt::Display for CodeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CodeStrategy::Random => "random",
            CodeStrategy::Sequential => "sequential",
            CodeStrategy::Hash => "hash",
        };
        f.write_str(name)
    }
}
