//! Password generation.

use async_trait::async_trait;
use chbs::config::BasicConfig;
use chbs::prelude::*;
use chbs::probability::Probability;
use chbs::word::WordSampler;
use rand::Rng;
use rand::rngs::OsRng;
use tracing::trace;
use zeroize::Zeroize;

use super::{Generator, charset};
use crate::GenerateError;
use crate::config::{GenerationConfig, Mode, RandomCharacters, WordsConfig};

/// Samples drawn before giving up with `MaxRetries`.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Generator backed by the operating system's CSPRNG.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    max_attempts: usize,
}

impl RandomGenerator {
    pub fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Generator for RandomGenerator {
    async fn generate(&self, config: GenerationConfig) -> Result<String, GenerateError> {
        match config.mode {
            Mode::Characters => characters(&config.random_characters, self.max_attempts),
            Mode::Words => words(&config.words),
        }
    }
}

/// Random characters drawn from the enabled sets, with at least one
/// character from each of them.
pub fn characters(
    options: &RandomCharacters,
    max_attempts: usize,
) -> Result<String, GenerateError> {
    let sets = &options.enabled_character_sets;
    let pool = charset::build(sets);
    if pool.is_empty() {
        return Err(GenerateError::NoCharsets);
    }

    let length = options.length.get() as usize;
    let mut rng = OsRng;
    let mut buf: Vec<char> = Vec::with_capacity(length);

    for attempt in 1..=max_attempts {
        buf.clear();
        buf.extend((0..length).map(|_| pool[rng.gen_range(0..pool.len())]));
        if charset::covers(&buf, sets) {
            let password = buf.iter().collect();
            buf.zeroize();
            return Ok(password);
        }
        trace!(attempt, "sample missed an enabled set");
    }

    buf.zeroize();
    Err(GenerateError::MaxRetries)
}

/// Lowercase passphrase from the EFF large word list.
pub fn words(options: &WordsConfig) -> Result<String, GenerateError> {
    let mut config: BasicConfig<WordSampler> = BasicConfig::default();
    config.words = options.count.get();
    config.separator = options.separator.clone();
    config.capitalize_first = Probability::Never;
    config.capitalize_words = Probability::Never;

    let scheme = config.to_scheme();
    Ok(scheme.generate())
}
