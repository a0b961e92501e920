//! Password generation.

pub mod charset;
pub mod entropy;
mod generate;

use std::sync::Arc;

use async_trait::async_trait;

use crate::GenerateError;
use crate::config::GenerationConfig;

pub use generate::{DEFAULT_MAX_ATTEMPTS, RandomGenerator, characters, words};

/// Produces a password for a configuration snapshot.
#[async_trait]
pub trait Generator: Send + Sync + 'static {
    async fn generate(&self, config: GenerationConfig) -> Result<String, GenerateError>;
}

#[async_trait]
impl<G: Generator + ?Sized> Generator for Arc<G> {
    async fn generate(&self, config: GenerationConfig) -> Result<String, GenerateError> {
        (**self).generate(config).await
    }
}
