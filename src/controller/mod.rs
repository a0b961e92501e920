//! Configuration-and-regeneration controller.
//!
//! The controller owns the current [`GenerationConfig`] and the last good
//! password. Every mutation is applied synchronously and then issues exactly
//! one regeneration with the post-mutation snapshot. Regenerations run as
//! tasks on the ambient tokio runtime and settle into a shared [`Generation`]:
//!
//! - success replaces the password,
//! - `NoCharsets` and `MaxRetries` leave it untouched without a trace
//!   outside the debug log,
//! - any other failure is forwarded to [`Failures`].
//!
//! Each regeneration carries a sequence number; a completion older than the
//! one that produced the current password is discarded.

mod intent;
mod state;


use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::GenerateError;
use crate::Result;
use crate::config::{CharacterSet, GenerationConfig, Length, Mode};
use crate::pass::Generator;

pub use intent::Intent;
pub use state::{Generation, Status};

use state::Settlement;

type AcceptFn = Box<dyn Fn(&str) + Send + Sync>;

/// Receiving end for generator failures the controller does not suppress.
///
/// Dropping it while regenerations are still running turns the next
/// unexpected failure into a panic of its regeneration task.
#[derive(Debug)]
pub struct Failures(mpsc::UnboundedReceiver<GenerateError>);

impl Failures {
    pub async fn recv(&mut self) -> Option<GenerateError> {
        self.0.recv().await
    }

    /// Next queued failure without waiting. `None` covers both an empty
    /// queue and a controller that has been dropped.
    pub fn try_recv(&mut self) -> Option<GenerateError> {
        self.0.try_recv().ok()
    }
}

pub struct Controller<G> {
    generator: Arc<G>,
    config: GenerationConfig,
    generation: Arc<watch::Sender<Generation>>,
    failures: mpsc::UnboundedSender<GenerateError>,
    on_accept: AcceptFn,
    tasks: JoinSet<()>,
    next_seq: u64,
}

impl<G: Generator> Controller<G> {
    /// Create a controller and issue the initial regeneration.
    ///
    /// Must be called within a tokio runtime.
    pub fn new<F>(generator: G, config: GenerationConfig, on_accept: F) -> (Self, Failures)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let (failures, failures_rx) = mpsc::unbounded_channel();
        let (generation, _) = watch::channel(Generation::default());

        let mut controller = Self {
            generator: Arc::new(generator),
            config,
            generation: Arc::new(generation),
            failures,
            on_accept: Box::new(on_accept),
            tasks: JoinSet::new(),
            next_seq: 0,
        };
        controller.regenerate();

        (controller, Failures(failures_rx))
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Last successful password, empty if none has been produced.
    pub fn password(&self) -> Zeroizing<String> {
        Zeroizing::new(self.generation.borrow().password().to_string())
    }

    pub fn status(&self) -> Status {
        self.generation.borrow().status()
    }

    /// Notified whenever a regeneration is issued or settles.
    pub fn subscribe(&self) -> watch::Receiver<Generation> {
        self.generation.subscribe()
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::ToggleSet(set) => self.toggle(set),
            Intent::ChangeLength(length) => self.set_length(length),
            Intent::ChangeMode(mode) => self.set_mode(mode),
            Intent::Regenerate => self.regenerate(),
            Intent::Accept => self.accept_current_password(),
        }
    }

    /// Toggle a character set by its canonical name.
    pub fn toggle_character_set(&mut self, name: &str) -> Result<()> {
        let set = name.parse::<CharacterSet>()?;
        self.toggle(set);
        Ok(())
    }

    pub fn toggle(&mut self, set: CharacterSet) {
        self.commit(|config| {
            let enabled = config.random_characters.enabled_character_sets.toggle(set);
            debug!(%set, enabled, "toggled character set");
        });
    }

    /// Parse and apply a new length. Rejected input changes nothing.
    pub fn change_length(&mut self, value: &str) -> Result<()> {
        let length = value.parse::<Length>()?;
        self.set_length(length);
        Ok(())
    }

    pub fn set_length(&mut self, length: Length) {
        self.commit(|config| {
            config.random_characters.length = length;
            debug!(%length, "changed length");
        });
    }

    pub fn change_mode(&mut self, name: &str) -> Result<()> {
        let mode = name.parse::<Mode>()?;
        self.set_mode(mode);
        Ok(())
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.commit(|config| {
            config.mode = mode;
            debug!(%mode, "changed mode");
        });
    }

    /// Regenerate with the current configuration.
    pub fn regenerate(&mut self) {
        self.next_seq += 1;
        let seq = self.next_seq;
        let snapshot = self.config.clone();
        self.generation.send_modify(|generation| generation.issue(seq));
        debug!(seq, mode = %snapshot.mode, "regeneration issued");

        let generator = Arc::clone(&self.generator);
        let generation = Arc::clone(&self.generation);
        let failures = self.failures.clone();

        self.tasks.spawn(async move {
            let outcome = generator.generate(snapshot).await;
            let mut settlement = Settlement::Stale;
            generation.send_modify(|generation| settlement = generation.settle(seq, outcome));

            match settlement {
                Settlement::Applied => debug!(seq, "password replaced"),
                Settlement::Suppressed(err) => {
                    debug!(seq, code = err.code(), "no password for this configuration")
                }
                Settlement::Stale => trace!(seq, "stale completion discarded"),
                Settlement::Unhandled(err) => {
                    if let Err(mpsc::error::SendError(err)) = failures.send(err) {
                        panic!("unhandled generator failure: {err}");
                    }
                }
            }
        });

        while let Some(result) = self.tasks.try_join_next() {
            reap(result);
        }
    }

    /// Hand the current password to the accept callback.
    pub fn accept_current_password(&self) {
        let password = self.password();
        (self.on_accept)(&password);
    }

    /// Wait for every outstanding regeneration to settle.
    pub async fn settled(&mut self) {
        while let Some(result) = self.tasks.join_next().await {
            reap(result);
        }
    }

    fn commit(&mut self, mutate: impl FnOnce(&mut GenerationConfig)) {
        mutate(&mut self.config);
        self.regenerate();
    }
}

fn reap(result: std::result::Result<(), JoinError>) {
    if let Err(err) = result
        && err.is_panic()
    {
        std::panic::resume_unwind(err.into_panic());
    }
}
