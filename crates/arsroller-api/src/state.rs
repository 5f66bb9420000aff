//! Shared application state.

use std::sync::{Arc, Mutex};

use arsroller_core::rng::{DeterministicRng, SeededRng, SystemRng};

use crate::config::ServerConfig;

/// Die source shared by every request handler.
pub type SharedRng = Arc<Mutex<dyn DeterministicRng + Send>>;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Die source. Held only for the duration of one resolution.
    pub rng: SharedRng,
    /// Most botch dice a single request may roll.
    pub max_botch_dice: u32,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(rng: SharedRng, max_botch_dice: u32) -> Self {
        Self {
            rng,
            max_botch_dice,
        }
    }

    /// Builds state from configuration: a seeded generator when a seed is
    /// configured, the system generator otherwise.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        let rng: SharedRng = match config.seed {
            Some(seed) => Arc::new(Mutex::new(SeededRng::new(seed))),
            None => Arc::new(Mutex::new(SystemRng)),
        };
        Self::new(rng, config.max_botch_dice)
    }
}
