//! Configuration for a game session.

use fl_core::state::STARTING_KEYS;

/// Default base URL for static wiki images.
pub const WIKI_IMAGE_BASE: &str = "https://oldschool.runescape.wiki/images/";

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Keys held by a brand-new game.
    pub starting_keys: u32,
    /// Base URL for static item icons.
    pub wiki_base: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_keys: STARTING_KEYS,
            wiki_base: WIKI_IMAGE_BASE.to_string(),
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed for reproducible draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the Keys a new game starts with.
    pub fn with_starting_keys(mut self, keys: u32) -> Self {
        self.starting_keys = keys;
        self
    }

    /// Set the static icon base URL.
    pub fn with_wiki_base(mut self, base: impl Into<String>) -> Self {
        self.wiki_base = base.into();
        self
    }
}
