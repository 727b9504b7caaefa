//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a sectile.toml, and if present we load settings from there.
//! This provides the heading depth and record list formatting preferences.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from sectile.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 4)]
    /// Deepest heading level treated as document structure.
    pub max_depth: usize,
    #[facet(default = true)]
    /// Pretty-print extracted record lists.
    pub pretty: bool,
}

impl Config {
    #[must_use]
    /// Load configuration from sectile.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("sectile.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
