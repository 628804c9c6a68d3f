//! Shared configuration types for craftmac
//!
//! This crate contains serializable configuration types that are shared between
//! the conversion library (craftmac-core) and any host frontend.

use serde::{Deserialize, Serialize};


// ─────────────────────────────────────────────────────────────────────────────
// Macro Conversion Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Settings for converting a crafting rotation into macro pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroConfig {
    /// Keep the wait annotation on the final macro line
    #[serde(default)]
    pub wait_last_line: bool,
    /// Resolve unambiguous skill-name prefixes
    #[serde(default = "default_autocomplete")]
    pub autocomplete: bool,
    /// Lines per macro page, page boundary marker included
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Sound effect number played by completion cues
    #[serde(default = "default_sound_effect")]
    pub sound_effect: u8,
    /// Append a final "Macro done" cue after the last page
    #[serde(default)]
    pub sound_effect_on_last_page: bool,
}

fn default_autocomplete() -> bool {
    true
}

fn default_page_size() -> usize {
    15
}

fn default_sound_effect() -> u8 {
    1
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            wait_last_line: false,
            autocomplete: true,
            page_size: 15,
            sound_effect: 1,
            sound_effect_on_last_page: false,
        }
    }
}
