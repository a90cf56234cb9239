//! Daitch-Mokotoff Soundex encoder.
//!
//! Encodes names into six-digit phonetic codes. Because some letter clusters
//! have more than one plausible pronunciation, one name can yield several
//! codes; [`DaitchMokotoff::soundex`] returns all of them, while
//! [`DaitchMokotoff::encode`] follows only the first alternative.
//!
//! ```
//! use dms_soundex::DaitchMokotoff;
//!
//! let dm = DaitchMokotoff::new();
//! assert_eq!(dm.encode("Auerbach"), "097400");
//! assert_eq!(dm.soundex("Auerbach"), "097400|097500");
//! ```
//!
//! - [`cleanup`] -- input normalization (letters only, lower-cased, folded)
//! - [`branch`] -- one candidate code under construction
//! - [`encoder`] -- the rule-driven driver that forks and finishes branches

pub mod branch;
pub mod cleanup;
pub mod encoder;

pub use encoder::{DaitchMokotoff, EncoderOptions};

/// Error type for encoder construction and binding-level misuse.
#[derive(Debug, thiserror::Error)]
pub enum SoundexError {
    /// The rule source could not be loaded.
    #[error("failed to load rule table: {0}")]
    Rules(#[from] dms_rules::RulesError),

    /// The caller passed a value the API cannot encode.
    #[error("usage error: {0}")]
    Usage(String),
}
