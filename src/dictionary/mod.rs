//! Word-existence lookups at the engine boundary.
//!
//! The rules core only sees [`WordValidator`]. The remaining types compose a
//! resilient validator out of raw sources:
//!
//! ```
//! use std::sync::Arc;
//! use wordgrid::core::Locale;
//! use wordgrid::dictionary::{CachedValidator, FallbackChain, LocaleOverrides, WordList};
//!
//! let primary = Arc::new(WordList::from_words(Locale::english(), ["quiz", "cats"]));
//! let chain = FallbackChain::new().then("primary", primary);
//! let validator = CachedValidator::new(LocaleOverrides::english(chain), 10_000);
//! # let _ = validator;
//! ```

pub mod cache;
pub mod chain;
pub mod overrides;
pub mod validator;

pub use cache::CachedValidator;
pub use chain::FallbackChain;
pub use overrides::{LocaleOverrides, OverrideLists};
pub use validator::{LookupError, WordList, WordValidator};
