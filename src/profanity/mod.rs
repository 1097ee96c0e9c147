//! Obfuscated profanity detection for listing text.
//!
//! A single compiled regex built from a table of hand-authored variants
//! catches target words spelled with Latin/Cyrillic look-alikes, digits
//! standing in for letters and separator noise between letters.
//!
//! # Operations
//!
//! | Function          | Result                                          |
//! |-------------------|-------------------------------------------------|
//! | [`test`]          | `true` if any substring matches the table       |
//! | [`replace`]       | text with every match substituted               |
//! | [`wrap`]          | text with flagged words surrounded by markup    |
//! | [`find_matches`]  | matched spans with byte offsets                 |
//!
//! All of them are total: any `&str` is accepted, nothing panics, and the
//! table is shared read-only between threads.
//!
//! # Usage
//!
//! ```rust,ignore
//! use partsguard::profanity;
//!
//! assert!(!profanity::test("Selling a used gearbox"));
//! assert!(profanity::test("х у й"));
//!
//! let clean = profanity::replace("Продам бампер, сука", "[censored]");
//! assert_eq!(clean, "Продам бампер, [censored]");
//!
//! let html = profanity::wrap("сука и бля", "<b>", "</b>");
//! assert_eq!(html, "<b>сука</b> и <b>бля</b>");
//! ```

mod filter;
mod patterns;

pub use filter::{
    find_matches, replace, replace_default, test, wrap, wrap_default, ProfanityMatch,
    DEFAULT_REPLACEMENT, DEFAULT_WRAP_PREFIX, DEFAULT_WRAP_SUFFIX, MIN_WRAP_LEN,
};
pub use patterns::{init, pattern_source, ObfuscationPattern, PATTERNS};
