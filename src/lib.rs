//! # Partsguard - content checks for a parts marketplace
//!
//! Text classification used when users register accounts and submit part
//! listings:
//!
//! - **Profanity**: one compiled regex over a table of obfuscation variants
//!   (Latin/Cyrillic look-alikes, digits for letters, separator noise)
//! - **Reserved names**: hostnames, mailbox names, filenames and site
//!   sections that must not become usernames
//! - **Homoglyphs**: mixed-script identifiers and e-mail addresses built
//!   from visually confusable characters
//!
//! ## Overview
//!
//! ```text
//!  listing text ──> profanity::test / replace / wrap ──┐
//!                                                      ├──> validation ──> ValidationError
//!  username/email ─> identity::is_reserved ────────────┤     (user-facing message)
//!                    identity::is_dangerous_* ─────────┘
//! ```
//!
//! Every classifier function is total over `&str` and shares read-only
//! statics (the compiled pattern table and the reserved-name set), so it
//! can be called from any number of threads without coordination.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use partsguard::{is_dangerous_email, is_reserved, replace, test, wrap};
//!
//! assert!(!test("Selling a used gearbox"));
//! assert_eq!(replace("сука!", "[censored]"), "[censored]!");
//! assert_eq!(wrap("бля", "<b>", "</b>"), "<b>бля</b>");
//!
//! assert!(is_reserved("localhost"));
//! assert!(is_dangerous_email("\u{0430}dmin@example.com"));
//! ```
//!
//! ## Modules
//!
//! - [`profanity`]: pattern table and text operations
//! - [`identity`]: reserved names and confusable detection
//! - [`validation`]: registration and listing checks with user-facing errors
//! - [`server`]: HTTP sidecar (Axum-based)
//! - [`config`]: Configuration management
//! - [`error`]: Error types and result aliases

pub mod config;
pub mod error;
pub mod identity;
pub mod profanity;
pub mod server;
pub mod validation;

// Re-exports for convenience
pub use config::Config;
pub use error::{GuardError, Result};
pub use identity::{is_dangerous_email, is_dangerous_identifier, is_reserved, ReservedNames};
pub use profanity::{replace, test, wrap, ProfanityMatch};
pub use server::{AppState, ServerConfig};
pub use validation::{ListingDraft, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
