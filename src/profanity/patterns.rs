//! Obfuscation pattern table for rule-based profanity detection.
//!
//! Each entry spells one target word root as a chain of letter classes.
//! A letter class lists the Latin and Cyrillic look-alikes accepted for
//! that letter (`[хx]`, `[уy]`, `[бb]`, ...) and is followed by a noise
//! class allowing up to six separator characters, so `х у й`, `x.y.й` and
//! `хх-уу-й` all land on the same entry.
//!
//! The noise classes contain the range `+-|` (U+002B..U+007C). It covers
//! ASCII digits, letters and most punctuation, which makes the table
//! deliberately greedy about what may sit between two letters.
//!
//! All entries are joined into a single alternation and compiled once into
//! [`struct@PROFANITY_REGEX`]; the compiled form is shared by every caller
//! and never mutated.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use crate::error::{GuardError, Result};

/// Compiled program size limit for the joined table.
///
/// Unicode `\w` repetitions expand into large automata, well past the
/// regex crate's 10 MiB default.
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// A single obfuscation variant in the pattern table
#[derive(Debug, Clone, Copy)]
pub struct ObfuscationPattern {
    /// Pattern name (transliterated word root)
    pub name: &'static str,
    /// Regex source
    pub pattern: &'static str,
    /// Description
    pub description: &'static str,
}

/// Obfuscation variants, in alternation order.
pub static PATTERNS: &[ObfuscationPattern] = &[
    ObfuscationPattern {
        name: "khuy",
        pattern: r"\w{0,5}[хx]([хx\s!@#$%^&*+-|/]{0,6})[уy]([уy\s!@#$%^&*+-|/]{0,6})[ёiлeеюийя]\w{0,7}",
        description: "х-у root with any of its vowel endings",
    },
    ObfuscationPattern {
        name: "pizd",
        pattern: r"\w{0,6}[пp]([пp\s!@#$%^&*+-|/]{0,6})[iие]([iие\s!@#$%^&*+-|/]{0,6})[3зс]([3зс\s!@#$%^&*+-|/]{0,6})[дd]\w{0,10}",
        description: "п-и-з-д root, digit 3 accepted for з",
    },
    ObfuscationPattern {
        name: "suka",
        pattern: r"[сcs][уy]([уy!@#$%^&*+-|/]{0,6})[4чkк]\w{1,3}",
        description: "с-у-к/с-у-ч root, no whitespace between letters",
    },
    ObfuscationPattern {
        name: "blya",
        pattern: r"\w{0,4}[bб]([bб\s!@#$%^&*+-|/]{0,6})[lл]([lл\s!@#$%^&*+-|/]{0,6})[yя]\w{0,10}",
        description: "б-л-я root",
    },
    ObfuscationPattern {
        name: "yeb_stem",
        pattern: r"\w{0,8}[её][bб][лске@eыиаa][наи@йвл]\w{0,8}",
        description: "е-б stem followed by a two-letter suffix",
    },
    ObfuscationPattern {
        name: "yebun",
        pattern: r"\w{0,4}[еe]([еe\s!@#$%^&*+-|/]{0,6})[бb]([бb\s!@#$%^&*+-|/]{0,6})[uу]([uу\s!@#$%^&*+-|/]{0,6})[н4ч]\w{0,4}",
        description: "е-б-у-н/е-б-у-ч forms",
    },
    ObfuscationPattern {
        name: "yobnu",
        pattern: r"\w{0,4}[еeё]([еeё\s!@#$%^&*+-|/]{0,6})[бb]([бb\s!@#$%^&*+-|/]{0,6})[нn]([нn\s!@#$%^&*+-|/]{0,6})[уy]\w{0,4}",
        description: "е-б-н-у forms",
    },
    ObfuscationPattern {
        name: "yebat",
        pattern: r"\w{0,4}[еe]([еe\s!@#$%^&*+-|/]{0,6})[бb]([бb\s!@#$%^&*+-|/]{0,6})[оoаa@]([оoаa@\s!@#$%^&*+-|/]{0,6})[тnнt]\w{0,4}",
        description: "е-б-а-т/е-б-о-н forms, @ accepted for а",
    },
    ObfuscationPattern {
        name: "yob",
        pattern: r"\w{0,10}[ё]([ё!@#$%^&*+-|/]{0,6})[б]\w{0,6}",
        description: "ё-б root, Cyrillic only",
    },
    ObfuscationPattern {
        name: "pidor",
        pattern: r"\w{0,4}[pп]([pп\s!@#$%^&*+-|/]{0,6})[иeеi]([иeеi\s!@#$%^&*+-|/]{0,6})[дd]([дd\s!@#$%^&*+-|/]{0,6})[oоаa@еeиi]([oоаa@еeиi\s!@#$%^&*+-|/]{0,6})[рr]\w{0,12}",
        description: "п-и-д-о-р root with vowel substitutions",
    },
];

/// Join the table into one alternation.
pub fn pattern_source() -> String {
    PATTERNS
        .iter()
        .map(|p| format!("(?:{})", p.pattern))
        .collect::<Vec<_>>()
        .join("|")
}

fn build_regex() -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(&pattern_source())
        .case_insensitive(true)
        .unicode(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .dfa_size_limit(PATTERN_SIZE_LIMIT)
        .build()
}

lazy_static! {
    /// The whole table compiled as one case-insensitive, Unicode-aware regex
    pub static ref PROFANITY_REGEX: std::result::Result<Regex, regex::Error> = build_regex();
}

/// The compiled table, or `None` if it failed to build.
pub(crate) fn compiled() -> Option<&'static Regex> {
    match PROFANITY_REGEX.as_ref() {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::error!(error = %e, "profanity pattern table failed to compile");
            None
        },
    }
}

/// Force compilation of the pattern table.
///
/// Front ends call this at startup so a broken table is reported before
/// any input is classified.
pub fn init() -> Result<()> {
    match PROFANITY_REGEX.as_ref() {
        Ok(_) => Ok(()),
        Err(e) => Err(GuardError::Pattern(e.to_string())),
    }
}
