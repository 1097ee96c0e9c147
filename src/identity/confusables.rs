//! Homoglyph (mixed-script confusable) detection.
//!
//! An identifier is dangerous when it mixes incompatible Unicode scripts
//! AND contains at least one character the Unicode confusables data marks
//! as potentially mixed-script confusable. `аdmin` with a Cyrillic `а` is
//! dangerous; `admin` and `админ` are not.
//!
//! Scripts are resolved through augmented script sets: Common and Inherited
//! characters (digits, punctuation, combining marks) are compatible with
//! every script, and Han/Hiragana/Katakana/Hangul combine into their
//! writing systems instead of counting as a mix.

use unicode_script::{Script, UnicodeScript};
use unicode_security::mixed_script::is_potential_mixed_script_confusable_char;
use unicode_security::MixedScript;

/// Returns true if `name` resolves to no single script.
pub fn is_mixed_script(name: &str) -> bool {
    !name.is_single_script()
}

/// Characters of `name` listed as potentially mixed-script confusable,
/// deduplicated, in order of appearance.
pub fn confusable_chars(name: &str) -> Vec<char> {
    let mut found = Vec::new();
    for c in name.chars() {
        if is_potential_mixed_script_confusable_char(c) && !found.contains(&c) {
            found.push(c);
        }
    }
    found
}

/// Distinct script names used by `name`, in order of appearance.
///
/// Common, Inherited and Unknown are left out.
pub fn scripts(name: &str) -> Vec<&'static str> {
    let mut found: Vec<Script> = Vec::new();
    for c in name.chars() {
        let script = c.script();
        if matches!(script, Script::Common | Script::Inherited | Script::Unknown) {
            continue;
        }
        if !found.contains(&script) {
            found.push(script);
        }
    }
    found.into_iter().map(|s| s.full_name()).collect()
}

/// Returns true if `name` is mixed-script and contains a confusable character.
pub fn is_dangerous_identifier(name: &str) -> bool {
    let dangerous = is_mixed_script(name)
        && name.chars().any(is_potential_mixed_script_confusable_char);
    if dangerous {
        tracing::debug!(scripts = ?scripts(name), "mixed-script confusable identifier");
    }
    dangerous
}

/// Checks the local part and the domain of an e-mail address separately.
///
/// The address is split on the first `@`. Without an `@` there is nothing
/// to compare and the address is not considered dangerous.
pub fn is_dangerous_email(address: &str) -> bool {
    match address.split_once('@') {
        Some((local, domain)) => is_dangerous_identifier(local) || is_dangerous_identifier(domain),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_scripts_are_safe() {
        assert!(!is_dangerous_identifier("admin"));
        assert!(!is_dangerous_identifier("админ"));
        assert!(!is_dangerous_identifier("user_2024"));
        assert!(!is_dangerous_identifier(""));
    }

    #[test]
    fn test_cyrillic_a_in_latin_name() {
        // U+0430 CYRILLIC SMALL LETTER A
        let spoofed = "\u{0430}dmin";
        assert!(is_mixed_script(spoofed));
        assert!(is_dangerous_identifier(spoofed));
        assert_eq!(confusable_chars(spoofed).first(), Some(&'\u{0430}'));
    }

    #[test]
    fn test_common_characters_do_not_mix() {
        assert!(!is_mixed_script("seller-42.parts"));
        assert!(!is_mixed_script("продавец_42"));
    }

    #[test]
    fn test_scripts_listing() {
        assert_eq!(scripts("\u{0430}dmin"), vec!["Cyrillic", "Latin"]);
        assert_eq!(scripts("admin42"), vec!["Latin"]);
        assert!(scripts("1234").is_empty());
    }

    #[test]
    fn test_email_without_at() {
        assert!(!is_dangerous_email("no-at-sign"));
    }

    #[test]
    fn test_email_parts() {
        assert!(!is_dangerous_email("admin@example.com"));
        assert!(is_dangerous_email("\u{0430}dmin@example.com"));
        assert!(is_dangerous_email("admin@ex\u{0430}mple.com"));
    }

    #[test]
    fn test_email_splits_on_first_at() {
        // Domain part "b@example.com" is plain Latin.
        assert!(!is_dangerous_email("a@b@example.com"));
    }
}
