//! Reserved account names.
//!
//! Names that must not be registered because a username may end up as a
//! mailbox, a subdomain or a URL path: special and protocol hostnames,
//! addresses certificate authorities use for domain verification, RFC 2142
//! role mailboxes, well-known filenames and common site sections.
//!
//! The default set is a compile-time perfect hash set. Deployments add their
//! own names through [`ReservedNames::with_additional`].

use std::collections::HashSet;

/// Any name starting with this prefix is reserved (domain verification paths).
pub const RESERVED_PREFIX: &str = ".well-known";

/// Default reserved names
pub static DEFAULT_RESERVED_NAMES: phf::Set<&'static str> = phf::phf_set! {
    // Hostnames with special/reserved meaning
    "autoconfig",    // Thunderbird autoconfig
    "autodiscover",  // Outlook/Exchange autoconfig
    "broadcasthost", // Network broadcast hostname
    "isatap",        // IPv6 tunnel autodiscovery
    "localdomain",
    "localhost",
    "wpad",          // Proxy autodiscovery

    // Protocol hostnames
    "ftp",
    "imap",
    "mail",
    "news",
    "pop",
    "pop3",
    "smtp",
    "usenet",
    "uucp",
    "webmail",
    "www",

    // Addresses used by certificate authorities during verification
    "admin",
    "administrator",
    "hostmaster",
    "info",
    "is",
    "it",
    "mis",
    "postmaster",
    "root",
    "ssladmin",
    "ssladministrator",
    "sslwebmaster",
    "sysadmin",
    "webmaster",

    // RFC 2142
    "abuse",
    "marketing",
    "noc",
    "sales",
    "security",
    "support",

    // No-reply addresses
    "mailer-daemon",
    "nobody",
    "noreply",
    "no-reply",

    // Sensitive filenames
    "clientaccesspolicy.xml",
    "crossdomain.xml",
    "favicon.ico",
    "humans.txt",
    "keybase.txt",
    "robots.txt",
    ".htaccess",
    ".htpasswd",

    // Site sections that clash with URL or subdomain structure
    "account",
    "accounts",
    "blog",
    "buy",
    "clients",
    "contact",
    "contactus",
    "contact-us",
    "copyright",
    "dashboard",
    "doc",
    "docs",
    "download",
    "downloads",
    "enquiry",
    "faq",
    "help",
    "inquiry",
    "license",
    "login",
    "logout",
    "me",
    "myaccount",
    "payments",
    "plans",
    "portfolio",
    "preferences",
    "pricing",
    "privacy",
    "profile",
    "register",
    "secure",
    "settings",
    "signin",
    "signup",
    "ssl",
    "status",
    "subscribe",
    "terms",
    "tos",
    "user",
    "users",
    "weblog",
    "work",
};

/// Returns true if `name` is in the default reserved set or starts with
/// [`RESERVED_PREFIX`]. Comparison is case-sensitive.
pub fn is_reserved(name: &str) -> bool {
    DEFAULT_RESERVED_NAMES.contains(name) || name.starts_with(RESERVED_PREFIX)
}

/// Default reserved names plus a deployment-specific extension list.
#[derive(Debug, Clone, Default)]
pub struct ReservedNames {
    additional: HashSet<String>,
    case_insensitive: bool,
}

impl ReservedNames {
    /// Default set only, case-sensitive
    pub fn new() -> Self {
        Self::default()
    }

    /// Add names on top of the defaults
    pub fn with_additional<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            let name = if self.case_insensitive {
                name.to_lowercase()
            } else {
                name
            };
            self.additional.insert(name);
        }
        self
    }

    /// Compare names without regard to case
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self.additional = self
            .additional
            .into_iter()
            .map(|n| n.to_lowercase())
            .collect();
        self
    }

    /// Whether comparisons ignore case
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Returns true if `name` is reserved under this configuration.
    pub fn contains(&self, name: &str) -> bool {
        if self.case_insensitive {
            let lower = name.to_lowercase();
            is_reserved(&lower) || self.additional.contains(&lower)
        } else {
            is_reserved(name) || self.additional.contains(name)
        }
    }

    /// Total number of exact names (defaults plus extensions)
    pub fn len(&self) -> usize {
        DEFAULT_RESERVED_NAMES.len()
            + self
                .additional
                .iter()
                .filter(|n| !DEFAULT_RESERVED_NAMES.contains(n.as_str()))
                .count()
    }

    /// Always false: the default set is not empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
