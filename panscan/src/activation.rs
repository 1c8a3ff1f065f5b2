// Copyright 2026 the Panscan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which documents an activation trigger may install into.

/// URL prefixes of privileged documents where script injection is refused.
pub const PRIVILEGED_PREFIXES: &[&str] = &[
    "chrome://",
    "chrome-extension://",
    "edge://",
    "about:",
    "moz-extension://",
    "view-source:",
];

/// Returns `true` if an activation trigger may install into the document at
/// `url`.
///
/// Scheme matching is ASCII case-insensitive. Surrounding whitespace is
/// ignored.
#[must_use]
pub fn can_inject(url: &str) -> bool {
    let url = url.trim();
    !PRIVILEGED_PREFIXES.iter().any(|prefix| {
        url.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_pages_are_allowed() {
        assert!(can_inject("https://example.com/watch?v=1"));
        assert!(can_inject("http://localhost:8080/"));
        assert!(can_inject("file:///home/me/talk.html"));
        assert!(can_inject(""));
    }

    #[test]
    fn privileged_pages_are_refused() {
        assert!(!can_inject("chrome://extensions"));
        assert!(!can_inject("CHROME://settings"));
        assert!(!can_inject("chrome-extension://abc/popup.html"));
        assert!(!can_inject("about:blank"));
        assert!(!can_inject("  edge://newtab"));
        assert!(!can_inject("view-source:https://example.com"));
    }

    #[test]
    fn prefix_must_be_at_the_start() {
        assert!(can_inject("https://example.com/?next=chrome://settings"));
    }
}
