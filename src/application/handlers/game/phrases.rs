//! Deal phrase detection.
//!
//! Before any model is consulted, a turn checks the player's message for an
//! explicit accept or reject of the standing deal. Rejection phrases are
//! checked first so "no deal" never reads as an acceptance.

/// An explicit deal decision found in a player message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DealPhrase {
    Accept,
    Reject,
}

const ACCEPT_PHRASES: [&str; 8] = [
    "accept",
    "yes",
    "take it",
    "i'll take it",
    "agreed",
    "i accept",
    "deal accepted",
    "take the deal",
];

const REJECT_PHRASES: [&str; 6] = [
    "no deal",
    "reject",
    "pass",
    "no thanks",
    "decline",
    "not interested",
];

/// Scans a player message for an explicit deal decision.
pub(crate) fn detect_deal_phrase(message: &str) -> Option<DealPhrase> {
    let lowered = message.to_lowercase();
    if REJECT_PHRASES.iter().any(|p| contains_phrase(&lowered, p)) {
        return Some(DealPhrase::Reject);
    }
    if ACCEPT_PHRASES.iter().any(|p| contains_phrase(&lowered, p)) {
        return Some(DealPhrase::Accept);
    }
    None
}

/// Substring match on word boundaries, so "yes" is found in "yes please"
/// but not inside "yesterday".
fn contains_phrase(message: &str, phrase: &str) -> bool {
    let mut start = 0;
    while let Some(found) = message[start..].find(phrase) {
        let at = start + found;
        let end = at + phrase.len();
        let bounded_before = !message[..at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric());
        let bounded_after = !message[end..]
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric());
        if bounded_before && bounded_after {
            return true;
        }
        // Phrases start with an ASCII letter, so at + 1 is a char boundary.
        start = at + 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_phrases_are_detected() {
        assert_eq!(detect_deal_phrase("I'll take it!"), Some(DealPhrase::Accept));
        assert_eq!(detect_deal_phrase("DEAL ACCEPTED"), Some(DealPhrase::Accept));
        assert_eq!(detect_deal_phrase("yes"), Some(DealPhrase::Accept));
    }

    #[test]
    fn reject_phrases_are_detected() {
        assert_eq!(detect_deal_phrase("No deal, banker"), Some(DealPhrase::Reject));
        assert_eq!(detect_deal_phrase("not interested"), Some(DealPhrase::Reject));
    }

    #[test]
    fn no_deal_wins_over_its_embedded_accept_words() {
        // "no deal" must never parse as an acceptance
        assert_eq!(detect_deal_phrase("no deal"), Some(DealPhrase::Reject));
        assert_eq!(
            detect_deal_phrase("no thanks, I decline the deal"),
            Some(DealPhrase::Reject)
        );
    }

    #[test]
    fn ordinary_messages_carry_no_decision() {
        assert_eq!(detect_deal_phrase("how generous are you today?"), None);
        assert_eq!(detect_deal_phrase("make me an offer"), None);
        assert_eq!(detect_deal_phrase(""), None);
    }

    #[test]
    fn embedded_words_do_not_match() {
        assert_eq!(detect_deal_phrase("yesterday was great"), None);
        assert_eq!(detect_deal_phrase("my passport expired"), None);
        assert_eq!(detect_deal_phrase("I expect a rejection from you"), None);
    }

    #[test]
    fn punctuation_still_bounds_a_phrase() {
        assert_eq!(detect_deal_phrase("yes!"), Some(DealPhrase::Accept));
        assert_eq!(detect_deal_phrase("(no deal)"), Some(DealPhrase::Reject));
        assert_eq!(detect_deal_phrase("fine, I accept."), Some(DealPhrase::Accept));
    }
}
