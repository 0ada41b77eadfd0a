//! Recipient extraction for "mail" requests.
//!
//! The recipient is the third space-separated token, e.g. `<@U456>` in
//! `"<@U123> mail <@U456>"` or `janedoe` in `"reception mail janedoe"`.
//! A token containing `@` is a mention: its two-character prefix and the
//! closing character are stripped to leave the user ID.

use crate::pipeline::types::Recipient;

/// Position of the recipient token in `"<bot> mail <recipient>"`.
const RECIPIENT_TOKEN_INDEX: usize = 2;

/// Characters wrapping a mention: `<@` before, `>` after.
const MENTION_PREFIX_LEN: usize = 2;
const MENTION_SUFFIX_LEN: usize = 1;

/// Pull the recipient out of a mail request.
///
/// Never fails: a message with fewer than three tokens yields an empty
/// `Recipient::Name`, and the caller decides what to do with it.
pub fn extract_recipient(text: &str) -> Recipient {
    let Some(token) = text.split(' ').nth(RECIPIENT_TOKEN_INDEX) else {
        return Recipient::Name(String::new());
    };

    if token.contains('@') {
        Recipient::Mention(unwrap_mention(token))
    } else {
        Recipient::Name(token.to_string())
    }
}

fn unwrap_mention(token: &str) -> String {
    let len = token.chars().count();
    let keep = len.saturating_sub(MENTION_PREFIX_LEN + MENTION_SUFFIX_LEN);
    token.chars().skip(MENTION_PREFIX_LEN).take(keep).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mention_is_unwrapped() {
        assert_eq!(
            extract_recipient("<@U000> mail <@U123>"),
            Recipient::Mention("U123".into())
        );
    }

    #[test]
    fn third_token_is_used_even_when_first_is_a_mention() {
        // "John" sits in the recipient slot, so it is taken as a plain name.
        assert_eq!(
            extract_recipient("<@U123> mail John"),
            Recipient::Name("John".into())
        );
        assert_eq!(
            extract_recipient("reception mail <@U123>"),
            Recipient::Mention("U123".into())
        );
    }

    #[test]
    fn plain_name_is_verbatim() {
        assert_eq!(
            extract_recipient("reception mail janedoe"),
            Recipient::Name("janedoe".into())
        );
    }

    #[test]
    fn trailing_words_are_ignored() {
        assert_eq!(
            extract_recipient("reception mail janedoe please, thanks"),
            Recipient::Name("janedoe".into())
        );
    }

    #[test]
    fn too_short_yields_empty_name() {
        assert_eq!(extract_recipient("reception mail"), Recipient::Name(String::new()));
        assert_eq!(extract_recipient("mail"), Recipient::Name(String::new()));
        assert_eq!(extract_recipient(""), Recipient::Name(String::new()));
    }

    #[test]
    fn consecutive_spaces_produce_empty_tokens() {
        assert_eq!(
            extract_recipient("reception  mail janedoe"),
            Recipient::Name("mail".into())
        );
        assert_eq!(extract_recipient("a b  c"), Recipient::Name(String::new()));
    }

    #[test]
    fn short_mention_token_does_not_panic() {
        assert_eq!(extract_recipient("a b @"), Recipient::Mention(String::new()));
        assert_eq!(extract_recipient("a b <@>"), Recipient::Mention(String::new()));
        assert_eq!(extract_recipient("a b @bob"), Recipient::Mention("o".into()));
    }

    #[test]
    fn multibyte_mention_is_sliced_by_char() {
        assert_eq!(
            extract_recipient("a b <@Zoë>"),
            Recipient::Mention("Zoë".into())
        );
    }
}
