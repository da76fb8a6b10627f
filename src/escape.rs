//! Escaping for text embedded in double-quoted `printf` format strings.
//!
//! Provenance markers quote arbitrary command text inside a generated
//! `printf "..."` statement. Left alone, that text could smuggle printf
//! backslash escapes, `%` conversion specifiers, or quotes into the format
//! string and corrupt the record (or the script). [`printf_escape`]
//! neutralizes all three so the logged text comes out literally.
//!
//! Substitution order matters: backslash sequences are escaped first, then
//! quotes, so the backslashes inserted for quotes are never re-escaped.

/// Two-character backslash sequences interpreted by `printf`.
const PRINTF_SEQUENCES: [&str; 10] = [
    "\\a", "\\b", "\\c", "\\d", "\\e", "\\f", "\\n", "\\r", "\\t", "\\v",
];

/// Escape `text` for literal embedding in a double-quoted `printf` format
/// string.
///
/// Each recognized printf backslash sequence gets one extra backslash
/// prefixed, every `%` is doubled, and every single and double quote is
/// backslash-escaped.
///
/// ```
/// use provscript::printf_escape;
///
/// assert_eq!(printf_escape("100% done"), "100%% done");
/// assert_eq!(printf_escape("a\\nb"), "a\\\\nb");
/// assert_eq!(printf_escape("say \"hi\""), "say \\\"hi\\\"");
/// ```
pub fn printf_escape(text: &str) -> String {
    let mut escaped = text.to_string();
    for seq in PRINTF_SEQUENCES {
        escaped = escaped.replace(seq, &format!("\\{seq}"));
    }
    escaped = escaped.replace('%', "%%");
    escaped = escaped.replace('\'', "\\'");
    escaped.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Removes exactly the characters `printf_escape` inserts, in reverse
    /// substitution order.
    fn unescape(text: &str) -> String {
        let mut restored = text.replace("\\\"", "\"");
        restored = restored.replace("\\'", "'");
        restored = restored.replace("%%", "%");
        for seq in PRINTF_SEQUENCES {
            restored = restored.replace(&format!("\\{seq}"), seq);
        }
        restored
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(printf_escape("mkdir results"), "mkdir results");
        assert_eq!(printf_escape(""), "");
    }

    #[test]
    fn backslash_sequences_gain_one_backslash() {
        assert_eq!(printf_escape("\\n"), "\\\\n");
        assert_eq!(printf_escape("a\\tb\\rc"), "a\\\\tb\\\\rc");
        // every recognized sequence, not just the common ones
        for seq in PRINTF_SEQUENCES {
            let escaped = printf_escape(seq);
            assert_eq!(escaped, format!("\\{seq}"), "sequence {seq:?}");
        }
    }

    #[test]
    fn percent_is_doubled() {
        assert_eq!(printf_escape("%s"), "%%s");
        assert_eq!(printf_escape("50%%"), "50%%%%");
    }

    #[test]
    fn quotes_are_backslash_escaped() {
        assert_eq!(printf_escape("it's"), "it\\'s");
        assert_eq!(printf_escape("\"quoted\""), "\\\"quoted\\\"");
    }

    #[test]
    fn quote_escaping_runs_after_backslash_escaping() {
        // The backslash inserted for the quote must not itself be treated
        // as the start of a printf sequence.
        assert_eq!(printf_escape("\\n\""), "\\\\n\\\"");
    }

    #[test]
    fn unrecognized_backslashes_pass_through() {
        assert_eq!(printf_escape("\\x41"), "\\x41");
        assert_eq!(printf_escape("C:\\windows"), "C:\\windows");
    }

    #[test]
    fn escape_round_trips_through_unescape() {
        let inputs = [
            "echo \"hello\"",
            "progress: 42%",
            "tab\\there",
            "don't \\n mix 'quotes' and \"quotes\" at 100%",
            "./run \"$arg1\" \\v",
        ];
        for input in inputs {
            assert_eq!(unescape(&printf_escape(input)), input, "input {input:?}");
        }
    }
}
