//! String helpers shared by the assembler and the console destination.

/// Marker appended when a label is cut short.
pub const TRUNCATION_MARKER: char = '…';

/// Join the present, non-empty fragments with `separator`.
///
/// Returns `None` when no fragment survives, never an empty string.
pub fn combine<I, S>(fragments: I, separator: &str) -> Option<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let parts: Vec<S> = fragments
        .into_iter()
        .flatten()
        .filter(|fragment| !fragment.as_ref().is_empty())
        .collect();

    if parts.is_empty() {
        return None;
    }

    let mut joined = String::new();
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            joined.push_str(separator);
        }
        joined.push_str(part.as_ref());
    }
    Some(joined)
}

/// Like [`combine`], but yields an empty string when nothing is present.
pub fn join_present<'a, I>(parts: I, separator: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    combine(parts.into_iter().map(Some), separator).unwrap_or_default()
}

/// Fit `label` into exactly `width` characters, right-aligned with spaces.
pub fn truncate_or_pad(label: &str, width: usize) -> String {
    truncate_or_pad_with(label, width, ' ')
}

/// Fit `label` into exactly `width` characters.
///
/// Shorter labels are left-padded with `pad`. Longer labels keep their first
/// `width - 1` characters followed by [`TRUNCATION_MARKER`].
pub fn truncate_or_pad_with(label: &str, width: usize, pad: char) -> String {
    let count = label.chars().count();

    if count == width {
        return label.to_string();
    }

    if count < width {
        let mut padded: String = std::iter::repeat(pad).take(width - count).collect();
        padded.push_str(label);
        return padded;
    }

    if width == 0 {
        return String::new();
    }

    let mut truncated: String = label.chars().take(width - 1).collect();
    truncated.push(TRUNCATION_MARKER);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_joins_in_order() {
        assert_eq!(
            combine([Some("Hello"), Some("World")], " "),
            Some("Hello World".to_string())
        );
    }

    #[test]
    fn combine_skips_absent_and_empty() {
        assert_eq!(
            combine([Some("Hello"), None, Some(""), Some("World")], " "),
            Some("Hello World".to_string())
        );
        assert_eq!(
            combine([Some(""), None, Some("Valid")], " "),
            Some("Valid".to_string())
        );
    }

    #[test]
    fn combine_returns_none_when_nothing_survives() {
        assert_eq!(combine([None::<&str>, None, None], " "), None);
        assert_eq!(combine([Some(""), Some(""), Some("")], " "), None);
        assert_eq!(combine(Vec::<Option<&str>>::new(), " "), None);
    }

    #[test]
    fn combine_accepts_owned_strings() {
        let fragments = vec![Some(String::from("a")), None, Some(String::from("b"))];
        assert_eq!(combine(fragments, "|"), Some("a|b".to_string()));
    }

    #[test]
    fn join_present_never_returns_absent() {
        assert_eq!(join_present(["", ""], " "), "");
        assert_eq!(join_present(["12:00", "", "🟢"], " "), "12:00 🟢");
    }

    #[test]
    fn exact_length_is_unchanged() {
        assert_eq!(truncate_or_pad("Hello", 5), "Hello");
    }

    #[test]
    fn shorter_is_left_padded() {
        let result = truncate_or_pad("Hi", 5);
        assert_eq!(result, "   Hi");
        assert_eq!(result.chars().count(), 5);
    }

    #[test]
    fn longer_is_truncated_with_marker() {
        let result = truncate_or_pad("This is a long string", 10);
        assert_eq!(result, "This is a…");
        assert_eq!(result.chars().count(), 10);
    }

    #[test]
    fn custom_pad_character() {
        assert_eq!(truncate_or_pad_with("Hi", 5, '*'), "***Hi");
    }

    #[test]
    fn width_one_is_just_the_marker() {
        assert_eq!(truncate_or_pad("Hello World", 1), "…");
    }

    #[test]
    fn width_zero_is_empty() {
        assert_eq!(truncate_or_pad("Hello", 0), "");
        assert_eq!(truncate_or_pad("", 0), "");
    }

    #[test]
    fn empty_label_becomes_spaces() {
        assert_eq!(truncate_or_pad("", 10), " ".repeat(10));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let result = truncate_or_pad("Größenänderung", 6);
        assert_eq!(result, "Größe…");
        assert_eq!(result.chars().count(), 6);
    }
}
