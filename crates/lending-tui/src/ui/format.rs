use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Truncate a string to fit within `max_width` columns, adding "..." when cut.
/// Grapheme-aware so emoji and combining characters are never split.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    if max_width <= 3 {
        return take_width(s, max_width);
    }

    let mut result = take_width(s, max_width - 3);
    result.push_str("...");
    result
}

/// Keep the trailing graphemes of `s` that fit within `max_width` columns
pub fn tail_width(s: &str, max_width: usize) -> String {
    let mut current_width = 0;
    let mut start = s.len();
    for (index, grapheme) in s.grapheme_indices(true).rev() {
        let grapheme_width = grapheme.width();
        if current_width + grapheme_width > max_width {
            break;
        }
        current_width += grapheme_width;
        start = index;
    }
    s[start..].to_string()
}

fn take_width(s: &str, max_width: usize) -> String {
    let mut current_width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let grapheme_width = grapheme.width();
        if current_width + grapheme_width > max_width {
            break;
        }
        result.push_str(grapheme);
        current_width += grapheme_width;
    }
    result
}

/// Format elapsed milliseconds as HH:MM:SS, or MM:SS under an hour
pub fn format_elapsed(total_ms: u64) -> String {
    let total_seconds = total_ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Word-wrap one paragraph into lines of at most `max_width` columns.
/// Words longer than the width are split by grapheme.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.width() > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut head = take_width(&word, max_width);
            if head.is_empty() {
                // A single grapheme wider than the line still gets a line of its own
                head = word.graphemes(true).next().unwrap_or_default().to_string();
            }
            word = word[head.len()..].to_string();
            lines.push(head);
        }
        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= max_width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("Loan Agreement - LC-2024-0158.pdf", 12), "Loan Agre...");
        assert_eq!(truncate_with_ellipsis("abcdef", 3), "abc");
        assert_eq!(truncate_with_ellipsis("abcdef", 0), "");
    }

    #[test]
    fn test_truncate_wide_graphemes() {
        // Each of these is two columns wide
        assert_eq!(truncate_with_ellipsis("日本語テキスト", 7), "日本...");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(75_000), "01:15");
        assert_eq!(format_elapsed(3_723_000), "01:02:03");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert!(wrap_text("anything", 0).is_empty());
        assert!(wrap_text("   ", 5).is_empty());
    }

    #[test]
    fn test_wrap_text_grapheme_wider_than_line() {
        assert_eq!(wrap_text("中", 1), vec!["中"]);
        assert_eq!(wrap_text("a中b", 1), vec!["a", "中", "b"]);
        assert_eq!(wrap_text("日本語", 1), vec!["日", "本", "語"]);
    }

    #[test]
    fn test_tail_width() {
        assert_eq!(tail_width("hello world", 5), "world");
        assert_eq!(tail_width("short", 10), "short");
        assert_eq!(tail_width("日本語", 4), "本語");
        assert_eq!(tail_width("日本語", 3), "語");
        // Combining accent stays attached to its base letter
        assert_eq!(tail_width("cafe\u{301}", 2), "fe\u{301}");
        assert_eq!(tail_width("abc", 0), "");
    }
}
