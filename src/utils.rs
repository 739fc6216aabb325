use unicode_width::UnicodeWidthChar;

/// Truncate `s` to at most `max_width` terminal columns, adding "..." when
/// anything was cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let width: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max_width {
        return s.to_string();
    }
    if max_width < 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// "mm:ss"
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Whole seconds between two instants given in milliseconds, rounded to
/// nearest and never negative.
pub fn round_elapsed_seconds(elapsed_ms: i64) -> u64 {
    if elapsed_ms <= 0 {
        return 0;
    }
    ((elapsed_ms as u64) + 500) / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        assert_eq!(truncate_string("Hello, World!", 8), "Hello...");
    }

    #[test]
    fn test_truncate_string_exact_length() {
        assert_eq!(truncate_string("Hello", 5), "Hello");
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 5), "");
    }

    #[test]
    fn test_truncate_string_wide_chars() {
        // each CJK char is two columns wide
        assert_eq!(truncate_string("東京都庁舎", 7), "東京...");
    }

    #[test]
    fn test_truncate_string_tiny_width() {
        assert_eq!(truncate_string("Hello", 2), "..");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(120), "02:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn test_round_elapsed_seconds() {
        assert_eq!(round_elapsed_seconds(-20), 0);
        assert_eq!(round_elapsed_seconds(0), 0);
        assert_eq!(round_elapsed_seconds(499), 0);
        assert_eq!(round_elapsed_seconds(500), 1);
        assert_eq!(round_elapsed_seconds(45_400), 45);
    }
}
