use unicode_segmentation::UnicodeSegmentation;

/// Telegram rejects messages longer than this many characters.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Strip the markdown code fences some model replies wrap structured
/// output in, then trim surrounding whitespace.
pub fn clean_model_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }
    trimmed
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Cut a reply at a grapheme boundary so it fits in one Telegram message.
pub fn truncate_reply(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut out = String::new();
    let mut count = 0;
    for g in text.graphemes(true) {
        let len = g.chars().count();
        if count + len > limit.saturating_sub(1) {
            break;
        }
        out.push_str(g);
        count += len;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_passes_plain_text_through() {
        assert_eq!(clean_model_text("  hello \n"), "hello");
    }

    #[test]
    fn clean_strips_code_fences() {
        let raw = "```\nSELL|green|ok\n```";
        assert_eq!(clean_model_text(raw), "SELL|green|ok");
    }

    #[test]
    fn clean_strips_language_tagged_fence() {
        let raw = "```text\nOnion|Red|Lasalgaon|2400|5|up\nWheat|Lokwan|Indore|2150|-0.5|down\n```";
        assert_eq!(
            clean_model_text(raw),
            "Onion|Red|Lasalgaon|2400|5|up\nWheat|Lokwan|Indore|2150|-0.5|down"
        );
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_reply("short", 100), "short");
    }

    #[test]
    fn truncate_cuts_long_text_with_ellipsis() {
        let long = "a".repeat(50);
        let cut = truncate_reply(&long, 10);
        assert!(cut.chars().count() <= 10);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn truncate_respects_devanagari_clusters() {
        let text = "नमस्ते किसान ".repeat(20);
        let cut = truncate_reply(&text, 30);
        assert!(cut.chars().count() <= 30);
        // a grapheme cluster must never be split
        assert!(!cut.trim_end_matches('…').ends_with('\u{94d}'));
    }
}
