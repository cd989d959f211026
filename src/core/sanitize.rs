// src/core/sanitize.rs

/// Max length of a sanitized file stem.
pub const MAX_STEM_LEN: usize = 60;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// File-stem safe version of a product name: every run of characters outside
/// `[A-Za-z0-9_-]` collapses to one `_`, result capped at `MAX_STEM_LEN`.
pub fn sanitize_file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len().min(MAX_STEM_LEN));
    let mut in_run = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    // ASCII only, so byte truncation is safe
    out.truncate(MAX_STEM_LEN);
    out
}

/// Shorten for console display, appending "..." when cut.
pub fn ellipsize(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses() {
        assert_eq!(normalize_ws("  Sony\n\t WH-1000XM5  "), "Sony WH-1000XM5");
    }

    #[test]
    fn stem_collapses_runs() {
        assert_eq!(sanitize_file_stem("Sony WH-1000XM5 (Black)"), "Sony_WH-1000XM5_Black_");
        assert_eq!(sanitize_file_stem("a  /  b"), "a_b");
        assert_eq!(sanitize_file_stem("Café_ü"), "Caf___");
    }

    #[test]
    fn stem_is_truncated() {
        let long = "x".repeat(200);
        assert_eq!(sanitize_file_stem(&long).len(), MAX_STEM_LEN);
    }

    #[test]
    fn ellipsize_only_when_needed() {
        assert_eq!(ellipsize("short", 80), "short");
        assert_eq!(ellipsize("abcdef", 3), "abc...");
    }
}
