// src/scrape/lookup.rs
use std::fmt::Display;

use tracing::debug;

/// Try `candidates` in order and return the first non-empty (trimmed) text.
/// Failed lookups count as misses. Empty string if nothing matched.
pub fn first_non_empty<S, E, F>(candidates: &[S], mut lookup: F) -> String
where
    S: AsRef<str>,
    E: Display,
    F: FnMut(&str) -> Result<String, E>,
{
    for cand in candidates {
        let cand = cand.as_ref();
        match lookup(cand) {
            Ok(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    return text.to_string();
                }
                debug!("lookup: `{cand}` matched but is empty");
            }
            Err(e) => debug!("lookup: `{cand}` missed: {e}"),
        }
    }
    s!()
}
