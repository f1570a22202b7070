use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics and lowercase. NFD-decomposes the text, drops the
/// combining marks, and lowercases what is left. Total for any input;
/// characters without a decomposition pass through unchanged.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Removes scheduling noise from composite inputs such as
/// `"22/01/2026 12:00 - Dr. Ramon"` so that numeric date/time tokens
/// cannot collide with match keywords.
pub struct Sanitizer {
    date_re: Regex,
    time_re: Regex,
}

impl Sanitizer {
    pub fn new() -> Self {
        Self {
            date_re: Regex::new(r"\d{2}/\d{2}/\d{4}").unwrap(),
            time_re: Regex::new(r"\d{2}:\d{2}").unwrap(),
        }
    }

    /// Drops `NN/NN/NNNN` dates, `NN:NN` times, and the hyphen/en-dash
    /// field separators. Removal can splice surrounding digits into a
    /// fresh date or time token (`"12:3-4"` becomes `"12:34"`), so the
    /// pass repeats until the text stops changing. Idempotent.
    pub fn sanitize(&self, text: &str) -> String {
        let mut current = text.to_string();
        loop {
            let next = self.sanitize_once(&current);
            if next == current {
                return next;
            }
            current = next;
        }
    }

    fn sanitize_once(&self, text: &str) -> String {
        let without_dates = self.date_re.replace_all(text, "");
        let without_times = self.time_re.replace_all(&without_dates, "");
        without_times
            .chars()
            .filter(|c| *c != '-' && *c != '\u{2013}')
            .collect()
    }

    /// Sanitize, then normalize. The resolver's entry point.
    pub fn clean(&self, text: &str) -> String {
        normalize(&self.sanitize(text))
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}
