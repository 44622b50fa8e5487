//! Localization files: `localization/<language>/<stem>_l_<language>.yml`.
//!
//! The game expects UTF-8 with a byte order mark, an `l_<language>:` header and
//! one ` key: "text"` entry per line.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s+([A-Za-z0-9_.'\-]+):[0-9]*\s*""#).expect("valid regex")
});

#[derive(Debug, Clone)]
pub struct LocalizationFile {
    language: String,
    entries: Vec<(String, String)>,
}

impl LocalizationFile {
    pub fn new(language: impl Into<String>) -> Self {
        LocalizationFile {
            language: language.into(),
            entries: Vec::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn add(&mut self, key: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.entries.push((key.into(), text.into()));
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// `<stem>_l_<language>.yml`
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}_l_{}.yml", stem, self.language)
    }

    pub fn render(&self) -> String {
        let mut out = String::from("\u{feff}");
        out.push_str(&format!("l_{}:\n", self.language));
        for (key, text) in &self.entries {
            out.push_str(&format!(" {}: \"{}\"\n", key, text));
        }
        out
    }
}

/// Keys defined in the text of an existing localization file.
pub fn parse_keys(source: &str) -> BTreeSet<String> {
    source
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .filter_map(|line| ENTRY.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// `grand_library` -> `Grand Library`
pub fn display_name(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
