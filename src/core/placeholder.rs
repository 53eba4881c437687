//! Placeholder protection for machine translation.
//!
//! Placeholders such as `:name` must come back from an external translator
//! untouched. Before translation every placeholder is swapped for a fake URL
//! (`https://t.co/0`, `https://t.co/1`, ...), which translation services leave
//! alone, and swapped back afterwards.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":[A-Za-z0-9_]+").unwrap());

/// Prefix of every substitute token.
pub const SUBSTITUTE_PREFIX: &str = "https://t.co/";

/// How substitute codes are spelled for a target language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderStyle {
    /// `https://t.co/0`, `https://t.co/1`, ...
    #[default]
    Digits,
    /// `https://t.co/A`, `https://t.co/B`, ... for languages whose script
    /// conversion rewrites ASCII digits (e.g. Newar).
    Letters,
}

impl PlaceholderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceholderStyle::Digits => "digits",
            PlaceholderStyle::Letters => "letters",
        }
    }

    /// Code for the placeholder at `index`.
    ///
    /// Letters are the base-36 spelling of `index + 10`, uppercased, so they
    /// start at `A` and continue `B..Z`, `10`, `11`, ...
    pub fn code(&self, index: usize) -> String {
        match self {
            PlaceholderStyle::Digits => index.to_string(),
            PlaceholderStyle::Letters => to_base36(index + 10).to_uppercase(),
        }
    }
}

fn to_base36(mut value: usize) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[value % 36]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

/// Language code → placeholder style. Languages not listed use digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceholderStyles(IndexMap<String, PlaceholderStyle>);

impl Default for PlaceholderStyles {
    fn default() -> Self {
        let mut styles = IndexMap::new();
        styles.insert("new".to_string(), PlaceholderStyle::Letters);
        Self(styles)
    }
}

impl PlaceholderStyles {
    pub fn for_language(&self, language: &str) -> PlaceholderStyle {
        self.0.get(language).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PlaceholderStyle)> {
        self.0.iter()
    }
}

/// One placeholder occurrence and the token standing in for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub token: String,
    pub substitute: String,
}

/// Text with placeholders masked, plus what is needed to undo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protected {
    pub masked: String,
    pub placeholders: Vec<Placeholder>,
}

/// Placeholder tokens in left-to-right order, duplicates included.
pub fn extract(text: &str) -> Vec<&str> {
    PLACEHOLDER_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Replace each placeholder occurrence with its own substitute.
///
/// A repeated placeholder gets one substitute per occurrence.
pub fn protect(text: &str, style: PlaceholderStyle) -> Protected {
    let mut placeholders = Vec::new();
    let masked = PLACEHOLDER_REGEX
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let substitute = format!("{}{}", SUBSTITUTE_PREFIX, style.code(placeholders.len()));
            placeholders.push(Placeholder {
                token: caps[0].to_string(),
                substitute: substitute.clone(),
            });
            substitute
        })
        .into_owned();

    Protected {
        masked,
        placeholders,
    }
}

/// Put the original placeholders back.
///
/// Matching ignores case, since translators sometimes change the casing of
/// the substitute. Longer substitutes are restored first so that
/// `https://t.co/1` never eats the front of `https://t.co/10`.
pub fn restore(masked: &str, placeholders: &[Placeholder]) -> String {
    let mut ordered: Vec<&Placeholder> = placeholders.iter().collect();
    ordered.sort_by(|a, b| b.substitute.len().cmp(&a.substitute.len()));

    let mut text = masked.to_string();
    for placeholder in ordered {
        let Ok(pattern) = Regex::new(&format!("(?i){}", regex::escape(&placeholder.substitute)))
        else {
            continue;
        };
        text = pattern
            .replace_all(&text, NoExpand(&placeholder.token))
            .into_owned();
    }
    text
}

/// Placeholder count differs between the seed text and its translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderMismatch {
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

/// Compare placeholder counts of `original` and `translated`.
pub fn verify(original: &str, translated: &str) -> Option<PlaceholderMismatch> {
    let expected = extract(original);
    let actual = extract(translated);
    if expected.len() == actual.len() {
        return None;
    }
    Some(PlaceholderMismatch {
        expected: expected.into_iter().map(String::from).collect(),
        actual: actual.into_iter().map(String::from).collect(),
    })
}
