use serde::{Deserialize, Serialize};
use std::fmt;

/// Reply language. Arabic unless the caller asks for English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    /// Parses a language tag such as `en`, `EN`, or `en-US`. Anything that
    /// is not English, including a missing tag, is Arabic.
    pub fn from_tag(tag: Option<&str>) -> Self {
        let primary = tag
            .map(str::trim)
            .and_then(|t| t.split(['-', '_']).next())
            .unwrap_or_default();

        if primary.eq_ignore_ascii_case("en") {
            Locale::En
        } else {
            Locale::Ar
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Locale::Ar => 0,
            Locale::En => 1,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
