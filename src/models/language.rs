use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Supported quote languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Brazilian Portuguese.
    Br,
    /// American English.
    Us,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Br, Language::Us];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Br => "br",
            Language::Us => "us",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "br" => Ok(Language::Br),
            "us" => Ok(Language::Us),
            _ => Err(AppError::UnsupportedLanguage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_languages_parse() {
        assert_eq!("br".parse::<Language>().unwrap(), Language::Br);
        assert_eq!("us".parse::<Language>().unwrap(), Language::Us);
    }

    #[test]
    fn test_unknown_languages_rejected() {
        for input in ["fr", "ko", "la", "zh", "", "BR", "en-us"] {
            let err = input.parse::<Language>().unwrap_err();
            assert_eq!(err.to_string(), "language not supported. Use 'br' or 'us'");
        }
    }

    #[test]
    fn test_display_round_trips() {
        for language in Language::ALL {
            assert_eq!(
                language.to_string().parse::<Language>().unwrap(),
                language
            );
        }
    }
}
