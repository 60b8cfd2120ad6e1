use std::fmt;
use serde::{Deserialize, Serialize};

/// Language of the trade page. Sent to Steam in the `Steam_Language` cookie.
#[derive(Default, Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
pub enum Language {
    Arabic,
    Bulgarian,
    ChineseSimplified,
    ChineseTraditional,
    Czech,
    Danish,
    Dutch,
    /// This is the default language.
    #[default]
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Japanese,
    Korean,
    Norwegian,
    Polish,
    Portuguese,
    PortugueseBrazil,
    Romanian,
    Russian,
    SpanishSpain,
    SpanishLatinAmerica,
    Swedish,
    Thai,
    Turkish,
    Ukrainian,
    Vietnamese,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_language_code())
    }
}

impl Language {
    /// The language name Steam Community uses in cookies and query strings.
    pub fn api_language_code(&self) -> &'static str {
        match self {
            Self::Arabic => "arabic",
            Self::Bulgarian => "bulgarian",
            Self::ChineseSimplified => "schinese",
            Self::ChineseTraditional => "tchinese",
            Self::Czech => "czech",
            Self::Danish => "danish",
            Self::Dutch => "dutch",
            Self::English => "english",
            Self::Finnish => "finnish",
            Self::French => "french",
            Self::German => "german",
            Self::Greek => "greek",
            Self::Hungarian => "hungarian",
            Self::Italian => "italian",
            Self::Japanese => "japanese",
            Self::Korean => "koreana",
            Self::Norwegian => "norwegian",
            Self::Polish => "polish",
            Self::Portuguese => "portuguese",
            Self::PortugueseBrazil => "brazilian",
            Self::Romanian => "romanian",
            Self::Russian => "russian",
            Self::SpanishSpain => "spanish",
            Self::SpanishLatinAmerica => "latam",
            Self::Swedish => "swedish",
            Self::Thai => "thai",
            Self::Turkish => "turkish",
            Self::Ukrainian => "ukrainian",
            Self::Vietnamese => "vietnamese",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_default() {
        let language = Language::default();

        assert_eq!(language.api_language_code(), "english");
        assert_eq!(language.to_string(), "english");
    }
}
