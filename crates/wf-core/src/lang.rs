//! Supported narration languages.
//!
//! The kiosk ships with a closed set of four languages.  Anything the
//! engine cannot identify falls back to English rather than failing — a
//! rider must never be left without guidance because of a bad language
//! code.

/// The languages the kiosk can narrate in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
    Gujarati,
}

impl Language {
    /// All supported languages, in menu order.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Marathi,
        Language::Gujarati,
    ];

    /// Parse a language selection.
    ///
    /// Accepts both two-letter codes (`"en"`, `"hi"`, `"mr"`, `"gu"`) and
    /// full names, case-insensitively.  Unknown input falls back to
    /// [`Language::English`].
    pub fn from_code(code: &str) -> Language {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Language::English,
            "hi" | "hindi" => Language::Hindi,
            "mr" | "marathi" => Language::Marathi,
            "gu" | "gujarati" => Language::Gujarati,
            _ => Language::English,
        }
    }

    /// Two-letter code for the speech-synthesis boundary.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
            Language::Gujarati => "gu",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
