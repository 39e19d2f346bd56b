use serde::{Deserialize, Serialize};

/// Languages offered by the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Tamil,
    Telugu,
    Marathi,
    Gujarati,
}

impl Language {
    /// Code stored in the profile
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Tamil => "tamil",
            Language::Telugu => "telugu",
            Language::Marathi => "marathi",
            Language::Gujarati => "gujarati",
        }
    }

    /// Label in the language's own script
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Tamil => "தமிழ்",
            Language::Telugu => "తెలుగు",
            Language::Marathi => "मराठी",
            Language::Gujarati => "ગુજરાતી",
        }
    }

    pub fn all() -> Vec<Language> {
        vec![
            Language::English,
            Language::Hindi,
            Language::Tamil,
            Language::Telugu,
            Language::Marathi,
            Language::Gujarati,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|l| l.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("klingon"), None);
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Tamil).unwrap();
        assert_eq!(json, "\"tamil\"");
    }
}
