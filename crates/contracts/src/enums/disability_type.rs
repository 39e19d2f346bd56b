use serde::{Deserialize, Serialize};

/// Disability categories offered on the jobs profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisabilityType {
    #[serde(rename = "Physical Mobility")]
    PhysicalMobility,
    #[serde(rename = "Visual Impairment")]
    VisualImpairment,
    #[serde(rename = "Hearing Impairment")]
    HearingImpairment,
    #[serde(rename = "Speech Impairment")]
    SpeechImpairment,
    #[serde(rename = "Cognitive Disability")]
    CognitiveDisability,
    #[serde(rename = "Other")]
    Other,
}

impl DisabilityType {
    pub fn display_name(&self) -> &'static str {
        match self {
            DisabilityType::PhysicalMobility => "Physical Mobility",
            DisabilityType::VisualImpairment => "Visual Impairment",
            DisabilityType::HearingImpairment => "Hearing Impairment",
            DisabilityType::SpeechImpairment => "Speech Impairment",
            DisabilityType::CognitiveDisability => "Cognitive Disability",
            DisabilityType::Other => "Other",
        }
    }

    pub fn all() -> Vec<DisabilityType> {
        vec![
            DisabilityType::PhysicalMobility,
            DisabilityType::VisualImpairment,
            DisabilityType::HearingImpairment,
            DisabilityType::SpeechImpairment,
            DisabilityType::CognitiveDisability,
            DisabilityType::Other,
        ]
    }

    /// Parse from the label used in forms and storage
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.display_name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_display_name() {
        for t in DisabilityType::all() {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.display_name()));
            assert_eq!(DisabilityType::from_display_name(t.display_name()), Some(t));
        }
    }
}
