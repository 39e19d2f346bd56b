use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::AggregateId;
use crate::enums::disability_type::DisabilityType;
use crate::enums::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub Uuid);

impl ProfileId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProfileId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProfileId)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Answers collected by the jobs profile form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisabilityProfileDto {
    pub disability_type: Option<DisabilityType>,
    #[serde(default)]
    pub disability_background: String,
    #[serde(default)]
    pub accommodations: Vec<String>,
    #[serde(default)]
    pub work_experience: String,
    #[serde(default)]
    pub has_resume: bool,
    #[serde(default)]
    pub preferred_language: Language,
}

impl DisabilityProfileDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.disability_type.is_none() {
            return Err("Please select the type of disability".into());
        }
        Ok(())
    }
}

/// Stored profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisabilityProfile {
    pub id: ProfileId,
    pub disability_type: DisabilityType,
    pub disability_background: String,
    pub accommodations: Vec<String>,
    pub work_experience: String,
    pub has_resume: bool,
    pub preferred_language: Language,
    pub created_at: DateTime<Utc>,
}

impl DisabilityProfile {
    /// Build a profile from validated answers
    pub fn new_for_insert(dto: &DisabilityProfileDto) -> Result<Self, String> {
        dto.validate()?;
        let disability_type = dto
            .disability_type
            .ok_or_else(|| "Please select the type of disability".to_string())?;
        Ok(Self {
            id: ProfileId::new_v4(),
            disability_type,
            disability_background: dto.disability_background.trim().to_string(),
            accommodations: dto.accommodations.clone(),
            work_experience: dto.work_experience.trim().to_string(),
            has_resume: dto.has_resume,
            preferred_language: dto.preferred_language,
            created_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitProfileResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = r#"{
            "disabilityType": "Visual Impairment",
            "workExperience": "  Call centre  ",
            "hasResume": true,
            "preferredLanguage": "marathi"
        }"#;
        let dto: DisabilityProfileDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.disability_type, Some(DisabilityType::VisualImpairment));
        assert_eq!(dto.preferred_language, Language::Marathi);
        assert!(dto.accommodations.is_empty());

        let profile = DisabilityProfile::new_for_insert(&dto).unwrap();
        assert_eq!(profile.work_experience, "Call centre");
        assert!(profile.has_resume);
    }

    #[test]
    fn test_type_is_required() {
        let dto = DisabilityProfileDto::default();
        assert!(dto.validate().is_err());
        assert!(DisabilityProfile::new_for_insert(&dto).is_err());
    }
}
