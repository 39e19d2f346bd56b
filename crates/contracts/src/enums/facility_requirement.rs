use serde::{Deserialize, Serialize};

use crate::domain::a002_care_home::aggregate::CareHome;
use crate::shared::search::any_contains_ignore_case;

/// "Required facilities" options of the care-home comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityRequirement {
    Medical,
    Physio,
    Garden,
    Temple,
}

impl FacilityRequirement {
    pub fn code(&self) -> &'static str {
        match self {
            FacilityRequirement::Medical => "medical",
            FacilityRequirement::Physio => "physio",
            FacilityRequirement::Garden => "garden",
            FacilityRequirement::Temple => "temple",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FacilityRequirement::Medical => "24/7 Medical Staff",
            FacilityRequirement::Physio => "Physiotherapy",
            FacilityRequirement::Garden => "Garden/Open Space",
            FacilityRequirement::Temple => "Temple/Prayer Room",
        }
    }

    pub fn all() -> Vec<FacilityRequirement> {
        vec![
            FacilityRequirement::Medical,
            FacilityRequirement::Physio,
            FacilityRequirement::Garden,
            FacilityRequirement::Temple,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.code() == code)
    }

    /// Whether `home` offers this facility
    pub fn is_met_by(&self, home: &CareHome) -> bool {
        match self {
            FacilityRequirement::Medical => home.medical_staff,
            FacilityRequirement::Physio => any_contains_ignore_case(&home.facilities, "physio"),
            FacilityRequirement::Garden => {
                any_contains_ignore_case(&home.facilities, "garden")
                    || any_contains_ignore_case(&home.facilities, "open space")
            }
            FacilityRequirement::Temple => {
                any_contains_ignore_case(&home.facilities, "temple")
                    || any_contains_ignore_case(&home.facilities, "prayer")
            }
        }
    }
}
