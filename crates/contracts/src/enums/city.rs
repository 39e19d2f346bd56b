use serde::{Deserialize, Serialize};

/// Cities offered by the care-home comparison location picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum City {
    Mumbai,
    Pune,
    Bangalore,
    Delhi,
}

impl City {
    pub fn code(&self) -> &'static str {
        match self {
            City::Mumbai => "mumbai",
            City::Pune => "pune",
            City::Bangalore => "bangalore",
            City::Delhi => "delhi",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            City::Mumbai => "Mumbai",
            City::Pune => "Pune",
            City::Bangalore => "Bangalore",
            City::Delhi => "Delhi",
        }
    }

    pub fn all() -> Vec<City> {
        vec![City::Mumbai, City::Pune, City::Bangalore, City::Delhi]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}
