use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateId;
use crate::shared::format::format_rupees;

/// String id of a comparison catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CareHomeId(pub String);

impl CareHomeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for CareHomeId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Empty care home id".into());
        }
        Ok(Self(s.to_string()))
    }
}

/// Care home entry of the side-by-side comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareHome {
    pub id: CareHomeId,
    pub name: String,
    pub location: String,

    /// Whole rupees per month
    #[serde(rename = "monthlyPrice")]
    pub monthly_price: i64,

    pub facilities: Vec<String>,

    pub rating: f32,

    /// Percent of beds taken
    pub occupancy: u8,

    #[serde(rename = "medicalStaff")]
    pub medical_staff: bool,

    /// Display string, e.g. "10 AM - 6 PM"
    #[serde(rename = "visitingHours")]
    pub visiting_hours: String,

    #[serde(rename = "mealOptions")]
    pub meal_options: Vec<String>,
}

impl CareHome {
    /// "₹25,000"
    pub fn monthly_price_label(&self) -> String {
        format_rupees(self.monthly_price)
    }

    /// Meal options in catalog order, comma separated
    pub fn meal_options_label(&self) -> String {
        self.meal_options.join(", ")
    }

    /// Facilities highlighted on the catalog card
    pub fn key_facilities(&self) -> &[String] {
        &self.facilities[..self.facilities.len().min(3)]
    }
}
