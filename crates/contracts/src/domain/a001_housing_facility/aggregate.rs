use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Numeric id of a housing listing, unique within the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(pub u32);

impl FacilityId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for FacilityId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(FacilityId)
            .map_err(|e| format!("Invalid facility id: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Senior living community shown on the housing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousingFacility {
    pub id: FacilityId,
    pub name: String,

    /// Open set such as "Assisted Living" or "Nursing Home"
    #[serde(rename = "type")]
    pub category: String,

    pub location: String,

    /// Display string, e.g. "$2,500 - $3,200/month"
    #[serde(rename = "price")]
    pub price_range: String,

    pub capacity: u32,

    /// Ordered, may contain duplicates
    pub amenities: Vec<String>,

    /// 0.0 – 5.0
    pub rating: f32,

    pub reviews: u32,

    pub image: String,

    pub description: String,
}

impl HousingFacility {
    /// "4.8 (45 reviews)"
    pub fn rating_label(&self) -> String {
        format!("{:.1} ({} reviews)", self.rating, self.reviews)
    }

    pub fn capacity_label(&self) -> String {
        format!("{} residents", self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let json = r#"{
            "id": 7,
            "name": "Test Home",
            "type": "Assisted Living",
            "location": "Portland, OR",
            "price": "$1 - $2/month",
            "capacity": 10,
            "amenities": ["Garden"],
            "rating": 4.5,
            "reviews": 3,
            "image": "",
            "description": ""
        }"#;
        let home: HousingFacility = serde_json::from_str(json).unwrap();
        assert_eq!(home.id, FacilityId(7));
        assert_eq!(home.category, "Assisted Living");
        assert_eq!(home.price_range, "$1 - $2/month");
        assert_eq!(home.rating_label(), "4.5 (3 reviews)");
        assert_eq!(home.capacity_label(), "10 residents");
    }
}
