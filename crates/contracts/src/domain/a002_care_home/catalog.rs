//! Built-in comparison catalog.

use super::aggregate::{CareHome, CareHomeId};
use crate::shared::catalog::StaticCatalog;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn builtin_care_homes() -> StaticCatalog<CareHome> {
    StaticCatalog::new(vec![
        CareHome {
            id: CareHomeId::new("1"),
            name: "Peaceful Haven".into(),
            location: "Mumbai, Maharashtra".into(),
            monthly_price: 25000,
            facilities: strings(&["24/7 Care", "Garden", "Temple", "Activity Room"]),
            rating: 4.5,
            occupancy: 85,
            medical_staff: true,
            visiting_hours: "10 AM - 6 PM".into(),
            meal_options: strings(&["Veg", "Jain", "Diabetic-friendly"]),
        },
        CareHome {
            id: CareHomeId::new("2"),
            name: "Serene Senior Living".into(),
            location: "Pune, Maharashtra".into(),
            monthly_price: 30000,
            facilities: strings(&["24/7 Care", "Swimming Pool", "Yoga Center", "Library"]),
            rating: 4.8,
            occupancy: 90,
            medical_staff: true,
            visiting_hours: "9 AM - 7 PM".into(),
            meal_options: strings(&["Veg", "Non-veg", "Diabetic-friendly"]),
        },
    ])
}
