//! Built-in housing catalog, used to seed storage and as an offline fallback.

use super::aggregate::{FacilityId, HousingFacility};
use crate::shared::catalog::StaticCatalog;

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400/e2e8f0/475569?text=Senior+Home";

#[allow(clippy::too_many_arguments)]
fn facility(
    id: u32,
    name: &str,
    category: &str,
    location: &str,
    price_range: &str,
    capacity: u32,
    amenities: &[&str],
    rating: f32,
    reviews: u32,
    description: &str,
) -> HousingFacility {
    HousingFacility {
        id: FacilityId(id),
        name: name.into(),
        category: category.into(),
        location: location.into(),
        price_range: price_range.into(),
        capacity,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        rating,
        reviews,
        image: PLACEHOLDER_IMAGE.into(),
        description: description.into(),
    }
}

/// The six senior living communities listed on the housing page
pub fn builtin_facilities() -> StaticCatalog<HousingFacility> {
    StaticCatalog::new(vec![
        facility(
            1,
            "Golden Years Residence",
            "Assisted Living",
            "Portland, OR",
            "$2,500 - $3,200/month",
            120,
            &["24/7 Care Staff", "Memory Care", "Physical Therapy"],
            4.8,
            45,
            "Provides a supportive environment for seniors with varying levels of care needs. Our staff is trained to assist with daily activities while promoting independence.",
        ),
        facility(
            2,
            "Sunset Manor",
            "Independent Living",
            "Tampa, FL",
            "$1,800 - $2,400/month",
            85,
            &["Social Activities", "Transportation", "Fitness Center"],
            4.6,
            38,
            "A vibrant community for active seniors who want to maintain their independence while enjoying convenient services and social activities.",
        ),
        facility(
            3,
            "Serene Valley Care Center",
            "Nursing Home",
            "Austin, TX",
            "$3,500 - $4,200/month",
            60,
            &["Medical Staff", "Physical Rehabilitation", "Memory Care"],
            4.7,
            52,
            "Specialized nursing care facility providing 24/7 medical supervision for seniors with advanced care needs, including rehabilitation services.",
        ),
        facility(
            4,
            "Heritage Place",
            "Residential Care",
            "Denver, CO",
            "$2,800 - $3,600/month",
            90,
            &["Meals Included", "Housekeeping", "Social Activities"],
            4.5,
            29,
            "Warm residential setting offering personalized care services, nutritious meals, and engaging activities for seniors requiring varying levels of assistance.",
        ),
        facility(
            5,
            "Maple Grove Senior Living",
            "Assisted Living",
            "Seattle, WA",
            "$2,600 - $3,400/month",
            75,
            &["Memory Care", "Garden Access", "Therapy Services"],
            4.9,
            63,
            "Award-winning facility specializing in personalized care plans and memory support in a peaceful garden setting with various therapeutic programs.",
        ),
        facility(
            6,
            "Riverside Retirement Community",
            "Independent Living",
            "Chicago, IL",
            "$2,100 - $2,900/month",
            110,
            &["Community Events", "Dining Services", "Library"],
            4.4,
            41,
            "Riverside offers independent apartment living with optional services, fine dining, and a vibrant community calendar of social and cultural events.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::CatalogSource;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let catalog = builtin_facilities();
        let ids: HashSet<_> = catalog.records().iter().map(|h| h.id).collect();
        assert_eq!(ids.len(), catalog.records().len());
        assert_eq!(catalog.records().len(), 6);
    }
}
