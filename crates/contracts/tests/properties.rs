//! Property tests for listing filters, paging, comparison selection and
//! donation progress.

use proptest::prelude::*;

use contracts::domain::a001_housing_facility::aggregate::{FacilityId, HousingFacility};
use contracts::domain::a001_housing_facility::filter::{apply, filter_homes, HousingFilter, HOMES_PER_PAGE};
use contracts::domain::a002_care_home::aggregate::CareHomeId;
use contracts::domain::a002_care_home::comparison::{new_selection, MAX_COMPARED_HOMES};
use contracts::domain::a003_donation::aggregate::progress_percentage;
use contracts::shared::selection::ToggleOutcome;

fn word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Care".to_string()),
        Just("Memory".to_string()),
        Just("Garden".to_string()),
        Just("Living".to_string()),
        "[A-Za-z]{1,8}",
    ]
}

fn facility() -> impl Strategy<Value = HousingFacility> {
    (
        word(),
        word(),
        word(),
        proptest::collection::vec(word(), 0..4),
    )
        .prop_map(|(name, category, location, amenities)| HousingFacility {
            id: FacilityId(0),
            name,
            category,
            location,
            price_range: String::new(),
            capacity: 10,
            amenities,
            rating: 4.0,
            reviews: 1,
            image: String::new(),
            description: String::new(),
        })
}

fn catalog() -> impl Strategy<Value = Vec<HousingFacility>> {
    proptest::collection::vec(facility(), 0..16).prop_map(|mut homes| {
        for (i, home) in homes.iter_mut().enumerate() {
            home.id = FacilityId(i as u32 + 1);
        }
        homes
    })
}

fn criterion() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-zA-Z]{1,3}", word()]
}

fn housing_filter() -> impl Strategy<Value = HousingFilter> {
    (criterion(), criterion(), criterion(), 1usize..6).prop_map(
        |(search_term, housing_type, amenity, current_page)| HousingFilter {
            search_term,
            housing_type,
            amenity,
            current_page,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the filtered list is the catalog, in order, minus non-matching records.
    #[test]
    fn property_filter_is_order_preserving_subsequence(
        homes in catalog(),
        filter in housing_filter(),
    ) {
        let filtered = filter_homes(&homes, &filter);
        let expected: Vec<u32> = homes
            .iter()
            .filter(|h| filter.matches(h))
            .map(|h| h.id.value())
            .collect();
        let actual: Vec<u32> = filtered.iter().map(|h| h.id.value()).collect();
        prop_assert_eq!(&actual, &expected);

        // ids were assigned ascending, so order preservation means sorted
        prop_assert!(actual.windows(2).all(|w| w[0] < w[1]));
    }

    /// PROPERTY: a page never exceeds the page size and is empty exactly when
    /// there is nothing to show on it.
    #[test]
    fn property_page_bounds(
        homes in catalog(),
        filter in housing_filter(),
    ) {
        let listing = apply(&homes, &filter);
        let paged = listing.paged();
        prop_assert!(paged.len() <= HOMES_PER_PAGE);
        let should_be_empty = listing.filtered.is_empty() || filter.current_page > listing.total_pages;
        prop_assert_eq!(paged.is_empty(), should_be_empty);
    }

    /// PROPERTY: filtering is a pure function of catalog and criteria.
    #[test]
    fn property_filter_is_idempotent(
        homes in catalog(),
        filter in housing_filter(),
    ) {
        let first = apply(&homes, &filter);
        let second = apply(&homes, &filter);
        prop_assert_eq!(first.paged(), second.paged());
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: "Next"/"Previous" keep the page within 1..=max(1, total).
    #[test]
    fn property_navigation_stays_in_range(
        homes in catalog(),
        moves in proptest::collection::vec(any::<bool>(), 0..12),
    ) {
        let mut filter = HousingFilter::default();
        let total = apply(&homes, &filter).total_pages;
        for forward in moves {
            let pager = apply(&homes, &filter).pager();
            filter.go_to(if forward { pager.next() } else { pager.previous() });
            prop_assert!(filter.current_page >= 1);
            prop_assert!(filter.current_page <= total.max(1));
        }
    }

    /// PROPERTY: with three homes selected a fourth unselected id changes nothing.
    #[test]
    fn property_selection_saturates(
        ids in proptest::collection::hash_set("[a-z0-9]{1,4}", 4..8),
    ) {
        let ids: Vec<String> = ids.into_iter().collect();
        let mut selection = new_selection();
        for id in ids.iter().take(MAX_COMPARED_HOMES) {
            selection.toggle(CareHomeId::new(id.clone()));
        }
        let before = selection.clone();
        let outcome = selection.toggle(CareHomeId::new(ids[MAX_COMPARED_HOMES].clone()));
        prop_assert_eq!(outcome, ToggleOutcome::Saturated);
        prop_assert_eq!(selection, before);
    }

    /// PROPERTY: toggling a selected id always removes it.
    #[test]
    fn property_toggle_removes_selected(
        ids in proptest::collection::vec("[a-z0-9]{1,4}", 1..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut selection = new_selection();
        for id in &ids {
            selection.toggle(CareHomeId::new(id.clone()));
        }
        prop_assume!(!selection.is_empty());
        let target = pick.get(selection.ids()).clone();
        let len_before = selection.len();
        prop_assert_eq!(selection.toggle(target.clone()), ToggleOutcome::Removed);
        prop_assert!(!selection.contains(&target));
        prop_assert_eq!(selection.len(), len_before - 1);
    }

    /// PROPERTY: progress is always a percentage, and 0 for a zero target.
    #[test]
    fn property_progress_is_clamped(
        total in any::<i64>(),
        target in any::<i64>(),
    ) {
        let pct = progress_percentage(total, target);
        prop_assert!(pct <= 100);
        if target == 0 {
            prop_assert_eq!(pct, 0);
        }
    }
}

#[test]
fn search_is_case_insensitive_on_location() {
    let homes = vec![HousingFacility {
        id: FacilityId(1),
        name: "Peaceful Haven".into(),
        category: "Care Home".into(),
        location: "Mumbai, Maharashtra".into(),
        price_range: String::new(),
        capacity: 40,
        amenities: vec![],
        rating: 4.5,
        reviews: 10,
        image: String::new(),
        description: String::new(),
    }];
    for term in ["mumbai", "MUMBAI", "MuMbAi"] {
        let mut filter = HousingFilter::default();
        filter.set_search_term(term);
        assert_eq!(filter_homes(&homes, &filter).len(), 1, "term {term}");
    }
}
