//! Search, category and amenity filtering plus paging of the housing catalog.

use super::aggregate::HousingFacility;
use crate::shared::pagination::{clamp_page, page_slice, total_pages, Pager};
use crate::shared::search::{any_contains_ignore_case, contains_ignore_case};

/// Listings shown per page
pub const HOMES_PER_PAGE: usize = 4;

/// User-entered criteria of the housing page.
///
/// Every setter that changes a predicate sends the view back to page 1, so a
/// narrower or wider result set can never leave the page out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HousingFilter {
    pub search_term: String,
    pub housing_type: String,
    pub amenity: String,
    pub current_page: usize,
}

impl Default for HousingFilter {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            housing_type: String::new(),
            amenity: String::new(),
            current_page: 1,
        }
    }
}

impl HousingFilter {
    /// Name or location contains the search term
    pub fn matches_search(&self, home: &HousingFacility) -> bool {
        contains_ignore_case(&home.name, &self.search_term)
            || contains_ignore_case(&home.location, &self.search_term)
    }

    /// Category contains the housing type ("Assisted" matches "Assisted Living")
    pub fn matches_type(&self, home: &HousingFacility) -> bool {
        contains_ignore_case(&home.category, &self.housing_type)
    }

    /// Some amenity contains the amenity filter
    pub fn matches_amenity(&self, home: &HousingFacility) -> bool {
        any_contains_ignore_case(&home.amenities, &self.amenity)
    }

    pub fn matches(&self, home: &HousingFacility) -> bool {
        self.matches_search(home) && self.matches_type(home) && self.matches_amenity(home)
    }

    pub fn set_search_term(&mut self, value: impl Into<String>) {
        self.search_term = value.into();
        self.current_page = 1;
    }

    pub fn set_housing_type(&mut self, value: impl Into<String>) {
        self.housing_type = value.into();
        self.current_page = 1;
    }

    pub fn set_amenity(&mut self, value: impl Into<String>) {
        self.amenity = value.into();
        self.current_page = 1;
    }

    /// "Clear Filters": empty every predicate and return to page 1
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of non-empty predicates
    pub fn active_count(&self) -> usize {
        [&self.search_term, &self.housing_type, &self.amenity]
            .iter()
            .filter(|v| !v.is_empty())
            .count()
    }

    /// Page selection; "Previous"/"Next" pass `Pager::previous`/`Pager::next`
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Pull the current page back into range after `catalog` replaced the
    /// one the page was chosen against
    pub fn fit_to(&mut self, catalog: &[HousingFacility]) {
        let total = total_pages(filter_homes(catalog, self).len(), HOMES_PER_PAGE);
        self.current_page = clamp_page(self.current_page, total);
    }
}

/// Filtered, paged view over a catalog
#[derive(Debug, Clone, PartialEq)]
pub struct HousingListing<'a> {
    /// Every matching record, in catalog order
    pub filtered: Vec<&'a HousingFacility>,
    pub current_page: usize,
    pub total_pages: usize,
}

impl<'a> HousingListing<'a> {
    /// Records on the current page
    pub fn paged(&self) -> &[&'a HousingFacility] {
        page_slice(&self.filtered, self.current_page, HOMES_PER_PAGE)
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.current_page, self.total_pages)
    }
}

/// Records satisfying every active predicate, catalog order preserved
pub fn filter_homes<'a>(
    catalog: &'a [HousingFacility],
    filter: &HousingFilter,
) -> Vec<&'a HousingFacility> {
    catalog.iter().filter(|home| filter.matches(home)).collect()
}

/// Apply `filter` to `catalog` and cut out the current page
pub fn apply<'a>(catalog: &'a [HousingFacility], filter: &HousingFilter) -> HousingListing<'a> {
    let filtered = filter_homes(catalog, filter);
    let total_pages = total_pages(filtered.len(), HOMES_PER_PAGE);
    HousingListing {
        filtered,
        current_page: filter.current_page,
        total_pages,
    }
}

/// Distinct categories in first-seen order, for the type picker
pub fn housing_types(catalog: &[HousingFacility]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for home in catalog {
        if !types.iter().any(|t| t == &home.category) {
            types.push(home.category.clone());
        }
    }
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_housing_facility::catalog::builtin_facilities;
    use crate::shared::catalog::CatalogSource;

    fn ids(homes: &[&HousingFacility]) -> Vec<u32> {
        homes.iter().map(|h| h.id.value()).collect()
    }

    #[test]
    fn test_empty_filter_pages_through_catalog() {
        let catalog = builtin_facilities();
        let mut filter = HousingFilter::default();

        let listing = apply(catalog.records(), &filter);
        assert_eq!(listing.total_pages, 2);
        assert_eq!(ids(listing.paged()), vec![1, 2, 3, 4]);
        assert!(listing.pager().shows_controls());

        filter.go_to(listing.pager().next());
        let listing = apply(catalog.records(), &filter);
        assert_eq!(filter.current_page, 2);
        assert_eq!(ids(listing.paged()), vec![5, 6]);

        // Next on the last page stays put
        assert!(!listing.pager().has_next());
        filter.go_to(listing.pager().next());
        assert_eq!(filter.current_page, 2);

        filter.go_to(apply(catalog.records(), &filter).pager().previous());
        filter.go_to(apply(catalog.records(), &filter).pager().previous());
        assert_eq!(filter.current_page, 1);
    }

    #[test]
    fn test_search_matches_name_or_location_any_case() {
        let catalog = builtin_facilities();
        let mut filter = HousingFilter::default();

        filter.set_search_term("PORTLAND");
        assert_eq!(ids(&filter_homes(catalog.records(), &filter)), vec![1]);

        filter.set_search_term("manor");
        assert_eq!(ids(&filter_homes(catalog.records(), &filter)), vec![2]);
    }

    #[test]
    fn test_type_is_substring_match() {
        let catalog = builtin_facilities();
        let mut filter = HousingFilter::default();
        filter.set_housing_type("assisted");
        assert_eq!(ids(&filter_homes(catalog.records(), &filter)), vec![1, 5]);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let catalog = builtin_facilities();
        let mut filter = HousingFilter::default();
        filter.set_amenity("memory care");
        assert_eq!(ids(&filter_homes(catalog.records(), &filter)), vec![1, 3, 5]);

        filter.set_housing_type("Nursing");
        assert_eq!(ids(&filter_homes(catalog.records(), &filter)), vec![3]);
        assert_eq!(filter.active_count(), 2);
    }

    #[test]
    fn test_no_results() {
        let catalog = builtin_facilities();
        let mut filter = HousingFilter::default();
        filter.set_search_term("atlantis");
        let listing = apply(catalog.records(), &filter);
        assert!(listing.is_empty());
        assert!(listing.paged().is_empty());
        assert_eq!(listing.total_pages, 0);
        assert!(!listing.pager().shows_controls());
    }

    #[test]
    fn test_filter_change_resets_page() {
        let catalog = builtin_facilities();
        let mut filter = HousingFilter::default();
        filter.go_to(2);
        filter.set_search_term("s");
        assert_eq!(filter.current_page, 1);

        filter.go_to(2);
        filter.clear();
        assert_eq!(filter, HousingFilter::default());
        let listing = apply(catalog.records(), &filter);
        assert_eq!(listing.paged().len(), HOMES_PER_PAGE);
    }

    #[test]
    fn test_smaller_catalog_pulls_page_back_into_range() {
        let catalog = builtin_facilities();
        let mut filter = HousingFilter::default();
        filter.go_to(2);

        let smaller: Vec<HousingFacility> = catalog.records()[..3].to_vec();
        assert!(apply(&smaller, &filter).paged().is_empty());

        filter.fit_to(&smaller);
        assert_eq!(filter.current_page, 1);
        assert_eq!(ids(apply(&smaller, &filter).paged()), vec![1, 2, 3]);

        // a page that still exists is kept
        filter.go_to(2);
        filter.fit_to(catalog.records());
        assert_eq!(filter.current_page, 2);

        // nothing to show still leaves page 1
        filter.fit_to(&[]);
        assert_eq!(filter.current_page, 1);
    }

    #[test]
    fn test_housing_types_distinct_in_order() {
        let catalog = builtin_facilities();
        assert_eq!(
            housing_types(catalog.records()),
            vec![
                "Assisted Living",
                "Independent Living",
                "Nursing Home",
                "Residential Care"
            ]
        );
    }
}
