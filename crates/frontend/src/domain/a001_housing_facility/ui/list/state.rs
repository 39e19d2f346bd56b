use contracts::domain::a001_housing_facility::aggregate::HousingFacility;
use contracts::domain::a001_housing_facility::catalog::builtin_facilities;
use contracts::domain::a001_housing_facility::filter::HousingFilter;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct HousingListState {
    pub catalog: Vec<HousingFacility>,
    pub filter: HousingFilter,
    pub is_loaded: bool,
}

impl Default for HousingListState {
    fn default() -> Self {
        Self {
            catalog: builtin_facilities().into_records(),
            filter: HousingFilter::default(),
            is_loaded: false,
        }
    }
}

impl HousingListState {
    /// Swap in the backend catalog, keeping the current page valid for it
    pub fn replace_catalog(&mut self, catalog: Vec<HousingFacility>) {
        self.filter.fit_to(&catalog);
        self.catalog = catalog;
        self.is_loaded = true;
    }
}

pub fn create_state() -> RwSignal<HousingListState> {
    RwSignal::new(HousingListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_catalog_keeps_page_in_range() {
        let mut state = HousingListState::default();
        state.filter.go_to(2);

        let smaller: Vec<HousingFacility> = state.catalog[..2].to_vec();
        state.replace_catalog(smaller);

        assert!(state.is_loaded);
        assert_eq!(state.catalog.len(), 2);
        assert_eq!(state.filter.current_page, 1);
    }
}
