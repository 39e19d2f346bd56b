//! Side-by-side comparison of up to three care homes.

use super::aggregate::{CareHome, CareHomeId};
use crate::enums::city::City;
use crate::enums::facility_requirement::FacilityRequirement;
use crate::shared::search::contains_ignore_case;
use crate::shared::selection::SaturatingSelection;

/// Homes that can be compared at once
pub const MAX_COMPARED_HOMES: usize = 3;

pub type CareHomeSelection = SaturatingSelection<CareHomeId>;

pub fn new_selection() -> CareHomeSelection {
    SaturatingSelection::new(MAX_COMPARED_HOMES)
}

/// Whether the compare button of `id` still does something.
///
/// Selected homes can always be removed; others only while room is left.
pub fn can_toggle(selection: &CareHomeSelection, id: &CareHomeId) -> bool {
    selection.contains(id) || !selection.is_full()
}

/// Selected homes in catalog order (not selection order)
pub fn selected_homes<'a>(catalog: &'a [CareHome], selection: &CareHomeSelection) -> Vec<&'a CareHome> {
    catalog
        .iter()
        .filter(|home| selection.contains(&home.id))
        .collect()
}

/// Rows of the comparison table, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonAttribute {
    MonthlyPrice,
    MedicalStaff,
    VisitingHours,
    MealOptions,
}

impl ComparisonAttribute {
    pub const ALL: [ComparisonAttribute; 4] = [
        ComparisonAttribute::MonthlyPrice,
        ComparisonAttribute::MedicalStaff,
        ComparisonAttribute::VisitingHours,
        ComparisonAttribute::MealOptions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ComparisonAttribute::MonthlyPrice => "Monthly Price",
            ComparisonAttribute::MedicalStaff => "Medical Staff",
            ComparisonAttribute::VisitingHours => "Visiting Hours",
            ComparisonAttribute::MealOptions => "Meal Options",
        }
    }

    pub fn cell(&self, home: &CareHome) -> ComparisonCell {
        match self {
            ComparisonAttribute::MonthlyPrice => ComparisonCell::Text(home.monthly_price_label()),
            ComparisonAttribute::MedicalStaff => ComparisonCell::Indicator(home.medical_staff),
            ComparisonAttribute::VisitingHours => ComparisonCell::Text(home.visiting_hours.clone()),
            ComparisonAttribute::MealOptions => ComparisonCell::Text(home.meal_options_label()),
        }
    }
}

/// One table cell: plain text or a present/absent mark
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonCell {
    Text(String),
    Indicator(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub cells: Vec<ComparisonCell>,
}

/// Comparison table body; empty when nothing is selected
pub fn comparison_rows(selected: &[&CareHome]) -> Vec<ComparisonRow> {
    if selected.is_empty() {
        return Vec::new();
    }
    ComparisonAttribute::ALL
        .iter()
        .map(|attr| ComparisonRow {
            label: attr.label(),
            cells: selected.iter().map(|home| attr.cell(home)).collect(),
        })
        .collect()
}

/// Budget / location / facility pickers above the catalog cards.
///
/// They only narrow which cards are visible; the selection is untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareHomeNarrowing {
    /// Raw budget input; ignored unless it parses to a positive number
    pub budget: String,
    pub location: Option<City>,
    pub facility: Option<FacilityRequirement>,
}

impl CareHomeNarrowing {
    pub fn budget_limit(&self) -> Option<i64> {
        self.budget.trim().parse::<i64>().ok().filter(|b| *b > 0)
    }

    pub fn matches(&self, home: &CareHome) -> bool {
        let within_budget = self
            .budget_limit()
            .map_or(true, |limit| home.monthly_price <= limit);
        let in_city = self
            .location
            .map_or(true, |city| contains_ignore_case(&home.location, city.display_name()));
        let has_facility = self.facility.map_or(true, |f| f.is_met_by(home));
        within_budget && in_city && has_facility
    }

    pub fn visible<'a>(&self, catalog: &'a [CareHome]) -> Vec<&'a CareHome> {
        catalog.iter().filter(|home| self.matches(home)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_care_home::catalog::builtin_care_homes;
    use crate::shared::catalog::CatalogSource;
    use crate::shared::selection::ToggleOutcome;

    #[test]
    fn test_selected_homes_follow_catalog_order() {
        let catalog = builtin_care_homes();
        let mut selection = new_selection();
        selection.toggle(CareHomeId::new("2"));
        selection.toggle(CareHomeId::new("1"));

        let selected = selected_homes(catalog.records(), &selection);
        let names: Vec<_> = selected.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Peaceful Haven", "Serene Senior Living"]);
    }

    #[test]
    fn test_selection_saturates_at_three() {
        let mut selection = new_selection();
        for id in ["1", "2", "3"] {
            assert_eq!(selection.toggle(CareHomeId::new(id)), ToggleOutcome::Added);
        }
        assert_eq!(selection.toggle(CareHomeId::new("4")), ToggleOutcome::Saturated);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_full_selection_only_allows_removal() {
        let mut selection = new_selection();
        assert!(can_toggle(&selection, &CareHomeId::new("4")));
        for id in ["1", "2", "3"] {
            selection.toggle(CareHomeId::new(id));
        }
        let before = selection.clone();

        assert!(!can_toggle(&selection, &CareHomeId::new("4")));
        assert!(can_toggle(&selection, &CareHomeId::new("2")));

        // a fourth home is refused without touching the selection
        assert_eq!(selection.toggle(CareHomeId::new("4")), ToggleOutcome::Saturated);
        assert_eq!(selection, before);

        selection.toggle(CareHomeId::new("2"));
        assert!(can_toggle(&selection, &CareHomeId::new("4")));
    }

    #[test]
    fn test_comparison_rows_format_cells() {
        let catalog = builtin_care_homes();
        let mut selection = new_selection();
        selection.toggle(CareHomeId::new("1"));
        selection.toggle(CareHomeId::new("2"));
        let selected = selected_homes(catalog.records(), &selection);

        let rows = comparison_rows(&selected);
        let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec!["Monthly Price", "Medical Staff", "Visiting Hours", "Meal Options"]
        );
        assert_eq!(
            rows[0].cells,
            vec![
                ComparisonCell::Text("₹25,000".into()),
                ComparisonCell::Text("₹30,000".into())
            ]
        );
        assert_eq!(rows[1].cells, vec![ComparisonCell::Indicator(true); 2]);
        assert_eq!(rows[2].cells[1], ComparisonCell::Text("9 AM - 7 PM".into()));
        assert_eq!(
            rows[3].cells[0],
            ComparisonCell::Text("Veg, Jain, Diabetic-friendly".into())
        );
    }

    #[test]
    fn test_no_table_without_selection() {
        assert!(comparison_rows(&[]).is_empty());
    }

    #[test]
    fn test_key_facilities_are_first_three() {
        let catalog = builtin_care_homes();
        let home = &catalog.records()[0];
        assert_eq!(home.key_facilities(), &["24/7 Care", "Garden", "Temple"]);
    }

    #[test]
    fn test_narrowing() {
        let catalog = builtin_care_homes();
        let homes = catalog.records();

        let mut narrowing = CareHomeNarrowing::default();
        assert_eq!(narrowing.visible(homes).len(), 2);

        narrowing.budget = "26000".into();
        assert_eq!(narrowing.visible(homes).len(), 1);

        narrowing.budget = "abc".into();
        assert_eq!(narrowing.budget_limit(), None);
        assert_eq!(narrowing.visible(homes).len(), 2);

        narrowing.location = Some(City::Pune);
        let visible = narrowing.visible(homes);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Serene Senior Living");

        narrowing.location = None;
        narrowing.facility = Some(FacilityRequirement::Temple);
        assert_eq!(narrowing.visible(homes)[0].name, "Peaceful Haven");

        narrowing.location = Some(City::Delhi);
        assert!(narrowing.visible(homes).is_empty());
    }
}
