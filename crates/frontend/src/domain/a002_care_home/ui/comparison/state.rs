use contracts::domain::a002_care_home::aggregate::CareHome;
use contracts::domain::a002_care_home::catalog::builtin_care_homes;
use contracts::domain::a002_care_home::comparison::{
    new_selection, CareHomeNarrowing, CareHomeSelection,
};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ComparisonState {
    pub catalog: Vec<CareHome>,
    pub selection: CareHomeSelection,
    pub narrowing: CareHomeNarrowing,
}

impl Default for ComparisonState {
    fn default() -> Self {
        Self {
            catalog: builtin_care_homes().into_records(),
            selection: new_selection(),
            narrowing: CareHomeNarrowing::default(),
        }
    }
}

pub fn create_state() -> RwSignal<ComparisonState> {
    RwSignal::new(ComparisonState::default())
}
