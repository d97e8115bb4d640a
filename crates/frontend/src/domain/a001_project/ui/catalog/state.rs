use contracts::domain::a001_project::{CatalogState, ProjectRecord};
use leptos::prelude::*;

/// Fresh state for one catalog instance. Instances never share it.
pub fn create_state(projects: Vec<ProjectRecord>) -> RwSignal<CatalogState> {
    RwSignal::new(CatalogState::new(projects))
}
