pub mod aggregate;
pub mod catalog;
pub mod category;
pub mod detail;
pub mod link;

pub use aggregate::ProjectRecord;
pub use catalog::{CatalogState, ItemActivation};
pub use category::{extract_categories, filter_by_category, normalize_tag, Category};
pub use detail::{DetailView, PlaceholderDetail};
pub use link::LinkTarget;
