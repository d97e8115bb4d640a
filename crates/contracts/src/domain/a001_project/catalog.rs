use super::aggregate::ProjectRecord;
use super::category::{extract_categories, Category};
use super::detail::DetailView;

/// What the click handler must do with the browser event after
/// [`CatalogState::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemActivation {
    /// Detail view opened; suppress navigation and scroll the detail in.
    ShowDetail,
    /// Leave the click to the browser.
    FollowLink,
}

/// State of one project list instance: its records, the category bar,
/// the active filter and the inline detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    records: Vec<ProjectRecord>,
    categories: Vec<Category>,
    active: Category,
    detail: DetailView,
}

impl CatalogState {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        let categories = extract_categories(&records);
        Self {
            records,
            categories,
            active: Category::All,
            detail: DetailView::Hidden,
        }
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn active(&self) -> &Category {
        &self.active
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records passing the active filter with their index in [`Self::records`].
    pub fn visible(&self) -> Vec<(usize, &ProjectRecord)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.active.matches(r))
            .collect()
    }

    /// Switch filter. Re-selecting the active category gives the same list;
    /// any selection closes the detail view.
    pub fn select(&mut self, category: Category) {
        self.active = category;
        self.detail = DetailView::Hidden;
    }

    pub fn reset(&mut self) {
        self.select(Category::All);
    }

    pub fn close_detail(&mut self) {
        self.detail = DetailView::Hidden;
    }

    /// Handle a click on the record at `index`.
    ///
    /// `anchor_exists` reports whether the page has an element with the
    /// given id; links to missing sections fall through to the browser.
    pub fn activate(
        &mut self,
        index: usize,
        anchor_exists: impl Fn(&str) -> bool,
    ) -> ItemActivation {
        let Some(record) = self.records.get(index) else {
            return ItemActivation::FollowLink;
        };

        match DetailView::for_record(record) {
            Some(DetailView::Section { anchor_id }) if !anchor_exists(&anchor_id) => {
                ItemActivation::FollowLink
            }
            Some(detail) => {
                self.detail = detail;
                ItemActivation::ShowDetail
            }
            None => ItemActivation::FollowLink,
        }
    }
}
