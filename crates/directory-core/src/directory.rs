//! In-memory directory state: full list, displayed list and view parameters
//!
//! The displayed list is a pure function of the full list, the search term
//! and the sort order. Every operation that changes one of those calls
//! [`Directory::refresh_view`], so readers never see a stale view.

use tracing::{debug, info, warn};

use crate::error::DirectoryError;
use crate::mapping::FieldMapping;
use crate::models::User;
use crate::traits::UserSource;
use crate::view::{filter_and_sort, SortOrder};

/// What the renderer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState<'a> {
    /// A load is in flight
    Loading,
    /// The last load failed; the error's message is what gets shown
    Failed(&'a DirectoryError),
    /// The displayed list is current
    Ready,
}

/// Users plus the view parameters that derive the displayed list
///
/// A new directory reports [`ViewState::Loading`] until its first load
/// completes, successfully or not.
#[derive(Debug)]
pub struct Directory {
    mapping: FieldMapping,
    users: Vec<User>,
    displayed: Vec<User>,
    search: String,
    sort_order: SortOrder,
    loading: bool,
    error: Option<DirectoryError>,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new(FieldMapping::default())
    }
}

impl Directory {
    pub fn new(mapping: FieldMapping) -> Self {
        Self {
            mapping,
            users: Vec::new(),
            displayed: Vec::new(),
            search: String::new(),
            sort_order: SortOrder::default(),
            loading: true,
            error: None,
        }
    }

    /// Start with a given sort order instead of ascending
    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Load users from `source`, replacing the current list on success
    ///
    /// On failure the error message is recorded and the existing list is left
    /// as it was. The loading flag is cleared on both paths.
    pub fn load(&mut self, source: &dyn UserSource) {
        self.loading = true;
        debug!(source = %source.describe(), "loading users");

        match source.fetch_users() {
            Ok(records) => {
                self.users = self.mapping.normalize_all(&records);
                self.error = None;
                info!(count = self.users.len(), "loaded users");
                self.refresh_view();
            }
            Err(e) => {
                warn!(error = %e, "failed to load users");
                self.error = Some(e);
            }
        }

        self.loading = false;
    }

    /// Replace the search term and recompute the view
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.refresh_view();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.refresh_view();
    }

    /// Flip between ascending and descending
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.set_sort_order(self.sort_order.toggled());
        self.sort_order
    }

    /// Recompute the displayed list from the current inputs
    pub fn refresh_view(&mut self) {
        self.displayed = filter_and_sort(&self.users, &self.search, self.sort_order);
    }

    pub fn state(&self) -> ViewState<'_> {
        if self.loading {
            ViewState::Loading
        } else if let Some(err) = &self.error {
            ViewState::Failed(err)
        } else {
            ViewState::Ready
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn displayed(&self) -> &[User] {
        &self.displayed
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&DirectoryError> {
        self.error.as_ref()
    }
}
