//! Browsing state machine: filter selection, page state and the loaded
//! catalog, kept consistent across intents.
//!
//! Every intent returns an [`Outcome`]. Intents that cannot apply (wrong
//! phase, unmapped argument, out-of-range page, nothing changed) leave the
//! state untouched and report [`Outcome::Ignored`]; they are never errors.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::LoadError;
use crate::filter::FilterSelection;
use crate::geography::GeographyIndex;
use crate::paginate::{paginate, Paged};
use crate::record::Record;
use crate::PAGE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    List,
    Table,
    Card,
}

impl ViewMode {
    /// Maps the numeric value carried by the view-mode radio inputs.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::List),
            1 => Some(Self::Table),
            2 => Some(Self::Card),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Table => "table",
            Self::Card => "card",
        }
    }
}

/// `current_page` is 1-based and lies in `1..=total_pages` whenever
/// `total_pages > 0`; it is 0 exactly when there are no pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub view_mode: ViewMode,
}

impl PageState {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 0,
            page_size: page_size.max(1),
            total_pages: 0,
            view_mode: ViewMode::List,
        }
    }

    fn reconcile(&mut self, total_pages: usize) {
        self.total_pages = total_pages;
        self.current_page = if total_pages == 0 {
            0
        } else {
            self.current_page.clamp(1, total_pages)
        };
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
    geography: GeographyIndex,
}

impl Catalog {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        let geography = GeographyIndex::build(&records);
        Self { records, geography }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn geography(&self) -> &GeographyIndex {
        &self.geography
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Pending,
    Failed(LoadError),
    Loaded(Catalog),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed; render. `scroll` asks the shell to bring the main
    /// content region into view.
    Applied { scroll: bool },
    Ignored(IgnoredIntent),
}

impl Outcome {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredIntent {
    NotLoaded,
    AlreadyRequested,
    AlreadyLoaded,
    SameViewMode,
    SamePage,
    PageOutOfRange { page: usize, total_pages: usize },
    NoRegionSelected,
    UnknownRegion,
    UnknownSubRegion,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controller {
    status: LoadStatus,
    selection: FilterSelection,
    page: PageState,
}

impl Controller {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            status: LoadStatus::Idle,
            selection: FilterSelection::default(),
            page: PageState::new(page_size),
        }
    }

    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    #[must_use]
    pub fn page_state(&self) -> PageState {
        self.page
    }

    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.status {
            LoadStatus::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.catalog().is_some()
    }

    /// The derived view for the current selection, `None` until loaded.
    #[must_use]
    pub fn paged(&self) -> Option<Paged<'_>> {
        self.catalog()
            .map(|c| paginate(c.records(), &self.selection, self.page.page_size))
    }

    /// Records on the current page; empty when unloaded or nothing matched.
    #[must_use]
    pub fn current_page_records(&self) -> Vec<&Record> {
        self.paged()
            .and_then(|p| p.page(self.page.current_page).map(<[_]>::to_vec))
            .unwrap_or_default()
    }

    /// Only an idle controller may start the fetch; there is a single attempt.
    pub fn begin_load(&mut self) -> Outcome {
        match self.status {
            LoadStatus::Idle => {
                self.status = LoadStatus::Pending;
                Outcome::Applied { scroll: false }
            }
            LoadStatus::Loaded(_) => Outcome::Ignored(IgnoredIntent::AlreadyLoaded),
            LoadStatus::Pending | LoadStatus::Failed(_) => {
                Outcome::Ignored(IgnoredIntent::AlreadyRequested)
            }
        }
    }

    #[instrument(skip_all, fields(records = records.len()))]
    pub fn on_load_succeeded(&mut self, records: Vec<Record>) -> Outcome {
        if self.is_loaded() {
            return Outcome::Ignored(IgnoredIntent::AlreadyLoaded);
        }

        self.status = LoadStatus::Loaded(Catalog::new(records));
        self.selection = FilterSelection::default();
        self.page.view_mode = ViewMode::List;
        self.page.current_page = 1;
        self.recompute();
        Outcome::Applied { scroll: false }
    }

    /// Browsing state is left alone; only the failure is remembered.
    pub fn on_load_failed(&mut self, error: LoadError) -> Outcome {
        if self.is_loaded() {
            return Outcome::Ignored(IgnoredIntent::AlreadyLoaded);
        }
        self.status = LoadStatus::Failed(error);
        Outcome::Applied { scroll: false }
    }

    pub fn select_view_mode(&mut self, mode: ViewMode) -> Outcome {
        if !self.is_loaded() {
            return Outcome::Ignored(IgnoredIntent::NotLoaded);
        }
        if self.page.view_mode == mode {
            return Outcome::Ignored(IgnoredIntent::SameViewMode);
        }
        self.page.view_mode = mode;
        self.recompute();
        Outcome::Applied { scroll: false }
    }

    pub fn select_region(&mut self, region: Option<String>) -> Outcome {
        let Some(catalog) = self.catalog() else {
            return Outcome::Ignored(IgnoredIntent::NotLoaded);
        };
        if let Some(region) = &region {
            if !catalog.geography().contains_region(region) {
                return Outcome::Ignored(IgnoredIntent::UnknownRegion);
            }
        }

        self.selection.set_region(region);
        self.page.current_page = 1;
        self.recompute();
        Outcome::Applied { scroll: false }
    }

    pub fn select_sub_region(&mut self, sub_region: Option<String>) -> Outcome {
        let Some(catalog) = self.catalog() else {
            return Outcome::Ignored(IgnoredIntent::NotLoaded);
        };
        let Some(region) = self.selection.region() else {
            return Outcome::Ignored(IgnoredIntent::NoRegionSelected);
        };
        if let Some(sub_region) = &sub_region {
            if !catalog.geography().contains(region, sub_region) {
                return Outcome::Ignored(IgnoredIntent::UnknownSubRegion);
            }
        }

        self.selection.set_sub_region(sub_region);
        self.page.current_page = 1;
        self.recompute();
        Outcome::Applied { scroll: false }
    }

    pub fn select_page(&mut self, page: usize) -> Outcome {
        if !self.is_loaded() {
            return Outcome::Ignored(IgnoredIntent::NotLoaded);
        }
        let total_pages = self.page.total_pages;
        if page == 0 || page > total_pages {
            return Outcome::Ignored(IgnoredIntent::PageOutOfRange { page, total_pages });
        }
        if page == self.page.current_page {
            return Outcome::Ignored(IgnoredIntent::SamePage);
        }

        self.page.current_page = page;
        self.recompute();
        Outcome::Applied { scroll: true }
    }

    fn recompute(&mut self) {
        let total_pages = self.paged().map_or(0, |p| p.total_pages());
        self.page.reconcile(total_pages);
    }
}
