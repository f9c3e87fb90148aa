use serde::{Deserialize, Serialize};

use crate::controller::ViewMode;
use crate::error::LoadError;
use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Shell is up; kick off the one-shot dataset fetch.
    Start,

    // Fetch callbacks
    LoadSucceeded {
        records: Vec<Record>,
    },
    LoadFailed {
        error: LoadError,
    },

    // Intents from the input surface
    SelectViewMode {
        mode: ViewMode,
    },
    SelectRegion {
        region: Option<String>,
    },
    SelectSubRegion {
        sub_region: Option<String>,
    },
    SelectPage {
        page: usize,
    },
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::LoadSucceeded { .. } => "load_succeeded",
            Self::LoadFailed { .. } => "load_failed",
            Self::SelectViewMode { .. } => "select_view_mode",
            Self::SelectRegion { .. } => "select_region",
            Self::SelectSubRegion { .. } => "select_sub_region",
            Self::SelectPage { .. } => "select_page",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(
            self,
            Self::SelectViewMode { .. }
                | Self::SelectRegion { .. }
                | Self::SelectSubRegion { .. }
                | Self::SelectPage { .. }
        )
    }

    /// Builds a region intent from a raw `<select>` value.
    #[must_use]
    pub fn region_from_menu(value: &str) -> Self {
        Self::SelectRegion {
            region: crate::filter::FilterSelection::menu_value(value),
        }
    }

    #[must_use]
    pub fn sub_region_from_menu(value: &str) -> Self {
        Self::SelectSubRegion {
            sub_region: crate::filter::FilterSelection::menu_value(value),
        }
    }
}
