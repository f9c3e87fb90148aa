use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Menu value the input surface uses for "no selection".
pub const NONE_VALUE: &str = "none";

/// Two-level geography filter. A sub-region only means something under a
/// region, so [`FilterSelection::sub_region`] reports `None` whenever no
/// region is set, whatever was stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    region: Option<String>,
    sub_region: Option<String>,
}

impl FilterSelection {
    #[must_use]
    pub fn new(region: Option<String>, sub_region: Option<String>) -> Self {
        Self { region, sub_region }
    }

    /// Parses a `<select>` value, mapping the `"none"` sentinel (and blanks)
    /// to `None`.
    #[must_use]
    pub fn menu_value(value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() || value == NONE_VALUE {
            None
        } else {
            Some(value.to_string())
        }
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    #[must_use]
    pub fn sub_region(&self) -> Option<&str> {
        self.region.as_ref()?;
        self.sub_region.as_deref()
    }

    /// Changing the region always drops the sub-region.
    pub fn set_region(&mut self, region: Option<String>) {
        self.region = region;
        self.sub_region = None;
    }

    pub fn set_sub_region(&mut self, sub_region: Option<String>) {
        self.sub_region = sub_region;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.region.is_some()
    }

    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        let Some(region) = self.region() else {
            return true;
        };
        if record.region != region {
            return false;
        }
        match self.sub_region() {
            Some(sub_region) => record.sub_region == sub_region,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_sentinel_maps_to_no_selection() {
        assert_eq!(FilterSelection::menu_value("none"), None);
        assert_eq!(FilterSelection::menu_value("  "), None);
        assert_eq!(
            FilterSelection::menu_value("臺北市"),
            Some("臺北市".to_string())
        );
    }

    #[test]
    fn sub_region_is_ignored_without_region() {
        let selection = FilterSelection::new(None, Some("Xinyi".into()));
        assert_eq!(selection.sub_region(), None);
        assert!(selection.matches(&Record::new("Taichung", "Beitun", "x")));
    }

    #[test]
    fn setting_region_clears_sub_region() {
        let mut selection = FilterSelection::new(Some("Taipei".into()), Some("Xinyi".into()));
        selection.set_region(Some("Taichung".into()));
        assert_eq!(selection.region(), Some("Taichung"));
        assert_eq!(selection.sub_region(), None);
    }

    #[test]
    fn matches_both_levels() {
        let selection = FilterSelection::new(Some("Taipei".into()), Some("Xinyi".into()));
        assert!(selection.matches(&Record::new("Taipei", "Xinyi", "a")));
        assert!(!selection.matches(&Record::new("Taipei", "Daan", "b")));
        assert!(!selection.matches(&Record::new("Taichung", "Xinyi", "c")));

        let region_only = FilterSelection::new(Some("Taipei".into()), None);
        assert!(region_only.matches(&Record::new("Taipei", "Daan", "b")));
    }
}
