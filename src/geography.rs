use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Region → distinct sub-regions, both kept in the order they first appear
/// in the data so the filter menus follow the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeographyIndex {
    entries: Vec<RegionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub region: String,
    pub sub_regions: Vec<String>,
}

impl GeographyIndex {
    #[must_use]
    pub fn build(records: &[Record]) -> Self {
        let mut entries: Vec<RegionEntry> = Vec::new();

        for record in records {
            match entries.iter_mut().find(|e| e.region == record.region) {
                Some(entry) => {
                    if !entry.sub_regions.contains(&record.sub_region) {
                        entry.sub_regions.push(record.sub_region.clone());
                    }
                }
                None => entries.push(RegionEntry {
                    region: record.region.clone(),
                    sub_regions: vec![record.sub_region.clone()],
                }),
            }
        }

        Self { entries }
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.region.as_str())
    }

    #[must_use]
    pub fn sub_regions(&self, region: &str) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.region == region)
            .map(|e| e.sub_regions.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn contains_region(&self, region: &str) -> bool {
        self.entries.iter().any(|e| e.region == region)
    }

    #[must_use]
    pub fn contains(&self, region: &str, sub_region: &str) -> bool {
        self.sub_regions(region).iter().any(|s| s == sub_region)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
