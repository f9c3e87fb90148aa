use crate::filter::FilterSelection;
use crate::record::Record;

/// The filtered dataset split into pages. Borrowed from the loaded records
/// and rebuilt on every recompute, never cached.
#[derive(Debug, Clone)]
pub struct Paged<'a> {
    filtered: Vec<&'a Record>,
    page_size: usize,
}

/// Filters `records` by `selection` and partitions the result into pages of
/// `page_size`, preserving order. Always starts from the full sequence.
#[must_use]
pub fn paginate<'a>(
    records: &'a [Record],
    selection: &FilterSelection,
    page_size: usize,
) -> Paged<'a> {
    let filtered = records.iter().filter(|r| selection.matches(r)).collect();
    Paged {
        filtered,
        page_size: page_size.max(1),
    }
}

impl<'a> Paged<'a> {
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Empty input yields no pages at all, not one empty page.
    pub fn pages(&self) -> impl Iterator<Item = &[&'a Record]> {
        self.filtered.chunks(self.page_size)
    }

    /// 1-based page lookup.
    #[must_use]
    pub fn page(&self, number: usize) -> Option<&[&'a Record]> {
        let index = number.checked_sub(1)?;
        self.pages().nth(index)
    }
}
