//! Read-only record sources behind the listing and comparison views.
//!
//! Filtering, paging and selection only ever see a slice of records, so the
//! built-in data can be swapped for a network-backed source without touching
//! that logic.

/// Read-only source of catalog records.
pub trait CatalogSource {
    type Record: Clone;

    /// All records, in catalog order.
    fn records(&self) -> &[Self::Record];

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

/// Catalog held in memory, loaded once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticCatalog<T> {
    records: Vec<T>,
}

impl<T: Clone> StaticCatalog<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

impl<T: Clone> CatalogSource for StaticCatalog<T> {
    type Record = T;

    fn records(&self) -> &[T] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_catalog_preserves_order() {
        let catalog = StaticCatalog::new(vec![3, 1, 2]);
        assert_eq!(catalog.records(), &[3, 1, 2]);
        assert!(!catalog.is_empty());
        assert!(StaticCatalog::<u8>::default().is_empty());
    }
}
