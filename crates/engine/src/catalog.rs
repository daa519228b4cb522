use serde::{Deserialize, Serialize};

/// One priced service/product from an imported price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub name: String,
    /// Free-form unit label, e.g. "M²", "kg", "vb".
    #[serde(default)]
    pub unit: String,
    pub unit_price: f64,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// The imported service catalog: an ordered sequence of entries.
///
/// Duplicates are permitted and order is preserved — the catalog mirrors the
/// source sheet. Lifecycle is replace-not-merge: one ingestion run builds the
/// whole set, a later import or an explicit clear discards it wholesale.
/// There is no incremental update path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
    entries: Vec<ServiceEntry>,
}

impl ServiceCatalog {
    pub fn from_entries(entries: Vec<ServiceEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ServiceEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceEntry> {
        self.entries.iter()
    }

    /// First entry with this exact name. Entries are looked up for the item
    /// picker; with duplicate names the earliest row wins.
    pub fn find_by_name(&self, name: &str) -> Option<&ServiceEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Swap the whole catalog for a freshly imported one.
    pub fn replace(&mut self, other: ServiceCatalog) {
        self.entries = other.entries;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a ServiceCatalog {
    type Item = &'a ServiceEntry;
    type IntoIter = std::slice::Iter<'a, ServiceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UnitItem;

    fn entry(name: &str, price: f64) -> ServiceEntry {
        ServiceEntry {
            name: name.into(),
            unit: "M²".into(),
            unit_price: price,
            scope: None,
        }
    }

    #[test]
    fn find_by_name_prefers_earliest_duplicate() {
        let catalog = ServiceCatalog::from_entries(vec![
            entry("Lapidação", 10.0),
            entry("Polimento", 20.0),
            entry("Lapidação", 99.0),
        ]);
        assert_eq!(catalog.find_by_name("Lapidação").unwrap().unit_price, 10.0);
    }

    #[test]
    fn replace_discards_previous_set() {
        let mut catalog = ServiceCatalog::from_entries(vec![entry("A", 1.0), entry("B", 2.0)]);
        catalog.replace(ServiceCatalog::from_entries(vec![entry("C", 3.0)]));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find_by_name("A").is_none());

        catalog.clear();
        assert!(catalog.is_empty());
    }

    #[test]
    fn items_copy_catalog_fields_by_value() {
        let mut catalog = ServiceCatalog::from_entries(vec![entry("Lapidação", 85.5)]);
        let item = UnitItem::from_catalog("i1", catalog.find_by_name("Lapidação").unwrap());
        assert_eq!(item.unit_price, 85.5);
        assert_eq!(item.unit, "M²");

        // Editing the catalog afterwards must not reach the created item.
        catalog.entries[0].unit_price = 999.0;
        catalog.entries[0].unit = "kg".into();
        assert_eq!(item.unit_price, 85.5);
        assert_eq!(item.unit, "M²");
    }
}
