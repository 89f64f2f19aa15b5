use crate::shared::lenient;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flat catalog row: categories reference their parent by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(deserialize_with = "lenient::int")]
    pub id: i64,

    #[serde(rename = "nazwa")]
    pub name: String,

    #[serde(rename = "rodzic_id", default, deserialize_with = "lenient::opt_int")]
    pub parent_id: Option<i64>,
}

/// Category catalog with an id index, feeding the cascading selectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryCatalog {
    records: Vec<CategoryRecord>,
    index: HashMap<i64, usize>,
}

impl CategoryCatalog {
    pub fn new(records: Vec<CategoryRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(pos, r)| (r.id, pos))
            .collect();
        Self { records, index }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&CategoryRecord> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    pub fn name_of(&self, id: Option<i64>) -> Option<&str> {
        id.and_then(|id| self.get(id)).map(|r| r.name.as_str())
    }

    /// Top-level categories. A dangling parent id counts as top level.
    pub fn roots(&self) -> Vec<&CategoryRecord> {
        self.records
            .iter()
            .filter(|r| match r.parent_id {
                None => true,
                Some(pid) => !self.index.contains_key(&pid),
            })
            .collect()
    }

    pub fn children_of(&self, parent: i64) -> Vec<&CategoryRecord> {
        self.records
            .iter()
            .filter(|r| r.parent_id == Some(parent))
            .collect()
    }

    /// Options for the subcategory selector of the given selection
    pub fn subcategory_options(&self, selection: &CategorySelection) -> Vec<&CategoryRecord> {
        selection
            .category
            .map(|id| self.children_of(id))
            .unwrap_or_default()
    }

    /// Options for the sub-subcategory selector of the given selection
    pub fn sub_subcategory_options(&self, selection: &CategorySelection) -> Vec<&CategoryRecord> {
        selection
            .subcategory
            .map(|id| self.children_of(id))
            .unwrap_or_default()
    }
}

/// Cascading category choice used by add-new and edit forms.
///
/// Changing a level clears every level below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySelection {
    pub category: Option<i64>,
    pub subcategory: Option<i64>,
    pub sub_subcategory: Option<i64>,
}

impl CategorySelection {
    pub fn new(
        category: Option<i64>,
        subcategory: Option<i64>,
        sub_subcategory: Option<i64>,
    ) -> Self {
        Self {
            category,
            subcategory,
            sub_subcategory,
        }
    }

    pub fn set_category(&mut self, category: Option<i64>) {
        if self.category != category {
            self.category = category;
            self.subcategory = None;
            self.sub_subcategory = None;
        }
    }

    pub fn set_subcategory(&mut self, subcategory: Option<i64>) {
        if self.subcategory != subcategory {
            self.subcategory = subcategory;
            self.sub_subcategory = None;
        }
    }

    pub fn set_sub_subcategory(&mut self, sub_subcategory: Option<i64>) {
        self.sub_subcategory = sub_subcategory;
    }
}

/// Parse a `<select>` value: empty string means "nothing selected"
pub fn parse_select_value(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str, parent_id: Option<i64>) -> CategoryRecord {
        CategoryRecord {
            id,
            name: name.to_string(),
            parent_id,
        }
    }

    fn catalog() -> CategoryCatalog {
        CategoryCatalog::new(vec![
            record(1, "Leki przeciwbólowe", None),
            record(2, "Opatrunki", None),
            record(10, "Doustne", Some(1)),
            record(11, "Iniekcje", Some(1)),
            record(100, "Tabletki", Some(10)),
            record(7, "Osierocona", Some(999)),
        ])
    }

    #[test]
    fn test_index_lookup() {
        let c = catalog();
        assert_eq!(c.name_of(Some(11)), Some("Iniekcje"));
        assert_eq!(c.name_of(Some(5)), None);
        assert_eq!(c.name_of(None), None);
    }

    #[test]
    fn test_roots_include_dangling_parents() {
        let ids: Vec<i64> = catalog().roots().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 7]);
    }

    #[test]
    fn test_options_follow_selection() {
        let c = catalog();
        let mut sel = CategorySelection::default();
        assert!(c.subcategory_options(&sel).is_empty());

        sel.set_category(Some(1));
        let subs: Vec<i64> = c.subcategory_options(&sel).iter().map(|r| r.id).collect();
        assert_eq!(subs, vec![10, 11]);

        sel.set_subcategory(Some(10));
        let subsubs: Vec<i64> = c.sub_subcategory_options(&sel).iter().map(|r| r.id).collect();
        assert_eq!(subsubs, vec![100]);
    }

    #[test]
    fn test_changing_category_clears_lower_levels() {
        let mut sel = CategorySelection::new(Some(1), Some(10), Some(100));
        sel.set_category(Some(2));
        assert_eq!(sel, CategorySelection::new(Some(2), None, None));

        let mut sel = CategorySelection::new(Some(1), Some(10), Some(100));
        sel.set_category(None);
        assert_eq!(sel, CategorySelection::default());
    }

    #[test]
    fn test_changing_subcategory_clears_sub_subcategory() {
        let mut sel = CategorySelection::new(Some(1), Some(10), Some(100));
        sel.set_subcategory(Some(11));
        assert_eq!(sel, CategorySelection::new(Some(1), Some(11), None));
    }

    #[test]
    fn test_reselecting_same_value_keeps_children() {
        let mut sel = CategorySelection::new(Some(1), Some(10), Some(100));
        sel.set_category(Some(1));
        assert_eq!(sel, CategorySelection::new(Some(1), Some(10), Some(100)));
    }

    #[test]
    fn test_parse_select_value() {
        assert_eq!(parse_select_value("12"), Some(12));
        assert_eq!(parse_select_value(""), None);
        assert_eq!(parse_select_value("abc"), None);
    }
}
