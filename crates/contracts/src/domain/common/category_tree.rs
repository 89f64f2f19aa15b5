//! Typed view of the backend's category-nested listings.
//!
//! Listing endpoints return objects keyed by category name, nested down to
//! sub-subcategory, with arrays of rows at the leaves:
//!
//! ```json
//! {"Sprzęt diagnostyczny": {"null": [{"sprzet_id": 1, "sprzet_nazwa": "Termometr"}]}}
//! ```
//!
//! A `"null"` (or empty) key means "no grouping at this level": the node
//! exists but renders no header.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const NULL_GROUP_KEY: &str = "null";

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNode<T> {
    /// `None` for the backend's `"null"` group
    pub label: Option<String>,
    pub children: Vec<CategoryNode<T>>,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTree<T> {
    pub roots: Vec<CategoryNode<T>>,
}

/// One line of the flattened table: a group header or an item row.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRow<T> {
    Group { depth: usize, label: String },
    Item { depth: usize, item: T },
}

impl<T> Default for CategoryTree<T> {
    fn default() -> Self {
        Self { roots: Vec::new() }
    }
}

fn normalize_label(key: String) -> Option<String> {
    let trimmed = key.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NULL_GROUP_KEY) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<T: DeserializeOwned> CategoryNode<T> {
    fn from_entry(key: String, value: Value) -> Result<Self, String> {
        let label = normalize_label(key);
        let mut node = CategoryNode {
            label,
            children: Vec::new(),
            items: Vec::new(),
        };

        match value {
            Value::Array(rows) => {
                node.items = rows
                    .into_iter()
                    .map(serde_json::from_value::<T>)
                    .collect::<Result<Vec<T>, _>>()
                    .map_err(|e| {
                        format!(
                            "Invalid row in group '{}': {}",
                            node.label.as_deref().unwrap_or(NULL_GROUP_KEY),
                            e
                        )
                    })?;
            }
            Value::Object(map) => {
                node.children = map
                    .into_iter()
                    .map(|(k, v)| CategoryNode::from_entry(k, v))
                    .collect::<Result<Vec<_>, _>>()?;
            }
            Value::Null => {}
            other => {
                return Err(format!(
                    "Expected object or array in group '{}', got {}",
                    node.label.as_deref().unwrap_or(NULL_GROUP_KEY),
                    json_kind(&other)
                ))
            }
        }

        Ok(node)
    }
}

impl<T: DeserializeOwned> CategoryTree<T> {
    pub fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Object(map) => {
                let roots = map
                    .into_iter()
                    .map(|(k, v)| CategoryNode::from_entry(k, v))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self { roots })
            }
            // A flat array is accepted as a single ungrouped node
            Value::Array(_) => {
                let root = CategoryNode::from_entry(NULL_GROUP_KEY.to_string(), value)?;
                Ok(Self { roots: vec![root] })
            }
            Value::Null => Ok(Self::default()),
            other => Err(format!(
                "Expected category object, got {}",
                json_kind(&other)
            )),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for CategoryTree<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        CategoryTree::from_value(value).map_err(D::Error::custom)
    }
}

impl<T> CategoryNode<T> {
    /// True if this node or any descendant holds an item matching `pred`
    pub fn any_match<F>(&self, pred: &F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().any(pred) || self.children.iter().any(|c| c.any_match(pred))
    }

    fn collect_items<'a>(&'a self, out: &mut Vec<&'a T>) {
        out.extend(self.items.iter());
        for child in &self.children {
            child.collect_items(out);
        }
    }

    fn find<F>(&self, pred: &F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.items
            .iter()
            .find(|item| pred(*item))
            .or_else(|| self.children.iter().find_map(|c| c.find(pred)))
    }

    pub fn item_count(&self) -> usize {
        self.items.len() + self.children.iter().map(|c| c.item_count()).sum::<usize>()
    }
}

impl<T: Clone> CategoryNode<T> {
    fn filtered<F>(&self, pred: &F) -> Option<CategoryNode<T>>
    where
        F: Fn(&T) -> bool,
    {
        if !self.any_match(pred) {
            return None;
        }
        Some(CategoryNode {
            label: self.label.clone(),
            children: self
                .children
                .iter()
                .filter_map(|c| c.filtered(pred))
                .collect(),
            items: self.items.iter().filter(|i| pred(*i)).cloned().collect(),
        })
    }

    fn push_rows(&self, depth: usize, out: &mut Vec<DisplayRow<T>>) {
        // Unlabelled groups render their content at the parent's depth
        let content_depth = match &self.label {
            Some(label) => {
                out.push(DisplayRow::Group {
                    depth,
                    label: label.clone(),
                });
                depth + 1
            }
            None => depth,
        };
        for item in &self.items {
            out.push(DisplayRow::Item {
                depth: content_depth,
                item: item.clone(),
            });
        }
        for child in &self.children {
            child.push_rows(content_depth, out);
        }
    }
}

impl<T> CategoryTree<T> {
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    pub fn item_count(&self) -> usize {
        self.roots.iter().map(|r| r.item_count()).sum()
    }

    /// All items, depth-first in backend order
    pub fn items(&self) -> Vec<&T> {
        let mut out = Vec::new();
        for root in &self.roots {
            root.collect_items(&mut out);
        }
        out
    }

    pub fn find<F>(&self, pred: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.roots.iter().find_map(|r| r.find(&pred))
    }

    /// Items grouped under their top-level category label.
    ///
    /// Ungrouped top-level content is reported under `fallback_label`.
    pub fn by_top_category<'a>(&'a self, fallback_label: &'a str) -> Vec<(&'a str, Vec<&'a T>)> {
        self.roots
            .iter()
            .map(|root| {
                let mut items = Vec::new();
                root.collect_items(&mut items);
                (root.label.as_deref().unwrap_or(fallback_label), items)
            })
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }
}

impl<T: Clone> CategoryTree<T> {
    /// Prune the tree to items matching `pred`; a group survives only if
    /// at least one descendant item matches.
    pub fn filtered<F>(&self, pred: F) -> CategoryTree<T>
    where
        F: Fn(&T) -> bool,
    {
        CategoryTree {
            roots: self.roots.iter().filter_map(|r| r.filtered(&pred)).collect(),
        }
    }

    pub fn display_rows(&self) -> Vec<DisplayRow<T>> {
        let mut out = Vec::new();
        for root in &self.roots {
            root.push_rows(0, &mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        id: i64,
        name: String,
    }

    fn sample() -> CategoryTree<Row> {
        serde_json::from_str(
            r#"{
                "Leki przeciwbólowe": {
                    "Doustne": {
                        "Tabletki": [{"id": 1, "name": "Paracetamol"}],
                        "null": [{"id": 2, "name": "Ibuprofen"}]
                    },
                    "null": [{"id": 3, "name": "Ketonal"}]
                },
                "Opatrunki": {
                    "null": [{"id": 4, "name": "Bandaż"}, {"id": 5, "name": "Gaza"}]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_keeps_backend_order() {
        let tree = sample();
        assert_eq!(tree.roots.len(), 2);
        assert_eq!(tree.roots[0].label.as_deref(), Some("Leki przeciwbólowe"));
        assert_eq!(tree.roots[1].label.as_deref(), Some("Opatrunki"));
        assert_eq!(tree.item_count(), 5);
        let ids: Vec<i64> = tree.items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_null_group_has_no_header() {
        let tree: CategoryTree<Row> =
            serde_json::from_str(r#"{"Sprzęt diagnostyczny": {"null": [{"id": 1, "name": "Termometr"}]}}"#)
                .unwrap();
        let rows = tree.display_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            DisplayRow::Group {
                depth: 0,
                label: "Sprzęt diagnostyczny".to_string()
            }
        );
        assert!(matches!(&rows[1], DisplayRow::Item { depth: 1, item } if item.id == 1));
    }

    #[test]
    fn test_filter_drops_groups_without_matches() {
        let tree = sample();
        let filtered = tree.filtered(|r| r.name.to_lowercase().contains("gaz"));
        assert_eq!(filtered.roots.len(), 1);
        assert_eq!(filtered.roots[0].label.as_deref(), Some("Opatrunki"));
        assert_eq!(filtered.item_count(), 1);
    }

    #[test]
    fn test_filter_reaches_third_level() {
        let tree = sample();
        let filtered = tree.filtered(|r| r.id == 1);
        let rows = filtered.display_rows();
        let labels: Vec<String> = rows
            .iter()
            .filter_map(|r| match r {
                DisplayRow::Group { label, .. } => Some(label.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["Leki przeciwbólowe", "Doustne", "Tabletki"]);
        assert_eq!(filtered.item_count(), 1);
    }

    #[test]
    fn test_filter_matching_everything_is_identity() {
        let tree = sample();
        assert_eq!(tree.filtered(|_| true), tree);
        assert!(tree.filtered(|_| false).roots.is_empty());
    }

    #[test]
    fn test_find_and_top_category_grouping() {
        let tree = sample();
        assert_eq!(tree.find(|r| r.id == 3).map(|r| r.name.as_str()), Some("Ketonal"));
        assert!(tree.find(|r| r.id == 99).is_none());

        let grouped = tree.by_top_category("Inne");
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, "Leki przeciwbólowe");
        assert_eq!(grouped[0].1.len(), 3);
    }

    #[test]
    fn test_flat_array_and_null_body() {
        let flat: CategoryTree<Row> =
            serde_json::from_str(r#"[{"id": 7, "name": "Strzykawka"}]"#).unwrap();
        assert_eq!(flat.item_count(), 1);
        assert_eq!(flat.display_rows().len(), 1);

        let empty: CategoryTree<Row> = serde_json::from_str("null").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_invalid_shapes_are_errors() {
        assert!(serde_json::from_str::<CategoryTree<Row>>(r#"{"A": 5}"#).is_err());
        assert!(serde_json::from_str::<CategoryTree<Row>>(r#"{"A": [{"id": "x"}]}"#).is_err());
        assert!(serde_json::from_str::<CategoryTree<Row>>(r#""text""#).is_err());
    }
}
