//! Category/operation tables supplied at configuration time.
//!
//! A [`CategoryTable`] describes which operations a deployment offers,
//! grouped by category. It drives both catalog-backed sections and the
//! compact palette.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{ModelError, Result};

/// One operation inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSpec {
    pub opcode: String,
    /// Whether the operation is part of the novice palette.
    #[serde(default)]
    pub novice: bool,
}

impl OperationSpec {
    pub fn new(opcode: impl Into<String>) -> Self {
        Self {
            opcode: opcode.into(),
            novice: false,
        }
    }

    pub fn novice(opcode: impl Into<String>) -> Self {
        Self {
            opcode: opcode.into(),
            novice: true,
        }
    }
}

/// A category with its display attributes and operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub id: String,
    /// Localized display name.
    pub name: String,
    pub colour: String,
    pub secondary_colour: String,
    #[serde(default)]
    pub operations: Vec<OperationSpec>,
}

impl CategorySpec {
    /// Operations shown to novices: the flagged subset, or everything when
    /// the table flags none.
    pub fn novice_operations(&self) -> Vec<&OperationSpec> {
        let flagged: Vec<&OperationSpec> = self.operations.iter().filter(|op| op.novice).collect();
        if flagged.is_empty() {
            self.operations.iter().collect()
        } else {
            flagged
        }
    }
}

/// Ordered list of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    pub categories: Vec<CategorySpec>,
}

impl CategoryTable {
    pub fn new(categories: Vec<CategorySpec>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategorySpec> {
        self.categories.iter()
    }

    pub fn get(&self, id: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Check that ids are non-empty and unique and every operation has an
    /// opcode.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for category in &self.categories {
            if category.id.trim().is_empty() {
                return Err(ModelError::InvalidCategory {
                    id: category.id.clone(),
                    reason: "empty id".to_string(),
                });
            }
            if !seen.insert(category.id.as_str()) {
                return Err(ModelError::InvalidCategory {
                    id: category.id.clone(),
                    reason: "duplicate id".to_string(),
                });
            }
            if let Some(op) = category
                .operations
                .iter()
                .find(|op| op.opcode.trim().is_empty())
            {
                return Err(ModelError::InvalidCategory {
                    id: category.id.clone(),
                    reason: format!("operation with empty opcode (novice = {})", op.novice),
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CategoryTable {
    type Item = &'a CategorySpec;
    type IntoIter = std::slice::Iter<'a, CategorySpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, operations: Vec<OperationSpec>) -> CategorySpec {
        CategorySpec {
            id: id.to_string(),
            name: id.to_uppercase(),
            colour: "#000000".to_string(),
            secondary_colour: "#111111".to_string(),
            operations,
        }
    }

    #[test]
    fn novice_operations_fall_back_to_all() {
        let unflagged = category("a", vec![OperationSpec::new("x"), OperationSpec::new("y")]);
        assert_eq!(unflagged.novice_operations().len(), 2);

        let flagged = category(
            "b",
            vec![OperationSpec::novice("x"), OperationSpec::new("y")],
        );
        let ops: Vec<&str> = flagged
            .novice_operations()
            .iter()
            .map(|op| op.opcode.as_str())
            .collect();
        assert_eq!(ops, vec!["x"]);
    }

    #[test]
    fn validate_rejects_duplicates() {
        let table = CategoryTable::new(vec![category("a", vec![]), category("a", vec![])]);
        assert!(matches!(
            table.validate(),
            Err(ModelError::InvalidCategory { reason, .. }) if reason == "duplicate id"
        ));
    }

    #[test]
    fn validate_rejects_empty_opcode() {
        let table = CategoryTable::new(vec![category("a", vec![OperationSpec::new(" ")])]);
        assert!(table.validate().is_err());
    }
}
