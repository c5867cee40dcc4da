//! Project color registry
//!
//! The single aggregation point for every color sighting. Records are keyed by
//! [`IdentityKey`] rather than by structural hashing of the variant, since a
//! literal and a single-mode asset color of the same value share one record.

use std::collections::HashMap;

use crate::model::ColorVariant;
use crate::model::IdentityKey;
use crate::model::ProjectColorRecord;

/// Outcome of [`ColorRegistry::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The color was new; holds its position.
    Added(usize),
    /// The color was already known and got merged; holds its position.
    Merged(usize),
}

/// Insert-or-merge map from color identity to record.
///
/// Iteration follows first-seen order. Mutation needs `&mut self`, so a
/// registry has exactly one writer at a time; concurrent producers must
/// serialize their inserts.
///
/// # Example
///
/// ```
/// use usedcolors_lib::ColorRegistry;
/// use usedcolors_lib::model::{ColorVariant, NormalizedColor, ProjectColorRecord};
///
/// let mut registry = ColorRegistry::new();
/// let red = NormalizedColor::rgba(1.0, 0.0, 0.0, 1.0);
/// registry.insert(ProjectColorRecord::new(red.clone()).with_path("/app/A.swift"));
/// registry.insert(ProjectColorRecord::new(red).with_path("/app/B.swift"));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ColorRegistry {
    records: Vec<ProjectColorRecord>,
    index: HashMap<IdentityKey, usize>,
}

impl ColorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, or merges it into the record of the same color.
    pub fn insert(&mut self, record: ProjectColorRecord) -> Insertion {
        let key = record.variant.identity();
        if let Some(&position) = self.index.get(&key) {
            self.records[position].merge(record);
            return Insertion::Merged(position);
        }

        let position = self.records.len();
        self.records.push(record);
        self.index.insert(key, position);
        Insertion::Added(position)
    }

    /// Returns the record for a color, if it has been seen.
    pub fn get(&self, variant: &ColorVariant) -> Option<&ProjectColorRecord> {
        self.index
            .get(&variant.identity())
            .map(|&position| &self.records[position])
    }

    /// Returns `true` if the color has been seen.
    pub fn contains(&self, variant: &ColorVariant) -> bool {
        self.index.contains_key(&variant.identity())
    }

    /// Returns the number of distinct colors.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectColorRecord> {
        self.records.iter()
    }

    /// Returns the records in first-seen order.
    pub fn records(&self) -> &[ProjectColorRecord] {
        &self.records
    }

    /// Consumes the registry, returning the records in first-seen order.
    pub fn into_records(self) -> Vec<ProjectColorRecord> {
        self.records
    }
}

impl Extend<ProjectColorRecord> for ColorRegistry {
    fn extend<T: IntoIterator<Item = ProjectColorRecord>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}
