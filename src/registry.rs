//! Ordered resistor registry.
//!
//! The registry keeps every resistor of the series circuit sorted ascending
//! by label. Labels are unique, case-sensitive keys; order is enforced at
//! insertion, never by an after-the-fact sort. Backed by a sorted `Vec` with
//! exclusive ownership of its entries.

use crate::error::{OhmlineError, Result};
use std::cmp::Ordering;

/// Maximum accepted label length in bytes.
pub const MAX_LABEL_LEN: usize = 32;

/// A labeled resistor in the series circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResistorEntry {
    pub label: String,
    /// Resistance in ohms.
    pub resistance: i64,
}

/// Ordered collection of resistors, ascending by label, unique labels.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<ResistorEntry>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of resistors currently registered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a resistor at the position that keeps labels ascending.
    ///
    /// A single linear scan locates the first entry whose label compares
    /// greater (front and append cases included). Fails with `DuplicateLabel`
    /// if the label is already present and with `InvalidLabel` if the label
    /// is empty or longer than [`MAX_LABEL_LEN`]; the registry is unchanged
    /// on failure. The resistance sign is not restricted here.
    pub fn insert(&mut self, label: &str, resistance: i64) -> Result<()> {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return Err(OhmlineError::InvalidLabel(label.to_string()));
        }

        let mut pos = self.entries.len();
        for (idx, entry) in self.entries.iter().enumerate() {
            match entry.label.as_str().cmp(label) {
                Ordering::Less => continue,
                Ordering::Equal => {
                    return Err(OhmlineError::DuplicateLabel(label.to_string()));
                }
                Ordering::Greater => {
                    pos = idx;
                    break;
                }
            }
        }

        self.entries.insert(
            pos,
            ResistorEntry {
                label: label.to_string(),
                resistance,
            },
        );
        Ok(())
    }

    /// Remove the resistor with the given label and return it.
    ///
    /// Fails with `NotFound` when the label is absent (including on an empty
    /// registry); the registry is unchanged on failure.
    pub fn remove(&mut self, label: &str) -> Result<ResistorEntry> {
        match self.entries.iter().position(|e| e.label == label) {
            Some(idx) => Ok(self.entries.remove(idx)),
            None => Err(OhmlineError::NotFound(label.to_string())),
        }
    }

    /// Look up a resistor by label. O(n) scan, no mutation.
    pub fn find(&self, label: &str) -> Option<&ResistorEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Sum of all resistances in ohms. 0 for an empty registry.
    pub fn total_resistance(&self) -> i64 {
        self.entries.iter().map(|e| e.resistance).sum()
    }

    /// Ascending traversal. Each call starts a fresh iteration.
    pub fn iter(&self) -> impl Iterator<Item = &ResistorEntry> {
        self.entries.iter()
    }

    /// Drain every entry in ascending order, leaving the registry empty.
    /// Used for the shutdown report.
    pub fn clear(&mut self) -> impl Iterator<Item = ResistorEntry> + '_ {
        self.entries.drain(..)
    }
}
