//! Document model: point labels and the ordered in-memory point store.
//!
//! Points are keyed by a [`Label`] handed out in creation order (`A`, `B`, …).
//! The store keeps insertion order because it carries meaning: consecutive
//! points are joined by segments, and the first and last close the polygon.
//! The renderer and the measurement pass read the store through `iter`.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Letters in the label alphabet.
const ALPHABET_LEN: usize = 26;

/// Identity of a point, derived from its creation index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Label for the `index`-th created point.
    ///
    /// `0..26` map to `A..Z`. Past the alphabet the sequence continues the way
    /// spreadsheet columns do: `AA`, `AB`, … `ZZ`, `AAA`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_index(index: usize) -> Self {
        let mut letters = Vec::new();
        let mut n = index + 1;
        while n > 0 {
            let rem = (n - 1) % ALPHABET_LEN;
            letters.push(char::from(b'A' + rem as u8));
            n = (n - 1) / ALPHABET_LEN;
        }
        Self(letters.into_iter().rev().collect())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Ordered store of labelled points.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: IndexMap<Label, Point>,
    /// Count of points ever created since the last clear.
    created: usize,
}

impl PointStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new point under the next unused label and return that label.
    pub fn push(&mut self, point: Point) -> Label {
        let label = Label::from_index(self.created);
        self.created += 1;
        self.points.insert(label.clone(), point);
        label
    }

    /// Overwrite the coordinates of an existing point. Returns false if the
    /// label is unknown.
    pub fn set(&mut self, label: &Label, point: Point) -> bool {
        let Some(slot) = self.points.get_mut(label) else {
            return false;
        };
        *slot = point;
        true
    }

    /// Position of the point with `label`.
    #[must_use]
    pub fn get(&self, label: &Label) -> Option<Point> {
        self.points.get(label).copied()
    }

    /// Remove every point and restart labelling at `A`.
    pub fn clear(&mut self) {
        self.points.clear();
        self.created = 0;
    }

    /// Labelled points in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, Point)> {
        self.points.iter().map(|(label, point)| (label, *point))
    }

    /// Labels in creation order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.points.keys()
    }

    /// Positions in creation order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.points.values().copied().collect()
    }

    /// First and last point by creation order.
    #[must_use]
    pub fn ends(&self) -> Option<((&Label, Point), (&Label, Point))> {
        let (fl, fp) = self.points.first()?;
        let (ll, lp) = self.points.last()?;
        Some(((fl, *fp), (ll, *lp)))
    }

    /// Number of points in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the store holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
