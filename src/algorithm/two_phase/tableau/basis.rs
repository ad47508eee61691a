//! # Basis partition
//!
//! The columns of a problem are partitioned into basic and nonbasic columns. Both sets are kept
//! sorted, such that scanning them in order gives the lowest index first, as Bland's rule
//! requires.
use index_utils::remove_indices;

use crate::error::{Error, Result};

/// Disjoint, sorted sets of basic and nonbasic column indices that together cover all columns.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Basis {
    nonbasic: Vec<usize>,
    basic: Vec<usize>,
}

impl Basis {
    /// The trailing `nr_rows` columns are basic.
    #[must_use]
    pub fn slack(nr_rows: usize, nr_columns: usize) -> Self {
        debug_assert!(nr_rows <= nr_columns);

        Self {
            nonbasic: (0..nr_columns - nr_rows).collect(),
            basic: (nr_columns - nr_rows..nr_columns).collect(),
        }
    }

    /// Create a partition from explicit sets, checking that they are well formed.
    ///
    /// The sets don't need to be sorted.
    ///
    /// # Errors
    ///
    /// `InvalidBase` if the sizes are not `(nr_columns - nr_rows, nr_rows)`, if an index is out of
    /// range, or if an index appears more than once (within or across the two sets).
    pub fn new(
        mut nonbasic: Vec<usize>,
        mut basic: Vec<usize>,
        nr_rows: usize,
        nr_columns: usize,
    ) -> Result<Self> {
        if basic.len() != nr_rows || nonbasic.len() + basic.len() != nr_columns {
            return Err(Error::InvalidBase(format!(
                "partition has {} nonbasic and {} basic indices, expected {} and {}",
                nonbasic.len(), basic.len(), nr_columns.saturating_sub(nr_rows), nr_rows,
            )));
        }

        nonbasic.sort_unstable();
        basic.sort_unstable();

        let mut seen = vec![false; nr_columns];
        for &j in nonbasic.iter().chain(&basic) {
            if j >= nr_columns {
                return Err(Error::InvalidBase(format!("index {} is out of range 0..{}", j, nr_columns)));
            }
            if seen[j] {
                return Err(Error::InvalidBase(format!("index {} appears more than once", j)));
            }
            seen[j] = true;
        }

        Ok(Self { nonbasic, basic })
    }

    /// Create a partition from the basic indices only, all other columns are nonbasic.
    ///
    /// # Errors
    ///
    /// `InvalidBase` if an index is out of range or repeated.
    pub fn from_basic(mut basic: Vec<usize>, nr_columns: usize) -> Result<Self> {
        basic.sort_unstable();
        if basic.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(Error::InvalidBase("basic indices are not unique".to_string()));
        }
        if basic.last().is_some_and(|&j| j >= nr_columns) {
            return Err(Error::InvalidBase(format!("basic index out of range 0..{}", nr_columns)));
        }

        let mut nonbasic = (0..nr_columns).collect::<Vec<_>>();
        remove_indices(&mut nonbasic, &basic);

        Ok(Self { nonbasic, basic })
    }

    /// Exchange a nonbasic column for a basic one.
    ///
    /// # Arguments
    ///
    /// * `entering`: Currently nonbasic column.
    /// * `leaving`: Currently basic column.
    pub fn swap(&mut self, entering: usize, leaving: usize) {
        debug_assert!(self.nonbasic.binary_search(&entering).is_ok());
        debug_assert!(self.basic.binary_search(&leaving).is_ok());

        if let Ok(position) = self.nonbasic.binary_search(&entering) {
            self.nonbasic.remove(position);
        }
        if let Err(position) = self.nonbasic.binary_search(&leaving) {
            self.nonbasic.insert(position, leaving);
        }

        if let Ok(position) = self.basic.binary_search(&leaving) {
            self.basic.remove(position);
        }
        if let Err(position) = self.basic.binary_search(&entering) {
            self.basic.insert(position, entering);
        }
    }

    /// Position of a basic column in the sorted basic set, which is also the row of the basis
    /// matrix that corresponds to it.
    #[must_use]
    pub fn position(&self, j: usize) -> Option<usize> {
        self.basic.binary_search(&j).ok()
    }

    /// Whether a column is basic.
    #[must_use]
    pub fn is_basic(&self, j: usize) -> bool {
        self.position(j).is_some()
    }

    /// Sorted basic column indices.
    #[must_use]
    pub fn basic(&self) -> &[usize] {
        &self.basic
    }

    /// Sorted nonbasic column indices.
    #[must_use]
    pub fn nonbasic(&self) -> &[usize] {
        &self.nonbasic
    }

    /// Number of columns covered by this partition.
    #[must_use]
    pub fn nr_columns(&self) -> usize {
        self.basic.len() + self.nonbasic.len()
    }

    /// Split into `(nonbasic, basic)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>) {
        (self.nonbasic, self.basic)
    }
}
