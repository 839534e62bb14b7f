use crate::error::Error;

/// Running average as a `(sum, count)` pair.
///
/// Merging two means behaves as if every underlying sample had been
/// inserted into one accumulator; merge is commutative and associative,
/// so partial aggregates can be combined in any completion order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Mean {
    sum: f64,
    count: u64,
}

impl Mean {
    pub fn new() -> Self {
        Mean::default()
    }

    pub fn insert(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn merge(&mut self, other: Mean) {
        self.sum += other.sum;
        self.count += other.count;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// The average itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMean`] when nothing was aggregated.
    pub fn average(&self) -> Result<f64, Error> {
        if self.count == 0 {
            return Err(Error::EmptyMean);
        }
        Ok(self.sum / self.count as f64)
    }
}

impl Extend<f64> for Mean {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<f64> for Mean {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut mean = Mean::new();
        mean.extend(iter);
        mean
    }
}
