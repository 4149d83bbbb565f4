//! Discrete state vectors and their domains.
//!
//! A [`State`] is a fixed-length vector of non-negative integers; variable
//! `i` takes values in `0..ranges[i]`. [`Ranges`] holds the domain sizes and
//! is validated once, when the problem is built.

use crate::error::{OptError, Result};

/// Domain sizes, one per variable.
///
/// Every entry is at least 1. Variables whose domain has a single value
/// can never change; [`Ranges::free_variables`] lists the others.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Ranges {
    sizes: Vec<usize>,
    free: Vec<usize>,
}

impl Ranges {
    /// Validates and wraps a vector of domain sizes.
    ///
    /// # Errors
    /// [`OptError::EmptyRanges`] for an empty vector,
    /// [`OptError::InvalidDomain`] for any size below 1.
    pub fn new(sizes: Vec<usize>) -> Result<Self> {
        if sizes.is_empty() {
            return Err(OptError::EmptyRanges);
        }
        if let Some((index, &size)) = sizes.iter().enumerate().find(|(_, &s)| s < 1) {
            return Err(OptError::InvalidDomain { index, size });
        }
        let free = sizes
            .iter()
            .enumerate()
            .filter(|(_, &s)| s > 1)
            .map(|(i, _)| i)
            .collect();
        Ok(Self { sizes, free })
    }

    /// `n` variables, each with `size` values.
    pub fn uniform(n: usize, size: usize) -> Result<Self> {
        Self::new(vec![size; n])
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Domain size of variable `i`.
    pub fn size(&self, i: usize) -> usize {
        self.sizes[i]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.sizes
    }

    /// Indices of the variables with more than one value.
    pub fn free_variables(&self) -> &[usize] {
        &self.free
    }

    /// Checks that `state` has the right length and every value is in range.
    pub fn check(&self, state: &State) -> Result<()> {
        if state.len() != self.len() {
            return Err(OptError::InvalidState {
                reason: format!("expected {} variables, got {}", self.len(), state.len()),
            });
        }
        for (i, (&v, &size)) in state.values().iter().zip(&self.sizes).enumerate() {
            if v >= size {
                return Err(OptError::InvalidState {
                    reason: format!("variable {i} has value {v}, domain size is {size}"),
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<usize>> for Ranges {
    type Error = OptError;

    fn try_from(sizes: Vec<usize>) -> Result<Self> {
        Self::new(sizes)
    }
}

impl From<Ranges> for Vec<usize> {
    fn from(ranges: Ranges) -> Self {
        ranges.sizes
    }
}

/// A candidate solution: one value per variable.
///
/// States are value objects. Operators return new states; nothing in the
/// crate mutates a state it did not create. The optional label is carried
/// along for callers and ignored by equality and hashing.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    values: Vec<usize>,
    label: Option<f64>,
}

impl State {
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            label: None,
        }
    }

    /// All-zero state of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self::new(vec![0; n])
    }

    pub fn with_label(mut self, label: f64) -> Self {
        self.label = Some(label);
        self
    }

    pub fn label(&self) -> Option<f64> {
        self.label
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, i: usize) -> usize {
        self.values[i]
    }

    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Returns a copy of this state with variable `i` set to `value`.
    pub fn with_value(&self, i: usize, value: usize) -> Self {
        let mut values = self.values.clone();
        values[i] = value;
        Self {
            values,
            label: self.label,
        }
    }

    pub fn into_values(self) -> Vec<usize> {
        self.values
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for State {}

impl std::hash::Hash for State {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl From<Vec<usize>> for State {
    fn from(values: Vec<usize>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_rejects_empty() {
        assert_eq!(Ranges::new(vec![]), Err(OptError::EmptyRanges));
    }

    #[test]
    fn test_ranges_rejects_zero_domain() {
        assert_eq!(
            Ranges::new(vec![2, 0, 3]),
            Err(OptError::InvalidDomain { index: 1, size: 0 })
        );
    }

    #[test]
    fn test_free_variables_skip_singletons() {
        let ranges = Ranges::new(vec![1, 3, 1, 2]).unwrap();
        assert_eq!(ranges.free_variables(), &[1, 3]);
    }

    #[test]
    fn test_check_state() {
        let ranges = Ranges::new(vec![2, 3]).unwrap();
        assert!(ranges.check(&State::new(vec![1, 2])).is_ok());
        assert!(ranges.check(&State::new(vec![1, 3])).is_err());
        assert!(ranges.check(&State::new(vec![1])).is_err());
    }

    #[test]
    fn test_equality_ignores_label() {
        let a = State::new(vec![0, 1, 2]).with_label(1.0);
        let b = State::new(vec![0, 1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, State::new(vec![0, 1, 1]));
    }

    #[test]
    fn test_with_value_leaves_original() {
        let a = State::zeros(3);
        let b = a.with_value(1, 4);
        assert_eq!(a.values(), &[0, 0, 0]);
        assert_eq!(b.values(), &[0, 4, 0]);
    }
}
