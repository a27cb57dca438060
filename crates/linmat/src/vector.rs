use std::fmt;
use std::str::FromStr;

use crate::error::LinalgError;
use crate::matrix::Matrix;

/// Squared magnitude at or below which a vector counts as zero.
pub const ZERO_EPSILON: f64 = 1e-3;

/// A fixed-length, ordered sequence of `f64` entries.
///
/// Vectors are values: every operation returns a new vector and leaves the
/// receiver untouched. The length is fixed by the constructor and only changes
/// through [`Vector::delete`], which yields a shorter copy.
///
/// # Example
///
/// ```
/// use linmat::Vector;
///
/// let a = Vector::from([1.0, 0.0, 0.0]);
/// let b = Vector::from([0.0, 1.0, 0.0]);
/// assert_eq!(a.dot(&b).unwrap(), 0.0);
/// assert_eq!(a.cross(&b).unwrap(), Vector::from([0.0, 0.0, 1.0]));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vector {
    entries: Vec<f64>,
}

impl Vector {
    /// Create a vector that takes ownership of `entries`.
    pub fn new(entries: Vec<f64>) -> Self {
        Self { entries }
    }

    /// Create a vector of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![0.0; len])
    }

    /// The number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vector has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.entries
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.entries.iter()
    }

    /// Consume the vector and return its entries.
    pub fn into_vec(self) -> Vec<f64> {
        self.entries
    }

    fn check_index(&self, op: &'static str, index: usize) -> Result<(), LinalgError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(LinalgError::IndexOutOfRange {
                op,
                index,
                len: self.len(),
            })
        }
    }

    fn check_same_len(&self, op: &'static str, other: &Vector) -> Result<(), LinalgError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(LinalgError::DimensionMismatch {
                op,
                lhs: vec![self.len()],
                rhs: vec![other.len()],
            })
        }
    }

    /// Read the entry at `index`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<f64, LinalgError> {
        self.check_index("get", index)?;
        Ok(self.entries[index])
    }

    /// Return a copy with the entry at `index` replaced by `value`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfRange`] if `index >= len`.
    pub fn set(&self, index: usize, value: f64) -> Result<Vector, LinalgError> {
        self.check_index("set", index)?;
        let mut entries = self.entries.clone();
        entries[index] = value;
        Ok(Vector::new(entries))
    }

    /// Return a copy one entry shorter, with the entry at `index` removed.
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfRange`] if `index >= len`.
    pub fn delete(&self, index: usize) -> Result<Vector, LinalgError> {
        self.check_index("delete", index)?;
        let mut entries = self.entries.clone();
        entries.remove(index);
        Ok(Vector::new(entries))
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] if the lengths differ.
    pub fn add(&self, other: &Vector) -> Result<Vector, LinalgError> {
        self.check_same_len("add", other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| a + b)
            .collect())
    }

    /// Element-wise difference, computed as `self + other * -1`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] if the lengths differ.
    pub fn subtract(&self, other: &Vector) -> Result<Vector, LinalgError> {
        self.check_same_len("subtract", other)?;
        self.add(&other.scale(-1.0))
    }

    /// Multiply every entry by `scalar`.
    pub fn scale(&self, scalar: f64) -> Vector {
        self.iter().map(|v| v * scalar).collect()
    }

    /// Sum of the element-wise products.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] if the lengths differ.
    pub fn dot(&self, other: &Vector) -> Result<f64, LinalgError> {
        self.check_same_len("dot", other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// Cross product of two 3-vectors.
    ///
    /// Expands the determinant of the matrix with rows `[1, 1, 1]`, `self` and
    /// `other` along its first row: component `i` is the minor obtained by
    /// deleting row 0 and column `i`, signed `+ - +`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::InvalidLength`] unless both operands have length 3.
    pub fn cross(&self, other: &Vector) -> Result<Vector, LinalgError> {
        for operand in [self, other] {
            if operand.len() != 3 {
                return Err(LinalgError::InvalidLength {
                    op: "cross",
                    expected: 3,
                    actual: operand.len(),
                });
            }
        }

        let expansion = Matrix::new(vec![Vector::from([1.0; 3]), self.clone(), other.clone()])?;

        let mut entries = Vec::with_capacity(3);
        for col in 0..3 {
            let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
            entries.push(sign * expansion.minor_matrix(0, col)?.determinant()?);
        }

        Ok(Vector::new(entries))
    }

    /// Squared Euclidean norm. Cheaper than [`Vector::magnitude`] for comparisons.
    pub fn sqr_magnitude(&self) -> f64 {
        self.iter().map(|v| v * v).sum()
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.sqr_magnitude().sqrt()
    }

    /// Approximate zero test: `sqr_magnitude() <= ZERO_EPSILON`.
    pub fn is_zero(&self) -> bool {
        self.sqr_magnitude() <= ZERO_EPSILON
    }

    /// Exact element-wise equality.
    pub fn equals(&self, other: &Vector) -> bool {
        self == other
    }

    /// `self` has the strictly smaller squared magnitude.
    pub fn less_than(&self, other: &Vector) -> bool {
        self.sqr_magnitude() < other.sqr_magnitude()
    }

    /// Neither equal to nor less than `other`.
    ///
    /// Not the converse of [`Vector::less_than`]: two distinct vectors with the
    /// same magnitude are each greater than the other.
    pub fn greater_than(&self, other: &Vector) -> bool {
        !self.equals(other) && !self.less_than(other)
    }

    /// `greater_than || equals`.
    pub fn greater_equal(&self, other: &Vector) -> bool {
        self.greater_than(other) || self.equals(other)
    }

    /// `less_than || equals`.
    pub fn lesser_equal(&self, other: &Vector) -> bool {
        self.less_than(other) || self.equals(other)
    }

    /// Same length and every entry within `epsilon` of its counterpart.
    pub fn approx_eq(&self, other: &Vector, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(entries: Vec<f64>) -> Self {
        Self::new(entries)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(entries: [f64; N]) -> Self {
        Self::new(entries.to_vec())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::ops::Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl std::ops::Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl fmt::Display for Vector {
    /// Renders `[v0, v1, ..., vn]`; a requested precision applies to every entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, v)?,
                None => write!(f, "{}", v)?,
            }
        }
        write!(f, "]")
    }
}

impl FromStr for Vector {
    type Err = LinalgError;

    /// Parse comma-separated numbers, optionally wrapped in brackets.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let body = s
            .strip_prefix('[')
            .and_then(|inner| inner.strip_suffix(']'))
            .unwrap_or(s);

        if body.trim().is_empty() {
            return Ok(Vector::default());
        }

        body.split(',')
            .map(|token| {
                let token = token.trim();
                token.parse::<f64>().map_err(|source| LinalgError::ParseEntry {
                    token: token.to_string(),
                    source,
                })
            })
            .collect()
    }
}
