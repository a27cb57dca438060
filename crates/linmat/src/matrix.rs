use std::fmt;
use std::str::FromStr;

use crate::error::LinalgError;
use crate::vector::Vector;

/// A dense matrix stored as a sequence of equal-length row vectors.
///
/// Column vectors are never stored: [`Matrix::get_column_vector`] and
/// [`Matrix::column_vectors`] gather one entry per row on every call.
///
/// Like [`Vector`], a matrix is a value. Structural edits such as
/// [`Matrix::delete_row_vector`] return a new matrix.
///
/// NOTE: [`Matrix::row_length`] is the number of entries per row (the width)
/// and [`Matrix::column_length`] is the number of rows (the height).
///
/// # Example
///
/// ```
/// use linmat::Matrix;
///
/// let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a.determinant().unwrap(), -2.0);
/// assert_eq!(a.power(0).unwrap(), Matrix::identity(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    rows: Vec<Vector>,
}

impl Matrix {
    /// Create a matrix from its rows.
    ///
    /// # Errors
    ///
    /// [`LinalgError::RaggedRows`] if the rows do not all have the same length.
    pub fn new(rows: Vec<Vector>) -> Result<Self, LinalgError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
                return Err(LinalgError::RaggedRows {
                    row,
                    expected,
                    actual: r.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// The `size`x`size` identity matrix.
    pub fn identity(size: usize) -> Self {
        let rows = (0..size)
            .map(|i| {
                (0..size)
                    .map(|j| if i == j { 1.0 } else { 0.0 })
                    .collect::<Vector>()
            })
            .collect();
        Self { rows }
    }

    /// A `rows`x`cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![Vector::zeros(cols); rows],
        }
    }

    /// Number of entries per row, i.e. the width. Zero for a matrix without rows.
    pub fn row_length(&self) -> usize {
        self.rows.first().map_or(0, Vector::len)
    }

    /// Number of rows, i.e. the height.
    pub fn column_length(&self) -> usize {
        self.rows.len()
    }

    fn shape(&self) -> Vec<usize> {
        vec![self.column_length(), self.row_length()]
    }

    /// Whether the matrix has as many rows as entries per row.
    pub fn is_square(&self) -> bool {
        self.row_length() == self.column_length()
    }

    /// Whether every row is (approximately) zero, see [`Vector::is_zero`].
    pub fn is_zero(&self) -> bool {
        self.rows.iter().all(Vector::is_zero)
    }

    /// The stored rows.
    pub fn row_vectors(&self) -> &[Vector] {
        &self.rows
    }

    /// Materialize every column as a new vector.
    pub fn column_vectors(&self) -> Vec<Vector> {
        (0..self.row_length()).map(|i| self.column(i)).collect()
    }

    fn column(&self, index: usize) -> Vector {
        self.rows.iter().map(|row| row[index]).collect()
    }

    fn check_row(&self, op: &'static str, index: usize) -> Result<(), LinalgError> {
        if index < self.column_length() {
            Ok(())
        } else {
            Err(LinalgError::IndexOutOfRange {
                op,
                index,
                len: self.column_length(),
            })
        }
    }

    fn check_column(&self, op: &'static str, index: usize) -> Result<(), LinalgError> {
        if index < self.row_length() {
            Ok(())
        } else {
            Err(LinalgError::IndexOutOfRange {
                op,
                index,
                len: self.row_length(),
            })
        }
    }

    fn check_square(&self, op: &'static str) -> Result<(), LinalgError> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinalgError::NonSquare {
                op,
                rows: self.column_length(),
                cols: self.row_length(),
            })
        }
    }

    fn check_same_shape(&self, op: &'static str, other: &Matrix) -> Result<(), LinalgError> {
        if self.row_length() != other.row_length() || self.column_length() != other.column_length()
        {
            return Err(LinalgError::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(())
    }

    /// Read the entry at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Result<f64, LinalgError> {
        self.check_row("get", row)?;
        self.check_column("get", col)?;
        Ok(self.rows[row][col])
    }

    /// The row at `index`.
    pub fn get_row_vector(&self, index: usize) -> Result<&Vector, LinalgError> {
        self.check_row("get_row_vector", index)?;
        Ok(&self.rows[index])
    }

    /// Return a copy with the row at `index` replaced.
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfRange`] for a bad index and
    /// [`LinalgError::DimensionMismatch`] if `row` does not have `row_length` entries.
    pub fn set_row_vector(&self, index: usize, row: Vector) -> Result<Matrix, LinalgError> {
        self.check_row("set_row_vector", index)?;
        if row.len() != self.row_length() {
            return Err(LinalgError::DimensionMismatch {
                op: "set_row_vector",
                lhs: vec![self.row_length()],
                rhs: vec![row.len()],
            });
        }
        let mut rows = self.rows.clone();
        rows[index] = row;
        Ok(Matrix { rows })
    }

    /// Return a copy without the row at `index`.
    pub fn delete_row_vector(&self, index: usize) -> Result<Matrix, LinalgError> {
        self.check_row("delete_row_vector", index)?;
        let mut rows = self.rows.clone();
        rows.remove(index);
        Ok(Matrix { rows })
    }

    /// Gather the `index`-th entry of every row.
    pub fn get_column_vector(&self, index: usize) -> Result<Vector, LinalgError> {
        self.check_column("get_column_vector", index)?;
        Ok(self.column(index))
    }

    /// Return a copy whose `index`-th column is `column`, scattered one entry per row.
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfRange`] for a bad index and
    /// [`LinalgError::DimensionMismatch`] if `column` does not have `column_length` entries.
    pub fn set_column_vector(&self, index: usize, column: Vector) -> Result<Matrix, LinalgError> {
        self.check_column("set_column_vector", index)?;
        if column.len() != self.column_length() {
            return Err(LinalgError::DimensionMismatch {
                op: "set_column_vector",
                lhs: vec![self.column_length()],
                rhs: vec![column.len()],
            });
        }
        let rows = self
            .rows
            .iter()
            .zip(column.iter())
            .map(|(row, &value)| row.set(index, value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix { rows })
    }

    /// Return a copy with the `index`-th entry removed from every row.
    pub fn delete_column_vector(&self, index: usize) -> Result<Matrix, LinalgError> {
        self.check_column("delete_column_vector", index)?;
        let rows = self
            .rows
            .iter()
            .map(|row| row.delete(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix { rows })
    }

    /// The submatrix with `row` and `col` removed.
    pub fn minor_matrix(&self, row: usize, col: usize) -> Result<Matrix, LinalgError> {
        self.check_row("minor_matrix", row)?;
        self.check_column("minor_matrix", col)?;
        Ok(self.submatrix(row, col))
    }

    // indices must be in range
    fn submatrix(&self, row: usize, col: usize) -> Matrix {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != row)
            .map(|(_, r)| {
                r.iter()
                    .enumerate()
                    .filter(|(j, _)| *j != col)
                    .map(|(_, &v)| v)
                    .collect::<Vector>()
            })
            .collect();
        Matrix { rows }
    }

    /// A matrix whose rows are the columns of this one.
    pub fn transpose(&self) -> Matrix {
        Matrix {
            rows: self.column_vectors(),
        }
    }

    /// Determinant by Laplace expansion along the first row.
    ///
    /// The cost is factorial in the size of the matrix. The empty matrix has
    /// determinant 1.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NonSquare`] if the matrix is not square.
    pub fn determinant(&self) -> Result<f64, LinalgError> {
        self.check_square("determinant")?;
        log::trace!(
            "determinant: expanding a {}x{} matrix",
            self.column_length(),
            self.row_length()
        );
        Ok(self.laplace_determinant())
    }

    // requires a square matrix
    fn laplace_determinant(&self) -> f64 {
        match self.column_length() {
            0 => 1.0,
            1 => self.rows[0][0],
            2 => self.rows[0][0] * self.rows[1][1] - self.rows[0][1] * self.rows[1][0],
            n => (0..n)
                .map(|col| {
                    sign(col) * self.rows[0][col] * self.submatrix(0, col).laplace_determinant()
                })
                .sum(),
        }
    }

    /// The matrix of signed minors: entry (i, j) is `(-1)^(i+j)` times the
    /// determinant of the submatrix without row i and column j.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NonSquare`] if the matrix is not square.
    pub fn cofactor_matrix(&self) -> Result<Matrix, LinalgError> {
        self.check_square("cofactor_matrix")?;
        Ok(self.cofactors())
    }

    fn cofactors(&self) -> Matrix {
        let n = self.column_length();
        let rows = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| sign(i + j) * self.submatrix(i, j).laplace_determinant())
                    .collect::<Vector>()
            })
            .collect();
        Matrix { rows }
    }

    /// The transpose of the cofactor matrix.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NonSquare`] if the matrix is not square.
    pub fn adjoint(&self) -> Result<Matrix, LinalgError> {
        self.check_square("adjoint")?;
        Ok(self.cofactors().transpose())
    }

    /// The inverse, `adjoint / determinant`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NonSquare`] if the matrix is not square and
    /// [`LinalgError::Singular`] if its determinant is zero.
    pub fn inverse(&self) -> Result<Matrix, LinalgError> {
        self.check_square("inverse")?;
        let det = self.laplace_determinant();
        log::debug!("inverse: determinant is {}", det);
        if det == 0.0 {
            return Err(LinalgError::Singular { op: "inverse" });
        }
        Ok(self.cofactors().transpose().scale(1.0 / det))
    }

    /// Row-wise sum.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] unless both the number of rows and the
    /// row lengths match.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        self.check_same_shape("add", other)?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a.add(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix { rows })
    }

    /// Row-wise difference, computed as `self + other * -1`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] unless both dimensions match.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        self.check_same_shape("subtract", other)?;
        self.add(&other.scale(-1.0))
    }

    /// Multiply every entry by `scalar`.
    pub fn scale(&self, scalar: f64) -> Matrix {
        Matrix {
            rows: self.rows.iter().map(|row| row.scale(scalar)).collect(),
        }
    }

    /// Matrix product: entry (i, j) is the dot product of row i of `self`
    /// and column j of `other`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] unless `self.row_length() == other.column_length()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        if self.row_length() != other.column_length() {
            return Err(LinalgError::DimensionMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let columns = other.column_vectors();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| row.dot(col))
                    .collect::<Result<Vector, _>>()
            })
            .collect::<Result<Vec<Vector>, _>>()?;
        Ok(Matrix { rows })
    }

    /// Integer power by repeated squaring.
    ///
    /// `A^0` is the identity, `A^1` is `A` itself and a negative exponent
    /// raises the inverse: `A^-n = (A^-1)^n`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NonSquare`] for a non-square matrix and any exponent
    /// other than 1, [`LinalgError::Singular`] for a negative exponent on a
    /// singular matrix.
    pub fn power(&self, exponent: i32) -> Result<Matrix, LinalgError> {
        if exponent == 1 {
            return Ok(self.clone());
        }
        self.check_square("power")?;

        if exponent < 0 {
            let inverse = self
                .inverse()
                .map_err(|_| LinalgError::Singular { op: "power" })?;
            return inverse.power_unsigned(exponent.unsigned_abs());
        }
        self.power_unsigned(exponent.unsigned_abs())
    }

    // requires a square matrix
    fn power_unsigned(&self, exponent: u32) -> Result<Matrix, LinalgError> {
        match exponent {
            0 => Ok(Matrix::identity(self.column_length())),
            1 => Ok(self.clone()),
            e if e % 2 == 0 => {
                log::debug!("power: squaring for exponent {}", e);
                self.multiply(self)?.power_unsigned(e / 2)
            }
            e => self.multiply(&self.power_unsigned(e - 1)?),
        }
    }

    /// Same shape and every entry within `epsilon` of its counterpart.
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.column_length() == other.column_length()
            && self
                .rows
                .iter()
                .zip(other.rows.iter())
                .all(|(a, b)| a.approx_eq(b, epsilon))
    }
}

#[inline]
fn sign(index: usize) -> f64 {
    if index % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Matrix {
    fn from(rows: [[f64; C]; R]) -> Self {
        Self {
            rows: rows.into_iter().map(Vector::from).collect(),
        }
    }
}

impl std::ops::Index<usize> for Matrix {
    type Output = Vector;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl std::ops::Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, row)?,
                None => write!(f, "{}", row)?,
            }
        }
        Ok(())
    }
}

impl FromStr for Matrix {
    type Err = LinalgError;

    /// Parse rows separated by `;` or newlines; blank rows are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split([';', '\n'])
            .filter(|row| !row.trim().is_empty())
            .map(str::parse::<Vector>)
            .collect::<Result<Vec<_>, _>>()?;
        Matrix::new(rows)
    }
}
