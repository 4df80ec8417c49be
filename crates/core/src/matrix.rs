//! Nested-row artifacts into dense `ndarray` matrices.

use ndarray::Array2;

use crate::error::ModelError;

/// Build a matrix from nested rows, as exported by `ndarray.tolist()` and friends.
/// Empty input yields a 0x0 matrix. `name` identifies the artifact in errors.
pub fn from_rows(name: &'static str, rows: Vec<Vec<f64>>) -> Result<Array2<f64>, ModelError> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, Vec::len);
    let mut data = Vec::with_capacity(n_rows * n_cols);

    for (i, row) in rows.into_iter().enumerate() {
        if row.len() != n_cols {
            return Err(ModelError::RaggedRow {
                name,
                row: i,
                expected: n_cols,
                actual: row.len(),
            });
        }
        data.extend(row);
    }

    let actual = data.len();
    Array2::from_shape_vec((n_rows, n_cols), data).map_err(|_| ModelError::DataLength {
        name,
        rows: n_rows,
        cols: n_cols,
        expected: n_rows * n_cols,
        actual,
    })
}
