//! Matrix rendering.

use gauss_linalg::Matrix;
use gauss_scalar::Scalar;

/// Renders an augmented matrix with right-aligned columns and a `│` before
/// the constant column.
///
/// ```text
/// ⎡  1 -2 │   3 ⎤
/// ⎣ 10  5 │ 6/7 ⎦
/// ```
///
/// A single row uses plain `[ ]` brackets. Lines are joined by `\n` with no
/// trailing newline.
#[must_use]
pub fn format_matrix<S: Scalar>(matrix: &Matrix<S>) -> String {
    let cells: Vec<Vec<String>> = matrix
        .rows()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let mut widths = vec![0; matrix.num_cols()];
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let last = cells.len() - 1;
    let mut lines = Vec::with_capacity(cells.len());
    for (index, row) in cells.iter().enumerate() {
        let (left, right) = brackets(index, last);
        let mut line = String::from(left);
        for (col, (cell, &width)) in row.iter().zip(&widths).enumerate() {
            if col == matrix.constant_col() {
                line.push_str(" │");
            }
            line.push(' ');
            line.push_str(&format!("{cell:>width$}"));
        }
        line.push(' ');
        line.push(right);
        lines.push(line);
    }
    lines.join("\n")
}

fn brackets(index: usize, last: usize) -> (char, char) {
    match (index, last) {
        (_, 0) => ('[', ']'),
        (0, _) => ('⎡', '⎤'),
        (i, l) if i == l => ('⎣', '⎦'),
        _ => ('⎢', '⎥'),
    }
}
