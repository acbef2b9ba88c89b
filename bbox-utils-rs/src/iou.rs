use ndarray::{Array2, ArrayView2};

use crate::{BoxShapeError, CenterBox};

/// Floor applied to the union area so degenerate (zero-area) pairs divide by
/// a small positive number instead of zero.
pub const UNION_EPSILON: f32 = 1e-8;

/// Computes the pairwise IoU matrix for two sets of center-form boxes.
///
/// `first` has shape `(N, 4)` and `second` has shape `(M, 4)`, each row being
/// `[x_center, y_center, width, height]`. The result has shape `(N, M)` with
/// entry `(i, j)` holding the IoU of `first[i]` and `second[j]`, always in
/// `[0, 1]`. Empty inputs yield a matrix with the matching zero dimension.
pub fn pairwise_iou<'a>(
    first: ArrayView2<'a, f32>,
    second: ArrayView2<'a, f32>,
) -> Result<Array2<f32>, BoxShapeError> {
    for boxes in [&first, &second] {
        if boxes.ncols() != 4 {
            return Err(BoxShapeError::TrailingDimension(boxes.ncols()));
        }
    }

    let mut matrix = Array2::zeros((first.nrows(), second.nrows()));
    for (i, row) in first.outer_iter().enumerate() {
        let a = CenterBox {
            x_center: row[0],
            y_center: row[1],
            width: row[2],
            height: row[3],
        };
        for (j, row) in second.outer_iter().enumerate() {
            let b = CenterBox {
                x_center: row[0],
                y_center: row[1],
                width: row[2],
                height: row[3],
            };
            matrix[[i, j]] = a.iou(&b);
        }
    }
    Ok(matrix)
}
