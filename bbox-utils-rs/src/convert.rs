use ndarray::{Array, ArrayView, Axis, Dimension};

use crate::BoxShapeError;

/// Checks that the trailing axis holds a 4-component box and returns it.
fn box_axis<D: Dimension>(boxes: &ArrayView<'_, f32, D>) -> Result<Axis, BoxShapeError> {
    match boxes.shape().last() {
        Some(&4) => Ok(Axis(boxes.ndim() - 1)),
        Some(&n) => Err(BoxShapeError::TrailingDimension(n)),
        None => Err(BoxShapeError::TrailingDimension(0)),
    }
}

/// Converts corner-form boxes `[x_min, y_min, x_max, y_max]` to center form
/// `[x_center, y_center, width, height]`.
///
/// Only the trailing axis (length 4) is interpreted; any leading axes are
/// preserved, so batched inputs of shape `(..., 4)` work unchanged.
pub fn to_center_form<D: Dimension>(
    boxes: ArrayView<'_, f32, D>,
) -> Result<Array<f32, D>, BoxShapeError> {
    let axis = box_axis(&boxes)?;
    let mut out = boxes.to_owned();
    for mut lane in out.lanes_mut(axis) {
        let (x_min, y_min, x_max, y_max) = (lane[0], lane[1], lane[2], lane[3]);
        lane[0] = (x_min + x_max) / 2.0;
        lane[1] = (y_min + y_max) / 2.0;
        lane[2] = x_max - x_min;
        lane[3] = y_max - y_min;
    }
    Ok(out)
}

/// Converts center-form boxes `[x_center, y_center, width, height]` to corner
/// form `[x_min, y_min, x_max, y_max]`. Inverse of [`to_center_form`] up to
/// floating-point rounding.
pub fn to_corner_form<D: Dimension>(
    boxes: ArrayView<'_, f32, D>,
) -> Result<Array<f32, D>, BoxShapeError> {
    let axis = box_axis(&boxes)?;
    let mut out = boxes.to_owned();
    for mut lane in out.lanes_mut(axis) {
        let (x_center, y_center, width, height) = (lane[0], lane[1], lane[2], lane[3]);
        lane[0] = x_center - width / 2.0;
        lane[1] = y_center - height / 2.0;
        lane[2] = x_center + width / 2.0;
        lane[3] = y_center + height / 2.0;
    }
    Ok(out)
}

/// Swaps the x and y axes of every box: `(a, b, c, d)` becomes `(b, a, d, c)`.
/// Works on either encoding since it only permutes components.
pub fn swap_xy<D: Dimension>(
    boxes: ArrayView<'_, f32, D>,
) -> Result<Array<f32, D>, BoxShapeError> {
    let axis = box_axis(&boxes)?;
    let mut out = boxes.to_owned();
    for mut lane in out.lanes_mut(axis) {
        lane.swap(0, 1);
        lane.swap(2, 3);
    }
    Ok(out)
}
