pub use convert::{swap_xy, to_center_form, to_corner_form};
pub use iou::{pairwise_iou, UNION_EPSILON};
mod convert;
mod iou;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoxShapeError {
    #[error("Trailing axis of a box array must have length 4, got {0}")]
    TrailingDimension(usize),
}

/// A box stored by its minimum and maximum coordinates:
/// `[x_min, y_min, x_max, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

/// A box stored by its center point and dimensions:
/// `[x_center, y_center, width, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterBox {
    pub x_center: f32,
    pub y_center: f32,
    pub width: f32,
    pub height: f32,
}

impl CornerBox {
    pub fn area(&self) -> f32 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }

    /// Area of the overlap with `other`, zero when the boxes are disjoint.
    pub fn intersection(&self, other: &CornerBox) -> f32 {
        let width = (self.x_max.min(other.x_max) - self.x_min.max(other.x_min)).max(0.0);
        let height = (self.y_max.min(other.y_max) - self.y_min.max(other.y_min)).max(0.0);
        width * height
    }

    pub fn union(&self, other: &CornerBox) -> f32 {
        self.area() + other.area() - self.intersection(other)
    }

    pub fn iou(&self, other: &CornerBox) -> f32 {
        let intersection = self.intersection(other);
        let union = self.union(other).max(UNION_EPSILON);
        (intersection / union).clamp(0.0, 1.0)
    }

    pub fn to_center(&self) -> CenterBox {
        CenterBox {
            x_center: (self.x_min + self.x_max) / 2.0,
            y_center: (self.y_min + self.y_max) / 2.0,
            width: self.x_max - self.x_min,
            height: self.y_max - self.y_min,
        }
    }

    /// Swaps the x and y axes of both corners.
    pub fn swap_xy(&self) -> CornerBox {
        CornerBox {
            x_min: self.y_min,
            y_min: self.x_min,
            x_max: self.y_max,
            y_max: self.x_max,
        }
    }
}

impl CenterBox {
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn to_corner(&self) -> CornerBox {
        CornerBox {
            x_min: self.x_center - self.width / 2.0,
            y_min: self.y_center - self.height / 2.0,
            x_max: self.x_center + self.width / 2.0,
            y_max: self.y_center + self.height / 2.0,
        }
    }

    /// Swaps the x and y axes of the center and the dimensions.
    pub fn swap_xy(&self) -> CenterBox {
        CenterBox {
            x_center: self.y_center,
            y_center: self.x_center,
            width: self.height,
            height: self.width,
        }
    }

    pub fn iou(&self, other: &CenterBox) -> f32 {
        let intersection = self.to_corner().intersection(&other.to_corner());
        // Own areas come from the stored dimensions, not the corners
        let union = (self.area() + other.area() - intersection).max(UNION_EPSILON);
        (intersection / union).clamp(0.0, 1.0)
    }
}

impl From<[f32; 4]> for CornerBox {
    fn from(v: [f32; 4]) -> Self {
        CornerBox {
            x_min: v[0],
            y_min: v[1],
            x_max: v[2],
            y_max: v[3],
        }
    }
}

impl From<CornerBox> for [f32; 4] {
    fn from(b: CornerBox) -> Self {
        [b.x_min, b.y_min, b.x_max, b.y_max]
    }
}

impl From<[f32; 4]> for CenterBox {
    fn from(v: [f32; 4]) -> Self {
        CenterBox {
            x_center: v[0],
            y_center: v[1],
            width: v[2],
            height: v[3],
        }
    }
}

impl From<CenterBox> for [f32; 4] {
    fn from(b: CenterBox) -> Self {
        [b.x_center, b.y_center, b.width, b.height]
    }
}

#[cfg(test)]
mod tests {
    use super::{CenterBox, CornerBox};

    #[test]
    fn typed_round_trip() {
        let center = CenterBox {
            x_center: 1.5,
            y_center: -2.0,
            width: 3.0,
            height: 0.5,
        };
        let back = center.to_corner().to_center();
        assert!((back.x_center - center.x_center).abs() < 1e-6);
        assert!((back.y_center - center.y_center).abs() < 1e-6);
        assert!((back.width - center.width).abs() < 1e-6);
        assert!((back.height - center.height).abs() < 1e-6);

        let corner = CornerBox {
            x_min: -1.0,
            y_min: 2.0,
            x_max: 4.0,
            y_max: 5.0,
        };
        assert_eq!(corner.to_center().to_corner(), corner);
    }

    #[test]
    fn swap_is_an_involution() {
        let corner = CornerBox {
            x_min: 1.0,
            y_min: 2.0,
            x_max: 3.0,
            y_max: 4.0,
        };
        assert_eq!(corner.swap_xy().swap_xy(), corner);
        assert_eq!(corner.swap_xy().x_min, 2.0);
        assert_eq!(corner.swap_xy().y_min, 1.0);

        let center = CenterBox {
            x_center: 5.0,
            y_center: 6.0,
            width: 7.0,
            height: 8.0,
        };
        assert_eq!(center.swap_xy().swap_xy(), center);
    }

    #[test]
    fn corner_iou_partial_overlap() {
        let a = CornerBox {
            x_min: 0.0,
            y_min: 0.0,
            x_max: 10.0,
            y_max: 10.0,
        };
        let b = CornerBox {
            x_min: 5.0,
            y_min: 5.0,
            x_max: 15.0,
            y_max: 15.0,
        };
        // Intersection 25, union 100 + 100 - 25 = 175
        assert!((a.iou(&b) - 25.0 / 175.0).abs() < 1e-6);
    }

    #[test]
    fn disjoint_intersection_is_zero_not_negative() {
        let a = CornerBox {
            x_min: 0.0,
            y_min: 0.0,
            x_max: 1.0,
            y_max: 1.0,
        };
        let b = CornerBox {
            x_min: 5.0,
            y_min: 5.0,
            x_max: 6.0,
            y_max: 6.0,
        };
        assert_eq!(a.intersection(&b), 0.0);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn degenerate_boxes_do_not_divide_by_zero() {
        let point = CenterBox {
            x_center: 1.0,
            y_center: 1.0,
            width: 0.0,
            height: 0.0,
        };
        let iou = point.iou(&point);
        assert!(iou.is_finite());
        assert_eq!(iou, 0.0);
    }

    #[test]
    fn array_conversions() {
        let corner: CornerBox = [1.0, 2.0, 3.0, 4.0].into();
        assert_eq!(<[f32; 4]>::from(corner), [1.0, 2.0, 3.0, 4.0]);
        let center: CenterBox = [5.0, 6.0, 7.0, 8.0].into();
        assert_eq!(<[f32; 4]>::from(center), [5.0, 6.0, 7.0, 8.0]);
    }
}
