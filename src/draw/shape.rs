//! Shape definitions committed by the circle and rectangle modes.

use crate::util::Point;

/// Which outline a shape-mode drag produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

/// A stroked outline anchored at the drag start point.
///
/// Shapes are not kept after they are painted; the canvas only holds pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Full circle outline centered on the drag start
    Circle {
        /// Center (the pointer-down position)
        center: Point,
        /// Distance from the center to the pointer-up position
        radius: f64,
    },
    /// Rectangle outline with one corner on the drag start
    Rect {
        /// Corner at the pointer-down position
        corner: Point,
        /// Signed width; negative values extend to the left of the corner
        width: f64,
        /// Signed height; negative values extend above the corner
        height: f64,
    },
}

impl Shape {
    /// Builds the shape described by a drag from `start` to `end`.
    ///
    /// Rectangles keep the signed extent of the drag, so dragging up and to
    /// the left yields negative width and height.
    pub fn from_drag(kind: ShapeKind, start: Point, end: Point) -> Self {
        match kind {
            ShapeKind::Circle => Shape::Circle {
                center: start,
                radius: start.distance_to(end),
            },
            ShapeKind::Rectangle => Shape::Rect {
                corner: start,
                width: end.x - start.x,
                height: end.y - start.y,
            },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rect { .. } => ShapeKind::Rectangle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_radius_is_distance_from_start() {
        let shape = Shape::from_drag(
            ShapeKind::Circle,
            Point::new(50.0, 50.0),
            Point::new(80.0, 50.0),
        );
        assert_eq!(
            shape,
            Shape::Circle {
                center: Point::new(50.0, 50.0),
                radius: 30.0
            }
        );
    }

    #[test]
    fn test_rectangle_keeps_signed_extent() {
        let shape = Shape::from_drag(
            ShapeKind::Rectangle,
            Point::new(10.0, 10.0),
            Point::new(5.0, 5.0),
        );
        assert_eq!(
            shape,
            Shape::Rect {
                corner: Point::new(10.0, 10.0),
                width: -5.0,
                height: -5.0
            }
        );
        assert_eq!(shape.kind(), ShapeKind::Rectangle);
    }

    #[test]
    fn test_zero_length_drag_gives_degenerate_shapes() {
        let p = Point::new(7.0, 7.0);
        assert_eq!(
            Shape::from_drag(ShapeKind::Circle, p, p),
            Shape::Circle {
                center: p,
                radius: 0.0
            }
        );
    }
}
