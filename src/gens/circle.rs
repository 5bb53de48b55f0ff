use crate::Node;

/// A circle in the plane with an identifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Vertex id of the circle in its intersection graph
    pub id: Node,
    pub x: f64,
    pub y: f64,
    /// Expected to be positive; zero or negative radii are stored as given
    pub radius: f64,
}

impl Circle {
    pub fn new(id: Node, x: f64, y: f64, radius: f64) -> Self {
        Self { id, x, y, radius }
    }

    /// Returns the center as `(x, y)`
    pub fn center(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Euclidean distance between both centers
    pub fn center_distance(&self, other: &Circle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns *true* if the centers are closer than the sum of both radii.
    /// Touching circles do not intersect.
    pub fn intersects(&self, other: &Circle) -> bool {
        self.center_distance(other) < self.radius + other.radius
    }

    /// Returns *true* if all coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.radius.is_finite()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn intersection_is_strict_and_symmetric() {
        let a = Circle::new(0, 0.0, 0.0, 1.0);
        let b = Circle::new(1, 1.5, 0.0, 1.0);
        let c = Circle::new(2, 2.0, 0.0, 1.0);
        let d = Circle::new(3, 3.0, 4.0, 3.0);

        assert!(a.intersects(&b) && b.intersects(&a));
        assert!(!a.intersects(&c) && !c.intersects(&a));

        // centers 5 apart, radii sum to 4
        assert_eq!(a.center_distance(&d), 5.0);
        assert!(!a.intersects(&d) && !d.intersects(&a));
        assert!(a.intersects(&Circle::new(4, 3.0, 4.0, 4.5)));
        assert_eq!(d.center(), (3.0, 4.0));
    }

    #[test]
    fn non_finite_circles() {
        assert!(Circle::new(0, 1.0, 2.0, 3.0).is_finite());
        assert!(!Circle::new(0, f64::NAN, 2.0, 3.0).is_finite());
        assert!(!Circle::new(0, 1.0, 2.0, f64::INFINITY).is_finite());
    }
}
