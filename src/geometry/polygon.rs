//! Closed polygon primitive: a panel's optional source contour.

use geo::{
    algorithm::simplify::Simplify, BoundingRect, Coord, CoordPos, CoordinatePosition, LineString,
    Polygon as GeoPolygon,
};
use serde::{Deserialize, Serialize};

use super::point::Point;

/// A finite ordered sequence of points, closed by implication (last connects
/// back to first). Used only as an immutable source for a `Panel` and as
/// input to the splitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of the Euclidean lengths of the closed edge loop.
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..self.points.len() {
            let a = self.points[i];
            let b = self.points[(i + 1) % self.points.len()];
            total += a.distance(&b);
        }
        total
    }

    /// Axis-aligned bounding box as `(x, y, r, b)`.
    pub fn bounding_box(&self) -> (i32, i32, i32, i32) {
        let Some(rect) = self.as_geo_ring().bounding_rect() else {
            return (0, 0, 0, 0);
        };
        (
            rect.min().x.round() as i32,
            rect.min().y.round() as i32,
            rect.max().x.round() as i32,
            rect.max().y.round() as i32,
        )
    }

    /// Ramer-Douglas-Peucker simplification with absolute tolerance `epsilon`,
    /// via the `geo` crate's `Simplify` implementation for `Polygon` (the
    /// same algorithm the teacher uses for route polylines).
    pub fn simplify(&self, epsilon: f64) -> Polygon {
        if self.points.len() < 3 {
            return self.clone();
        }

        let simplified = GeoPolygon::new(self.as_geo_ring(), vec![]).simplify(&epsilon);
        let mut points: Vec<Point> =
            simplified.exterior().coords().map(|c| Point::new(c.x.round() as i32, c.y.round() as i32)).collect();
        if points.first() == points.last() {
            points.pop();
        }
        Polygon::new(points)
    }

    /// Point-in-polygon test via `geo`'s `CoordinatePosition`. Points on the
    /// boundary are treated as contained.
    pub fn contains_point(&self, p: Point) -> bool {
        let polygon = GeoPolygon::new(self.as_geo_ring(), vec![]);
        let coord = Coord { x: p.x as f64, y: p.y as f64 };
        matches!(polygon.coordinate_position(&coord), CoordPos::Inside | CoordPos::OnBoundary)
    }

    /// Closes the ring (if not already closed) and lifts it into `geo`'s
    /// coordinate space for use with its algorithms.
    fn as_geo_ring(&self) -> LineString<f64> {
        let mut coords: Vec<Coord<f64>> =
            self.points.iter().map(|p| Coord { x: p.x as f64, y: p.y as f64 }).collect();
        if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
            if first != last {
                coords.push(first);
            }
        }
        LineString::new(coords)
    }

    /// Whether the straight chord between two non-consecutive vertices lies
    /// fully inside the polygon (sampled at regular intervals along the
    /// chord, since exact polygon clipping is unnecessary at this contract
    /// level).
    pub fn chord_lies_inside(&self, i: usize, j: usize) -> bool {
        const SAMPLES: usize = 24;
        let a = self.points[i];
        let b = self.points[j];
        for step in 1..SAMPLES {
            let t = step as f64 / SAMPLES as f64;
            let x = a.x as f64 + (b.x - a.x) as f64 * t;
            let y = a.y as f64 + (b.y - a.y) as f64 * t;
            if !self.contains_point(Point::new(x.round() as i32, y.round() as i32)) {
                return false;
            }
        }
        true
    }

    /// Split the ring into two sub-polygons at vertex indices `i` and `j`
    /// (each sub-polygon includes both cut vertices, closing the chord).
    pub fn split_at(&self, i: usize, j: usize) -> (Polygon, Polygon) {
        let n = self.points.len();
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };

        let mut part_a: Vec<Point> = self.points[lo..=hi].to_vec();
        let mut part_b: Vec<Point> = self.points[hi..n].iter().chain(self.points[0..=lo].iter()).cloned().collect();

        if part_a.len() < 3 {
            part_a.push(self.points[lo]);
        }
        if part_b.len() < 3 {
            part_b.push(self.points[hi]);
        }

        (Polygon::new(part_a), Polygon::new(part_b))
    }
}
