//! Line segment primitive, used both for detected page lines and split chords.

use geo::{Coord, EuclideanDistance, Line, Point as GeoPoint};
use serde::{Deserialize, Serialize};

use super::point::Point;

/// Orientation of a segment relative to the image axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// An immutable line segment between two image points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.a.distance(&self.b)
    }

    /// Horizontal when `|dy| < |dx|`, vertical otherwise.
    pub fn orientation(&self) -> Orientation {
        let dx = (self.a.x - self.b.x).abs();
        let dy = (self.a.y - self.b.y).abs();
        if dy < dx {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Angle of the segment against the x axis, in degrees, folded into [0, 90).
    pub fn angle_from_axis_degrees(&self) -> f64 {
        let dx = (self.b.x - self.a.x) as f64;
        let dy = (self.b.y - self.a.y) as f64;
        let angle = dy.atan2(dx).to_degrees().abs();
        let angle = angle % 180.0;
        if angle > 90.0 {
            180.0 - angle
        } else {
            angle
        }
    }

    /// True if the segment is within `tolerance_degrees` of being perfectly
    /// horizontal or vertical.
    pub fn is_axis_aligned(&self, tolerance_degrees: f64) -> bool {
        let angle = self.angle_from_axis_degrees();
        angle <= tolerance_degrees || (90.0 - angle) <= tolerance_degrees
    }

    /// Minimum distance from `p` to the segment (not the infinite line), via
    /// `geo`'s `EuclideanDistance` for `Line`-`Point` pairs.
    pub fn distance_to_point(&self, p: Point) -> f64 {
        let line = Line::new(
            Coord { x: self.a.x as f64, y: self.a.y as f64 },
            Coord { x: self.b.x as f64, y: self.b.y as f64 },
        );
        let point = GeoPoint::new(p.x as f64, p.y as f64);
        line.euclidean_distance(&point)
    }

    /// Whether this segment and `other` are collinear-ish (same orientation
    /// family and small difference in slope angle) and their endpoints are
    /// within `endpoint_tolerance` of each other (in either pairing).
    pub fn aligns_with(&self, other: &Segment, slope_tolerance: f64, endpoint_tolerance: f64) -> bool {
        let angle_diff = (self.angle_from_axis_degrees() - other.angle_from_axis_degrees()).abs();
        if angle_diff > slope_tolerance {
            return false;
        }

        let same_pairing = self.a.distance(&other.a) <= endpoint_tolerance
            && self.b.distance(&other.b) <= endpoint_tolerance;
        let swapped_pairing = self.a.distance(&other.b) <= endpoint_tolerance
            && self.b.distance(&other.a) <= endpoint_tolerance;

        same_pairing || swapped_pairing
    }
}
