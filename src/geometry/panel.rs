//! Axis-aligned panel rectangle: the unit the whole pipeline operates on.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::point::Point;
use super::polygon::Polygon;
use super::segment::Segment;
use crate::config::{Numbering, PageConfig};

/// An axis-aligned rectangle identified by its four edge coordinates.
/// `x <= r` and `y <= b` are invariants maintained by every constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    pub x: i32,
    pub y: i32,
    pub r: i32,
    pub b: i32,
    /// Source polygon, when the panel was derived from a vision contour
    /// rather than a synthetic/grouped/merged rectangle.
    #[serde(skip)]
    pub polygon: Option<Polygon>,
}

/// Equality is by value of the four edges; the source polygon is not
/// considered (two panels with the same rectangle but different contours
/// are the same panel for every pipeline pass).
impl PartialEq for Panel {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.r == other.r && self.b == other.b
    }
}
impl Eq for Panel {}

/// Default reading order: primarily top-to-bottom, LTR within a row. The
/// pipeline's `sort` stage uses [`reading_order`] directly so it can honour
/// [`Numbering::Rtl`]; this `Ord` impl is the LTR special case, handy for
/// tests and for anything that just wants "natural" panel order.
impl PartialOrd for Panel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Panel {
    fn cmp(&self, other: &Self) -> Ordering {
        reading_order(Numbering::Ltr, self, other)
    }
}

impl Panel {
    pub fn from_xyrb(x: i32, y: i32, r: i32, b: i32) -> Self {
        Self { x, y, r, b, polygon: None }
    }

    pub fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::from_xyrb(x, y, x + w, y + h)
    }

    /// Build a panel from a polygon, taking the polygon's bounding box as
    /// the rectangle and keeping the polygon as the source contour.
    pub fn from_polygon(polygon: Polygon) -> Self {
        let (x, y, r, b) = polygon.bounding_box();
        Self { x, y, r, b, polygon: Some(polygon) }
    }

    pub fn w(&self) -> i32 {
        self.r - self.x
    }

    pub fn h(&self) -> i32 {
        self.b - self.y
    }

    pub fn area(&self) -> i64 {
        self.w() as i64 * self.h() as i64
    }

    pub fn to_xywh(&self) -> [i32; 4] {
        [self.x, self.y, self.w(), self.h()]
    }

    /// True iff `other` lies fully inside `self` (edges inclusive).
    pub fn contains(&self, other: &Panel) -> bool {
        self.x <= other.x && self.y <= other.y && self.r >= other.r && self.b >= other.b
    }

    /// Rectangle of intersection, or `None` when the overlap has no area.
    pub fn overlap(&self, other: &Panel) -> Option<Panel> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let r = self.r.min(other.r);
        let b = self.b.min(other.b);
        if x < r && y < b {
            Some(Panel::from_xyrb(x, y, r, b))
        } else {
            None
        }
    }

    /// Smallest enclosing rectangle of `self` and `other`.
    pub fn merge(&self, other: &Panel) -> Panel {
        Panel::from_xyrb(
            self.x.min(other.x),
            self.y.min(other.y),
            self.r.max(other.r),
            self.b.max(other.b),
        )
    }

    /// Shorter page dimension, used as the basis for every relative
    /// threshold in the spec.
    fn short_side(config: &PageConfig) -> f64 {
        config.image_size.0.min(config.image_size.1) as f64
    }

    pub fn is_very_small(&self, config: &PageConfig) -> bool {
        let s = Self::short_side(config);
        (self.w() as f64) < s / config.very_small_ratio_divisor
            || (self.h() as f64) < s / config.very_small_ratio_divisor
    }

    pub fn is_small(&self, config: &PageConfig) -> bool {
        let s = Self::short_side(config);
        let threshold = s * config.min_panel_size_ratio;
        (self.w() as f64) < threshold || (self.h() as f64) < threshold
    }

    /// Minimum bounding-box edge distance to `other` (0 when they overlap or
    /// touch).
    pub fn edge_distance(&self, other: &Panel) -> f64 {
        let dx = if self.r < other.x {
            other.x - self.r
        } else if other.r < self.x {
            self.x - other.r
        } else {
            0
        };
        let dy = if self.b < other.y {
            other.y - self.b
        } else if other.b < self.y {
            self.y - other.b
        } else {
            0
        };
        ((dx * dx + dy * dy) as f64).sqrt()
    }

    /// Overlap of the two panels' projections onto the vertical axis
    /// (shared vertical span).
    pub fn vertical_overlap(&self, other: &Panel) -> i32 {
        (self.b.min(other.b) - self.y.max(other.y)).max(0)
    }

    /// Overlap of the two panels' projections onto the horizontal axis.
    pub fn horizontal_overlap(&self, other: &Panel) -> i32 {
        (self.r.min(other.r) - self.x.max(other.x)).max(0)
    }

    /// §3 "close" predicate: near each other (within `S/close_distance_ratio_divisor`)
    /// AND aligned on at least one axis.
    pub fn is_close(&self, other: &Panel, config: &PageConfig) -> bool {
        let s = Self::short_side(config);
        let threshold = s / config.close_distance_ratio_divisor;
        if self.edge_distance(other) > threshold {
            return false;
        }
        self.vertical_overlap(other) > 0 || self.horizontal_overlap(other) > 0
    }

    /// Fraction of the panel's perimeter covered by page segments aligned
    /// with the corresponding edge, plus the matching segments themselves.
    pub fn segments_coverage(&self, segments: &[Segment]) -> (f64, Vec<Segment>) {
        const EDGE_TOLERANCE: f64 = 4.0;
        const SLOPE_TOLERANCE: f64 = 0.1 * 180.0 / std::f64::consts::PI; // ~0.1 slope in degrees

        let edges = [
            Segment::new(Point::new(self.x, self.y), Point::new(self.r, self.y)), // top
            Segment::new(Point::new(self.r, self.y), Point::new(self.r, self.b)), // right
            Segment::new(Point::new(self.r, self.b), Point::new(self.x, self.b)), // bottom
            Segment::new(Point::new(self.x, self.b), Point::new(self.x, self.y)), // left
        ];

        let perimeter = 2.0 * (self.w() as f64 + self.h() as f64);
        if perimeter <= 0.0 {
            return (0.0, vec![]);
        }

        let mut matched = Vec::new();
        let mut covered_length = 0.0;

        for edge in &edges {
            let mut best: Option<&Segment> = None;
            let mut best_len = 0.0;
            for seg in segments {
                if seg.aligns_with(edge, SLOPE_TOLERANCE, EDGE_TOLERANCE) {
                    if seg.length() > best_len {
                        best_len = seg.length();
                        best = Some(seg);
                    }
                }
            }
            if let Some(seg) = best {
                matched.push(*seg);
                covered_length += edge.length().min(seg.length());
            }
        }

        (covered_length / perimeter, matched)
    }
}

/// Total order used by the `sort` pipeline stage (§4.1, §4.9): primarily by
/// `y`, treating two panels as "same row" when their vertical spans overlap
/// more than half of the shorter panel's height; within a row, ascending `x`
/// (LTR) or descending `r` (RTL).
pub fn reading_order(numbering: Numbering, a: &Panel, b: &Panel) -> Ordering {
    let shorter_h = a.h().min(b.h()).max(1);
    let same_row = a.vertical_overlap(b) as f64 > shorter_h as f64 / 2.0;

    if same_row {
        match numbering {
            Numbering::Ltr => a.x.cmp(&b.x),
            Numbering::Rtl => b.r.cmp(&a.r),
        }
    } else {
        a.y.cmp(&b.y)
    }
}
