//! Vision backend boundary (§6, §1 "out of scope: external collaborators").
//!
//! The pipeline consumes contours and line segments; how those are produced
//! from pixels (grayscale conversion, Sobel gradient, thresholding, contour
//! tracing, line-segment detection) is not this crate's concern. This module
//! defines the trait boundary and ships one backend, [`SyntheticBackend`],
//! that hands back caller-supplied geometry directly — useful for callers
//! who already run their own vision stage, and for tests.

use crate::error::{PanelError, Result};
use crate::geometry::{Point, Polygon, Segment};

/// Decoded image dimensions, `(width, height)` in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: i32,
    pub height: i32,
}

/// Everything the pipeline needs out of the vision stage for one page.
#[derive(Debug, Clone)]
pub struct VisionOutput {
    pub image_size: ImageSize,
    /// External contours, already simplified with Chain-Approx-Simple-like
    /// semantics (one polygon per contour, no holes).
    pub contours: Vec<Polygon>,
    /// Detected line segments with length already filtered to `>= 100px`
    /// (the filter [`MIN_SEGMENT_LENGTH`] a caller should apply before
    /// handing segments to the pipeline).
    pub segments: Vec<Segment>,
}

/// Minimum segment length (pixels) a line-segment detector's raw output
/// should be filtered to before reaching the pipeline (§6).
pub const MIN_SEGMENT_LENGTH: f64 = 100.0;

/// External collaborator boundary: produces contours and line segments from
/// a raster image. Implementations are expected to wrap a real computer
/// vision library (Sobel + threshold + contour extraction + line-segment
/// detection); this crate does not ship such an implementation.
pub trait VisionBackend {
    /// Analyze the image at `path`, returning its contours and segments.
    /// Implementations must return [`PanelError::NotAnImage`] when the file
    /// cannot be decoded as an image.
    fn analyze(&self, path: &std::path::Path) -> Result<VisionOutput>;
}

/// A backend that accepts already-computed contours and segments and hands
/// them back unchanged. Used by tests that construct synthetic pages
/// directly from geometry (§8 round-trip property, §8 scenarios S1-S6), and
/// by any caller that already has vision output from elsewhere.
#[derive(Debug, Clone, Default)]
pub struct SyntheticBackend {
    pub image_size: ImageSize,
    pub contours: Vec<Polygon>,
    pub segments: Vec<Segment>,
}

impl Default for ImageSize {
    fn default() -> Self {
        Self { width: 0, height: 0 }
    }
}

impl SyntheticBackend {
    pub fn new(width: i32, height: i32) -> Self {
        Self { image_size: ImageSize { width, height }, contours: Vec::new(), segments: Vec::new() }
    }

    pub fn with_contour(mut self, points: Vec<Point>) -> Self {
        self.contours.push(Polygon::new(points));
        self
    }

    pub fn with_segment(mut self, a: Point, b: Point) -> Self {
        self.segments.push(Segment::new(a, b));
        self
    }
}

impl VisionBackend for SyntheticBackend {
    fn analyze(&self, path: &std::path::Path) -> Result<VisionOutput> {
        if self.image_size.width <= 0 || self.image_size.height <= 0 {
            return Err(PanelError::NotAnImage { path: path.display().to_string() });
        }
        Ok(VisionOutput {
            image_size: self.image_size,
            contours: self.contours.clone(),
            segments: self.segments.clone(),
        })
    }
}
