//! # kumiko-panels
//!
//! Comic-book panel extraction: turns a page image's contours and detected
//! line segments into an ordered, non-overlapping set of panel rectangles.
//!
//! This library provides:
//! - A fixed, idempotent pipeline of geometric passes (group, split,
//!   exclude, merge, de-overlap, expand, order) over a `Panel` list
//! - A `VisionBackend` trait boundary so pixel-level contour/line-segment
//!   extraction stays an external concern
//! - Gutter estimation and reading-order (LTR/RTL) numbering
//!
//! ## Features
//!
//! - **`parallel`** - Enable parallel batch processing of multiple pages with rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use kumiko_panels::{PageConfig, SyntheticBackend, Point, process_page};
//! use std::path::Path;
//!
//! let backend = SyntheticBackend::new(800, 1200).with_contour(vec![
//!     Point::new(40, 40),
//!     Point::new(760, 40),
//!     Point::new(760, 1160),
//!     Point::new(40, 1160),
//! ]);
//!
//! let result = process_page(&backend, Path::new("page.png"), None, &PageConfig::default()).unwrap();
//! assert_eq!(result.panels, vec![[40, 40, 720, 1120]]);
//! ```

// Unified error handling
pub mod error;
pub use error::{PanelError, Result};

// Union-Find data structure for grouping close small panels
pub mod union_find;
pub use union_find::UnionFind;

// Pipeline configuration
pub mod config;
pub use config::{GutterAggregator, Numbering, PageConfig};

// Core geometric primitives (Point, Segment, Polygon, Panel)
pub mod geometry;
pub use geometry::{Panel, Point, Polygon, Segment};

// License sidecar loading
pub mod license;
pub use license::load_license;

// Neighbour search and gutter estimation
pub mod neighbour;
pub use neighbour::{actual_gutters, find_neighbour, Direction, Gutters};

// Vision backend trait boundary
pub mod vision;
pub use vision::{ImageSize, SyntheticBackend, VisionBackend, VisionOutput};

// The panel-extraction pipeline stages
pub mod pipeline;

// Page orchestration and public result type
pub mod page;
pub use page::{process_page, process_page_default, PageResult};

// Batch processing (sequential always, rayon-backed under "parallel")
pub mod batch;
pub use batch::{process_pages, PageInput};
#[cfg(feature = "parallel")]
pub use batch::process_pages_parallel;
