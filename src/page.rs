//! `Page`: drives a single image through the pipeline and exposes the
//! terminal result. Mirrors the teacher's pattern of a constructor that
//! runs a whole analysis to completion and leaves a read-only result behind
//! (`RouteMatch::new` in `engine.rs`), rather than an incrementally-mutated
//! object.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::PageConfig;
use crate::error::Result;
use crate::license;
use crate::neighbour::actual_gutters;
use crate::pipeline;
use crate::vision::VisionBackend;

/// Terminal, read-only result of processing one page (§6 "Public result").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResult {
    pub filename: Option<String>,
    pub url: Option<String>,
    pub size: [i32; 2],
    pub numbering: String,
    pub gutters: [i32; 2],
    pub license: Option<serde_json::Value>,
    /// `[x, y, w, h]` per panel, in reading order.
    pub panels: Vec<[i32; 4]>,
    /// Seconds, rounded to two decimals.
    pub processing_time: f64,
}

impl PageResult {
    /// Reproduces `page.py`'s `get_infos()` field set exactly; useful both
    /// as the final public result and for inspecting intermediate stages in
    /// tests.
    pub fn to_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "filename": self.filename,
            "url": self.url,
            "size": self.size,
            "numbering": self.numbering,
            "gutters": self.gutters,
            "license": self.license,
            "panels": self.panels,
            "processing_time": self.processing_time,
        })
    }

    /// Largest of the four gutter components (`x`, `y`, and their negated
    /// `r`/`b` counterparts), mirrored from `page.py`'s `max_gutter`.
    pub fn max_gutter(&self) -> i32 {
        self.gutters[0].max(self.gutters[1]).max(-self.gutters[0]).max(-self.gutters[1])
    }
}

/// Drives one image through the whole pipeline to completion.
///
/// `url` is an optional caller-supplied provenance string carried through to
/// the result (the source has no local filename when processing a remote
/// image); `filename` is derived from `path`.
pub fn process_page<B: VisionBackend>(
    backend: &B,
    path: &Path,
    url: Option<String>,
    config: &PageConfig,
) -> Result<PageResult> {
    let started = Instant::now();

    let vision = backend.analyze(path)?;
    let mut config = config.clone();
    config.image_size = (vision.image_size.width, vision.image_size.height);

    log::debug!("[Pipeline] processing {} ({}x{})", path.display(), config.image_size.0, config.image_size.1);

    let panels = pipeline::run(&vision, &config);
    let gutters = actual_gutters(&panels, config.gutter_aggregator);
    let license = license::load_license(path)?;

    let result = PageResult {
        filename: file_name(path),
        url,
        size: [config.image_size.0, config.image_size.1],
        numbering: config.numbering.as_str().to_string(),
        gutters: [gutters.x, gutters.y],
        license,
        panels: panels.iter().map(|p| p.to_xywh()).collect(),
        processing_time: round2(started.elapsed().as_secs_f64()),
    };

    log::info!(
        "[Pipeline] {} -> {} panels, gutters=({}, {}), {:.2}s",
        path.display(),
        result.panels.len(),
        result.gutters[0],
        result.gutters[1],
        result.processing_time
    );

    Ok(result)
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|s| s.to_string_lossy().into_owned())
}

fn round2(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

/// Convenience constructor kept for callers who already have an image path
/// and want the default `PageConfig`, grounded on the teacher's `*::new`
/// constructor-does-the-work pattern.
pub fn process_page_default<B: VisionBackend>(backend: &B, path: &PathBuf) -> Result<PageResult> {
    process_page(backend, path, None, &PageConfig::default())
}
