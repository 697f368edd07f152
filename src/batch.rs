//! Parallel batch processing of multiple pages (`parallel` feature), grounded
//! on the teacher's sequential/parallel dual-implementation pattern
//! (`group_signatures_parallel`, `calculate_power_zones_parallel`): a plain
//! sequential function is always available; the `rayon`-backed variant is
//! compiled in only when the feature is enabled.

use std::path::PathBuf;

use crate::config::PageConfig;
use crate::error::Result;
use crate::page::{process_page, PageResult};
use crate::vision::VisionBackend;

/// One page to process in a batch: its image path plus optional provenance
/// URL carried through to the result.
#[derive(Debug, Clone)]
pub struct PageInput {
    pub path: PathBuf,
    pub url: Option<String>,
}

/// Processes pages one at a time, in order.
pub fn process_pages<B: VisionBackend>(
    backend: &B,
    inputs: &[PageInput],
    config: &PageConfig,
) -> Vec<Result<PageResult>> {
    inputs.iter().map(|input| process_page(backend, &input.path, input.url.clone(), config)).collect()
}

/// Same as [`process_pages`] but fans the batch out over `rayon`'s thread
/// pool. Requires `B: Sync` since the backend is shared across worker
/// threads.
#[cfg(feature = "parallel")]
pub fn process_pages_parallel<B: VisionBackend + Sync>(
    backend: &B,
    inputs: &[PageInput],
    config: &PageConfig,
) -> Vec<Result<PageResult>> {
    use rayon::prelude::*;

    inputs.par_iter().map(|input| process_page(backend, &input.path, input.url.clone(), config)).collect()
}
