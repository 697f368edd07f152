//! §4.5 Exclude small panels. Runs twice in the pipeline.

use crate::config::PageConfig;
use crate::geometry::Panel;

pub fn exclude_small_panels(panels: Vec<Panel>, config: &PageConfig) -> Vec<Panel> {
    let before = panels.len();
    let kept: Vec<Panel> = panels.into_iter().filter(|p| !p.is_small(config)).collect();
    log::debug!("[Panels] exclude_small_panels: {} -> {}", before, kept.len());
    kept
}
