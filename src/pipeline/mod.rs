//! The panel-extraction pipeline: a fixed, ordered sequence of idempotent
//! passes over a panel list (§2, §4).

mod deoverlap;
mod exclude;
mod expand;
mod group;
mod initial;
mod merge;
mod numbering;
mod split;
mod sort;

pub use deoverlap::deoverlap_panels;
pub use exclude::exclude_small_panels;
pub use expand::expand_panels;
pub use group::group_small_panels;
pub use initial::initial_panels;
pub use merge::merge_panels;
pub use numbering::{fallback_full_page, fix_panels_numbering};
pub use sort::sort_panels;
pub use split::split_panels;

use crate::config::PageConfig;
use crate::geometry::{Panel, Segment};
use crate::vision::VisionOutput;

/// Runs the full, fixed pipeline order (§2):
/// `initial_panels -> group_small_panels -> split_panels -> exclude_small_panels
/// -> merge_panels -> deoverlap_panels -> exclude_small_panels -> sort
/// -> expand_panels -> fallback_full_page -> fix_numbering`.
pub fn run(vision: &VisionOutput, config: &PageConfig) -> Vec<Panel> {
    let segments: &[Segment] = &vision.segments;

    let panels = initial_panels(vision, config);
    let panels = group_small_panels(panels, config);
    let panels = split_panels(panels, segments, config);
    let panels = exclude_small_panels(panels, config);
    let panels = merge_panels(panels);
    let panels = deoverlap_panels(panels);
    let panels = exclude_small_panels(panels, config);
    let panels = sort_panels(panels, config);
    let panels = expand_panels(panels, config);
    let panels = fallback_full_page(panels, config);
    fix_panels_numbering(panels, config)
}
