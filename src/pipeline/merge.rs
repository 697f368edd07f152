//! §4.6 Merge panels: pairwise containment collapses to the outer rectangle.

use crate::geometry::Panel;

/// Repeatedly merges any pair where one panel fully contains the other,
/// until a fixed point. At most `O(n^2)` comparisons per pass.
pub fn merge_panels(mut panels: Vec<Panel>) -> Vec<Panel> {
    loop {
        let mut merged_pair = None;
        'search: for i in 0..panels.len() {
            for j in (i + 1)..panels.len() {
                if panels[i].contains(&panels[j]) || panels[j].contains(&panels[i]) {
                    merged_pair = Some((i, j));
                    break 'search;
                }
            }
        }

        match merged_pair {
            Some((i, j)) => {
                let merged = panels[i].merge(&panels[j]);
                // remove j first (larger index) to keep i valid
                panels.remove(j);
                panels.remove(i);
                panels.push(merged);
            }
            None => break,
        }
    }

    log::debug!("[Panels] merge_panels: {} panels after merging", panels.len());
    panels
}
