//! §4.9 Fallback and numbering.

use crate::config::{Numbering, PageConfig};
use crate::geometry::Panel;
use crate::neighbour::{find_neighbour, Direction};

/// If the pipeline produced no panels at all, inserts one covering the full
/// image (the `EmptyResult` recovery path, §7).
pub fn fallback_full_page(panels: Vec<Panel>, config: &PageConfig) -> Vec<Panel> {
    if !panels.is_empty() {
        return panels;
    }
    let (w, h) = config.image_size;
    log::debug!("[Panels] fallback_full_page: no panels detected, inserting full-page panel");
    vec![Panel::from_xyrb(0, 0, w, h)]
}

/// Correction loop fixing topological violations introduced by non-grid
/// layouts: repeat until a full sweep produces no moves. For each panel at
/// position `i`, its before-neighbours (directly above, and directly to the
/// reading-direction side) must already sit earlier in the list; if not, the
/// panel is moved to just after that neighbour.
///
/// Terminates because each move strictly increases the number of
/// before-relations already satisfied by the ordering.
pub fn fix_panels_numbering(mut panels: Vec<Panel>, config: &PageConfig) -> Vec<Panel> {
    loop {
        let mut moved = false;

        let mut i = 0;
        while i < panels.len() {
            let before_neighbours = before_neighbours_of(&panels, i, config.numbering);

            let mut latest_position = None;
            for neighbour_panel in &before_neighbours {
                if let Some(pos) = panels.iter().position(|p| p == neighbour_panel) {
                    if pos > i {
                        latest_position = Some(latest_position.map_or(pos, |best: usize| best.max(pos)));
                    }
                }
            }

            if let Some(neighbour_pos) = latest_position {
                let panel = panels.remove(i);
                panels.insert(neighbour_pos, panel);
                moved = true;
            } else {
                i += 1;
            }
        }

        if !moved {
            break;
        }
    }

    panels
}

fn before_neighbours_of(panels: &[Panel], index: usize, numbering: Numbering) -> Vec<Panel> {
    let mut result = Vec::new();
    if let Some(top) = find_neighbour(panels, index, Direction::Top) {
        result.push(panels[top].clone());
    }
    let side = if numbering == Numbering::Rtl { Direction::Right } else { Direction::Left };
    if let Some(side_neighbour) = find_neighbour(panels, index, side) {
        result.push(panels[side_neighbour].clone());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_inserts_full_page_when_empty() {
        let config = PageConfig { image_size: (800, 1200), ..PageConfig::default() };
        let result = fallback_full_page(vec![], &config);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].to_xywh(), [0, 0, 800, 1200]);
    }

    #[test]
    fn fallback_leaves_nonempty_untouched() {
        let config = PageConfig::default();
        let panels = vec![Panel::from_xyrb(0, 0, 10, 10)];
        let result = fallback_full_page(panels.clone(), &config);
        assert_eq!(result, panels);
    }

    #[test]
    fn corrects_out_of_order_before_neighbour() {
        let config = PageConfig::default();
        // Row one: two panels left-to-right. Row two: one panel whose
        // top-neighbour is the *second* panel of row one, placed out of
        // order before the fix.
        let top_left = Panel::from_xyrb(0, 0, 100, 100);
        let top_right = Panel::from_xyrb(110, 0, 210, 100);
        let bottom = Panel::from_xyrb(110, 110, 210, 210);

        let panels = vec![bottom.clone(), top_left.clone(), top_right.clone()];
        let fixed = fix_panels_numbering(panels, &config);
        let bottom_pos = fixed.iter().position(|p| *p == bottom).unwrap();
        let top_right_pos = fixed.iter().position(|p| *p == top_right).unwrap();
        assert!(top_right_pos < bottom_pos);
    }
}
