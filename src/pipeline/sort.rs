//! §4.1 / §4.9 reading-order sort.

use crate::config::PageConfig;
use crate::geometry::reading_order;
use crate::geometry::Panel;

/// Sorts panels into reading order (§4.1): primarily top-to-bottom, with
/// "same row" panels compared left-to-right (LTR) or right-to-left (RTL).
pub fn sort_panels(mut panels: Vec<Panel>, config: &PageConfig) -> Vec<Panel> {
    panels.sort_by(|a, b| reading_order(config.numbering, a, b));
    panels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Numbering;

    fn cfg(numbering: Numbering) -> PageConfig {
        PageConfig { numbering, ..PageConfig::default() }
    }

    #[test]
    fn sorts_grid_ltr() {
        let panels = vec![
            Panel::from_xyrb(420, 20, 780, 580),
            Panel::from_xyrb(20, 20, 380, 580),
            Panel::from_xyrb(420, 620, 780, 1180),
            Panel::from_xyrb(20, 620, 380, 1180),
        ];
        let sorted = sort_panels(panels, &cfg(Numbering::Ltr));
        let xs: Vec<i32> = sorted.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![20, 420, 20, 420]);
    }

    #[test]
    fn sorts_grid_rtl() {
        let panels = vec![
            Panel::from_xyrb(20, 20, 380, 580),
            Panel::from_xyrb(420, 20, 780, 580),
            Panel::from_xyrb(20, 620, 380, 1180),
            Panel::from_xyrb(420, 620, 780, 1180),
        ];
        let sorted = sort_panels(panels, &cfg(Numbering::Rtl));
        let xs: Vec<i32> = sorted.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![420, 20, 420, 20]);
    }
}
