//! §4.3 Splitting panels.

use crate::config::PageConfig;
use crate::geometry::{Panel, Polygon, Segment};

/// Splits panels whose source polygon contains a pinch: two non-consecutive
/// vertices joined by a chord that lies fully inside the polygon, is either
/// axis-aligned or aligned with a detected page segment, and whose halves
/// are both large enough to survive.
///
/// Fires in order of decreasing area; restarts the whole scan after every
/// successful split. Bounded by a hard cap of `4 * initial panel count` to
/// guarantee termination (§4.3, §9).
pub fn split_panels(mut panels: Vec<Panel>, segments: &[Segment], config: &PageConfig) -> Vec<Panel> {
    let cap = 4 * panels.len().max(1);
    let mut iterations = 0;

    loop {
        if iterations >= cap {
            log::debug!("[Panels] split_panels: hit iteration cap ({cap}), stopping");
            break;
        }
        iterations += 1;

        let mut order: Vec<usize> = (0..panels.len()).collect();
        order.sort_by_key(|&i| std::cmp::Reverse(panels[i].area()));

        let mut split_at: Option<(usize, Polygon, Polygon)> = None;
        for i in order {
            if let Some((a, b)) = best_split(&panels[i], segments, config) {
                split_at = Some((i, a, b));
                break;
            }
        }

        match split_at {
            Some((i, a, b)) => {
                panels.remove(i);
                panels.push(Panel::from_polygon(a));
                panels.push(Panel::from_polygon(b));
            }
            None => break,
        }
    }

    log::debug!("[Panels] split_panels: {} panels after {} iteration(s)", panels.len(), iterations);
    panels
}

/// Among all valid pinch points in `panel`'s source polygon, returns the cut
/// that maximises the shorter of the two resulting areas.
fn best_split(panel: &Panel, segments: &[Segment], config: &PageConfig) -> Option<(Polygon, Polygon)> {
    let polygon = panel.polygon.as_ref()?;
    let n = polygon.len();
    if n < 4 {
        return None;
    }

    let mut best: Option<(f64, Polygon, Polygon)> = None;

    for i in 0..n {
        for j in (i + 1)..n {
            if are_consecutive(i, j, n) {
                continue;
            }
            if !polygon.chord_lies_inside(i, j) {
                continue;
            }

            let chord = Segment::new(polygon.points[i], polygon.points[j]);
            let is_axis_cut = chord.is_axis_aligned(10.0);
            let follows_detected_line =
                segments.iter().any(|s| s.aligns_with(&chord, 90.0, 10.0));
            if !is_axis_cut && !follows_detected_line {
                continue;
            }

            let (part_a, part_b) = polygon.split_at(i, j);
            let panel_a = Panel::from_polygon(part_a.clone());
            let panel_b = Panel::from_polygon(part_b.clone());
            if panel_a.is_small(config) || panel_b.is_small(config) {
                continue;
            }

            let score = (panel_a.area() as f64).min(panel_b.area() as f64);
            let better = best.as_ref().map_or(true, |(best_score, _, _)| score > *best_score);
            if better {
                best = Some((score, part_a, part_b));
            }
        }
    }

    best.map(|(_, a, b)| (a, b))
}

fn are_consecutive(i: usize, j: usize, n: usize) -> bool {
    j == i + 1 || (i == 0 && j == n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn cfg(w: i32, h: i32) -> PageConfig {
        PageConfig { image_size: (w, h), ..PageConfig::default() }
    }

    /// A dumbbell shape: two 400x600 boxes joined by a thin neck at y=290..310.
    fn dumbbell() -> Polygon {
        Polygon::new(vec![
            Point::new(0, 0),
            Point::new(400, 0),
            Point::new(400, 290),
            Point::new(500, 290),
            Point::new(900, 0),
            Point::new(900, 600),
            Point::new(500, 310),
            Point::new(400, 310),
            Point::new(400, 600),
            Point::new(0, 600),
        ])
    }

    #[test]
    fn splits_pinched_contour_into_two_panels() {
        let panel = Panel::from_polygon(dumbbell());
        let result = split_panels(vec![panel], &[], &cfg(900, 600));
        assert_eq!(result.len(), 2);
        for p in &result {
            assert!(p.w() >= 390 && p.h() >= 590);
        }
    }

    #[test]
    fn leaves_simple_rectangle_unsplit() {
        let panel = Panel::from_polygon(Polygon::new(vec![
            Point::new(0, 0),
            Point::new(400, 0),
            Point::new(400, 600),
            Point::new(0, 600),
        ]));
        let result = split_panels(vec![panel], &[], &cfg(900, 600));
        assert_eq!(result.len(), 1);
    }
}
