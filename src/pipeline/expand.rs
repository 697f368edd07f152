//! §4.8 Expand panels.

use crate::config::PageConfig;
use crate::geometry::Panel;
use crate::neighbour::{actual_gutters, find_neighbour, Direction};

/// Grows every panel outward in all four directions until it touches either
/// a neighbour (minus one gutter) or the outer frame established by the
/// current panel set. The gutter estimate is computed once, before any
/// panel is touched.
pub fn expand_panels(mut panels: Vec<Panel>, config: &PageConfig) -> Vec<Panel> {
    if panels.is_empty() {
        return panels;
    }

    let gutters = actual_gutters(&panels, config.gutter_aggregator);
    let before = panels.clone();

    let frame_left = before.iter().map(|p| p.x).min().unwrap();
    let frame_top = before.iter().map(|p| p.y).min().unwrap();
    let frame_right = before.iter().map(|p| p.r).max().unwrap();
    let frame_bottom = before.iter().map(|p| p.b).max().unwrap();

    for i in 0..panels.len() {
        if let Some(n) = find_neighbour(&before, i, Direction::Left) {
            let candidate = before[n].r + gutters.x;
            if candidate < panels[i].x {
                panels[i].x = candidate;
            }
        } else if frame_left < panels[i].x {
            panels[i].x = frame_left;
        }

        if let Some(n) = find_neighbour(&before, i, Direction::Right) {
            let candidate = before[n].x + gutters.r;
            if candidate > panels[i].r {
                panels[i].r = candidate;
            }
        } else if frame_right > panels[i].r {
            panels[i].r = frame_right;
        }

        if let Some(n) = find_neighbour(&before, i, Direction::Top) {
            let candidate = before[n].b + gutters.y;
            if candidate < panels[i].y {
                panels[i].y = candidate;
            }
        } else if frame_top < panels[i].y {
            panels[i].y = frame_top;
        }

        if let Some(n) = find_neighbour(&before, i, Direction::Bottom) {
            let candidate = before[n].y + gutters.b;
            if candidate > panels[i].b {
                panels[i].b = candidate;
            }
        } else if frame_bottom > panels[i].b {
            panels[i].b = frame_bottom;
        }

        panels[i].polygon = None;
    }

    log::debug!("[Panels] expand_panels: gutters=({}, {}) over {} panels", gutters.x, gutters.y, panels.len());
    panels
}
