//! §4.2 Initial panel extraction.

use crate::config::PageConfig;
use crate::geometry::Panel;
use crate::vision::VisionOutput;

/// Simplifies each contour (Douglas-Peucker, tolerance `0.001 * perimeter`)
/// and turns it into a candidate panel, dropping any that are *very small*.
pub fn initial_panels(vision: &VisionOutput, config: &PageConfig) -> Vec<Panel> {
    let panels: Vec<Panel> = vision
        .contours
        .iter()
        .map(|contour| {
            let epsilon = contour.perimeter() * 0.001;
            Panel::from_polygon(contour.simplify(epsilon))
        })
        .filter(|panel| !panel.is_very_small(config))
        .collect();

    log::debug!("[Panels] initial_panels: {} contours -> {} panels", vision.contours.len(), panels.len());
    panels
}
