//! §4.4 Grouping of small panels.

use crate::config::PageConfig;
use crate::geometry::Panel;
use crate::union_find::UnionFind;

/// Collapses connected components of the *close* graph restricted to
/// currently-small panels: every class of size >= 2 becomes one panel (the
/// tight bounding box of its members); singletons and non-small panels pass
/// through untouched.
pub fn group_small_panels(panels: Vec<Panel>, config: &PageConfig) -> Vec<Panel> {
    let small_indices: Vec<usize> =
        (0..panels.len()).filter(|&i| panels[i].is_small(config)).collect();

    let mut uf: UnionFind<usize> = UnionFind::with_capacity(small_indices.len());
    for &i in &small_indices {
        uf.make_set(i);
    }
    for (a_pos, &a) in small_indices.iter().enumerate() {
        for &b in small_indices.iter().skip(a_pos + 1) {
            if panels[a].is_close(&panels[b], config) {
                uf.union(&a, &b);
            }
        }
    }

    let groups = uf.groups();
    let mut grouped_index: std::collections::HashMap<usize, usize> = std::collections::HashMap::new();
    for members in groups.values() {
        if members.len() >= 2 {
            for &m in members {
                grouped_index.insert(m, *members.iter().min().unwrap());
            }
        }
    }

    let mut result = Vec::with_capacity(panels.len());
    let mut merged: std::collections::HashMap<usize, Panel> = std::collections::HashMap::new();

    for (i, panel) in panels.into_iter().enumerate() {
        match grouped_index.get(&i) {
            Some(&root) => {
                merged
                    .entry(root)
                    .and_modify(|existing| *existing = existing.merge(&panel))
                    .or_insert(panel);
            }
            None => result.push(panel),
        }
    }
    result.extend(merged.into_values());

    log::debug!("[Panels] group_small_panels: {} panels after grouping", result.len());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> PageConfig {
        PageConfig { image_size: (300, 300), ..PageConfig::default() }
    }

    #[test]
    fn close_small_panels_are_merged() {
        let panels = vec![
            Panel::from_xyrb(0, 0, 10, 10),
            Panel::from_xyrb(12, 0, 20, 10),
            Panel::from_xyrb(200, 200, 280, 280), // big, untouched
        ];
        let result = group_small_panels(panels, &cfg());
        assert_eq!(result.len(), 2);
        assert!(result.iter().any(|p| p.to_xywh() == [200, 200, 80, 80]));
        assert!(result.iter().any(|p| p.x == 0 && p.r == 20));
    }

    #[test]
    fn singleton_small_panel_is_untouched() {
        let panels = vec![Panel::from_xyrb(0, 0, 10, 10)];
        let result = group_small_panels(panels, &cfg());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].to_xywh(), [0, 0, 10, 10]);
    }
}
