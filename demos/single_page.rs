//! Processes one synthetic page and prints its result as JSON.

use std::path::Path;

use kumiko_panels::{PageConfig, Point, SyntheticBackend, process_page};

fn main() {
    env_logger::init();

    let backend = SyntheticBackend::new(800, 1200).with_contour(vec![
        Point::new(40, 40),
        Point::new(760, 40),
        Point::new(760, 1160),
        Point::new(40, 1160),
    ]);

    let result = process_page(&backend, Path::new("page.png"), None, &PageConfig::default())
        .expect("processing a synthetic page never fails");

    println!("{}", serde_json::to_string_pretty(&result.to_summary()).unwrap());
}
