//! Processes a handful of synthetic pages in parallel and prints a summary
//! line per page. Requires the `parallel` feature.

use std::path::PathBuf;

use kumiko_panels::{PageConfig, PageInput, Point, SyntheticBackend, process_pages_parallel};

fn main() {
    env_logger::init();

    let backend = SyntheticBackend::new(800, 1200).with_contour(vec![
        Point::new(40, 40),
        Point::new(760, 40),
        Point::new(760, 1160),
        Point::new(40, 1160),
    ]);

    let inputs: Vec<PageInput> = (0..4)
        .map(|i| PageInput { path: PathBuf::from(format!("page-{i}.png")), url: None })
        .collect();

    let results = process_pages_parallel(&backend, &inputs, &PageConfig::default());

    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(page) => println!("{}: {} panels", input.path.display(), page.panels.len()),
            Err(err) => eprintln!("{}: {err}", input.path.display()),
        }
    }
}
