//! License sidecar loading: `<image_path>.license`, parsed as JSON.

use std::path::Path;

use serde_json::Value;

use crate::error::{PanelError, Result};

/// Loads the license sidecar for `image_path`, if one exists.
///
/// Returns `Ok(None)` when no sidecar file is present. A sidecar that exists
/// but fails to parse as JSON is a fatal [`PanelError::InvalidLicense`].
pub fn load_license(image_path: &Path) -> Result<Option<Value>> {
    let mut sidecar = image_path.as_os_str().to_os_string();
    sidecar.push(".license");
    let sidecar = Path::new(&sidecar);

    if !sidecar.is_file() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(sidecar).map_err(|e| PanelError::InvalidLicense {
        path: sidecar.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| PanelError::InvalidLicense { path: sidecar.display().to_string(), message: e.to_string() })
}
