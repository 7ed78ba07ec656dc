use std::path::Path;

use crate::layout::{error::LayoutError, layout_model::LayoutSpec};

/// Load layouts from a single YAML file or a directory of YAML files.
///
/// Directory entries are sorted by layout name so reports are stable.
pub fn load_layouts(path: &str) -> Result<Vec<LayoutSpec>, LayoutError> {
    let metadata = std::fs::metadata(path).map_err(|source| LayoutError::Read {
        path: path.to_string(),
        source,
    })?;

    if !metadata.is_dir() {
        return Ok(vec![load_layout_file(Path::new(path))?]);
    }

    let entries = std::fs::read_dir(path).map_err(|source| LayoutError::Read {
        path: path.to_string(),
        source,
    })?;

    let mut layouts = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LayoutError::Read {
            path: path.to_string(),
            source,
        })?;
        let p = entry.path();
        if p.extension().is_some_and(|e| e == "yaml" || e == "yml") {
            layouts.push(load_layout_file(&p)?);
        }
    }
    layouts.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(layouts)
}

pub fn load_layout_file(path: &Path) -> Result<LayoutSpec, LayoutError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| LayoutError::Read {
        path: display.clone(),
        source,
    })?;
    parse_layout(&content).map_err(|source| LayoutError::Parse {
        path: display,
        source,
    })
}

pub fn parse_layout(yaml: &str) -> Result<LayoutSpec, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}
