use crate::error::{Error, Result};
use crate::json::JsonInspector;
use crate::toml::TomlInspector;
use std::fmt;
use std::path::Path;
use treescope_types::{EntityHandle, Inspect};

/// Document formats with a shipped inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Toml => write!(f, "toml"),
        }
    }
}

/// Detect the document format from the file extension.
pub fn detect_format(path: &Path) -> Option<Format> {
    match path.extension()?.to_str()? {
        "json" => Some(Format::Json),
        "toml" => Some(Format::Toml),
        _ => None,
    }
}

/// Parse `text` with the inspector for `format`, returning the inspector
/// and the root handle.
pub fn create_inspector(format: Format, text: &str) -> Result<(Box<dyn Inspect>, EntityHandle)> {
    match format {
        Format::Json => {
            let root = JsonInspector::load_str(text)?;
            Ok((Box::new(JsonInspector), root))
        }
        Format::Toml => {
            let root = TomlInspector::load_str(text)?;
            Ok((Box::new(TomlInspector), root))
        }
    }
}

/// Read `path` and build its inspector, detecting the format from the
/// extension unless `format` overrides it.
pub fn load_document(
    path: &Path,
    format: Option<Format>,
) -> Result<(Box<dyn Inspect>, EntityHandle)> {
    let format = match format {
        Some(f) => f,
        None => detect_format(path)
            .ok_or_else(|| Error::UnknownFormat(path.display().to_string()))?,
    };
    let text = std::fs::read_to_string(path)?;
    create_inspector(format, &text)
}
