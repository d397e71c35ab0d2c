//! JSON manifest holding the package version (`package.json` style).

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::Version;
use crate::error::{ReleaseError, Result};

/// Parsed manifest: the whole JSON object plus its version triple.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    fields: Map<String, Value>,
    version: Version,
}

impl Manifest {
    /// Parse manifest text; `path` is only used for error messages.
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| ReleaseError::manifest_format(path, e.to_string()))?;

        let Value::Object(fields) = value else {
            return Err(ReleaseError::manifest_format(path, "expected a JSON object"));
        };

        let raw = fields
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| ReleaseError::manifest_format(path, "missing string field 'version'"))?;

        let version =
            Version::parse(raw).map_err(|e| ReleaseError::manifest_format(path, e.to_string()))?;

        Ok(Manifest { fields, version })
    }

    /// Read and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ReleaseError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Replace the version, leaving every other field untouched.
    pub fn set_version(&mut self, version: Version) {
        self.version = version;
        self.fields
            .insert("version".to_string(), Value::String(version.to_string()));
    }

    /// Two-space indented JSON with a trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut text = serde_json::to_string_pretty(&self.fields)?;
        text.push('\n');
        Ok(text)
    }

    /// Overwrite the manifest at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self
            .to_json()
            .map_err(|e| ReleaseError::manifest_format(path, e.to_string()))?;
        fs::write(path, text).map_err(|source| ReleaseError::ManifestWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
