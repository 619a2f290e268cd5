use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;
use std::path::Path;

use super::command::Script;
use crate::error::ScriptError;

impl Script {
    /// Renders the script as indented JSON. Output is deterministic: the
    /// same script always yields byte-identical text.
    pub fn to_json_string(&self) -> Result<String, ScriptError> {
        serde_json::to_string_pretty(self)
            .map_err(|source| ScriptError::EncodeFailure { source })
    }

    /// Writes the script as indented JSON, the wire form the IoT runtime
    /// consumes.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ScriptError> {
        let path = path.as_ref();
        let content = self.to_json_string()?;
        fs::write(path, content).map_err(|source| ScriptError::IoFailure {
            path: path.display().to_string(),
            source,
        })
    }

    /// Reads a script back from its JSON wire form.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ScriptError::IoFailure {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ScriptError::DecodeFailure {
            path: path.display().to_string(),
            source,
        })
    }

    /// Saves the script as a compact binary artifact, for runtimes that
    /// prefer not to re-parse JSON on every boot.
    pub fn save_binary(&self, path: impl AsRef<Path>) -> Result<(), ScriptError> {
        let path = path.as_ref();
        let bytes =
            encode_to_vec(self, standard()).map_err(|e| ScriptError::ArtifactEncodeFailure {
                detail: e.to_string(),
            })?;
        fs::write(path, bytes).map_err(|source| ScriptError::IoFailure {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads a script from a binary artifact.
    pub fn from_binary_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ScriptError::IoFailure {
            path: path.display().to_string(),
            source,
        })?;
        decode_from_slice(&bytes, standard())
            .map(|(script, _)| script)
            .map_err(|e| ScriptError::ArtifactDecodeFailure {
                path: path.display().to_string(),
                detail: e.to_string(),
            })
    }
}
