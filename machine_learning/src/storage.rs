//! Persistence of trained parameters as JSON.
//!
//! A model file holds an array of parameter groups:
//! `[{"weights": [...], "biases": [...]}, ...]`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    arch::Params,
    error::{MlErr, Result},
};

/// One group of parameters as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerParams {
    pub weights: Vec<f32>,
    pub biases: Vec<f32>,
}

impl From<Params> for LayerParams {
    fn from(params: Params) -> Self {
        Self {
            weights: vec![params.weight],
            biases: vec![params.bias],
        }
    }
}

impl TryFrom<&LayerParams> for Params {
    type Error = MlErr;

    fn try_from(layer: &LayerParams) -> Result<Self> {
        match (layer.weights.as_slice(), layer.biases.as_slice()) {
            (&[weight], &[bias]) => Ok(Params { weight, bias }),
            ([_], biases) => Err(MlErr::DataShapeMismatch {
                a: "biases",
                b: "single neuron",
                got: biases.len(),
                expected: 1,
            }),
            (weights, _) => Err(MlErr::DataShapeMismatch {
                a: "weights",
                b: "single neuron",
                got: weights.len(),
                expected: 1,
            }),
        }
    }
}

/// Writes `layers` to `path`, or to the first free `<stem>_<n><.ext>` sibling if `path` exists.
///
/// # Returns
/// The path actually written.
///
/// # Errors
/// `Storage` if serialization or the write fails.
pub fn save<P: AsRef<Path>>(layers: &[LayerParams], path: P) -> Result<PathBuf> {
    let path = unique_path(path.as_ref());
    let json = serde_json::to_string(layers)?;

    fs::write(&path, json)?;
    info!("model saved to file: {}", path.display());

    Ok(path)
}

/// Reads the parameter groups stored at `path`.
///
/// # Errors
/// `Storage` if the file can't be read or isn't a valid model file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<LayerParams>> {
    let json = fs::read_to_string(path)?;
    let layers = serde_json::from_str(&json)?;

    Ok(layers)
}

fn unique_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (1..)
        .map(|count| path.with_file_name(format!("{stem}_{count}{ext}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}
