// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! On-disk project state
//!
//! The project file is the CLI's stand-in for the host scene: it holds the
//! registered objects, the global settings and the current input-file
//! selections. Every command loads it, mutating commands save it back.

use anyhow::{Context, Result};
use cem_lite_model::{ChartKind, Dimension, GlobalSettings, MeshObject, SceneSource};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Project file name inside the project directory
pub const PROJECT_FILE: &str = "cem-project.json";

/// Persisted project state
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Global settings populated through the UI surface
    #[serde(default)]
    pub settings: GlobalSettings,
    /// Registered mesh objects, in registration order
    #[serde(default)]
    pub objects: Vec<MeshObject>,
    /// Selected geometry file for the simulation step
    #[serde(default)]
    pub simulation_input: Option<PathBuf>,
    /// Selected data file for the visualization step
    #[serde(default)]
    pub visualization_input: Option<PathBuf>,
    /// Selected simulation dimensionality
    #[serde(default)]
    pub simulation_type: Dimension,
    /// Selected chart kind
    #[serde(default)]
    pub visualization_type: ChartKind,
}

impl Project {
    /// Project file path inside `dir`
    pub fn path(dir: &Path) -> PathBuf {
        dir.join(PROJECT_FILE)
    }

    /// Whether a project file exists in `dir`
    pub fn exists(dir: &Path) -> bool {
        Self::path(dir).is_file()
    }

    /// Load the project file from `dir`
    pub fn load(dir: &Path) -> Result<Project> {
        let path = Self::path(dir);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read project file {}", path.display()))?;
        let project = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse project file {}", path.display()))?;
        Ok(project)
    }

    /// Save the project file into `dir`
    pub fn save(&self, dir: &Path) -> Result<()> {
        let path = Self::path(dir);
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(&path, content)
            .with_context(|| format!("Failed to write project file {}", path.display()))?;
        Ok(())
    }

    /// Register an object, replacing any existing one with the same name
    pub fn upsert_object(&mut self, object: MeshObject) {
        match self.objects.iter_mut().find(|o| o.name == object.name) {
            Some(existing) => *existing = object,
            None => self.objects.push(object),
        }
    }

    /// Remove an object by name; returns whether one was removed
    pub fn remove_object(&mut self, name: &str) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| o.name != name);
        self.objects.len() != before
    }

    /// Name-keyed index over the registered objects
    pub fn object_index(&self) -> FxHashMap<&str, &MeshObject> {
        self.objects.iter().map(|o| (o.name.as_str(), o)).collect()
    }
}

impl SceneSource for Project {
    fn selected_objects(&self) -> Vec<MeshObject> {
        self.objects.clone()
    }
}
