// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command implementations
//!
//! One function per user-facing action. Every action is gated on its
//! preconditions (a saved project, a selected input file) and reports a
//! terminal info/warning/error status through the logger. Collaborators
//! that are not part of this toolkit - the voxelization engine and the plot
//! renderer - are passed in as optional trait objects.

use crate::project::Project;
use anyhow::{bail, Context, Result};
use cem_lite_model::{
    ChartKind, Dimension, Error, GlobalSettings, MeshExporter, MeshObject, SceneSource,
    VoxelEngine,
};
use cem_lite_parser::count_records;
use cem_lite_plot::{ChartSpec, ChartStyle, PlotRenderer, Table};
use cem_lite_sim::{run_simulation, SimulationConfig};
use cem_lite_voxel::Voxelizer;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the project root that receives voxelized OBJ files
pub const VOXELS_DIR: &str = "voxels";
/// Default directory under the project root for simulation output
pub const RESULTS_DIR: &str = "results";

/// Load the project, failing with a user-facing error when none is saved
fn load_saved(dir: &Path) -> Result<Project> {
    if !Project::exists(dir) {
        bail!(
            "Project not saved: no {} in {}. Run `cem init` first",
            crate::project::PROJECT_FILE,
            dir.display()
        );
    }
    Project::load(dir)
}

/// `cem init` - create the project file
pub fn init(dir: &Path) -> Result<()> {
    if Project::exists(dir) {
        warn!("Project file already exists in {}", dir.display());
        return Ok(());
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create project directory {}", dir.display()))?;
    Project::default().save(dir)?;
    info!("Created project file in {}", dir.display());
    Ok(())
}

/// `cem objects update` - register or update one object
pub fn update_object(
    dir: &Path,
    name: &str,
    mesh: PathBuf,
    sigma: Option<f64>,
    mu: Option<f64>,
    epsilon: Option<f64>,
) -> Result<()> {
    let mut project = load_saved(dir)?;

    let mut object = MeshObject::new(name, mesh);
    if let Some(sigma) = sigma {
        object.material.sigma = sigma;
    }
    if let Some(mu) = mu {
        object.material.mu = mu;
    }
    if let Some(epsilon) = epsilon {
        object.material.epsilon = epsilon;
    }
    if !object.mesh_path.is_file() {
        warn!("Mesh file {} does not exist yet", object.mesh_path.display());
    }

    project.upsert_object(object);
    project.save(dir)?;
    info!("Registered object {name}");
    Ok(())
}

/// `cem objects list` - print the registered objects
pub fn list_objects(dir: &Path) -> Result<()> {
    let project = load_saved(dir)?;
    if project.objects.is_empty() {
        info!("No objects registered");
        return Ok(());
    }
    for object in &project.objects {
        println!(
            "{}  {}  sigma={} mu={} epsilon={}",
            object.name,
            object.mesh_path.display(),
            object.material.sigma,
            object.material.mu,
            object.material.epsilon
        );
    }
    Ok(())
}

/// `cem objects remove` - unregister one object
pub fn remove_object(dir: &Path, name: &str) -> Result<()> {
    let mut project = load_saved(dir)?;
    if project.remove_object(name) {
        project.save(dir)?;
        info!("Removed object {name}");
    } else {
        warn!("No object named {name}");
    }
    Ok(())
}

/// `cem select sim` - store the geometry file selection
pub fn select_simulation(dir: &Path, path: PathBuf) -> Result<()> {
    let mut project = load_saved(dir)?;

    match fs::read_to_string(&path) {
        Ok(content) => {
            let counts = count_records(&content);
            let vertices = counts.get("v").copied().unwrap_or(0);
            info!("Selected file: {} ({} vertex records)", path.display(), vertices);
        }
        Err(_) => warn!("Selected file {} is not readable yet", path.display()),
    }

    project.simulation_input = Some(path);
    project.save(dir)
}

/// `cem select visu` - store the data file selection
pub fn select_visualization(dir: &Path, path: PathBuf) -> Result<()> {
    let mut project = load_saved(dir)?;
    if !path.is_file() {
        warn!("Selected file {} does not exist yet", path.display());
    }
    info!("Selected file: {}", path.display());
    project.visualization_input = Some(path);
    project.save(dir)
}

/// `cem convert` - voxelize every registered object
///
/// When a mesh exporter is configured, each object's surface mesh is
/// exported to its registered path first. Writes `voxels/<name>.obj` plus
/// `materials/<name>.mtl` per object. The engine is an external
/// collaborator; without one the action fails with a user-facing error and
/// writes nothing.
pub fn convert(
    dir: &Path,
    exporter: Option<&dyn MeshExporter>,
    engine: Option<&dyn VoxelEngine>,
    voxel_size: Option<f64>,
) -> Result<()> {
    let project = load_saved(dir)?;

    let mut settings = project.settings;
    if let Some(voxel_size) = voxel_size {
        settings.voxel_size = voxel_size;
    }
    settings.validate()?;

    if project.objects.is_empty() {
        warn!("No objects registered; nothing to convert");
        return Ok(());
    }
    let Some(engine) = engine else {
        return Err(Error::EngineUnavailable.into());
    };

    let voxels_dir = dir.join(VOXELS_DIR);
    fs::create_dir_all(&voxels_dir)
        .with_context(|| format!("Failed to create {}", voxels_dir.display()))?;

    info!("Conversion to OBJ started");
    for object in project.selected_objects() {
        if let Some(exporter) = exporter {
            exporter
                .export(std::slice::from_ref(&object), &object.mesh_path)
                .with_context(|| format!("Failed to export {}", object.name))?;
        }
        let obj_file = voxels_dir.join(format!("{}.obj", object.name));
        let voxelizer = Voxelizer::new(&object.mesh_path, object.name.as_str(), dir)
            .with_voxel_size(settings.voxel_size);
        voxelizer
            .export_obj(engine, &obj_file, Some(object.material))
            .with_context(|| format!("Failed to voxelize {}", object.name))?;
        info!("Converted {} -> {}", object.name, obj_file.display());
    }
    info!("Conversion to OBJ completed");
    Ok(())
}

/// Options for `cem simulate`; flags override stored project state
#[derive(Debug, Default)]
pub struct SimulateOpts {
    pub dimension: Option<u8>,
    pub input: Option<PathBuf>,
    pub frequency: Option<f64>,
    pub output_dir: Option<PathBuf>,
}

/// `cem simulate` - run the grouped-average simulation
pub fn simulate(dir: &Path, opts: SimulateOpts) -> Result<()> {
    let project = load_saved(dir)?;

    // Reject an unsupported dimensionality before any extraction
    let dimension = match opts.dimension {
        Some(value) => Dimension::try_from(value)?,
        None => project.simulation_type,
    };
    let Some(source) = opts.input.or(project.simulation_input) else {
        warn!("No geometry file selected. Select a file to simulate.");
        return Ok(());
    };

    let frequency = opts.frequency.or(project.settings.frequency);
    GlobalSettings {
        voxel_size: project.settings.voxel_size,
        frequency,
    }
    .validate()?;

    let output_dir = opts.output_dir.unwrap_or_else(|| dir.join(RESULTS_DIR));
    let config = SimulationConfig {
        dimension,
        source: source.clone(),
        output_dir,
        frequency,
    };

    match run_simulation(&config)? {
        Some(path) => info!(
            "Simulation on {} completed successfully: {}",
            file_name(&source),
            path.display()
        ),
        None => warn!(
            "Geometry file {} not found; nothing was written",
            source.display()
        ),
    }
    Ok(())
}

/// Options for `cem visualize`; flags override stored project state
#[derive(Debug, Default)]
pub struct VisualizeOpts {
    pub chart: Option<String>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// `cem visualize` - shape the selected table into a chart and render it
pub fn visualize(dir: &Path, renderer: Option<&dyn PlotRenderer>, opts: VisualizeOpts) -> Result<()> {
    let project = load_saved(dir)?;

    let Some(input) = opts.input.or(project.visualization_input) else {
        warn!("No data file selected. Select a file to visualize.");
        return Ok(());
    };
    let kind = match opts.chart {
        Some(name) => name.parse::<ChartKind>()?,
        None => project.visualization_type,
    };

    let table = Table::load(&input)?;
    let spec = ChartSpec::from_table(kind, &table)?;
    let style = ChartStyle::from_headers(&table).with_title(file_name(&input));

    let Some(renderer) = renderer else {
        bail!("No plot renderer configured; cannot generate the visualization");
    };
    let output = opts.output.unwrap_or_else(|| input.with_extension("png"));
    renderer.render(&spec, &style, &output)?;

    info!(
        "Visualization for {} has been generated successfully: {}",
        file_name(&input),
        output.display()
    );
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
