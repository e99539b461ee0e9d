// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CEM-Lite command-line front-end
//!
//! Plays the role of the host-UI surface: the user-facing actions are
//! subcommands, selections and settings live in the project file, and every
//! action reports a terminal info/warning/error status.

mod commands;
mod project;

use anyhow::Result;
use cem_lite_model::{MeshExporter, VoxelEngine};
use cem_lite_plot::PlotRenderer;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CEM-Lite voxelization and simulation toolkit.
#[derive(Parser, Debug)]
#[command(name = "cem")]
#[command(about = "Voxelize meshes, run grouped-average simulations, shape chart data")]
struct Cli {
    /// Project directory holding the project file
    #[arg(short, long, default_value = ".")]
    project_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a project file in the project directory
    Init,
    /// Manage the registered object list
    Objects {
        #[command(subcommand)]
        action: ObjectsAction,
    },
    /// Store input-file selections in the project
    Select {
        #[command(subcommand)]
        action: SelectAction,
    },
    /// Voxelize every registered object into OBJ plus material files
    Convert {
        /// Voxel edge length, overriding the project setting
        #[arg(long)]
        voxel_size: Option<f64>,
    },
    /// Run the grouped-average simulation over the selected geometry file
    Simulate {
        /// Number of axes to retain (1, 2 or 3)
        #[arg(short, long)]
        dimension: Option<u8>,
        /// Geometry file, overriding the stored selection
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Frequency multiplier, overriding the project setting
        #[arg(short, long)]
        frequency: Option<f64>,
        /// Output directory (default: <project>/results)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Build a chart from the selected data file and render it
    Visualize {
        /// Chart kind: heatmap, scatter, bar, bubble or surface
        #[arg(short, long)]
        chart: Option<String>,
        /// Data file, overriding the stored selection
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Image output path (default: input with .png extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum ObjectsAction {
    /// Register or update an object
    Update {
        /// Object name, unique within the project
        name: String,
        /// Path to the object's surface-mesh file
        #[arg(long)]
        mesh: PathBuf,
        /// Electric conductivity (default 1.0)
        #[arg(long)]
        sigma: Option<f64>,
        /// Magnetic permeability (default 1.0)
        #[arg(long)]
        mu: Option<f64>,
        /// Electric permittivity (default 1.0)
        #[arg(long)]
        epsilon: Option<f64>,
    },
    /// List registered objects
    List,
    /// Remove an object by name
    Remove { name: String },
}

#[derive(Subcommand, Debug)]
enum SelectAction {
    /// Select the geometry file for simulation
    Sim { path: PathBuf },
    /// Select the data file for visualization
    Visu { path: PathBuf },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(err) = run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let dir = cli.project_dir.as_path();

    // External collaborators: the stock CLI links no mesh exporter,
    // voxelization engine or plot renderer; host builds supply them here.
    let exporter: Option<&dyn MeshExporter> = None;
    let engine: Option<&dyn VoxelEngine> = None;
    let renderer: Option<&dyn PlotRenderer> = None;

    match cli.command {
        Command::Init => commands::init(dir),
        Command::Objects { action } => match action {
            ObjectsAction::Update {
                name,
                mesh,
                sigma,
                mu,
                epsilon,
            } => commands::update_object(dir, &name, mesh, sigma, mu, epsilon),
            ObjectsAction::List => commands::list_objects(dir),
            ObjectsAction::Remove { name } => commands::remove_object(dir, &name),
        },
        Command::Select { action } => match action {
            SelectAction::Sim { path } => commands::select_simulation(dir, path),
            SelectAction::Visu { path } => commands::select_visualization(dir, path),
        },
        Command::Convert { voxel_size } => commands::convert(dir, exporter, engine, voxel_size),
        Command::Simulate {
            dimension,
            input,
            frequency,
            output_dir,
        } => commands::simulate(
            dir,
            commands::SimulateOpts {
                dimension,
                input,
                frequency,
                output_dir,
            },
        ),
        Command::Visualize {
            chart,
            input,
            output,
        } => commands::visualize(
            dir,
            renderer,
            commands::VisualizeOpts {
                chart,
                input,
                output,
            },
        ),
    }
}
