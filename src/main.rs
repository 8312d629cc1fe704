//! fibergen — route and dependency scaffolding for Fiber-style Go projects.
//!
//! Scans annotated controller files and keeps the generated wiring current:
//!
//! - **routes** — extract `@Tags`/`@Router` annotations, write one
//!   registration file per tag, and patch the dispatch registry at its
//!   marker line.
//! - **controller** — scaffold a new controller and register it in the
//!   provider list and the dependency container, then trigger the external
//!   wiring step when something actually changed.
//! - **route** — render a single skeleton route file from the project's
//!   on-disk template.
//!
//! The tool never parses Go; it works on fixed annotation shapes and a fixed
//! method-signature shape, line by line.

mod extract;
mod group;
mod manifest;
mod model;
mod patch;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use model::Project;
use patch::PatchOutcome;
use render::Templates;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Parser)]
#[command(
    name = "fibergen",
    about = "Generate route registrations and dependency wiring from controller annotations"
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Generate per-tag route files from controller annotations and patch the registry
    Routes {
        /// Project root directory
        #[arg(short = 'd', long, default_value = ".")]
        dir: PathBuf,
    },
    /// Scaffold a controller and register it in the provider list and container
    Controller {
        /// Controller base name (e.g. "order" → OrderController)
        name: String,
        /// Project root directory
        #[arg(short = 'd', long, default_value = ".")]
        dir: PathBuf,
    },
    /// Render a skeleton route file from the project's template
    Route {
        /// Route file name (without extension)
        name: String,
        /// Project root directory
        #[arg(short = 'd', long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Cmd::Routes { dir } => cmd_routes(&Project::new(dir)),
        Cmd::Controller { name, dir } => cmd_controller(&Project::new(dir), &name),
        Cmd::Route { name, dir } => cmd_route(&Project::new(dir), &name),
    }
}

/// Full generation pipeline: extract → group → render → patch registry.
fn cmd_routes(project: &Project) -> Result<()> {
    let routes_dir = project.routes_dir();
    fs::create_dir_all(&routes_dir)
        .with_context(|| format!("failed to create routes directory: {}", routes_dir.display()))?;

    let controller_files = discover_controllers(project)?;
    if controller_files.is_empty() {
        bail!(
            "no controller files found in {}",
            project.controllers_dir().display()
        );
    }

    // Extract across all controller files; an unreadable file is skipped,
    // not fatal
    let mut records = Vec::new();
    for path in &controller_files {
        match fs::read_to_string(path) {
            Ok(content) => records.extend(extract::extract(&content)),
            Err(e) => eprintln!("warning: skipping {}: {}", path.display(), e),
        }
    }

    let groups = group::group_routes(records);
    let module = manifest::module_name(&project.manifest_file());
    let templates = Templates::default();

    // One file per group, fully overwritten; a failed group doesn't abort
    // the rest
    for group in &groups {
        let out_path = routes_dir.join(format!("{}_route.go", group.clean_name));
        let content = render::render_group(&templates, group, &module);
        match fs::write(&out_path, content) {
            Ok(()) => println!("generated {}", out_path.display()),
            Err(e) => eprintln!("warning: cannot write {}: {}", out_path.display(), e),
        }
    }

    patch_registry(project);
    Ok(())
}

/// Controller files in sorted order, for deterministic discovery order.
fn discover_controllers(project: &Project) -> Result<Vec<PathBuf>> {
    let pattern = project.controllers_dir().join("*.go");
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())
        .with_context(|| format!("invalid glob pattern: {}", pattern.display()))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Rewrite the registry's marker line with any registration calls not yet
/// present. Read or anchor failures leave the registry untouched.
fn patch_registry(project: &Project) {
    let registry = project.registry_file();

    let candidates = match patch::registry::collect_candidates(&project.routes_dir()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("warning: cannot scan generated routes: {}", e);
            return;
        }
    };

    let content = match fs::read_to_string(&registry) {
        Ok(c) => c,
        Err(e) => {
            eprintln!(
                "warning: cannot read {}: {} (registry left untouched)",
                registry.display(),
                e
            );
            return;
        }
    };

    match patch::registry::patch_registry(&content, &candidates) {
        PatchOutcome::Changed(patched) => match fs::write(&registry, patched) {
            Ok(()) => println!("updated {}", registry.display()),
            Err(e) => eprintln!("warning: cannot write {}: {}", registry.display(), e),
        },
        PatchOutcome::AlreadyPresent => println!("{} is up to date", registry.display()),
        PatchOutcome::NoAnchor => eprintln!(
            "warning: no marker line in {} (registry left untouched)",
            registry.display()
        ),
    }
}

/// Scaffold a controller, then register it in the provider list and the
/// container. The external wiring step runs only when a patch changed
/// something.
fn cmd_controller(project: &Project, name: &str) -> Result<()> {
    let controller_name = format!("{}Controller", render::capitalize(name));
    let controllers_dir = project.controllers_dir();
    let file = controllers_dir.join(format!("{}.go", name.to_lowercase()));
    if file.exists() {
        bail!("controller file already exists: {}", file.display());
    }

    fs::create_dir_all(&controllers_dir).with_context(|| {
        format!("failed to create controllers directory: {}", controllers_dir.display())
    })?;

    let templates = Templates::default();
    fs::write(&file, render::render_controller(&templates, &controller_name))
        .with_context(|| format!("failed to write {}", file.display()))?;
    println!("created {}", file.display());

    let registered_provider = apply_patch(
        &project.providers_file(),
        &format!("New{}", controller_name),
        |content| patch::providers::add_provider(content, &controller_name),
    );
    let registered_field = apply_patch(
        &project.container_file(),
        &controller_name,
        |content| patch::container::add_container_field(content, &controller_name),
    );

    if registered_provider || registered_field {
        run_wiring_step(project);
    }
    Ok(())
}

/// Read one patch target, apply a patch, write back on change. Returns
/// whether the artifact changed; every failure is a warning, never fatal.
fn apply_patch<F>(target: &Path, entry: &str, patch: F) -> bool
where
    F: FnOnce(&str) -> PatchOutcome,
{
    let content = match fs::read_to_string(target) {
        Ok(c) => c,
        Err(e) => {
            eprintln!(
                "warning: cannot read {}: {} (left untouched)",
                target.display(),
                e
            );
            return false;
        }
    };

    match patch(&content) {
        PatchOutcome::Changed(patched) => match fs::write(target, patched) {
            Ok(()) => {
                println!("registered {} in {}", entry, target.display());
                true
            }
            Err(e) => {
                eprintln!("warning: cannot write {}: {}", target.display(), e);
                false
            }
        },
        PatchOutcome::AlreadyPresent => {
            println!("{} already registered in {}", entry, target.display());
            false
        }
        PatchOutcome::NoAnchor => {
            eprintln!(
                "warning: no insertion anchor in {} (left untouched)",
                target.display()
            );
            false
        }
    }
}

/// External collaborator: regenerate the injector after container/provider
/// changes. Absence of the tool is a warning, not an error.
fn run_wiring_step(project: &Project) {
    match Command::new("wire").arg("./di").current_dir(project.root()).status() {
        Ok(status) if status.success() => println!("wire ./di completed"),
        Ok(status) => eprintln!("warning: wire ./di exited with {}", status),
        Err(e) => eprintln!("warning: cannot run wire: {}", e),
    }
}

/// Render one skeleton route file from the on-disk template.
fn cmd_route(project: &Project, name: &str) -> Result<()> {
    let template_path = project.route_template_file();
    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("cannot read template: {}", template_path.display()))?;

    let routes_dir = project.routes_dir();
    fs::create_dir_all(&routes_dir)
        .with_context(|| format!("failed to create routes directory: {}", routes_dir.display()))?;

    let out_path = routes_dir.join(format!("{}.go", name));
    fs::write(&out_path, render::render_skeleton(&template, name))
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    println!("created {}", out_path.display());
    Ok(())
}
