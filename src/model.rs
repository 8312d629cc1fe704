//! Data model for extracted routes — format-agnostic.

use std::path::{Path, PathBuf};

/// One route binding extracted from a controller file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    /// @Tags value — the logical group the route belongs to
    pub tag: String,
    /// HTTP verb from @Router, upper-cased (GET, POST, ...)
    pub method: String,
    /// Path from @Router, as declared in the annotation
    pub path: String,
    /// Method name of the handler
    pub handler: String,
    /// Receiver type name of the handler
    pub controller: String,
}

/// All routes sharing one tag, in discovery order.
#[derive(Debug)]
pub struct RouteGroup {
    /// Raw @Tags value (e.g. "ProductController")
    pub tag: String,
    /// File-safe name: "controller" suffix stripped, snake-cased ("product")
    pub clean_name: String,
    pub routes: Vec<RouteRecord>,
}

/// Path conventions of the target project, derived from one root directory.
///
/// Keeps every hardcoded location in one place so the pipeline stages take
/// plain paths instead of re-deriving them.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory scanned for annotated controller files.
    pub fn controllers_dir(&self) -> PathBuf {
        self.root.join("api").join("v1").join("controllers")
    }

    /// Directory receiving generated `<name>_route.go` files.
    pub fn routes_dir(&self) -> PathBuf {
        self.root.join("api").join("v1").join("routes")
    }

    /// The dispatch registry patched at its marker line.
    pub fn registry_file(&self) -> PathBuf {
        self.routes_dir().join("base.go")
    }

    /// The dependency-container declaration (`AppContainer`).
    pub fn container_file(&self) -> PathBuf {
        self.root.join("di").join("wire.go")
    }

    /// The `ProviderSet` declaration.
    pub fn providers_file(&self) -> PathBuf {
        self.controllers_dir().join("providers.go")
    }

    /// The project manifest holding the module identifier.
    pub fn manifest_file(&self) -> PathBuf {
        self.root.join("go.mod")
    }

    /// On-disk skeleton template for the `route` subcommand.
    pub fn route_template_file(&self) -> PathBuf {
        self.root
            .join("templates")
            .join("api")
            .join("v1")
            .join("routes")
            .join("route.go.tmpl")
    }
}
