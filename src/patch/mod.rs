//! Idempotent in-place patchers for existing project artifacts.
//!
//! All three patchers follow the same contract: locate a structural anchor,
//! check whether the entry to insert is already textually present, and
//! splice only what is missing. Applying the same patch twice produces the
//! same bytes as applying it once. The artifacts may carry hand edits, so
//! patching is strictly additive — never a whole-file re-render.

pub mod container;
pub mod providers;
pub mod registry;

/// Result of applying one patch to an artifact held in memory.
#[derive(Debug)]
pub enum PatchOutcome {
    /// The patched content; the caller writes it back.
    Changed(String),
    /// Every entry is already present; the artifact is untouched.
    AlreadyPresent,
    /// The structural anchor was not found; the artifact is untouched.
    NoAnchor,
}
