// fbenv-rs: Firebase config to .env converter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Frontend tooling detection.
//!
//! ```text
//! vite.config.js exists            --> Vite        VITE_
//! package.json has "react-scripts" --> CRA         REACT_APP_
//! package.json has "nuxt"          --> Nuxt        NUXT_
//! otherwise                        --> Custom      CUSTOM_
//! ```
//!
//! The checks run in that order, so a Vite marker wins over anything the
//! manifest mentions.

use std::fmt;
use std::path::Path;

use tracing::{debug, warn};

use crate::utility::fs::{FileSystem, read_text};

/// Build-tool marker that only needs to exist.
pub const VITE_CONFIG: &str = "vite.config.js";

/// Package manifest scanned for dependency names.
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Frontend tooling recognised by [`detect_project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Vite,
    CreateReactApp,
    Nuxt,
    Custom,
}

impl ProjectKind {
    /// Environment variable prefix the tooling exposes to client code.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Vite => "VITE_",
            Self::CreateReactApp => "REACT_APP_",
            Self::Nuxt => "NUXT_",
            Self::Custom => "CUSTOM_",
        }
    }

    /// Human-readable project name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vite => "Vite",
            Self::CreateReactApp => "Create React App (CRA)",
            Self::Nuxt => "Nuxt",
            Self::Custom => "Other (e.g., custom, or a different framework)",
        }
    }

    /// Classifies a manifest by literal dependency names.
    fn from_manifest(content: &str) -> Option<Self> {
        if content.contains("\"react-scripts\"") {
            Some(Self::CreateReactApp)
        } else if content.contains("\"nuxt\"") {
            Some(Self::Nuxt)
        } else {
            None
        }
    }
}

/// Suggested prefix and label for a project directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectProfile {
    kind: ProjectKind,
}

impl ProjectProfile {
    #[must_use]
    pub const fn new(kind: ProjectKind) -> Self {
        Self { kind }
    }

    #[must_use]
    pub const fn kind(&self) -> ProjectKind {
        self.kind
    }

    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        self.kind.prefix()
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.kind.label()
    }
}

impl fmt::Display for ProjectProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.prefix())
    }
}

/// Inspects `dir` for build-tool markers.
///
/// Never fails: an unreadable `package.json` is treated as absent.
#[must_use]
pub fn detect_project(fs: &dyn FileSystem, dir: &Path) -> ProjectProfile {
    let vite_config = dir.join(VITE_CONFIG);
    if fs.exists(&vite_config) {
        debug!(path = %vite_config.display(), "found vite config");
        return ProjectProfile::new(ProjectKind::Vite);
    }

    let manifest = dir.join(PACKAGE_MANIFEST);
    if fs.exists(&manifest) {
        match read_text(fs, &manifest) {
            Ok(content) => {
                if let Some(kind) = ProjectKind::from_manifest(&content) {
                    debug!(path = %manifest.display(), ?kind, "classified from manifest");
                    return ProjectProfile::new(kind);
                }
            }
            Err(e) => {
                warn!(path = %manifest.display(), error = %e, "ignoring unreadable manifest");
            }
        }
    }

    ProjectProfile::new(ProjectKind::Custom)
}
