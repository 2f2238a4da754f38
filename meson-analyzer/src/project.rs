use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use pathdiff::diff_paths;
use thiserror::Error;

use crate::analysis::AnalysisOptions;
use crate::options::OptionRegistry;
use crate::source::{SourceFile, SourceId};

/// Option files next to a build file, in order of preference.
const OPTION_FILE_NAMES: &[&str] = &["meson.options", "meson_options.txt"];

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },
}

/// A build file plus the option file that goes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFiles {
    pub root: PathBuf,
    pub build_file: PathBuf,
    pub options_file: Option<PathBuf>,
}

impl ProjectFiles {
    pub fn discover(build_file: &Path) -> Result<Self, ProjectError> {
        let build_file = build_file.to_path_buf().clean();
        if !build_file.is_file() {
            return Err(ProjectError::NotFound { path: build_file });
        }
        let root = build_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let options_file = OPTION_FILE_NAMES
            .iter()
            .map(|name| root.join(name))
            .find(|candidate| candidate.is_file());
        Ok(Self {
            root,
            build_file,
            options_file,
        })
    }

    /// `path` relative to the project root, or unchanged when it lies
    /// elsewhere.
    pub fn display_path(&self, path: &Path) -> PathBuf {
        let path = path.to_path_buf().clean();
        match diff_paths(&path, &self.root) {
            Some(relative) if !relative.starts_with("..") => relative,
            _ => path,
        }
    }

    /// Builtin options plus whatever the option file declares.
    #[tracing::instrument(skip_all, fields(root = %self.root.display()))]
    pub fn load_options(&self) -> Result<OptionRegistry, ProjectError> {
        let Some(path) = &self.options_file else {
            tracing::debug!("no option file, using builtin options");
            return Ok(OptionRegistry::with_builtin_options());
        };
        let source = load_source(path)?;
        Ok(OptionRegistry::from_source(&source))
    }
}

pub fn load_source(path: &Path) -> Result<SourceFile, ProjectError> {
    let contents = fs::read_to_string(path).map_err(|source| ProjectError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceFile::new(SourceId(0), path.to_path_buf(), contents))
}

/// Reads lint switches from a `.json`, `.yml` or `.yaml` file.
pub fn load_config(path: &Path) -> Result<AnalysisOptions, ProjectError> {
    let contents = fs::read_to_string(path).map_err(|source| ProjectError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config_error = |message: String| ProjectError::Config {
        path: path.to_path_buf(),
        message,
    };
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(|err| config_error(err.to_string())),
        Some("yml" | "yaml") => {
            serde_yaml::from_str(&contents).map_err(|err| config_error(err.to_string()))
        }
        _ => Err(config_error(
            "expected a .json, .yml or .yaml file".to_string(),
        )),
    }
}
