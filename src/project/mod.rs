//! Project folder discovery and the hand-off to the editors.
//!
//! Opening never terminates the process: a folder without the marker file is
//! reported as [`ProjectError::NotFound`] and the host decides what to do.

pub mod paths;

use std::{fs, path::Path, time::Instant};

use tracing::{debug, error, info};

pub use paths::*;

use crate::common::{AnyResult, ProjectError, ProjectStage};

/// Subsystems that take over once the folder layout is known.
pub trait ProjectHooks {
    /// Load the persisted audio-pool index. Only called on first load when the file exists.
    fn load_audio_pool(&mut self, pool_file: &Path, audio_folder: &Path) -> AnyResult<()>;

    fn open_wave_editor(&mut self) -> AnyResult<()>;

    fn open_daw(&mut self, first_load: bool) -> AnyResult<()>;
}

pub fn open_project(
    root: impl AsRef<Path>,
    first_load: bool,
    hooks: &mut dyn ProjectHooks,
) -> Result<ProjectPaths, ProjectError> {
    let started = Instant::now();
    let root = root.as_ref();

    let paths = ProjectPaths::from_root(root);
    if !paths.is_project() {
        error!(
            "Project folder {} does not contain a {} file, it is not a Clinttools DAW project",
            root.display(),
            PROJECT_MARKER
        );
        return Err(ProjectError::NotFound {
            folder: root.to_path_buf(),
        });
    }

    info!("Setting files and folders");
    debug!(
        plugins = %paths.plugins.display(),
        samples = %paths.samples.display(),
        samplegraph = %paths.samplegraph.display(),
        audio_pool = %paths.audio_pool_file.display(),
        audio_tmp = %paths.audio_tmp.display(),
        "Resolved project paths"
    );

    if first_load && paths.audio_pool_file.is_file() {
        info!("Loading wave pool");
        hooks
            .load_audio_pool(&paths.audio_pool_file, &paths.audio)
            .map_err(|source| ProjectError::Hook {
                stage: ProjectStage::AudioPool,
                source,
            })?;
    }

    info!("Opening wave editor project");
    hooks.open_wave_editor().map_err(|source| ProjectError::Hook {
        stage: ProjectStage::WaveEditor,
        source,
    })?;

    info!("Opening DAW project");
    hooks.open_daw(first_load).map_err(|source| ProjectError::Hook {
        stage: ProjectStage::Daw,
        source,
    })?;

    info!(
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "Finished opening projects"
    );
    Ok(paths)
}

/// Lay out a new, empty project under `root`. Existing files are left alone.
pub fn create_project(root: impl AsRef<Path>) -> Result<ProjectPaths, ProjectError> {
    let root = root.as_ref();
    for folder in PROJECT_FOLDERS {
        let dir = root.join(folder);
        debug!("Creating {}", dir.display());
        fs::create_dir_all(&dir).map_err(|e| ProjectError::io(&dir, e))?;
    }

    let paths = ProjectPaths::from_root(root);
    for file in [&paths.audio_pool_file, &paths.marker] {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)
            .map_err(|e| ProjectError::io(file, e))?;
    }

    info!("Created project at {}", root.display());
    Ok(paths)
}

/// Remove every file in the audio tmp folder, returning how many were deleted.
pub fn clear_audio_tmp_folder(paths: &ProjectPaths) -> Result<usize, ProjectError> {
    let entries = match fs::read_dir(&paths.audio_tmp) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(ProjectError::io(&paths.audio_tmp, e)),
    };

    let mut removed = 0;
    for entry in entries {
        let path = entry.map_err(|e| ProjectError::io(&paths.audio_tmp, e))?.path();
        if path.is_file() {
            fs::remove_file(&path).map_err(|e| ProjectError::io(&path, e))?;
            removed += 1;
        }
    }

    debug!("Removed {} tmp audio files", removed);
    Ok(removed)
}
