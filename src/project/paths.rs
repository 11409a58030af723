use std::path::{Path, PathBuf};

/// Marker file whose presence makes a folder a project.
pub const PROJECT_MARKER: &str = "clinttools.project";

pub const FOLDER_AUDIO: &str = "audio";
pub const FOLDER_AUDIO_FILES: &str = "audio/files";
pub const FOLDER_AUDIO_REC: &str = "audio/rec";
pub const FOLDER_AUDIO_TMP: &str = "audio/files/tmp";
pub const FOLDER_SAMPLEGRAPH: &str = "audio/samplegraph";
pub const FOLDER_SAMPLES: &str = "audio/samples";
pub const FOLDER_TIMESTRETCH: &str = "audio/timestretch";
pub const FOLDER_GLUED: &str = "audio/glued";
pub const FOLDER_USER: &str = "user";
pub const FOLDER_BACKUPS: &str = "backups";
pub const FOLDER_PROJECTS: &str = "projects";
pub const FOLDER_PLUGINS: &str = "projects/plugins";
pub const FILE_AUDIO_POOL: &str = "audio/audio_pool";

/// Every folder a freshly created project contains.
pub const PROJECT_FOLDERS: &[&str] = &[
    FOLDER_AUDIO,
    FOLDER_AUDIO_FILES,
    FOLDER_AUDIO_REC,
    FOLDER_AUDIO_TMP,
    FOLDER_BACKUPS,
    FOLDER_GLUED,
    FOLDER_PLUGINS,
    FOLDER_PROJECTS,
    FOLDER_SAMPLEGRAPH,
    FOLDER_SAMPLES,
    FOLDER_TIMESTRETCH,
    FOLDER_USER,
];

/// Locations the engine reads from once a project is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub marker: PathBuf,
    pub plugins: PathBuf,
    pub samples: PathBuf,
    pub samplegraph: PathBuf,
    pub audio_pool_file: PathBuf,
    pub audio: PathBuf,
    pub audio_tmp: PathBuf,
}

impl ProjectPaths {
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            marker: root.join(PROJECT_MARKER),
            plugins: root.join(FOLDER_PLUGINS),
            samples: root.join(FOLDER_SAMPLES),
            samplegraph: root.join(FOLDER_SAMPLEGRAPH),
            audio_pool_file: root.join(FILE_AUDIO_POOL),
            audio: root.join(FOLDER_AUDIO),
            audio_tmp: root.join(FOLDER_AUDIO_TMP),
            root,
        }
    }

    pub fn is_project(&self) -> bool {
        self.marker.is_file()
    }
}
