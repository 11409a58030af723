use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProjectConfig {
    pub folder: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub first_load: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            folder: None,
            first_load: true,
        }
    }
}
