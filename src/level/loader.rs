//! Level domain: RON level file loading with a built-in fallback.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use crate::level::data::Level;

/// Default level file checked at startup.
const LEVEL_PATH: &str = "assets/levels/overworld.ron";

/// Error type for level loading failures.
#[derive(Debug)]
pub struct LevelLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a level layout from a RON file.
pub fn load_level(path: &Path) -> Result<Level, LevelLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| LevelLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options().from_str(&contents).map_err(|e| LevelLoadError {
        file: file_name,
        message: format!("Parse error: {}", e),
    })
}

/// Install the level resource: the file if it parses, the built-in level
/// otherwise. Either way the resulting value is immutable for the session.
pub(crate) fn setup_level(mut commands: Commands) {
    let level = match load_level(Path::new(LEVEL_PATH)) {
        Ok(level) => {
            info!("Loaded level '{}' from {}", level.name, LEVEL_PATH);
            level
        }
        Err(err) => {
            warn!("{}; using built-in level", err);
            Level::overworld()
        }
    };

    commands.insert_resource(level);
}
