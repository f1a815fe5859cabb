//! Reading tuning and level files from disk.

use ron::Options;
use ron::extensions::Extensions;
use std::path::Path;
use thiserror::Error;

use super::data::LevelDef;
use crate::movement::MovementTuning;

pub const TUNING_FILE: &str = "tuning.ron";
pub const LEVEL_FILE: &str = "level.ron";

#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("could not read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

impl ContentLoadError {
    /// The file the error came from.
    pub fn file(&self) -> &str {
        match self {
            Self::Io { file, .. } | Self::Parse { file, .. } => file,
        }
    }
}

/// `Option` fields may be written without `Some(..)`.
fn ron_options() -> Options {
    Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
}

/// Parse one RON value; `file` only labels the error.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|source| ContentLoadError::Parse {
            file: file.to_string(),
            source,
        })
}

fn read_ron<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file = path.display().to_string();
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_ron(&file, &contents),
        Err(source) => Err(ContentLoadError::Io { file, source }),
    }
}

/// Load movement tuning and the level from `base_path`.
/// Every failing file is reported, not just the first.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(MovementTuning, LevelDef), Vec<ContentLoadError>> {
    let tuning = read_ron::<MovementTuning>(&base_path.join(TUNING_FILE));
    let level = read_ron::<LevelDef>(&base_path.join(LEVEL_FILE));

    match (tuning, level) {
        (Ok(tuning), Ok(level)) => Ok((tuning, level)),
        (tuning, level) => Err([tuning.err(), level.err()].into_iter().flatten().collect()),
    }
}
