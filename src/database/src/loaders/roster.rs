use log::info;
use match_core::PlayerRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterLoadError {
    #[error("cannot open roster {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed roster, expected columns name, position, endurance: {0}")]
    Csv(#[from] csv::Error),

    #[error("roster {team} contains no players")]
    Empty { team: String },
}

#[derive(Deserialize)]
pub struct PlayerEntity {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "posicion")]
    pub position: String,
    #[serde(alias = "resistencia")]
    pub endurance: f64,
}

impl From<PlayerEntity> for PlayerRecord {
    fn from(entity: PlayerEntity) -> Self {
        PlayerRecord {
            name: entity.name,
            position: entity.position,
            endurance: entity.endurance,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Roster {
    pub team_name: String,
    pub players: Vec<PlayerRecord>,
}

pub struct RosterLoader;

impl RosterLoader {
    /// Loads a roster file; the team is named after the upper-cased file stem.
    pub fn load(path: &Path) -> Result<Roster, RosterLoadError> {
        let file = File::open(path).map_err(|source| RosterLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let roster = Self::from_reader(&Self::team_name(path), file)?;

        info!(
            "roster {} loaded from {}: {} players",
            roster.team_name,
            path.display(),
            roster.players.len()
        );

        Ok(roster)
    }

    pub fn from_reader<R: Read>(team_name: &str, reader: R) -> Result<Roster, RosterLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let players = csv_reader
            .deserialize::<PlayerEntity>()
            .map(|entity| entity.map(PlayerRecord::from))
            .collect::<Result<Vec<_>, _>>()?;

        if players.is_empty() {
            return Err(RosterLoadError::Empty {
                team: team_name.to_string(),
            });
        }

        Ok(Roster {
            team_name: team_name.to_string(),
            players,
        })
    }

    pub fn team_name(path: &Path) -> String {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().to_uppercase())
            .unwrap_or_default()
    }
}
