use thiserror::Error;

/// Raised when a roster cannot become a team. No partial team is ever built.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster has no team name")]
    Unnamed,

    #[error("roster for team '{team}' has no players")]
    Empty { team: String },

    #[error("player #{index} of team '{team}' has no name")]
    MissingName { team: String, index: usize },

    #[error("player '{player}' of team '{team}' has invalid endurance {endurance}")]
    InvalidEndurance {
        team: String,
        player: String,
        endurance: f64,
    },
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}
