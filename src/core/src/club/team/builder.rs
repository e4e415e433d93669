use crate::club::{Player, PlayerRecord, TacticalStyle};
use crate::r#match::MatchSettings;
use crate::{RosterError, Team};
use log::{info, warn};

#[derive(Default)]
pub struct TeamBuilder {
    name: Option<String>,
    players: Option<Vec<PlayerRecord>>,
    settings: Option<MatchSettings>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Takes a private copy of the records so every team starts fresh.
    pub fn players(mut self, players: &[PlayerRecord]) -> Self {
        self.players = Some(players.to_vec());
        self
    }

    pub fn settings(mut self, settings: &MatchSettings) -> Self {
        self.settings = Some(settings.clone());
        self
    }

    pub fn build(self) -> Result<Team, RosterError> {
        let name = self
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or(RosterError::Unnamed)?;

        let records = self.players.unwrap_or_default();
        let settings = self.settings.unwrap_or_default();

        if records.is_empty() {
            return Err(RosterError::Empty { team: name });
        }

        let mut players = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(RosterError::MissingName { team: name, index });
            }

            if !record.endurance.is_finite() || record.endurance <= 0.0 {
                return Err(RosterError::InvalidEndurance {
                    team: name,
                    player: record.name.clone(),
                    endurance: record.endurance,
                });
            }

            players.push(Player::from_record(record));
        }

        let mut team = Team {
            name,
            goals: 0,
            starting_lineup: players,
            bench: Vec::new(),
            substituted: Vec::new(),
            substitutions_made: 0,
            tactical_style: TacticalStyle::Neutral,
            substitution_limit: 0,
            fatigue_threshold: 0.0,
        };

        team.apply_settings(&settings);

        if team.bench.is_empty() {
            warn!(
                "team {} has no bench ({} players), substitutions disabled",
                team.name,
                team.starting_lineup.len()
            );
        }

        info!(
            "team {} loaded: {} starters, {} on the bench",
            team.name,
            team.starting_lineup.len(),
            team.bench.len()
        );

        Ok(team)
    }
}
