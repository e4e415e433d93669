use crate::club::team::builder::TeamBuilder;
use crate::club::{Player, PlayerPositionType, PlayerRecord, TacticalBalance, TacticalStyle};
use crate::r#match::{EventPlayer, MatchEvent, MatchSettings};
use crate::RosterError;
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Team {
    pub(crate) name: String,
    pub(crate) goals: u32,

    pub(crate) starting_lineup: Vec<Player>,
    pub(crate) bench: Vec<Player>,
    pub(crate) substituted: Vec<Player>,

    pub(crate) substitutions_made: u32,
    pub(crate) tactical_style: TacticalStyle,

    #[serde(skip)]
    pub(crate) substitution_limit: u32,
    #[serde(skip)]
    pub(crate) fatigue_threshold: f64,
}

impl Team {
    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    /// Builds a team with the default match settings.
    pub fn new(name: &str, players: &[PlayerRecord]) -> Result<Team, RosterError> {
        TeamBuilder::new().name(name).players(players).build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn goals(&self) -> u32 {
        self.goals
    }

    pub fn starting_lineup(&self) -> &[Player] {
        &self.starting_lineup
    }

    pub fn bench(&self) -> &[Player] {
        &self.bench
    }

    /// Players taken off, in the order they left the pitch.
    pub fn substituted(&self) -> &[Player] {
        &self.substituted
    }

    pub fn substitutions_made(&self) -> u32 {
        self.substitutions_made
    }

    pub fn tactical_style(&self) -> TacticalStyle {
        self.tactical_style
    }

    /// Sums the lineup weights and records the resulting style.
    pub fn compute_tactic(&mut self, margin: f64) -> TacticalBalance {
        let balance = TacticalBalance::from_players(&self.starting_lineup);
        self.tactical_style = balance.classify(margin);

        balance
    }

    /// Takes the team-side rules from `settings`, re-splitting lineup and bench
    /// when the lineup size differs. Players already taken off stay off.
    pub(crate) fn apply_settings(&mut self, settings: &MatchSettings) {
        self.substitution_limit = settings.substitution_limit;
        self.fatigue_threshold = settings.fatigue_threshold;

        if self.starting_lineup.len() == settings.lineup_size {
            return;
        }

        let mut players = std::mem::take(&mut self.starting_lineup);
        players.append(&mut self.bench);

        if players.len() > settings.lineup_size {
            self.bench = players.split_off(settings.lineup_size);
        }

        self.starting_lineup = players;
    }

    /// Replaces exhausted starters from the bench, scanning the lineup in order.
    pub fn evaluate_substitutions(&mut self, minute: u32) -> Vec<MatchEvent> {
        let mut events = Vec::new();

        for slot in 0..self.starting_lineup.len() {
            if self.substitutions_made >= self.substitution_limit || self.bench.is_empty() {
                break;
            }

            let tired = &self.starting_lineup[slot];
            if !tired.is_exhausted(self.fatigue_threshold) {
                continue;
            }

            let Some(replacement_idx) = self.find_replacement(tired.position()) else {
                break;
            };

            let incoming = self.bench.remove(replacement_idx);
            let outgoing = std::mem::replace(&mut self.starting_lineup[slot], incoming);

            self.substitutions_made += 1;

            debug!(
                "{}: {} off at {:.0}% endurance, {} on (change {}/{})",
                self.name,
                outgoing,
                outgoing.endurance_ratio() * 100.0,
                self.starting_lineup[slot],
                self.substitutions_made,
                self.substitution_limit
            );

            events.push(MatchEvent::Substitution {
                team: self.name.clone(),
                minute,
                outgoing: EventPlayer::from(&outgoing),
                incoming: EventPlayer::from(&self.starting_lineup[slot]),
            });

            self.substituted.push(outgoing);
        }

        events
    }

    /// First bench player sharing the position, otherwise the head of the bench.
    fn find_replacement(&self, position: PlayerPositionType) -> Option<usize> {
        if self.bench.is_empty() {
            return None;
        }

        let same_position = self
            .bench
            .iter()
            .position(|player| player.position() == position);

        Some(same_position.unwrap_or(0))
    }
}
