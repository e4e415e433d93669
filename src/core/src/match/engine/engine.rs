use crate::club::{PlayerRecord, TacticalBalance};
use crate::r#match::{EventPlayer, MatchEvent, MatchResult, MatchSettings};
use crate::{MatchError, SettingsError, Team};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

/// Plays one match between two privately owned teams.
///
/// The simulator owns its random source, so runs with equally seeded sources
/// produce identical logs and separate instances never share state.
pub struct MatchSimulator<R: Rng> {
    home: Team,
    away: Team,
    settings: MatchSettings,
    rng: R,

    events: Vec<MatchEvent>,
    log: Vec<String>,
    key_events: Vec<String>,
}

impl<R: Rng> MatchSimulator<R> {
    /// Plays under the default settings.
    pub fn new(home: &Team, away: &Team, rng: R) -> Self {
        Self::prepare(home, away, MatchSettings::default(), rng)
    }

    /// The lineup size, substitution cap and fatigue threshold of `settings`
    /// replace whatever the teams were built with.
    pub fn with_settings(
        home: &Team,
        away: &Team,
        settings: MatchSettings,
        rng: R,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;

        Ok(Self::prepare(home, away, settings, rng))
    }

    fn prepare(home: &Team, away: &Team, settings: MatchSettings, rng: R) -> Self {
        let mut home = home.clone();
        let mut away = away.clone();

        home.apply_settings(&settings);
        away.apply_settings(&settings);

        MatchSimulator {
            home,
            away,
            settings,
            rng,
            events: Vec::new(),
            log: Vec::new(),
            key_events: Vec::new(),
        }
    }

    /// Builds both teams from roster records under the given settings.
    pub fn from_rosters(
        home: (&str, &[PlayerRecord]),
        away: (&str, &[PlayerRecord]),
        settings: MatchSettings,
        rng: R,
    ) -> Result<Self, MatchError> {
        settings.validate()?;

        let home = Team::builder()
            .name(home.0)
            .players(home.1)
            .settings(&settings)
            .build()?;

        let away = Team::builder()
            .name(away.0)
            .players(away.1)
            .settings(&settings)
            .build()?;

        Ok(Self::with_settings(&home, &away, settings, rng)?)
    }

    pub fn home(&self) -> &Team {
        &self.home
    }

    pub fn away(&self) -> &Team {
        &self.away
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    pub fn simulate(mut self) -> MatchResult {
        info!("match started: {} vs {}", self.home.name, self.away.name);

        self.record(MatchEvent::KickOff {
            home: self.home.name.clone(),
            away: self.away.name.clone(),
        });

        for minute in 1..=self.settings.minutes {
            self.play_minute(minute);
        }

        self.record(MatchEvent::FullTime);

        info!(
            "match finished: {} {} - {} {}",
            self.home.name, self.home.goals, self.away.goals, self.away.name
        );

        MatchResult {
            home: self.home,
            away: self.away,
            events: self.events,
            log: self.log,
            key_events: self.key_events,
        }
    }

    fn play_minute(&mut self, minute: u32) {
        let home_balance = self.home.compute_tactic(self.settings.tactic_margin);
        let away_balance = self.away.compute_tactic(self.settings.tactic_margin);

        for event in self.home.evaluate_substitutions(minute) {
            self.record(event);
        }

        for event in self.away.evaluate_substitutions(minute) {
            self.record(event);
        }

        let home_chance = self.goal_chance(&home_balance, &away_balance);
        let away_chance = self.goal_chance(&away_balance, &home_balance);

        // A successful home draw means the away side is not checked this minute
        if self.rng.gen_range(0.0..1.0) < home_chance {
            if let Some(goal) = score_goal(&mut self.home, minute, &mut self.rng) {
                self.record(goal);
            }
        } else if self.rng.gen_range(0.0..1.0) < away_chance {
            if let Some(goal) = score_goal(&mut self.away, minute, &mut self.rng) {
                self.record(goal);
            }
        }

        apply_fatigue(&mut self.home, &self.settings, &mut self.rng);
        apply_fatigue(&mut self.away, &self.settings, &mut self.rng);

        if minute % self.settings.summary_interval == 0 {
            self.record(MatchEvent::TacticsSummary {
                minute,
                home: self.home.name.clone(),
                home_style: self.home.tactical_style,
                away: self.away.name.clone(),
                away_style: self.away.tactical_style,
            });
        }
    }

    fn goal_chance(&self, attacking: &TacticalBalance, defending: &TacticalBalance) -> f64 {
        (attacking.attack / (defending.defense + self.settings.defense_offset))
            * self.settings.goal_scale
    }

    fn record(&mut self, event: MatchEvent) {
        let line = event.to_string();
        debug!("{}", line);

        if event.is_key() {
            self.key_events.push(line.clone());
        }

        self.log.push(line);
        self.events.push(event);
    }
}

fn score_goal<R: Rng>(team: &mut Team, minute: u32, rng: &mut R) -> Option<MatchEvent> {
    let scorer = EventPlayer::from(team.starting_lineup.choose(rng)?);
    team.goals += 1;

    Some(MatchEvent::Goal {
        team: team.name.clone(),
        minute,
        scorer,
    })
}

/// One independent draw per player on the pitch.
fn apply_fatigue<R: Rng>(team: &mut Team, settings: &MatchSettings, rng: &mut R) {
    let factor = if team.tactical_style.is_offensive() {
        settings.offensive_fatigue_factor
    } else {
        settings.default_fatigue_factor
    };

    for player in team.starting_lineup.iter_mut() {
        let amount = rng.gen_range(settings.fatigue_min..settings.fatigue_max) * factor;
        player.apply_fatigue(amount);
    }
}
