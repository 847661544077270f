//! Serde model of a ball-by-ball match record
//!
//! Mirrors the scorecard JSON tree: match metadata under `info`, then an
//! ordered list of innings, each a list of overs, each a list of deliveries.
//! Optional sections are explicit `Option`s so every read site supplies a
//! documented default instead of relying on absent-field fallthrough.

use serde::Deserialize;
use std::collections::BTreeMap;

/// One complete match document
#[derive(Debug, Clone, Deserialize)]
pub struct MatchData {
    pub info: MatchInfo,
    #[serde(default)]
    pub innings: Vec<Innings>,
}

/// Match metadata
#[derive(Debug, Clone, Deserialize)]
pub struct MatchInfo {
    pub match_type: Option<String>,
    pub venue: Option<String>,
    pub city: Option<String>,
    /// Competition/year label, kept as an opaque string (e.g. "2007/08")
    pub season: Option<String>,
    /// Ordered pair of team names; fewer than 2 entries is a malformed record
    #[serde(default)]
    pub teams: Vec<String>,
    /// Overs limit; absent for unlimited-overs formats
    pub overs: Option<u32>,
    #[serde(default = "default_balls_per_over")]
    pub balls_per_over: u32,
    pub toss: Option<Toss>,
    pub outcome: Option<Outcome>,
    #[serde(default)]
    pub player_of_match: Vec<String>,
}

fn default_balls_per_over() -> u32 {
    6
}

#[derive(Debug, Clone, Deserialize)]
pub struct Toss {
    pub winner: Option<String>,
    pub decision: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Outcome {
    /// Descriptive result ("draw", "tie", "no result")
    pub result: Option<String>,
    /// Winning team name, set when the match was decided
    pub winner: Option<String>,
}

/// One team's batting turn
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Innings {
    #[serde(default)]
    pub overs: Vec<Over>,
}

/// A set of consecutive deliveries bowled from one end
#[derive(Debug, Clone, Deserialize)]
pub struct Over {
    // Required: an over object without deliveries is a malformed record
    // and fails the decode, skipping the file.
    pub deliveries: Vec<Delivery>,
}

/// One ball bowled; the atomic event unit
#[derive(Debug, Clone, Deserialize)]
pub struct Delivery {
    pub runs: Runs,
    /// Extra-type label (wide, noballs, byes, legbyes, penalty) → runs awarded
    pub extras: Option<BTreeMap<String, u32>>,
    /// Legacy single-dismissal flag (older extraction passes)
    pub wicket: Option<bool>,
    /// Dismissal list; the length is the number of dismissals on this ball
    pub wickets: Option<Vec<WicketEvent>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Runs {
    /// Runs scored on the ball including extras
    pub total: u32,
    /// Runs credited to the striker; used only for boundary detection
    #[serde(default)]
    pub batter: u32,
}

/// A single dismissal; only its presence is counted
#[derive(Debug, Clone, Deserialize)]
pub struct WicketEvent {
    pub kind: Option<String>,
    pub player_out: Option<String>,
}

impl Delivery {
    /// Number of dismissals on this ball.
    ///
    /// Source data has used two shapes across extraction passes: a dismissal
    /// list (supports multi-dismissal balls, e.g. run-out plus retired-out)
    /// and a plain boolean flag. The list wins when both are present.
    pub fn dismissals(&self) -> u32 {
        if let Some(wickets) = &self.wickets {
            wickets.len() as u32
        } else if self.wicket == Some(true) {
            1
        } else {
            0
        }
    }

    /// Total extra runs (wides, no-balls, byes, leg-byes, penalties)
    pub fn extra_runs(&self) -> u32 {
        self.extras
            .as_ref()
            .map(|e| e.values().sum())
            .unwrap_or(0)
    }

    /// True when the striker scored a boundary off the bat.
    ///
    /// Uses batter-credited runs, never the total: byes and overthrows that
    /// inflate the total must not count as boundaries.
    pub fn is_boundary(&self) -> bool {
        self.runs.batter == 4 || self.runs.batter == 6
    }
}
