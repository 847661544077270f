//! Flat feature representation of a match
//!
//! Each match record is reduced to one fixed-shape row: metadata
//! passthrough plus per-innings aggregates. The field set and order are
//! identical for every match regardless of which optional input sections
//! were present, so the output table is always rectangular.

use crate::data::record::MatchData;
use crate::features::InningsTotals;
use crate::{CricketError, Result};
use serde::{Deserialize, Serialize};

/// Which column groups a rendered row carries.
///
/// Both shapes are produced from the same aggregation; the shape only
/// selects columns, so the two output variants cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureShape {
    /// First-innings aggregates only, no overs-bowled columns
    Minimal,
    /// Both innings' aggregates including overs bowled
    Extended,
}

const MINIMAL_HEADER: &[&str] = &[
    "match_type",
    "venue",
    "city",
    "toss_winner",
    "toss_decision",
    "team1",
    "team2",
    "overs_limit",
    "balls_per_over",
    "first_innings_runs",
    "first_innings_wickets",
    "first_innings_extras",
    "first_innings_boundaries",
    "season",
    "player_of_the_match",
    "result",
];

const EXTENDED_HEADER: &[&str] = &[
    "match_type",
    "venue",
    "city",
    "toss_winner",
    "toss_decision",
    "team1",
    "team2",
    "overs_limit",
    "balls_per_over",
    "first_innings_runs",
    "first_innings_wickets",
    "first_innings_extras",
    "first_innings_boundaries",
    "first_innings_overs",
    "second_innings_runs",
    "second_innings_wickets",
    "second_innings_extras",
    "second_innings_boundaries",
    "second_innings_overs",
    "season",
    "player_of_the_match",
    "result",
];

impl FeatureShape {
    /// Column names, in output order
    pub fn header(self) -> &'static [&'static str] {
        match self {
            FeatureShape::Minimal => MINIMAL_HEADER,
            FeatureShape::Extended => EXTENDED_HEADER,
        }
    }
}

/// Flattened features for one match, immutable once produced.
///
/// Absent optional metadata maps to the empty string so every row has the
/// same columns; `overs_limit` follows the same sentinel (unlimited-overs
/// formats carry no limit).
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub match_type: String,
    pub venue: String,
    pub city: String,
    pub toss_winner: String,
    pub toss_decision: String,
    pub team1: String,
    pub team2: String,
    pub overs_limit: Option<u32>,
    pub balls_per_over: u32,
    pub first_innings: InningsTotals,
    pub second_innings: InningsTotals,
    pub season: String,
    pub player_of_match: String,
    pub result: String,
}

impl FeatureRecord {
    /// Extract features from one match record.
    ///
    /// Pure and deterministic; sparse-but-valid input never fails. The only
    /// error is a record naming fewer than two teams.
    pub fn from_match(data: &MatchData) -> Result<Self> {
        let info = &data.info;

        if info.teams.len() < 2 {
            return Err(CricketError::MalformedRecord(format!(
                "expected 2 teams, found {}",
                info.teams.len()
            )));
        }

        // Priority chain, not a merge: the first present value wins.
        let result = info
            .outcome
            .as_ref()
            .and_then(|o| o.result.clone().or_else(|| o.winner.clone()))
            .unwrap_or_else(|| "no result".to_string());

        Ok(FeatureRecord {
            match_type: info.match_type.clone().unwrap_or_default(),
            venue: info.venue.clone().unwrap_or_default(),
            city: info.city.clone().unwrap_or_default(),
            toss_winner: info
                .toss
                .as_ref()
                .and_then(|t| t.winner.clone())
                .unwrap_or_default(),
            toss_decision: info
                .toss
                .as_ref()
                .and_then(|t| t.decision.clone())
                .unwrap_or_default(),
            team1: info.teams[0].clone(),
            team2: info.teams[1].clone(),
            overs_limit: info.overs,
            balls_per_over: info.balls_per_over,
            first_innings: InningsTotals::from_innings(data.innings.first()),
            second_innings: InningsTotals::from_innings(data.innings.get(1)),
            season: info.season.clone().unwrap_or_default(),
            player_of_match: info.player_of_match.first().cloned().unwrap_or_default(),
            result,
        })
    }

    /// Render the row for the given shape, one value per header column
    pub fn render(&self, shape: FeatureShape) -> Vec<String> {
        let mut row = vec![
            self.match_type.clone(),
            self.venue.clone(),
            self.city.clone(),
            self.toss_winner.clone(),
            self.toss_decision.clone(),
            self.team1.clone(),
            self.team2.clone(),
            self.overs_limit.map(|o| o.to_string()).unwrap_or_default(),
            self.balls_per_over.to_string(),
            self.first_innings.runs.to_string(),
            self.first_innings.wickets.to_string(),
            self.first_innings.extras.to_string(),
            self.first_innings.boundaries.to_string(),
        ];

        if shape == FeatureShape::Extended {
            row.push(self.first_innings.overs_bowled().to_string());
            row.push(self.second_innings.runs.to_string());
            row.push(self.second_innings.wickets.to_string());
            row.push(self.second_innings.extras.to_string());
            row.push(self.second_innings.boundaries.to_string());
            row.push(self.second_innings.overs_bowled().to_string());
        }

        row.push(self.season.clone());
        row.push(self.player_of_match.clone());
        row.push(self.result.clone());
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_match(json: &str) -> MatchData {
        serde_json::from_str(json).unwrap()
    }

    const FULL_MATCH: &str = r#"{
        "info": {
            "match_type": "T20",
            "venue": "Eden Gardens",
            "city": "Kolkata",
            "season": "2023",
            "teams": ["India", "Australia"],
            "overs": 20,
            "toss": {"winner": "India", "decision": "bat"},
            "outcome": {"winner": "India"},
            "player_of_match": ["V Kohli"]
        },
        "innings": [
            {"overs": [{"deliveries": [
                {"runs": {"total": 4, "batter": 4}},
                {"runs": {"total": 1, "batter": 0}, "extras": {"wides": 1}},
                {"runs": {"total": 0, "batter": 0}, "wickets": [{"kind": "bowled"}]}
            ]}]},
            {"overs": [{"deliveries": [
                {"runs": {"total": 6, "batter": 6}}
            ]}]}
        ]
    }"#;

    #[test]
    fn test_full_match_extraction() {
        let record = FeatureRecord::from_match(&make_match(FULL_MATCH)).unwrap();
        assert_eq!(record.team1, "India");
        assert_eq!(record.team2, "Australia");
        assert_eq!(record.toss_winner, "India");
        assert_eq!(record.toss_decision, "bat");
        assert_eq!(record.overs_limit, Some(20));
        assert_eq!(record.first_innings.runs, 5);
        assert_eq!(record.first_innings.wickets, 1);
        assert_eq!(record.first_innings.extras, 1);
        assert_eq!(record.first_innings.boundaries, 1);
        assert_eq!(record.second_innings.runs, 6);
        assert_eq!(record.player_of_match, "V Kohli");
        assert_eq!(record.result, "India");
    }

    #[test]
    fn test_sparse_match_uses_sentinels() {
        let record =
            FeatureRecord::from_match(&make_match(r#"{"info":{"teams":["A","B"]}}"#)).unwrap();
        assert_eq!(record.match_type, "");
        assert_eq!(record.venue, "");
        assert_eq!(record.toss_winner, "");
        assert_eq!(record.overs_limit, None);
        assert_eq!(record.balls_per_over, 6);
        assert_eq!(record.first_innings, InningsTotals::default());
        assert_eq!(record.second_innings, InningsTotals::default());
        assert_eq!(record.player_of_match, "");
        assert_eq!(record.result, "no result");
    }

    #[test]
    fn test_fewer_than_two_teams_is_malformed() {
        let err = FeatureRecord::from_match(&make_match(r#"{"info":{"teams":["A"]}}"#));
        assert!(matches!(err, Err(CricketError::MalformedRecord(_))));
    }

    #[test]
    fn test_result_priority_chain() {
        let both = make_match(
            r#"{"info":{"teams":["A","B"],"outcome":{"result":"draw","winner":"India"}}}"#,
        );
        assert_eq!(FeatureRecord::from_match(&both).unwrap().result, "draw");

        let winner_only =
            make_match(r#"{"info":{"teams":["A","B"],"outcome":{"winner":"India"}}}"#);
        assert_eq!(
            FeatureRecord::from_match(&winner_only).unwrap().result,
            "India"
        );

        let neither = make_match(r#"{"info":{"teams":["A","B"],"outcome":{}}}"#);
        assert_eq!(
            FeatureRecord::from_match(&neither).unwrap().result,
            "no result"
        );
    }

    #[test]
    fn test_row_width_matches_header_for_both_shapes() {
        for shape in [FeatureShape::Minimal, FeatureShape::Extended] {
            let full = FeatureRecord::from_match(&make_match(FULL_MATCH)).unwrap();
            let sparse =
                FeatureRecord::from_match(&make_match(r#"{"info":{"teams":["A","B"]}}"#)).unwrap();
            assert_eq!(full.render(shape).len(), shape.header().len());
            assert_eq!(sparse.render(shape).len(), shape.header().len());
        }
    }

    #[test]
    fn test_extended_row_carries_overs_columns() {
        let record = FeatureRecord::from_match(&make_match(FULL_MATCH)).unwrap();
        let row = record.render(FeatureShape::Extended);
        let header = FeatureShape::Extended.header();

        let idx = header
            .iter()
            .position(|c| *c == "first_innings_overs")
            .unwrap();
        // 3 balls bowled → 0 whole overs and 3 balls
        assert_eq!(row[idx], "0.3");

        let idx = header
            .iter()
            .position(|c| *c == "second_innings_overs")
            .unwrap();
        assert_eq!(row[idx], "0.1");
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let data = make_match(FULL_MATCH);
        let first = FeatureRecord::from_match(&data).unwrap();
        let second = FeatureRecord::from_match(&data).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.render(FeatureShape::Extended),
            second.render(FeatureShape::Extended)
        );
    }
}
