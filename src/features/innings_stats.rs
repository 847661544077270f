//! Per-innings aggregation
//!
//! One fold over every delivery of an innings, producing the summary
//! statistics that make up an innings' feature columns.

use crate::data::record::{Delivery, Innings};

/// Summary statistics for a single innings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InningsTotals {
    /// Runs scored including extras
    pub runs: u32,
    /// Dismissals, counting multi-dismissal balls in full
    pub wickets: u32,
    /// Extra runs (wides, no-balls, byes, leg-byes, penalties)
    pub extras: u32,
    /// Deliveries where the batter scored exactly 4 or 6
    pub boundaries: u32,
    /// Deliveries bowled
    pub balls: u32,
}

impl InningsTotals {
    /// Aggregate an innings. An absent innings (a match that never reached
    /// this innings index) yields all-zero totals, never an error.
    pub fn from_innings(innings: Option<&Innings>) -> Self {
        let mut totals = InningsTotals::default();
        if let Some(innings) = innings {
            for over in &innings.overs {
                for delivery in &over.deliveries {
                    totals.update(delivery);
                }
            }
        }
        totals
    }

    /// Fold one delivery into the totals
    fn update(&mut self, delivery: &Delivery) {
        self.runs += delivery.runs.total;
        self.wickets += delivery.dismissals();
        self.extras += delivery.extra_runs();
        if delivery.is_boundary() {
            self.boundaries += 1;
        }
        self.balls += 1;
    }

    /// Overs bowled in cricket over-notation: 37 balls → 6.1, meaning six
    /// overs and one ball. The fractional digit is the ball count, not a
    /// true decimal fraction (6.2 is 6 + 2/6 overs, stored as 6 + 0.2).
    /// The divisor is a fixed 6 regardless of the match's balls-per-over
    /// metadata, for compatibility with the existing training tables.
    pub fn overs_bowled(&self) -> f64 {
        f64::from(self.balls / 6) + f64::from(self.balls % 6) / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::record::MatchData;

    fn innings_from_json(json: &str) -> Innings {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_innings_is_all_zero() {
        let totals = InningsTotals::from_innings(None);
        assert_eq!(totals, InningsTotals::default());
        assert_eq!(totals.overs_bowled(), 0.0);

        let empty = innings_from_json(r#"{"overs":[]}"#);
        let totals = InningsTotals::from_innings(Some(&empty));
        assert_eq!(totals, InningsTotals::default());
    }

    #[test]
    fn test_aggregates_runs_wickets_extras_boundaries() {
        let innings = innings_from_json(
            r#"{"overs":[{"deliveries":[
                {"runs":{"total":4,"batter":4}},
                {"runs":{"total":1,"batter":0},"extras":{"wides":1}},
                {"runs":{"total":6,"batter":6}},
                {"runs":{"total":0,"batter":0},"wickets":[{"kind":"bowled"}]},
                {"runs":{"total":4,"batter":0},"extras":{"byes":4}},
                {"runs":{"total":1,"batter":1},"wicket":true}
            ]}]}"#,
        );
        let totals = InningsTotals::from_innings(Some(&innings));
        assert_eq!(totals.runs, 16);
        assert_eq!(totals.wickets, 2);
        assert_eq!(totals.extras, 5);
        // The 4 byes must not count: batter runs were 0
        assert_eq!(totals.boundaries, 2);
        assert_eq!(totals.balls, 6);
    }

    #[test]
    fn test_multi_dismissal_ball_counts_in_full() {
        let innings = innings_from_json(
            r#"{"overs":[{"deliveries":[
                {"runs":{"total":1,"batter":1},
                 "wickets":[{"kind":"run out"},{"kind":"retired out"}]}
            ]}]}"#,
        );
        let totals = InningsTotals::from_innings(Some(&innings));
        assert_eq!(totals.wickets, 2);
    }

    #[test]
    fn test_over_notation() {
        let mut totals = InningsTotals::default();
        totals.balls = 37;
        assert_eq!(totals.overs_bowled(), 6.1);

        totals.balls = 36;
        assert_eq!(totals.overs_bowled(), 6.0);

        totals.balls = 5;
        assert_eq!(totals.overs_bowled(), 0.5);
    }

    #[test]
    fn test_fold_matches_per_delivery_sum() {
        let data: MatchData = serde_json::from_str(
            r#"{"info":{"teams":["A","B"]},"innings":[{"overs":[
                {"deliveries":[
                    {"runs":{"total":1,"batter":1}},
                    {"runs":{"total":0,"batter":0},"wicket":true},
                    {"runs":{"total":2,"batter":2},"wickets":[{"kind":"run out"},{"kind":"retired out"}]}
                ]},
                {"deliveries":[
                    {"runs":{"total":0,"batter":0}}
                ]}
            ]}]}"#,
        )
        .unwrap();

        let innings = &data.innings[0];
        let expected: u32 = innings
            .overs
            .iter()
            .flat_map(|o| &o.deliveries)
            .map(|d| d.dismissals())
            .sum();
        let totals = InningsTotals::from_innings(Some(innings));
        assert_eq!(totals.wickets, expected);
        assert_eq!(totals.wickets, 3);
    }
}
