//! Export a small sample batch to CSV for inspection
//! Run with: cargo run --example export_sample

use cricket::data::{export, scan_directory};
use cricket::features::FeatureShape;

const T20_MATCH: &str = r#"{
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
            {"runs": {"total": 6, "batter": 6}},
            {"runs": {"total": 0, "batter": 0}, "wickets": [{"kind": "bowled"}]}
        ]}]},
        {"overs": [{"deliveries": [
            {"runs": {"total": 1, "batter": 1}},
            {"runs": {"total": 0, "batter": 0}, "wicket": true}
        ]}]}
    ]
}"#;

const ABANDONED_MATCH: &str = r#"{
    "info": {
        "match_type": "ODI",
        "venue": "Seddon Park",
        "city": "Hamilton",
        "season": "2022/23",
        "teams": ["New Zealand", "England"],
        "overs": 50
    },
    "innings": []
}"#;

fn main() -> cricket::Result<()> {
    let dir = std::env::temp_dir().join("cricket_sample_matches");
    std::fs::create_dir_all(&dir)?;
    std::fs::write(dir.join("t20.json"), T20_MATCH)?;
    std::fs::write(dir.join("abandoned.json"), ABANDONED_MATCH)?;

    let report = scan_directory(&dir)?;
    export::write_table("sample_features.csv", FeatureShape::Extended, &report.rows)?;
    println!(
        "Exported {} rows to sample_features.csv",
        report.processed()
    );

    // Print summary stats
    println!("\nSample batch summary:");
    for row in &report.rows {
        println!(
            "  {} v {}: {}/{} in {} overs, result: {}",
            row.team1,
            row.team2,
            row.first_innings.runs,
            row.first_innings.wickets,
            row.first_innings.overs_bowled(),
            row.result
        );
    }

    std::fs::remove_dir_all(dir)?;
    Ok(())
}
