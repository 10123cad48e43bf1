use super::ScoreReport;
use crate::leaderboard::LeaderboardEntry;

pub fn to_json(report: &ScoreReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn leaderboard_to_json(entries: &[LeaderboardEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringEngine;
    use crate::types::profile::ProfileData;

    #[test]
    fn json_report_uses_published_field_names() {
        let scores = ScoringEngine::new().calculate_score(&ProfileData::default());
        let report = ScoreReport::new(Some("octocat".to_string()), scores);

        let rendered = to_json(&report).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        let scores = &value["scores"];
        assert_eq!(value["username"], "octocat");
        assert_eq!(scores["total_score"], 3.0);
        assert_eq!(scores["activity_score"], 10.0);
        assert_eq!(scores["score_breakdown"]["technical_depth"]["weight"], 0.4);
        assert_eq!(scores["score_breakdown"]["documentation"]["score"], 0.0);
        assert!(value["analyzed_at"].is_string());
    }

    #[test]
    fn leaderboard_json_is_an_array_of_entries() {
        let entries = vec![LeaderboardEntry {
            rank: 1,
            username: "octocat".to_string(),
            score: 45.8,
            profile_url: None,
        }];
        let rendered = leaderboard_to_json(&entries).expect("json should serialize");
        assert!(rendered.contains("\"rank\": 1"));
        assert!(rendered.contains("\"score\": 45.8"));
    }
}
