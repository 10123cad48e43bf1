use super::ScoreReport;
use crate::leaderboard::LeaderboardEntry;

pub fn to_markdown(report: &ScoreReport) -> String {
    let scores = &report.scores;
    let breakdown = &scores.score_breakdown;
    let mut output = String::new();
    output.push_str("# Portfolio Score\n\n");
    if let Some(username) = &report.username {
        output.push_str(&format!("Profile: {username}\n\n"));
    }
    output.push_str(&format!("Total score: {:.2}\n\n", scores.total_score));
    output.push_str("## Sub-scores\n\n");
    output.push_str(&format!(
        "- documentation: {:.2} (weight {:.2})\n- technical_depth: {:.2} (weight {:.2})\n- activity: {:.2} (weight {:.2})\n",
        breakdown.documentation.score,
        breakdown.documentation.weight,
        breakdown.technical_depth.score,
        breakdown.technical_depth.weight,
        breakdown.activity.score,
        breakdown.activity.weight
    ));
    output
}

pub fn leaderboard_to_markdown(entries: &[LeaderboardEntry]) -> String {
    let mut output = String::new();
    output.push_str("# Leaderboard\n\n");
    if entries.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for entry in entries {
        output.push_str(&format!(
            "{}. {} ({:.2})",
            entry.rank, entry.username, entry.score
        ));
        if let Some(url) = &entry.profile_url {
            output.push_str(&format!(" {url}"));
        }
        output.push('\n');
    }
    output
}
