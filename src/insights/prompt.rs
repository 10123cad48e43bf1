use super::InsightSummary;
use crate::error::Result;

pub fn build_recruiter_prompt(summary: &InsightSummary) -> Result<String> {
    let summary_json = serde_json::to_string_pretty(summary)?;
    Ok(format!(
        r#"Act as a Technical Recruiter at a Top Tier Tech Firm.

Analyze the following GitHub profile data:

{summary_json}

Provide your analysis in the following JSON format:
{{
    "developer_profile": "Brief categorization (e.g., 'Full-Stack Engineer', 'Data Scientist')",
    "strong_signals": [
        {{"signal": "signal1", "explanation": "why this is positive"}},
        {{"signal": "signal2", "explanation": "why this is positive"}},
        {{"signal": "signal3", "explanation": "why this is positive"}}
    ],
    "red_flags": [
        {{"flag": "flag1", "explanation": "why this is concerning"}},
        {{"flag": "flag2", "explanation": "why this is concerning"}},
        {{"flag": "flag3", "explanation": "why this is concerning"}}
    ],
    "improvement_actions": [
        {{"action": "action1", "impact": "high/medium/low", "explanation": "why important"}},
        {{"action": "action2", "impact": "high/medium/low", "explanation": "why important"}},
        {{"action": "action3", "impact": "high/medium/low", "explanation": "why important"}}
    ],
    "overall_assessment": "2-3 sentence assessment of hiring potential"
}}

Return ONLY valid JSON, no additional text."#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::SummaryOptions;
    use crate::scoring::ScoringEngine;
    use crate::types::profile::ProfileData;

    #[test]
    fn prompt_embeds_summary_and_response_schema() {
        let profile = ProfileData {
            username: Some("octocat".to_string()),
            ..Default::default()
        };
        let scores = ScoringEngine::new().calculate_score(&profile);
        let summary = InsightSummary::build(&profile, &scores, SummaryOptions::default());

        let prompt = build_recruiter_prompt(&summary).expect("prompt should build");
        assert!(prompt.starts_with("Act as a Technical Recruiter"));
        assert!(prompt.contains("\"username\": \"octocat\""));
        assert!(prompt.contains("\"total_score\": 3.0"));
        assert!(prompt.contains("\"developer_profile\""));
        assert!(prompt.ends_with("Return ONLY valid JSON, no additional text."));
    }
}
