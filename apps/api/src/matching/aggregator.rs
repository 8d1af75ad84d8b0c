//! Result Aggregator — ranks scored employees and derives presentation views.

use serde::Serialize;

use crate::matching::analysis::AnalysisError;
use crate::matching::normalizer::SkillToken;
use crate::matching::scorer::{FitCategory, MatchResult};

/// Size of the suggested team.
pub const TEAM_SIZE: usize = 5;

/// Match results ordered by fit, highest first. Never empty.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RankedResults {
    entries: Vec<MatchResult>,
}

/// Employees lacking one required skill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingSkillEntry {
    pub skill: SkillToken,
    pub count: usize,
    pub employees: Vec<String>,
}

/// One bar of the fit chart.
#[derive(Debug, Clone, Serialize)]
pub struct FitBar {
    pub name: String,
    pub fit_pct: u32,
    pub category: FitCategory,
}

/// One bubble of the missing-skills chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingSkillPoint {
    pub employee: String,
    pub missing_skill: SkillToken,
}

/// Per-employee recommendation card.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub fit_pct: u32,
    pub has: Vec<SkillToken>,
    pub missing: Vec<SkillToken>,
    pub recommendation: String,
}

/// Ranks results by `fit_pct` descending. Ties keep roster order.
pub fn aggregate(mut results: Vec<MatchResult>) -> Result<RankedResults, AnalysisError> {
    if results.is_empty() {
        return Err(AnalysisError::NoMatches);
    }
    // sort_by is stable
    results.sort_by(|a, b| b.fit_pct.cmp(&a.fit_pct));
    Ok(RankedResults { entries: results })
}

impl RankedResults {
    pub fn entries(&self) -> &[MatchResult] {
        &self.entries
    }

    /// The top `TEAM_SIZE` employees by fit.
    ///
    /// This is a placeholder heuristic: it does not check that the team's
    /// combined skills cover the required set.
    pub fn suggested_team(&self) -> &[MatchResult] {
        &self.entries[..self.entries.len().min(TEAM_SIZE)]
    }

    /// For each distinct missing skill, who is missing it. Skills appear in
    /// the order first encountered walking the ranking.
    pub fn missing_skill_breakdown(&self) -> Vec<MissingSkillEntry> {
        let mut breakdown: Vec<MissingSkillEntry> = Vec::new();
        for result in &self.entries {
            for skill in &result.missing {
                match breakdown.iter_mut().find(|e| &e.skill == skill) {
                    Some(entry) => {
                        entry.count += 1;
                        entry.employees.push(result.name.clone());
                    }
                    None => breakdown.push(MissingSkillEntry {
                        skill: skill.clone(),
                        count: 1,
                        employees: vec![result.name.clone()],
                    }),
                }
            }
        }
        breakdown
    }

    pub fn fit_bars(&self) -> Vec<FitBar> {
        self.entries
            .iter()
            .map(|r| FitBar {
                name: r.name.clone(),
                fit_pct: r.fit_pct,
                category: r.category(),
            })
            .collect()
    }

    pub fn missing_points(&self) -> Vec<MissingSkillPoint> {
        self.entries
            .iter()
            .flat_map(|r| {
                r.missing.iter().map(move |skill| MissingSkillPoint {
                    employee: r.name.clone(),
                    missing_skill: skill.clone(),
                })
            })
            .collect()
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.entries
            .iter()
            .map(|r| Recommendation {
                name: r.name.clone(),
                fit_pct: r.fit_pct,
                has: r.matched.iter().cloned().collect(),
                missing: r.missing.iter().cloned().collect(),
                recommendation: r.recommendation(),
            })
            .collect()
    }

    /// True when no ranked employee is missing anything.
    pub fn all_requirements_covered(&self) -> bool {
        self.entries.iter().all(|r| r.missing.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalizer::normalize;

    fn result(id: i64, name: &str, fit_pct: u32, missing: &str) -> MatchResult {
        MatchResult {
            employee_id: id,
            name: name.to_string(),
            fit_pct,
            skills: normalize(Some("python")),
            matched: normalize(Some("python")),
            missing: normalize(Some(missing)),
        }
    }

    fn names(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_results_signal_no_matches() {
        assert!(matches!(aggregate(vec![]), Err(AnalysisError::NoMatches)));
    }

    #[test]
    fn test_ranking_is_descending_and_stable() {
        let ranked = aggregate(vec![
            result(1, "A", 50, "sql"),
            result(2, "B", 100, ""),
            result(3, "C", 50, "sql"),
            result(4, "D", 75, "go"),
            result(5, "E", 50, "sql"),
        ])
        .unwrap();

        assert_eq!(names(ranked.entries()), vec!["B", "D", "A", "C", "E"]);
        assert!(ranked
            .entries()
            .windows(2)
            .all(|w| w[0].fit_pct >= w[1].fit_pct));
    }

    #[test]
    fn test_suggested_team_is_top_five_prefix() {
        let results = (1..=8)
            .map(|i| result(i, &format!("E{i}"), (i as u32) * 10, "sql"))
            .collect();
        let ranked = aggregate(results).unwrap();
        let team = ranked.suggested_team();

        assert_eq!(team.len(), TEAM_SIZE);
        assert_eq!(team, &ranked.entries()[..TEAM_SIZE]);
        assert_eq!(names(team), vec!["E8", "E7", "E6", "E5", "E4"]);
    }

    #[test]
    fn test_suggested_team_shorter_than_five() {
        let ranked = aggregate(vec![result(1, "A", 50, "sql"), result(2, "B", 80, "")]).unwrap();
        assert_eq!(names(ranked.suggested_team()), vec!["B", "A"]);
    }

    #[test]
    fn test_missing_skill_breakdown_groups_employees() {
        let ranked = aggregate(vec![
            result(1, "A", 34, "sql, docker"),
            result(2, "B", 67, "docker"),
            result(3, "C", 100, ""),
        ])
        .unwrap();

        let breakdown = ranked.missing_skill_breakdown();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].skill.as_str(), "docker");
        assert_eq!(breakdown[0].count, 2);
        assert_eq!(breakdown[0].employees, vec!["B", "A"]);
        assert_eq!(breakdown[1].skill.as_str(), "sql");
        assert_eq!(breakdown[1].employees, vec!["A"]);
    }

    #[test]
    fn test_missing_points_one_row_per_gap() {
        let ranked = aggregate(vec![
            result(1, "A", 34, "sql, docker"),
            result(2, "B", 100, ""),
        ])
        .unwrap();
        let points = ranked.missing_points();
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.employee == "A"));
        assert!(!ranked.all_requirements_covered());
    }

    #[test]
    fn test_all_covered_when_nobody_missing_anything() {
        let ranked = aggregate(vec![result(1, "A", 100, ""), result(2, "B", 100, "")]).unwrap();
        assert!(ranked.all_requirements_covered());
        assert!(ranked.missing_points().is_empty());
        assert!(ranked.missing_skill_breakdown().is_empty());
    }

    #[test]
    fn test_fit_bars_carry_category() {
        let ranked = aggregate(vec![result(1, "A", 30, "sql"), result(2, "B", 90, "")]).unwrap();
        let bars = ranked.fit_bars();
        assert_eq!(bars[0].name, "B");
        assert_eq!(bars[0].category, FitCategory::Green);
        assert_eq!(bars[1].category, FitCategory::Red);
    }

    #[test]
    fn test_recommendations_follow_ranking() {
        let ranked = aggregate(vec![result(1, "A", 50, "sql"), result(2, "B", 100, "")]).unwrap();
        let recs = ranked.recommendations();
        assert_eq!(recs[0].name, "B");
        assert!(recs[0].missing.is_empty());
        assert_eq!(recs[1].recommendation, "Training required in sql");
    }
}
