//! Fit Scorer — set overlap between required skills and one employee.
//!
//! fit_pct = round_half_up(100 × |required ∩ skills| / |required|)
//!
//! Employees with zero overlap produce no result at all; they are excluded
//! from the ranking rather than listed at 0%.

use serde::Serialize;

use crate::matching::normalizer::SkillSet;
use crate::models::employee::Employee;

/// Colour band used by the fit bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitCategory {
    Green,
    Orange,
    Red,
}

impl FitCategory {
    pub fn from_pct(fit_pct: u32) -> Self {
        if fit_pct >= 70 {
            FitCategory::Green
        } else if fit_pct >= 40 {
            FitCategory::Orange
        } else {
            FitCategory::Red
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitCategory::Green => "green",
            FitCategory::Orange => "orange",
            FitCategory::Red => "red",
        }
    }
}

/// One employee's fit against the required skills.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub employee_id: i64,
    pub name: String,
    /// 0 – 100
    pub fit_pct: u32,
    /// Every skill the employee holds.
    pub skills: SkillSet,
    /// Required skills the employee holds, in required order.
    pub matched: SkillSet,
    /// Required skills the employee lacks, in required order.
    pub missing: SkillSet,
}

impl MatchResult {
    pub fn category(&self) -> FitCategory {
        FitCategory::from_pct(self.fit_pct)
    }

    pub fn recommendation(&self) -> String {
        if self.missing.is_empty() {
            "Good fit — no training required.".to_string()
        } else {
            format!("Training required in {}", self.missing.join(", "))
        }
    }
}

/// Scores one employee. `None` means "exclude from results": either nothing
/// overlaps or `required` is empty.
pub fn score(required: &SkillSet, employee: &Employee) -> Option<MatchResult> {
    let matched = required.intersection(&employee.skills);
    if matched.is_empty() {
        return None;
    }

    Some(MatchResult {
        employee_id: employee.id,
        name: employee.name.clone(),
        fit_pct: fit_percentage(matched.len(), required.len()),
        skills: employee.skills.clone(),
        missing: required.difference(&employee.skills),
        matched,
    })
}

/// Integer percentage rounded half-up, so 1 of 8 gives 13.
/// Callers guarantee `total > 0`.
pub fn fit_percentage(overlap: usize, total: usize) -> u32 {
    let pct = (overlap * 200 + total) / (total * 2);
    pct as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalizer::{normalize, SkillToken};

    fn employee(id: i64, name: &str, skills: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            skills: normalize(Some(skills)),
        }
    }

    fn tokens(set: &SkillSet) -> Vec<&str> {
        set.iter().map(SkillToken::as_str).collect()
    }

    #[test]
    fn test_half_overlap_scores_fifty() {
        let required = normalize(Some("python, sql"));
        let result = score(&required, &employee(1, "Asha", "Python, Java")).unwrap();

        assert_eq!(result.fit_pct, 50);
        assert_eq!(tokens(&result.matched), vec!["python"]);
        assert_eq!(tokens(&result.missing), vec!["sql"]);
        assert_eq!(tokens(&result.skills), vec!["python", "java"]);
    }

    #[test]
    fn test_zero_overlap_is_excluded() {
        let required = normalize(Some("rust, go"));
        assert!(score(&required, &employee(1, "Asha", "Python, Java")).is_none());
    }

    #[test]
    fn test_empty_required_is_excluded() {
        let required = SkillSet::new();
        assert!(score(&required, &employee(1, "Asha", "Python")).is_none());
    }

    #[test]
    fn test_full_overlap_scores_hundred_with_no_missing() {
        let required = normalize(Some("aws, docker"));
        let result = score(&required, &employee(2, "Ben", "Docker, AWS, Terraform")).unwrap();
        assert_eq!(result.fit_pct, 100);
        assert!(result.missing.is_empty());
        assert_eq!(tokens(&result.matched), vec!["aws", "docker"]);
    }

    #[test]
    fn test_rounding_is_half_up() {
        assert_eq!(fit_percentage(1, 8), 13); // 12.5
        assert_eq!(fit_percentage(3, 8), 38); // 37.5
        assert_eq!(fit_percentage(1, 3), 33);
        assert_eq!(fit_percentage(2, 3), 67);
        assert_eq!(fit_percentage(1, 6), 17);
    }

    #[test]
    fn test_duplicate_employee_skills_do_not_inflate_fit() {
        let required = normalize(Some("go, rust"));
        let result = score(&required, &employee(3, "Cai", "Go, go, GO")).unwrap();
        assert_eq!(result.fit_pct, 50);
        assert_eq!(result.matched.len(), 1);
    }

    #[test]
    fn test_fit_category_thresholds() {
        assert_eq!(FitCategory::from_pct(100), FitCategory::Green);
        assert_eq!(FitCategory::from_pct(70), FitCategory::Green);
        assert_eq!(FitCategory::from_pct(69), FitCategory::Orange);
        assert_eq!(FitCategory::from_pct(40), FitCategory::Orange);
        assert_eq!(FitCategory::from_pct(39), FitCategory::Red);
        assert_eq!(FitCategory::from_pct(39).as_str(), "red");
    }

    #[test]
    fn test_recommendation_lists_missing_skills() {
        let required = normalize(Some("python, sql, docker"));
        let partial = score(&required, &employee(1, "Asha", "Python")).unwrap();
        assert_eq!(partial.recommendation(), "Training required in sql, docker");

        let full = score(&required, &employee(2, "Ben", "Python, SQL, Docker")).unwrap();
        assert!(full.recommendation().starts_with("Good fit"));
    }
}
