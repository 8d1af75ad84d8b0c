//! CSV export of the ranked results table.

use crate::matching::aggregator::RankedResults;

pub const EXPORT_FILE_NAME: &str = "skill_matches.csv";

/// Renders `id,name,fit_pct,skills,missing,fit_category`, one row per
/// employee in ranked order. Skill lists are joined with ", " inside a
/// single quoted cell.
pub fn export_csv(results: &RankedResults) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["id", "name", "fit_pct", "skills", "missing", "fit_category"])?;

    for r in results.entries() {
        writer.write_record([
            r.employee_id.to_string(),
            r.name.clone(),
            r.fit_pct.to_string(),
            r.skills.join(", "),
            r.missing.join(", "),
            r.category().as_str().to_string(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
