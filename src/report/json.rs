use std::path::Path;

use super::SumReport;

pub fn render_json(report: &SumReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn write_report(path: &Path, report: &SumReport) -> anyhow::Result<()> {
    let json = render_json(report)?;
    std::fs::write(path, json)?;
    Ok(())
}
