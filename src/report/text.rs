use super::SumReport;

pub fn render_text(report: &SumReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("tool\t{} {}\n", report.tool.name, report.tool.version));
    out.push_str(&format!("simd\t{}\n", report.tool.simd));
    if let Some(path) = &report.input.path {
        out.push_str(&format!("input\t{path}\n"));
    }
    out.push_str(&format!("width\t{}\n", report.input.width));
    out.push_str(&format!("count\t{}\n", report.input.count));
    out.push_str(&format!("crc64\t{}\n", report.input.crc64));
    out.push_str(&format!("reducer\t{}\n", report.result.reducer));
    if let Some(sanitize) = report.result.sanitize {
        out.push_str(&format!("sanitize\t{sanitize}\n"));
    }
    out.push_str(&format!("elapsed_us\t{}\n", report.result.elapsed_us));
    out.push_str(&format!("total\t{}\n", report.result.total));
    out
}
