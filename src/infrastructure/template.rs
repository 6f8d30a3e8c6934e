// HTML page rendering from `${name}` placeholder templates
use crate::domain::chart::ChartSeries;
use std::collections::HashMap;

const LINECHART_TEMPLATE: &str = include_str!("../../templates/linechart.html");
const RANGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Replace template variables in a template string
pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the line chart page for a chart series.
pub fn render_linechart(chart: &ChartSeries) -> Result<String, serde_json::Error> {
    // Keep the embedded JSON from closing the <script> block
    let chart_json = serde_json::to_string(chart)?.replace('<', "\\u003c");

    let range = match (chart.range_start, chart.range_end) {
        (Some(start), Some(end)) => format!(
            "{} to {} ({} samples)",
            start.format(RANGE_FORMAT),
            end.format(RANGE_FORMAT),
            chart.labels.len()
        ),
        _ => "No telemetry received yet".to_string(),
    };

    let mut vars = HashMap::new();
    vars.insert("title".to_string(), "Vehicle Telemetry".to_string());
    vars.insert("range".to_string(), escape_html(&range));
    vars.insert("chart_json".to_string(), chart_json);

    Ok(render(LINECHART_TEMPLATE, &vars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::aggregate;
    use crate::domain::record::NormalizedRecord;

    #[test]
    fn test_render() {
        let mut vars = HashMap::new();
        vars.insert("title".to_string(), "Car".to_string());
        vars.insert("count".to_string(), "3".to_string());

        let result = render("<h1>${title}</h1><p>${count} of ${count}</p>${missing}", &vars);

        assert_eq!(result, "<h1>Car</h1><p>3 of 3</p>${missing}");
    }

    #[test]
    fn test_render_empty_chart() {
        let page = render_linechart(&aggregate(&[])).unwrap();
        assert!(page.contains("No telemetry received yet"));
        assert!(page.contains(r#""labels":[]"#));
        assert!(!page.contains("${"));
    }

    #[test]
    fn test_render_chart_with_records() {
        let mut record = NormalizedRecord::new("VIN".to_string(), 1000, 0.0, 0.0);
        record.engine_rpm = Some("2150".to_string());
        let page = render_linechart(&aggregate(&[record])).unwrap();

        assert!(page.contains("1970-01-01 00:00:01 UTC to 1970-01-01 00:00:01 UTC (1 samples)"));
        assert!(page.contains(r#""labels":["00:00:01"]"#));
        assert!(page.contains(r#""values":["21"]"#));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
