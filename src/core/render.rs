//! Renderer module
//!
//! Renders a ranked [`Report`] as tab-separated text, JSON or Markdown.

use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;

use crate::core::rank::RankedEntry;

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Tsv,
    Json,
    Markdown,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(ReportFormat::Tsv),
            "json" => Ok(ReportFormat::Json),
            "md" | "markdown" => Ok(ReportFormat::Markdown),
            _ => Err(format!("Unknown report format: {}", s)),
        }
    }
}

/// Everything a run reports
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub entries: Vec<RankedEntry>,

    /// Distinct tokens shown
    pub total_characters: usize,

    /// Occurrences summed over the shown entries
    pub total_occurrences: u64,

    /// Successfully scanned files, in traversal order
    pub processed_files: Vec<String>,
}

impl Report {
    pub fn new(entries: Vec<RankedEntry>, processed_files: Vec<String>) -> Self {
        Self {
            total_characters: entries.len(),
            total_occurrences: entries.iter().map(|e| e.count).sum(),
            entries,
            processed_files,
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: ReportFormat,
    pub show_percent: bool,
}

/// Escape whitespace and control characters for display
pub fn escape_token(token: &str) -> Cow<'_, str> {
    let needs_escape = token
        .chars()
        .any(|c| matches!(c, ' ' | '\n' | '\t' | '\r' | '\x0C' | '\x0B' | '\x08'));
    if !needs_escape {
        return Cow::Borrowed(token);
    }

    let mut escaped = String::with_capacity(token.len() + 4);
    for c in token.chars() {
        match c {
            ' ' => escaped.push_str(r"\s"),
            '\n' => escaped.push_str(r"\n"),
            '\t' => escaped.push_str(r"\t"),
            '\r' => escaped.push_str(r"\r"),
            '\x0C' => escaped.push_str(r"\f"),
            '\x0B' => escaped.push_str(r"\v"),
            '\x08' => escaped.push_str(r"\b"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Renderer for reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &Report) -> String {
        match self.config.format {
            ReportFormat::Tsv => self.render_tsv(report),
            ReportFormat::Json => self.render_json(report),
            ReportFormat::Markdown => self.render_markdown(report),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, report: &Report, mut writer: W) -> std::io::Result<()> {
        let output = self.render(report);
        writer.write_all(output.as_bytes())?;
        writer.flush()
    }

    fn render_tsv(&self, report: &Report) -> String {
        let mut output = String::from("Rank\tRank (tie)\tCharacter\tCount");
        if self.config.show_percent {
            output.push_str("\tPercent");
        }
        output.push('\n');

        for entry in &report.entries {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}",
                entry.rank,
                entry.tied_rank,
                escape_token(&entry.token),
                entry.count
            ));
            if let Some(percent) = entry.percent {
                output.push_str(&format!("\t{:.2}%", percent));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "\nTotal characters: {}\nTotal occurrences: {}\n\nProcessed files:\n",
            report.total_characters, report.total_occurrences
        ));
        for path in &report.processed_files {
            output.push_str(path);
            output.push('\n');
        }

        output
    }

    fn render_json(&self, report: &Report) -> String {
        let mut output = serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
        output.push('\n');
        output
    }

    fn render_markdown(&self, report: &Report) -> String {
        let mut output = String::from("| Rank | Rank (tie) | Character | Count |");
        let mut divider = String::from("|---:|---:|---|---:|");
        if self.config.show_percent {
            output.push_str(" Percent |");
            divider.push_str("---:|");
        }
        output.push('\n');
        output.push_str(&divider);
        output.push('\n');

        for entry in &report.entries {
            let token = escape_token(&entry.token).replace('|', r"\|");
            output.push_str(&format!(
                "| {} | {} | {} | {} |",
                entry.rank, entry.tied_rank, token, entry.count
            ));
            if let Some(percent) = entry.percent {
                output.push_str(&format!(" {:.2}% |", percent));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "\n- Total characters: {}\n- Total occurrences: {}\n\n## Processed files\n\n",
            report.total_characters, report.total_occurrences
        ));
        for path in &report.processed_files {
            output.push_str(&format!("- `{}`\n", path));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: usize, tied_rank: usize, token: &str, count: u64) -> RankedEntry {
        RankedEntry {
            rank,
            tied_rank,
            token: token.to_string(),
            count,
            percent: None,
        }
    }

    fn sample_report() -> Report {
        Report::new(
            vec![entry(1, 1, "b", 3), entry(2, 2, " ", 2), entry(3, 2, "a", 2)],
            vec!["docs/a.txt".to_string()],
        )
    }

    #[test]
    fn test_report_totals() {
        let report = sample_report();
        assert_eq!(report.total_characters, 3);
        assert_eq!(report.total_occurrences, 7);
    }

    #[test]
    fn test_escape_token() {
        assert_eq!(escape_token(" "), r"\s");
        assert_eq!(escape_token("\n"), r"\n");
        assert_eq!(escape_token("\t"), r"\t");
        assert_eq!(escape_token("\r"), r"\r");
        assert_eq!(escape_token("\x0C"), r"\f");
        assert_eq!(escape_token("\x0B"), r"\v");
        assert_eq!(escape_token("\x08"), r"\b");
        assert_eq!(escape_token("a b"), r"a\sb");
        assert!(matches!(escape_token("abc"), Cow::Borrowed("abc")));
    }

    #[test]
    fn test_render_tsv() {
        let renderer = Renderer::with_config(RenderConfig::default());
        let output = renderer.render(&sample_report());

        assert_eq!(
            output,
            "Rank\tRank (tie)\tCharacter\tCount\n\
             1\t1\tb\t3\n\
             2\t2\t\\s\t2\n\
             3\t2\ta\t2\n\
             \n\
             Total characters: 3\n\
             Total occurrences: 7\n\
             \n\
             Processed files:\n\
             docs/a.txt\n"
        );
    }

    #[test]
    fn test_render_tsv_percent() {
        let mut first = entry(1, 1, "a", 3);
        first.percent = Some(75.0);
        let mut second = entry(2, 2, "b", 1);
        second.percent = Some(25.0);
        let report = Report::new(vec![first, second], Vec::new());

        let renderer = Renderer::with_config(RenderConfig {
            format: ReportFormat::Tsv,
            show_percent: true,
        });
        let output = renderer.render(&report);

        assert!(output.starts_with("Rank\tRank (tie)\tCharacter\tCount\tPercent\n"));
        assert!(output.contains("1\t1\ta\t3\t75.00%\n"));
        assert!(output.contains("2\t2\tb\t1\t25.00%\n"));
    }

    #[test]
    fn test_render_json_keeps_raw_tokens() {
        let renderer = Renderer::with_config(RenderConfig {
            format: ReportFormat::Json,
            show_percent: false,
        });
        let output = renderer.render(&sample_report());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["entries"][1]["token"], " ");
        assert_eq!(value["entries"][2]["tied_rank"], 2);
        assert_eq!(value["total_occurrences"], 7);
        assert_eq!(value["processed_files"][0], "docs/a.txt");
        assert!(value["entries"][0].get("percent").is_none());
    }

    #[test]
    fn test_render_markdown() {
        let report = Report::new(vec![entry(1, 1, "|", 4)], vec!["a.md".to_string()]);
        let renderer = Renderer::with_config(RenderConfig {
            format: ReportFormat::Markdown,
            show_percent: false,
        });
        let output = renderer.render(&report);

        assert!(output.starts_with("| Rank | Rank (tie) | Character | Count |\n|---:|---:|---|---:|\n"));
        assert!(output.contains("| 1 | 1 | \\| | 4 |"));
        assert!(output.contains("## Processed files"));
        assert!(output.contains("- `a.md`"));
    }

    #[test]
    fn test_render_to_writer() {
        let renderer = Renderer::with_config(RenderConfig::default());
        let mut buffer = Vec::new();
        renderer.render_to(&sample_report(), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("Processed files:"));
    }

    #[test]
    fn test_report_format_parse() {
        assert_eq!("tsv".parse::<ReportFormat>().unwrap(), ReportFormat::Tsv);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!(
            "markdown".parse::<ReportFormat>().unwrap(),
            ReportFormat::Markdown
        );
        let err = "csv".parse::<ReportFormat>().unwrap_err();
        assert!(err.contains("Unknown report format"));
    }
}
