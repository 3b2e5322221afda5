//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use tabled::{builder::Builder, settings::Style};
use veridex_domain::{AnalysisResult, AuthorityReport, SovereigntyMetrics};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Informational message.
    pub fn info(&self, msg: &str) -> String {
        self.colorize(msg, "cyan")
    }

    /// Error message.
    pub fn error(&self, msg: &str) -> String {
        self.colorize(msg, "red")
    }

    /// Success message.
    pub fn success(&self, msg: &str) -> String {
        self.colorize(msg, "green")
    }

    /// Format a complete analysis result.
    pub fn format_analysis(&self, result: &AnalysisResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Quiet => Ok(result.session_id.to_string()),
            OutputFormat::Table => Ok(self.format_analysis_table(result)),
        }
    }

    /// Format a corpus search report.
    pub fn format_search(&self, report: &AuthorityReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report
                .case_law
                .iter()
                .chain(&report.statutes)
                .chain(&report.constitutional)
                .map(|m| m.citation.clone())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => Ok(self.format_search_table(report)),
        }
    }

    /// Format sovereignty metrics.
    pub fn format_score(&self, metrics: &SovereigntyMetrics) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(metrics)?),
            OutputFormat::Quiet => Ok(format!("{:.2}", metrics.overall_score)),
            OutputFormat::Table => Ok(self.format_score_table(metrics)),
        }
    }

    fn format_analysis_table(&self, result: &AnalysisResult) -> String {
        let situation = &result.situation_analysis;
        let legal = &result.legal_analysis;
        let sovereignty = &result.sovereignty_analysis.input_sovereignty;

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Session".to_string(), result.session_id.to_string()]);
        builder.push_record(["Situation", situation.situation_type.as_str()]);
        builder.push_record(["Urgency", situation.urgency.as_str()]);
        builder.push_record(["Jurisdiction", situation.jurisdiction.primary.as_str()]);
        builder.push_record(["Tone", legal.tone_analysis.tone.as_str()]);
        builder.push_record(["Risk", legal.tone_analysis.risk.as_str()]);
        builder.push_record([
            "Sovereignty".to_string(),
            format!(
                "{} ({:.2})",
                sovereignty.sovereignty_level.as_str(),
                sovereignty.overall_score
            ),
        ]);
        builder.push_record(["Remedy", result.remedy.remedy_type.as_str()]);

        let mut table = builder.build();
        table.with(Style::rounded());

        let mut out = table.to_string();
        out.push('\n');

        if !legal.contradictions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                self.colorize("Contradictions:", "yellow")
            ));
            for c in &legal.contradictions {
                out.push_str(&format!("  • [{}] {}\n", c.kind, c.description));
            }
        }

        let recommendations = &result.recommendations;
        out.push_str(&self.section("Immediate actions:", &recommendations.immediate_actions));
        out.push_str(&self.section("Short-term actions:", &recommendations.short_term_actions));
        out.push_str(&self.section("Long-term actions:", &recommendations.long_term_actions));
        out.push_str(&self.section("Warnings:", &recommendations.warnings));
        out.push_str(&self.section("Opportunities:", &recommendations.opportunities));
        out.push_str(&self.section(
            "Sovereignty improvements:",
            &recommendations.sovereignty_improvements,
        ));
        out.push_str(&self.section("Legal strategies:", &result.remedy.legal_strategies));

        out
    }

    fn format_search_table(&self, report: &AuthorityReport) -> String {
        let matches: Vec<_> = report
            .case_law
            .iter()
            .chain(&report.statutes)
            .chain(&report.constitutional)
            .collect();

        if matches.is_empty() {
            return self.colorize(&report.summary, "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Category", "Authority", "Citation", "Score"]);
        for m in &matches {
            builder.push_record([
                m.category.as_str().to_string(),
                m.title.clone(),
                m.citation.clone(),
                format!("{:.2}", m.relevance_score),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::rounded());

        let mut out = table.to_string();
        out.push_str(&format!("\n\n{}\n", report.summary));

        if !report.recommended_authorities.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                self.colorize("Recommended authorities:", "green")
            ));
            for rec in &report.recommended_authorities {
                out.push_str(&format!(
                    "  • {} ({}) - {}\n",
                    rec.authority, rec.citation, rec.reason
                ));
            }
        }
        out
    }

    fn format_score_table(&self, metrics: &SovereigntyMetrics) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Metric", "Value"]);
        builder.push_record(["Level", metrics.sovereignty_level.as_str()]);
        builder.push_record(["Overall".to_string(), format!("{:.2}", metrics.overall_score)]);
        builder.push_record(["Language".to_string(), format!("{:.2}", metrics.language_score)]);
        builder.push_record(["Remedy".to_string(), format!("{:.2}", metrics.remedy_score)]);
        builder.push_record(["Autonomy".to_string(), format!("{:.2}", metrics.autonomy_score)]);

        let mut table = builder.build();
        table.with(Style::rounded());

        let mut out = table.to_string();
        out.push('\n');
        out.push_str(&self.section("Sovereign indicators:", &metrics.sovereign_indicators));
        out.push_str(&self.section("Servile flags:", &metrics.servile_flags));
        out.push_str(&self.section(
            "Improvement suggestions:",
            &metrics.improvement_suggestions,
        ));
        out
    }

    fn section(&self, title: &str, items: &[String]) -> String {
        if items.is_empty() {
            return String::new();
        }
        let mut out = format!("\n{}\n", self.colorize(title, "cyan"));
        for item in items {
            out.push_str(&format!("  • {}\n", item));
        }
        out
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.color_enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veridex_domain::SovereigntyLevel;

    fn metrics() -> SovereigntyMetrics {
        SovereigntyMetrics {
            overall_score: 0.0,
            language_score: 0.0,
            remedy_score: 0.0,
            autonomy_score: 0.0,
            sovereignty_level: SovereigntyLevel::Servile,
            sovereign_indicators: Vec::new(),
            servile_flags: vec!["request".to_string()],
            improvement_suggestions: vec!["Clearly state reservation of rights.".to_string()],
        }
    }

    #[test]
    fn test_quiet_score_is_numeric() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.format_score(&metrics()).unwrap(), "0.00");
    }

    #[test]
    fn test_json_score_roundtrips() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let json = formatter.format_score(&metrics()).unwrap();
        let parsed: SovereigntyMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, metrics());
    }

    #[test]
    fn test_table_score_mentions_level_and_flags() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let out = formatter.format_score(&metrics()).unwrap();
        assert!(out.contains("Servile"));
        assert!(out.contains("request"));
    }
}
