//! Output formatting for CLI commands.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::aggregate::Encoding;
use crate::cli::args::{LexScoreArgs, OutputFormat};
use crate::error::Result;
use crate::report::MatchReport;

/// Result structure for the score command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResult {
    pub word_count: usize,
    pub encoding: Encoding,
    pub values: BTreeMap<String, f64>,
}

/// Result structure for the matches command.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchesResult {
    pub category: String,
    pub encoding: Encoding,
    pub value: f64,
    pub report: MatchReport,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human<W: Write>(&self, writer: &mut W) -> io::Result<()>;
}

impl HumanOutput for ScoreResult {
    fn write_human<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "Lexical Values ({}):", self.encoding)?;
        writeln!(writer, "═══════════════")?;

        let width = self.values.keys().map(String::len).max().unwrap_or(0);
        for (category, value) in &self.values {
            writeln!(writer, "{category:<width$}  {value}")?;
        }

        writeln!(writer)?;
        writeln!(writer, "Total tokens: {}", self.word_count)
    }
}

impl HumanOutput for MatchesResult {
    fn write_human<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "Matches for '{}' ({}):", self.category, self.encoding)?;
        writeln!(writer, "═══════════════")?;

        let width = self
            .report
            .records
            .iter()
            .map(|record| record.token.len())
            .max()
            .unwrap_or(5)
            .max(5);
        writeln!(
            writer,
            "{:<width$}  {:>9}  {:>12}  {:>12}",
            "token", "frequency", "weight", "contribution"
        )?;
        writeln!(writer, "─────────────")?;
        for record in &self.report.records {
            writeln!(
                writer,
                "{:<width$}  {:>9}  {:>12}  {:>12}",
                record.token, record.frequency, record.weight, record.contribution
            )?;
        }

        let summary = &self.report.summary;
        writeln!(writer)?;
        writeln!(writer, "Lexical value: {}", self.value)?;
        writeln!(writer, "Total matches: {}", summary.total_matches)?;
        writeln!(writer, "Unique matches: {}", summary.total_unique_matches)?;
        writeln!(writer, "Total tokens: {}", summary.total_tokens)?;
        writeln!(writer, "Matched: {}%", summary.percent_matches)
    }
}

/// Output a result in the specified format.
pub fn output_result<T, W>(
    writer: &mut W,
    message: &str,
    result: &T,
    args: &LexScoreArgs,
) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    match args.output_format {
        OutputFormat::Human => output_human(writer, message, result, args),
        OutputFormat::Json => output_json(writer, result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput, W: Write>(
    writer: &mut W,
    message: &str,
    result: &T,
    args: &LexScoreArgs,
) -> Result<()> {
    if args.verbosity() > 1 {
        writeln!(writer, "{message}")?;
        writeln!(writer)?;
    }

    result.write_human(writer)?;
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize, W: Write>(writer: &mut W, result: &T, args: &LexScoreArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(writer, "{json}")?;
    Ok(())
}
