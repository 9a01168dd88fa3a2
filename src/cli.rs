//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::file_reader::EncodingStrategy;
use crate::core::model::{CharfreqError, OutputTarget, RunOptions};
use crate::core::render::ReportFormat;

/// charfreq - count character and pattern frequencies across text files.
#[derive(Parser, Debug)]
#[command(name = "charfreq")]
#[command(
    author,
    version,
    about,
    long_about = r#"charfreq counts how often each character (or each regex match) occurs in
one or more text files and prints a ranked table.

Libraries (-l):
  c        word characters (letters, digits, underscore)
  cp       word and whitespace characters
  cn       CJK Unified Ideographs
  en       ASCII letters
  alnum    ASCII letters and digits
  num      digits
  sp       whitespace characters
  punc     anything that is neither a word character nor whitespace

Examples:
    charfreq notes.txt
    charfreq -l en -i -n 10 docs/
    charfreq -R -f md,txt -p -o freq.tsv .
    charfreq -e "[A-Z][a-z]+" book.txt
"#
)]
pub struct Cli {
    /// Regular expression whose matches are counted.
    #[arg(
        short,
        long,
        value_name = "REGEX",
        long_help = "Count every non-overlapping match of REGEX instead of single characters.\n\n\
Cannot be combined with --library. Whitespace is never stripped when an expression is given."
    )]
    pub expression: Option<String>,

    /// Character-class library (c, cp, cn, en, alnum, num, sp, punc).
    #[arg(
        short,
        long,
        value_name = "NAME",
        long_help = "Count only characters of the named class. See the library list above.\n\n\
Cannot be combined with --expression."
    )]
    pub library: Option<String>,

    /// Comma-separated file extensions to process.
    #[arg(
        short,
        long,
        value_name = "EXT,...",
        value_delimiter = ',',
        long_help = "Only process files whose names end in .EXT for one of the given extensions\n\
(case-sensitive). A leading dot is optional. If omitted, every file is considered."
    )]
    pub format: Vec<String>,

    /// Show only the first N entries (0 = all).
    #[arg(short, long, value_name = "N", default_value_t = 0)]
    pub number: usize,

    /// Order by ascending count.
    #[arg(
        short,
        long,
        long_help = "Order by ascending count (ties still break by ascending character).\n\n\
The whole table is sorted before --number truncates it, so -r -n N shows the N\n\
least frequent entries rather than the N most frequent in reverse order."
    )]
    pub reverse: bool,

    /// Descend into subdirectories.
    #[arg(short = 'R', long)]
    pub recursive: bool,

    /// Keep whitespace in the content before matching.
    #[arg(
        short = 'S',
        long,
        long_help = "Do not strip whitespace before matching. Whitespace is always kept for the\n\
cp and sp libraries and for custom expressions."
    )]
    pub show_space: bool,

    /// Lowercase content before matching.
    #[arg(short = 'i', long)]
    pub case_insensitive: bool,

    /// Add a percent column.
    #[arg(
        short = 'p',
        long,
        long_help = "Add a percent column. Percentages are relative to the occurrences of the\n\
entries shown, so they sum to 100% even when --number truncates the table."
    )]
    pub display_percent: bool,

    /// Abort the whole run after SECS seconds.
    #[arg(
        short,
        long,
        value_name = "SECS",
        default_value_t = crate::core::model::DEFAULT_TIMEOUT_SECS,
        env = "CHARFREQ_TIMEOUT",
        long_help = "Abort the whole run if it takes longer than SECS seconds. The deadline is\n\
checked between files; on timeout nothing is written and the exit status is 1."
    )]
    pub timeout: u64,

    /// Verbose mode (per-file diagnostics).
    #[arg(
        short,
        long,
        long_help = "Print each file as it is processed and explain skipped files on stderr.\n\
Encoding and read failures are reported even without this flag."
    )]
    pub verbose: bool,

    /// Write the report to PATH instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format (tsv/json/md).
    #[arg(
        long,
        value_name = "FORMAT",
        default_value = "tsv",
        env = "CHARFREQ_REPORT_FORMAT",
        long_help = "Select the report format.\n\n\
Supported values:\n\
- tsv (default): tab-separated table, summary and processed files\n\
- json: a single JSON document with raw (unescaped) tokens\n\
- md: Markdown table"
    )]
    pub report_format: String,

    /// Skip files that are not valid UTF-8.
    #[arg(
        long,
        long_help = "Skip files containing invalid UTF-8 and report them, instead of replacing\n\
the invalid bytes and counting the rest."
    )]
    pub strict_encoding: bool,

    /// Files and/or directories to scan.
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// Build the run options from the parsed arguments
    pub fn run_options(&self) -> Result<RunOptions> {
        let report_format: ReportFormat = self
            .report_format
            .parse()
            .map_err(|e: String| CharfreqError::config(e))?;

        Ok(RunOptions {
            ignore_whitespace: !self.show_space,
            ignore_case: self.case_insensitive,
            formats: self.format.clone(),
            recursive: self.recursive,
            reverse: self.reverse,
            top_n: self.number,
            show_percent: self.display_percent,
            timeout: Duration::from_secs(self.timeout),
            verbose: self.verbose,
            output: OutputTarget::from_path(self.output.clone()),
            report_format,
            encoding: if self.strict_encoding {
                EncodingStrategy::Skip
            } else {
                EncodingStrategy::Lossy
            },
        })
    }
}

/// Run the CLI
pub fn run(cli: Cli) -> Result<()> {
    let options = cli.run_options()?;
    crate::core::logging::init(options.verbose);

    crate::flows::count::run_count(
        &cli.paths,
        cli.expression.as_deref(),
        cli.library.as_deref(),
        &options,
    )
}
