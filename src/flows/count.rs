//! Count flow - one run from root paths to the written report
//!
//! Traversal → read → extract → aggregate, with the deadline checked at every
//! file boundary, then ranking and rendering. Nothing is written unless the
//! whole run finishes in time.

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::backends::scan::collect_files;
use crate::core::deadline::Deadline;
use crate::core::extract::extract_tokens;
use crate::core::file_reader::{read_file_with_config, FileReadConfig};
use crate::core::frequency::FrequencyTable;
use crate::core::model::{CharfreqError, OutputTarget, RunOptions, Token};
use crate::core::paths::{normalize_path, FormatFilter};
use crate::core::pattern::{resolve, MatchRule};
use crate::core::rank::rank;
use crate::core::render::{RenderConfig, Renderer, Report};

/// Read one file and extract its tokens, or `None` if the file is skipped
pub fn scan_file(
    path: &Path,
    rule: &MatchRule,
    options: &RunOptions,
    read_config: &FileReadConfig,
) -> Option<Vec<Token>> {
    let result = read_file_with_config(path, read_config);

    if let Some(reason) = result.skip_reason {
        if reason.is_soft() {
            info!("Skipping {}: {}", path.display(), reason);
        } else {
            warn!("Skipping {}: {}", path.display(), reason);
        }
        return None;
    }

    if result.lossy_conversion {
        info!(
            "Lossy UTF-8 conversion applied to {} (invalid bytes replaced)",
            path.display()
        );
    }

    let content = result.content?;
    Some(extract_tokens(&content, rule, options))
}

/// Count tokens across every file under `paths` and rank them
pub fn count_frequencies(
    paths: &[PathBuf],
    rule: &MatchRule,
    options: &RunOptions,
) -> Result<Report, CharfreqError> {
    let deadline = Deadline::start(options.timeout);
    count_until(paths, rule, options, &deadline, |_| {})
}

/// Counting loop; `after_file` runs once each file has been handled
fn count_until<F>(
    paths: &[PathBuf],
    rule: &MatchRule,
    options: &RunOptions,
    deadline: &Deadline,
    mut after_file: F,
) -> Result<Report, CharfreqError>
where
    F: FnMut(&Path),
{
    deadline.check()?;

    let filter = FormatFilter::new(&options.formats);
    let files = collect_files(paths, &filter, options.recursive);
    let read_config = FileReadConfig {
        encoding_strategy: options.encoding,
    };

    let mut table = FrequencyTable::new();
    let mut processed = Vec::new();

    for file in &files {
        deadline.check()?;
        info!("Processing file: {}", file.display());

        if let Some(tokens) = scan_file(file, rule, options, &read_config) {
            table.record(tokens);
            processed.push(normalize_path(file));
        }
        after_file(file);
    }
    deadline.check()?;

    info!(
        "Counted {} tokens ({} distinct) in {} of {} files",
        table.total(),
        table.distinct(),
        processed.len(),
        files.len()
    );

    Ok(Report::new(rank(table, options), processed))
}

/// Run the count command
pub fn run_count(
    paths: &[PathBuf],
    expression: Option<&str>,
    library: Option<&str>,
    options: &RunOptions,
) -> Result<()> {
    let rule = resolve(expression, library)?;
    let report = count_frequencies(paths, &rule, options)?;

    let renderer = Renderer::with_config(RenderConfig {
        format: options.report_format,
        show_percent: options.show_percent,
    });
    let sink = open_sink(&options.output)?;
    renderer
        .render_to(&report, sink)
        .context("failed to write report")?;

    Ok(())
}

fn open_sink(target: &OutputTarget) -> Result<Box<dyn Write>, CharfreqError> {
    match target {
        OutputTarget::Stdout => Ok(Box::new(io::stdout().lock())),
        OutputTarget::File(path) => {
            let file = File::create(path).map_err(|source| CharfreqError::OutputIo {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}
