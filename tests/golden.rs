//! Golden tests for charfreq
//!
//! These tests run the binary against the fixture corpus and compare the
//! complete report text. They pin:
//! - Column layout and header wording
//! - Traversal order of processed files
//! - Rank and tied-rank numbering

use assert_cmd::Command;
use std::path::PathBuf;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Create a command running inside the fixtures directory
fn charfreq_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("charfreq"));
    cmd.current_dir(fixtures_dir())
        .env_remove("RUST_LOG")
        .env_remove("CHARFREQ_TIMEOUT")
        .env_remove("CHARFREQ_REPORT_FORMAT");
    cmd
}

/// Run with `args` and return stdout, asserting success
fn run(args: &[&str]) -> String {
    let output = charfreq_cmd().args(args).output().expect("failed to execute");
    assert!(
        output.status.success(),
        "charfreq {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf-8 report")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_library_single_file() {
        let out = run(&["-l", "en", "corpus/alpha.txt"]);

        assert_eq!(
            out,
            "Rank\tRank (tie)\tCharacter\tCount\n\
             1\t1\tb\t3\n\
             2\t2\ta\t2\n\
             3\t3\tc\t1\n\
             \n\
             Total characters: 3\n\
             Total occurrences: 6\n\
             \n\
             Processed files:\n\
             corpus/alpha.txt\n"
        );
    }

    #[test]
    fn golden_recursive_with_format() {
        let out = run(&["-R", "-f", "txt", "corpus"]);

        assert_eq!(
            out,
            "Rank\tRank (tie)\tCharacter\tCount\n\
             1\t1\tp\t5\n\
             2\t1\tq\t5\n\
             3\t3\tb\t3\n\
             4\t4\ta\t2\n\
             5\t5\tc\t1\n\
             \n\
             Total characters: 5\n\
             Total occurrences: 16\n\
             \n\
             Processed files:\n\
             corpus/alpha.txt\n\
             corpus/nested/deep.txt\n"
        );
    }

    #[test]
    fn golden_non_recursive_directory() {
        let out = run(&["corpus"]);

        assert!(out.ends_with("Processed files:\ncorpus/alpha.txt\ncorpus/notes.md\n"));
        assert!(!out.contains("deep.txt"));
    }

    #[test]
    fn golden_top_n_with_percent() {
        let out = run(&["-R", "-f", "txt", "-n", "2", "-p", "corpus"]);

        assert_eq!(
            out,
            "Rank\tRank (tie)\tCharacter\tCount\tPercent\n\
             1\t1\tp\t5\t50.00%\n\
             2\t1\tq\t5\t50.00%\n\
             \n\
             Total characters: 2\n\
             Total occurrences: 10\n\
             \n\
             Processed files:\n\
             corpus/alpha.txt\n\
             corpus/nested/deep.txt\n"
        );
    }

    #[test]
    fn golden_reverse() {
        let out = run(&["-r", "-R", "-f", "txt", "corpus"]);

        let table: Vec<&str> = out.lines().take(6).collect();
        assert_eq!(
            table,
            vec![
                "Rank\tRank (tie)\tCharacter\tCount",
                "1\t1\tc\t1",
                "2\t2\ta\t2",
                "3\t3\tb\t3",
                "4\t4\tp\t5",
                "5\t4\tq\t5",
            ]
        );
    }

    #[test]
    fn golden_show_space_newline() {
        let out = run(&["-S", "corpus/alpha.txt"]);

        let table: Vec<&str> = out.lines().take(5).collect();
        assert_eq!(
            table,
            vec![
                "Rank\tRank (tie)\tCharacter\tCount",
                "1\t1\tb\t3",
                "2\t2\ta\t2",
                "3\t3\t\\n\t1",
                "4\t3\tc\t1",
            ]
        );
    }

    #[test]
    fn golden_punctuation_markdown() {
        let out = run(&["-l", "punc", "--report-format", "md", "corpus/notes.md"]);

        assert_eq!(
            out,
            "| Rank | Rank (tie) | Character | Count |\n\
             |---:|---:|---|---:|\n\
             | 1 | 1 | ! | 1 |\n\
             | 2 | 1 | , | 1 |\n\
             \n\
             - Total characters: 2\n\
             - Total occurrences: 2\n\
             \n\
             ## Processed files\n\
             \n\
             - `corpus/notes.md`\n"
        );
    }
}
