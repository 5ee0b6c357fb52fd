//! Corpus audit command
//!
//! Validates every entry of an equation corpus in parallel and summarises
//! which entries could never be used as a target.

use crate::core::Equation;
use crate::game::ResultCode;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// An entry that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    /// 1-based line number in the corpus
    pub line: usize,
    pub text: String,
    pub code: ResultCode,
}

/// Summary of a corpus audit
#[derive(Debug)]
pub struct AuditResult {
    pub total: usize,
    pub valid: usize,
    pub rejected: Vec<RejectedEntry>,
    pub code_counts: FxHashMap<ResultCode, usize>,
    /// Valid equations that appear more than once, with their count
    pub duplicates: Vec<(String, usize)>,
    pub duration: Duration,
}

impl AuditResult {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.duplicates.is_empty()
    }
}

/// Audit corpus lines
///
/// Blank lines are ignored but still count towards line numbers.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn run_audit(lines: &[&str], show_progress: bool) -> AuditResult {
    let start = Instant::now();

    let entries: Vec<(usize, &str)> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, text)| !text.is_empty())
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(entries.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<(usize, &str, ResultCode)> = entries
        .par_iter()
        .map(|&(line, text)| {
            let code = match Equation::new(text) {
                Ok(_) => ResultCode::Accepted,
                Err(err) => ResultCode::from(err),
            };
            pb.inc(1);
            (line, text, code)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut code_counts: FxHashMap<ResultCode, usize> = FxHashMap::default();
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
    let mut rejected = Vec::new();

    for &(line, text, code) in &outcomes {
        *code_counts.entry(code).or_insert(0) += 1;
        if code.is_accepted() {
            *seen.entry(text).or_insert(0) += 1;
        } else {
            rejected.push(RejectedEntry {
                line,
                text: text.to_string(),
                code,
            });
        }
    }

    let mut duplicates: Vec<(String, usize)> = seen
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(text, count)| (text.to_string(), count))
        .collect();
    duplicates.sort();

    AuditResult {
        total: outcomes.len(),
        valid: code_counts.get(&ResultCode::Accepted).copied().unwrap_or(0),
        rejected,
        code_counts,
        duplicates,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::EQUATIONS;

    #[test]
    fn audit_embedded_corpus_is_clean() {
        let result = run_audit(EQUATIONS, false);
        assert_eq!(result.total, EQUATIONS.len());
        assert_eq!(result.valid, EQUATIONS.len());
        assert!(result.is_clean());
    }

    #[test]
    fn audit_reports_rejections_in_line_order() {
        let lines = ["1+2+3=6", "", "1+2+3=7", "12=12=1", "2*8-9=7", "1+2=3"];
        let result = run_audit(&lines, false);

        assert_eq!(result.total, 5);
        assert_eq!(result.valid, 2);
        assert_eq!(
            result.rejected,
            vec![
                RejectedEntry {
                    line: 3,
                    text: "1+2+3=7".to_string(),
                    code: ResultCode::NotEqual,
                },
                RejectedEntry {
                    line: 4,
                    text: "12=12=1".to_string(),
                    code: ResultCode::NoEqualSign,
                },
                RejectedEntry {
                    line: 6,
                    text: "1+2=3".to_string(),
                    code: ResultCode::InvalidLength,
                },
            ]
        );
        assert_eq!(result.code_counts.get(&ResultCode::NotEqual), Some(&1));
        assert!(!result.is_clean());
    }

    #[test]
    fn audit_finds_duplicates() {
        let lines = ["1+2+3=6", "2*8-9=7", " 1+2+3=6 "];
        let result = run_audit(&lines, false);
        assert_eq!(result.duplicates, vec![("1+2+3=6".to_string(), 2)]);
        assert!(!result.is_clean());
    }
}
