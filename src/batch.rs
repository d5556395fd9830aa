//! Parallel corpus scanning.
//!
//! Verses are independent, so a corpus is scanned one verse per rayon task.
//! Reports come back in input order regardless of scheduling.

use hashbrown::HashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bridge::Bridge;
use crate::model::{VerseForm, VerseType};
use crate::verse::VerseSummary;
use crate::Scanner;

/// One line of a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusVerse {
    pub id: u64,
    pub text: String,
    #[serde(default = "unknown_form")]
    pub form: VerseForm,
}

fn unknown_form() -> VerseForm {
    VerseForm::Unknown
}

/// Outcome of scanning one corpus line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub id: u64,
    pub verse: Option<VerseSummary>,
    pub error: Option<String>,
}

impl ScanReport {
    pub fn is_scanned(&self) -> bool {
        self.verse.is_some()
    }
}

/// Totals over a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub scanned: usize,
    pub failed: usize,
    pub by_meter: HashMap<VerseType, usize>,
}

/// Scan every verse in parallel.
pub fn scan_corpus<B: Bridge>(
    scanner: &Scanner<B>,
    verses: &[CorpusVerse],
) -> (Vec<ScanReport>, BatchSummary) {
    let reports: Vec<ScanReport> = verses
        .par_iter()
        .map(|line| match scanner.create(&line.text, line.id, line.form.verse_types()) {
            Ok(verse) => ScanReport { id: line.id, verse: Some(verse.summary()), error: None },
            Err(error) => ScanReport { id: line.id, verse: None, error: Some(error.to_string()) },
        })
        .collect();

    let mut summary = BatchSummary { total: reports.len(), ..BatchSummary::default() };
    for report in &reports {
        match &report.verse {
            Some(verse) => {
                summary.scanned += 1;
                *summary.by_meter.entry(verse.meter.verse_type()).or_default() += 1;
            }
            None => summary.failed += 1,
        }
    }
    (reports, summary)
}
