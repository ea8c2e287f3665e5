//! Ordered per-URL results of one run.

use super::Outcome;

/// Outcomes of a run, in input order. Blank input entries have no entry.
#[derive(Debug, Default)]
pub struct RunReport {
    entries: Vec<(String, Outcome)>,
}

impl RunReport {
    pub(crate) fn push(&mut self, url: String, outcome: Outcome) {
        self.entries.push((url, outcome));
    }

    pub fn entries(&self) -> &[(String, Outcome)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn saved(&self) -> usize {
        self.count(Outcome::is_saved)
    }

    pub fn skipped(&self) -> usize {
        self.count(Outcome::is_skipped)
    }

    pub fn failed(&self) -> usize {
        self.count(Outcome::is_failed)
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Done: {} saved, {} skipped, {} failed",
            self.saved(),
            self.skipped(),
            self.failed()
        )
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| pred(o)).count()
    }
}
