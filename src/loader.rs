// Streaming aggregation of the issue export.
//
// One pass over the lines: the header is dropped, every data line is
// tokenized and folded into the accumulators, and the sorted summary is
// produced once the input is exhausted.
use crate::duration::parse_hours;
use crate::error::{ReportError, Result};
use crate::types::{Column, Kpis, Record, Summary, Tally};
use crate::util::round2;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Physical lines read, header included.
    pub total_lines: usize,
    pub counted_rows: usize,
    /// Data lines dropped for having too few fields.
    pub skipped_rows: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingHeader,
    Aggregating,
}

/// Accumulators for a single run. Owned by the caller for the run's lifetime.
#[derive(Debug)]
pub struct Aggregator {
    state: State,
    hours_by_project: Tally<f64>,
    tasks_by_project: Tally<u64>,
    tasks_by_person: Tally<u64>,
    tasks_by_status: Tally<u64>,
    projects: HashSet<String>,
    people: HashSet<String>,
    total_hours: f64,
    total_tasks: u64,
    report: LoadReport,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    pub fn new() -> Self {
        Aggregator {
            state: State::AwaitingHeader,
            hours_by_project: Tally::default(),
            tasks_by_project: Tally::default(),
            tasks_by_person: Tally::default(),
            tasks_by_status: Tally::default(),
            projects: HashSet::new(),
            people: HashSet::new(),
            total_hours: 0.0,
            total_tasks: 0,
            report: LoadReport::default(),
        }
    }

    /// Fold one input line into the accumulators.
    pub fn feed(&mut self, line: &str) {
        self.report.total_lines += 1;
        if self.state == State::AwaitingHeader {
            self.state = State::Aggregating;
            return;
        }

        let Some(record) = Record::parse(line) else {
            self.report.skipped_rows += 1;
            debug!(line = self.report.total_lines, "skipping short row");
            return;
        };

        let project = record.get(Column::Project).trim();
        let person = record.get(Column::Assignee).trim();
        let status = record.get(Column::Status).trim();
        let hours = parse_hours(Some(record.get(Column::TimeSpent)));

        if !project.is_empty() {
            self.hours_by_project.add(project, hours);
            self.tasks_by_project.add(project, 1);
            if !self.projects.contains(project) {
                self.projects.insert(project.to_string());
            }
        }
        if !person.is_empty() {
            self.tasks_by_person.add(person, 1);
            if !self.people.contains(person) {
                self.people.insert(person.to_string());
            }
        }
        if !status.is_empty() {
            self.tasks_by_status.add(status, 1);
        }

        self.total_hours += hours;
        self.total_tasks += 1;
        self.report.counted_rows += 1;
    }

    /// Freeze the accumulators into the summary document.
    pub fn finish(self) -> (Summary, LoadReport) {
        let summary = Summary {
            kpis: Kpis {
                total_hours: round2(self.total_hours),
                total_tasks: self.total_tasks,
                total_projects: self.projects.len(),
                total_people: self.people.len(),
            },
            hours_by_project: self.hours_by_project.sorted_desc(),
            tasks_by_project: self.tasks_by_project.sorted_desc(),
            tasks_by_person: self.tasks_by_person.sorted_desc(),
            tasks_by_status: self.tasks_by_status,
        };
        (summary, self.report)
    }
}

/// Aggregate every line of `reader`. `path` is only used in error reports.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than failing the run; only
/// I/O errors from the reader are fatal.
pub fn aggregate_reader<R: BufRead>(
    mut reader: R,
    path: &Path,
) -> Result<(Summary, LoadReport)> {
    let mut agg = Aggregator::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| ReportError::InputRead {
                path: path.to_path_buf(),
                source,
            })?;
        if n == 0 {
            break;
        }
        agg.feed(&String::from_utf8_lossy(trim_line_end(&buf)));
    }
    Ok(agg.finish())
}

// Strip one trailing `\n` or `\r\n`.
fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

pub fn aggregate_file(path: &Path) -> Result<(Summary, LoadReport)> {
    let file = File::open(path).map_err(|source| ReportError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let (summary, report) = aggregate_reader(BufReader::new(file), path)?;

    if report.skipped_rows > 0 {
        warn!(
            skipped = report.skipped_rows,
            "rows with fewer than the required columns were ignored"
        );
    }
    if report.counted_rows > 0 && summary.tasks_by_project.is_empty() {
        warn!("no counted row carried a project name");
    }
    info!(
        lines = report.total_lines,
        rows = report.counted_rows,
        projects = summary.tasks_by_project.len(),
        "aggregated {}",
        path.display()
    );
    Ok((summary, report))
}
