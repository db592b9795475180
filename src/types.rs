use crate::tokenizer::split_line;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::AddAssign;
use tabled::Tabled;

/// Fixed column positions of the issue export that the report reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Status,
    Project,
    Assignee,
    TimeSpent,
}

impl Column {
    pub const fn index(self) -> usize {
        match self {
            Column::Status => 4,
            Column::Project => 6,
            Column::Assignee => 13,
            Column::TimeSpent => 53,
        }
    }

    /// Placeholder used when the column is absent from a row.
    pub const fn fallback(self) -> &'static str {
        match self {
            Column::Status => "Sin estado",
            Column::Project => "Sin proyecto",
            Column::Assignee => "Sin asignar",
            Column::TimeSpent => "",
        }
    }
}

/// Rows with fewer fields than this are skipped.
pub const MIN_FIELDS: usize = Column::TimeSpent.index() + 1;

/// One tokenized data line.
#[derive(Debug, Clone)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Tokenize `line`, returning `None` when it is too short to be a record.
    pub fn parse(line: &str) -> Option<Self> {
        let fields = split_line(line);
        if fields.len() < MIN_FIELDS {
            return None;
        }
        Some(Record { fields })
    }

    // `parse` guarantees MIN_FIELDS fields, so the fallback only covers
    // records built some other way.
    pub fn get(&self, col: Column) -> &str {
        self.fields
            .get(col.index())
            .map(String::as_str)
            .unwrap_or_else(|| col.fallback())
    }
}

/// Keyed accumulator that remembers first-seen key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for Tally<V> {
    fn default() -> Self {
        Tally {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V: Copy + AddAssign> Tally<V> {
    pub fn add(&mut self, key: &str, value: V) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += value,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), value));
            }
        }
    }
}

impl<V: Copy + PartialOrd> Tally<V> {
    /// Copy ordered by value, largest first; ties keep first-seen order.
    pub fn sorted_desc(&self) -> Tally<V> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (k, _))| (k.clone(), i))
            .collect();
        Tally { entries, index }
    }
}

impl<V> Tally<V> {
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as an object in tally order.
impl<V: Serialize> Serialize for Tally<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    #[serde(rename = "total_horas")]
    pub total_hours: f64,
    #[serde(rename = "total_tareas")]
    pub total_tasks: u64,
    #[serde(rename = "total_proyectos")]
    pub total_projects: usize,
    #[serde(rename = "total_personas")]
    pub total_people: usize,
}

/// The finished report document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub kpis: Kpis,
    #[serde(rename = "horas_por_proyecto")]
    pub hours_by_project: Tally<f64>,
    #[serde(rename = "tareas_por_proyecto")]
    pub tasks_by_project: Tally<u64>,
    #[serde(rename = "tareas_por_persona")]
    pub tasks_by_person: Tally<u64>,
    #[serde(rename = "tareas_por_estado")]
    pub tasks_by_status: Tally<u64>,
}

/// Flat row used for console previews and CSV exports of one grouping.
#[derive(Debug, Serialize, Tabled, Clone)]
pub struct GroupRow {
    #[serde(rename = "Key")]
    #[tabled(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    #[tabled(rename = "Value")]
    pub value: String,
}
