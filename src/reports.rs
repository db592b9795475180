use crate::types::{GroupRow, Summary, Tally};
use crate::util::{format_int, format_number};

/// One grouping of the summary flattened for display or export.
pub struct GroupTable {
    /// File stem used when the table is exported.
    pub name: &'static str,
    pub title: &'static str,
    pub rows: Vec<GroupRow>,
}

fn hour_rows(t: &Tally<f64>) -> Vec<GroupRow> {
    t.iter()
        .map(|(k, v)| GroupRow {
            key: k.to_string(),
            value: format_number(*v, 2),
        })
        .collect()
}

fn count_rows(t: &Tally<u64>) -> Vec<GroupRow> {
    t.iter()
        .map(|(k, v)| GroupRow {
            key: k.to_string(),
            value: format_int(*v),
        })
        .collect()
}

/// The four groupings, in document order.
pub fn group_tables(summary: &Summary) -> Vec<GroupTable> {
    vec![
        GroupTable {
            name: "horas_por_proyecto",
            title: "Hours by Project",
            rows: hour_rows(&summary.hours_by_project),
        },
        GroupTable {
            name: "tareas_por_proyecto",
            title: "Tasks by Project",
            rows: count_rows(&summary.tasks_by_project),
        },
        GroupTable {
            name: "tareas_por_persona",
            title: "Tasks by Assignee",
            rows: count_rows(&summary.tasks_by_person),
        },
        GroupTable {
            name: "tareas_por_estado",
            title: "Tasks by Status",
            rows: count_rows(&summary.tasks_by_status),
        },
    ]
}
