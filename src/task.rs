//! Case entries handed to the dashboard once intimations are imported.

use serde::{Deserialize, Serialize};

use crate::record::Intimation;

/// Values the parser cannot infer. Every imported entry starts from these and
/// is reviewed by a person afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDefaults {
    pub area: String,
    pub status: String,
    pub act: String,
    pub custody: String,
    pub act_category: String,
    pub process_kind: String,
}

impl Default for TaskDefaults {
    fn default() -> Self {
        TaskDefaults {
            area: "Criminal".into(),
            status: "Analisar".into(),
            act: "Ciência".into(),
            custody: "Solto".into(),
            act_category: "Geral".into(),
            process_kind: "AP".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRef {
    pub kind: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    pub id: String,
    pub recipient: String,
    pub status: String,
    /// ISO date, with time when the dispatch line had one.
    pub date: String,
    /// Filled in once an act type is chosen.
    pub deadline: String,
    pub processes: Vec<ProcessRef>,
    pub act: String,
    pub follow_up: String,
    pub area: String,
    pub custody: String,
    pub act_category: String,
    pub source: Intimation,
}

/// Class of urgent protective-measure cases, handled on their own page.
pub const PROTECTIVE_MEASURE_CLASS: &str = "MPUMPCrim";

/// Fields that always need a human look after import.
const REVIEW_FIELDS: &[&str] = &["status", "ato"];

/// `DD/MM/YYYY` (two-digit years read as 20YY) plus optional `HH:MM` into ISO.
pub fn to_iso_date(date: &str, time: Option<&str>) -> Option<String> {
    let mut parts = date.trim().split('/');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let year = if year > 2000 { year } else { 2000 + year };
    let iso = format!("{year:04}-{month:02}-{day:02}");
    Some(match time {
        Some(t) => format!("{iso}T{t}:00"),
        None => iso,
    })
}

fn entry_id(intimation: &Intimation) -> String {
    match &intimation.document_id {
        Some(id) => format!("pje-{id}"),
        None => {
            let digits = |s: &str| s.chars().filter(char::is_ascii_digit).collect::<String>();
            format!(
                "pje-{}-{}",
                digits(&intimation.case_number),
                digits(&intimation.issuance_date)
            )
        }
    }
}

/// Reshape a parsed intimation into a case entry. An empty `area` falls back
/// to the configured default, a missing process class to `process_kind`.
pub fn to_task_entry(intimation: &Intimation, area: &str, defaults: &TaskDefaults) -> TaskEntry {
    let area = if area.trim().is_empty() {
        defaults.area.clone()
    } else {
        area.trim().to_string()
    };
    let date = to_iso_date(&intimation.issuance_date, intimation.issuance_time.as_deref())
        .unwrap_or_default();

    TaskEntry {
        id: entry_id(intimation),
        recipient: intimation.recipient_name.clone(),
        status: defaults.status.clone(),
        date,
        deadline: String::new(),
        processes: vec![ProcessRef {
            kind: intimation
                .process_type
                .clone()
                .unwrap_or_else(|| defaults.process_kind.clone()),
            number: intimation.case_number.clone(),
        }],
        act: defaults.act.clone(),
        follow_up: format!("(ajustar {})", REVIEW_FIELDS.join(" e ")),
        area,
        custody: defaults.custody.clone(),
        act_category: defaults.act_category.clone(),
        source: intimation.clone(),
    }
}

pub fn is_protective_measure(intimation: &Intimation) -> bool {
    intimation
        .process_type
        .as_deref()
        .is_some_and(|t| t.eq_ignore_ascii_case(PROTECTIVE_MEASURE_CLASS))
}

#[derive(Debug, Default)]
pub struct MeasureSplit {
    pub protective: Vec<Intimation>,
    pub general: Vec<Intimation>,
}

/// Route urgent protective-measure cases away from the general list, keeping
/// input order on both sides.
pub fn split_protective_measures(intimations: Vec<Intimation>) -> MeasureSplit {
    let (protective, general): (Vec<_>, Vec<_>) = intimations.into_iter().partition(is_protective_measure);
    MeasureSplit { protective, general }
}

#[derive(Debug, Default)]
pub struct ImportSplit {
    pub fresh: Vec<Intimation>,
    pub duplicates: Vec<Intimation>,
}

fn already_registered(intimation: &Intimation, entry: &TaskEntry) -> bool {
    if let (Some(a), Some(b)) = (&intimation.document_id, &entry.source.document_id) {
        if a == b {
            return true;
        }
    }
    if !entry.processes.iter().any(|p| p.number == intimation.case_number) {
        return false;
    }
    // Same case: only the same issuance day is the same intimation.
    let Some(date) = to_iso_date(&intimation.issuance_date, None) else {
        return false;
    };
    entry.date.split('T').next() == Some(date.as_str())
}

/// Separate intimations already present among `existing` entries.
pub fn split_existing(intimations: Vec<Intimation>, existing: &[TaskEntry]) -> ImportSplit {
    let mut split = ImportSplit::default();
    for intimation in intimations {
        if existing.iter().any(|e| already_registered(&intimation, e)) {
            split.duplicates.push(intimation);
        } else {
            split.fresh.push(intimation);
        }
    }
    split
}
