//! Presentation helpers for the results table and the detail overlay.
//!
//! Any field of a detail record may be blank or missing, and is rendered as [`NOT_AVAILABLE`]
//! rather than left empty.

use docsage_core::{DoctorDetail, DoctorSummary, Qualification};
use std::fmt;

pub const NOT_AVAILABLE: &str = "Not available";

/// Column headers of the results table, in display order.
pub const SUMMARY_HEADERS: [&str; 4] = ["Registration No", "Name", "Father Name", "Status"];

/// One results-table row, in the same order as [`SUMMARY_HEADERS`].
pub fn summary_row(summary: &DoctorSummary) -> [&str; 4] {
    [
        summary.registration_no.as_str(),
        summary.name.as_str(),
        summary.father_name.as_str(),
        summary.status.as_str(),
    ]
}

/// A field value that may be absent from the registry record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Available(&'a str),
    NotAvailable,
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => FieldValue::Available(v),
            _ => FieldValue::NotAvailable,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Available(v) => f.write_str(v),
            FieldValue::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// The detail overlay for one result.
#[derive(Clone, Copy, Debug)]
pub struct DetailView<'a> {
    detail: &'a DoctorDetail,
}

impl<'a> DetailView<'a> {
    pub fn new(detail: &'a DoctorDetail) -> Self {
        Self { detail }
    }

    /// Labelled fields in overlay order.
    pub fn fields(&self) -> Vec<(&'static str, FieldValue<'a>)> {
        let d = self.detail;
        vec![
            ("Registration No", Some(d.summary.registration_no.as_str()).into()),
            ("Name", Some(d.summary.name.as_str()).into()),
            ("Father Name", Some(d.summary.father_name.as_str()).into()),
            ("Status", Some(d.summary.status.as_str()).into()),
            ("Registration Type", d.registration_type.as_deref().into()),
            ("Issue Date", d.registration_date.as_deref().into()),
            ("License Valid Upto", d.valid_upto.as_deref().into()),
        ]
    }

    /// Qualification lines, or `None` when the registry sent no qualification list at all.
    pub fn qualifications(&self) -> Option<Vec<String>> {
        self.detail
            .qualifications
            .as_ref()
            .map(|quals| quals.iter().map(qualification_line).collect())
    }

    /// Plain-text rendering of the whole overlay.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .fields()
            .into_iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect();

        match self.qualifications() {
            Some(quals) if !quals.is_empty() => {
                lines.push("Qualifications:".to_owned());
                lines.extend(quals.into_iter().map(|q| format!("  - {q}")));
            }
            _ => lines.push(format!("Qualifications: {NOT_AVAILABLE}")),
        }

        lines
    }
}

fn qualification_line(q: &Qualification) -> String {
    format!("{}, {} ({})", q.qualification, q.university, q.passing_year)
}
