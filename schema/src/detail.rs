//! In-memory joins behind the company detail view.
//!
//! Callers must only resolve once every list is loaded; a reference that is
//! still missing after that is rendered as absent, never dereferenced.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::datetime::format_long_date;
use crate::entity::{Company, Industry, Location, Metric, MetricReading, MetricSnapshot, find_by_id};

/// A company joined with its industry, location and snapshots.
#[derive(Clone, Debug, PartialEq)]
pub struct CompanyDetail {
    pub company: Company,
    pub industry: Option<Industry>,
    pub location: Option<Location>,
    pub snapshots: Vec<SnapshotLine>,
}

/// One snapshot row in the detail view.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotLine {
    pub id: String,
    /// Metric name; `None` when the metric is not in the list.
    pub metric_name: Option<String>,
    pub reading: MetricReading,
    /// Capture date, e.g. `January 1st, 2024`.
    pub captured_on: String,
}

impl CompanyDetail {
    #[must_use]
    pub fn resolve(
        company: &Company,
        industries: &[Industry],
        locations: &[Location],
        metrics: &[Metric],
        snapshots: &[MetricSnapshot],
    ) -> Self {
        let snapshots = snapshots
            .iter()
            .filter(|s| s.company_id == company.id)
            .map(|s| {
                let metric = find_by_id(metrics, &s.metric_id);
                SnapshotLine {
                    id: s.id.clone(),
                    metric_name: metric.map(|m| m.name.clone()),
                    reading: s.reading(metric.map(|m| m.kind)),
                    captured_on: format_long_date(s.captured_at.date_naive()),
                }
            })
            .collect();

        Self {
            company: company.clone(),
            industry: find_by_id(industries, &company.industry_id).cloned(),
            location: find_by_id(locations, &company.location_id).cloned(),
            snapshots,
        }
    }

    #[must_use]
    pub fn industry_label(&self) -> &str {
        self.industry.as_ref().map_or(UNKNOWN, |i| i.name.as_str())
    }

    #[must_use]
    pub fn location_label(&self) -> &str {
        self.location.as_ref().map_or(UNKNOWN, |l| l.name.as_str())
    }
}

impl SnapshotLine {
    #[must_use]
    pub fn metric_label(&self) -> &str {
        self.metric_name.as_deref().unwrap_or(UNKNOWN)
    }
}

/// Label rendered for a reference that did not resolve.
pub const UNKNOWN: &str = "Unknown";
