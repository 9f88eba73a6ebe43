//! Day aggregation for a single sheet.
//!
//! Every output is computed independently from the same line set:
//! - absence dates per category (distinct, sorted)
//! - worked days (distinct days with a job-code line)
//! - weighted job-code allocation
//! - extra hours / expenses totals
//! - anomaly days (no lines at all, absence mixed with work)

use crate::errors::{AppError, AppResult};
use crate::models::absence::AbsenceKind;
use crate::models::line::Line;
use crate::models::summary::{Absences, Checks, CommessaDays};
use crate::utils::date::{days_in_month, sheet_date};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Aggregates of one sheet, before shaping for output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthAggregate {
    pub absences: Absences,
    pub work_days: u32,
    pub commesse: Vec<CommessaDays>,
    pub ore_extra_tot: f64,
    pub spese_tot: f64,
    pub checks: Checks,
}

impl MonthAggregate {
    /// `work_days * hours_per_workday`: an estimate, not logged hours.
    pub fn ordinary_hours_est(&self, hours_per_workday: u32) -> AppResult<u32> {
        self.work_days
            .checked_mul(hours_per_workday)
            .ok_or_else(|| hours_overflow(hours_per_workday))
    }
}

pub(crate) fn hours_overflow(hours_per_workday: u32) -> AppError {
    AppError::InvalidInput(format!(
        "hours_per_workday {hours_per_workday} overflows the ordinary hours estimate"
    ))
}

/// Aggregate the lines of the sheet for (`year`, `month`).
///
/// A line whose day does not exist in that month is a corrupt record and
/// fails the whole aggregation.
pub fn aggregate(year: i32, month: u32, lines: &[Line]) -> AppResult<MonthAggregate> {
    let n_days = days_in_month(year, month).ok_or(AppError::InvalidMonth(month))?;

    if let Some(bad) = lines.iter().find(|l| l.day == 0 || l.day > n_days) {
        return Err(AppError::CorruptRow(format!(
            "line on day {} in {year}-{month:02} ({n_days} days)",
            bad.day
        )));
    }

    let agg = MonthAggregate {
        absences: absence_days(year, month, lines)?,
        work_days: count_work_days(lines),
        commesse: commessa_allocation(lines),
        ore_extra_tot: lines.iter().fold(0.0, |acc, l| acc + l.ore_extra),
        spese_tot: lines.iter().fold(0.0, |acc, l| acc + l.spese),
        checks: Checks {
            days_without_lines: days_without_lines(lines, n_days),
            mixed_days: mixed_days(lines),
        },
    };

    if !agg.checks.mixed_days.is_empty() {
        debug!(
            year,
            month,
            days = ?agg.checks.mixed_days,
            "mixed absence/work days found"
        );
    }

    Ok(agg)
}

/// Distinct sorted dates per absence category.
pub fn absence_days(year: i32, month: u32, lines: &[Line]) -> AppResult<Absences> {
    let mut per_kind: BTreeMap<AbsenceKind, BTreeSet<u32>> = BTreeMap::new();
    for line in lines {
        if let Some(kind) = line.absence_kind() {
            per_kind.entry(kind).or_default().insert(line.day);
        }
    }

    let dates = |kind: AbsenceKind| -> AppResult<Vec<NaiveDate>> {
        per_kind
            .get(&kind)
            .into_iter()
            .flatten()
            .map(|&day| {
                sheet_date(year, month, day).ok_or_else(|| {
                    AppError::CorruptRow(format!("invalid date {year}-{month:02}-{day:02}"))
                })
            })
            .collect()
    };

    Ok(Absences {
        ferie_giorni: dates(AbsenceKind::Ferie)?,
        permesso_giorni: dates(AbsenceKind::Permesso)?,
        malattia_giorni: dates(AbsenceKind::Malattia)?,
    })
}

/// Distinct days carrying at least one job-code line.
pub fn count_work_days(lines: &[Line]) -> u32 {
    lines
        .iter()
        .filter(|l| l.is_work())
        .map(|l| l.day)
        .collect::<BTreeSet<_>>()
        .len() as u32
}

/// Day-equivalents per job code: `sum(rip_percent) / 100` over every line
/// bearing the code. A missing percentage counts as 0.
///
/// Ordered by allocation descending, then code ascending.
pub fn commessa_allocation(lines: &[Line]) -> Vec<CommessaDays> {
    let mut pct: BTreeMap<&str, f64> = BTreeMap::new();
    for line in lines {
        if let Some(code) = line.commessa.as_deref() {
            *pct.entry(code).or_insert(0.0) += line.rip_percent.unwrap_or(0.0);
        }
    }

    let mut out: Vec<CommessaDays> = pct
        .into_iter()
        .map(|(code, sum)| CommessaDays {
            commessa_cdc: code.to_string(),
            giorni_commessa: sum / 100.0,
        })
        .collect();
    sort_commesse(&mut out);
    out
}

/// Descending allocation, ties broken by code ascending.
pub fn sort_commesse(commesse: &mut [CommessaDays]) {
    commesse.sort_by(|a, b| {
        match b.giorni_commessa.total_cmp(&a.giorni_commessa) {
            Ordering::Equal => a.commessa_cdc.cmp(&b.commessa_cdc),
            other => other,
        }
    });
}

/// Days in `[1, n_days]` with no line at all.
pub fn days_without_lines(lines: &[Line], n_days: u32) -> Vec<u32> {
    let with_lines: BTreeSet<u32> = lines.iter().map(|l| l.day).collect();
    (1..=n_days).filter(|d| !with_lines.contains(d)).collect()
}

/// Days carrying both an absence marker and a job-code line.
///
/// Reported as-is; such a day still counts as worked and as absent.
pub fn mixed_days(lines: &[Line]) -> Vec<u32> {
    // day -> (has_absence, has_work)
    let mut per_day: BTreeMap<u32, (bool, bool)> = BTreeMap::new();
    for line in lines {
        let flags = per_day.entry(line.day).or_default();
        flags.0 |= line.absence_kind().is_some();
        flags.1 |= line.is_work();
    }

    per_day
        .into_iter()
        .filter(|(_, (absence, work))| *absence && *work)
        .map(|(day, _)| day)
        .collect()
}
