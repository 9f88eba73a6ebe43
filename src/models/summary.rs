//! Response shapes for the month and period summaries.
//!
//! These are built per request, serialized once and dropped. Field names are
//! the public JSON contract and must not be renamed.

use super::sheet::SheetStatus;
use chrono::NaiveDate;
use serde::Serialize;

/// Distinct absence dates per category, each list sorted ascending.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Absences {
    pub ferie_giorni: Vec<NaiveDate>,
    pub permesso_giorni: Vec<NaiveDate>,
    pub malattia_giorni: Vec<NaiveDate>,
}

/// Fractional day-equivalents allocated to one job code.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommessaDays {
    pub commessa_cdc: String,
    pub giorni_commessa: f64,
}

/// Data-quality findings for one sheet.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Checks {
    pub days_without_lines: Vec<u32>,
    pub mixed_days: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthSummaryOut {
    pub email: String,
    pub year: i32,
    pub month: u32,
    pub exists: bool,
    /// Absent when no sheet was filed, so "no report" never reads as zeros.
    #[serde(flatten)]
    pub detail: Option<MonthDetail>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthDetail {
    pub sheet_id: i64,
    pub absences: Absences,
    pub work_days: u32,
    pub commesse: Vec<CommessaDays>,
    pub ordinary_hours_est: u32,
    pub ore_extra_tot: f64,
    pub spese_tot: f64,
    pub checks: Checks,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PeriodMonthOut {
    pub year: i32,
    pub month: u32,
    pub sheet_status: SheetStatus,
    pub absences: Absences,
    pub work_days: u32,
    pub commesse: Vec<CommessaDays>,
    pub ordinary_hours_est: u32,
    pub ore_extra_tot: f64,
    pub spese_tot: f64,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PeriodTotalsOut {
    pub ferie_giorni: Vec<NaiveDate>,
    pub permesso_giorni: Vec<NaiveDate>,
    pub malattia_giorni: Vec<NaiveDate>,
    pub work_days: u32,
    pub commesse: Vec<CommessaDays>,
    pub ordinary_hours_est: u32,
    pub ore_extra_tot: f64,
    pub spese_tot: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PeriodSummaryOut {
    pub email: String,
    pub from_ym: i64,
    pub to_ym: i64,
    pub months: Vec<PeriodMonthOut>,
    pub totals: PeriodTotalsOut,
}
