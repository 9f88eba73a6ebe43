//! Summary assembly: the entry point used by the CLI handlers.

use crate::core::aggregator::aggregate;
use crate::core::period::{month_entry, roll_up, sheets_in_range};
use crate::core::resolver::resolve_sheet;
use crate::core::store::{EmployeeDirectory, LineStore};
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::summary::{MonthDetail, MonthSummaryOut, PeriodSummaryOut};
use crate::utils::date::{validate_month, validate_ym_range};
use tracing::info;

/// Reporting service over an explicitly supplied store.
pub struct RasService<'s, S: ?Sized> {
    store: &'s S,
}

impl<'s, S: ?Sized> RasService<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }
}

impl<S: EmployeeDirectory + ?Sized> RasService<'_, S> {
    /// Employee profile by email.
    pub fn employee(&self, email: &str) -> AppResult<Employee> {
        self.store
            .find_employee(email)?
            .ok_or_else(|| AppError::EmployeeNotFound(email.to_string()))
    }
}

impl<S: LineStore + ?Sized> RasService<'_, S> {
    /// Month summary for (email, year, month).
    ///
    /// No sheet → `exists: false` and nothing else; a sheet with no lines is
    /// still `exists: true` with zeroed aggregates.
    pub fn month_summary(
        &self,
        email: &str,
        year: i32,
        month: u32,
        hours_per_workday: u32,
    ) -> AppResult<MonthSummaryOut> {
        validate_month(month)?;
        info!(email, year, month, "month summary");

        let Some(sheet_id) = resolve_sheet(self.store, email, year, month)? else {
            return Ok(MonthSummaryOut {
                email: email.to_string(),
                year,
                month,
                exists: false,
                detail: None,
            });
        };

        let lines = self.store.lines(sheet_id)?;
        let agg = aggregate(year, month, &lines)?;

        Ok(MonthSummaryOut {
            email: email.to_string(),
            year,
            month,
            exists: true,
            detail: Some(MonthDetail {
                sheet_id,
                ordinary_hours_est: agg.ordinary_hours_est(hours_per_workday)?,
                absences: agg.absences,
                work_days: agg.work_days,
                commesse: agg.commesse,
                ore_extra_tot: agg.ore_extra_tot,
                spese_tot: agg.spese_tot,
                checks: agg.checks,
            }),
        })
    }

    /// Summary over the sheets with `from_ym <= year*100+month <= to_ym`.
    ///
    /// Months without a sheet are simply absent from the breakdown.
    pub fn period_summary(
        &self,
        email: &str,
        from_ym: i64,
        to_ym: i64,
        hours_per_workday: u32,
    ) -> AppResult<PeriodSummaryOut> {
        validate_ym_range(from_ym, to_ym)?;
        info!(email, from_ym, to_ym, "period summary");

        let sheets = sheets_in_range(self.store.sheets_by_employee(email)?, from_ym, to_ym);

        let months = sheets
            .iter()
            .map(|sheet| {
                let lines = self.store.lines(sheet.id)?;
                let agg = aggregate(sheet.year, sheet.month, &lines)?;
                month_entry(sheet, agg, hours_per_workday)
            })
            .collect::<AppResult<Vec<_>>>()?;

        let (months, totals) = roll_up(months, hours_per_workday)?;

        Ok(PeriodSummaryOut {
            email: email.to_string(),
            from_ym,
            to_ym,
            months,
            totals,
        })
    }
}
