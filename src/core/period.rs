//! Period roll-up: folds per-month aggregates into period totals.

use crate::core::aggregator::{MonthAggregate, hours_overflow, sort_commesse};
use crate::errors::AppResult;
use crate::models::sheet::Sheet;
use crate::models::summary::{CommessaDays, PeriodMonthOut, PeriodTotalsOut};
use std::collections::BTreeMap;

/// Sheets whose `year*100+month` lies in `from_ym..=to_ym`, ordered by
/// (year, month) whatever the input order.
pub fn sheets_in_range(sheets: Vec<Sheet>, from_ym: i64, to_ym: i64) -> Vec<Sheet> {
    let mut out: Vec<Sheet> = sheets
        .into_iter()
        .filter(|s| (from_ym..=to_ym).contains(&s.ym()))
        .collect();
    out.sort_by_key(|s| (s.year, s.month));
    out
}

/// Running period totals.
///
/// Absence lists are append-only: months arrive in (year, month) order and
/// sheets never share a month, so concatenation keeps them sorted and
/// duplicate-free.
#[derive(Debug, Default)]
struct PeriodAccumulator {
    totals: PeriodTotalsOut,
    commesse: BTreeMap<String, f64>,
}

impl PeriodAccumulator {
    fn push(mut self, month: &PeriodMonthOut, hours_per_workday: u32) -> AppResult<Self> {
        let t = &mut self.totals;
        t.ferie_giorni.extend_from_slice(&month.absences.ferie_giorni);
        t.permesso_giorni
            .extend_from_slice(&month.absences.permesso_giorni);
        t.malattia_giorni
            .extend_from_slice(&month.absences.malattia_giorni);
        t.work_days += month.work_days;
        t.ordinary_hours_est = t
            .ordinary_hours_est
            .checked_add(month.ordinary_hours_est)
            .ok_or_else(|| hours_overflow(hours_per_workday))?;
        t.ore_extra_tot += month.ore_extra_tot;
        t.spese_tot += month.spese_tot;

        for c in &month.commesse {
            *self.commesse.entry(c.commessa_cdc.clone()).or_insert(0.0) += c.giorni_commessa;
        }
        Ok(self)
    }

    fn finish(self) -> PeriodTotalsOut {
        let mut commesse: Vec<CommessaDays> = self
            .commesse
            .into_iter()
            .map(|(commessa_cdc, giorni_commessa)| CommessaDays {
                commessa_cdc,
                giorni_commessa,
            })
            .collect();
        sort_commesse(&mut commesse);

        PeriodTotalsOut {
            commesse,
            ..self.totals
        }
    }
}

/// Shape one month of the breakdown.
pub fn month_entry(
    sheet: &Sheet,
    agg: MonthAggregate,
    hours_per_workday: u32,
) -> AppResult<PeriodMonthOut> {
    Ok(PeriodMonthOut {
        year: sheet.year,
        month: sheet.month,
        sheet_status: sheet.status,
        ordinary_hours_est: agg.ordinary_hours_est(hours_per_workday)?,
        absences: agg.absences,
        work_days: agg.work_days,
        commesse: agg.commesse,
        ore_extra_tot: agg.ore_extra_tot,
        spese_tot: agg.spese_tot,
    })
}

/// Combine the breakdown into totals. `months` must already be in
/// (year, month) order; the breakdown is returned untouched.
pub fn roll_up(
    months: Vec<PeriodMonthOut>,
    hours_per_workday: u32,
) -> AppResult<(Vec<PeriodMonthOut>, PeriodTotalsOut)> {
    let totals = months
        .iter()
        .try_fold(PeriodAccumulator::default(), |acc, month| {
            acc.push(month, hours_per_workday)
        })?
        .finish();
    Ok((months, totals))
}
