use super::absence::AbsenceKind;

/// One timesheet entry inside a sheet.
///
/// Only the columns the aggregation reads are loaded; `stato`, `loc`,
/// `fase` and `pranzo_flag` stay in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub day: u32,                     // ⇔ ras_lines.day (1..days-in-month)
    pub activity: String,             // ⇔ ras_lines.activity_desc
    pub commessa: Option<String>,     // ⇔ ras_lines.commessa_cdc
    pub rip_percent: Option<f64>,     // ⇔ ras_lines.rip_percent
    pub ore_extra: f64,               // ⇔ ras_lines.ore_extra (>= 0)
    pub spese: f64,                   // ⇔ ras_lines.tot_spese (>= 0)
}

impl Line {
    /// Work line on `commessa` at `pct` percent.
    pub fn work(day: u32, activity: &str, commessa: &str, pct: f64) -> Self {
        Self {
            day,
            activity: activity.to_string(),
            commessa: Some(commessa.to_string()),
            rip_percent: Some(pct),
            ore_extra: 0.0,
            spese: 0.0,
        }
    }

    /// Absence line without a job code.
    pub fn absence(day: u32, kind: AbsenceKind) -> Self {
        Self {
            day,
            activity: kind.to_db_str().to_string(),
            commessa: None,
            rip_percent: None,
            ore_extra: 0.0,
            spese: 0.0,
        }
    }

    pub fn with_extra(mut self, ore_extra: f64, spese: f64) -> Self {
        self.ore_extra = ore_extra;
        self.spese = spese;
        self
    }

    pub fn absence_kind(&self) -> Option<AbsenceKind> {
        AbsenceKind::from_db_str(&self.activity)
    }

    pub fn is_work(&self) -> bool {
        self.commessa.is_some()
    }
}
