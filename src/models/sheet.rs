use crate::utils::date::to_ym;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SheetStatus {
    Draft,
    Submitted,
    Approved,
}

impl SheetStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SheetStatus::Draft => "draft",
            SheetStatus::Submitted => "submitted",
            SheetStatus::Approved => "approved",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(SheetStatus::Draft),
            "submitted" => Some(SheetStatus::Submitted),
            "approved" => Some(SheetStatus::Approved),
            _ => None,
        }
    }
}

/// One RAS header: a single (employee, year, month) report.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub id: i64,
    pub year: i32,
    pub month: u32,
    pub status: SheetStatus,
}

impl Sheet {
    /// `year * 100 + month`, monotonic with calendar order.
    pub fn ym(&self) -> i64 {
        to_ym(self.year, self.month)
    }
}
