//! Read-only access seams used by the reporting service.
//!
//! `SqliteStore` (in `db::queries`) is the production implementation;
//! `MemoryStore` backs the library-level tests and any caller that already
//! holds the records in memory.

use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::line::Line;
use crate::models::sheet::Sheet;

/// Employee directory lookup by email (the public natural key).
pub trait EmployeeDirectory {
    fn find_employee(&self, email: &str) -> AppResult<Option<Employee>>;
}

/// Sheet headers and timesheet lines.
pub trait LineStore {
    /// Exact match on (email, year, month).
    fn sheet_id(&self, email: &str, year: i32, month: u32) -> AppResult<Option<i64>>;

    /// All sheets of one employee, ordered by year then month.
    fn sheets_by_employee(&self, email: &str) -> AppResult<Vec<Sheet>>;

    /// Every line of a sheet, in no particular order.
    fn lines(&self, sheet_id: i64) -> AppResult<Vec<Line>>;
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    employees: Vec<Employee>,
    sheets: Vec<(String, Sheet)>,
    lines: Vec<(i64, Line)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_employee(&mut self, employee: Employee) -> &mut Self {
        self.employees.push(employee);
        self
    }

    /// Register a sheet for `email`. A second sheet on the same
    /// (email, year, month) replaces the first.
    pub fn add_sheet(&mut self, email: &str, sheet: Sheet) -> &mut Self {
        self.sheets
            .retain(|(e, s)| !(e == email && s.year == sheet.year && s.month == sheet.month));
        self.sheets.push((email.to_string(), sheet));
        self
    }

    pub fn add_line(&mut self, sheet_id: i64, line: Line) -> &mut Self {
        self.lines.push((sheet_id, line));
        self
    }

    pub fn add_lines<I>(&mut self, sheet_id: i64, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = Line>,
    {
        self.lines
            .extend(lines.into_iter().map(|line| (sheet_id, line)));
        self
    }
}

impl EmployeeDirectory for MemoryStore {
    fn find_employee(&self, email: &str) -> AppResult<Option<Employee>> {
        Ok(self.employees.iter().find(|e| e.email == email).cloned())
    }
}

impl LineStore for MemoryStore {
    fn sheet_id(&self, email: &str, year: i32, month: u32) -> AppResult<Option<i64>> {
        Ok(self
            .sheets
            .iter()
            .find(|(e, s)| e == email && s.year == year && s.month == month)
            .map(|(_, s)| s.id))
    }

    fn sheets_by_employee(&self, email: &str) -> AppResult<Vec<Sheet>> {
        let mut out: Vec<Sheet> = self
            .sheets
            .iter()
            .filter(|(e, _)| e == email)
            .map(|(_, s)| s.clone())
            .collect();
        out.sort_by_key(|s| (s.year, s.month));
        Ok(out)
    }

    fn lines(&self, sheet_id: i64) -> AppResult<Vec<Line>> {
        Ok(self
            .lines
            .iter()
            .filter(|(id, _)| *id == sheet_id)
            .map(|(_, l)| l.clone())
            .collect())
    }
}
