use chrono::NaiveDate;
use rasreport::core::period::{roll_up, sheets_in_range};
use rasreport::core::{MemoryStore, RasService};
use rasreport::errors::AppError;
use rasreport::models::absence::AbsenceKind;
use rasreport::models::employee::Employee;
use rasreport::models::line::Line;
use rasreport::models::sheet::{Sheet, SheetStatus};
use rasreport::models::summary::{Absences, PeriodMonthOut};

const EMAIL: &str = "marco.bianchi3@azienda.it";

fn sheet(id: i64, year: i32, month: u32, status: SheetStatus) -> Sheet {
    Sheet {
        id,
        year,
        month,
        status,
    }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Sheets for 2025-10..2025-12 plus one in 2026-01, inserted out of order.
fn quarter_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store
        .add_employee(Employee {
            id: 3,
            full_name: "Marco Bianchi".to_string(),
            email: EMAIL.to_string(),
            site: Some("MI".to_string()),
            level: Some("C1".to_string()),
            company: Some("EXTRARED".to_string()),
            active: true,
            created_at: "2025-01-10T08:00:00Z".to_string(),
        })
        .add_sheet(EMAIL, sheet(12, 2025, 12, SheetStatus::Draft))
        .add_sheet(EMAIL, sheet(10, 2025, 10, SheetStatus::Approved))
        .add_sheet(EMAIL, sheet(13, 2026, 1, SheetStatus::Draft))
        .add_sheet(EMAIL, sheet(11, 2025, 11, SheetStatus::Submitted))
        .add_lines(
            10,
            [
                Line::work(1, "Sviluppo", "EMO-1877", 60.0),
                Line::work(1, "Test", "EMO-1901", 40.0),
                Line::work(2, "Sviluppo", "EMO-1877", 100.0).with_extra(1.5, 12.5),
                Line::absence(3, AbsenceKind::Ferie),
            ],
        )
        .add_lines(
            11,
            [
                Line::work(5, "Sviluppo", "EMO-1877", 100.0),
                Line::absence(5, AbsenceKind::Ferie),
                Line::absence(6, AbsenceKind::Malattia),
                Line::work(7, "Bugfix", "CUS-2044", 100.0).with_extra(0.5, 20.0),
            ],
        )
        .add_lines(13, [Line::work(2, "Meeting", "OPS-0100", 100.0)]);
    store
}

#[test]
fn test_month_summary_without_sheet_does_not_exist() {
    let store = quarter_store();
    let svc = RasService::new(&store);

    let out = svc.month_summary(EMAIL, 2025, 9, 8).unwrap();

    assert!(!out.exists);
    assert!(out.detail.is_none());

    let json = serde_json::to_value(&out).unwrap();
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 4);
    assert!(json.get("work_days").is_none());
    assert!(json.get("sheet_id").is_none());
}

#[test]
fn test_month_summary_for_empty_sheet_exists_with_zeros() {
    let store = quarter_store();
    let svc = RasService::new(&store);

    let out = svc.month_summary(EMAIL, 2025, 12, 8).unwrap();
    let detail = out.detail.expect("sheet exists");

    assert!(out.exists);
    assert_eq!(detail.sheet_id, 12);
    assert_eq!(detail.work_days, 0);
    assert_eq!(detail.ordinary_hours_est, 0);
    assert_eq!(
        detail.checks.days_without_lines,
        (1..=31).collect::<Vec<u32>>()
    );
    assert!(detail.checks.mixed_days.is_empty());
}

#[test]
fn test_month_summary_uses_hours_per_workday() {
    let store = quarter_store();
    let svc = RasService::new(&store);

    let out = svc.month_summary(EMAIL, 2025, 10, 6).unwrap();
    let detail = out.detail.unwrap();

    assert_eq!(detail.work_days, 2);
    assert_eq!(detail.ordinary_hours_est, 12);
    assert_eq!(detail.ore_extra_tot, 1.5);
    assert_eq!(detail.spese_tot, 12.5);
}

#[test]
fn test_month_summary_rejects_bad_month() {
    let store = quarter_store();
    let svc = RasService::new(&store);

    let err = svc.month_summary(EMAIL, 2025, 13, 8).unwrap_err();

    assert!(matches!(err, AppError::InvalidMonth(13)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_month_summary_is_deterministic() {
    let store = quarter_store();
    let svc = RasService::new(&store);

    let first = serde_json::to_string(&svc.month_summary(EMAIL, 2025, 11, 8).unwrap()).unwrap();
    let second = serde_json::to_string(&svc.month_summary(EMAIL, 2025, 11, 8).unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_period_summary_orders_months_and_sums_totals() {
    let store = quarter_store();
    let svc = RasService::new(&store);

    let out = svc.period_summary(EMAIL, 202510, 202512, 8).unwrap();

    let ym: Vec<(i32, u32)> = out.months.iter().map(|m| (m.year, m.month)).collect();
    assert_eq!(ym, vec![(2025, 10), (2025, 11), (2025, 12)]);

    let statuses: Vec<SheetStatus> = out.months.iter().map(|m| m.sheet_status).collect();
    assert_eq!(
        statuses,
        vec![
            SheetStatus::Approved,
            SheetStatus::Submitted,
            SheetStatus::Draft
        ]
    );

    let month_work: u32 = out.months.iter().map(|m| m.work_days).sum();
    assert_eq!(out.totals.work_days, month_work);
    assert_eq!(out.totals.work_days, 4);
    assert_eq!(out.totals.ordinary_hours_est, 32);
    assert!((out.totals.ore_extra_tot - 2.0).abs() < 1e-9);
    assert!((out.totals.spese_tot - 32.5).abs() < 1e-9);

    assert_eq!(
        out.totals.ferie_giorni,
        vec![d(2025, 10, 3), d(2025, 11, 5)]
    );
    assert_eq!(out.totals.malattia_giorni, vec![d(2025, 11, 6)]);
    assert!(out.totals.permesso_giorni.is_empty());
}

#[test]
fn test_period_commesse_merge_and_sort() {
    let store = quarter_store();
    let svc = RasService::new(&store);

    let out = svc.period_summary(EMAIL, 202510, 202512, 8).unwrap();
    let totals: Vec<(&str, f64)> = out
        .totals
        .commesse
        .iter()
        .map(|c| (c.commessa_cdc.as_str(), c.giorni_commessa))
        .collect();

    assert_eq!(totals.len(), 3);
    assert_eq!(totals[0].0, "EMO-1877");
    assert!((totals[0].1 - 2.6).abs() < 1e-9);
    assert_eq!(totals[1].0, "CUS-2044");
    assert!((totals[1].1 - 1.0).abs() < 1e-9);
    assert_eq!(totals[2].0, "EMO-1901");
    assert!((totals[2].1 - 0.4).abs() < 1e-9);
}

#[test]
fn test_period_excludes_sheets_outside_range() {
    let store = quarter_store();
    let svc = RasService::new(&store);

    let out = svc.period_summary(EMAIL, 202511, 202511, 8).unwrap();

    assert_eq!(out.months.len(), 1);
    assert_eq!(out.months[0].month, 11);
    assert_eq!(out.totals.work_days, 2);

    let across_year = svc.period_summary(EMAIL, 202512, 202601, 8).unwrap();
    let ym: Vec<(i32, u32)> = across_year.months.iter().map(|m| (m.year, m.month)).collect();
    assert_eq!(ym, vec![(2025, 12), (2026, 1)]);
}

#[test]
fn test_period_without_sheets_is_empty_not_error() {
    let store = quarter_store();
    let svc = RasService::new(&store);

    let out = svc.period_summary("nobody@azienda.it", 202501, 202512, 8).unwrap();

    assert!(out.months.is_empty());
    assert_eq!(out.totals.work_days, 0);
    assert!(out.totals.commesse.is_empty());
}

#[test]
fn test_period_rejects_malformed_range() {
    let store = quarter_store();
    let svc = RasService::new(&store);

    let reversed = svc.period_summary(EMAIL, 202512, 202510, 8).unwrap_err();
    assert!(matches!(
        reversed,
        AppError::InvalidRange {
            from: 202512,
            to: 202510
        }
    ));

    let bad_month = svc.period_summary(EMAIL, 202513, 202601, 8).unwrap_err();
    assert!(matches!(bad_month, AppError::InvalidYearMonth(202513)));
}

#[test]
fn test_sheets_in_range_sorts_by_year_month() {
    let sheets = vec![
        sheet(3, 2026, 1, SheetStatus::Draft),
        sheet(1, 2025, 10, SheetStatus::Draft),
        sheet(2, 2025, 12, SheetStatus::Draft),
        sheet(4, 2025, 9, SheetStatus::Draft),
    ];

    let ids: Vec<i64> = sheets_in_range(sheets, 202510, 202601)
        .into_iter()
        .map(|s| s.id)
        .collect();

    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_employee_lookup() {
    let store = quarter_store();
    let svc = RasService::new(&store);

    assert_eq!(svc.employee(EMAIL).unwrap().full_name, "Marco Bianchi");

    let err = svc.employee("nobody@azienda.it").unwrap_err();
    assert!(matches!(err, AppError::EmployeeNotFound(_)));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn test_huge_hours_per_workday_is_input_error() {
    let mut store = MemoryStore::new();
    store.add_sheet("a@b.it", sheet(1, 2025, 10, SheetStatus::Draft)).add_lines(
        1,
        [
            Line::work(1, "Sviluppo", "EMO-1877", 100.0),
            Line::work(2, "Sviluppo", "EMO-1877", 100.0),
        ],
    );
    let svc = RasService::new(&store);

    let err = svc
        .month_summary("a@b.it", 2025, 10, u32::MAX / 2 + 1)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(err.exit_code(), 2);

    let err = svc
        .period_summary("a@b.it", 202510, 202510, u32::MAX / 2 + 1)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_period_hours_total_overflow_is_input_error() {
    let entry = |month: u32, hours: u32| PeriodMonthOut {
        year: 2025,
        month,
        sheet_status: SheetStatus::Draft,
        absences: Absences::default(),
        work_days: 1,
        commesse: Vec::new(),
        ordinary_hours_est: hours,
        ore_extra_tot: 0.0,
        spese_tot: 0.0,
    };

    let err = roll_up(vec![entry(10, u32::MAX), entry(11, 1)], u32::MAX).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let (months, totals) = roll_up(vec![entry(10, 8), entry(11, 8)], 8).unwrap();
    assert_eq!(months.len(), 2);
    assert_eq!(totals.ordinary_hours_est, 16);
}
