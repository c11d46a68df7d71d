//! Integration tests for the leave engine.
//!
//! This test suite covers:
//! - South African public holidays and business-day arithmetic
//! - Approval authority across the configured Acme hierarchy
//! - The full leave request lifecycle through the register
//! - Configuration error cases

use chrono::{NaiveDate, NaiveDateTime};

use leave_engine::authorization::{EmployeeDirectory, can_approve, is_manager_of};
use leave_engine::calendar::{
    adjust_dates_to_business_days, business_days_count, is_business_day,
    is_date_range_valid_for_leave, next_business_day, non_business_days_in_range,
    previous_business_day, public_holidays, validate_date_range,
};
use leave_engine::config::ConfigLoader;
use leave_engine::error::LeaveError;
use leave_engine::models::{LeaveStatus, LeaveType, NewLeaveRequest};
use leave_engine::workflow::LeaveRegister;

// =============================================================================
// Test Helpers
// =============================================================================

// Acme employee ids, see config/acme/organisation.yaml
const LINDA_CEO: u32 = 1;
const MILTON_MANAGER: u32 = 2;
const COLIN_TEAM_LEAD: u32 = 3;
const ENRIQUE_TEAM_LEAD: u32 = 4;
const CHARLOTTE: u32 = 5;
const MARIE: u32 = 6;
const OMAR: u32 = 7;
const ELLA: u32 = 9;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/acme").expect("Failed to load config")
}

fn create_directory() -> EmployeeDirectory {
    load_config().directory()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn leave(employee_id: u32, start: &str, end: &str, leave_type: LeaveType) -> NewLeaveRequest {
    NewLeaveRequest {
        employee_id,
        start_date: date(start),
        end_date: date(end),
        leave_type,
        comments: None,
    }
}

// =============================================================================
// SECTION 1: Calendar
// =============================================================================

#[test]
fn test_easter_derived_holidays_2025_and_2026() {
    let find = |year: i32, name: &str| {
        public_holidays(year)
            .into_iter()
            .find(|h| h.name == name)
            .map(|h| h.date)
    };

    assert_eq!(find(2025, "Good Friday"), Some(date("2025-04-18")));
    assert_eq!(find(2025, "Family Day"), Some(date("2025-04-21")));
    assert_eq!(find(2026, "Good Friday"), Some(date("2026-04-03")));
    assert_eq!(find(2026, "Family Day"), Some(date("2026-04-06")));
}

#[test]
fn test_public_holidays_2025_in_order() {
    let holidays: Vec<(NaiveDate, String)> = public_holidays(2025)
        .into_iter()
        .map(|h| (h.date, h.name))
        .collect();

    let expected = vec![
        (date("2025-01-01"), "New Year's Day"),
        (date("2025-03-21"), "Human Rights Day"),
        (date("2025-04-18"), "Good Friday"),
        (date("2025-04-21"), "Family Day"),
        (date("2025-04-27"), "Freedom Day"),
        (date("2025-04-28"), "Public holiday Freedom Day observed"),
        (date("2025-05-01"), "Workers' Day"),
        (date("2025-06-16"), "Youth Day"),
        (date("2025-08-09"), "National Women's Day"),
        (date("2025-09-24"), "Heritage Day"),
        (date("2025-12-16"), "Day of Reconciliation"),
        (date("2025-12-25"), "Christmas Day"),
        (date("2025-12-26"), "Day of Goodwill"),
    ];
    let expected: Vec<(NaiveDate, String)> = expected
        .into_iter()
        .map(|(d, n)| (d, n.to_string()))
        .collect();

    assert_eq!(holidays, expected);
}

#[test]
fn test_business_day_counts() {
    assert_eq!(business_days_count(date("2025-07-14"), date("2025-07-18")).unwrap(), 5);
    assert_eq!(business_days_count(date("2025-07-19"), date("2025-07-20")).unwrap(), 0);
    // December 2025: 23 weekdays less Reconciliation, Christmas and Goodwill
    assert_eq!(business_days_count(date("2025-12-01"), date("2025-12-31")).unwrap(), 20);
}

#[test]
fn test_business_day_count_rejects_inverted_range() {
    let result = business_days_count(date("2025-07-18"), date("2025-07-14"));
    assert!(matches!(result, Err(LeaveError::InvalidRange { .. })));
}

#[test]
fn test_next_and_previous_business_day() {
    assert_eq!(next_business_day(date("2025-07-18")), date("2025-07-21"));
    assert_eq!(previous_business_day(date("2025-07-21")), date("2025-07-18"));
}

#[test]
fn test_non_business_days_in_week() {
    assert_eq!(
        non_business_days_in_range(date("2025-07-14"), date("2025-07-20")),
        vec![date("2025-07-19"), date("2025-07-20")]
    );
}

#[test]
fn test_leave_range_checks_and_adjustment() {
    assert!(is_date_range_valid_for_leave(date("2025-04-22"), date("2025-04-25")));
    assert!(!is_date_range_valid_for_leave(date("2025-04-18"), date("2025-04-25")));

    // Good Friday to Freedom Day observed: both endpoints pulled inside
    let (start, end) = adjust_dates_to_business_days(date("2025-04-18"), date("2025-04-28"));
    assert_eq!(start, date("2025-04-22"));
    assert_eq!(end, date("2025-04-25"));
    assert!(is_business_day(start) && is_business_day(end));
}

#[test]
fn test_validate_date_range_report() {
    let report = validate_date_range(date("2025-12-22"), date("2026-01-02"));
    assert!(report.is_valid);
    assert_eq!(report.business_days_count, 7);
    let names: Vec<&str> = report
        .public_holidays_in_range
        .iter()
        .map(|h| h.name.as_str())
        .collect();
    assert_eq!(names, vec!["Christmas Day", "Day of Goodwill", "New Year's Day"]);
}

// =============================================================================
// SECTION 2: Approval authority over the Acme hierarchy
// =============================================================================

#[test]
fn test_ceo_approves_anyone() {
    let directory = create_directory();
    for employee_id in [MILTON_MANAGER, COLIN_TEAM_LEAD, OMAR, ELLA] {
        assert!(can_approve(&directory, LINDA_CEO, employee_id));
    }
}

#[test]
fn test_direct_managers_approve() {
    let directory = create_directory();
    assert!(can_approve(&directory, MILTON_MANAGER, CHARLOTTE));
    assert!(can_approve(&directory, ENRIQUE_TEAM_LEAD, OMAR));
    assert!(can_approve(&directory, COLIN_TEAM_LEAD, ELLA));
}

#[test]
fn test_manager_approves_team_lead_reports() {
    let directory = create_directory();
    assert!(can_approve(&directory, MILTON_MANAGER, OMAR));
    assert!(!is_manager_of(&directory, MILTON_MANAGER, OMAR));
}

#[test]
fn test_cross_team_approval_is_denied() {
    let directory = create_directory();
    assert!(!can_approve(&directory, COLIN_TEAM_LEAD, CHARLOTTE));
    assert!(!can_approve(&directory, MILTON_MANAGER, ELLA));
    assert!(!can_approve(&directory, CHARLOTTE, MARIE));
}

#[test]
fn test_unknown_ids_are_denied() {
    let directory = create_directory();
    assert!(!can_approve(&directory, LINDA_CEO, 404));
    assert!(!can_approve(&directory, 404, CHARLOTTE));
}

// =============================================================================
// SECTION 3: Leave request lifecycle
// =============================================================================

#[test]
fn test_submit_approve_flow() {
    let config = load_config();
    let directory = config.directory();
    let mut register = LeaveRegister::new();

    let id = register
        .submit(
            leave(OMAR, "2025-07-14", "2025-07-18", LeaveType::Annual),
            &directory,
            config.policy(),
            date("2025-07-01"),
        )
        .unwrap()
        .id;

    let queue: Vec<u32> = register
        .pending_approvals(&directory, MILTON_MANAGER)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(queue, vec![id]);

    let approved = register
        .approve(id, MILTON_MANAGER, Some("Approved".to_string()), &directory, datetime("2025-07-02 08:15:00"))
        .unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);
    assert_eq!(approved.approved_by_id, Some(MILTON_MANAGER));
    assert_eq!(approved.business_days().unwrap(), 5);

    assert!(register.pending_approvals(&directory, MILTON_MANAGER).is_empty());
}

#[test]
fn test_overlap_blocks_until_cancelled() {
    let config = load_config();
    let directory = config.directory();
    let mut register = LeaveRegister::new();
    let today = date("2025-07-01");

    let first = register
        .submit(leave(ELLA, "2025-07-14", "2025-07-18", LeaveType::Annual), &directory, config.policy(), today)
        .unwrap()
        .id;

    let overlapping = register.submit(
        leave(ELLA, "2025-07-17", "2025-07-22", LeaveType::Sick),
        &directory,
        config.policy(),
        today,
    );
    match overlapping {
        Err(LeaveError::OverlappingLeaveRequests { details }) => {
            assert_eq!(details, "2025-07-14 to 2025-07-18 (Annual)");
        }
        other => panic!("Expected OverlappingLeaveRequests, got {:?}", other),
    }

    register.cancel(first, ELLA).unwrap();
    assert!(register
        .submit(leave(ELLA, "2025-07-17", "2025-07-22", LeaveType::Sick), &directory, config.policy(), today)
        .is_ok());
}

#[test]
fn test_rejection_by_unrelated_team_lead_is_refused() {
    let config = load_config();
    let directory = config.directory();
    let mut register = LeaveRegister::new();

    let id = register
        .submit(
            leave(CHARLOTTE, "2025-08-04", "2025-08-08", LeaveType::Personal),
            &directory,
            config.policy(),
            date("2025-07-01"),
        )
        .unwrap()
        .id;

    let result = register.reject(
        id,
        COLIN_TEAM_LEAD,
        "Not my team",
        &directory,
        config.policy(),
        datetime("2025-07-03 12:00:00"),
    );
    assert!(matches!(result, Err(LeaveError::NotAuthorized { .. })));
    assert_eq!(register.get(id).unwrap().status, LeaveStatus::Pending);

    let rejected = register
        .reject(id, LINDA_CEO, "Stocktake week", &directory, config.policy(), datetime("2025-07-03 12:05:00"))
        .unwrap();
    assert_eq!(rejected.status, LeaveStatus::Rejected);
    assert_eq!(rejected.approval_comments.as_deref(), Some("Stocktake week"));
}

#[test]
fn test_terminal_requests_stay_terminal() {
    let config = load_config();
    let directory = config.directory();
    let mut register = LeaveRegister::new();

    let id = register
        .submit(
            leave(MARIE, "2025-09-22", "2025-09-23", LeaveType::Training),
            &directory,
            config.policy(),
            date("2025-07-01"),
        )
        .unwrap()
        .id;
    register.cancel(id, MARIE).unwrap();

    assert!(matches!(
        register.approve(id, MILTON_MANAGER, None, &directory, datetime("2025-07-04 09:00:00")),
        Err(LeaveError::RequestNotPending { status: LeaveStatus::Cancelled, .. })
    ));
    assert!(matches!(
        register.cancel(id, MARIE),
        Err(LeaveError::RequestNotPending { .. })
    ));
}

#[test]
fn test_leave_ending_on_public_holiday_is_refused() {
    let config = load_config();
    let directory = config.directory();
    let mut register = LeaveRegister::new();

    let result = register.submit(
        leave(MARIE, "2025-09-22", "2025-09-24", LeaveType::Annual),
        &directory,
        config.policy(),
        date("2025-07-01"),
    );
    match result {
        Err(LeaveError::InvalidLeaveRequest { field, .. }) => assert_eq!(field, "date_range"),
        other => panic!("Expected InvalidLeaveRequest, got {:?}", other),
    }
    assert!(register.is_empty());
}

#[test]
fn test_approval_history_and_status_views() {
    let config = load_config();
    let directory = config.directory();
    let mut register = LeaveRegister::new();
    let today = date("2025-07-01");

    let omar = register
        .submit(leave(OMAR, "2025-07-14", "2025-07-18", LeaveType::Annual), &directory, config.policy(), today)
        .unwrap()
        .id;
    let charlotte = register
        .submit(leave(CHARLOTTE, "2025-08-04", "2025-08-08", LeaveType::Annual), &directory, config.policy(), today)
        .unwrap()
        .id;
    let ella = register
        .submit(leave(ELLA, "2025-07-21", "2025-07-25", LeaveType::Sick), &directory, config.policy(), today)
        .unwrap()
        .id;
    register
        .approve(omar, ENRIQUE_TEAM_LEAD, None, &directory, datetime("2025-07-02 08:00:00"))
        .unwrap();

    // Decided requests stay in the manager's history
    let history: Vec<u32> = register
        .approvals_for(&directory, MILTON_MANAGER)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(history, vec![charlotte, omar]);
    assert_eq!(register.pending_count(&directory, MILTON_MANAGER), 1);

    // The CEO's queue stops two levels down, so Omar is not listed
    let ceo_history: Vec<u32> = register
        .approvals_for(&directory, LINDA_CEO)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ceo_history, vec![charlotte, ella]);
    assert_eq!(register.pending_count(&directory, LINDA_CEO), 2);

    let pending: Vec<u32> = register
        .by_status(LeaveStatus::Pending)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(pending, vec![charlotte, ella]);
    let approved: Vec<u32> = register
        .by_status(LeaveStatus::Approved)
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(approved, vec![omar]);
}

#[test]
fn test_validation_report_flags_observed_holiday() {
    let report = validate_date_range(date("2025-04-22"), date("2025-04-29"));
    let observed: Vec<NaiveDate> = report
        .public_holidays_in_range
        .iter()
        .filter(|h| h.is_observed)
        .map(|h| h.date)
        .collect();
    assert_eq!(observed, vec![date("2025-04-28")]);
}

#[test]
fn test_load_rejects_malformed_employee_record() {
    let result = ConfigLoader::load("./tests/fixtures/invalid_email");
    assert!(matches!(result, Err(LeaveError::InvalidOrganisation { .. })));
}

// =============================================================================
// SECTION 4: Configuration errors
// =============================================================================

#[test]
fn test_missing_config_directory() {
    let result = ConfigLoader::load("./config/does-not-exist");
    assert!(matches!(result, Err(LeaveError::ConfigNotFound { .. })));
}
