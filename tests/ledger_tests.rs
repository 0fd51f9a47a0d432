mod common;
use common::{d, entry, t};
use rovertime::core::add::{AddLogic, EntryPatch};
use rovertime::core::del::DeleteLogic;
use rovertime::core::holiday::HolidayCalendar;
use rovertime::core::ledger::{Ledger, LedgerAction};
use rovertime::errors::AppError;
use rovertime::export::Period;
use rovertime::models::HolidayMark;
use rovertime::session::Session;

#[test]
fn add_keeps_entries_in_chronological_order() {
    let ledger = Ledger::default()
        .reduce(LedgerAction::Add(entry(2, "2025-03-05", "18:00", "2025-03-05", "20:00")))
        .unwrap()
        .reduce(LedgerAction::Add(entry(1, "2025-03-04", "19:00", "2025-03-04", "21:00")))
        .unwrap()
        .reduce(LedgerAction::Add(entry(3, "2025-03-04", "07:00", "2025-03-04", "08:00")))
        .unwrap();

    let ids: Vec<i64> = ledger.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn add_with_duplicate_id_is_rejected() {
    let e = entry(1, "2025-03-04", "18:00", "2025-03-04", "20:00");
    let ledger = Ledger::new(vec![e.clone()]);
    assert!(ledger.reduce(LedgerAction::Add(e)).is_err());
}

#[test]
fn replace_swaps_entry_with_same_id() {
    let ledger = Ledger::new(vec![entry(1, "2025-03-04", "18:00", "2025-03-04", "20:00")]);
    let edited = entry(1, "2025-03-04", "18:00", "2025-03-04", "22:00");

    let next = ledger.reduce(LedgerAction::Replace(edited.clone())).unwrap();
    assert_eq!(next.len(), 1);
    assert_eq!(next.get(1), Some(&edited));
}

#[test]
fn failed_action_leaves_ledger_unchanged() {
    let ledger = Ledger::new(vec![entry(1, "2025-03-04", "18:00", "2025-03-04", "20:00")]);
    let before = ledger.clone();

    let err = ledger
        .reduce(LedgerAction::Replace(entry(9, "2025-03-04", "18:00", "2025-03-04", "19:00")))
        .unwrap_err();
    assert!(matches!(err, AppError::EntryNotFound(9)));

    let err = ledger.reduce(LedgerAction::Delete(42)).unwrap_err();
    assert!(matches!(err, AppError::EntryNotFound(42)));

    assert_eq!(ledger, before);
}

#[test]
fn delete_removes_entry() {
    let ledger = Ledger::new(vec![
        entry(1, "2025-03-04", "18:00", "2025-03-04", "20:00"),
        entry(2, "2025-03-05", "18:00", "2025-03-05", "20:00"),
    ]);
    let next = ledger.reduce(LedgerAction::Delete(1)).unwrap();
    assert_eq!(next.len(), 1);
    assert!(next.get(1).is_none());
}

#[test]
fn next_id_never_collides() {
    let ledger = Ledger::new(vec![entry(1000, "2025-03-04", "18:00", "2025-03-04", "20:00")]);
    assert_eq!(ledger.next_id(2000).unwrap(), 2000);
    assert_eq!(ledger.next_id(1000).unwrap(), 1001);
    assert_eq!(ledger.next_id(10).unwrap(), 1001);
    assert_eq!(Ledger::default().next_id(5).unwrap(), 5);
}

#[test]
fn next_id_after_largest_possible_id_is_an_error() {
    let ledger = Ledger::new(vec![entry(i64::MAX, "2025-03-04", "18:00", "2025-03-04", "20:00")]);
    assert!(matches!(ledger.next_id(5), Err(AppError::Other(_))));
}

#[test]
fn loaded_session_is_sorted_chronologically() {
    let late = entry(1, "2025-03-20", "18:00", "2025-03-20", "20:00");
    let early = entry(2, "2025-03-04", "18:00", "2025-03-04", "20:00");
    let json = serde_json::json!({ "entries": [late, early] }).to_string();

    let session: Session = serde_json::from_str(&json).unwrap();
    let dates: Vec<String> = session.entries.entries().iter().map(|e| e.date_str()).collect();
    assert_eq!(dates, vec!["2025-03-04", "2025-03-20"]);

    // written back as a plain list
    let written = serde_json::to_value(&session).unwrap();
    assert_eq!(written["entries"][0]["id"], 2);
}

#[test]
fn loaded_session_with_duplicate_ids_is_rejected() {
    let a = entry(7, "2025-03-04", "18:00", "2025-03-04", "20:00");
    let b = entry(7, "2025-03-05", "18:00", "2025-03-05", "20:00");
    let json = serde_json::json!({ "entries": [a, b] }).to_string();

    let err = serde_json::from_str::<Session>(&json).unwrap_err();
    assert!(err.to_string().contains("duplicate entry id 7"));
}

#[test]
fn totals_sum_every_bucket() {
    let ledger = Ledger::new(vec![
        entry(1, "2025-03-04", "08:00", "2025-03-04", "19:00"),
        entry(2, "2025-03-09", "09:00", "2025-03-09", "18:00"),
        entry(3, "2025-03-04", "23:00", "2025-03-05", "01:00"),
    ]);
    let totals = ledger.totals();
    assert_eq!(totals.overtime, 150 + 480 + 120);
    assert_eq!(totals.holiday_excess, 60);
    assert_eq!(totals.night, 120);
}

fn patch(date: &str, start: &str, end: &str) -> EntryPatch {
    EntryPatch {
        start_date: Some(d(date)),
        start_time: Some(t(start)),
        end_time: Some(t(end)),
        reason: Some("release".into()),
        ..Default::default()
    }
}

#[test]
fn add_logic_creates_and_logs_entry() {
    let mut session = Session::default();
    let cal = HolidayCalendar::builtin();

    let e = AddLogic::apply(&mut session, &cal, patch("2025-03-04", "18:00", "21:00"), None, 77)
        .unwrap();

    assert_eq!(e.id, 77);
    assert_eq!(e.result.overtime, 180);
    assert_eq!(session.entries.len(), 1);
    assert_eq!(session.log.len(), 1);
    assert_eq!(session.log[0].operation, "add");
}

#[test]
fn add_logic_detects_calendar_holiday() {
    let mut session = Session::default();
    let cal = HolidayCalendar::builtin();

    let e = AddLogic::apply(&mut session, &cal, patch("2025-05-05", "09:00", "19:00"), None, 1)
        .unwrap();

    assert!(e.is_holiday);
    assert_eq!(e.holiday, HolidayMark::Auto);
    assert_eq!((e.result.overtime, e.result.holiday_excess), (480, 120));
}

#[test]
fn add_logic_requires_times_for_new_entry() {
    let mut session = Session::default();
    let cal = HolidayCalendar::builtin();
    let p = EntryPatch {
        start_date: Some(d("2025-03-04")),
        start_time: Some(t("18:00")),
        ..Default::default()
    };

    let err = AddLogic::apply(&mut session, &cal, p, None, 1).unwrap_err();
    assert!(matches!(err, AppError::InvalidTime(_)));
    assert!(session.entries.is_empty());
    assert!(session.log.is_empty());
}

#[test]
fn add_logic_rejects_inverted_range() {
    let mut session = Session::default();
    let cal = HolidayCalendar::builtin();

    let err = AddLogic::apply(&mut session, &cal, patch("2025-03-04", "20:00", "18:00"), None, 1)
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidRange { .. }));
    assert!(session.entries.is_empty());
}

#[test]
fn edit_keeps_id_and_reclassifies() {
    let mut session = Session::default();
    let cal = HolidayCalendar::builtin();
    let created =
        AddLogic::apply(&mut session, &cal, patch("2025-03-04", "18:00", "20:00"), None, 5)
            .unwrap();

    let edit = EntryPatch {
        end_time: Some(t("22:30")),
        holiday: Some(HolidayMark::Holiday),
        ..Default::default()
    };
    let edited = AddLogic::apply(&mut session, &cal, edit, Some(created.id), 999).unwrap();

    assert_eq!(edited.id, 5);
    assert_eq!(edited.reason, "release");
    assert!(edited.is_holiday);
    assert_eq!(edited.result.overtime, 270);
    assert_eq!(edited.result.night, 30);
    assert_eq!(session.entries.len(), 1);
    assert_eq!(session.log.last().unwrap().operation, "edit");
}

#[test]
fn edit_moving_start_date_keeps_day_distance() {
    let mut session = Session::default();
    let cal = HolidayCalendar::builtin();
    let p = EntryPatch {
        end_date: Some(d("2025-03-05")),
        ..patch("2025-03-04", "23:00", "01:00")
    };
    let created = AddLogic::apply(&mut session, &cal, p, None, 1).unwrap();

    let edit = EntryPatch {
        start_date: Some(d("2025-03-11")),
        ..Default::default()
    };
    let edited = AddLogic::apply(&mut session, &cal, edit, Some(created.id), 2).unwrap();

    assert_eq!(edited.start_date, d("2025-03-11"));
    assert_eq!(edited.end_date, d("2025-03-12"));
    assert_eq!(edited.result.night, 120);
}

#[test]
fn edit_back_to_auto_follows_the_calendar_again() {
    let mut session = Session::default();
    let cal = HolidayCalendar::builtin();
    let p = EntryPatch {
        holiday: Some(HolidayMark::Holiday),
        ..patch("2025-03-04", "10:00", "20:00")
    };
    let created = AddLogic::apply(&mut session, &cal, p, None, 1).unwrap();
    assert!(created.is_holiday);
    assert_eq!((created.result.overtime, created.result.holiday_excess), (480, 120));

    let reset = EntryPatch {
        holiday: Some(HolidayMark::Auto),
        ..Default::default()
    };
    let edited = AddLogic::apply(&mut session, &cal, reset, Some(created.id), 2).unwrap();
    assert_eq!(edited.holiday, HolidayMark::Auto);
    assert!(!edited.is_holiday);
    assert_eq!((edited.result.overtime, edited.result.holiday_excess), (150, 0));
}

#[test]
fn edit_workday_back_to_auto_on_public_holiday() {
    let mut session = Session::default();
    let cal = HolidayCalendar::builtin();
    let p = EntryPatch {
        holiday: Some(HolidayMark::Workday),
        ..patch("2025-05-05", "09:00", "19:00")
    };
    let created = AddLogic::apply(&mut session, &cal, p, None, 1).unwrap();
    assert!(!created.is_holiday);
    assert_eq!(created.result.overtime, 90);

    let reset = EntryPatch {
        holiday: Some(HolidayMark::Auto),
        ..Default::default()
    };
    let edited = AddLogic::apply(&mut session, &cal, reset, Some(created.id), 2).unwrap();
    assert!(edited.is_holiday);
    assert_eq!((edited.result.overtime, edited.result.holiday_excess), (480, 120));
}

#[test]
fn edit_of_unknown_id_fails() {
    let mut session = Session::default();
    let cal = HolidayCalendar::builtin();
    let err = AddLogic::apply(&mut session, &cal, EntryPatch::default(), Some(3), 1).unwrap_err();
    assert!(matches!(err, AppError::EntryNotFound(3)));
}

#[test]
fn delete_logic_returns_removed_entry() {
    let mut session = Session::default();
    let cal = HolidayCalendar::builtin();
    AddLogic::apply(&mut session, &cal, patch("2025-03-04", "18:00", "20:00"), None, 10).unwrap();

    let removed = DeleteLogic::apply(&mut session, 10).unwrap();
    assert_eq!(removed.id, 10);
    assert!(session.entries.is_empty());
    assert_eq!(session.log.last().unwrap().operation, "del");

    assert!(matches!(
        DeleteLogic::apply(&mut session, 10).unwrap_err(),
        AppError::EntryNotFound(10)
    ));
}

#[test]
fn period_accepts_all_year_and_month() {
    assert_eq!(Period::parse("all").unwrap(), Period::All);
    assert_eq!(Period::parse("2025").unwrap(), Period::Year(2025));
    assert_eq!(Period::parse("2025-03").unwrap(), Period::Month(2025, 3));
}

#[test]
fn period_rejects_malformed_input() {
    for raw in ["2025-13", "2025-00", "2025-3", "25-03", "abcd", "2025/03", ""] {
        assert!(
            matches!(Period::parse(raw), Err(AppError::InvalidPeriod(_))),
            "{raw}"
        );
    }
}
