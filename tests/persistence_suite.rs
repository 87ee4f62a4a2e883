use std::fs;

use chrono::{NaiveDate, NaiveTime};
use finman::domain::{Budget, Expense, Income, Reminder, User};
use finman::storage::JsonStore;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn income_collection_round_trips_in_order() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));

    let incomes = vec![
        Income::new(1200.0, "Salary", date(2025, 1, 1)),
        Income::new(80.5, "Freelance", date(2025, 1, 15)),
        Income::new(80.5, "Freelance", date(2025, 1, 15)),
    ];
    store.save(&incomes).expect("save incomes");

    let loaded: Vec<Income> = store.load();
    assert_eq!(loaded, incomes, "order and duplicates must survive");
}

#[test]
fn every_entity_type_round_trips() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));

    let users = vec![User::new("alice", "pw1", "a@b.com")];
    let budgets = vec![Budget::new(
        "Food",
        300.0,
        date(2025, 6, 1),
        date(2025, 6, 30),
    )];
    let expenses = vec![Expense::new(42.0, "Transport", "Cash", date(2025, 2, 3))];
    let reminders = vec![Reminder::new("Pay rent", date(2025, 3, 1), time(9, 30))];

    store.save(&users).unwrap();
    store.save(&budgets).unwrap();
    store.save(&expenses).unwrap();
    store.save(&reminders).unwrap();

    assert_eq!(store.load::<User>(), users);
    assert_eq!(store.load::<Budget>(), budgets);
    assert_eq!(store.load::<Expense>(), expenses);
    assert_eq!(store.load::<Reminder>(), reminders);
}

#[test]
fn load_is_idempotent() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));

    let expenses = vec![Expense::new(9.99, "Coffee", "Card", date(2025, 4, 4))];
    store.save(&expenses).unwrap();

    let first: Vec<Expense> = store.load();
    let second: Vec<Expense> = store.load();
    assert_eq!(first, second);
}

#[test]
fn save_replaces_prior_snapshot_wholesale() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));

    let first = vec![
        Income::new(10.0, "One", date(2025, 1, 1)),
        Income::new(20.0, "Two", date(2025, 1, 2)),
    ];
    store.save(&first).unwrap();

    let second = vec![Income::new(30.0, "Three", date(2025, 1, 3))];
    store.save(&second).unwrap();

    let loaded: Vec<Income> = store.load();
    assert_eq!(loaded, second, "old entries must not leak into a new save");
}

#[test]
fn corrupt_snapshot_degrades_to_empty() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));

    fs::create_dir_all(temp.path()).unwrap();
    fs::write(store.collection_path::<Budget>(), "{ not json ]").unwrap();

    let loaded: Vec<Budget> = store.load();
    assert!(loaded.is_empty(), "undecodable snapshot must load as empty");
}

#[test]
fn snapshot_files_are_kept_per_entity_type() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));

    store
        .save(&[Income::new(1.0, "A", date(2025, 1, 1))])
        .unwrap();
    store
        .save(&[Expense::new(2.0, "B", "Cash", date(2025, 1, 2))])
        .unwrap();

    assert!(temp.path().join("incomes.json").exists());
    assert!(temp.path().join("expenses.json").exists());
    assert!(!temp.path().join("budgets.json").exists());
}
