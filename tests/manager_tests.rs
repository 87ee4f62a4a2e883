use chrono::{Duration, Local, NaiveDate, NaiveTime};
use finman::core::managers::{
    BudgetManager, ExpenseManager, IncomeManager, ManagerError, ReminderManager,
};
use finman::storage::JsonStore;
use tempfile::tempdir;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn budget_accepted_when_period_valid_and_future() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));
    let mut budgets = BudgetManager::load(store.clone());

    budgets
        .add(
            "Food",
            250.0,
            today() + Duration::days(1),
            today() + Duration::days(30),
        )
        .expect("valid budget");

    assert_eq!(budgets.list().len(), 1);

    let reloaded = BudgetManager::load(store);
    assert_eq!(reloaded.list(), budgets.list(), "snapshot written on add");
}

#[test]
fn budget_rejected_when_end_not_after_start() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));
    let mut budgets = BudgetManager::load(store.clone());

    let start = today() + Duration::days(10);
    let result = budgets.add("Food", 250.0, start, start);
    assert!(matches!(result, Err(ManagerError::Invalid(_))));

    assert!(budgets.is_empty(), "rejected add must not mutate memory");
    assert!(
        !temp.path().join("budgets.json").exists(),
        "rejected add must not touch disk"
    );
}

#[test]
fn budget_rejected_when_start_not_in_future() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));
    let mut budgets = BudgetManager::load(store);

    let result = budgets.add("Food", 250.0, today(), today() + Duration::days(30));
    assert!(matches!(result, Err(ManagerError::Invalid(_))));
    assert!(budgets.is_empty());
}

#[test]
fn incomes_append_in_insertion_order() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));
    let mut incomes = IncomeManager::load(store.clone());

    let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    incomes.add(100.0, "Salary", date).unwrap();
    incomes.add(50.0, "Freelance", date).unwrap();
    incomes.add(50.0, "Freelance", date).unwrap();

    let sources: Vec<&str> = incomes
        .list()
        .iter()
        .map(|income| income.source.as_str())
        .collect();
    assert_eq!(sources, ["Salary", "Freelance", "Freelance"]);

    let reloaded = IncomeManager::load(store);
    assert_eq!(reloaded.list(), incomes.list());
}

#[test]
fn expense_add_persists_whole_collection() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));
    let mut expenses = ExpenseManager::load(store.clone());

    let date = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
    expenses.add(12.5, "Food", "Cash", date).unwrap();
    expenses.add(80.0, "Transport", "Credit Card", date).unwrap();

    let reloaded = ExpenseManager::load(store);
    assert_eq!(reloaded.list().len(), 2);
    assert_eq!(reloaded.list(), expenses.list());
}

#[test]
fn reminder_rejected_when_title_out_of_bounds() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));
    let mut reminders = ReminderManager::load(store);

    let future = today() + Duration::days(5);
    let result = reminders.add("ab", future, time(9, 0));
    assert!(matches!(result, Err(ManagerError::Invalid(_))));

    let long_title = "x".repeat(51);
    let result = reminders.add(long_title, future, time(9, 0));
    assert!(matches!(result, Err(ManagerError::Invalid(_))));

    assert!(reminders.is_empty());
}

#[test]
fn reminder_rejected_when_date_not_in_future() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));
    let mut reminders = ReminderManager::load(store);

    let result = reminders.add("Pay rent", today(), time(9, 0));
    assert!(matches!(result, Err(ManagerError::Invalid(_))));
    assert!(reminders.is_empty());
}

#[test]
fn reminder_accepted_at_title_bounds() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));
    let mut reminders = ReminderManager::load(store.clone());

    let future = today() + Duration::days(5);
    reminders.add("abc", future, time(8, 0)).expect("3 chars");
    reminders
        .add("x".repeat(50), future, time(8, 30))
        .expect("50 chars");

    let reloaded = ReminderManager::load(store);
    assert_eq!(reloaded.list().len(), 2);
}

#[test]
fn managers_start_empty_without_snapshots() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf()));

    assert!(BudgetManager::load(store.clone()).is_empty());
    assert!(IncomeManager::load(store.clone()).is_empty());
    assert!(ExpenseManager::load(store.clone()).is_empty());
    assert!(ReminderManager::load(store).is_empty());
}
