//! Entity value records and the pure predicates that guard their creation.

pub mod budget;
pub mod expense;
pub mod income;
pub mod reminder;
pub mod user;
pub mod validate;

pub use budget::Budget;
pub use expense::Expense;
pub use income::Income;
pub use reminder::Reminder;
pub use user::User;
