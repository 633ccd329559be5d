use gloo::storage::{LocalStorage, Storage};

/// Local-storage key the monthly income survives reloads under.
pub const INCOME_KEY: &str = "monthlyIncome";

/// Monthly income persisted by an earlier session, if any.
pub fn load_income() -> Option<f64> {
    LocalStorage::get(INCOME_KEY).ok()
}

/// Persist the monthly income for future sessions.
pub fn save_income(value: f64) {
    if let Err(e) = LocalStorage::set(INCOME_KEY, value) {
        gloo::console::error!("Failed to persist monthly income:", e.to_string());
    }
}
