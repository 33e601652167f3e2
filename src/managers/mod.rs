// verdash state managers
// Managers handle stateful operations: consent, user-adjustable view state,
// and the dashboard fetch lifecycle.

pub mod consent_manager;
pub mod dashboard_manager;
pub mod view_state_manager;
