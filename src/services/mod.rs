// verdash services
// Services provide core functionality: data fetch, data shaping, localization,
// and the preference record store.

pub mod api_client;
pub mod localization_engine;
pub mod preference_store;
pub mod transform;
