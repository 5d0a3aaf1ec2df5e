pub mod app;
pub mod components;
pub mod query_sync;

pub use app::*;
pub use components::*;
pub use query_sync::RouterQueryStore;
