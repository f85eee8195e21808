pub mod controller;
pub mod debouncer;
pub mod sequence;
pub mod worker;

// Re-export public types
pub use controller::{
    DEFAULT_MIN_TERM_LEN, DetailView, SuggestionController, WorkerRequest, WorkerResponse,
};
pub use debouncer::{DEFAULT_DEBOUNCE_MS, Debouncer};
pub use sequence::RequestSequence;
pub use worker::spawn_worker;
