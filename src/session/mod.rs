pub mod outcome;
pub mod selector;
pub mod state;
pub mod termination;

pub use outcome::resolve;
pub use selector::select_next;
pub use state::SessionState;
pub use termination::should_end;
