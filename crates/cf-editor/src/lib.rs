pub mod debounce;
pub mod history;
pub mod session;

pub use debounce::{Clock, Debouncer, ManualClock, SystemClock};
pub use history::HistoryStore;
pub use session::{EditorConfig, EditorSession};
