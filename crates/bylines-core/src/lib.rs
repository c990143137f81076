pub mod errors;
pub mod history;
pub mod model;
pub mod render;
pub mod types;

// Re-export commonly used items
pub use errors::{BylinesError, Result};
pub use history::{GitLog, HistorySource, parse_history, unique_committers};
pub use model::{Blacklist, Overrides, ViewModel, build_view_model};
pub use render::render_contributors;
pub use types::Committer;
