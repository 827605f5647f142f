// Library surface for headless/integration tests and reuse.
// The terminal front end (CLI, App, rendering) lives in the binary.
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod input;
pub mod keys;
pub mod logging;
pub mod matcher;
pub mod round;
pub mod runtime;
pub mod score;
pub mod session;
pub mod timer;

pub use error::{SessionError, SessionResult};
pub use keys::{Catalog, RawKeyEvent, TargetKey};
pub use matcher::{matches, MatchOutcome};
pub use round::{Feedback, Round};
pub use score::{Rank, Score};
pub use session::{Session, SessionPhase};
