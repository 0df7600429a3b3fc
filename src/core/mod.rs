pub mod parse;
pub mod retry;
pub mod session;
pub mod submit;

pub use parse::parse_identifier;
pub use retry::RetryPolicy;
pub use session::SessionLogic;
pub use submit::{SubmitLogic, SubmitOutcome};
