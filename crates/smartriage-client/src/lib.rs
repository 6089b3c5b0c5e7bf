//! Decision service client and submission lifecycle for SMARTriage.

pub mod http;
pub mod service;
pub mod session;

pub use http::{ClientError, HealthStatus, TriageClient};
pub use service::DecisionService;
pub use session::{ALERT_MESSAGE, Panel, Session, SessionError, SubmitControls, UiState};
