// WallSit - Session Reporter Contract
//
// Reports are fire-and-forget: one attempt, the outcome is only logged.

use crate::error::TrainerError;
use crate::events::SessionReport;

pub trait Reporter {
    fn report(&mut self, report: &SessionReport) -> Result<(), TrainerError>;
}

/// Stand-in used when WiFi could not be brought up at boot.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineReporter;

impl Reporter for OfflineReporter {
    fn report(&mut self, _report: &SessionReport) -> Result<(), TrainerError> {
        Err(TrainerError::Offline)
    }
}

/// Request URL understood by the collection server.
pub fn report_url(endpoint: &str, report: &SessionReport) -> String {
    format!(
        "{}/?session_percentage={}&session_number={}",
        endpoint.trim_end_matches('/'),
        report.session_percentage,
        report.session_number
    )
}
