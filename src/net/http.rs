// WallSit - HTTP Session Reporter
//
// One GET per report, no retries. Blocks the control loop briefly; reports
// are only sent on an explicit click in Rest.

use std::time::Duration;

use embedded_svc::http::client::Client;
use embedded_svc::http::Status;
use esp_idf_svc::http::client::{Configuration, EspHttpConnection};

use wallsit::events::SessionReport;
use wallsit::reporter::report_url;
use wallsit::{Reporter, TrainerError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub struct HttpReporter {
    endpoint: String,
}

impl HttpReporter {
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }

    fn get(&self, url: &str) -> anyhow::Result<u16> {
        let connection = EspHttpConnection::new(&Configuration {
            timeout: Some(REQUEST_TIMEOUT),
            ..Default::default()
        })?;
        let mut client = Client::wrap(connection);

        let response = client.get(url)?.submit()?;
        Ok(response.status())
    }
}

impl Reporter for HttpReporter {
    fn report(&mut self, report: &SessionReport) -> Result<(), TrainerError> {
        let url = report_url(&self.endpoint, report);
        log::info!("GET {}", url);

        match self.get(&url) {
            Ok(status) if (200..300).contains(&status) => Ok(()),
            Ok(status) => Err(TrainerError::Report(format!("server answered {}", status))),
            Err(e) => Err(TrainerError::Report(e.to_string())),
        }
    }
}
