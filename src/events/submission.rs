use crate::config::Config;
use crate::form::{FormEvent, FormKind, Submission};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Errors raised while handing a form to its server.
///
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// No URL configured for the form
    #[error("No action URL configured for the {0} form")]
    ActionUrlNotSet(String),

    /// Request could not be completed
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server rejected the submission with status {0}")]
    Rejected(u16),
}

/// Specify different submission event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    Submit(Submission),
    Teardown,
}

/// Posts form fields as `application/x-www-form-urlencoded`.
///
pub struct Submitter {
    client: reqwest::Client,
}

impl Default for Submitter {
    fn default() -> Self {
        Submitter::new()
    }
}

impl Submitter {
    pub fn new() -> Self {
        Submitter {
            client: reqwest::Client::new(),
        }
    }

    pub async fn post(&self, url: &str, fields: &[(String, String)]) -> Result<(), SubmissionError> {
        debug!("Posting {} field(s) to {}...", fields.len(), url);
        let response = self.client.post(url).form(fields).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}

/// Specify struct for managing state with submission events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    config: Config,
    submitter: Submitter,
    pending: Vec<JoinHandle<()>>,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, config: Config) -> Self {
        Handler {
            state,
            config,
            submitter: Submitter::new(),
            pending: vec![],
        }
    }

    /// Handle submission events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing submission event '{:?}'...", event);
        match event {
            Event::Submit(submission) => self.submit(submission).await?,
            Event::Teardown => self.teardown(),
        }
        Ok(())
    }

    async fn submit(&mut self, submission: Submission) -> Result<()> {
        let form = submission.form;
        if form == FormKind::Lead && self.config.lead_demo {
            self.simulate();
            return Ok(());
        }

        let url = match self.config.action_url(form) {
            Some(url) => url.to_string(),
            None => {
                self.report(FormEvent::SubmissionFailed).await;
                return Err(SubmissionError::ActionUrlNotSet(form.to_string()).into());
            }
        };

        info!("Submitting {} form...", form);
        match self.submitter.post(&url, &submission.fields).await {
            Ok(()) => {
                info!("Submitted {} form.", form);
                self.report(FormEvent::SubmissionSucceeded).await;
            }
            Err(err) => {
                error!("Failed to submit {} form: {}", form, err);
                self.report(FormEvent::SubmissionFailed).await;
            }
        }
        Ok(())
    }

    /// Acknowledge the lead form locally after the configured delay.
    ///
    fn simulate(&mut self) {
        self.pending.retain(|task| !task.is_finished());
        let state = Arc::clone(self.state);
        let delay = self.config.lead_demo_delay();
        info!("Simulating lead submission ({} ms)...", delay.as_millis());
        self.pending.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock().await;
            state.apply_form_event(FormEvent::SubmissionSucceeded);
        }));
    }

    async fn report(&self, event: FormEvent) {
        let mut state = self.state.lock().await;
        state.apply_form_event(event);
    }

    /// Cancel every scheduled completion.
    ///
    fn teardown(&mut self) {
        let count = self.pending.len();
        for task in self.pending.drain(..) {
            task.abort();
        }
        if count > 0 {
            debug!("Cancelled {} pending submission task(s).", count);
        }
    }
}

impl Drop for Handler<'_> {
    fn drop(&mut self) {
        self.teardown();
    }
}
