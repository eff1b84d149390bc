//! Contact form submission

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use futures::future::BoxFuture;
use tokio::sync::Mutex;

use crate::model::{ContactForm, ContactSubmission, SubmissionStatus};

/// Delivers a validated contact submission somewhere.
pub trait Submitter: Send + Sync {
    fn submit(&self, submission: ContactSubmission) -> BoxFuture<'static, Result<()>>;
}

/// Stands in for a real backend: waits, logs the payload and succeeds.
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, submission: ContactSubmission) -> BoxFuture<'static, Result<()>> {
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            let payload = serde_json::to_string(&serde_json::json!({
                "received_at": chrono::Local::now().to_rfc3339(),
                "submission": submission,
            }))?;
            tracing::info!(%payload, "Contact form submitted");
            Ok(())
        })
    }
}

/// Validate the form and, if it passes, run the submission to completion:
/// `Submitting` → `Submitted` (cleared after `reset_after`) or `Failed`.
///
/// Returns immediately if a submission is already in flight.
pub async fn submit_form(
    form: Arc<Mutex<ContactForm>>,
    submitter: Arc<dyn Submitter>,
    reset_after: Duration,
) {
    let submission = {
        let mut form = form.lock().await;
        if form.is_locked() {
            tracing::debug!(status = ?form.status, "Submit ignored, form busy");
            return;
        }
        match form.validate() {
            Ok(submission) => {
                form.status = SubmissionStatus::Submitting;
                submission
            }
            Err(e) => {
                tracing::debug!(error = %e, "Contact form invalid");
                form.status = SubmissionStatus::Failed(e.to_string());
                return;
            }
        }
    };

    tracing::info!(project_type = ?submission.project_type, "Submitting contact form");
    let result = submitter.submit(submission).await;

    match result {
        Ok(()) => {
            form.lock().await.status = SubmissionStatus::Submitted;
            tokio::time::sleep(reset_after).await;
            let mut form = form.lock().await;
            if form.status == SubmissionStatus::Submitted {
                form.reset();
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Contact form submission failed");
            form.lock().await.status = SubmissionStatus::Failed(format!("Could not send: {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectType;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Recording {
        calls: AtomicUsize,
        fail: bool,
    }

    impl Submitter for Recording {
        fn submit(&self, _submission: ContactSubmission) -> BoxFuture<'static, Result<()>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let fail = self.fail;
            Box::pin(async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                if fail {
                    anyhow::bail!("backend unavailable");
                }
                Ok(())
            })
        }
    }

    fn recording(fail: bool) -> Arc<Recording> {
        Arc::new(Recording { calls: AtomicUsize::new(0), fail })
    }

    fn filled_form() -> Arc<Mutex<ContactForm>> {
        Arc::new(Mutex::new(ContactForm {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            project_type: Some(ProjectType::Ecommerce),
            message: "Online store please".into(),
            ..ContactForm::default()
        }))
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_then_reset() {
        let form = filled_form();
        let submitter = recording(false);
        let task = tokio::spawn(submit_form(form.clone(), submitter.clone(), Duration::from_secs(3)));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(form.lock().await.status, SubmissionStatus::Submitting);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(form.lock().await.status, SubmissionStatus::Submitted);
        assert_eq!(form.lock().await.name, "Grace");

        task.await.unwrap();
        let form = form.lock().await;
        assert_eq!(form.status, SubmissionStatus::Idle);
        assert!(form.name.is_empty());
        assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_keeps_fields() {
        let form = filled_form();
        submit_form(form.clone(), recording(true), Duration::from_secs(3)).await;

        let form = form.lock().await;
        assert!(matches!(&form.status, SubmissionStatus::Failed(msg) if msg.contains("backend unavailable")));
        assert_eq!(form.email, "grace@example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_form_never_reaches_submitter() {
        let form = Arc::new(Mutex::new(ContactForm::default()));
        let submitter = recording(false);
        submit_form(form.clone(), submitter.clone(), Duration::from_secs(3)).await;

        assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            form.lock().await.status,
            SubmissionStatus::Failed("Name is required".into())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_while_pending_is_ignored() {
        let form = filled_form();
        let submitter = recording(false);
        let first = tokio::spawn(submit_form(form.clone(), submitter.clone(), Duration::from_secs(3)));
        tokio::time::sleep(Duration::from_millis(10)).await;

        submit_form(form.clone(), submitter.clone(), Duration::from_secs(3)).await;
        first.await.unwrap();
        assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submitter_waits_for_delay() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1500));
        let submission = filled_form().lock().await.validate().unwrap();
        let start = tokio::time::Instant::now();
        submitter.submit(submission).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }
}
