//! Timer ownership for a mounted carousel
//!
//! One tokio task per mounted carousel keeps the autoplay deadline and the
//! suspend cooldown deadline, and feeds their expiry into the state machine
//! as ordinary events. User input reaches the same task over a channel, so
//! every transition is applied by a single owner in arrival order.

use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::model::{Carousel, CarouselConfig, CarouselEvent, CarouselPhase, Outcome};

pub struct CarouselDriver {
    events: mpsc::UnboundedSender<CarouselEvent>,
    task: Option<JoinHandle<()>>,
}

impl CarouselDriver {
    /// Start driving `carousel`. Autoplay is armed immediately.
    pub fn mount(carousel: Arc<Mutex<Carousel>>, config: CarouselConfig) -> Self {
        let (events, rx) = mpsc::unbounded_channel();
        tracing::debug!(?config, "Mounting carousel driver");
        let task = tokio::spawn(run_timers(carousel, config, rx));
        Self { events, task: Some(task) }
    }

    /// Queue a user event. Returns false once the driver is gone.
    pub fn send(&self, event: CarouselEvent) -> bool {
        self.events.send(event).is_ok()
    }

    /// Cancel both timers and wait for the task to finish. Once this returns
    /// the driver can no longer touch the carousel.
    pub async fn unmount(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
            tracing::debug!("Carousel driver unmounted");
        }
    }
}

impl Drop for CarouselDriver {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Pending timer deadlines for one carousel
#[derive(Debug, Default)]
struct Deadlines {
    autoplay: Option<Instant>,
    cooldown: Option<Instant>,
}

impl Deadlines {
    fn rearm(&mut self, phase: CarouselPhase, outcome: Outcome, now: Instant, config: &CarouselConfig) {
        match phase {
            CarouselPhase::Autoplaying => {
                self.cooldown = None;
                if outcome.phase_changed || self.autoplay.is_none() {
                    self.autoplay = Some(now + config.interval);
                }
            }
            CarouselPhase::Suspended => {
                self.autoplay = None;
                if outcome.user_suspended {
                    self.cooldown = Some(now + config.cooldown);
                }
            }
            CarouselPhase::Dragging => {
                self.autoplay = None;
                self.cooldown = None;
            }
        }
    }
}

async fn run_timers(
    carousel: Arc<Mutex<Carousel>>,
    config: CarouselConfig,
    mut rx: mpsc::UnboundedReceiver<CarouselEvent>,
) {
    let mut deadlines = Deadlines::default();
    let phase = carousel.lock().await.phase();
    deadlines.rearm(phase, Outcome::default(), Instant::now(), &config);

    loop {
        let autoplay_at = deadlines.autoplay;
        let cooldown_at = deadlines.cooldown;

        let event = tokio::select! {
            received = rx.recv() => match received {
                Some(event) => event,
                None => break,
            },
            _ = sleep_until(autoplay_at.unwrap_or_else(Instant::now)), if autoplay_at.is_some() => {
                // Next tick is measured from this deadline, not from when we woke up.
                deadlines.autoplay = autoplay_at.map(|at| at + config.interval);
                CarouselEvent::AutoplayTick
            }
            _ = sleep_until(cooldown_at.unwrap_or_else(Instant::now)), if cooldown_at.is_some() => {
                deadlines.cooldown = None;
                CarouselEvent::CooldownElapsed
            }
        };

        let (outcome, phase) = {
            let mut carousel = carousel.lock().await;
            let outcome = carousel.handle(event);
            if outcome.index_changed {
                carousel.note_slide(Instant::now().into_std());
            }
            (outcome, carousel.phase())
        };
        deadlines.rearm(phase, outcome, Instant::now(), &config);
        tracing::trace!(?event, ?phase, ?deadlines, "Carousel timers rearmed");
    }

    tracing::debug!("Carousel event channel closed");
}
