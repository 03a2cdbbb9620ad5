// SPDX-License-Identifier: MPL-2.0
//! Timer loop feeding [`Message::Tick`] into the application.

use super::{App, Message};
use crate::domain::alert::{AlertRecord, TickInterval};
use crate::error::Result;
use crate::logging;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

/// Ticks `app` every `interval` until `duration` has elapsed.
///
/// `on_raised` sees every alert that became active during a tick, after
/// that tick's expiries have been applied.
///
/// # Errors
///
/// Propagates errors returned by [`App::update`].
pub async fn run_for<F>(
    app: &mut App,
    interval: TickInterval,
    duration: Duration,
    mut on_raised: F,
) -> Result<()>
where
    F: FnMut(&AlertRecord),
{
    let mut ticker = time::interval(interval.as_duration());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // The first tick completes immediately.
    let start = ticker.tick().await;
    let deadline = start + duration;
    let mut last = start;

    while last < deadline {
        let now = ticker.tick().await;
        app.update(Message::Tick(now - last))?;
        last = now;

        for alert in app.alerts().active().filter(|a| a.elapsed().is_zero()) {
            on_raised(alert.record());
        }
    }

    tracing::debug!(ran_for_ms = logging::millis(duration), "tick loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::simulation::DetectionFeed;

    fn app_with_feed(period: Duration) -> App {
        let feed = DetectionFeed::seeded(11).with_chance(1.0).with_period(period);
        App::new(&Config::default()).with_feed(Some(feed))
    }

    #[tokio::test(start_paused = true)]
    async fn raises_one_detection_per_period() {
        let mut app = app_with_feed(Duration::from_secs(1));
        let mut raised = Vec::new();

        run_for(
            &mut app,
            TickInterval::new(100),
            Duration::from_secs(3),
            |record| raised.push(record.title().to_string()),
        )
        .await
        .expect("tick loop should not fail");

        assert_eq!(raised.len(), 3);
        assert_eq!(app.detections(), 3);
        assert_eq!(app.alerts().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn detections_expire_while_running() {
        let mut app = app_with_feed(Duration::from_secs(1));

        run_for(&mut app, TickInterval::new(100), Duration::from_secs(10), |_| {})
            .await
            .expect("tick loop should not fail");

        // 10 raised; those older than the 8s detection lifetime are gone.
        assert_eq!(app.detections(), 10);
        assert!(app.alerts().len() < 10);
        assert_eq!(app.alerts().len() + app.alerts().history().len(), 10);
    }
}
