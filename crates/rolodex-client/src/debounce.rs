use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Coalesces rapid repeated triggers into one deferred action: every
/// schedule supersedes the previous not-yet-fired one, and the action only
/// runs once the input has been quiet for the whole period.
pub struct DebouncedQueryTrigger {
    quiet_period: Duration,
    pending: Option<JoinHandle<()>>,
}

impl DebouncedQueryTrigger {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Schedules the action to fire after the quiet period, superseding a
    /// pending not-yet-fired one.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            action.await;
        }));
    }

    /// Cancels the pending action, if any. A cancelled action never fires.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for DebouncedQueryTrigger {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn sender_action(
        tx: &mpsc::UnboundedSender<String>,
        text: &str,
    ) -> impl Future<Output = ()> + Send + 'static {
        let tx = tx.clone();
        let text = text.to_string();
        async move {
            let _ = tx.send(text);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_triggers_coalesce_into_the_last_one() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut trigger = DebouncedQueryTrigger::new(Duration::from_millis(800));

        for text in ["a", "al", "ali"] {
            trigger.schedule(sender_action(&tx, text));
            tokio::time::advance(Duration::from_millis(100)).await;
        }

        assert_eq!(rx.recv().await.as_deref(), Some("ali"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn does_not_fire_before_the_quiet_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut trigger = DebouncedQueryTrigger::new(Duration::from_millis(800));

        trigger.schedule(sender_action(&tx, "x"));
        tokio::time::advance(Duration::from_millis(500)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());

        // it still fires once the full quiet period has elapsed
        assert_eq!(rx.recv().await.as_deref(), Some("x"));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_actions_never_fire() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut trigger = DebouncedQueryTrigger::new(Duration::from_millis(800));

        trigger.schedule(sender_action(&tx, "x"));
        tokio::task::yield_now().await;
        trigger.cancel();

        tokio::time::advance(Duration::from_millis(2000)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_trigger_cancels_the_pending_action() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut trigger = DebouncedQueryTrigger::new(Duration::from_millis(800));
            trigger.schedule(sender_action(&tx, "x"));
            tokio::task::yield_now().await;
        }

        tokio::time::advance(Duration::from_millis(2000)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }
}
