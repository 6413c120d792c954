use crate::application::dto::{DashboardView, ViewRequest};
use crate::application::use_cases::RenderDashboardUseCase;
use crate::ports::outbound::{DatasetSource, ProgressReporter};
use crate::shared::Result;
use std::future::Future;
use std::time::Duration;

/// Default refresh interval between reload cycles (5 minutes).
pub const DEFAULT_REFRESH_SECONDS: u64 = 300;

/// WatchDashboardUseCase - the periodic full-reload loop
///
/// Each cycle re-invokes the loader and re-derives every view from
/// scratch; nothing is cached or patched between cycles. A failed cycle is
/// handed to the caller like a successful one and the loop simply waits
/// for the next scheduled refresh - there is no in-cycle retry. The loop
/// itself is a cancellable task: it stops as soon as the supplied shutdown
/// future resolves.
///
/// # Type Parameters
/// * `DS` - DatasetSource implementation
/// * `PR` - ProgressReporter implementation
pub struct WatchDashboardUseCase<DS, PR> {
    render: RenderDashboardUseCase<DS, PR>,
    interval: Duration,
}

impl<DS, PR> WatchDashboardUseCase<DS, PR>
where
    DS: DatasetSource,
    PR: ProgressReporter,
{
    pub fn new(render: RenderDashboardUseCase<DS, PR>, interval: Duration) -> Self {
        Self { render, interval }
    }

    /// Runs reload cycles until `shutdown` resolves
    ///
    /// # Arguments
    /// * `request` - The query state applied on every cycle
    /// * `on_cycle` - Receives each cycle's outcome (a fresh snapshot or
    ///   the load error); returning an error stops the loop
    /// * `shutdown` - Future whose completion cancels the loop
    pub async fn run_until<F>(
        &self,
        request: ViewRequest,
        mut on_cycle: impl FnMut(Result<DashboardView>) -> Result<()>,
        shutdown: F,
    ) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            let outcome = self.render.execute(request.clone()).await;
            on_cycle(outcome)?;

            tokio::select! {
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::domain::{PackageRecord, RecordId};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingSource {
        loads: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl DatasetSource for CountingSource {
        fn describe(&self) -> String {
            "counting://".to_string()
        }

        async fn load(&self) -> Result<Vec<PackageRecord>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(vec![PackageRecord {
                id: RecordId::Number(1),
                category: "Toolchain".to_string(),
                software: "gcc".to_string(),
                status: Some("Enabled".to_string()),
                package_type: "Compiler".to_string(),
                riscv_enablement: None,
            }])
        }
    }

    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, _message: &str) {}
        fn report_completion(&self, _message: &str) {}
    }

    #[tokio::test]
    async fn test_watch_stops_on_shutdown_after_first_cycle() {
        let loads = Arc::new(AtomicUsize::new(0));
        let render = RenderDashboardUseCase::new(
            CountingSource {
                loads: Arc::clone(&loads),
            },
            SilentReporter,
        );
        let watch = WatchDashboardUseCase::new(render, Duration::from_secs(300));

        let mut cycles = 0usize;
        watch
            .run_until(
                ViewRequest::default(),
                |outcome| {
                    cycles += 1;
                    assert!(outcome.is_ok());
                    Ok(())
                },
                std::future::ready(()),
            )
            .await
            .unwrap();

        // The shutdown future was already resolved, so exactly one cycle ran
        assert_eq!(cycles, 1);
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_watch_reloads_each_cycle() {
        let loads = Arc::new(AtomicUsize::new(0));
        let render = RenderDashboardUseCase::new(
            CountingSource {
                loads: Arc::clone(&loads),
            },
            SilentReporter,
        );
        let watch = WatchDashboardUseCase::new(render, Duration::from_millis(5));

        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let mut tx = Some(tx);
        let mut cycles = 0usize;

        watch
            .run_until(
                ViewRequest::default(),
                |outcome| {
                    assert!(outcome.is_ok());
                    cycles += 1;
                    if cycles == 3 {
                        if let Some(tx) = tx.take() {
                            let _ = tx.send(());
                        }
                    }
                    Ok(())
                },
                async {
                    let _ = rx.await;
                },
            )
            .await
            .unwrap();

        assert!(cycles >= 3);
        assert_eq!(loads.load(Ordering::SeqCst), cycles);
    }

    #[tokio::test]
    async fn test_watch_callback_error_stops_the_loop() {
        let loads = Arc::new(AtomicUsize::new(0));
        let render = RenderDashboardUseCase::new(
            CountingSource {
                loads: Arc::clone(&loads),
            },
            SilentReporter,
        );
        let watch = WatchDashboardUseCase::new(render, Duration::from_millis(1));

        let result = watch
            .run_until(
                ViewRequest::default(),
                |_| anyhow::bail!("presentation failed"),
                std::future::pending(),
            )
            .await;

        assert!(result.is_err());
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }
}
