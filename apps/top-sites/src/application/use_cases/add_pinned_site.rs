//! Add Pinned Site Use Case
//!
//! Pins a site synchronously, then reports the new top-site count to
//! telemetry from a background task. The caller returns as soon as storage
//! has acknowledged the write; the count is always read after that write.

use std::sync::Arc;

use crate::application::ports::{StorageError, TopSitesStorage, TopSitesTelemetry};
use crate::application::services::TaskScope;
use crate::domain::PinnedSite;

/// Name of the background task that reports the count.
const COUNT_FACT_TASK: &str = "top_sites_count_fact";

/// Use case for pinning a site.
pub struct AddPinnedSiteUseCase<S, T>
where
    S: TopSitesStorage + 'static,
    T: TopSitesTelemetry + 'static,
{
    storage: Arc<S>,
    telemetry: Arc<T>,
    scope: Arc<TaskScope>,
}

impl<S, T> AddPinnedSiteUseCase<S, T>
where
    S: TopSitesStorage + 'static,
    T: TopSitesTelemetry + 'static,
{
    pub(crate) const fn new(storage: Arc<S>, telemetry: Arc<T>, scope: Arc<TaskScope>) -> Self {
        Self {
            storage,
            telemetry,
            scope,
        }
    }

    /// Pin a user site.
    pub fn execute(&self, title: &str, url: &str) -> Result<(), StorageError> {
        self.execute_with_default(title, url, false)
    }

    /// Pin a site described by a [`PinnedSite`].
    pub fn execute_site(&self, site: &PinnedSite) -> Result<(), StorageError> {
        self.execute_with_default(&site.title, &site.url, site.is_default)
    }

    /// Pin a site, marking it as a built-in default when `is_default` is set.
    ///
    /// Storage errors are returned unchanged and no telemetry is emitted.
    pub fn execute_with_default(
        &self,
        title: &str,
        url: &str,
        is_default: bool,
    ) -> Result<(), StorageError> {
        self.storage.add_top_site(title, url, is_default)?;
        tracing::debug!(url, is_default, "Pinned top site");

        self.emit_count_fact();
        Ok(())
    }

    fn emit_count_fact(&self) {
        let storage = Arc::clone(&self.storage);
        let telemetry = Arc::clone(&self.telemetry);

        self.scope.launch(COUNT_FACT_TASK, async move {
            let count = match tokio::task::spawn_blocking(move || storage.top_sites_count()).await
            {
                Ok(Ok(count)) => count,
                Ok(Err(e)) => {
                    tracing::warn!(error = %e, "Failed to read top sites count");
                    return;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Top sites count read aborted");
                    return;
                }
            };

            if let Err(e) = telemetry.record_top_sites_count(count).await {
                tracing::warn!(count, error = %e, "Failed to record top sites count");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockTopSitesStorage, MockTopSitesTelemetry, NoOpTelemetry, TelemetryError,
    };
    use crate::infrastructure::telemetry::RecordingTelemetry;
    use mockall::predicate::eq;

    fn build<S, T>(storage: S, telemetry: Arc<T>) -> (AddPinnedSiteUseCase<S, T>, Arc<TaskScope>)
    where
        S: TopSitesStorage + 'static,
        T: TopSitesTelemetry + 'static,
    {
        let scope = Arc::new(TaskScope::new());
        let use_case = AddPinnedSiteUseCase::new(Arc::new(storage), telemetry, Arc::clone(&scope));
        (use_case, scope)
    }

    #[tokio::test]
    async fn add_writes_then_reports_count() {
        let mut storage = MockTopSitesStorage::new();
        storage
            .expect_add_top_site()
            .with(eq("Example"), eq("https://example.com"), eq(false))
            .times(1)
            .returning(|_, _, _| Ok(()));
        storage.expect_top_sites_count().times(1).returning(|| Ok(4));

        let telemetry = Arc::new(RecordingTelemetry::new());
        let (use_case, scope) = build(storage, Arc::clone(&telemetry));

        use_case.execute("Example", "https://example.com").unwrap();
        scope.wait_idle().await;

        assert_eq!(telemetry.observations(), vec![4]);
    }

    #[tokio::test]
    async fn add_passes_default_flag() {
        let mut storage = MockTopSitesStorage::new();
        storage
            .expect_add_top_site()
            .with(eq("Mozilla"), eq("https://www.mozilla.org"), eq(true))
            .times(1)
            .returning(|_, _, _| Ok(()));
        storage.expect_top_sites_count().returning(|| Ok(1));

        let (use_case, scope) = build(storage, Arc::new(NoOpTelemetry));

        use_case
            .execute_site(&PinnedSite::new("Mozilla", "https://www.mozilla.org").as_default())
            .unwrap();
        scope.wait_idle().await;
    }

    #[tokio::test]
    async fn add_storage_failure_propagates_without_telemetry() {
        let mut storage = MockTopSitesStorage::new();
        storage.expect_add_top_site().returning(|_, _, _| {
            Err(StorageError::Backend {
                message: "constraint violated".to_string(),
            })
        });
        storage.expect_top_sites_count().never();

        let telemetry = Arc::new(RecordingTelemetry::new());
        let (use_case, scope) = build(storage, Arc::clone(&telemetry));

        let err = use_case.execute("Example", "https://example.com").unwrap_err();
        scope.wait_idle().await;

        assert!(matches!(err, StorageError::Backend { .. }));
        assert!(telemetry.observations().is_empty());
    }

    #[tokio::test]
    async fn add_succeeds_when_telemetry_fails() {
        let mut storage = MockTopSitesStorage::new();
        storage.expect_add_top_site().times(1).returning(|_, _, _| Ok(()));
        storage.expect_top_sites_count().returning(|| Ok(2));

        let mut telemetry = MockTopSitesTelemetry::new();
        telemetry
            .expect_record_top_sites_count()
            .with(eq(2_usize))
            .times(1)
            .returning(|_| {
                Err(TelemetryError::Unavailable {
                    message: "offline".to_string(),
                })
            });

        let (use_case, scope) = build(storage, Arc::new(telemetry));

        assert!(use_case.execute("Example", "https://example.com").is_ok());
        scope.wait_idle().await;
    }

    #[tokio::test]
    async fn add_succeeds_when_count_read_fails() {
        let mut storage = MockTopSitesStorage::new();
        storage.expect_add_top_site().returning(|_, _, _| Ok(()));
        storage.expect_top_sites_count().times(1).returning(|| {
            Err(StorageError::Unavailable {
                message: "closed".to_string(),
            })
        });

        let telemetry = Arc::new(RecordingTelemetry::new());
        let (use_case, scope) = build(storage, Arc::clone(&telemetry));

        assert!(use_case.execute("Example", "https://example.com").is_ok());
        scope.wait_idle().await;
        assert!(telemetry.observations().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn add_from_plain_thread_reports_count() {
        let mut storage = MockTopSitesStorage::new();
        storage.expect_add_top_site().times(1).returning(|_, _, _| Ok(()));
        storage.expect_top_sites_count().times(1).returning(|| Ok(1));

        let telemetry = Arc::new(RecordingTelemetry::new());
        let (use_case, scope) = build(storage, Arc::clone(&telemetry));

        std::thread::scope(|s| {
            s.spawn(|| use_case.execute("Example", "https://example.com"))
                .join()
                .unwrap()
        })
        .unwrap();
        scope.wait_idle().await;

        assert_eq!(telemetry.observations(), vec![1]);
    }

    #[test]
    fn add_with_no_runtime_anywhere_still_writes() {
        let mut storage = MockTopSitesStorage::new();
        storage.expect_add_top_site().times(1).returning(|_, _, _| Ok(()));
        storage.expect_top_sites_count().never();

        let telemetry = Arc::new(RecordingTelemetry::new());
        let (use_case, _scope) = build(storage, Arc::clone(&telemetry));

        assert!(use_case.execute("Example", "https://example.com").is_ok());
        assert!(telemetry.observations().is_empty());
    }
}
