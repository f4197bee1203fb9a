//! Wiring: tail -> parse -> filter -> cache, with a periodic flush task.

use std::path::Path;
use std::sync::Arc;

use hashbrown::HashSet;
use scouter_types::ScoutConfig;
use tokio::io::AsyncRead;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior};

use crate::cache::SightingCache;
use crate::error::ScoutError;
use crate::hunt_data::marks_for;
use crate::parser::LineParser;
use crate::reader::{DEFAULT_POLL_INTERVAL, LogLines, TailReader};
use crate::submit::{Submitter, Transport};

/// How often pending sightings are sent.
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(1);

pub struct Pipeline<T> {
    parser: LineParser,
    accepted: HashSet<&'static str>,
    cache: Arc<SightingCache>,
    submitter: Arc<Submitter<T>>,
    flush_interval: Duration,
    poll_interval: Duration,
}

impl<T: Transport + 'static> Pipeline<T> {
    pub fn new(config: &ScoutConfig, transport: T) -> Self {
        let accepted = config
            .enabled_expansions()
            .into_iter()
            .flat_map(marks_for)
            .map(|mark| mark.name)
            .collect();

        Self {
            parser: LineParser::new(config.lookback),
            accepted,
            cache: Arc::new(SightingCache::new()),
            submitter: Arc::new(Submitter::new(config.password.clone(), transport)),
            flush_interval: DEFAULT_FLUSH_INTERVAL,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_flush_interval(mut self, flush_interval: Duration) -> Self {
        self.flush_interval = flush_interval;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn cache(&self) -> &Arc<SightingCache> {
        &self.cache
    }

    pub fn accepts(&self, mark: &str) -> bool {
        self.accepted.contains(mark)
    }

    /// Follow the log at `path` until reading fails. Dropping the returned
    /// future closes the file and stops the flush task.
    pub async fn run(self, path: &Path) -> Result<(), ScoutError> {
        let reader = TailReader::open(path)
            .await?
            .with_poll_interval(self.poll_interval);
        tracing::info!(path = %path.display(), "Following log file");
        self.run_with(LogLines::new(reader)).await
    }

    /// Drive the pipeline from any line source. A finite source gets one
    /// final flush when it ends.
    pub async fn run_with<R: AsyncRead + Unpin>(
        self,
        mut lines: LogLines<R>,
    ) -> Result<(), ScoutError> {
        let _flusher = FlushTask::spawn(
            Arc::clone(&self.cache),
            Arc::clone(&self.submitter),
            self.flush_interval,
        );

        while let Some(line) = lines.next_line().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to read log line");
        })? {
            self.ingest(&line);
        }

        tracing::info!(tracked = self.cache.len(), "Log source ended");
        if let Some(snapshot) = self.cache.flush_if_pending() {
            self.submitter.submit(&snapshot).await;
        }
        Ok(())
    }

    /// Parse one line and record it if it is an accepted sighting.
    pub fn ingest(&self, line: &str) -> bool {
        let Some(sighting) = self.parser.parse_line(line) else {
            return false;
        };
        if !self.accepts(sighting.name) {
            tracing::debug!(mark = sighting.name, "Skipping mark outside enabled expansions");
            return false;
        }
        self.cache.update(sighting);
        true
    }
}

/// Periodic flush, aborted when dropped.
struct FlushTask(JoinHandle<()>);

impl FlushTask {
    fn spawn<T: Transport + 'static>(
        cache: Arc<SightingCache>,
        submitter: Arc<Submitter<T>>,
        period: Duration,
    ) -> Self {
        Self(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                // The lock is released before the network call
                if let Some(snapshot) = cache.flush_if_pending() {
                    submitter.submit(&snapshot).await;
                }
            }
        }))
    }
}

impl Drop for FlushTask {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use chrono::Utc;
    use scouter_types::Expansion;

    struct NullTransport;

    impl Transport for NullTransport {
        async fn deliver(&self, _body: Vec<u8>) -> Result<(), TransportError> {
            Ok(())
        }
    }

    fn line(message: &str) -> String {
        format!("00|{}|0039||{message}|hash", Utc::now().to_rfc3339())
    }

    #[test]
    fn test_allow_list_follows_expansions() {
        let config = ScoutConfig::new("s", "p").with_expansions(vec![Expansion::Dawntrail]);
        let pipeline = Pipeline::new(&config, NullTransport);
        assert!(pipeline.accepts("Keheniheyamewi"));
        assert!(!pipeline.accepts("Hulder"));

        let all = Pipeline::new(&ScoutConfig::new("s", "p"), NullTransport);
        assert!(all.accepts("Keheniheyamewi"));
        assert!(all.accepts("Hulder"));
        assert!(all.accepts("Nariphon"));
    }

    #[test]
    fn test_ingest_filters_by_allow_list() {
        let config = ScoutConfig::new("s", "p").with_expansions(vec![Expansion::Dawntrail]);
        let pipeline = Pipeline::new(&config, NullTransport);

        assert!(pipeline.ingest(&line("Keheniheyamewi \u{E0BB}Shaaloani ( 12.3  , 24.5 )")));
        assert!(!pipeline.ingest(&line("Hulder \u{E0BB}Labyrinthos ( 10.0  , 10.0 )")));
        assert!(!pipeline.ingest("01|garbage"));
        assert_eq!(pipeline.cache().len(), 1);
    }
}
