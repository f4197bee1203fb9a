//! End-to-end: a log file being appended to ends up as Turtle batches.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use chrono::{TimeDelta, Utc};
use scouter_core::hunt_data::{mob_id, zone_id};
use scouter_core::{LogLines, Pipeline, Transport, TransportError, TurtleSightings};
use scouter_types::{Expansion, ScoutConfig};
use tokio::sync::mpsc;

const LINK: char = '\u{E0BB}';

struct ChannelTransport(mpsc::UnboundedSender<Vec<u8>>);

impl Transport for ChannelTransport {
    async fn deliver(&self, body: Vec<u8>) -> Result<(), TransportError> {
        self.0.send(body).ok();
        Ok(())
    }
}

fn chat_line(age: TimeDelta, message: &str) -> String {
    let ts = (Utc::now() - age).to_rfc3339();
    format!("00|{ts}|0039||{message}|0123456789abcdef\n")
}

fn append(path: &Path, text: &str) {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .unwrap();
    file.write_all(text.as_bytes()).unwrap();
}

async fn wait_for_batch(
    rx: &mut mpsc::UnboundedReceiver<Vec<u8>>,
    wanted: usize,
) -> TurtleSightings {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
    loop {
        let body = tokio::time::timeout_at(deadline, rx.recv())
            .await
            .expect("timed out waiting for batch")
            .expect("transport dropped");
        let batch: TurtleSightings = serde_json::from_slice(&body).unwrap();
        if batch.sightings.len() == wanted {
            return batch;
        }
    }
}

fn config() -> ScoutConfig {
    ScoutConfig::new("session", "secret")
        .with_expansions(vec![Expansion::Dawntrail])
        .with_lookback(Duration::from_secs(3600))
}

#[tokio::test]
async fn test_follows_file_and_submits_coalesced_batches() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Network_30001_20240821.log");

    let mut initial = String::new();
    // Too old for the lookback window
    initial += &chat_line(
        TimeDelta::hours(2),
        &format!("Heshuala {LINK}Heritage Found ( 10.0  , 10.0 )"),
    );
    initial += &chat_line(
        TimeDelta::minutes(5),
        &format!("Keheniheyamewi {LINK}Shaaloani ( 12.3  , 24.5 )"),
    );
    // Same mark and instance again: replaces the first
    initial += &chat_line(
        TimeDelta::minutes(4),
        &format!("Keheniheyamewi {LINK}Shaaloani ( 30.2  , 8.1 )"),
    );
    initial += &chat_line(
        TimeDelta::minutes(3),
        &format!("Starcrier {LINK}Yak T'el\u{E0B3} ( 20.1  , 15.8 )"),
    );
    // Endwalker mark, not enabled
    initial += &chat_line(
        TimeDelta::minutes(2),
        &format!("Hulder {LINK}Labyrinthos ( 10.0  , 10.0 )"),
    );
    initial += "21|2024-08-21T17:07:49.3900000+03:00|40034AD3|unrelated\n";
    append(&path, &initial);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let pipeline = Pipeline::new(&config(), ChannelTransport(tx))
        .with_flush_interval(Duration::from_millis(50));
    let run_path = path.clone();
    let task = tokio::spawn(async move { pipeline.run(&run_path).await });

    let batch = wait_for_batch(&mut rx, 2).await;
    assert_eq!(batch.collaborator_password, "secret");

    let mut marks: Vec<(u32, u32, u32)> = batch
        .sightings
        .iter()
        .map(|s| (s.mob_id, s.zone_id, s.instance_number))
        .collect();
    marks.sort();
    let mut expected = vec![
        (
            mob_id("Keheniheyamewi").unwrap(),
            zone_id("Shaaloani").unwrap(),
            1,
        ),
        (mob_id("Starcrier").unwrap(), zone_id("Yak T'el").unwrap(), 3),
    ];
    expected.sort();
    assert_eq!(marks, expected);

    // A new instance appears while the pipeline is following the file
    append(
        &path,
        &chat_line(
            TimeDelta::zero(),
            &format!("Keheniheyamewi {LINK}Shaaloani\u{E0B2} ( 12.3  , 24.5 )"),
        ),
    );
    let batch = wait_for_batch(&mut rx, 3).await;
    assert!(
        batch
            .sightings
            .iter()
            .any(|s| s.instance_number == 2 && s.mob_id == mob_id("Keheniheyamewi").unwrap())
    );

    assert!(!task.is_finished(), "pipeline should keep following the file");
    task.abort();
}

#[tokio::test]
async fn test_missing_log_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let (tx, _rx) = mpsc::unbounded_channel();
    let pipeline = Pipeline::new(&config(), ChannelTransport(tx));
    assert!(pipeline.run(&dir.path().join("missing.log")).await.is_err());
}

#[tokio::test]
async fn test_finite_source_gets_final_flush() {
    let text = chat_line(
        TimeDelta::minutes(1),
        &format!("Urna Variabilis {LINK}Heritage Found ( 10.0  , 10.0 )"),
    );
    let (tx, mut rx) = mpsc::unbounded_channel();
    let pipeline = Pipeline::new(&config(), ChannelTransport(tx))
        .with_flush_interval(Duration::from_secs(3600));

    pipeline
        .run_with(LogLines::new(text.as_bytes()))
        .await
        .unwrap();

    let batch = wait_for_batch(&mut rx, 1).await;
    assert_eq!(batch.sightings[0].mob_id, mob_id("Urna Variabilis").unwrap());
}
