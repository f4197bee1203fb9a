//! Sending sighting batches to Turtle.
//!
//! `PATCH {api_base}/api/v1/scout/{session}` with
//! `{"collaborator_password": ..., "sightings": [{"zone_id", "mob_id", "instance_number", "x", "y"}]}`.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;
use crate::hunt_data::mob_id;
use crate::sighting::Sighting;

pub const DEFAULT_API_BASE: &str = "https://scout.wobbuffet.net";

/// Upper bound on a single delivery, connect through response.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Mob id sent when a name has no table entry.
pub const FALLBACK_MOB_ID: u32 = 1;

/// One sighting as Turtle expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurtleSighting {
    pub zone_id: u32,
    pub mob_id: u32,
    pub instance_number: u32,
    /// Shortest decimal form, no exponent
    pub x: String,
    pub y: String,
}

impl From<&Sighting> for TurtleSighting {
    fn from(sighting: &Sighting) -> Self {
        Self {
            zone_id: sighting.zone,
            mob_id: mob_id(sighting.name).unwrap_or(FALLBACK_MOB_ID),
            instance_number: sighting.instance,
            x: sighting.pos.x.to_string(),
            y: sighting.pos.y.to_string(),
        }
    }
}

/// Request body for one flush.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurtleSightings {
    pub collaborator_password: String,
    pub sightings: Vec<TurtleSighting>,
}

impl TurtleSightings {
    pub fn new(password: &str, snapshot: &[Sighting]) -> Self {
        Self {
            collaborator_password: password.to_string(),
            sightings: snapshot.iter().map(TurtleSighting::from).collect(),
        }
    }
}

/// Delivers an encoded batch somewhere.
pub trait Transport: Send + Sync {
    fn deliver(&self, body: Vec<u8>) -> impl Future<Output = Result<(), TransportError>> + Send;
}

/// Turtle's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(api_base: &str, session: &str) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: scout_endpoint(api_base, session),
        })
    }
}

pub fn scout_endpoint(api_base: &str, session: &str) -> String {
    format!("{}/api/v1/scout/{}", api_base.trim_end_matches('/'), session)
}

impl Transport for HttpTransport {
    async fn deliver(&self, body: Vec<u8>) -> Result<(), TransportError> {
        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "PATCH sightings");
        let response = self
            .client
            .patch(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::Http(e)
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

/// Encodes snapshots and hands them to a [`Transport`]. Failures are
/// logged and dropped; the next flush carries the latest state anyway.
pub struct Submitter<T> {
    password: String,
    transport: T,
}

impl<T: Transport> Submitter<T> {
    pub fn new(password: impl Into<String>, transport: T) -> Self {
        Self {
            password: password.into(),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `snapshot`, logging the outcome.
    pub async fn submit(&self, snapshot: &[Sighting]) {
        tracing::info!(count = snapshot.len(), "Sending sightings");
        match self.try_submit(snapshot).await {
            Ok(()) => tracing::info!("Sightings successfully sent"),
            Err(TransportError::Rejected { status, body }) => {
                tracing::warn!(status, body = %body, "Failed to send sightings");
            }
            Err(e) => tracing::warn!(error = %e, "Failed to send sightings"),
        }
    }

    pub async fn try_submit(&self, snapshot: &[Sighting]) -> Result<(), TransportError> {
        let batch = TurtleSightings::new(&self.password, snapshot);
        let body = serde_json::to_vec(&batch)?;
        self.transport.deliver(body).await
    }
}
