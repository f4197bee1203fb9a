//! Turning raw log lines into hunt sightings.
//!
//! Lines are pipe delimited: `type|timestamp|...`. Only chat lines (`00`)
//! can announce a mark, and only when the message names a known mark and
//! carries a map link:
//!
//! `00|2024-08-21T17:07:49.0000000+03:00|0039||Keheniheyamewi \u{E0BB}Shaaloani\u{E0B3} ( 12.3  , 24.5 )|5a1f...`
//!
//! The map link starts with the link glyph U+E0BB, followed by the zone
//! name, an optional instance glyph and the rounded X/Y coordinates.

use std::sync::LazyLock;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use memchr::memchr_iter;
use regex::Regex;

use crate::hunt_data::{Point, find_mark_in, zone_id};
use crate::sighting::Sighting;
use crate::spawnpoint::closest_spawnpoint;

/// Stand-in for a coordinate that failed to parse. Far enough from any map
/// that the spawn lookup can never mistake it for a real position.
pub const MALFORMED_COORDINATE: f64 = -2_132_831_721.0;

/// Code point right before the instance glyph range. U+E0B1 is instance 1,
/// U+E0B6 is instance 6.
const INSTANCE_GLYPH_BASE: u32 = 0xE0B0;

const MESSAGE_FIELD: usize = 4;

static MAP_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\x{E0BB}(?P<zone>[A-Za-z' ]+?)(?P<instance>[\x{E0B1}-\x{E0B6}])? \( ?(?P<x>[0-9]+\.[0-9]+) *?, ?(?P<y>[0-9]+\.[0-9]+)",
    )
    .expect("map link pattern is valid")
});

/// Log line categories the parser distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// `00`: chat and system messages
    ChatLog,
    Other,
}

impl LineType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "00" => LineType::ChatLog,
            _ => LineType::Other,
        }
    }
}

/// A map link pulled out of a chat message, before spawn snapping.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLink<'a> {
    pub zone: &'a str,
    pub instance: u32,
    pub raw: Point,
}

/// Stateless line parser with a lookback cut-off.
#[derive(Debug, Clone)]
pub struct LineParser {
    lookback: TimeDelta,
}

impl LineParser {
    pub fn new(lookback: Duration) -> Self {
        Self {
            lookback: TimeDelta::from_std(lookback).unwrap_or(TimeDelta::MAX),
        }
    }

    /// Parse a line relative to the current time.
    pub fn parse_line(&self, line: &str) -> Option<Sighting> {
        self.parse_line_at(line, Utc::now())
    }

    /// Parse a line as if the current time were `now`.
    pub fn parse_line_at(&self, line: &str, now: DateTime<Utc>) -> Option<Sighting> {
        let fields = Fields::split(line);
        let code = fields.get(0)?;
        let timestamp = fields.get(1)?;

        // Unparseable timestamps are let through; only provably old lines are dropped
        let timestamp = DateTime::parse_from_rfc3339(timestamp).ok();
        if timestamp.is_some_and(|ts| self.is_too_old(ts.with_timezone(&Utc), now)) {
            return None;
        }

        match LineType::from_code(code) {
            LineType::ChatLog => {
                let sighting = parse_chat_message(fields.get(MESSAGE_FIELD)?)?;
                tracing::debug!(
                    mark = sighting.name,
                    zone = sighting.zone,
                    instance = sighting.instance,
                    x = sighting.pos.x,
                    y = sighting.pos.y,
                    timestamp = ?timestamp,
                    "Sighting"
                );
                Some(sighting)
            }
            LineType::Other => None,
        }
    }

    fn is_too_old(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match now.checked_sub_signed(self.lookback) {
            Some(cutoff) => timestamp < cutoff,
            None => false,
        }
    }
}

/// Decode a chat message into a sighting snapped to its spawn point.
pub fn parse_chat_message(message: &str) -> Option<Sighting> {
    let name = find_mark_in(message)?;
    let link = parse_map_link(message)?;

    let zone = zone_id(link.zone).unwrap_or(0);
    Some(Sighting {
        name,
        pos: closest_spawnpoint(zone, link.raw),
        zone,
        instance: link.instance,
    })
}

/// Extract the first map link in `message`.
pub fn parse_map_link(message: &str) -> Option<MapLink<'_>> {
    let caps = MAP_LINK.captures(message)?;
    let instance = caps
        .name("instance")
        .and_then(|m| m.as_str().chars().next())
        .map(instance_from_glyph)
        .unwrap_or(1);

    Some(MapLink {
        zone: caps.name("zone")?.as_str(),
        instance,
        raw: Point::new(
            parse_coordinate(caps.name("x")?.as_str()),
            parse_coordinate(caps.name("y")?.as_str()),
        ),
    })
}

fn instance_from_glyph(glyph: char) -> u32 {
    u32::from(glyph) - INSTANCE_GLYPH_BASE
}

fn parse_coordinate(s: &str) -> f64 {
    s.parse().unwrap_or(MALFORMED_COORDINATE)
}

/// Pipe-delimited field access without allocating the whole split.
struct Fields<'a> {
    line: &'a str,
    delims: [Option<usize>; MESSAGE_FIELD + 1],
}

impl<'a> Fields<'a> {
    fn split(line: &'a str) -> Self {
        let mut delims = [None; MESSAGE_FIELD + 1];
        for (slot, pos) in delims.iter_mut().zip(memchr_iter(b'|', line.as_bytes())) {
            *slot = Some(pos);
        }
        Self { line, delims }
    }

    /// Field `index`, or `None` if the line has fewer fields.
    fn get(&self, index: usize) -> Option<&'a str> {
        let start = match index {
            0 => 0,
            _ => self.delims.get(index - 1).copied().flatten()? + 1,
        };
        let end = self
            .delims
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(self.line.len());
        Some(&self.line[start..end])
    }
}
