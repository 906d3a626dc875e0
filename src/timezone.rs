//! Process-wide default time zone and timestamp semantics.
//!
//! Timestamp columns are naive (no offset). Under [`TimestampMode::Local`]
//! they hold the civil time of the configured zone, under
//! [`TimestampMode::Utc`] the civil time in UTC. The same rule is used to
//! read them back into zoned instants.

use std::sync::{PoisonError, RwLock};

use chrono::{Datelike, NaiveDate, Timelike};
use jiff::{Timestamp, Zoned, civil, tz::TimeZone};
use sea_orm::prelude::DateTime;

use crate::config::TimestampMode;
use crate::error::{Error, Result};

/// Friendly zone names accepted in addition to IANA identifiers.
const ZONE_ALIASES: &[(&str, &str)] = &[
    ("Tokyo", "Asia/Tokyo"),
    ("Osaka", "Asia/Tokyo"),
    ("Sapporo", "Asia/Tokyo"),
    ("Seoul", "Asia/Seoul"),
    ("Beijing", "Asia/Shanghai"),
    ("Sydney", "Australia/Sydney"),
    ("UTC", "Etc/UTC"),
    ("London", "Europe/London"),
    ("Paris", "Europe/Paris"),
    ("Berlin", "Europe/Berlin"),
    ("Eastern Time (US & Canada)", "America/New_York"),
    ("Pacific Time (US & Canada)", "America/Los_Angeles"),
];

#[derive(Clone, Debug)]
struct Settings {
    zone: TimeZone,
    mode: TimestampMode,
}

static SETTINGS: RwLock<Option<Settings>> = RwLock::new(None);

/// Look up a zone by IANA identifier or friendly name
pub fn resolve(name: &str) -> Result<TimeZone> {
    let name = name.trim();
    let iana = ZONE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, iana)| *iana)
        .unwrap_or(name);

    TimeZone::get(iana).map_err(|e| Error::Timezone(format!("unknown time zone '{name}': {e}")))
}

/// Install `name` as the process-wide default zone
pub fn configure(name: &str, mode: TimestampMode) -> Result<TimeZone> {
    let zone = resolve(name)?;
    *SETTINGS.write().unwrap_or_else(PoisonError::into_inner) = Some(Settings {
        zone: zone.clone(),
        mode,
    });
    tracing::info!(
        zone = zone.iana_name().unwrap_or(name),
        ?mode,
        "default time zone configured"
    );
    Ok(zone)
}

/// The configured default zone, UTC until [`configure`] runs
pub fn default_zone() -> TimeZone {
    current().map(|s| s.zone).unwrap_or(TimeZone::UTC)
}

/// The configured timestamp mode, `Utc` until [`configure`] runs
pub fn timestamp_mode() -> TimestampMode {
    current().map(|s| s.mode).unwrap_or(TimestampMode::Utc)
}

/// Zone that naive timestamp columns are expressed in
pub fn storage_zone() -> TimeZone {
    match timestamp_mode() {
        TimestampMode::Local => default_zone(),
        TimestampMode::Utc => TimeZone::UTC,
    }
}

/// Current time, as it should be written to a timestamp column
pub fn now() -> Result<DateTime> {
    civil_now_in(&storage_zone())
}

/// Current civil time in `zone`
pub fn civil_now_in(zone: &TimeZone) -> Result<DateTime> {
    let civil = Timestamp::now().to_zoned(zone.clone()).datetime();
    to_naive(civil)
}

/// Read a stored timestamp back as an instant
pub fn interpret(naive: DateTime) -> Result<Zoned> {
    interpret_in(&storage_zone(), naive)
}

pub fn interpret_in(zone: &TimeZone, naive: DateTime) -> Result<Zoned> {
    Ok(to_civil(naive)?.to_zoned(zone.clone())?)
}

fn current() -> Option<Settings> {
    SETTINGS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

fn to_naive(dt: civil::DateTime) -> Result<DateTime> {
    NaiveDate::from_ymd_opt(dt.year().into(), dt.month() as u32, dt.day() as u32)
        .and_then(|date| {
            date.and_hms_nano_opt(
                dt.hour() as u32,
                dt.minute() as u32,
                dt.second() as u32,
                dt.subsec_nanosecond() as u32,
            )
        })
        .ok_or_else(|| Error::Timezone(format!("{dt} is out of range")))
}

fn to_civil(naive: DateTime) -> Result<civil::DateTime> {
    let out_of_range = || Error::Timezone(format!("{naive} is out of range"));
    let year = i16::try_from(naive.year()).map_err(|_| out_of_range())?;
    let nanos = i32::try_from(naive.nanosecond()).map_err(|_| out_of_range())?;

    Ok(civil::DateTime::new(
        year,
        naive.month() as i8,
        naive.day() as i8,
        naive.hour() as i8,
        naive.minute() as i8,
        naive.second() as i8,
        nanos,
    )?)
}
