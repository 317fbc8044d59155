//! Station API modules

pub mod client;

pub use client::{find_station, latest_reading_from, HistoryEntry, Station, StationClient};
