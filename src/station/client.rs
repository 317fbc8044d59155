//! WindWiz station API client

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::StationConfig;
use crate::error::StationError;
use crate::reading::Reading;

/// Entry of the station index
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Station {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One history sample; the API returns them newest first
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub winddir_avg: f64,
    pub windspeed_avg: f64,
}

impl From<HistoryEntry> for Reading {
    fn from(entry: HistoryEntry) -> Self {
        Reading::new(entry.winddir_avg, entry.windspeed_avg)
    }
}

/// Blocking HTTP client for the station index and history endpoints
pub struct StationClient {
    agent: ureq::Agent,
    config: StationConfig,
}

impl StationClient {
    pub fn new(config: StationConfig) -> Self {
        let timeout = Duration::from_secs(config.timeout_secs);
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout(timeout)
            .build();

        debug!("Station client for {} (timeout {:?})", config.api_url, timeout);

        Self { agent, config }
    }

    /// Client for an API root with default settings
    pub fn with_url(api_url: impl Into<String>) -> Self {
        Self::new(StationConfig {
            api_url: api_url.into(),
            ..Default::default()
        })
    }

    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    /// Fetch `<api>/index.json`
    pub fn list_stations(&self) -> Result<Vec<Station>, StationError> {
        self.get_json(&self.endpoint("index.json"))
    }

    /// Fetch `<api>/<station>/history.json`
    pub fn history(&self, station_id: &str) -> Result<Vec<HistoryEntry>, StationError> {
        self.get_json(&self.endpoint(&format!("{}/history.json", station_id)))
    }

    /// Latest reading of a station listed in the index
    pub fn latest_reading(&self, station_id: &str) -> Result<Reading, StationError> {
        let stations = self.list_stations()?;
        find_station(&stations, station_id)
            .ok_or_else(|| StationError::UnknownStation(station_id.to_string()))?;

        let history = self.history(station_id)?;
        let reading = latest_reading_from(station_id, &history)?;

        info!(
            "Station {}: {:.1} deg, {:.1} m/s",
            station_id, reading.wind_direction, reading.wind_speed
        );
        Ok(reading)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, StationError> {
        debug!("GET {}", url);
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| StationError::Http(e.to_string()))?;

        response
            .into_json::<T>()
            .map_err(|e| StationError::Decode(format!("{}: {}", url, e)))
    }
}

pub fn find_station<'a>(stations: &'a [Station], id: &str) -> Option<&'a Station> {
    stations.iter().find(|s| s.id == id)
}

/// First history entry as a reading
pub fn latest_reading_from(
    station_id: &str,
    history: &[HistoryEntry],
) -> Result<Reading, StationError> {
    history
        .first()
        .copied()
        .map(Reading::from)
        .ok_or_else(|| StationError::EmptyHistory(station_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_ignores_extra_fields() {
        let body = r#"[
            {"id": "hovs-hallar", "name": "Hovs Hallar", "lat": 56.4},
            {"id": "torekov"}
        ]"#;
        let stations: Vec<Station> = serde_json::from_str(body).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name.as_deref(), Some("Hovs Hallar"));
        assert_eq!(stations[1].name, None);
        assert!(find_station(&stations, "torekov").is_some());
        assert!(find_station(&stations, "skanor").is_none());
    }

    #[test]
    fn test_latest_reading_takes_first_entry() {
        let body = r#"[
            {"winddir_avg": 10.0, "windspeed_avg": 3.7, "time": 1300000000},
            {"winddir_avg": 200.0, "windspeed_avg": 9.1}
        ]"#;
        let history: Vec<HistoryEntry> = serde_json::from_str(body).unwrap();
        let reading = latest_reading_from("torekov", &history).unwrap();
        assert_eq!(reading, Reading::new(10.0, 3.7));
    }

    #[test]
    fn test_empty_history() {
        let err = latest_reading_from("torekov", &[]).unwrap_err();
        assert!(matches!(err, StationError::EmptyHistory(ref id) if id == "torekov"));
    }

    #[test]
    fn test_endpoint_joins_cleanly() {
        let client = StationClient::with_url("http://localhost:9/api/v3/");
        assert_eq!(client.endpoint("index.json"), "http://localhost:9/api/v3/index.json");
        assert_eq!(client.api_url(), "http://localhost:9/api/v3/");
    }
}
