//! Live adapter for the `CampusService` port over HTTP.

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::directory::BuildingEntry;
use crate::error::NetworkError;
use crate::geometry::Route;
use crate::ports::campus::{CampusFuture, CampusService};

const BUILDINGS_PATH: &str = "/get-valid-buildings";
const FIND_PATH_PATH: &str = "/find-path";

/// Campus service client backed by `reqwest`.
pub struct LiveCampusService {
    client: Client,
    base_url: String,
}

impl LiveCampusService {
    /// Creates a client for the service at `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { client: Client::new(), base_url: base_url.trim_end_matches('/').to_string() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, NetworkError> {
        let url = self.url(path);
        debug!("GET {url} {query:?}");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| NetworkError::Decode(e.to_string()))
    }
}

impl CampusService for LiveCampusService {
    fn valid_buildings(&self) -> CampusFuture<'_, Vec<BuildingEntry>> {
        Box::pin(async move {
            let names: Map<String, Value> = self.get(BUILDINGS_PATH, &[]).await?;
            entries_from_names(names)
        })
    }

    fn find_path(&self, start: &str, end: &str) -> CampusFuture<'_, Route> {
        let start = start.to_string();
        let end = end.to_string();
        Box::pin(async move {
            let query = [("start", start.as_str()), ("end", end.as_str())];
            let route: Route = self.get(FIND_PATH_PATH, &query).await?;
            Ok(route)
        })
    }
}

/// Flattens the service's name map, keeping its key order.
fn entries_from_names(names: Map<String, Value>) -> Result<Vec<BuildingEntry>, NetworkError> {
    names
        .into_iter()
        .map(|(short_name, long_name)| match long_name {
            Value::String(long_name) => Ok(BuildingEntry { short_name, long_name }),
            other => Err(NetworkError::Decode(format!(
                "building {short_name} has non-string name {other}"
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_map_keeps_wire_order() {
        let names: Map<String, Value> =
            serde_json::from_str(r#"{"MGH":"Mary Gates Hall","CSE":"Allen Center","BAG":"Bagley Hall"}"#)
                .unwrap();
        let entries = entries_from_names(names).unwrap();
        let shorts: Vec<&str> = entries.iter().map(|e| e.short_name.as_str()).collect();
        assert_eq!(shorts, ["MGH", "CSE", "BAG"]);
        assert_eq!(entries[1].long_name, "Allen Center");
    }

    #[test]
    fn non_string_name_is_a_decode_error() {
        let names: Map<String, Value> = serde_json::from_str(r#"{"CSE": 4}"#).unwrap();
        assert!(matches!(entries_from_names(names), Err(NetworkError::Decode(_))));
    }

    #[test]
    fn urls_join_without_double_slash() {
        let service = LiveCampusService::new("http://localhost:4567/");
        assert_eq!(service.url(BUILDINGS_PATH), "http://localhost:4567/get-valid-buildings");
    }
}
