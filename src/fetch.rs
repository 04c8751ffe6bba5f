//! Retrieval of the score sheet as a CSV export

use crate::error::{Result, StandingsError};
use crate::model::DerivedDataset;
use crate::sheet::read_dataset;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d/";

/// Which sheet (and which tab of it) to export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSource {
    pub base_url: String,
    pub sheet_id: String,
    pub gid: String,
}

impl SheetSource {
    pub fn new(sheet_id: impl Into<String>, gid: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            sheet_id: sheet_id.into(),
            gid: gid.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `{base}{sheet_id}/export?format=csv&gid={gid}`
    pub fn export_url(&self) -> Result<Url> {
        if self.sheet_id.is_empty() {
            return Err(StandingsError::InvalidUrl("empty sheet id".to_string()));
        }

        let mut base = Url::parse(&self.base_url)
            .map_err(|e| StandingsError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        // Keep the last base segment when joining
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        let mut url = base
            .join(&format!("{}/export", self.sheet_id))
            .map_err(|e| StandingsError::InvalidUrl(format!("{}: {}", self.sheet_id, e)))?;
        url.query_pairs_mut()
            .append_pair("format", "csv")
            .append_pair("gid", &self.gid);

        Ok(url)
    }
}

/// Blocking client for sheet exports. One request per call, no retries.
pub struct SheetClient {
    client: reqwest::blocking::Client,
}

impl SheetClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("mahjong-standings/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StandingsError::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Download the raw CSV text
    pub fn fetch_text(&self, source: &SheetSource) -> Result<String> {
        let url = source.export_url()?;
        log::info!("Fetching sheet export: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| StandingsError::Fetch(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StandingsError::Http(format!(
                "{} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .text()
            .map_err(|e| StandingsError::Fetch(format!("Failed to read response: {}", e)))
    }

    /// Download, parse and extract in one go
    pub fn fetch_dataset(&self, source: &SheetSource) -> Result<DerivedDataset> {
        let text = self.fetch_text(source)?;
        Ok(read_dataset(&text))
    }
}

/// Fetch a dataset with a fresh client
pub fn fetch_dataset(source: &SheetSource) -> Result<DerivedDataset> {
    SheetClient::new()?.fetch_dataset(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_url() {
        let source = SheetSource::new("abc-123_XY", "825955046");
        assert_eq!(
            source.export_url().unwrap().as_str(),
            "https://docs.google.com/spreadsheets/d/abc-123_XY/export?format=csv&gid=825955046"
        );
    }

    #[test]
    fn test_export_url_custom_base_without_slash() {
        let source = SheetSource::new("sheet", "0").with_base_url("http://localhost:8080/sheets");
        assert_eq!(
            source.export_url().unwrap().as_str(),
            "http://localhost:8080/sheets/sheet/export?format=csv&gid=0"
        );
    }

    #[test]
    fn test_export_url_errors() {
        let empty = SheetSource::new("", "0");
        assert!(matches!(empty.export_url(), Err(StandingsError::InvalidUrl(_))));

        let bad_base = SheetSource::new("sheet", "0").with_base_url("not a url");
        assert!(matches!(bad_base.export_url(), Err(StandingsError::InvalidUrl(_))));
    }

    #[test]
    fn test_unreachable_host_is_a_fetch_error() {
        let source = SheetSource::new("sheet", "0").with_base_url("http://127.0.0.1:9/");
        let result = fetch_dataset(&source);
        assert!(matches!(result, Err(StandingsError::Fetch(_))));
    }

    #[test]
    #[ignore] // Requires network access
    fn test_fetch_published_sheet() {
        let source = SheetSource::new("1-aLG1gcyNOYVY-vBKaO1QdBae3RA43ltCnyOKLWcc2o", "825955046");
        match fetch_dataset(&source) {
            Ok(dataset) => assert!(!dataset.players.is_empty()),
            Err(e) => println!("Fetch failed (network?): {}", e),
        }
    }
}
