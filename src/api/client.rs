use log::debug;
use std::time::Duration;
use url::Url;

use super::response::{self, Listed, Listing};
use crate::config::AppConfig;
use crate::error::{FetchError, SetupError};
use crate::state::data::{DownloadableItem, SelectableVersion};

const VERSIONS_ENDPOINT: &str = "api/getProductVersions";
const DETAILS_ENDPOINT: &str = "api/download-details";

/// Parameters of a download-details request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsQuery {
    pub product_id: String,
    pub version: String,
    pub build: String,
    pub platform_or_arch: String,
    pub manifest_path: String,
}

/// HTTP client for the download index API.
///
/// Cheap to clone; every fetch takes `self` by value so it can run as a
/// `'static` background task.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Endpoints are placed under the path of `base`
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { http, base })
    }

    /// Build a client for the configured API base and timeout
    pub fn from_config(config: &AppConfig) -> Result<Self, SetupError> {
        let base = config.api_base_url()?;
        Ok(Self::new(base, config.request_timeout())?)
    }

    pub fn versions_url(&self, product_id: &str) -> Url {
        let mut url = self.endpoint(VERSIONS_ENDPOINT);
        url.query_pairs_mut().append_pair("productId", product_id);
        url
    }

    pub fn details_url(&self, query: &DetailsQuery) -> Url {
        let mut url = self.endpoint(DETAILS_ENDPOINT);
        url.query_pairs_mut()
            .append_pair("productId", &query.product_id)
            .append_pair("version", &query.version)
            .append_pair("build", &query.build)
            .append_pair("platformOrArch", &query.platform_or_arch)
            .append_pair("gzFilePath", &query.manifest_path);
        url
    }

    /// Fetch the selectable versions of a product
    pub async fn fetch_versions(
        self,
        product_id: String,
    ) -> Result<Listed<SelectableVersion>, FetchError> {
        let url = self.versions_url(&product_id);
        self.get(url).await
    }

    /// Fetch the downloadable items of one version
    pub async fn fetch_details(
        self,
        query: DetailsQuery,
    ) -> Result<Listed<DownloadableItem>, FetchError> {
        let url = self.details_url(&query);
        self.get(url).await
    }

    async fn get<T: Listing>(&self, url: Url) -> Result<Listed<T>, FetchError> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        response::interpret(status, &body)
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        // Keep any path prefix of the base, e.g. "https://host/prefix/"
        let prefix = url.path().trim_end_matches('/').to_string();
        url.set_path(&format!("{}/{}", prefix, path));
        url
    }
}
