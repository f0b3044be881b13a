use crate::config::Settings;
use crate::error::{LookupError, Result};
use crate::types::{Profile, RepositorySummary};
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Number of repositories asked for, most recently updated first.
pub const RECENT_REPOS: u32 = 5;

/// The two lookups a cycle performs.
pub trait GitHubApi {
    fn fetch_profile(&self, handle: &str) -> Result<Profile>;
    fn fetch_recent_repos(&self, handle: &str) -> Result<Vec<RepositorySummary>>;
}

pub struct GitHubClient {
    http: Client,
    api_url: String,
}

impl GitHubClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        if let Some(token) = &settings.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| LookupError::transport("GITHUB_TOKEN is not a valid header value"))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, handle: &str) -> Result<T> {
        debug!(%url, "GET");
        let resp: Response = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            debug!(%url, %status, "non-success response");
            return Err(LookupError::NotFound {
                handle: handle.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(resp.json::<T>()?)
    }
}

impl GitHubApi for GitHubClient {
    fn fetch_profile(&self, handle: &str) -> Result<Profile> {
        self.get_json(&profile_url(&self.api_url, handle), handle)
    }

    fn fetch_recent_repos(&self, handle: &str) -> Result<Vec<RepositorySummary>> {
        self.get_json(&recent_repos_url(&self.api_url, handle), handle)
    }
}

pub fn profile_url(api_url: &str, handle: &str) -> String {
    format!("{}/users/{}", api_url, urlencoding::encode(handle))
}

pub fn recent_repos_url(api_url: &str, handle: &str) -> String {
    format!(
        "{}/users/{}/repos?sort=updated&per_page={}",
        api_url,
        urlencoding::encode(handle),
        RECENT_REPOS
    )
}
