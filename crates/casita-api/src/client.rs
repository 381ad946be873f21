// HTTP client for the Casita control server.
//
// Wraps `reqwest::Client` with escaped URL construction and the response
// classification the server requires: HTTP 403 means the paid tier is
// missing, error bodies may arrive under a 200 status, and the info
// endpoint returns either a single object or an array. Decode attempts are
// ordered explicitly -- the shape of the body, not a type tag, decides how
// it is interpreted.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{
    ActionResponse, ActionStatus, Device, DeviceInfo, Group, Room, Scene, StatusSummary,
};

/// Configuration for constructing a [`HomeClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root, e.g. `http://localhost:8423`.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: std::time::Duration,
}

/// Client for the Casita app's local HTTP API.
///
/// All endpoints are GET. Each method issues exactly one request and fails
/// fast: there are no retries, and one failure aborts the caller's command.
pub struct HomeClient {
    http: reqwest::Client,
    base_url: Url,
}

/// Lenient probe for `{status, message}` error records. A well-formed
/// `DeviceInfo` body also decodes into this (with both fields `None`), so
/// callers must check `status` rather than treating a successful decode as
/// proof of an error.
#[derive(Debug, Deserialize)]
struct ErrorProbe {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl HomeClient {
    /// Create a new client from a [`ClientConfig`].
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        Ok(Self {
            http: transport.build_client()?,
            base_url: config.base_url,
        })
    }

    /// The server base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// `GET /status` -- home-wide counters.
    pub async fn status(&self) -> Result<StatusSummary, Error> {
        let body = self.get(self.endpoint(&["status"])?).await?;
        decode(&body)
    }

    /// `GET /list/rooms`
    pub async fn list_rooms(&self) -> Result<Vec<Room>, Error> {
        let body = self.get(self.endpoint(&["list", "rooms"])?).await?;
        decode(&body)
    }

    /// `GET /list/devices[/<room>]`
    pub async fn list_devices(&self, room: Option<&str>) -> Result<Vec<Device>, Error> {
        let url = match room {
            Some(room) => self.endpoint(&["list", "devices", room])?,
            None => self.endpoint(&["list", "devices"])?,
        };
        let body = self.get(url).await?;
        decode(&body)
    }

    /// `GET /list/scenes`
    pub async fn list_scenes(&self) -> Result<Vec<Scene>, Error> {
        let body = self.get(self.endpoint(&["list", "scenes"])?).await?;
        decode(&body)
    }

    /// `GET /list/groups`
    pub async fn list_groups(&self) -> Result<Vec<Group>, Error> {
        let body = self.get(self.endpoint(&["list", "groups"])?).await?;
        decode(&body)
    }

    /// `GET /info/<target>` where target is a device, room, or group name.
    ///
    /// The body is one of three shapes, tried in order:
    /// 1. an `{status: "error", message}` record -> [`Error::ActionFailed`];
    /// 2. an array of [`DeviceInfo`] -> returned as-is;
    /// 3. a single [`DeviceInfo`] -> returned as a one-element vec.
    ///
    /// The error probe runs first so a "not found" record is never
    /// misread as a device, and the array attempt precedes the single
    /// object so the ambiguity is resolved by order, not inference.
    pub async fn info(&self, target: &str) -> Result<Vec<DeviceInfo>, Error> {
        let body = self.get(self.endpoint(&["info", target])?).await?;

        if let Ok(probe) = serde_json::from_slice::<ErrorProbe>(&body) {
            if probe.status.as_deref() == Some("error") {
                return Err(Error::ActionFailed {
                    message: probe.message.unwrap_or_default(),
                });
            }
        }

        if let Ok(infos) = serde_json::from_slice::<Vec<DeviceInfo>>(&body) {
            return Ok(infos);
        }

        match serde_json::from_slice::<DeviceInfo>(&body) {
            Ok(info) => Ok(vec![info]),
            Err(e) => Err(parse_error(e, &body)),
        }
    }

    /// `GET /<action>/<target>` for plain control actions
    /// (toggle, on, off, lock, unlock, open, close, scene).
    pub async fn run_action(&self, action: &str, target: &str) -> Result<ActionResponse, Error> {
        self.action(self.endpoint(&[action, target])?).await
    }

    /// `GET /<action>/<value>/<target>` for valued control actions
    /// (brightness, position, temp, color).
    pub async fn run_value_action(
        &self,
        action: &str,
        value: &str,
        target: &str,
    ) -> Result<ActionResponse, Error> {
        self.action(self.endpoint(&[action, value, target])?).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Build a URL from escaped path segments. Room and device names may
    /// contain spaces; `push` percent-escapes each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Transport(format!("base URL cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Run an action request and surface an embedded error record as a
    /// failure even though the HTTP status was 2xx.
    async fn action(&self, url: Url) -> Result<ActionResponse, Error> {
        let body = self.get(url).await?;
        let resp: ActionResponse = decode(&body)?;
        if resp.status == ActionStatus::Error {
            return Err(Error::ActionFailed {
                message: resp.message.unwrap_or_default(),
            });
        }
        Ok(resp)
    }

    /// Send a GET request and classify HTTP-level failures.
    ///
    /// 403 wins over any body content. Other >=400 statuses prefer the
    /// server's own message when the body carries one.
    async fn get(&self, url: Url) -> Result<Vec<u8>, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::ConnectionFailed {
                url: self.base_url.to_string(),
                source: e,
            })?;

        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| Error::Transport(format!("failed to read response body: {e}")))?;

        if status.as_u16() == 403 {
            return Err(Error::AccessDenied);
        }

        if status.is_client_error() || status.is_server_error() {
            if let Ok(probe) = serde_json::from_slice::<ErrorProbe>(&body) {
                if let Some(message) = probe.message.filter(|m| !m.is_empty()) {
                    return Err(Error::ServerReported { message });
                }
            }
            return Err(Error::ServerError {
                status: status.as_u16(),
            });
        }

        Ok(body.to_vec())
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|e| parse_error(e, body))
}

fn parse_error(e: serde_json::Error, body: &[u8]) -> Error {
    Error::Parse {
        message: e.to_string(),
        body: String::from_utf8_lossy(body).into_owned(),
    }
}
