//! HTTP collection client (reqwest, blocking).
//!
//! Runs on dispatcher worker threads, never on the event loop thread, so the
//! blocking API is the simple choice here.
//!
//! Endpoints relative to the collection base URL:
//! - `GET {base}?limit={n}&skip={m}` → `{ posts|items, total }`
//! - `GET {base}/search?q={text}` → `{ posts|items }`
//! - `POST {base}/add` `{ title, userId }` → post without tags
//! - `PUT {base}/{id}` `{ title, tags }` → updated post
//! - `DELETE {base}/{id}` → 200

use super::{CollectionApi, ListPage};
use crate::model::{ClientError, Post, PostId, TagSet};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("postdeck/", env!("CARGO_PKG_VERSION"));

// ===== Wire shapes =====

/// List and search response body. The provider calls the array `posts`.
#[derive(Debug, Deserialize)]
struct CollectionResponse {
    #[serde(alias = "posts")]
    items: Vec<Post>,
    #[serde(default)]
    total: Option<usize>,
}

#[derive(Debug, Serialize)]
struct CreateBody<'a> {
    title: &'a str,
    #[serde(rename = "userId")]
    user_id: u64,
}

#[derive(Debug, Serialize)]
struct UpdateBody<'a> {
    title: &'a str,
    tags: Vec<String>,
}

// ===== Shared plumbing =====

/// Build the blocking client shared by the collection and recipe clients.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, ClientError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ClientError::Transport {
            url: String::new(),
            message: e.to_string(),
        })
}

/// Parse a base URL that endpoint paths can be appended to.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let url = Url::parse(raw).map_err(|e| ClientError::InvalidUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl {
            url: raw.to_string(),
            message: "not a hierarchical URL".to_string(),
        });
    }

    Ok(url)
}

/// Send a request and return the response if it has a 2xx status.
fn send(request: RequestBuilder, url: &Url) -> Result<Response, ClientError> {
    let response = request.send().map_err(|e| ClientError::Transport {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

/// Decode a 2xx response body.
fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T, ClientError> {
    response.json::<T>().map_err(|e| ClientError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

pub(crate) fn get_json<T: DeserializeOwned>(client: &Client, url: &Url) -> Result<T, ClientError> {
    debug!(%url, "GET");
    let response = send(client.get(url.clone()), url)?;
    decode(response, url)
}

// ===== HttpCollectionClient =====

/// [`CollectionApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCollectionClient {
    client: Client,
    base: Url,
    user_id: u64,
}

impl HttpCollectionClient {
    /// Create a client for the collection at `base_url`.
    ///
    /// `user_id` is sent with every create, as the provider requires.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` can't serve as a
    /// base, or [`ClientError::Transport`] if the HTTP client can't be built.
    pub fn new(base_url: &str, user_id: u64, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_client(timeout)?,
            base: parse_base_url(base_url)?,
            user_id,
        })
    }

    /// `{base}?limit={limit}&skip={offset}`
    pub fn list_url(&self, limit: usize, offset: usize) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("skip", &offset.to_string());
        url
    }

    /// `{base}/search?q={query}`
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint("search");
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    /// `{base}/add`
    pub fn create_url(&self) -> Url {
        self.endpoint("add")
    }

    /// `{base}/{id}`
    pub fn item_url(&self, id: PostId) -> Url {
        self.endpoint(&id.to_string())
    }

    fn endpoint(&self, segment: &str) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        // cannot_be_a_base was rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }
}

impl CollectionApi for HttpCollectionClient {
    fn list(&self, limit: usize, offset: usize) -> Result<ListPage, ClientError> {
        let url = self.list_url(limit, offset);
        let body: CollectionResponse = get_json(&self.client, &url)?;
        let total = body.total.unwrap_or(body.items.len());
        Ok(ListPage {
            items: body.items,
            total,
        })
    }

    fn search(&self, query: &str) -> Result<Vec<Post>, ClientError> {
        let url = self.search_url(query);
        let body: CollectionResponse = get_json(&self.client, &url)?;
        Ok(body.items)
    }

    fn create(&self, title: &str) -> Result<Post, ClientError> {
        let url = self.create_url();
        debug!(%url, "POST");
        let request = self.client.post(url.clone()).json(&CreateBody {
            title,
            user_id: self.user_id,
        });
        let response = send(request, &url)?;
        decode(response, &url)
    }

    fn update(&self, id: PostId, title: &str, tags: &TagSet) -> Result<Post, ClientError> {
        let url = self.item_url(id);
        debug!(%url, "PUT");
        let request = self.client.put(url.clone()).json(&UpdateBody {
            title,
            tags: tags.labels(),
        });
        match send(request, &url) {
            Ok(response) => decode(response, &url),
            Err(ClientError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(ClientError::NotFound { id })
            }
            Err(e) => Err(e),
        }
    }

    fn delete(&self, id: PostId) -> Result<(), ClientError> {
        let url = self.item_url(id);
        debug!(%url, "DELETE");
        match send(self.client.delete(url.clone()), &url) {
            Ok(_) => Ok(()),
            Err(ClientError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                warn!(%id, "delete of unknown post treated as success");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
