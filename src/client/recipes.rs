//! Recipe catalogue client.

use super::http::{build_client, get_json, parse_base_url};
use super::RecipeApi;
use crate::model::{ClientError, Recipe};
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct RecipesResponse {
    recipes: Vec<Recipe>,
}

/// [`RecipeApi`] over HTTP: one `GET` of the whole catalogue.
#[derive(Debug, Clone)]
pub struct HttpRecipeClient {
    client: Client,
    url: Url,
}

impl HttpRecipeClient {
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] for an unusable URL.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_client(timeout)?,
            url: parse_base_url(url)?,
        })
    }
}

impl RecipeApi for HttpRecipeClient {
    fn recipes(&self) -> Result<Vec<Recipe>, ClientError> {
        let body: RecipesResponse = get_json(&self.client, &self.url)?;
        Ok(body.recipes)
    }
}
