// src/api/client.rs

//! HTTP client for the recipe service
//!
//! A thin wrapper around reqwest's blocking client. Each call is one
//! request: no retry, no backoff. Non-success statuses are errors. Update
//! and delete succeed on any 2xx status whatever the body holds.

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::RecipeApi;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::recipe::{Recipe, RecipeFields, RecipeId};

/// Collection path, relative to the base URL
const COLLECTION: &str = "receitas";

/// Recipe service reached over HTTP
pub struct HttpRecipeApi {
    client: Client,
    base: Url,
}

impl HttpRecipeApi {
    /// Create a client for the configured service
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base = config.base_url()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("receitas/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, base })
    }

    /// Base URL every endpoint hangs off
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `{base}/receitas`
    pub fn collection_url(&self) -> Result<Url> {
        self.base.join(COLLECTION).map_err(|e| Error::InvalidUrl {
            url: self.base.to_string(),
            reason: e.to_string(),
        })
    }

    /// `{base}/receitas/{id}`, with the id escaped as one path segment
    pub fn item_url(&self, id: &RecipeId) -> Result<Url> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl {
                url: self.base.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .push(id.as_str());
        Ok(url)
    }

    fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response> {
        let response = request.send().map_err(|e| Error::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !response.status().is_success() {
            return Err(Error::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    /// Body text; an unreadable body is logged and read as empty
    fn read_text(response: Response) -> String {
        response.text().unwrap_or_else(|e| {
            debug!("Failed to read response body: {}", e);
            String::new()
        })
    }

    /// Decode a body the caller depends on
    fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T> {
        let text = response.text().map_err(|e| Error::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| Error::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

impl RecipeApi for HttpRecipeApi {
    fn list(&self) -> Result<Vec<Recipe>> {
        let url = self.collection_url()?;
        debug!("GET {}", url);

        let response = self.send(self.client.get(url.clone()), &url)?;
        let recipes: Vec<Recipe> = Self::decode(response, &url)?;

        debug!("Fetched {} recipes", recipes.len());
        Ok(recipes)
    }

    fn create(&self, fields: &RecipeFields) -> Result<Recipe> {
        let url = self.collection_url()?;
        debug!("POST {}", url);

        let response = self.send(self.client.post(url.clone()).json(fields), &url)?;
        let recipe: Recipe = Self::decode(response, &url)?;
        debug!("Created recipe {}", recipe.id);
        Ok(recipe)
    }

    /// Any 2xx status is success; the body only matters if it is a recipe
    fn update(&self, id: &RecipeId, fields: &RecipeFields) -> Result<Option<Recipe>> {
        let url = self.item_url(id)?;
        debug!("PATCH {} {:?}", url, fields);

        let response = self.send(self.client.patch(url.clone()).json(fields), &url)?;
        let body = Self::read_text(response);
        debug!("Update response: {}", body);

        match serde_json::from_str::<Recipe>(&body) {
            Ok(recipe) => Ok(Some(recipe)),
            Err(e) => {
                debug!("Update response is not a recipe: {}", e);
                Ok(None)
            }
        }
    }

    fn delete(&self, id: &RecipeId) -> Result<()> {
        let url = self.item_url(id)?;
        debug!("DELETE {}", url);

        let response = self.send(self.client.delete(url.clone()), &url)?;
        debug!("Delete response: {}", Self::read_text(response));
        Ok(())
    }
}
