//! # Todo-list API client
//!
//! Thin client over the todo-list REST API. Every call is authenticated with
//! the end user's own bearer token, passed in as a complete `Authorization`
//! header value (`Bearer <token>`) because inbound platform webhooks already
//! carry it in that form.
//!
//! ## API Coverage
//!
//! - `GET /api/v1/list` - all lists of the user, with items
//! - `GET /api/v1/list/{id}` - a single list, with items
//! - `POST /api/v1/list/{id}/item` - create an item on a list
//! - `POST /api/v1/webhook` - register the user's webhook
//! - `DELETE /api/v1/webhook` - deregister the user's webhook
//!
//! Non-2xx responses are returned as `reqwest::Error` via `error_for_status`.
//! Nothing is retried.

use reqwest::{Client, Method, RequestBuilder, header::AUTHORIZATION};

use crate::{
    info,
    types::{CreateItemRequest, RegisterWebhookRequest, TodoList},
};

#[derive(Debug, Clone)]
pub struct TodolistClient {
    client: Client,
    base_url: String,
}

impl TodolistClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Builds a request for `resource` carrying the caller's authorization.
    fn request(&self, method: Method, resource: &str, authorization: &str) -> RequestBuilder {
        let url = format!(
            "{base}{resource}",
            base = self.base_url.trim_end_matches('/'),
            resource = resource
        );
        info!("todolist {} {}", method, url);
        self.client
            .request(method, url)
            .header(AUTHORIZATION, authorization)
    }

    pub async fn get_lists(&self, authorization: &str) -> Result<Vec<TodoList>, reqwest::Error> {
        self.request(Method::GET, "/api/v1/list", authorization)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<TodoList>>()
            .await
    }

    pub async fn get_list(
        &self,
        list_id: &str,
        authorization: &str,
    ) -> Result<TodoList, reqwest::Error> {
        let resource = format!("/api/v1/list/{id}", id = list_id);
        self.request(Method::GET, &resource, authorization)
            .send()
            .await?
            .error_for_status()?
            .json::<TodoList>()
            .await
    }

    pub async fn create_item(
        &self,
        list_id: &str,
        title: &str,
        authorization: &str,
    ) -> Result<(), reqwest::Error> {
        let resource = format!("/api/v1/list/{id}/item", id = list_id);
        self.request(Method::POST, &resource, authorization)
            .json(&CreateItemRequest {
                title: title.to_string(),
            })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Points the user's todo-list events at `url`.
    pub async fn register_webhook(
        &self,
        url: &str,
        authorization: &str,
    ) -> Result<(), reqwest::Error> {
        self.request(Method::POST, "/api/v1/webhook", authorization)
            .json(&RegisterWebhookRequest {
                url: url.to_string(),
            })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn deregister_webhook(&self, authorization: &str) -> Result<(), reqwest::Error> {
        self.request(Method::DELETE, "/api/v1/webhook", authorization)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
