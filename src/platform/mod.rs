//! # Platform API client
//!
//! Client for the home-automation platform's unit, state and channel-account
//! endpoints. Unlike the todo-list API, every call here is authenticated with
//! the single static channel token from the configuration.
//!
//! ## API Coverage
//!
//! - `PUT /api/v1/channelaccounts/{ca}/units` - replace all units of an account
//! - `POST /api/v1/channelaccounts/{ca}/units` - add one unit
//! - `PATCH /api/v1/channelaccounts/{ca}/units?updateOnly=true` - update matching units
//! - `DELETE /api/v1/channelaccounts/{ca}/units?internalId={id}` - delete matching units
//! - `PUT /api/v1/state/channels/{channel}/units` - bulk state report
//! - `PUT /api/v1/state/channels/{channel}/units/{internalId}` - single unit state
//! - `GET /api/v1/channelaccounts/{ca}?freshTokens=true` - account with a current access token

use reqwest::{Client, Method, RequestBuilder};

use crate::{
    info,
    types::{ChannelAccount, ItemStateUpdate, StateReport, Unit},
};

#[derive(Debug, Clone)]
pub struct PlatformClient {
    client: Client,
    base_url: String,
    channel_id: String,
    token: String,
}

impl PlatformClient {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        channel_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            channel_id: channel_id.into(),
            token: token.into(),
        }
    }

    fn request(&self, method: Method, resource: &str) -> RequestBuilder {
        let url = format!(
            "{base}{resource}",
            base = self.base_url.trim_end_matches('/'),
            resource = resource
        );
        info!("platform {} {}", method, url);
        self.client.request(method, url).bearer_auth(&self.token)
    }

    fn units_resource(channel_account_id: &str) -> String {
        format!("/api/v1/channelaccounts/{ca}/units", ca = channel_account_id)
    }

    /// Registers the full set of units for an account in one call.
    pub async fn put_units(
        &self,
        channel_account_id: &str,
        units: &[Unit],
    ) -> Result<(), reqwest::Error> {
        self.request(Method::PUT, &Self::units_resource(channel_account_id))
            .json(units)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn add_unit(&self, channel_account_id: &str, unit: &Unit) -> Result<(), reqwest::Error> {
        self.request(Method::POST, &Self::units_resource(channel_account_id))
            .json(unit)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Updates units matched by `internalId`. With `updateOnly` set the
    /// platform never creates a unit that has no match.
    pub async fn update_units(
        &self,
        channel_account_id: &str,
        units: &[Unit],
    ) -> Result<(), reqwest::Error> {
        self.request(Method::PATCH, &Self::units_resource(channel_account_id))
            .query(&[("updateOnly", "true")])
            .json(units)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn delete_units(
        &self,
        channel_account_id: &str,
        internal_id: &str,
    ) -> Result<(), reqwest::Error> {
        self.request(Method::DELETE, &Self::units_resource(channel_account_id))
            .query(&[("internalId", internal_id)])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn push_states(&self, reports: &[StateReport]) -> Result<(), reqwest::Error> {
        let resource = format!(
            "/api/v1/state/channels/{channel}/units",
            channel = self.channel_id
        );
        self.request(Method::PUT, &resource)
            .json(reports)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn push_unit_state(
        &self,
        internal_id: &str,
        update: &ItemStateUpdate,
    ) -> Result<(), reqwest::Error> {
        let resource = format!(
            "/api/v1/state/channels/{channel}/units/{internal_id}",
            channel = self.channel_id,
            internal_id = internal_id
        );
        self.request(Method::PUT, &resource)
            .json(update)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Fetches a channel account, asking the platform to refresh its tokens
    /// so the returned access token is usable against the todo-list API.
    pub async fn get_channel_account(
        &self,
        channel_account_id: &str,
    ) -> Result<ChannelAccount, reqwest::Error> {
        let resource = format!("/api/v1/channelaccounts/{ca}", ca = channel_account_id);
        self.request(Method::GET, &resource)
            .query(&[("freshTokens", "true")])
            .send()
            .await?
            .error_for_status()?
            .json::<ChannelAccount>()
            .await
    }
}
