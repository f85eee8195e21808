//! GraphQL food endpoint client
//!
//! Sends the `autocompleteFoodItem` and `getFoodDetail` queries as JSON POST bodies and
//! unwraps the `data` / `errors` envelope.

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ProviderError;
use crate::food::{FoodDetail, Suggestion};

const AUTOCOMPLETE_QUERY: &str = "query AutocompleteFoodItem($searchTerm: String!) { \
     autocompleteFoodItem(searchTerm: $searchTerm) { name imageUrl } }";

const FOOD_DETAIL_QUERY: &str = "query GetFoodDetail($foodName: String!) { \
     getFoodDetail(foodName: $foodName) { food_name serving_qty serving_unit nf_calories imageUrl } }";

const AUTOCOMPLETE_FIELD: &str = "autocompleteFoodItem";
const FOOD_DETAIL_FIELD: &str = "getFoodDetail";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

/// GraphQL client for the food endpoint
#[derive(Debug)]
pub struct GraphqlClient {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl GraphqlClient {
    pub fn new(
        endpoint: String,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::NotConfigured(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Suggestion>, ProviderError> {
        let variables = serde_json::json!({ "searchTerm": term });
        let body = self.post(AUTOCOMPLETE_QUERY, variables).await?;
        parse_suggestions(&body)
    }

    pub async fn fetch_detail(&self, name: &str) -> Result<FoodDetail, ProviderError> {
        let variables = serde_json::json!({ "foodName": name });
        let body = self.post(FOOD_DETAIL_QUERY, variables).await?;
        parse_detail(&body, name)
    }

    /// POST a query and return the raw response body of a successful status
    async fn post(&self, query: &str, variables: Value) -> Result<String, ProviderError> {
        let request_body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let mut request = self.client.post(&self.endpoint).json(&request_body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::Api {
                code: status.as_u16(),
                message: text,
            });
        }

        Ok(text)
    }
}

/// Parse an `autocompleteFoodItem` response; a null field means no matches
pub(crate) fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, ProviderError> {
    Ok(parse_field::<Vec<Suggestion>>(body, AUTOCOMPLETE_FIELD)?.unwrap_or_default())
}

/// Parse a `getFoodDetail` response; a null field means the food is unknown
pub(crate) fn parse_detail(body: &str, name: &str) -> Result<FoodDetail, ProviderError> {
    parse_field::<FoodDetail>(body, FOOD_DETAIL_FIELD)?
        .ok_or_else(|| ProviderError::NotFound(name.to_string()))
}

fn parse_field<T: DeserializeOwned>(body: &str, field: &str) -> Result<Option<T>, ProviderError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| ProviderError::Parse(e.to_string()))?;

    if !envelope.errors.is_empty() {
        let messages: Vec<&str> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(ProviderError::Graphql(messages.join("; ")));
    }

    let data = envelope
        .data
        .ok_or_else(|| ProviderError::Parse("response has no data".to_string()))?;

    match data.get(field) {
        None => Err(ProviderError::Parse(format!("response has no {} field", field))),
        Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| ProviderError::Parse(e.to_string())),
    }
}

#[cfg(test)]
#[path = "graphql_tests.rs"]
mod graphql_tests;
