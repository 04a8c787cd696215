use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;

use super::form::NewLead;

/// Ways the one network call can go wrong. Both are recoverable: the
/// form stays editable and the visitor may resubmit.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("falha de rede: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("registro recusado pelo servidor ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Append-only sink for lead records. There are no read, update or
/// delete paths for this entity anywhere in the site.
pub trait LeadStore {
    fn insert<'a>(&'a self, lead: &'a NewLead) -> LocalBoxFuture<'a, Result<(), StoreError>>;
}

/// REST client for the remote `leads` collection, built once at startup
/// from [`Config`] and handed to the form component.
#[derive(Clone, PartialEq)]
pub struct SupabaseStore {
    endpoint: String,
    anon_key: String,
}

#[derive(Deserialize)]
struct RejectionBody {
    message: String,
}

impl SupabaseStore {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: format!("{}/rest/v1/leads", config.supabase_url),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    async fn insert_lead(&self, lead: &NewLead) -> Result<(), StoreError> {
        let response = Request::post(&self.endpoint)
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .header("Prefer", "return=minimal")
            .json(lead)?
            .send()
            .await?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        // PostgREST rejections carry a JSON body with a `message` field;
        // anything else is surfaced raw.
        let message = match response.text().await {
            Ok(text) => serde_json::from_str::<RejectionBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text),
            Err(_) => String::new(),
        };
        Err(StoreError::Rejected { status, message })
    }
}

impl LeadStore for SupabaseStore {
    fn insert<'a>(&'a self, lead: &'a NewLead) -> LocalBoxFuture<'a, Result<(), StoreError>> {
        Box::pin(self.insert_lead(lead))
    }
}
