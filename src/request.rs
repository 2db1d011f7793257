//! Gateway request invoker
//!
//! Every call follows the same path: issue a ticket, signal busy, build the
//! GET with the credential headers, send it through a [`Transport`], turn the
//! response into an [`Outcome`], publish it, and signal done. Nothing here
//! returns an error to the caller; failures end up as `Outcome::Failure` text.

use crate::config::GatewayConfig;
use crate::types::{Outcome, RawResponse, RequestDescriptor, Ticket};
use async_trait::async_trait;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, CACHE_CONTROL, CONTENT_TYPE, PRAGMA,
};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    InvalidUrl(String),
    InvalidHeader(String),
    Transport(String),
    Body(String),
}

impl fmt::Display for InvokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvokeError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            InvokeError::InvalidHeader(msg) => write!(f, "Invalid header: {}", msg),
            InvokeError::Transport(msg) => write!(f, "Request failed: {}", msg),
            InvokeError::Body(msg) => write!(f, "Failed to read response body: {}", msg),
        }
    }
}

impl std::error::Error for InvokeError {}

/// Hooks bracketing a single invocation
///
/// `before_send` and `complete` are each called exactly once per ticket,
/// with `publish` in between, whatever the outcome.
pub trait RequestLifecycle: Send + Sync {
    fn before_send(&self, ticket: Ticket);
    fn publish(&self, ticket: Ticket, outcome: &Outcome);
    fn complete(&self, ticket: Ticket);
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: reqwest::Request) -> Result<RawResponse, InvokeError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, InvokeError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| InvokeError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: reqwest::Request) -> Result<RawResponse, InvokeError> {
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| InvokeError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| InvokeError::Body(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

pub struct Invoker<T = ReqwestTransport> {
    gateway: Arc<GatewayConfig>,
    transport: T,
    next_ticket: AtomicU64,
}

impl Invoker<ReqwestTransport> {
    /// Invoker backed by a real HTTP client honoring the configured timeout
    pub fn from_config(gateway: Arc<GatewayConfig>) -> Result<Self, InvokeError> {
        let transport = ReqwestTransport::new(gateway.timeout_secs.map(Duration::from_secs))?;
        Ok(Self::new(gateway, transport))
    }
}

impl<T: Transport> Invoker<T> {
    pub fn new(gateway: Arc<GatewayConfig>, transport: T) -> Self {
        Self {
            gateway,
            transport,
            next_ticket: AtomicU64::new(1),
        }
    }

    pub fn gateway(&self) -> &GatewayConfig {
        &self.gateway
    }

    pub fn request_url(&self, descriptor: &RequestDescriptor) -> String {
        build_url(
            &self.gateway.base_url,
            &descriptor.path,
            &descriptor.parameter,
        )
    }

    /// Build the outbound GET without sending it
    pub fn build_request(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<reqwest::Request, InvokeError> {
        let url_string = self.request_url(descriptor);
        let url = reqwest::Url::parse(&url_string)
            .map_err(|e| InvokeError::InvalidUrl(format!("{}: {}", url_string, e)))?;

        let mut request = reqwest::Request::new(reqwest::Method::GET, url);
        *request.headers_mut() = self.headers()?;

        Ok(request)
    }

    fn headers(&self) -> Result<HeaderMap, InvokeError> {
        let mut headers = HeaderMap::new();

        headers.insert(
            header_name(&self.gateway.client_id_header)?,
            header_value(&self.gateway.client_id)?,
        );
        headers.insert(
            header_name(&self.gateway.client_secret_header)?,
            header_value(&self.gateway.client_secret)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        Ok(headers)
    }

    /// Hand out the next ticket; numbering follows call order
    pub fn issue_ticket(&self) -> Ticket {
        Ticket(self.next_ticket.fetch_add(1, Ordering::Relaxed))
    }

    /// Run one GET to completion, reporting through `lifecycle`
    pub async fn invoke(
        &self,
        descriptor: &RequestDescriptor,
        lifecycle: &dyn RequestLifecycle,
    ) -> Outcome {
        let ticket = self.issue_ticket();
        self.invoke_ticketed(ticket, descriptor, lifecycle).await
    }

    /// Like [`Invoker::invoke`] with a ticket the caller already took
    pub async fn invoke_ticketed(
        &self,
        ticket: Ticket,
        descriptor: &RequestDescriptor,
        lifecycle: &dyn RequestLifecycle,
    ) -> Outcome {
        lifecycle.before_send(ticket);

        let outcome = match self.build_request(descriptor) {
            Ok(request) => {
                debug!(%ticket, url = %request.url(), "GET");
                classify(self.transport.send(request).await)
            }
            Err(e) => classify(Err(e)),
        };

        info!(
            %ticket,
            path = %descriptor.path,
            status = ?outcome.status(),
            success = outcome.is_success(),
            "request finished"
        );

        lifecycle.publish(ticket, &outcome);
        lifecycle.complete(ticket);
        debug!(%ticket, "complete GET");

        outcome
    }
}

/// Executes a request on the runtime without blocking the caller
pub fn execute_request_background<T, L>(
    invoker: Arc<Invoker<T>>,
    descriptor: RequestDescriptor,
    lifecycle: Arc<L>,
) -> JoinHandle<Outcome>
where
    T: Transport + 'static,
    L: RequestLifecycle + 'static,
{
    // issued before the spawn so tickets follow call order
    let ticket = invoker.issue_ticket();
    tokio::spawn(async move {
        invoker
            .invoke_ticketed(ticket, &descriptor, lifecycle.as_ref())
            .await
    })
}

/// Literal concatenation; callers own the slashes
pub fn build_url(base_url: &str, path: &str, parameter: &str) -> String {
    format!("{}{}{}", base_url, path, parameter)
}

/// Sort a transport result into success or failure
pub fn classify(result: Result<RawResponse, InvokeError>) -> Outcome {
    match result {
        Ok(RawResponse { status: 204, .. }) => Outcome::Success {
            status: 204,
            text: String::new(),
        },
        Ok(RawResponse { status, body }) if (200..300).contains(&status) => {
            match pretty_json(&body) {
                Some(text) => Outcome::Success { status, text },
                None => Outcome::Failure {
                    status: Some(status),
                    text: body,
                },
            }
        }
        Ok(RawResponse { status, body }) => Outcome::Failure {
            status: Some(status),
            text: body,
        },
        Err(e) => Outcome::Failure {
            status: None,
            text: e.to_string(),
        },
    }
}

/// Re-serialize a JSON document with 4-space indentation, keeping key order.
/// Returns `None` when the body isn't JSON.
pub fn pretty_json(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer).ok()?;

    String::from_utf8(buf).ok()
}

fn header_name(name: &str) -> Result<HeaderName, InvokeError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| InvokeError::InvalidHeader(format!("{}: {}", name, e)))
}

fn header_value(value: &str) -> Result<HeaderValue, InvokeError> {
    // names only in the message; values are credentials
    HeaderValue::from_str(value).map_err(|e| InvokeError::InvalidHeader(e.to_string()))
}
