use anyhow::{anyhow, bail, Result};
use http_body_util::{BodyExt, Full};
use hyper::{
    body::{Bytes, Incoming},
    header::HeaderMap,
    Method, Request, StatusCode,
};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use speech_studio::domain::history::Generation;
use speech_studio::domain::studio::StudioState;

/// Thin HTTP client bound to one running studio server
#[derive(Clone)]
pub struct TestClient {
    base_url: String,
    http: Client<HttpConnector, Full<Bytes>>,
}

impl TestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            http: Client::builder(TokioExecutor::new()).build_http(),
        }
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.send(Method::GET, path, Bytes::new(), &[]).await
    }

    pub async fn get_with_headers(&self, path: &str, headers: &[(&str, &str)]) -> Result<ApiResponse> {
        self.send(Method::GET, path, Bytes::new(), headers).await
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<ApiResponse> {
        let bytes = Bytes::from(serde_json::to_vec(body)?);
        self.send(Method::POST, path, bytes, &[("content-type", "application/json")])
            .await
    }

    pub async fn post_empty(&self, path: &str) -> Result<ApiResponse> {
        self.send(Method::POST, path, Bytes::new(), &[]).await
    }

    /// POST /api/speech and decode the generation, failing on any non-200
    pub async fn speak(&self, text: &str, voice: &str, speed: f32) -> Result<Generation> {
        let response = self
            .post("/api/speech", &json!({ "text": text, "voice": voice, "speed": speed }))
            .await?;
        if response.status != StatusCode::OK {
            bail!("speech request failed with {}: {:?}", response.status, response.body);
        }
        response.json()
    }

    /// GET /api/studio as a typed snapshot
    pub async fn studio(&self) -> Result<StudioState> {
        self.get("/api/studio").await?.json()
    }

    /// Open a server-sent event stream; fails unless the server answers 200
    pub async fn open_events(&self, path: &str) -> Result<EventStream> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(format!("{}{}", self.base_url, path))
            .header("accept", "text/event-stream")
            .body(Full::new(Bytes::new()))?;

        let response = self.http.request(request).await?;
        if response.status() != StatusCode::OK {
            bail!("event stream refused with {}", response.status());
        }

        Ok(EventStream {
            body: response.into_body(),
            buffer: String::new(),
        })
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Bytes,
        headers: &[(&str, &str)],
    ) -> Result<ApiResponse> {
        let mut builder = Request::builder()
            .method(method)
            .uri(format!("{}{}", self.base_url, path));
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let response = self.http.request(builder.body(Full::new(body))?).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await?.to_bytes().to_vec();

        Ok(ApiResponse {
            status,
            body: serde_json::from_slice(&bytes).ok(),
            body_bytes: bytes,
            headers,
        })
    }
}

/// Buffered response: status, headers, raw bytes and the JSON view of them if any
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
    pub body_bytes: Vec<u8>,
    pub headers: HeaderMap,
}

impl ApiResponse {
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status, expected,
            "unexpected status, body: {:?}",
            self.body
        );
        self
    }

    /// Error bodies are `{ "message": ... }`
    pub fn assert_error_message(&self, fragment: &str) -> &Self {
        let message = self.body()["message"].as_str().unwrap_or_default();
        assert!(
            message.contains(fragment),
            "error message {:?} does not contain {:?}",
            message,
            fragment
        );
        self
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body_bytes)?)
    }

    pub fn body(&self) -> &Value {
        self.body.as_ref().expect("response has no JSON body")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn assert_header_exists(&self, name: &str) -> &Self {
        assert!(self.header(name).is_some(), "missing header {}", name);
        self
    }
}

/// Reads `data:` payloads off an open event stream, skipping keep-alive comments
pub struct EventStream {
    body: Incoming,
    buffer: String,
}

impl EventStream {
    pub async fn next_event(&mut self) -> Result<Value> {
        loop {
            if let Some(end) = self.buffer.find("\n\n") {
                let block: String = self.buffer.drain(..end + 2).collect();
                let data = block
                    .lines()
                    .filter_map(|line| line.strip_prefix("data:"))
                    .map(str::trim_start)
                    .collect::<Vec<_>>()
                    .join("\n");
                if data.is_empty() {
                    continue;
                }
                return Ok(serde_json::from_str(&data)?);
            }

            let frame = self
                .body
                .frame()
                .await
                .ok_or_else(|| anyhow!("event stream closed"))??;
            if let Ok(chunk) = frame.into_data() {
                self.buffer.push_str(&String::from_utf8_lossy(&chunk));
            }
        }
    }
}
