use reqwest::header::AUTHORIZATION;

use super::{BusinessSearch, SearchError, SearchQuery, SearchResponse, SearchResult};

/// HTTP client for the Yelp Fusion business search endpoint. constructed
/// from a [`super::SearchClientConfig`] and passed to whatever needs it.
#[derive(Debug, Clone)]
pub struct YelpSearchClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl YelpSearchClient {
    pub fn new(http: reqwest::Client, endpoint: String, api_key: String) -> Self {
        Self {
            http,
            endpoint,
            api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// searches for food businesses around a location.
    ///
    /// # Arguments
    /// * latitude - degrees north, not range-checked
    /// * longitude - degrees east, not range-checked
    ///
    /// # Result
    /// the businesses in API order, or a network or decode error. the
    /// request is never retried.
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<SearchResult, SearchError> {
        self.fetch_query(&SearchQuery::new(latitude, longitude))
            .await
    }

    pub async fn fetch_query(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        let url = query.to_url(&self.endpoint)?;
        log::debug!("business search GET {url}");

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|source| SearchError::NetworkError { source })?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| SearchError::NetworkError { source })?;

        match SearchResponse::from_slice(&body) {
            Ok(decoded) => {
                log::debug!(
                    "business search returned {} businesses",
                    decoded.businesses.len()
                );
                Ok(decoded.into())
            }
            // error payloads are not search responses, report the status instead
            Err(_) if !status.is_success() => Err(SearchError::ApiStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            }),
            Err(e) => Err(e),
        }
    }

    /// runs [`YelpSearchClient::fetch`] to completion on a private
    /// current-thread runtime. must not be called from within a runtime.
    pub fn fetch_blocking(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<SearchResult, SearchError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                SearchError::TokioError(format!("failure creating async rust tokio runtime: {e}"))
            })?;
        runtime.block_on(self.fetch(latitude, longitude))
    }
}

impl BusinessSearch for YelpSearchClient {
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl std::future::Future<Output = Result<SearchResult, SearchError>> + Send {
        self.fetch_query(query)
    }
}

#[cfg(test)]
mod test {
    use crate::search::{SearchClientConfig, SearchError, YelpSearchClient};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    const ONE_BUSINESS: &str = r#"{"businesses": [{
        "id": "shake-shack-theater-district",
        "name": "Shake Shack",
        "price": "$$",
        "categories": [{"alias": "burgers", "title": "Burgers"}],
        "coordinates": {"latitude": 40.7592, "longitude": -73.9868},
        "distance": 120.5,
        "image_url": "",
        "phone": "+16468336690",
        "url": "https://www.yelp.com/biz/shake-shack-theater-district"
    }]}"#;

    /// serves a single canned HTTP response on a local port. the raw request
    /// text is sent back through the returned channel.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let request = String::from_utf8_lossy(&buf).into_owned();
            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            let _ = tx.send(request);
        });
        (format!("http://{addr}/v3/businesses/search"), rx)
    }

    fn client(endpoint: &str) -> YelpSearchClient {
        // local listener only, keep proxy settings from the environment out of it
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        YelpSearchClient::new(http, endpoint.to_string(), String::from("test-key"))
    }

    #[tokio::test]
    async fn test_fetch_sends_query_and_bearer_token() {
        let (endpoint, request) = serve_once("HTTP/1.1 200 OK", ONE_BUSINESS).await;
        let result = client(&endpoint).fetch(40.758896, -73.98513).await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Shake Shack");

        let request = request.await.unwrap();
        let request_line = request.lines().next().unwrap();
        assert_eq!(
            request_line,
            "GET /v3/businesses/search?latitude=40.758896&longitude=-73.98513&radius=1000&categories=pizza,mexican,chinese,burgers&sort_by=distance HTTP/1.1"
        );
        assert!(request
            .lines()
            .any(|l| l.eq_ignore_ascii_case("authorization: Bearer test-key")));
    }

    #[tokio::test]
    async fn test_fetch_decode_error() {
        let (endpoint, _request) =
            serve_once("HTTP/1.1 200 OK", r#"{"businesses": [{"id": 1}]}"#).await;
        let result = client(&endpoint).fetch(1.0, 2.0).await;
        assert!(matches!(result, Err(SearchError::DecodeError { .. })));
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let body = r#"{"error": {"code": "TOKEN_INVALID", "description": "Invalid access token or authorization header."}}"#;
        let (endpoint, _request) = serve_once("HTTP/1.1 401 Unauthorized", body).await;
        match client(&endpoint).fetch(1.0, 2.0).await {
            Err(SearchError::ApiStatus { status, body }) => {
                assert_eq!(status, 401);
                assert!(body.contains("TOKEN_INVALID"));
            }
            other => panic!("expected status error, found {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_network_error() {
        // bind then drop so nothing is listening on the port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let result = client(&format!("http://{addr}/search")).fetch(1.0, 2.0).await;
        assert!(matches!(result, Err(SearchError::NetworkError { .. })));
    }

    #[test]
    #[ignore = "requires FOODZ_API_KEY and network access"]
    fn test_live_search() {
        let api_key = std::env::var("FOODZ_API_KEY").unwrap();
        let result = SearchClientConfig::new(&api_key)
            .build()
            .unwrap()
            .fetch_blocking(40.758896, -73.985130)
            .unwrap();
        println!("Businesses Length: {}", result.len());
        assert!(!result.is_empty());
        assert!(result
            .windows(2)
            .all(|w| w[0].distance_meters <= w[1].distance_meters));
    }
}
