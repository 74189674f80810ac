//! HTTP client abstraction for testability

use std::time::Duration;

use super::types::ProviderError;

/// Default timeout for a single tile request.
///
/// Tile servers answer in well under a second when they answer at all; a
/// slow tile is left blank rather than holding up the whole mosaic.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Default User-Agent string for HTTP requests.
/// Some public tile servers reject requests without a browser-like User-Agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";

/// Trait for HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError>;
}

impl<C: HttpClient + ?Sized> HttpClient for Box<C> {
    fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        (**self).get(url)
    }
}

impl<C: HttpClient + ?Sized> HttpClient for std::sync::Arc<C> {
    fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        (**self).get(url)
    }
}

/// Real HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with the default timeout and User-Agent.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_options(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Creates a new ReqwestClient with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ProviderError> {
        Self::with_options(timeout, DEFAULT_USER_AGENT)
    }

    /// Creates a new ReqwestClient with custom timeout and User-Agent.
    pub fn with_options(timeout: Duration, user_agent: &str) -> Result<Self, ProviderError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                ProviderError::HttpError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        let response = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(url.to_string())
            } else {
                ProviderError::HttpError(format!("Request failed: {}", e))
            }
        })?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        // Read response body
        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| ProviderError::HttpError(format!("Failed to read response: {}", e)))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    type Responder = Box<dyn Fn(&str) -> Result<Vec<u8>, ProviderError> + Send + Sync>;

    /// Mock HTTP client that records every requested URL.
    pub struct MockHttpClient {
        responder: Responder,
        requests: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        /// Answers every request with the same body.
        pub fn ok(body: Vec<u8>) -> Self {
            Self::from_fn(move |_| Ok(body.clone()))
        }

        /// Fails every request with the same error.
        pub fn failing(error: ProviderError) -> Self {
            Self::from_fn(move |_| Err(error.clone()))
        }

        /// Answers each request by calling `f` with the URL.
        pub fn from_fn<F>(f: F) -> Self
        where
            F: Fn(&str) -> Result<Vec<u8>, ProviderError> + Send + Sync + 'static,
        {
            Self {
                responder: Box::new(f),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// URLs requested so far, in order.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
            self.requests.lock().unwrap().push(url.to_string());
            (self.responder)(url)
        }
    }

    #[test]
    fn test_mock_client_success() {
        let mock = MockHttpClient::ok(vec![1, 2, 3, 4]);

        let result = mock.get("http://example.com");
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(mock.requests(), vec!["http://example.com".to_string()]);
    }

    #[test]
    fn test_mock_client_error() {
        let mock = MockHttpClient::failing(ProviderError::HttpError("Test error".to_string()));

        let result = mock.get("http://example.com");
        assert!(result.is_err());
    }

    #[test]
    fn test_boxed_client_delegates() {
        let boxed: Box<dyn HttpClient> = Box::new(MockHttpClient::ok(vec![9]));
        assert_eq!(boxed.get("http://example.com").unwrap(), vec![9]);
    }

    #[test]
    fn test_reqwest_client_builds() {
        assert!(ReqwestClient::new().is_ok());
        assert!(ReqwestClient::with_timeout(Duration::from_millis(250)).is_ok());
    }
}
