use std::fmt::Debug;

/// The parts of an HTTP response the users slice cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level outcome; the error is the backend's message.
pub type FetchResult = Result<HttpResponse, String>;

pub type OnDone = Box<dyn FnOnce(FetchResult) + Send + 'static>;

pub trait FetchService: Send + Sync + Debug {
    /// Issues a GET for `url`, calling `on_done` exactly once, possibly from
    /// another thread.
    fn get(&self, url: &str, on_done: OnDone);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn get(&self, url: &str, on_done: OnDone) {
        let request = ehttp::Request::get(url);
        ehttp::fetch(request, move |result| {
            on_done(result.map(|response| HttpResponse {
                status: response.status,
                body: response.bytes,
            }));
        });
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockFetcher;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::{FetchResult, FetchService, HttpResponse, OnDone};

    /// Answers every request synchronously with a canned result.
    #[derive(Debug)]
    pub struct MockFetcher {
        response: FetchResult,
        calls: AtomicUsize,
    }

    impl MockFetcher {
        pub fn new(response: FetchResult) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn json(status: u16, body: &serde_json::Value) -> Self {
            Self::new(Ok(HttpResponse {
                status,
                body: body.to_string().into_bytes(),
            }))
        }

        pub fn failing(message: impl Into<String>) -> Self {
            Self::new(Err(message.into()))
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl FetchService for MockFetcher {
        fn get(&self, _url: &str, on_done: OnDone) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            on_done(self.response.clone());
        }
    }
}
