//! HTTP 传输层
//!
//! `fetch` transport for the client core. Credentials are included so the
//! backend session cookie rides along, and an `AbortController` enforces the
//! configured timeout.

use async_trait::async_trait;
use gloo_net::http::{Method, RequestBuilder};
use gloo_timers::callback::Timeout;
use riyadah_client::shared::protocol::HttpMethod;
use riyadah_client::{HttpClient, HttpRequest, HttpResponse, TransportError};
use std::cell::Cell;
use std::rc::Rc;
use web_sys::{AbortController, RequestCredentials};

fn method(m: HttpMethod) -> Method {
    match m {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

#[async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let controller = AbortController::new()
            .map_err(|e| TransportError::Request(format!("AbortController: {:?}", e)))?;

        // 超时后中止请求，并记下是超时而不是网络错误
        let timed_out = Rc::new(Cell::new(false));
        let _timer = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            let millis = u32::try_from(req.timeout.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || {
                timed_out.set(true);
                controller.abort();
            })
        };
        let failure = |e: gloo_net::Error| {
            if timed_out.get() {
                TransportError::Timeout
            } else {
                TransportError::Network(e.to_string())
            }
        };

        let signal = controller.signal();
        let mut builder = RequestBuilder::new(&req.url)
            .method(method(req.method))
            .abort_signal(Some(&signal));

        if req.with_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }

        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Request(e.to_string()))?;

        let resp = request.send().await.map_err(failure)?;
        let status = resp.status();
        let body = resp.text().await.map_err(failure)?;

        // _timer 在此处 drop，定时器随之取消
        Ok(HttpResponse { status, body })
    }
}
