use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use std::time::Instant;

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    // Route templates keep label cardinality bounded; raw barcodes would not.
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status().as_u16().to_string();

    let labels = [("method", method), ("path", path), ("status", status)];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, middleware::from_fn, routing::get, Router};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::util::ServiceExt;

    async fn call(router: Router, uri: &str) -> u16 {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        router.oneshot(request).await.unwrap().status().as_u16()
    }

    #[test]
    fn requests_are_labelled_by_route_template() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let router = Router::new()
            .route("/labels/:barcodeId", get(|| async { "ok" }))
            .layer(from_fn(metrics_middleware));

        // The local recorder is thread-bound; a current-thread runtime keeps
        // the request on this thread.
        metrics::with_local_recorder(&recorder, || {
            runtime.block_on(async {
                assert_eq!(call(router.clone(), "/labels/B123").await, 200);
                assert_eq!(call(router, "/nowhere").await, 404);
            })
        });

        let rendered = handle.render();
        assert!(rendered.contains("http_requests_total"), "{rendered}");
        assert!(rendered.contains("http_request_duration_seconds"), "{rendered}");
        assert!(rendered.contains(r#"path="/labels/:barcodeId""#), "{rendered}");
        assert!(rendered.contains(r#"path="unmatched""#), "{rendered}");
        assert!(!rendered.contains("B123"), "{rendered}");
    }
}
