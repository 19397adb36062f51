use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use recipe_finder::{router, ApiKey, AppState, SpoonacularClient};
use tower::ServiceExt;

pub fn app_for(server: &mockito::Server) -> Router {
    app_with_base_url(&server.url())
}

pub fn app_with_base_url(base_url: &str) -> Router {
    let client = SpoonacularClient::builder()
        .api_key(ApiKey::new("test-key"))
        .base_url(base_url)
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap();

    router(AppState::new(client))
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
