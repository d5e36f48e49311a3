//! # Node Wiring
//!
//! The node-runtime wiring against fake password and search services on
//! loopback, so the real reqwest adapters are on the path.

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use node_runtime::{load_config_from, UserDirectoryNode};
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use shared_types::IndexUserRequest;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn encryption_service() -> Router {
        Router::new()
            .route(
                "/password",
                post(|Json(body): Json<Value>| async move {
                    let password = body["password"].as_str().unwrap_or_default().to_string();
                    Json(json!({ "hashedPassword": format!("bcrypt:{password}") }))
                }),
            )
            .route(
                "/password/validation",
                post(|Json(body): Json<Value>| async move {
                    let expected = format!("bcrypt:{}", body["password"].as_str().unwrap_or_default());
                    Json(body["hashedPassword"].as_str() == Some(expected.as_str()))
                }),
            )
    }

    fn search_service(sink: Arc<Mutex<Vec<IndexUserRequest>>>) -> Router {
        Router::new().route(
            "/index/users",
            post(move |Json(body): Json<IndexUserRequest>| {
                let sink = Arc::clone(&sink);
                async move {
                    sink.lock().push(body);
                    StatusCode::OK
                }
            }),
        )
    }

    async fn call(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_password_registration_reaches_downstream_services() {
        let indexed: Arc<Mutex<Vec<IndexUserRequest>>> = Arc::default();
        let encryption_url = spawn(encryption_service()).await;
        let search_url = spawn(search_service(Arc::clone(&indexed))).await;

        let config = load_config_from(|key| match key {
            "UD_ENCRYPTION_URL" => Some(encryption_url.clone()),
            "UD_SEARCH_URL" => Some(search_url.clone()),
            _ => None,
        });
        let node = UserDirectoryNode::new(config).unwrap();
        let router = node.gateway().unwrap().router();

        let (status, user) = call(
            &router,
            "/api/users/register",
            json!({"email": "user@example.com", "username": "user-1", "password": "password-123"}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let stored = node.repository();
        assert_eq!(stored.len(), 1);
        assert_eq!(
            *indexed.lock(),
            vec![IndexUserRequest {
                id: user["id"].as_str().unwrap().to_string(),
                username: "user-1".into(),
            }]
        );

        let (status, _) = call(
            &router,
            "/api/users/login",
            json!({"username": "user-1", "password": "password-123"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_password_service_down_is_bad_gateway() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let config = load_config_from(|key| match key {
            "UD_ENCRYPTION_URL" => Some(dead.clone()),
            "UD_SEARCH_URL" => Some(dead.clone()),
            "UD_CLIENT_TIMEOUT_SECS" => Some("1".into()),
            _ => None,
        });
        let node = UserDirectoryNode::new(config).unwrap();
        let router = node.gateway().unwrap().router();

        let (status, body) = call(
            &router,
            "/api/users/register",
            json!({"email": "user@example.com", "username": "user-1", "password": "password-123"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "UPSTREAM_UNAVAILABLE");
        assert!(node.repository().is_empty());
    }

    #[tokio::test]
    async fn test_wallet_registration_survives_search_outage() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let config = load_config_from(|key| match key {
            "UD_SEARCH_URL" => Some(dead.clone()),
            "UD_CLIENT_TIMEOUT_SECS" => Some("1".into()),
            _ => None,
        });
        let node = UserDirectoryNode::new(config).unwrap();
        let router = node.gateway().unwrap().router();
        let key = crate::fixtures::random_key();
        let message = "Register wallet";

        let (status, _) = call(
            &router,
            "/api/users/wallet/register",
            json!({
                "walletAddress": crate::fixtures::address_of(&key),
                "message": message,
                "signature": crate::fixtures::sign_personal_hex(message, &key),
                "username": "wallet-user"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(node.repository().len(), 1);
    }
}
