use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode;
use users_api::routes::create_router_with_store;
use users_client::{ClientError, UserClient};
use users_shared::models::{UserInput, UserPatch};
use users_shared::store::MemoryUserStore;
use users_shared::test_utils::test_logging::init_test_logging;

// Serves a freshly seeded API on an ephemeral port
async fn spawn_server() -> SocketAddr {
    init_test_logging();

    let app = create_router_with_store(Arc::new(MemoryUserStore::default()), "");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

async fn test_client() -> UserClient {
    let addr = spawn_server().await;
    UserClient::new(format!("http://{addr}"))
}

#[tokio::test]
async fn test_list_and_get() {
    let client = test_client().await;

    let users = client.list_users().await.unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0].name, "Juan Pérez");

    let user = client.get_user(3).await.unwrap();
    assert_eq!(user.email, "carlos@example.com");
}

#[tokio::test]
async fn test_crud_round() {
    let client = test_client().await;

    let created = client
        .create_user(&UserInput::new("Ana Ruiz", "ana@example.com"))
        .await
        .unwrap();
    assert_eq!(created.id, 4);

    let replaced = client
        .replace_user(4, &UserInput::new("Ana María Ruiz", "anamaria@example.com"))
        .await
        .unwrap();
    assert_eq!(replaced.name, "Ana María Ruiz");

    let patched = client
        .patch_user(
            4,
            &UserPatch {
                name: None,
                email: Some("ana@nuevo.com".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(patched.name, "Ana María Ruiz");
    assert_eq!(patched.email, "ana@nuevo.com");

    let deleted = client.delete_user(4).await.unwrap();
    assert_eq!(deleted, patched);

    let users = client.list_users().await.unwrap();
    assert!(users.iter().all(|u| u.id != 4));
}

#[tokio::test]
async fn test_not_found_surfaces_envelope_message() {
    let client = test_client().await;

    let err = client.get_user(99).await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(message, "Usuario no encontrado");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_failure() {
    let client = test_client().await;

    let err = client
        .create_user(&UserInput::new("", "sin-nombre@example.com"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert!(err.to_string().contains("Nombre y email son requeridos"));
}

#[tokio::test]
async fn test_health() {
    let client = test_client().await;

    let health = client.health().await.unwrap();
    assert!(health.success);
    assert_eq!(health.message, "API funcionando correctamente");
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    // Nothing listens on the discard port
    let client = UserClient::new("http://127.0.0.1:9");

    let err = client.list_users().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
