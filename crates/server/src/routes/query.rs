//! Typed query/mutation dispatcher.
//!
//! The whole API surface is one endpoint: a request body carries exactly one
//! operation, and the response body carries that operation's typed result.
//!
//! # Operations
//!
//! ```text
//! {"createItem": {"name": "..."}}                      -> {"item": {...}}
//! {"createPaymentAccount": {"name": "..."}}            -> {"paymentAccount": {...}}
//! "paymentAccounts"                                    -> {"paymentAccounts": [...]}
//! {"createTodo": {"text": "...", "userId": "..."}}     -> {"todo": {...}}
//! "todos"                                              -> {"todos": [...]}
//! {"todoUser": {"id": "...", "text": "...", "userId": "..."}} -> {"user": {...}}
//! ```
//!
//! `todoUser` is the computed edge from a todo to its user; it carries the
//! todo itself because users have no storage to look up.
//!
//! Payloads that don't match an operation's shape are rejected by the `Json`
//! extractor before dispatch — type-shape validation only.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Item, NewItem, NewPaymentAccount, NewTodo, PaymentAccount, Todo, User};
use crate::resolver;
use crate::state::AppState;

/// A single operation against the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApiRequest {
    CreateItem(NewItem),
    CreatePaymentAccount(NewPaymentAccount),
    PaymentAccounts,
    CreateTodo(NewTodo),
    Todos,
    TodoUser(Todo),
}

/// The typed result of one operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ApiResponse {
    Item(Item),
    PaymentAccount(PaymentAccount),
    PaymentAccounts(Vec<PaymentAccount>),
    Todo(Todo),
    Todos(Vec<Todo>),
    User(User),
}

/// POST /query - Dispatch one operation to the resolution layer.
pub async fn execute(
    State(state): State<AppState>,
    Json(request): Json<ApiRequest>,
) -> Result<Json<ApiResponse>> {
    let response = match request {
        ApiRequest::CreateItem(input) => {
            ApiResponse::Item(resolver::create_item(&state, input).await?)
        }
        ApiRequest::CreatePaymentAccount(input) => {
            ApiResponse::PaymentAccount(resolver::create_payment_account(&state, input).await?)
        }
        ApiRequest::PaymentAccounts => {
            ApiResponse::PaymentAccounts(resolver::payment_accounts(&state).await?)
        }
        ApiRequest::CreateTodo(input) => ApiResponse::Todo(resolver::create_todo(&state, input)),
        ApiRequest::Todos => ApiResponse::Todos(resolver::todos(&state)),
        ApiRequest::TodoUser(todo) => ApiResponse::User(resolver::todo_user(&todo)),
    };

    Ok(Json(response))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use secrecy::SecretString;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::config::ServerConfig;

    fn test_state() -> AppState {
        let config = ServerConfig {
            database_url: SecretString::from("postgres://pouch@localhost:5432/pouch"),
            host: "127.0.0.1".parse().unwrap(),
            port: 8080,
            sentry_dsn: None,
        };
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://pouch@localhost:5432/pouch")
            .unwrap();
        AppState::new(config, pool)
    }

    fn app() -> axum::Router {
        crate::routes::routes().with_state(test_state())
    }

    fn post_query(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/query")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    #[test]
    fn request_shapes_deserialize() {
        let req: ApiRequest =
            serde_json::from_str(r#"{"createItem": {"name": "keyboard"}}"#).unwrap();
        assert!(matches!(req, ApiRequest::CreateItem(NewItem { ref name }) if name == "keyboard"));

        let req: ApiRequest =
            serde_json::from_str(r#"{"createTodo": {"text": "buy milk", "userId": "42"}}"#)
                .unwrap();
        assert!(matches!(req, ApiRequest::CreateTodo(_)));

        let req: ApiRequest = serde_json::from_str(r#""paymentAccounts""#).unwrap();
        assert!(matches!(req, ApiRequest::PaymentAccounts));

        let req: ApiRequest = serde_json::from_str(r#""todos""#).unwrap();
        assert!(matches!(req, ApiRequest::Todos));
    }

    #[test]
    fn unknown_operations_are_rejected() {
        assert!(serde_json::from_str::<ApiRequest>(r#""dropAllTables""#).is_err());
        assert!(serde_json::from_str::<ApiRequest>(r#"{"createItem": {}}"#).is_err());
    }

    #[test]
    fn response_shapes_serialize() {
        let response = ApiResponse::User(User {
            id: "42".to_owned(),
            name: "user 42".to_owned(),
        });
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"user": {"id": "42", "name": "user 42"}})
        );

        let response = ApiResponse::Todos(vec![Todo {
            id: "T1".to_owned(),
            text: "buy milk".to_owned(),
            user_id: "42".to_owned(),
        }]);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"todos": [{"id": "T1", "text": "buy milk", "userId": "42"}]})
        );
    }

    #[tokio::test]
    async fn create_todo_then_list_through_the_router() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_query(
                r#"{"createTodo": {"text": "buy milk", "userId": "42"}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(post_query(r#""todos""#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn todo_user_resolves_through_the_router() {
        let app = app();

        let response = app
            .oneshot(post_query(
                r#"{"todoUser": {"id": "T7", "text": "buy milk", "userId": "42"}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_payloads_are_rejected() {
        let app = app();

        let response = app
            .oneshot(post_query(r#"{"createTodo": {"text": 7}}"#))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }
}
