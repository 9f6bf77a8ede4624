//! End-to-end checks against a running server.
//!
//! Expect a `pouch-server` listening at `POUCH_TEST_URL` (default
//! `http://127.0.0.1:8080`); all tests are `#[ignore]`d by default.

use pouch_integration_tests::test_server_url;
use serde_json::{Value, json};

async fn query(client: &reqwest::Client, body: &Value) -> Value {
    client
        .post(format!("{}/query", test_server_url()))
        .json(body)
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("response was not JSON")
}

#[tokio::test]
#[ignore = "requires running server"]
async fn health_endpoint_responds() {
    let response = reqwest::get(format!("{}/health", test_server_url()))
        .await
        .expect("request failed");
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore = "requires running server"]
async fn create_payment_account_then_list_includes_it() {
    let client = reqwest::Client::new();
    let name = format!("account-{}", uuid::Uuid::new_v4());

    let created = query(
        &client,
        &json!({"createPaymentAccount": {"name": name.clone()}}),
    )
    .await;
    let account = &created["paymentAccount"];
    assert_eq!(account["name"], Value::String(name.clone()));
    let id = account["id"].as_str().expect("id is a string").to_owned();
    assert!(id.parse::<i64>().is_ok());

    let listed = query(&client, &json!("paymentAccounts")).await;
    let accounts = listed["paymentAccounts"]
        .as_array()
        .expect("list is an array");
    assert!(
        accounts
            .iter()
            .any(|a| a["id"] == Value::String(id.clone()))
    );
}

#[tokio::test]
#[ignore = "requires running server"]
async fn todo_lifecycle_over_the_wire() {
    let client = reqwest::Client::new();

    let created = query(
        &client,
        &json!({"createTodo": {"text": "buy milk", "userId": "42"}}),
    )
    .await;
    let todo = created["todo"].clone();
    assert!(
        todo["id"]
            .as_str()
            .expect("id is a string")
            .starts_with('T')
    );
    assert_eq!(todo["text"], "buy milk");
    assert_eq!(todo["userId"], "42");

    let listed = query(&client, &json!("todos")).await;
    let todos = listed["todos"].as_array().expect("list is an array");
    assert!(todos.iter().any(|t| t["id"] == todo["id"]));

    let resolved = query(&client, &json!({"todoUser": todo})).await;
    assert_eq!(
        resolved["user"],
        json!({"id": "42", "name": "user 42"})
    );
}
