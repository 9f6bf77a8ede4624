//! Wire-contract checks that run without any services.
//!
//! These pin the typed request/response surface as a consumer sees it, so a
//! serde attribute change that would break clients fails here first.

use pouch_core::{ItemId, PaymentAccountId, TransactionId};
use pouch_server::models::{NewTodo, PaymentAccount, Todo};
use pouch_server::routes::query::ApiRequest;

#[test]
fn mutation_payloads_deserialize() {
    let body = r#"{"createPaymentAccount": {"name": "checking"}}"#;
    let request: ApiRequest = serde_json::from_str(body).expect("valid operation");
    assert!(matches!(request, ApiRequest::CreatePaymentAccount(_)));

    let body = r#"{"createTodo": {"text": "buy milk", "userId": "42"}}"#;
    let request: ApiRequest = serde_json::from_str(body).expect("valid operation");
    let ApiRequest::CreateTodo(NewTodo { text, user_id }) = request else {
        panic!("wrong operation");
    };
    assert_eq!(text, "buy milk");
    assert_eq!(user_id, "42");
}

#[test]
fn query_payloads_are_bare_operation_names() {
    assert!(matches!(
        serde_json::from_str(r#""paymentAccounts""#).expect("valid operation"),
        ApiRequest::PaymentAccounts
    ));
    assert!(matches!(
        serde_json::from_str(r#""todos""#).expect("valid operation"),
        ApiRequest::Todos
    ));
}

#[test]
fn entities_round_trip_as_camel_case_json() {
    let todo = Todo {
        id: "T7".to_owned(),
        text: "buy milk".to_owned(),
        user_id: "42".to_owned(),
    };
    let json = serde_json::to_value(&todo).expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({"id": "T7", "text": "buy milk", "userId": "42"})
    );
    let back: Todo = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, todo);

    let account: PaymentAccount =
        serde_json::from_str(r#"{"id": "9", "name": "checking"}"#).expect("deserializable");
    assert_eq!(account.id, "9");
}

#[test]
fn surrogate_ids_stringify_and_parse_as_decimal() {
    assert_eq!(ItemId::new(7).to_string(), "7");
    assert_eq!(
        "7".parse::<ItemId>().expect("decimal parses"),
        ItemId::new(7)
    );
    assert_eq!(
        "9000000000".parse::<TransactionId>().expect("fits i64"),
        TransactionId::new(9_000_000_000)
    );
    assert!("not-a-number".parse::<PaymentAccountId>().is_err());
}
