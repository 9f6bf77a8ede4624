//! Resolution layer: one function per exposed operation.
//!
//! Every operation that touches the store follows the same boundary
//! contract: convert exactly one domain input to its insert shape, invoke
//! exactly one store primitive, convert every returned row back to domain
//! form, and propagate store failures as [`ApiError::Store`] — a recoverable
//! per-operation error, never a process abort.
//!
//! Todo operations never touch the store; they work against the in-process
//! list owned by [`AppState`].

use rand::Rng;

use crate::db::{
    ItemInsert, ItemRepository, PaymentAccountInsert, PaymentAccountRepository,
};
use crate::error::Result;
use crate::models::{Item, NewItem, NewPaymentAccount, NewTodo, PaymentAccount, Todo, User};
use crate::state::AppState;

/// Create an item. The store assigns the surrogate key; the returned domain
/// id is its decimal string form.
///
/// # Errors
///
/// Returns `ApiError::Store` if the insert fails.
pub async fn create_item(state: &AppState, input: NewItem) -> Result<Item> {
    let insert = ItemInsert::from(input);
    let row = ItemRepository::new(state.pool()).create(insert).await?;
    Ok(row.into())
}

/// Create a payment account.
///
/// # Errors
///
/// Returns `ApiError::Store` if the insert fails.
pub async fn create_payment_account(
    state: &AppState,
    input: NewPaymentAccount,
) -> Result<PaymentAccount> {
    let insert = PaymentAccountInsert::from(input);
    let row = PaymentAccountRepository::new(state.pool())
        .create(insert)
        .await?;
    Ok(row.into())
}

/// List all payment accounts in the store's return order.
///
/// # Errors
///
/// Returns `ApiError::Store` if the query fails. The failure is surfaced to
/// the caller on this one operation; the server keeps running.
pub async fn payment_accounts(state: &AppState) -> Result<Vec<PaymentAccount>> {
    let rows = PaymentAccountRepository::new(state.pool()).find_all().await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

/// Create a todo in the in-process list. Infallible: there is no failure
/// path for a pure in-memory append.
pub fn create_todo(state: &AppState, input: NewTodo) -> Todo {
    let todo = Todo {
        id: generate_todo_id(),
        text: input.text,
        user_id: input.user_id,
    };
    state.todos().add(todo.clone());
    todo
}

/// Snapshot the in-process todo list.
#[must_use]
pub fn todos(state: &AppState) -> Vec<Todo> {
    state.todos().snapshot()
}

/// Resolve a todo's user edge.
///
/// Users have no storage; the edge is computed fresh on every request from
/// the todo's `userID`, with the display name derived from the id.
#[must_use]
pub fn todo_user(todo: &Todo) -> User {
    User {
        id: todo.user_id.clone(),
        name: format!("user {}", todo.user_id),
    }
}

/// Generate a todo identifier: `"T"` followed by the decimal digits of a
/// random integer. Uniqueness is not checked — a collision leaves both todos
/// in the list. Acceptable for ephemeral demo state; revisit if this list
/// ever becomes durable.
fn generate_todo_id() -> String {
    format!("T{}", rand::rng().random::<u64>())
}
