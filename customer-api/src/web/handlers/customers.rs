//! Customer REST handlers
//!
//! Reads take the store's read lock. Writes hold the write lock from
//! validation until the collection has been saved.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use shared::{Customer, CustomerPatch, NewCustomer, ProcessId, lenient, process_debug, process_info, process_warn};

use crate::core::{query, validation};
use crate::error::{ApiError, ApiResult};
use crate::server_impl::CustomerServer;
use crate::traits::CustomerPersistence;
use crate::types::{ListQuery, MessageResponse};

/// Path ids are read up to the first non-digit; a segment with no leading
/// integer cannot match any record
fn parse_id(raw: &str) -> ApiResult<i64> {
    lenient::parse_int_prefix(raw).ok_or_else(|| ApiError::NotFound {
        id: raw.to_string(),
    })
}

/// `GET /api/customers`
pub async fn list_customers<P>(
    State(server): State<CustomerServer<P>>,
    Query(params): Query<ListQuery>,
) -> ApiResult<Json<Vec<Customer>>>
where
    P: CustomerPersistence + 'static,
{
    let store = server.state().store.read().await;
    let customers = query::list_customers(store.snapshot(), &params.filter(), params.pagination())
        .inspect_err(|e| {
            process_debug!(ProcessId::current(), "Rejected customer listing: {}", e);
        })?;

    Ok(Json(customers))
}

/// `GET /api/customers/:id`
pub async fn get_customer<P>(
    State(server): State<CustomerServer<P>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Customer>>
where
    P: CustomerPersistence + 'static,
{
    let id = parse_id(&raw_id)?;
    let store = server.state().store.read().await;

    store
        .find(id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound { id: raw_id })
}

/// `GET /api/cities`
pub async fn list_cities<P>(State(server): State<CustomerServer<P>>) -> Json<BTreeMap<String, usize>>
where
    P: CustomerPersistence + 'static,
{
    let store = server.state().store.read().await;
    Json(query::city_counts(store.snapshot()))
}

/// `POST /api/customers`, responds with the whole collection
pub async fn create_customer<P>(
    State(server): State<CustomerServer<P>>,
    Json(request): Json<NewCustomer>,
) -> ApiResult<(StatusCode, Json<Vec<Customer>>)>
where
    P: CustomerPersistence + 'static,
{
    let mut store = server.state().store.write().await;

    let customer = validation::validate_new_customer(store.snapshot(), request).inspect_err(|e| {
        process_warn!(ProcessId::current(), "⚠️ Rejected new customer: {}", e);
    })?;
    let id = customer.id;

    store.append(customer);
    server.persist(store.snapshot()).await?;

    process_info!(
        ProcessId::current(),
        "➕ Created customer {} ({} total)",
        id,
        store.len()
    );
    Ok((StatusCode::CREATED, Json(store.snapshot().to_vec())))
}

/// `PUT /api/customers/:id`, only fields present in the body change
pub async fn update_customer<P>(
    State(server): State<CustomerServer<P>>,
    Path(raw_id): Path<String>,
    Json(patch): Json<CustomerPatch>,
) -> ApiResult<Json<Customer>>
where
    P: CustomerPersistence + 'static,
{
    let id = parse_id(&raw_id)?;
    let mut store = server.state().store.write().await;

    let index = store
        .position(id)
        .ok_or(ApiError::NotFound { id: raw_id })?;

    let current = &store.snapshot()[index];
    if patch.is_empty() {
        return Ok(Json(current.clone()));
    }

    let updated = patch.apply(current);
    store.replace_at(index, updated.clone());
    server.persist(store.snapshot()).await?;

    process_info!(ProcessId::current(), "✏️ Updated customer {}", id);
    Ok(Json(updated))
}

/// `DELETE /api/customers/:id`
pub async fn delete_customer<P>(
    State(server): State<CustomerServer<P>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageResponse>>
where
    P: CustomerPersistence + 'static,
{
    let id = parse_id(&raw_id)?;
    let mut store = server.state().store.write().await;

    let index = store
        .position(id)
        .ok_or(ApiError::NotFound { id: raw_id })?;

    store.remove_at(index);
    server.persist(store.snapshot()).await?;

    process_info!(
        ProcessId::current(),
        "🗑️ Deleted customer {} ({} remaining)",
        id,
        store.len()
    );
    Ok(Json(MessageResponse::new("Customer deleted successfully")))
}
