//! Customer Handlers
//!
//! HTTP handlers for customer CRUD operations and the picker options.

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::{
    CustomerDto, CustomerListDto, CustomerOptionDto, CustomerResponseDto, IdQuery, IdsDto,
    UpdateCustomerDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::{
    Uid, ValidatedJson, ValidatedQuery,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::envelope::{Envelope, PageData};
use crate::shared::errors::ApiError;

/// Create the router for customer endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_customer))
        .route("/update", put(update_customer))
        .route("/delete", delete(delete_customers))
        .route("/list", post(list_customers))
        .route("/info", get(get_customer))
        .route("/option", get(customer_options))
}

/// POST /customer/create
///
/// # Responses
///
/// * `CustomerHasExist` - The caller already has a customer with this name
#[axum::debug_handler]
async fn create_customer(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CustomerDto>,
) -> Result<Envelope<()>, ApiError> {
    state.use_cases.customers.create.execute(uid, dto.into()).await?;
    Ok(Envelope::ok())
}

/// PUT /customer/update
///
/// # Responses
///
/// * `CustomerNotExist` - Unknown id
/// * `CustomerHasExist` - Renamed onto another customer's name
#[axum::debug_handler]
async fn update_customer(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdateCustomerDto>,
) -> Result<Envelope<()>, ApiError> {
    state
        .use_cases
        .customers
        .update
        .execute(uid, dto.id, dto.customer.into())
        .await?;
    Ok(Envelope::ok())
}

/// DELETE /customer/delete
///
/// # Responses
///
/// * `CustomerHasContract` - A contract still references one of the customers
#[axum::debug_handler]
async fn delete_customers(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<IdsDto>,
) -> Result<Envelope<()>, ApiError> {
    state.use_cases.customers.delete.execute(uid, dto.ids).await?;
    Ok(Envelope::ok())
}

/// POST /customer/list
#[axum::debug_handler]
async fn list_customers(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CustomerListDto>,
) -> Result<Envelope<PageData<CustomerResponseDto>>, ApiError> {
    let page = state
        .use_cases
        .customers
        .list
        .execute(dto.into_query(uid)?)
        .await?
        .map(CustomerResponseDto::from);
    Ok(Envelope::page(page.total, page.items))
}

/// GET /customer/info?id=
#[axum::debug_handler]
async fn get_customer(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<IdQuery>,
) -> Result<Envelope<CustomerResponseDto>, ApiError> {
    let customer = state.use_cases.customers.get.execute(uid, query.id).await?;
    Ok(Envelope::success(CustomerResponseDto::from(customer)))
}

/// GET /customer/option - `[{id, name}]` of every customer, by name
#[axum::debug_handler]
async fn customer_options(
    Uid(uid): Uid,
    State(state): State<AppState>,
) -> Result<Envelope<Vec<CustomerOptionDto>>, ApiError> {
    let options = state.use_cases.customers.options.execute(uid).await?;
    Ok(Envelope::success(
        options.into_iter().map(CustomerOptionDto::from).collect(),
    ))
}
