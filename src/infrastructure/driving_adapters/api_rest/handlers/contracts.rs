//! Contract Handlers
//!
//! HTTP handlers for contract CRUD operations.
//! All endpoints require a token and only see the caller's contracts.

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Router,
};

use crate::domain::models::contract::ContractData;
use crate::infrastructure::driving_adapters::api_rest::dto::{
    ContractDto, ContractListDto, ContractListItemDto, ContractProductDto, ContractResponseDto,
    IdQuery, IdsDto, UpdateContractDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::{
    Uid, ValidatedJson, ValidatedQuery,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::envelope::{Envelope, PageData};
use crate::shared::errors::ApiError;

/// Create the router for contract endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_contract))
        .route("/update", put(update_contract))
        .route("/delete", delete(delete_contracts))
        .route("/list", post(list_contracts))
        .route("/info", get(get_contract))
        .route("/plist", get(get_contract_products))
}

/// POST /contract/create - Create a contract
///
/// # Responses
///
/// * `ParamInvalid` - Validation error or reversed period
/// * `CustomerNotExist` - `cid` is not one of the caller's customers
#[axum::debug_handler]
async fn create_contract(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ContractDto>,
) -> Result<Envelope<()>, ApiError> {
    let data = ContractData::try_from(dto)?;
    state.use_cases.contracts.create.execute(uid, data).await?;
    Ok(Envelope::ok())
}

/// PUT /contract/update - Replace every editable field of a contract
///
/// # Responses
///
/// * `ContractNotExist` - Unknown id or owned by someone else
/// * `CustomerNotExist` - `cid` is not one of the caller's customers
#[axum::debug_handler]
async fn update_contract(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdateContractDto>,
) -> Result<Envelope<()>, ApiError> {
    let data = ContractData::try_from(dto.contract)?;
    state
        .use_cases
        .contracts
        .update
        .execute(uid, dto.id, data)
        .await?;
    Ok(Envelope::ok())
}

/// DELETE /contract/delete - Delete contracts by id
#[axum::debug_handler]
async fn delete_contracts(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<IdsDto>,
) -> Result<Envelope<()>, ApiError> {
    state.use_cases.contracts.delete.execute(uid, dto.ids).await?;
    Ok(Envelope::ok())
}

/// POST /contract/list - One page of contracts joined with the customer name
///
/// # Responses
///
/// * `Success` - `{total, list}`, newest first
#[axum::debug_handler]
async fn list_contracts(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ContractListDto>,
) -> Result<Envelope<PageData<ContractListItemDto>>, ApiError> {
    let query = dto.into_query(uid)?;
    let page = state
        .use_cases
        .contracts
        .list
        .execute(query)
        .await?
        .map(ContractListItemDto::from);
    Ok(Envelope::page(page.total, page.items))
}

/// GET /contract/info?id= - One contract
#[axum::debug_handler]
async fn get_contract(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<IdQuery>,
) -> Result<Envelope<ContractResponseDto>, ApiError> {
    let contract = state.use_cases.contracts.get.execute(uid, query.id).await?;
    Ok(Envelope::success(ContractResponseDto::from(contract)))
}

/// GET /contract/plist?id= - Product lines of one contract
#[axum::debug_handler]
async fn get_contract_products(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<IdQuery>,
) -> Result<Envelope<Vec<ContractProductDto>>, ApiError> {
    let products = state
        .use_cases
        .contracts
        .products
        .execute(uid, query.id)
        .await?;
    Ok(Envelope::success(
        products.into_iter().map(ContractProductDto::from).collect(),
    ))
}
