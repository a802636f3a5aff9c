//! Product Handlers

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::{
    IdQuery, IdsDto, ProductDto, ProductListDto, ProductResponseDto, UpdateProductDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::{
    Uid, ValidatedJson, ValidatedQuery,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::envelope::{Envelope, PageData};
use crate::shared::errors::ApiError;

/// Create the router for product endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_product))
        .route("/update", put(update_product))
        .route("/delete", delete(delete_products))
        .route("/list", post(list_products))
        .route("/info", get(get_product))
}

/// POST /product/create
///
/// # Responses
///
/// * `ProductHasExist` - The caller already has a product with this name
#[axum::debug_handler]
async fn create_product(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ProductDto>,
) -> Result<Envelope<()>, ApiError> {
    state.use_cases.products.create.execute(uid, dto.into()).await?;
    Ok(Envelope::ok())
}

/// PUT /product/update
///
/// # Responses
///
/// * `ProductNotExist` - Unknown id
/// * `ProductHasExist` - Renamed onto another product's name
#[axum::debug_handler]
async fn update_product(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpdateProductDto>,
) -> Result<Envelope<()>, ApiError> {
    state
        .use_cases
        .products
        .update
        .execute(uid, dto.id, dto.product.into())
        .await?;
    Ok(Envelope::ok())
}

#[axum::debug_handler]
async fn delete_products(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<IdsDto>,
) -> Result<Envelope<()>, ApiError> {
    state.use_cases.products.delete.execute(uid, dto.ids).await?;
    Ok(Envelope::ok())
}

#[axum::debug_handler]
async fn list_products(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ProductListDto>,
) -> Result<Envelope<PageData<ProductResponseDto>>, ApiError> {
    let page = state
        .use_cases
        .products
        .list
        .execute(dto.into_query(uid)?)
        .await?
        .map(ProductResponseDto::from);
    Ok(Envelope::page(page.total, page.items))
}

#[axum::debug_handler]
async fn get_product(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<IdQuery>,
) -> Result<Envelope<ProductResponseDto>, ApiError> {
    let product = state.use_cases.products.get.execute(uid, query.id).await?;
    Ok(Envelope::success(ProductResponseDto::from(product)))
}
