//! Product Use Cases

mod create_product;
mod delete_products;
mod list_products;
mod update_product;

pub use create_product::CreateProductUseCase;
pub use delete_products::DeleteProductsUseCase;
pub use list_products::{GetProductUseCase, ListProductsUseCase};
pub use update_product::UpdateProductUseCase;

use crate::application::use_cases::Gateways;

pub struct ProductUseCases {
    pub create: CreateProductUseCase,
    pub update: UpdateProductUseCase,
    pub delete: DeleteProductsUseCase,
    pub list: ListProductsUseCase,
    pub get: GetProductUseCase,
}

impl ProductUseCases {
    #[must_use]
    pub fn new(gateways: &Gateways) -> Self {
        Self {
            create: CreateProductUseCase::new(gateways.products.clone()),
            update: UpdateProductUseCase::new(gateways.products.clone()),
            delete: DeleteProductsUseCase::new(gateways.products.clone()),
            list: ListProductsUseCase::new(gateways.products.clone()),
            get: GetProductUseCase::new(gateways.products.clone()),
        }
    }
}
