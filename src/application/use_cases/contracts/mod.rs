//! Contract Use Cases

mod create_contract;
mod delete_contracts;
mod get_contract;
mod list_contracts;
mod update_contract;

pub use create_contract::CreateContractUseCase;
pub use delete_contracts::DeleteContractsUseCase;
pub use get_contract::{GetContractProductsUseCase, GetContractUseCase};
pub use list_contracts::ListContractsUseCase;
pub use update_contract::UpdateContractUseCase;

use crate::application::use_cases::Gateways;

pub struct ContractUseCases {
    pub create: CreateContractUseCase,
    pub update: UpdateContractUseCase,
    pub delete: DeleteContractsUseCase,
    pub list: ListContractsUseCase,
    pub get: GetContractUseCase,
    pub products: GetContractProductsUseCase,
}

impl ContractUseCases {
    #[must_use]
    pub fn new(gateways: &Gateways) -> Self {
        Self {
            create: CreateContractUseCase::new(gateways.contracts.clone(), gateways.customers.clone()),
            update: UpdateContractUseCase::new(gateways.contracts.clone(), gateways.customers.clone()),
            delete: DeleteContractsUseCase::new(gateways.contracts.clone()),
            list: ListContractsUseCase::new(gateways.contracts.clone()),
            get: GetContractUseCase::new(gateways.contracts.clone()),
            products: GetContractProductsUseCase::new(gateways.contracts.clone()),
        }
    }
}
