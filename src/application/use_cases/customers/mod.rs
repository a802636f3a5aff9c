//! Customer Use Cases

mod create_customer;
mod delete_customers;
mod list_customers;
mod update_customer;

pub use create_customer::CreateCustomerUseCase;
pub use delete_customers::DeleteCustomersUseCase;
pub use list_customers::{CustomerOptionsUseCase, GetCustomerUseCase, ListCustomersUseCase};
pub use update_customer::UpdateCustomerUseCase;

use crate::application::use_cases::Gateways;

pub struct CustomerUseCases {
    pub create: CreateCustomerUseCase,
    pub update: UpdateCustomerUseCase,
    pub delete: DeleteCustomersUseCase,
    pub list: ListCustomersUseCase,
    pub get: GetCustomerUseCase,
    pub options: CustomerOptionsUseCase,
}

impl CustomerUseCases {
    #[must_use]
    pub fn new(gateways: &Gateways) -> Self {
        Self {
            create: CreateCustomerUseCase::new(gateways.customers.clone()),
            update: UpdateCustomerUseCase::new(gateways.customers.clone()),
            delete: DeleteCustomersUseCase::new(gateways.customers.clone(), gateways.contracts.clone()),
            list: ListCustomersUseCase::new(gateways.customers.clone()),
            get: GetCustomerUseCase::new(gateways.customers.clone()),
            options: CustomerOptionsUseCase::new(gateways.customers.clone()),
        }
    }
}
