//! Customer service for KARTEI.
//!
//! Customer record operations with ownership scoping: admins act on every
//! record, standard staff only on records they own. The owner reference is
//! stamped at creation and never changed afterwards.

use super::{validate_email, validate_name, CODE_RETRY_ATTEMPTS};
use crate::auth::{authorize, customer_scope, require_identity, Action, CustomerScope, Identity};
use crate::db::{
    is_code_collision, CodeGenerator, Collection, Customer, CustomerRepository, CustomerUpdate,
    NewCustomer,
};
use crate::{Database, KarteiError, Result};

/// Data for creating a new customer through the service.
#[derive(Debug, Clone)]
pub struct CreateCustomerRequest {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number (optional).
    pub phone: Option<String>,
}

impl CreateCustomerRequest {
    /// Create a request with the required fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
        }
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Service for customer record operations with ownership checks.
pub struct CustomerService<'a> {
    db: &'a Database,
}

impl<'a> CustomerService<'a> {
    /// Create a new CustomerService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create a customer record. Any authenticated caller.
    ///
    /// The new record's owner is the caller.
    pub async fn create(
        &self,
        caller: Option<&Identity>,
        request: &CreateCustomerRequest,
    ) -> Result<Customer> {
        validate_name(&request.name)?;
        validate_email(&request.email)?;

        authorize(caller, &Action::CreateCustomer)?;
        let identity = require_identity(caller)?;

        let generator = CodeGenerator::new(self.db.pool());
        let repo = CustomerRepository::new(self.db.pool());

        let mut last_err = KarteiError::Conflict("customer code already assigned".to_string());
        for _ in 0..CODE_RETRY_ATTEMPTS {
            let code = generator.next_code(Collection::Customers).await?;

            let mut new_customer = NewCustomer::new(code, &request.name, &request.email)
                .with_owner(identity.id);
            if let Some(ref phone) = request.phone {
                new_customer = new_customer.with_phone(phone);
            }

            match repo.create(&new_customer).await {
                Ok(customer) => return Ok(customer),
                Err(e) if is_code_collision(&e) => last_err = e,
                Err(e) => return Err(e),
            }
        }

        Err(last_err)
    }

    /// List customer records visible to the caller.
    ///
    /// Admins see every record; standard callers only the records they own.
    pub async fn list(&self, caller: Option<&Identity>) -> Result<Vec<Customer>> {
        authorize(caller, &Action::ListCustomers)?;
        let identity = require_identity(caller)?;

        let repo = CustomerRepository::new(self.db.pool());
        match customer_scope(identity) {
            CustomerScope::All => repo.list(None).await,
            CustomerScope::OwnedBy(owner_id) => repo.list(Some(owner_id)).await,
        }
    }

    /// Update a customer record.
    ///
    /// The target is fetched first so the gate can compare its owner with
    /// the caller. Code, id, and owner are never touched.
    pub async fn update(
        &self,
        caller: Option<&Identity>,
        id: i64,
        update: &CustomerUpdate,
    ) -> Result<Customer> {
        if update.is_empty() {
            return Err(KarteiError::Validation(
                "update contains no fields".to_string(),
            ));
        }
        if let Some(ref email) = update.email {
            validate_email(email)?;
        }
        if let Some(ref name) = update.name {
            validate_name(name)?;
        }

        require_identity(caller)?;

        let repo = CustomerRepository::new(self.db.pool());
        let existing = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| KarteiError::NotFound("customer".to_string()))?;

        authorize(
            caller,
            &Action::UpdateCustomer {
                owner_id: existing.owner_id,
            },
        )?;

        repo.update(id, update)
            .await?
            .ok_or_else(|| KarteiError::NotFound("customer".to_string()))
    }

    /// Delete a customer record.
    ///
    /// Returns true if a record was deleted, false if the id was absent.
    pub async fn delete(&self, caller: Option<&Identity>, id: i64) -> Result<bool> {
        require_identity(caller)?;

        let repo = CustomerRepository::new(self.db.pool());
        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(false);
        };

        authorize(
            caller,
            &Action::DeleteCustomer {
                owner_id: existing.owner_id,
            },
        )?;

        repo.delete(id).await
    }
}
