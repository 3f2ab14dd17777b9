//! KARTEI - Internal staff and customer record management core.
//!
//! Credential verification, signed sessions, role-based authorization,
//! and record provisioning with unique human-readable codes. The page
//! layer consuming this crate is a separate concern.

pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod service;

pub use auth::{
    authorize, current_identity, customer_scope, hash_password, login, require_identity,
    validate_password, verify_password, Action, CredentialVerifier, CustomerScope, Identity,
    LoginOutcome, PasswordError, SessionClaims, SessionManager, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use bootstrap::{ensure_admin, BOOTSTRAP_ADMIN_CODE};
pub use config::Config;
pub use db::{
    Customer, CustomerRepository, CustomerUpdate, Database, Employee, EmployeeProfile,
    EmployeeRepository, EmployeeUpdate, NewCustomer, NewEmployee, Role,
};
pub use error::{KarteiError, Result};
pub use service::{
    CreateCustomerRequest, CreateEmployeeRequest, CustomerService, EmployeeService,
};
