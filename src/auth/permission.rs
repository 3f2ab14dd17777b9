//! Authorization gate for KARTEI.
//!
//! Pure decision functions with no side effects: given the caller's
//! identity (possibly absent) and the requested action, allow or deny.
//! Ownership-sensitive customer actions carry the target's owner so the
//! decision needs no store access of its own.

use super::credentials::Identity;
use crate::db::Role;
use crate::{KarteiError, Result};

/// An operation on a target resource, as seen by the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// List all staff records.
    ListEmployees,
    /// Create a staff record.
    CreateEmployee,
    /// Update a staff record (including role and password changes).
    UpdateEmployee,
    /// Delete a staff record.
    DeleteEmployee,
    /// List customer records (row scope comes from [`customer_scope`]).
    ListCustomers,
    /// Create a customer record.
    CreateCustomer,
    /// Update the customer record with this owner.
    UpdateCustomer {
        /// Owner of the target record.
        owner_id: Option<i64>,
    },
    /// Delete the customer record with this owner.
    DeleteCustomer {
        /// Owner of the target record.
        owner_id: Option<i64>,
    },
}

/// Row scope for customer listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerScope {
    /// Every record.
    All,
    /// Only records owned by this employee.
    OwnedBy(i64),
}

/// Require an authenticated caller.
pub fn require_identity(identity: Option<&Identity>) -> Result<&Identity> {
    identity.ok_or_else(|| KarteiError::Authentication("authentication required".to_string()))
}

/// Decide whether the caller may perform an action.
///
/// A missing identity denies every action. Authenticated-but-forbidden is
/// an authorization error, distinct from the authentication one.
pub fn authorize(identity: Option<&Identity>, action: &Action) -> Result<()> {
    let identity = require_identity(identity)?;

    match action {
        Action::ListEmployees
        | Action::CreateEmployee
        | Action::UpdateEmployee
        | Action::DeleteEmployee => match identity.role {
            Role::Admin => Ok(()),
            Role::Standard => Err(KarteiError::Authorization(
                "admin role required".to_string(),
            )),
        },

        Action::ListCustomers | Action::CreateCustomer => match identity.role {
            Role::Admin | Role::Standard => Ok(()),
        },

        Action::UpdateCustomer { owner_id } | Action::DeleteCustomer { owner_id } => {
            match identity.role {
                Role::Admin => Ok(()),
                Role::Standard => {
                    if *owner_id == Some(identity.id) {
                        Ok(())
                    } else {
                        Err(KarteiError::Authorization(
                            "not the owner of this customer record".to_string(),
                        ))
                    }
                }
            }
        }
    }
}

/// Row scope a caller gets when listing customers.
///
/// Admins see every record; standard callers are implicitly scoped to
/// records they own. Owner-less records are therefore admin-visible only.
pub fn customer_scope(identity: &Identity) -> CustomerScope {
    match identity.role {
        Role::Admin => CustomerScope::All,
        Role::Standard => CustomerScope::OwnedBy(identity.id),
    }
}
