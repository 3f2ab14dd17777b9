//! End-to-end flow tests for KARTEI.
//!
//! Drives the public surface the page layer consumes: bootstrap, login,
//! session verification, and record CRUD with ownership rules.

mod common;

use kartei::{
    current_identity, login, CreateCustomerRequest, CreateEmployeeRequest, CustomerService,
    EmployeeService, KarteiError, Role, BOOTSTRAP_ADMIN_CODE,
};

use common::{bootstrapped_db, session_manager};

#[tokio::test]
async fn test_full_provisioning_flow() {
    let (db, bootstrap_config) = bootstrapped_db().await;
    let sessions = session_manager();

    // Log in with the reserved bootstrap code
    let admin_login = login(
        &db,
        &sessions,
        BOOTSTRAP_ADMIN_CODE,
        &bootstrap_config.admin_password,
    )
    .await
    .expect("bootstrap admin login should succeed");

    // The decoded identity carries the privileged role
    let admin = current_identity(&sessions, &admin_login.token)
        .expect("freshly minted token should verify");
    assert_eq!(admin.code, BOOTSTRAP_ADMIN_CODE);
    assert_eq!(admin.role, Role::Admin);

    // Create a standard staff record; first generated code is EMP001
    let employees = EmployeeService::new(&db);
    let staff = employees
        .create(
            Some(&admin),
            &CreateEmployeeRequest::new("Dana Clerk", "dana@corp.test", "dana-password"),
        )
        .await
        .unwrap();
    assert_eq!(staff.code, "EMP001");
    assert_eq!(staff.role, Role::Standard);

    // Log in as the new staff member
    let staff_login = login(&db, &sessions, "EMP001", "dana-password")
        .await
        .expect("new staff login should succeed");
    let staff_identity = current_identity(&sessions, &staff_login.token).unwrap();
    assert_eq!(staff_identity.role, Role::Standard);

    // Create a customer; owner is the new staff member
    let customers = CustomerService::new(&db);
    let customer = customers
        .create(
            Some(&staff_identity),
            &CreateCustomerRequest::new("Acme Ltd", "contact@acme.test"),
        )
        .await
        .unwrap();
    assert_eq!(customer.code, "CUST001");
    assert_eq!(customer.owner_id, Some(staff_identity.id));

    // A third, different standard identity may not delete that customer
    let other_staff = employees
        .create(
            Some(&admin),
            &CreateEmployeeRequest::new("Evan Clerk", "evan@corp.test", "evan-password"),
        )
        .await
        .unwrap();
    let other_login = login(&db, &sessions, &other_staff.code, "evan-password")
        .await
        .unwrap();
    let other_identity = current_identity(&sessions, &other_login.token).unwrap();

    let result = customers.delete(Some(&other_identity), customer.id).await;
    assert!(
        matches!(result, Err(KarteiError::Authorization(_))),
        "unowned delete must be an authorization error, got {result:?}"
    );

    // The owner still can
    assert!(customers
        .delete(Some(&staff_identity), customer.id)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_login_failures_share_one_reason() {
    let (db, bootstrap_config) = bootstrapped_db().await;
    let sessions = session_manager();

    let unknown_code = login(&db, &sessions, "EMP777", &bootstrap_config.admin_password)
        .await
        .unwrap_err();
    let wrong_password = login(&db, &sessions, BOOTSTRAP_ADMIN_CODE, "wrong-password")
        .await
        .unwrap_err();

    assert_eq!(unknown_code.to_string(), wrong_password.to_string());
}

#[tokio::test]
async fn test_token_from_foreign_secret_is_rejected() {
    let (db, bootstrap_config) = bootstrapped_db().await;
    let sessions = session_manager();

    let outcome = login(
        &db,
        &sessions,
        BOOTSTRAP_ADMIN_CODE,
        &bootstrap_config.admin_password,
    )
    .await
    .unwrap();

    let foreign =
        kartei::SessionManager::new("some-other-secret", std::time::Duration::from_secs(3600));
    assert!(current_identity(&foreign, &outcome.token).is_none());

    // The issuing manager still accepts it
    assert!(current_identity(&sessions, &outcome.token).is_some());
}

#[tokio::test]
async fn test_session_cookie_carries_token() {
    let (db, bootstrap_config) = bootstrapped_db().await;
    let sessions = session_manager();

    let outcome = login(
        &db,
        &sessions,
        BOOTSTRAP_ADMIN_CODE,
        &bootstrap_config.admin_password,
    )
    .await
    .unwrap();

    let cookie = sessions.cookie(outcome.token.clone());
    assert_eq!(cookie.value(), outcome.token);
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
}

#[tokio::test]
async fn test_staff_management_denied_for_standard_role() {
    let (db, bootstrap_config) = bootstrapped_db().await;
    let sessions = session_manager();

    let admin_login = login(
        &db,
        &sessions,
        BOOTSTRAP_ADMIN_CODE,
        &bootstrap_config.admin_password,
    )
    .await
    .unwrap();
    let admin = admin_login.identity;

    let employees = EmployeeService::new(&db);
    employees
        .create(
            Some(&admin),
            &CreateEmployeeRequest::new("Dana Clerk", "dana@corp.test", "dana-password"),
        )
        .await
        .unwrap();

    let staff_login = login(&db, &sessions, "EMP001", "dana-password").await.unwrap();
    let staff = staff_login.identity;

    // Every staff-collection operation is admin-only
    assert!(matches!(
        employees.list(Some(&staff)).await,
        Err(KarteiError::Authorization(_))
    ));
    assert!(matches!(
        employees
            .create(
                Some(&staff),
                &CreateEmployeeRequest::new("X", "x@corp.test", "x-password-1"),
            )
            .await,
        Err(KarteiError::Authorization(_))
    ));
    assert!(matches!(
        employees.delete(Some(&staff), admin.id).await,
        Err(KarteiError::Authorization(_))
    ));
}
