use std::sync::Arc;

use eagerbirds_core::{
    models::principal::{Role, SessionResponse},
    store::MemorySlotStore,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::test_utils::{ADMIN_EMAIL, ADMIN_TOKEN, TEACHER_TOKEN, TestContext, bearer};

#[rstest]
#[case(TEACHER_TOKEN, Role::Teacher, "teacher@eagerbirds.com")]
#[case(ADMIN_TOKEN, Role::Admin, ADMIN_EMAIL)]
#[tokio::test]
async fn test_session_reports_resolved_role(
    #[case] token: &str,
    #[case] role: Role,
    #[case] email: &str,
) {
    let ctx = TestContext::new();
    let server = ctx.server(Arc::new(MemorySlotStore::new()));
    let (name, value) = bearer(token);

    let response = server.get("/api/session").add_header(name, value).await;

    response.assert_status_ok();
    let body: SessionResponse = response.json();
    assert!(body.signed_in);
    assert_eq!(body.role, Some(role));
    assert_eq!(body.email.as_deref(), Some(email));
}

#[test_log::test(tokio::test)]
async fn test_session_when_signed_out() {
    let ctx = TestContext::new();
    let server = ctx.server(Arc::new(MemorySlotStore::new()));

    let response = server.get("/api/session").await;

    response.assert_status_ok();
    let body: SessionResponse = response.json();
    assert!(!body.signed_in);
    assert_eq!(body.id, None);
}

#[test_log::test(tokio::test)]
async fn test_health_and_version() {
    let ctx = TestContext::new();
    let server = ctx.server(Arc::new(MemorySlotStore::new()));

    server.get("/health").await.assert_status_ok();
    let version: serde_json::Value = server.get("/version").await.json();
    assert_eq!(version["version"], env!("CARGO_PKG_VERSION"));
}
