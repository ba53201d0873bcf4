//! Wrapper-level tests
//! The relay is replaced by an in-memory transport answering per path.

#[cfg(test)]
mod client_tests {
    use crate::domain::entity::{AccountType, TransactionType};
    use crate::domain::session::{TOKEN_KEY, USER_KEY};
    use crate::{
        ApiClient, Call, ClientConfig, ClientError, ClientResult, FALLBACK_MESSAGE,
        HistoryNavigator, KeyValueStorage, MemoryStorage, OptionalFetch, Registration, RelayReply,
        RelayTransport, SessionContext,
    };
    use kernel::{CallDescriptor, CallMethod};
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio_util::sync::CancellationToken;

    #[derive(Clone, Default)]
    struct MockTransport {
        routes: Arc<Mutex<HashMap<String, RelayReply>>>,
        seen: Arc<Mutex<Vec<CallDescriptor>>>,
        bearers: Arc<Mutex<HashMap<String, String>>>,
        hang: bool,
    }

    impl MockTransport {
        fn route(self, path: &str, status: u16, body: Value) -> Self {
            self.raw(path, status, body.to_string())
        }

        fn raw(self, path: &str, status: u16, body: impl Into<String>) -> Self {
            self.routes
                .lock()
                .unwrap()
                .insert(path.to_string(), RelayReply::new(status, body));
            self
        }

        /// Answer 401 on `path` unless the call carries `Bearer {token}`
        fn guard(self, path: &str, token: &str) -> Self {
            self.bearers
                .lock()
                .unwrap()
                .insert(path.to_string(), format!("Bearer {token}"));
            self
        }

        fn hanging() -> Self {
            Self {
                hang: true,
                ..Default::default()
            }
        }

        fn seen(&self) -> Vec<CallDescriptor> {
            self.seen.lock().unwrap().clone()
        }

        fn last(&self) -> CallDescriptor {
            self.seen().last().cloned().expect("transport was called")
        }

        fn call(&self, path: &str) -> CallDescriptor {
            self.seen()
                .into_iter()
                .find(|d| d.url == path)
                .unwrap_or_else(|| panic!("no call to {path}"))
        }
    }

    impl RelayTransport for MockTransport {
        async fn send(&self, descriptor: &CallDescriptor) -> ClientResult<RelayReply> {
            self.seen.lock().unwrap().push(descriptor.clone());
            if self.hang {
                std::future::pending::<()>().await;
            }
            let expected = self.bearers.lock().unwrap().get(&descriptor.url).cloned();
            if let Some(expected) = expected {
                if descriptor.header("Authorization") != Some(expected.as_str()) {
                    return Ok(RelayReply::new(401, json!({ "message": "Unauthorized" }).to_string()));
                }
            }
            let reply = self.routes.lock().unwrap().get(&descriptor.url).cloned();
            Ok(reply.unwrap_or_else(|| {
                RelayReply::new(404, json!({ "message": "Not found" }).to_string())
            }))
        }
    }

    struct Harness {
        api: ApiClient<MockTransport>,
        transport: MockTransport,
        storage: Arc<MemoryStorage>,
        navigator: Arc<HistoryNavigator>,
    }

    fn harness(transport: MockTransport) -> Harness {
        let storage = Arc::new(MemoryStorage::new());
        let navigator = Arc::new(HistoryNavigator::new());
        let api = ApiClient::new(
            Arc::new(transport.clone()),
            SessionContext::browser(storage.clone()),
            navigator.clone(),
            ClientConfig::default(),
        );
        Harness {
            api,
            transport,
            storage,
            navigator,
        }
    }

    fn signed_in(transport: MockTransport) -> Harness {
        let h = harness(transport);
        h.storage.set(TOKEN_KEY, "abc").unwrap();
        h.storage
            .set(USER_KEY, r#"{"id":5,"username":"anna","customerId":12,"roles":["USER"]}"#)
            .unwrap();
        h
    }

    // ---- wrapper ----

    #[tokio::test]
    async fn test_attaches_bearer_and_returns_json_unchanged() {
        let account = json!({ "id": 7, "balance": 100 });
        let h = signed_in(MockTransport::default().route("/accounts/7", 200, account.clone()));

        let value = h.api.get("/accounts/7").await.unwrap();

        assert_eq!(value, account);
        let sent = h.transport.last();
        assert_eq!(sent.method, CallMethod::Get);
        assert_eq!(sent.header("Authorization"), Some("Bearer abc"));
        assert!(sent.body.is_none());
    }

    #[tokio::test]
    async fn test_unauthenticated_paths_never_carry_token() {
        let h = signed_in(
            MockTransport::default()
                .route("/users/create", 201, json!({ "id": 1 }))
                .route("/authentication/login", 200, json!({ "jwt": "new" })),
        );

        h.api.post("/users/create", &json!({ "username": "a" })).await.unwrap();
        h.api
            .post("/authentication/login", &json!({ "username": "a", "password": "b" }))
            .await
            .unwrap();

        for descriptor in h.transport.seen() {
            assert!(!descriptor.has_authorization(), "{}", descriptor.url);
        }
    }

    #[tokio::test]
    async fn test_missing_token_proceeds_without_header() {
        let h = harness(MockTransport::default().route("/cards/customer/3", 200, json!([])));

        let value = h.api.get("/cards/customer/3").await.unwrap();

        assert_eq!(value, json!([]));
        assert!(!h.transport.last().has_authorization());
    }

    #[tokio::test]
    async fn test_caller_authorization_wins() {
        let h = signed_in(MockTransport::default().route("/users/profile", 200, json!({})));

        h.api
            .send(Call::get("/users/profile").header("Authorization", "Bearer other"))
            .await
            .unwrap();

        assert_eq!(h.transport.last().header("authorization"), Some("Bearer other"));
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session_and_redirects() {
        let h = signed_in(MockTransport::default().route(
            "/users/profile",
            401,
            json!({ "message": "Token expired" }),
        ));

        let err = h.api.get("/users/profile").await.unwrap_err();

        assert!(matches!(err, ClientError::Unauthorized));
        assert_eq!(err.to_string(), "Unauthorized");
        assert!(h.storage.get(TOKEN_KEY).unwrap().is_none());
        assert!(h.storage.get(USER_KEY).unwrap().is_none());
        assert_eq!(
            h.navigator.current().as_deref(),
            Some("/login?reason=auth_failed")
        );
    }

    #[tokio::test]
    async fn test_unauthorized_with_text_body_still_clears_session() {
        let h = signed_in(MockTransport::default().raw("/accounts/7", 401, "Unauthorized"));

        let err = h.api.get("/accounts/7").await.unwrap_err();

        assert!(matches!(err, ClientError::Unauthorized));
        assert!(h.storage.get(TOKEN_KEY).unwrap().is_none());
        assert!(h.storage.get(USER_KEY).unwrap().is_none());
        assert_eq!(
            h.navigator.current().as_deref(),
            Some("/login?reason=auth_failed")
        );
    }

    #[tokio::test]
    async fn test_detached_context_reports_401_as_backend_failure() {
        let transport = MockTransport::default().route(
            "/users/profile",
            401,
            json!({ "message": "Token expired" }),
        );
        let navigator = Arc::new(HistoryNavigator::new());
        let api = ApiClient::new(
            Arc::new(transport.clone()),
            SessionContext::detached(),
            navigator.clone(),
            ClientConfig::default(),
        );

        let err = api.get("/users/profile").await.unwrap_err();

        assert!(matches!(err, ClientError::Backend { status: 401, .. }));
        assert_eq!(err.to_string(), "Token expired");
        assert!(navigator.current().is_none());
        assert!(!transport.last().has_authorization());
    }

    #[tokio::test]
    async fn test_failure_message_or_fallback() {
        let h = signed_in(
            MockTransport::default()
                .route("/transactions", 400, json!({ "message": "Insufficient funds" }))
                .route("/accounts/1", 500, json!({ "error": "boom" }))
                .route("/accounts/2", 503, json!({ "message": "" })),
        );

        let err = h.api.post("/transactions", &json!({})).await.unwrap_err();
        assert_eq!(err.to_string(), "Insufficient funds");
        assert_eq!(err.status(), Some(400));

        let err = h.api.get("/accounts/1").await.unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_MESSAGE);

        let err = h.api.get("/accounts/2").await.unwrap_err();
        assert_eq!(err.to_string(), FALLBACK_MESSAGE);

        // Session survives ordinary failures
        assert!(h.storage.get(TOKEN_KEY).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_non_json_reply_is_invalid_response() {
        let h = signed_in(MockTransport::default().raw("/accounts/7", 502, "<html>Bad Gateway</html>"));

        let err = h.api.get("/accounts/7").await.unwrap_err();

        assert!(matches!(err, ClientError::InvalidResponse));
        assert_eq!(err.to_string(), "Invalid server response");
    }

    #[tokio::test]
    async fn test_empty_success_is_null() {
        let h = signed_in(MockTransport::default().raw("/users/delete/5", 204, ""));

        let value = h.api.delete("/users/delete/5").await.unwrap();

        assert_eq!(value, Value::Null);
        assert_eq!(h.transport.last().method, CallMethod::Delete);
    }

    #[tokio::test]
    async fn test_typed_decode_failure_is_contract_error() {
        let h = signed_in(MockTransport::default().route("/accounts/7", 200, json!({ "id": "seven" })));

        let err = h.api.accounts().get(7).await.unwrap_err();

        assert!(matches!(err, ClientError::Contract(_)));
    }

    #[tokio::test]
    async fn test_cancelled_before_send() {
        let h = signed_in(MockTransport::default().route("/accounts/7", 200, json!({})));
        let token = CancellationToken::new();
        token.cancel();

        let err = h
            .api
            .send(Call::get("/accounts/7").cancel_with(token))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Cancelled));
    }

    #[tokio::test]
    async fn test_cancelled_in_flight() {
        let h = signed_in(MockTransport::hanging());
        let token = CancellationToken::new();
        let trigger = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let err = h
            .api
            .send(Call::get("/accounts/7").cancel_with(token))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Cancelled));
        assert_eq!(h.transport.seen().len(), 1);
    }

    // ---- auth ----

    #[tokio::test]
    async fn test_login_stores_token_and_profile() {
        let h = harness(
            MockTransport::default()
                .route("/authentication/login", 200, json!({ "jwt": "fresh-token" }))
                .route(
                    "/users/profile",
                    200,
                    json!({ "id": 5, "username": "anna", "roles": ["USER", "ADMIN"] }),
                ),
        );

        let session = h.api.auth().login("anna", "secret").await.unwrap();

        assert_eq!(session.token.as_deref(), Some("fresh-token"));
        assert_eq!(h.storage.get(TOKEN_KEY).unwrap().as_deref(), Some("fresh-token"));
        assert!(h.api.session().is_admin().unwrap());
        assert_eq!(
            h.transport.call("/authentication/login").body,
            Some(json!({ "username": "anna", "password": "secret" }))
        );
        assert_eq!(
            h.transport.call("/users/profile").header("Authorization"),
            Some("Bearer fresh-token")
        );
    }

    #[tokio::test]
    async fn test_login_tolerates_profile_failure() {
        let h = harness(
            MockTransport::default()
                .route("/authentication/login", 200, json!({ "jwt": "fresh-token" }))
                .route("/users/profile", 500, json!({ "message": "down" })),
        );

        let session = h.api.auth().login("anna", "secret").await.unwrap();

        assert!(session.user.is_none());
        assert!(h.api.session().is_authenticated().unwrap());
    }

    #[tokio::test]
    async fn test_login_without_jwt() {
        let h = harness(MockTransport::default().route("/authentication/login", 200, json!({})));

        let err = h.api.auth().login("anna", "secret").await.unwrap_err();

        assert!(matches!(err, ClientError::MissingToken));
        assert!(!h.api.session().is_authenticated().unwrap());
    }

    #[tokio::test]
    async fn test_login_rejected_credentials() {
        let h = harness(MockTransport::default().route(
            "/authentication/login",
            403,
            json!({ "message": "Bad credentials" }),
        ));

        let err = h.api.auth().login("anna", "wrong").await.unwrap_err();

        assert_eq!(err.to_string(), "Bad credentials");
    }

    fn registration() -> Registration {
        Registration {
            firstname: "Ivan".to_string(),
            lastname: "Petrov".to_string(),
            date_of_birth: "1990-05-01".to_string(),
            email: "ivan@example.com".to_string(),
            username: "ivan".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_signs_in_before_creating_customer() {
        let h = harness(
            MockTransport::default()
                .route("/users/create", 201, json!({ "id": 9, "username": "ivan" }))
                .route("/authentication/login", 200, json!({ "jwt": "fresh" }))
                .route("/customers/create", 201, json!({ "id": 12, "email": "ivan@example.com" }))
                .guard("/customers/create", "fresh")
                .route(
                    "/users/profile",
                    200,
                    json!({ "id": 9, "username": "ivan", "customerId": 12, "roles": ["USER"] }),
                )
                .guard("/users/profile", "fresh"),
        );

        let outcome = h.api.auth().register(&registration()).await.unwrap();

        assert_eq!(outcome.user["id"], 9);
        assert_eq!(outcome.customer.get().map(|c| c.id), Some(12));
        assert_eq!(outcome.session.token.as_deref(), Some("fresh"));
        assert_eq!(h.storage.get(TOKEN_KEY).unwrap().as_deref(), Some("fresh"));
        assert_eq!(h.api.session().customer_id().unwrap(), Some(12));
        assert!(h.navigator.current().is_none());

        let urls: Vec<String> = h.transport.seen().into_iter().map(|d| d.url).collect();
        assert_eq!(
            urls,
            vec!["/users/create", "/authentication/login", "/customers/create", "/users/profile"]
        );

        let create = h.transport.call("/users/create");
        assert!(!create.has_authorization());
        let body = create.body.unwrap();
        assert_eq!(body["roles"], json!(["USER"]));
        assert_eq!(body["active"], true);
        assert_eq!(body["enabled"], true);
        assert_eq!(body["dateOfBirth"], "1990-05-01");

        assert_eq!(
            h.transport.call("/authentication/login").body,
            Some(json!({ "username": "ivan", "password": "secret" }))
        );
        let customer = h.transport.call("/customers/create").body.unwrap();
        assert_eq!(customer["email"], "ivan@example.com");
    }

    #[tokio::test]
    async fn test_register_keeps_form_profile_when_backend_has_none() {
        let h = harness(
            MockTransport::default()
                .route("/users/create", 201, json!({ "id": 9 }))
                .route("/authentication/login", 200, json!({ "jwt": "fresh" }))
                .route("/customers/create", 500, json!({ "message": "duplicate" }))
                .route("/users/profile", 503, json!({ "message": "down" })),
        );

        let outcome = h.api.auth().register(&registration()).await.unwrap();

        assert!(matches!(outcome.customer, OptionalFetch::Ignored(_)));
        let user = h.api.session().user().unwrap().unwrap();
        assert_eq!(user.id, None);
        assert_eq!(user.username, "ivan");
        assert_eq!(user.firstname.as_deref(), Some("Ivan"));
        assert_eq!(user.date_of_birth.as_deref(), Some("1990-05-01"));
        assert_eq!(outcome.session.user, Some(user));
        assert!(h.api.session().is_authenticated().unwrap());
    }

    #[tokio::test]
    async fn test_register_without_jwt_stores_nothing() {
        let h = harness(
            MockTransport::default()
                .route("/users/create", 201, json!({ "id": 9 }))
                .route("/authentication/login", 200, json!({})),
        );

        let err = h.api.auth().register(&registration()).await.unwrap_err();

        assert!(matches!(err, ClientError::MissingToken));
        assert!(h.storage.is_empty());
        assert!(h.transport.seen().iter().all(|d| d.url != "/customers/create"));
    }

    #[tokio::test]
    async fn test_logout() {
        let h = signed_in(MockTransport::default());

        h.api.auth().logout().unwrap();

        assert!(h.storage.is_empty());
        assert_eq!(h.navigator.current().as_deref(), Some("/login"));
        assert!(h.transport.seen().is_empty());
    }

    #[tokio::test]
    async fn test_verify_password() {
        let h = signed_in(MockTransport::default().route("/passwords/verify", 200, json!({ "valid": true })));

        let value = h.api.auth().verify_password("secret").await.unwrap();

        assert_eq!(value["valid"], true);
        assert_eq!(h.transport.last().method, CallMethod::Post);
    }

    // ---- accounts / transactions / cards ----

    #[tokio::test]
    async fn test_history_fans_out_and_sorts_newest_first() {
        let h = signed_in(
            MockTransport::default()
                .route(
                    "/accounts/customer/12",
                    200,
                    json!([{ "id": 1, "balance": 10 }, { "id": 2, "balance": 20 }, { "id": 3, "balance": 0 }]),
                )
                .route(
                    "/transactions/account/1",
                    200,
                    json!([
                        { "id": 11, "amount": 5, "type": "DEPOSIT", "timestamp": "2024-01-01T10:00:00" },
                        { "id": 12, "amount": 7, "type": "WITHDRAWAL", "timestamp": "2024-03-01T10:00:00" }
                    ]),
                )
                .route("/transactions/account/2", 500, json!({ "message": "down" }))
                .route(
                    "/transactions/account/3",
                    200,
                    json!([{ "id": 31, "amount": 1, "type": "TRANSFER_IN", "timestamp": "2024-02-01T10:00:00Z" }]),
                ),
        );

        let customer_id = h.api.session().customer_id().unwrap().unwrap();
        let history = h
            .api
            .transactions()
            .history_for_customer(customer_id)
            .await
            .unwrap();

        let ids: Vec<i64> = history.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![12, 31, 11]);
    }

    #[tokio::test]
    async fn test_history_stops_on_unauthorized() {
        let h = signed_in(
            MockTransport::default()
                .route("/accounts/customer/12", 200, json!([{ "id": 1, "balance": 10 }]))
                .route("/transactions/account/1", 401, json!({})),
        );

        let err = h.api.transactions().history_for_customer(12).await.unwrap_err();

        assert!(matches!(err, ClientError::Unauthorized));
    }

    #[tokio::test]
    async fn test_overview_fetches_side_data_best_effort() {
        let h = signed_in(
            MockTransport::default()
                .route("/accounts/7", 200, json!({ "id": 7, "balance": 100, "status": "ACTIVE" }))
                .route(
                    "/cards/account/7",
                    200,
                    json!([{ "id": 4, "accountId": 7, "cardNumber": "4000001234567899" }]),
                ),
        );

        let overview = h.api.accounts().overview(7).await.unwrap();

        assert!(overview.account.is_active());
        assert!(matches!(overview.transactions, OptionalFetch::Absent));
        assert_eq!(overview.cards.get().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_by_card_sends_digits_only() {
        let h = signed_in(
            MockTransport::default().route("/accounts/card/4000001234567899", 200, json!({ "id": 7, "balance": 1 })),
        );

        let account = h.api.accounts().by_card("4000 0012-3456 7899").await.unwrap();
        assert_eq!(account.id, 7);

        let err = h.api.accounts().by_card("----").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidInput(_)));
        assert_eq!(h.transport.seen().len(), 1);
    }

    #[tokio::test]
    async fn test_create_account_opens_empty() {
        let h = signed_in(MockTransport::default().route("/accounts", 201, json!({ "id": 8, "balance": 0 })));

        h.api.accounts().create(12, AccountType::Savings).await.unwrap();

        assert_eq!(
            h.transport.last().body,
            Some(json!({ "customerId": 12, "initialBalance": 0.0, "type": "SAVINGS" }))
        );
    }

    #[tokio::test]
    async fn test_external_transfers_use_directional_types() {
        let reply = json!({ "id": 1, "amount": 10, "type": "TRANSFER_OUT" });
        let h = signed_in(MockTransport::default().route("/transactions", 201, reply));

        let tx = h
            .api
            .transactions()
            .transfer_external(7, 10.0, "To another bank")
            .await
            .unwrap();
        assert_eq!(tx.transaction_type, TransactionType::TransferOut);
        assert_eq!(h.transport.last().body.unwrap()["type"], "TRANSFER_OUT");

        h.api
            .transactions()
            .deposit_external(7, 10.0, "From another bank")
            .await
            .unwrap();
        assert_eq!(h.transport.last().body.unwrap()["type"], "TRANSFER_IN");
    }

    #[tokio::test]
    async fn test_invalid_amounts_make_no_call() {
        let h = signed_in(MockTransport::default());
        let transactions = h.api.transactions();

        assert!(matches!(
            transactions.deposit(7, 0.0, "").await,
            Err(ClientError::InvalidInput(_))
        ));
        assert!(matches!(
            transactions.transfer(7, 8, f64::NAN, "").await,
            Err(ClientError::InvalidInput(_))
        ));
        assert!(matches!(
            transactions.transfer(7, 7, 10.0, "").await,
            Err(ClientError::InvalidInput(_))
        ));
        assert!(h.transport.seen().is_empty());
    }

    #[tokio::test]
    async fn test_internal_transfer_body() {
        let h = signed_in(MockTransport::default().route("/transactions/transfer", 200, json!({ "ok": true })));

        h.api.transactions().transfer(1, 2, 250.75, "Rent").await.unwrap();

        assert_eq!(
            h.transport.last().body,
            Some(json!({
                "sourceAccountId": 1,
                "targetAccountId": 2,
                "amount": 250.75,
                "description": "Rent"
            }))
        );
    }

    #[tokio::test]
    async fn test_customer_lookup_encodes_email() {
        let h = signed_in(
            MockTransport::default().route("/customers/find/anna%2Bbank%40example.com", 200, json!({ "id": 12 })),
        );

        let customer = h.api.customers().find_by_email("anna+bank@example.com").await.unwrap();

        assert_eq!(customer.id, 12);
    }

    // ---- admin ----

    #[tokio::test]
    async fn test_admin_search_encodes_query() {
        let h = signed_in(MockTransport::default().route(
            "/users/search?query=anna%20smith&page=0&size=10",
            200,
            json!({
                "content": [{ "id": 5, "username": "anna", "status": "BANNED" }],
                "totalPages": 1,
                "totalElements": 1
            }),
        ));

        let page = h.api.admin_users().search("anna smith", 0, 10).await.unwrap();

        assert_eq!(page.total_elements, 1);
        assert!(page.content[0].is_banned());
    }

    #[tokio::test]
    async fn test_admin_list_defaults_missing_fields() {
        let h = signed_in(MockTransport::default().route("/users/all?page=2&size=20", 200, json!({})));

        let page = h.api.admin_users().list(2, 20).await.unwrap();

        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_admin_role_and_delete_calls() {
        let h = signed_in(
            MockTransport::default()
                .route("/users/roles/add", 200, json!({ "ok": true }))
                .route("/users/roles/remove", 200, json!({ "ok": true }))
                .route("/users/delete/9", 200, json!({ "message": "deleted" })),
        );
        let admin = h.api.admin_users();

        admin.add_role("ivan", "ADMIN").await.unwrap();
        assert_eq!(
            h.transport.last().body,
            Some(json!({ "username": "ivan", "roleName": "ADMIN" }))
        );

        admin.remove_role("ivan", "ADMIN").await.unwrap();
        assert_eq!(h.transport.last().url, "/users/roles/remove");

        admin.delete(9).await.unwrap();
        assert_eq!(h.transport.last().method, CallMethod::Delete);
    }
}
