use userlookup_http::UserServiceClient;

fn load_live_email() -> Result<String, String> {
    std::env::var("ADMIN_API_LIVE_EMAIL")
        .map_err(|_| "ADMIN_API_LIVE_EMAIL env is required".to_owned())
}

#[tokio::test]
async fn live_lookup_roundtrip() {
    let (users, email) = match (UserServiceClient::from_env(), load_live_email()) {
        (Ok(users), Ok(email)) => (users, email),
        _ => {
            eprintln!("skipping live test: ADMIN_API_TOKEN / ADMIN_API_LIVE_EMAIL not set");
            return;
        }
    };

    let user = users
        .get_user_by_email(&email)
        .await
        .expect("live lookup must answer")
        .expect("live user must exist");
    assert!(user.user_email.eq_ignore_ascii_case(&email));

    let missing = users
        .get_user_by_email("definitely-missing-user@invalid.example")
        .await
        .expect("unknown user must not be an error");
    assert_eq!(missing, None);
}
