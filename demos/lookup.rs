use std::time::Duration;

use tracing_subscriber::EnvFilter;
use userlookup_http::{RetryPolicy, UserServiceClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let email = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: lookup <email>"))?;

    let users = UserServiceClient::from_env()?.with_policy(
        RetryPolicy::default().with_per_attempt_timeout(Duration::from_secs(2)),
    );

    match users.get_user_by_email(&email).await? {
        Some(user) => println!("{} <{}> ({})", user.username, user.user_email, user.user_id),
        None => println!("no user registered for {email}"),
    }

    Ok(())
}
