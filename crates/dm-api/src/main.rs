#[tokio::main]
async fn main() {
    if let Err(err) = dm_api::run().await {
        tracing::error!(error = %err, "dm-api failed");
        std::process::exit(1);
    }
}
