use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    kisansathi::run().await
}
