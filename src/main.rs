#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setbuilder::run().await
}
