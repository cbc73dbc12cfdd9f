#[tokio::main]
async fn main() -> anyhow::Result<()> {
    answer_backend::run().await
}
