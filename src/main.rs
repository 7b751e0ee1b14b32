#[tokio::main]
async fn main() -> anyhow::Result<()> {
    latchkey::cli::run_cli().await
}
