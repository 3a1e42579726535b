#[tokio::main]
async fn main() -> anyhow::Result<()> {
    jirehs_flashcards_study::run().await
}
