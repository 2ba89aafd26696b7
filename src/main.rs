#[tokio::main(flavor = "current_thread")]
async fn main() {
    token_exchange::start(std::env::args()).await;
}
