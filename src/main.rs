#[tokio::main]
async fn main() {
    tienda_backend::run().await;
}
