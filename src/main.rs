#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), noteshell_landing::backend::ServerError> {
    noteshell_landing::backend::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    noteshell_landing::frontend::run();
}
