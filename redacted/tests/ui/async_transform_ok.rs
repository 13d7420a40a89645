use std::time::Duration;

use redacted::Redacted;

async fn lookup(key: &str) -> Result<u64, String> {
    tokio::time::sleep(Duration::from_millis(1)).await;
    key.parse::<u64>().map_err(|err| err.to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let key = Redacted::wrap("7".to_string());
    let value = key.try_transform_async(|k| lookup(k)).await.unwrap();
    let doubled = value.map_async(|v| async move { v * 2 }).await;
    assert_eq!(Redacted::unwrap(doubled), 14);
}
