use redacted::{Redacted, RedactedString};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct DatabaseConfig {
    host: String,
    port: u16,
    password: RedactedString,
    replicas: Vec<Redacted<String>>,
}

fn main() {
    let config: DatabaseConfig = serde_json::from_str(
        r#"{"host":"db","port":5432,"password":"hunter2","replicas":["r1"]}"#,
    )
    .unwrap();
    let copy = config.clone();
    assert_eq!(config, copy);
    assert_eq!(config.password.expose(), "hunter2");
    let _ = format!("{config:?}");
}
