use redacted::Redacted;

fn length_of(secret: Redacted<&String>) -> Redacted<usize> {
    secret.transform(|s| s.len())
}

fn main() {
    let secret = Redacted::wrap("token".to_string());
    let length = length_of(secret.by_ref());
    let nested = Redacted::wrap(length);
    let flat: Redacted<usize> = nested.flatten();
    assert_eq!(Redacted::unwrap(flat), 5);
    assert_eq!(Redacted::unwrap(secret), "token");
}
