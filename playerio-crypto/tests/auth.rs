use playerio_crypto::{calc_auth, calc_auth_at, hmac_sha1, to_hex};

fn assert_auth_shape(auth: &str) {
    let (ts, hex) = auth.split_once(':').expect("missing ':' separator");
    assert!(!ts.is_empty() && ts.bytes().all(|b| b.is_ascii_digit()), "bad timestamp: {ts}");
    assert_eq!(hex.len(), 40, "HMAC-SHA1 is 160 bits");
    assert!(hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')), "not lowercase hex: {hex}");
}

// ── HMAC ──────────────────────────────────────────────────────────────────────

#[test]
fn hmac_sha1_known_vector() {
    let tag = hmac_sha1(b"key", b"The quick brown fox jumps over the lazy dog");
    assert_eq!(to_hex(&tag), "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9");
}

#[test]
fn hmac_sha1_rfc2202_case_2() {
    let tag = hmac_sha1(b"Jefe", b"what do ya want for nothing?");
    assert_eq!(to_hex(&tag), "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79");
}

#[test]
fn hex_is_lowercase_without_separators() {
    assert_eq!(to_hex(&[0x00, 0xab, 0x0f, 0xff]), "00ab0fff");
    assert_eq!(to_hex(&[]), "");
}

// ── calc_auth ─────────────────────────────────────────────────────────────────

#[test]
fn calc_auth_shape() {
    for (user, secret) in [("alice", "secret"), ("", ""), ("ünïcødé", "ß€cret"), ("a:b", "x")] {
        assert_auth_shape(&calc_auth(user, secret));
    }
}

#[test]
fn calc_auth_at_matches_manual_hmac() {
    let auth = calc_auth_at("alice", "secret", 1_700_000_000);
    let expected = to_hex(&hmac_sha1(b"secret", b"1700000000:alice"));
    assert_eq!(auth, format!("1700000000:{expected}"));
}

#[test]
fn same_second_same_value() {
    assert_eq!(
        calc_auth_at("alice", "secret", 1_700_000_000),
        calc_auth_at("alice", "secret", 1_700_000_000)
    );
}

#[test]
fn later_second_has_larger_timestamp() {
    let a = calc_auth_at("alice", "secret", 1_700_000_000);
    let b = calc_auth_at("alice", "secret", 1_700_000_001);
    let ts = |s: &str| s.split_once(':').unwrap().0.parse::<i64>().unwrap();
    assert!(ts(&b) > ts(&a));
    assert_ne!(a.split_once(':').unwrap().1, b.split_once(':').unwrap().1);
}

#[test]
fn calc_auth_uses_current_time() {
    let before = unix_now();
    let auth = calc_auth("alice", "secret");
    let after = unix_now();
    let ts: i64 = auth.split_once(':').unwrap().0.parse().unwrap();
    assert!(before <= ts && ts <= after);
    assert_eq!(auth, calc_auth_at("alice", "secret", ts));
}

fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

#[test]
fn different_secrets_differ() {
    assert_ne!(
        calc_auth_at("alice", "secret", 42),
        calc_auth_at("alice", "Secret", 42)
    );
}
