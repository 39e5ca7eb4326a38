//! Envelope encrypt → JSON → parse → decrypt with realistic payloads.

use secrecy::ExposeSecret;
use securevault_crypto_core::envelope::{decrypt, encrypt, Envelope, FORMAT_VERSION};
use securevault_crypto_core::CryptoError;

const PASSWORD: &str = "Vault-Export-2024!";

fn entries_json(count: usize) -> String {
    let entries: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": format!("entry-{i}"),
                "label": format!("Service {i}"),
                "username": format!("user{i}@example.com"),
                "password": format!("p@ss-{i}-Ω"),
                "url": "https://example.com/login",
                "notes": "recovery codes in the safe",
                "createdAt": 1_700_000_000_000u64 + i as u64
            })
        })
        .collect();
    serde_json::to_string(&entries).unwrap()
}

#[test]
fn roundtrip_through_json_text() {
    let payload = entries_json(25);
    let json = encrypt(&payload, PASSWORD).unwrap().to_json().unwrap();

    let parsed = Envelope::from_json(&json).unwrap();
    assert_eq!(parsed.version, FORMAT_VERSION);

    let plaintext = decrypt(&parsed, PASSWORD).unwrap();
    assert_eq!(plaintext.expose_secret(), payload);
}

#[test]
fn roundtrip_large_payload() {
    let payload = entries_json(2_000);
    assert!(payload.len() > 256 * 1024);
    let envelope = encrypt(&payload, PASSWORD).unwrap();
    assert_eq!(decrypt(&envelope, PASSWORD).unwrap().expose_secret(), payload);
}

#[test]
fn roundtrip_preserves_unicode_byte_for_byte() {
    let payload = "пароль 🔐 密码 \u{0000} \r\n\t";
    let envelope = encrypt(payload, "ünïcødé pässwörd").unwrap();
    assert_eq!(
        decrypt(&envelope, "ünïcødé pässwörd").unwrap().expose_secret(),
        payload
    );
}

#[test]
fn wire_json_has_exactly_four_members() {
    let json = encrypt("[]", PASSWORD).unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let obj = value.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["data", "iv", "salt", "version"]);
    assert_eq!(obj["version"], 1);
}

#[test]
fn envelope_written_by_hand_is_accepted() {
    // Extra members from other writers are tolerated.
    let envelope = encrypt("[]", PASSWORD).unwrap();
    let json = serde_json::json!({
        "version": 1,
        "salt": envelope.salt,
        "iv": envelope.nonce,
        "data": envelope.ciphertext,
        "exportedBy": "SecureVault"
    })
    .to_string();
    let parsed = Envelope::from_json(&json).unwrap();
    assert_eq!(decrypt(&parsed, PASSWORD).unwrap().expose_secret(), "[]");
}

#[test]
fn version_two_is_rejected_at_parse_time() {
    let envelope = encrypt("[]", PASSWORD).unwrap();
    let json = serde_json::json!({
        "data": envelope.ciphertext,
        "iv": envelope.nonce,
        "salt": envelope.salt,
        "version": 2
    })
    .to_string();
    assert!(matches!(
        Envelope::from_json(&json),
        Err(CryptoError::UnsupportedVersion(2))
    ));
}

#[test]
fn wrong_password_rejected() {
    let envelope = encrypt("[]", PASSWORD).unwrap();
    for wrong in ["", "vault-export-2024!", "Vault-Export-2024", "Vault-Export-2024!!"] {
        assert!(matches!(
            decrypt(&envelope, wrong),
            Err(CryptoError::Decryption)
        ));
    }
}
