//! Flipping any single byte of `data`, `iv` or `salt` must be detected.

use securevault_crypto_core::codec;
use securevault_crypto_core::envelope::{decrypt, encrypt, Envelope};
use securevault_crypto_core::CryptoError;

const PASSWORD: &str = "tamper-Check-99";
const PAYLOAD: &str = r#"[{"label":"bank","password":"123456"}]"#;

#[derive(Clone, Copy, Debug)]
enum Field {
    Data,
    Iv,
    Salt,
}

fn flip_byte(envelope: &Envelope, field: Field, index: usize) -> Envelope {
    let mut tampered = envelope.clone();
    let text = match field {
        Field::Data => &mut tampered.ciphertext,
        Field::Iv => &mut tampered.nonce,
        Field::Salt => &mut tampered.salt,
    };
    let mut bytes = codec::decode(text).unwrap();
    bytes[index] ^= 0x01;
    *text = codec::encode(&bytes);
    tampered
}

fn field_len(envelope: &Envelope, field: Field) -> usize {
    let text = match field {
        Field::Data => &envelope.ciphertext,
        Field::Iv => &envelope.nonce,
        Field::Salt => &envelope.salt,
    };
    codec::decode(text).unwrap().len()
}

#[test]
fn every_iv_and_salt_byte_is_authenticated() {
    let envelope = encrypt(PAYLOAD, PASSWORD).unwrap();
    for field in [Field::Iv, Field::Salt] {
        for index in 0..field_len(&envelope, field) {
            let tampered = flip_byte(&envelope, field, index);
            assert!(
                matches!(decrypt(&tampered, PASSWORD), Err(CryptoError::Decryption)),
                "{field:?}[{index}] flip was not detected"
            );
        }
    }
}

#[test]
fn ciphertext_and_tag_bytes_are_authenticated() {
    let envelope = encrypt(PAYLOAD, PASSWORD).unwrap();
    let len = field_len(&envelope, Field::Data);
    // First, middle, last ciphertext byte and every tag byte.
    let mut indices = vec![0, len / 3];
    indices.extend(len - 16..len);
    for index in indices {
        let tampered = flip_byte(&envelope, Field::Data, index);
        assert!(
            matches!(decrypt(&tampered, PASSWORD), Err(CryptoError::Decryption)),
            "data[{index}] flip was not detected"
        );
    }
}

#[test]
fn truncated_data_is_rejected() {
    let envelope = encrypt(PAYLOAD, PASSWORD).unwrap();
    let mut bytes = codec::decode(&envelope.ciphertext).unwrap();
    bytes.truncate(bytes.len() - 1);
    let tampered = Envelope {
        ciphertext: codec::encode(&bytes),
        ..envelope
    };
    assert!(matches!(
        decrypt(&tampered, PASSWORD),
        Err(CryptoError::Decryption)
    ));
}

#[test]
fn swapped_fields_are_rejected() {
    let envelope = encrypt(PAYLOAD, PASSWORD).unwrap();
    let swapped = Envelope {
        nonce: envelope.salt.clone(),
        salt: envelope.nonce.clone(),
        ..envelope
    };
    assert!(matches!(
        decrypt(&swapped, PASSWORD),
        Err(CryptoError::Decryption)
    ));
}
