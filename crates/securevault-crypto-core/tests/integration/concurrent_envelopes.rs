//! Independent encrypt/decrypt calls share no state and can run in parallel.

use std::thread;

use secrecy::ExposeSecret;
use securevault_crypto_core::envelope::{decrypt, encrypt};

#[test]
fn parallel_roundtrips_do_not_interfere() {
    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                scope.spawn(move || {
                    let payload = format!("[{{\"label\":\"worker-{i}\"}}]");
                    let password = format!("Worker-{i}-Password!");
                    let envelope = encrypt(&payload, &password).unwrap();
                    let plaintext = decrypt(&envelope, &password).unwrap();
                    assert_eq!(plaintext.expose_secret(), payload);
                    envelope
                })
            })
            .collect();

        let envelopes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for (i, a) in envelopes.iter().enumerate() {
            for b in &envelopes[i + 1..] {
                assert_ne!(a.salt, b.salt);
                assert_ne!(a.nonce, b.nonce);
            }
        }
    });
}

#[test]
fn envelope_from_one_thread_opens_in_another() {
    let envelope = encrypt("cross-thread", "Handoff-Pass-1").unwrap();
    let plaintext = thread::spawn(move || {
        decrypt(&envelope, "Handoff-Pass-1")
            .unwrap()
            .expose_secret()
            .to_owned()
    })
    .join()
    .unwrap();
    assert_eq!(plaintext, "cross-thread");
}
