//! Tests for the AES-GCM crypto service

use keystash_domain::ports::CryptoProvider;
use keystash_infrastructure::crypto::CryptoService;

#[test]
fn test_encrypt_then_decrypt() {
    let service = CryptoService::new(CryptoService::generate_master_key()).unwrap();
    let encrypted = service.encrypt(b"refresh-token").unwrap();

    assert_ne!(encrypted.ciphertext, b"refresh-token".to_vec());
    assert_eq!(service.decrypt(&encrypted).unwrap(), b"refresh-token".to_vec());
}

#[test]
fn test_other_key_cannot_decrypt() {
    let alice = CryptoService::new(CryptoService::generate_master_key()).unwrap();
    let mallory = CryptoService::new(CryptoService::generate_master_key()).unwrap();

    let encrypted = alice.encrypt(b"secret").unwrap();
    assert!(mallory.decrypt(&encrypted).is_err());
}

#[test]
fn test_tampered_ciphertext_is_rejected() {
    let service = CryptoService::new(CryptoService::generate_master_key()).unwrap();
    let mut encrypted = service.encrypt(b"secret").unwrap();
    encrypted.ciphertext[0] ^= 0x01;

    assert!(service.decrypt(&encrypted).is_err());
}

#[test]
fn test_from_hex() {
    let key = CryptoService::generate_master_key();
    let service = CryptoService::from_hex(&hex::encode(&key)).unwrap();
    let reference = CryptoService::new(key).unwrap();

    let encrypted = reference.encrypt(b"shared").unwrap();
    assert_eq!(service.decrypt(&encrypted).unwrap(), b"shared".to_vec());
    assert!(CryptoService::from_hex("not hex").is_err());
}

#[test]
fn test_provider_name() {
    let service = CryptoService::new(vec![1u8; 32]).unwrap();
    assert_eq!(CryptoProvider::provider_name(&service), "aes-256-gcm");
}
