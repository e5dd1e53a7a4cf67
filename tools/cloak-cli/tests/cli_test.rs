//! CLI integration tests using assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;

const TEST_KEY: &str = "extremely-secret-hmac-secret";

fn cloak_cmd() -> Command {
    Command::cargo_bin("cloak").unwrap()
}

mod canonicalize {
    use super::*;

    #[test]
    fn test_canonicalize_sorts_keys() {
        cloak_cmd()
            .arg("canonicalize")
            .arg("tests/fixtures/payload.json")
            .assert()
            .success()
            .stdout(predicate::str::contains(r#"{"age":30,"name":"John Doe"}"#));
    }

    #[test]
    fn test_canonicalize_nonexistent_file() {
        cloak_cmd()
            .arg("canonicalize")
            .arg("nonexistent.json")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read file"));
    }
}

mod encode {
    use super::*;

    #[test]
    fn test_encode_known_tokens() {
        cloak_cmd()
            .arg("encode")
            .arg("tests/fixtures/payload.json")
            .assert()
            .success()
            .stdout(predicate::str::contains("IkpvaG4gRG9lIg=="))
            .stdout(predicate::str::contains("MzA="));
    }

    #[test]
    fn test_encode_unknown_algorithm() {
        cloak_cmd()
            .arg("encode")
            .arg("tests/fixtures/payload.json")
            .arg("--algorithm")
            .arg("aes-256")
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown algorithm: aes-256"));
    }
}

mod decode {
    use super::*;

    #[test]
    fn test_decode_mixed_content() {
        cloak_cmd()
            .arg("decode")
            .arg("tests/fixtures/encoded_mixed.json")
            .assert()
            .success()
            .stdout(predicate::str::contains("John Doe"))
            .stdout(predicate::str::contains("\"age\":30"))
            .stdout(predicate::str::contains("1998-11-19"));
    }

    #[test]
    fn test_rot13_round_trip_through_files() {
        let dir = std::env::temp_dir().join("cloak-cli-rot13-test");
        std::fs::create_dir_all(&dir).unwrap();
        let encoded_path = dir.join("encoded.json");

        let output = cloak_cmd()
            .arg("encode")
            .arg("tests/fixtures/payload.json")
            .arg("--algorithm")
            .arg("rot13")
            .output()
            .unwrap();
        assert!(output.status.success());
        std::fs::write(&encoded_path, &output.stdout).unwrap();

        cloak_cmd()
            .arg("decode")
            .arg(&encoded_path)
            .arg("--algorithm")
            .arg("rot13")
            .assert()
            .success()
            .stdout(predicate::str::contains("John Doe"));
    }
}

mod signing {
    use super::*;

    fn sign_fixture() -> String {
        let output = cloak_cmd()
            .arg("sign")
            .arg("tests/fixtures/payload.json")
            .arg("--key")
            .arg(TEST_KEY)
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    #[test]
    fn test_sign_outputs_hex_tag() {
        let tag = sign_fixture();
        assert_eq!(tag.len(), 64);
        assert!(tag.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_sign_is_deterministic() {
        assert_eq!(sign_fixture(), sign_fixture());
    }

    #[test]
    fn test_verify_accepts_valid_signature() {
        let tag = sign_fixture();

        cloak_cmd()
            .arg("verify")
            .arg("tests/fixtures/payload.json")
            .arg("--key")
            .arg(TEST_KEY)
            .arg("--signature")
            .arg(&tag)
            .assert()
            .success()
            .stdout(predicate::str::contains("Signature is valid"));
    }

    #[test]
    fn test_verify_rejects_invalid_signature() {
        cloak_cmd()
            .arg("verify")
            .arg("tests/fixtures/payload.json")
            .arg("--key")
            .arg(TEST_KEY)
            .arg("--signature")
            .arg("invalid-signature")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Signature is invalid"));
    }

    #[test]
    fn test_verify_rejects_wrong_key() {
        let tag = sign_fixture();

        cloak_cmd()
            .arg("verify")
            .arg("tests/fixtures/payload.json")
            .arg("--key")
            .arg("a-different-key")
            .arg("--signature")
            .arg(&tag)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Signature is invalid"));
    }
}
