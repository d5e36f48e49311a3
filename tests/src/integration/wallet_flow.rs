//! # Wallet Authentication Flows
//!
//! UD-01 signature recovery driving UD-02 against the in-memory store, with
//! real signatures from known and random keys.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use shared_types::{IndexUserRequest, Settings, Theme, UniqueField};
    use ud_01_signature_recovery::{RecoveryError, VerificationOutcome};
    use ud_02_user_directory::{
        Rejection, UserDirectoryApi, UserRepository, WalletAuthOutcome, WalletLoginRequest,
        WalletRegisterRequest,
    };

    const MESSAGE: &str = "Sign in to chat\nNonce: 8f1c2e";

    fn login_request(address: &str, signature: String) -> WalletLoginRequest {
        WalletLoginRequest {
            wallet_address: address.into(),
            message: MESSAGE.into(),
            signature,
        }
    }

    fn register_request(address: &str, signature: String, username: &str) -> WalletRegisterRequest {
        WalletRegisterRequest {
            wallet_address: address.into(),
            message: MESSAGE.into(),
            signature,
            username: username.into(),
            settings: None,
        }
    }

    /// Login on an empty store, register, then log in again.
    #[tokio::test]
    async fn test_end_to_end_wallet_flow() {
        let h = DirectoryHarness::new();
        let key = known_key();
        let claimed = KNOWN_ADDRESS.to_uppercase().replace("0X", "0x");
        let signature = sign_personal_hex(MESSAGE, &key);

        // Step 1: unknown wallet
        let first = h
            .directory
            .login_with_wallet(login_request(&claimed, signature.clone()))
            .await
            .unwrap();
        assert_eq!(first, WalletAuthOutcome::NeedsRegistration);
        assert!(h.repository.is_empty());

        // Step 2: register
        let registered = match h
            .directory
            .register_with_wallet(register_request(&claimed, signature.clone(), "wallet-user"))
            .await
            .unwrap()
        {
            WalletAuthOutcome::Authenticated(user) => user,
            other => panic!("registration failed: {other:?}"),
        };

        let canonical = KNOWN_ADDRESS.to_lowercase();
        let stored = h
            .repository
            .find_by_wallet_address(&canonical)
            .await
            .unwrap()
            .expect("wallet identity stored");
        assert_eq!(stored.wallet_address.as_deref(), Some(canonical.as_str()));
        assert_eq!(stored.username, "wallet-user");
        assert_eq!(stored.settings.theme, Theme::Dark);
        assert!(!stored.settings.notifications);
        assert!(stored.password_hash.is_none());
        assert_eq!(Some(&registered.id), stored.id.as_ref());
        assert_eq!(
            *h.search.indexed.lock(),
            vec![IndexUserRequest {
                id: registered.id.clone(),
                username: "wallet-user".into(),
            }]
        );

        // Step 3: same wallet logs in
        let again = h
            .directory
            .login_with_wallet(login_request(KNOWN_ADDRESS, signature))
            .await
            .unwrap();
        assert_eq!(again, WalletAuthOutcome::Authenticated(registered));
    }

    #[tokio::test]
    async fn test_mixed_case_duplicate_registration_collides() {
        let h = DirectoryHarness::new();
        let key = random_key();
        let address = address_of(&key);
        let signature = sign_personal_hex(MESSAGE, &key);

        let first = h
            .directory
            .register_with_wallet(register_request(
                &address.to_uppercase().replace("0X", "0x"),
                signature.clone(),
                "first-user",
            ))
            .await
            .unwrap();
        let second = h
            .directory
            .register_with_wallet(register_request(&address, signature, "second-user"))
            .await
            .unwrap();

        assert!(matches!(first, WalletAuthOutcome::Authenticated(_)));
        assert_eq!(
            second,
            WalletAuthOutcome::Rejected(Rejection::Conflict(UniqueField::WalletAddress))
        );
        assert_eq!(h.repository.len(), 1);
    }

    #[tokio::test]
    async fn test_wrong_claimed_address_always_rejected() {
        let h = DirectoryHarness::new();
        let signer = random_key();
        let other = address_of(&random_key());

        for _ in 0..5 {
            let signature = sign_personal_hex(MESSAGE, &signer);

            let login = h
                .directory
                .login_with_wallet(login_request(&other, signature.clone()))
                .await
                .unwrap();
            let register = h
                .directory
                .register_with_wallet(register_request(&other, signature, "wallet-user"))
                .await
                .unwrap();

            assert!(matches!(
                login,
                WalletAuthOutcome::Rejected(Rejection::SignatureNotVerified(
                    VerificationOutcome::NotVerified { .. }
                ))
            ));
            assert!(matches!(
                register,
                WalletAuthOutcome::Rejected(Rejection::SignatureNotVerified(_))
            ));
        }

        assert!(h.repository.is_empty());
        assert!(h.search.indexed.lock().is_empty());
    }

    #[tokio::test]
    async fn test_signature_over_other_message_rejected() {
        let h = DirectoryHarness::new();
        let key = random_key();
        let signature = sign_personal_hex("a different challenge", &key);

        let outcome = h
            .directory
            .login_with_wallet(login_request(&address_of(&key), signature))
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            WalletAuthOutcome::Rejected(Rejection::SignatureNotVerified(
                VerificationOutcome::NotVerified { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn test_malformed_signatures_rejected() {
        let h = DirectoryHarness::new();

        let cases = [
            ("0x1234".to_string(), VerificationOutcome::Malformed(RecoveryError::InvalidLength(2))),
            ("not hex".to_string(), VerificationOutcome::Malformed(RecoveryError::InvalidEncoding)),
            (
                format!("0x{}", "00".repeat(65)),
                VerificationOutcome::Malformed(RecoveryError::NotRecoverable),
            ),
        ];

        for (signature, expected) in cases {
            let outcome = h
                .directory
                .login_with_wallet(login_request(KNOWN_ADDRESS, signature))
                .await
                .unwrap();
            assert_eq!(
                outcome,
                WalletAuthOutcome::Rejected(Rejection::SignatureNotVerified(expected))
            );
        }
    }

    #[tokio::test]
    async fn test_high_s_signature_from_registered_wallet_authenticates() {
        let h = DirectoryHarness::new();
        let key = known_key();
        let signature = sign_personal(MESSAGE, &key);

        h.directory
            .register_with_wallet(register_request(
                KNOWN_ADDRESS,
                format!("0x{}", hex::encode(signature)),
                "wallet-user",
            ))
            .await
            .unwrap();

        let outcome = h
            .directory
            .login_with_wallet(login_request(
                KNOWN_ADDRESS,
                hex::encode(to_high_s(&signature)),
            ))
            .await
            .unwrap();

        assert!(matches!(outcome, WalletAuthOutcome::Authenticated(_)));
    }

    #[tokio::test]
    async fn test_zero_one_recovery_byte_accepted() {
        let h = DirectoryHarness::new();
        let key = random_key();
        let mut signature = sign_personal(MESSAGE, &key);
        signature[64] -= 27;

        let outcome = h
            .directory
            .register_with_wallet(register_request(
                &address_of(&key),
                hex::encode(signature),
                "wallet-user",
            ))
            .await
            .unwrap();

        assert!(matches!(outcome, WalletAuthOutcome::Authenticated(_)));
    }

    #[tokio::test]
    async fn test_registration_keeps_supplied_settings() {
        let h = DirectoryHarness::new();
        let key = random_key();
        let settings = Settings {
            theme: Theme::Light,
            notifications: true,
        };
        let mut request = register_request(
            &address_of(&key),
            sign_personal_hex(MESSAGE, &key),
            "wallet-user",
        );
        request.settings = Some(settings);

        h.directory.register_with_wallet(request).await.unwrap();

        let stored = h
            .repository
            .find_by_username("wallet-user")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.settings, settings);
    }

    #[tokio::test]
    async fn test_wallet_username_taken_by_password_user() {
        let h = DirectoryHarness::new();
        h.directory
            .register_user(ud_02_user_directory::RegisterRequest {
                email: "taken@example.com".into(),
                username: "taken-name".into(),
                password: "password-123".into(),
            })
            .await
            .unwrap();

        let key = random_key();
        let outcome = h
            .directory
            .register_with_wallet(register_request(
                &address_of(&key),
                sign_personal_hex(MESSAGE, &key),
                "taken-name",
            ))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            WalletAuthOutcome::Rejected(Rejection::Conflict(UniqueField::Username))
        );
        assert!(!h
            .repository
            .exists_by_wallet_address(&address_of(&key))
            .await
            .unwrap());
    }
}
