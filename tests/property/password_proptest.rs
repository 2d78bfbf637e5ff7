//! Property tests for salted password hashing
//!
//! bcrypt is slow even at the minimum cost, so the case count is kept low.

use areacheck::backend::auth::passwords::MIN_COST;
use areacheck::backend::auth::{PasswordHasher, Salt};
use bcrypt::BcryptError;
use proptest::prelude::*;

fn hasher() -> PasswordHasher {
    PasswordHasher::new(MIN_COST).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn hash_verifies_with_same_salt(password in "[ -~]{6,72}", salt in any::<[u8; 16]>()) {
        let hasher = hasher();
        let salt = Salt::from(salt);
        let digest = hasher.hash(&password, &salt).unwrap();

        prop_assert_ne!(&digest, &password);
        prop_assert!(hasher.verify(&password, &salt, &digest).unwrap());
    }

    #[test]
    fn other_password_does_not_verify(
        password in "[a-z]{6,20}",
        other in "[A-Z]{6,20}",
        salt in any::<[u8; 16]>(),
    ) {
        let hasher = hasher();
        let salt = Salt::from(salt);
        let digest = hasher.hash(&password, &salt).unwrap();

        prop_assert!(!hasher.verify(&other, &salt, &digest).unwrap());
    }

    #[test]
    fn shared_prefix_does_not_verify(
        password in "[a-z]{6,100}",
        tail in "[A-Z]{1,10}",
        salt in any::<[u8; 16]>(),
    ) {
        let hasher = hasher();
        let salt = Salt::from(salt);
        let other = format!("{password}{tail}");

        match hasher.hash(&password, &salt) {
            Ok(digest) => {
                prop_assert!(password.len() <= 72);
                prop_assert!(!hasher.verify(&other, &salt, &digest).unwrap());
            }
            Err(err) => {
                prop_assert!(password.len() > 72);
                prop_assert!(matches!(err, BcryptError::Truncation(_)));
            }
        }
    }

    #[test]
    fn hashing_is_deterministic_per_salt(password in "[ -~]{6,40}", salt in any::<[u8; 16]>()) {
        let hasher = hasher();
        let salt = Salt::from(salt);

        prop_assert_eq!(
            hasher.hash(&password, &salt).unwrap(),
            hasher.hash(&password, &salt).unwrap()
        );
    }
}
