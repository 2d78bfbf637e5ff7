//! Property tests for session tokens

use areacheck::backend::auth::TokenService;
use proptest::prelude::*;

proptest! {
    #[test]
    fn token_carries_username(username in "\\PC{5,40}") {
        let tokens = TokenService::new(b"property-secret");
        let token = tokens.issue(&username).unwrap();

        prop_assert_eq!(tokens.verify(&token).unwrap(), username);
    }

    #[test]
    fn token_rejected_under_other_secret(
        username in "[a-z0-9]{5,20}",
        secret in proptest::collection::vec(any::<u8>(), 8..64),
    ) {
        prop_assume!(secret.as_slice() != b"property-secret");
        let token = TokenService::new(&secret).issue(&username).unwrap();

        prop_assert!(TokenService::new(b"property-secret").verify(&token).is_err());
    }

    #[test]
    fn arbitrary_strings_are_not_tokens(garbage in "[A-Za-z0-9._-]{0,80}") {
        prop_assert!(TokenService::new(b"property-secret").verify(&garbage).is_err());
    }
}
