//! Verify-then-decode integration tests.

#[cfg(test)]
mod tests {
    use ztchooks_auth::{FixedClock, Tolerance, verify_with_clock};
    use ztchooks_model::{Hook, HookType, decode_hook, hook_type};

    use crate::{
        TEST_HEADER, TEST_PAYLOAD, TEST_SECRET, TEST_TIMESTAMP, init_tracing, random_secret,
        sign_header,
    };

    #[test]
    fn test_should_decode_verified_test_vector() {
        init_tracing();
        let payload = TEST_PAYLOAD.as_bytes();
        let clock = FixedClock::new(TEST_TIMESTAMP + 10);
        assert!(verify_with_clock(
            TEST_SECRET,
            TEST_HEADER,
            payload,
            Tolerance::secs(60),
            &clock,
        ));

        let Hook::NetworkJoin(join) = decode_hook(payload).unwrap() else {
            panic!("expected NETWORK_JOIN");
        };
        assert_eq!(join.base.hook_id, "ae76d4c0-c94e-4025-a648-2c504eb90e3c");
        assert_eq!(join.network_id, "19d9808567a17ccf");
        assert_eq!(join.member_id, "a02505e545");
    }

    #[test]
    fn test_should_dispatch_every_signed_hook_type() {
        init_tracing();
        let secret = random_secret();
        let clock = FixedClock::new(TEST_TIMESTAMP);

        for ty in HookType::ALL {
            let payload = format!(
                r#"{{"hook_id":"h-{ty}","org_id":"o","hook_type":"{}"}}"#,
                ty.as_str()
            );
            let header = sign_header(&secret, TEST_TIMESTAMP, payload.as_bytes());
            assert!(verify_with_clock(
                &secret,
                &header,
                payload.as_bytes(),
                Tolerance::default(),
                &clock,
            ));

            assert_eq!(hook_type(payload.as_bytes()).unwrap(), ty);
            let hook = decode_hook(payload.as_bytes()).unwrap();
            assert_eq!(hook.hook_type(), ty);
            assert_eq!(hook.base().hook_id, format!("h-{ty}"));
        }
    }

    #[test]
    fn test_should_decode_member_config_changed() {
        init_tracing();
        let payload = serde_json::json!({
            "hook_id": "h",
            "org_id": "o",
            "hook_type": "MEMBER_CONFIG_CHANGED",
            "network_id": "19d9808567a2c324",
            "member_id": "a02505e545",
            "old_config": { "authorized": false },
            "new_config": { "authorized": true, "ipAssignments": ["10.144.0.7"] },
            "user_id": "u",
            "user_email": "user@example.com"
        })
        .to_string();

        let Hook::MemberConfigChanged(changed) = decode_hook(payload.as_bytes()).unwrap() else {
            panic!("expected MEMBER_CONFIG_CHANGED");
        };
        assert_eq!(changed.old_config.unwrap()["authorized"], false);
        assert_eq!(changed.new_config.unwrap()["ipAssignments"][0], "10.144.0.7");
    }
}
