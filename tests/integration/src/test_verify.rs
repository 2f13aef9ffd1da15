//! Signature verification integration tests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ztchooks_auth::{
        FixedClock, SIGNATURE_HEADER, Tolerance, VerifierConfig, verify, verify_with_clock,
    };

    use crate::{
        TEST_HEADER, TEST_PAYLOAD, TEST_SECRET, TEST_TIMESTAMP, init_tracing, now_unix,
        random_secret, sign_header,
    };

    #[test]
    fn test_should_verify_published_test_vector() {
        init_tracing();
        assert!(verify(
            TEST_SECRET,
            TEST_HEADER,
            TEST_PAYLOAD.as_bytes(),
            Tolerance::Unbounded,
        ));
    }

    #[test]
    fn test_should_reject_published_test_vector_with_default_tolerance() {
        init_tracing();
        // Signed in 2023; long past the five minute window.
        assert!(!verify(
            TEST_SECRET,
            TEST_HEADER,
            TEST_PAYLOAD.as_bytes(),
            Tolerance::default(),
        ));
    }

    #[test]
    fn test_should_round_trip_fresh_signature_against_wall_clock() {
        init_tracing();
        let secret = random_secret();
        let payload = br#"{"hook_type":"ORG_MEMBER_REMOVED","user_id":"u"}"#;
        let header = sign_header(&secret, now_unix(), payload);

        assert!(verify(&secret, &header, payload, Tolerance::secs(300)));
        assert!(!verify(&random_secret(), &header, payload, Tolerance::secs(300)));
    }

    #[test]
    fn test_should_honor_expiry_boundary_with_fixed_clock() {
        init_tracing();
        let secret = random_secret();
        let payload = b"{}";
        let tolerance = 120;
        let now = 1_750_000_000;

        let on_boundary = sign_header(&secret, now - tolerance, payload);
        let past_boundary = sign_header(&secret, now - tolerance - 1, payload);
        let clock = FixedClock::new(now);
        let tolerance = Tolerance::secs(u64::try_from(tolerance).unwrap());

        assert!(verify_with_clock(&secret, &on_boundary, payload, tolerance, &clock));
        assert!(!verify_with_clock(&secret, &past_boundary, payload, tolerance, &clock));
    }

    #[test]
    fn test_should_verify_with_rotated_signatures() {
        init_tracing();
        let old_secret = random_secret();
        let new_secret = random_secret();
        let payload = TEST_PAYLOAD.as_bytes();
        let ts = TEST_TIMESTAMP;

        let old = sign_header(&old_secret, ts, payload);
        let new = sign_header(&new_secret, ts, payload);
        let old_sig = old.split_once(",v1=").unwrap().1;
        let new_sig = new.split_once(",v1=").unwrap().1;
        let header = format!("t={ts},v1={old_sig},v1={new_sig}");

        let clock = FixedClock::new(ts);
        assert!(verify_with_clock(&old_secret, &header, payload, Tolerance::secs(0), &clock));
        assert!(verify_with_clock(&new_secret, &header, payload, Tolerance::secs(0), &clock));
    }

    #[test]
    fn test_should_use_tolerance_from_config() {
        init_tracing();
        let config = VerifierConfig::builder().enforce_tolerance(false).build();
        assert_eq!(config.signature_header, SIGNATURE_HEADER);
        assert!(verify(
            TEST_SECRET,
            TEST_HEADER,
            TEST_PAYLOAD.as_bytes(),
            config.tolerance(),
        ));
    }

    #[test]
    fn test_should_not_verify_reencoded_payload() {
        init_tracing();
        let value: serde_json::Value = serde_json::from_str(TEST_PAYLOAD).unwrap();
        let reencoded = serde_json::to_vec_pretty(&value).unwrap();
        assert!(!verify(
            TEST_SECRET,
            TEST_HEADER,
            &reencoded,
            Tolerance::Unbounded,
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_should_verify_concurrently() {
        init_tracing();
        let secret = Arc::new(random_secret());
        let mut handles = Vec::new();

        for i in 0..64_i64 {
            let secret = Arc::clone(&secret);
            handles.push(tokio::spawn(async move {
                let payload = format!(r#"{{"hook_type":"NETWORK_JOIN","member_id":"{i}"}}"#);
                let ts = TEST_TIMESTAMP + i;
                let header = sign_header(&secret, ts, payload.as_bytes());
                let clock = FixedClock::new(ts);

                let good =
                    verify_with_clock(&secret, &header, payload.as_bytes(), Tolerance::secs(5), &clock);
                let tampered = verify_with_clock(
                    &secret,
                    &header,
                    format!("{payload} ").as_bytes(),
                    Tolerance::secs(5),
                    &clock,
                );
                (good, tampered)
            }));
        }

        for handle in handles {
            let (good, tampered) = handle.await.unwrap();
            assert!(good);
            assert!(!tampered);
        }
    }
}
