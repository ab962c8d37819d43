//! Unit tests for the Identifiers module
//!
//! Tests cover policy and quotation identifiers: creation, parsing,
//! conversion, display formatting and serialization.

use core_kernel::{PolicyId, QuotationId};
use uuid::Uuid;

mod policy_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = PolicyId::new();
        let id2 = PolicyId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = PolicyId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = PolicyId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = PolicyId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-uuid".parse::<PolicyId>().is_err());
    }

    #[test]
    fn test_serializes_as_bare_uuid_string() {
        let uuid = Uuid::new_v4();
        let json = serde_json::to_string(&PolicyId::from_uuid(uuid)).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}

mod quotation_id_tests {
    use super::*;

    #[test]
    fn test_generate_produces_distinct_ids() {
        assert_ne!(QuotationId::generate(), QuotationId::generate());
    }

    #[test]
    fn test_opaque_ids_are_kept_verbatim() {
        let id = QuotationId::from("legacy-quote-42");
        assert_eq!(id.as_str(), "legacy-quote-42");
        assert_eq!(id.to_string(), "legacy-quote-42");
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = QuotationId::from("q-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"q-1\"");

        let back: QuotationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
