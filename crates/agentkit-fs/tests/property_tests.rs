use agentkit_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalization_has_no_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));

        let roundtripped = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, roundtripped);
    }

    #[test]
    fn test_join_keeps_base_prefix(a in "[a-z]{1,8}(/[a-z]{1,8}){0,3}", b in "[a-z]{1,8}(/[a-z]{1,8}){0,3}") {
        let base = NormalizedPath::new(&a);
        let joined = base.join(&b);

        prop_assert!(joined.as_str().starts_with(base.as_str()));
        prop_assert!(joined.as_str().ends_with(&b));
        prop_assert!(!joined.as_str().contains("//"));
    }
}
