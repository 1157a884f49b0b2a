//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use hango::GameError;
    use hango::io::error::invalid_parameter;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = GameError::LexiconLoad {
            path: "/tmp/missing.json".into(),
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/missing.json"));
    }

    // Tests parse errors keep the decoder error as source
    #[test]
    fn test_parse_error_source() {
        let source = serde_json::from_str::<Vec<String>>("{").expect_err("invalid json");
        let error = GameError::LexiconParse {
            path: "list.json".into(),
            source,
        };
        assert!(error.source().is_some());
        assert!(error.to_string().starts_with("Failed to parse allow-set"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("columns", &0, &"board needs at least one column");

        let message = error.to_string();
        assert!(message.contains("columns"));
        assert!(message.contains("'0'"));
        assert!(message.contains("at least one column"));
        assert!(error.source().is_none());
    }

    // Tests configuration errors are told apart from empty rule sets
    #[test]
    fn test_allow_set_and_rule_set_messages() {
        let allow = GameError::EmptyAllowSet {
            tier: "Level 3".to_string(),
        };
        assert!(allow.to_string().contains("Level 3"));
        assert_ne!(allow.to_string(), GameError::EmptyRuleSet.to_string());
    }

    // Tests the pending-commit message
    #[test]
    fn test_no_pending_commit() {
        assert!(GameError::NoPendingCommit.to_string().contains("committed"));
    }
}
