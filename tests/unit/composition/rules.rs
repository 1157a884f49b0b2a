//! Tests for rule construction, lookup and allow-set filtering

#[cfg(test)]
mod tests {
    use hango::composition::engine::Part;
    use hango::composition::rules::{CompositionRule, PartTables, RuleSet, build_rule_set};
    use hango::spatial::board::TileKind;
    use std::collections::HashSet;

    fn two_part_tables() -> PartTables {
        PartTables::from_pairs(
            &[("ㄱ", "g"), ("ㄴ", "n")],
            &[("ㅏ", "a"), ("ㅗ", "o"), ("ㅜ", "u")],
            None,
        )
    }

    fn three_part_tables() -> PartTables {
        PartTables::from_pairs(
            &[("ㄱ", "g"), ("ㅎ", "h")],
            &[("ㅏ", "a")],
            Some([("ㄴ", "n"), ("ㅇ", "ng")].as_slice()),
        )
    }

    fn allow(symbols: &[&str]) -> HashSet<String> {
        symbols.iter().map(|&symbol| symbol.to_string()).collect()
    }

    // Verifies the rule count is the product of the table sizes
    #[test]
    fn test_cartesian_product() {
        let rules = build_rule_set(&two_part_tables(), None, &HashSet::new());
        assert_eq!(rules.len(), 6);
        assert!(!rules.is_empty());
    }

    // Tests rules are ordered initial-outer, medial-inner
    // Verified by swapping the loop nesting
    #[test]
    fn test_build_order() {
        let rules = build_rule_set(&two_part_tables(), None, &HashSet::new());
        let compounds: Vec<&str> = rules
            .iter()
            .map(|rule| rule.compound.symbol.as_str())
            .collect();
        assert_eq!(compounds, vec!["가", "고", "구", "나", "노", "누"]);
    }

    // Tests head and tail lookup returns the rule index
    #[test]
    fn test_find() {
        let rules = build_rule_set(&two_part_tables(), None, &HashSet::new());
        let index = rules.find("ㄴ", "ㅗ");
        assert_eq!(index, Some(4));
        assert_eq!(
            index
                .and_then(|i| rules.get(i))
                .map(|rule| rule.compound.label.as_str()),
            Some("no")
        );
        assert_eq!(rules.find("ㅗ", "ㄴ"), None);
        assert_eq!(rules.find("ㄷ", "ㅏ"), None);
    }

    // Tests three-part rules expose the base syllable as head and the coda as tail
    #[test]
    fn test_three_part_tile_symbols() {
        let rules = build_rule_set(&three_part_tables(), None, &HashSet::new());
        assert_eq!(rules.len(), 4);

        let rule = rules
            .find("하", "ㄴ")
            .and_then(|i| rules.get(i))
            .expect("rule for 하 + ㄴ");
        assert_eq!(rule.symbol_for(TileKind::Head), "하");
        assert_eq!(rule.symbol_for(TileKind::Tail), "ㄴ");
        assert_eq!(rule.base.label, "ha");
        assert_eq!(rule.compound.symbol, "한");
        assert_eq!(rule.compound.label, "han");
        assert_eq!(rule.base.symbol, "하");
    }

    // Tests two-part rules place initial and medial on tiles
    #[test]
    fn test_two_part_tile_symbols() {
        let rule = CompositionRule::new(Part::new("ㅁ", "m"), Part::new("ㅜ", "u"), None);
        assert_eq!(rule.symbol_for(TileKind::Head), "ㅁ");
        assert_eq!(rule.symbol_for(TileKind::Tail), "ㅜ");
        assert_eq!(rule.compound, rule.base);
        assert_eq!(rule.compound.symbol, "무");
    }

    // Tests only allowed compounds survive the allow-set filter
    // Verified by ignoring the allow-set parameter
    #[test]
    fn test_allow_set_filter() {
        let rules = build_rule_set(
            &three_part_tables(),
            Some(&allow(&["강", "한", "없"])),
            &HashSet::new(),
        );
        let compounds: Vec<&str> = rules
            .iter()
            .map(|rule| rule.compound.symbol.as_str())
            .collect();
        assert_eq!(compounds, vec!["강", "한"]);
    }

    // Tests an allow-set that matches nothing yields an empty rule set
    #[test]
    fn test_allow_set_without_matches() {
        let rules = build_rule_set(&three_part_tables(), Some(&allow(&["닭"])), &HashSet::new());
        assert!(rules.is_empty());
    }

    // Tests an empty allow-set keeps no rules at all
    // Verified by treating an empty allow-set as absent
    #[test]
    fn test_empty_allow_set() {
        let rules = build_rule_set(&three_part_tables(), Some(&HashSet::new()), &HashSet::new());
        assert!(rules.is_empty());
        assert_eq!(rules.len(), 0);
        assert_eq!(rules.find("하", "ㄴ"), None);

        let unfiltered = build_rule_set(&three_part_tables(), None, &HashSet::new());
        assert_eq!(unfiltered.len(), 4);
    }

    // Tests excluded compounds are dropped even when allowed
    #[test]
    fn test_exclusion_set() {
        let rules = build_rule_set(
            &three_part_tables(),
            Some(&allow(&["간", "강", "한", "항"])),
            &allow(&["항"]),
        );
        assert_eq!(rules.len(), 3);
        assert_eq!(rules.find("하", "ㅇ"), None);
    }

    // Tests duplicate head/tail keys keep the first rule only
    #[test]
    fn test_duplicate_keys_dropped() {
        let first = CompositionRule::new(Part::new("ㄱ", "g"), Part::new("ㅏ", "a"), None);
        let second = CompositionRule::new(Part::new("ㄱ", "k"), Part::new("ㅏ", "a"), None);
        let rules = RuleSet::from_rules(vec![first, second]);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.rules().first().map(|rule| rule.initial.label.as_str()), Some("g"));
    }

    // Tests the three-part flag follows the presence of codas
    #[test]
    fn test_is_three_part() {
        assert!(!two_part_tables().is_three_part());
        assert!(three_part_tables().is_three_part());
    }
}
