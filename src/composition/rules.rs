//! Composition rules and the per-tier rule set
//!
//! A rule set is the cartesian product of a tier's part tables, iterated
//! initial-outer, medial-middle, coda-inner so rule indices are stable for a
//! given configuration and filter.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::composition::engine::{Composed, Part, compose};
use crate::spatial::board::TileKind;

/// Part tables for one tier
#[derive(Clone, Debug, Default)]
pub struct PartTables {
    /// Initial-position parts
    pub initials: Vec<Part>,
    /// Middle-position parts
    pub medials: Vec<Part>,
    /// Final-position parts; present only for three-part tiers
    pub codas: Option<Vec<Part>>,
}

fn to_parts(pairs: &[(&str, &str)]) -> Vec<Part> {
    pairs
        .iter()
        .map(|&(symbol, label)| Part::new(symbol, label))
        .collect()
}

impl PartTables {
    /// Build tables from `(symbol, label)` pairs
    pub fn from_pairs(
        initials: &[(&str, &str)],
        medials: &[(&str, &str)],
        codas: Option<&[(&str, &str)]>,
    ) -> Self {
        Self {
            initials: to_parts(initials),
            medials: to_parts(medials),
            codas: codas.map(to_parts),
        }
    }

    /// Whether rules compose a base with a third part
    pub const fn is_three_part(&self) -> bool {
        self.codas.is_some()
    }
}

/// One legal part combination with its precomputed compound
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositionRule {
    /// Initial-position part
    pub initial: Part,
    /// Middle-position part
    pub medial: Part,
    /// Final-position part for three-part rules
    pub coda: Option<Part>,
    /// Initial + medial composition; the head tile of three-part rules
    pub base: Composed,
    /// Full composition recorded when the pair is accepted
    pub compound: Composed,
}

impl CompositionRule {
    /// Compose a rule from its parts
    pub fn new(initial: Part, medial: Part, coda: Option<Part>) -> Self {
        let base = compose(&initial, &medial, None);
        let compound = match &coda {
            Some(part) => compose(&initial, &medial, Some(part)),
            None => base.clone(),
        };

        Self {
            initial,
            medial,
            coda,
            base,
            compound,
        }
    }

    /// Symbol shown on the tile of the given kind
    ///
    /// Two-part rules place the initial and medial on tiles. Three-part rules
    /// reuse the same slots for the base syllable and the coda.
    pub fn symbol_for(&self, kind: TileKind) -> &str {
        match (kind, &self.coda) {
            (TileKind::Head, None) => &self.initial.symbol,
            (TileKind::Head, Some(_)) => &self.base.symbol,
            (TileKind::Tail, None) => &self.medial.symbol,
            (TileKind::Tail, Some(coda)) => &coda.symbol,
        }
    }
}

/// Ordered rules with a head/tail symbol index
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    rules: Vec<CompositionRule>,
    lookup: HashMap<(String, String), usize>,
}

impl RuleSet {
    /// Index rules by their head and tail tile symbols
    ///
    /// Keys are unique within a set; a later rule with an existing key is dropped.
    pub fn from_rules(candidates: Vec<CompositionRule>) -> Self {
        let mut rules = Vec::with_capacity(candidates.len());
        let mut lookup = HashMap::with_capacity(candidates.len());

        for rule in candidates {
            let key = (
                rule.symbol_for(TileKind::Head).to_string(),
                rule.symbol_for(TileKind::Tail).to_string(),
            );
            if lookup.contains_key(&key) {
                debug!("Dropping duplicate rule {} + {}", key.0, key.1);
                continue;
            }
            lookup.insert(key, rules.len());
            rules.push(rule);
        }

        Self { rules, lookup }
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule at a stable index
    pub fn get(&self, index: usize) -> Option<&CompositionRule> {
        self.rules.get(index)
    }

    /// All rules in build order
    pub fn rules(&self) -> &[CompositionRule] {
        &self.rules
    }

    /// Iterate rules in build order
    pub fn iter(&self) -> std::slice::Iter<'_, CompositionRule> {
        self.rules.iter()
    }

    /// Index of the rule whose head and tail tiles show these symbols
    pub fn find(&self, head: &str, tail: &str) -> Option<usize> {
        self.lookup
            .get(&(head.to_string(), tail.to_string()))
            .copied()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a CompositionRule;
    type IntoIter = std::slice::Iter<'a, CompositionRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Build the rule set for a set of part tables
///
/// With `allow` present only rules whose compound is a member survive, so an
/// empty allow-set yields an empty rule set. Compounds in `excluded` are
/// always dropped.
pub fn build_rule_set(
    tables: &PartTables,
    allow: Option<&HashSet<String>>,
    excluded: &HashSet<String>,
) -> RuleSet {
    let mut candidates = Vec::new();

    for initial in &tables.initials {
        for medial in &tables.medials {
            match &tables.codas {
                None => candidates.push(CompositionRule::new(
                    initial.clone(),
                    medial.clone(),
                    None,
                )),
                Some(codas) => {
                    for coda in codas {
                        candidates.push(CompositionRule::new(
                            initial.clone(),
                            medial.clone(),
                            Some(coda.clone()),
                        ));
                    }
                }
            }
        }
    }

    let total = candidates.len();
    let retained: Vec<CompositionRule> = candidates
        .into_iter()
        .filter(|rule| allow.is_none_or(|set| set.contains(&rule.compound.symbol)))
        .filter(|rule| !excluded.contains(&rule.compound.symbol))
        .collect();

    debug!("Built {} of {total} candidate rules", retained.len());
    RuleSet::from_rules(retained)
}
