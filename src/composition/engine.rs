//! Positional-index composition of Hangul syllable blocks
//!
//! A precomposed syllable sits at `BASE + (initial × 21 + medial) × 28 + coda`,
//! where each index is the part's position in the fixed tables below. Symbols
//! are written as compatibility jamo, which is how tiles display them.

use log::warn;

use crate::io::configuration::SYLLABLE_BASE;

/// Initial-position parts in syllable-block order
pub const INITIALS: [&str; 19] = [
    "ㄱ", "ㄲ", "ㄴ", "ㄷ", "ㄸ", "ㄹ", "ㅁ", "ㅂ", "ㅃ", "ㅅ", "ㅆ", "ㅇ", "ㅈ", "ㅉ", "ㅊ", "ㅋ",
    "ㅌ", "ㅍ", "ㅎ",
];

/// Middle-position parts in syllable-block order
pub const MEDIALS: [&str; 21] = [
    "ㅏ", "ㅐ", "ㅑ", "ㅒ", "ㅓ", "ㅔ", "ㅕ", "ㅖ", "ㅗ", "ㅘ", "ㅙ", "ㅚ", "ㅛ", "ㅜ", "ㅝ", "ㅞ",
    "ㅟ", "ㅠ", "ㅡ", "ㅢ", "ㅣ",
];

/// Final-position parts in syllable-block order; index 0 means no final part
pub const CODAS: [&str; 28] = [
    "", "ㄱ", "ㄲ", "ㄳ", "ㄴ", "ㄵ", "ㄶ", "ㄷ", "ㄹ", "ㄺ", "ㄻ", "ㄼ", "ㄽ", "ㄾ", "ㄿ", "ㅀ",
    "ㅁ", "ㅂ", "ㅄ", "ㅅ", "ㅆ", "ㅇ", "ㅈ", "ㅊ", "ㅋ", "ㅌ", "ㅍ", "ㅎ",
];

const MEDIAL_COUNT: u32 = 21;
const CODA_COUNT: u32 = 28;

/// An atomic symbol together with its romanized fragment
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Part {
    /// Displayed symbol, e.g. `ㄱ`
    pub symbol: String,
    /// Romanized fragment, possibly empty (e.g. the silent initial `ㅇ`)
    pub label: String,
}

impl Part {
    /// Create a part from its symbol and romanized fragment
    pub fn new(symbol: &str, label: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            label: label.to_string(),
        }
    }
}

/// A composed symbol with its romanized label
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Composed {
    /// The single composed character (or the fallback concatenation)
    pub symbol: String,
    /// Concatenated romanized fragments
    pub label: String,
}

/// Resolve table positions for a part combination
///
/// A missing coda resolves to index 0. Returns `None` when any part is not in
/// its table.
pub fn position_indices(
    initial: &str,
    medial: &str,
    coda: Option<&str>,
) -> Option<(usize, usize, usize)> {
    let initial_index = INITIALS.iter().position(|&s| s == initial)?;
    let medial_index = MEDIALS.iter().position(|&s| s == medial)?;
    let coda_index = match coda {
        None => 0,
        Some(symbol) => CODAS.iter().position(|&s| s == symbol)?,
    };
    Some((initial_index, medial_index, coda_index))
}

/// Map an index triple to its syllable character
pub fn syllable_from_indices(initial: usize, medial: usize, coda: usize) -> Option<char> {
    if initial >= INITIALS.len() || medial >= MEDIALS.len() || coda >= CODAS.len() {
        return None;
    }

    let offset = (initial as u32 * MEDIAL_COUNT + medial as u32) * CODA_COUNT + coda as u32;
    char::from_u32(SYLLABLE_BASE + offset)
}

/// Compose the syllable symbol for two or three parts
///
/// Falls back to concatenating the inputs when a part is missing from its
/// table. That indicates a configuration mismatch and is logged as a warning.
pub fn compose_symbol(initial: &str, medial: &str, coda: Option<&str>) -> String {
    let composed = position_indices(initial, medial, coda)
        .and_then(|(i, m, c)| syllable_from_indices(i, m, c));

    if let Some(syllable) = composed {
        return syllable.to_string();
    }

    let coda_symbol = coda.unwrap_or_default();
    warn!("No syllable block for {initial} + {medial} + '{coda_symbol}', using concatenation");
    format!("{initial}{medial}{coda_symbol}")
}

/// Concatenate romanized fragments in part order
pub fn compose_label(initial: &str, medial: &str, coda: Option<&str>) -> String {
    let mut label = String::with_capacity(initial.len() + medial.len() + 4);
    label.push_str(initial);
    label.push_str(medial);
    if let Some(fragment) = coda.filter(|fragment| !fragment.is_empty()) {
        label.push_str(fragment);
    }
    label
}

/// Compose a syllable and its label from typed parts
pub fn compose(initial: &Part, medial: &Part, coda: Option<&Part>) -> Composed {
    Composed {
        symbol: compose_symbol(
            &initial.symbol,
            &medial.symbol,
            coda.map(|part| part.symbol.as_str()),
        ),
        label: compose_label(
            &initial.label,
            &medial.label,
            coda.map(|part| part.label.as_str()),
        ),
    }
}
