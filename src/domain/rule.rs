use crate::error::EngineError;

/// A decoded second-order automaton rule.
///
/// The rule number's 8-digit binary expansion, read left to right, gives the
/// output bit for each of the 8 possible (left, center, right) neighbor
/// patterns. Entry `i` of the table is the digit at position `i`, so the
/// all-zero neighborhood (code 0) looks up the most significant digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    number: u32,
    table: [bool; 8],
}

impl Rule {
    /// Decode a rule number into its lookup table.
    ///
    /// Total on [0, 255]; anything outside is rejected before any grid
    /// computation can start.
    pub fn decode(rule_num: u32) -> Result<Self, EngineError> {
        if rule_num > 255 {
            return Err(EngineError::RuleOutOfRange(rule_num));
        }
        let mut table = [false; 8];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = (rule_num >> (7 - i)) & 1 == 1;
        }
        Ok(Self { number: rule_num, table })
    }

    /// The rule number this table was decoded from
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Output bit for a neighbor code in [0, 7]
    #[inline]
    pub fn output(&self, code: usize) -> bool {
        debug_assert!(code < 8);
        self.table[code]
    }

    /// Pack three neighbor bits into the lookup code `4*left + 2*center + right`
    #[inline]
    pub const fn neighbor_code(left: bool, center: bool, right: bool) -> usize {
        (left as usize) << 2 | (center as usize) << 1 | right as usize
    }
}
