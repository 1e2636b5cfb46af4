//! Rule-table-driven 1D automaton.
//!
//! Each cell reads the 3-bit pattern `(left << 2) | (center << 1) | right`
//! and takes bit `pattern` of its rule number. Cell `i` uses rule
//! `i mod rule_count` of the table. A neighbour missing at a
//! non-periodic edge reads as 0.

use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use std::convert::Infallible;
use tessera_core::Bit;
use tessera_rule::{Neighbourhood, Rule};

/// Rule appended to every seed-derived table.
pub const FIXED_RULE: u8 = 190;

/// Maximum number of rules in a table.
pub const MAX_RULES: usize = 4;

/// Number of two-digit chunks read from a seed.
const SEED_CHUNKS: usize = 3;

/// Fewest digits a seed needs to fill every chunk.
pub const MIN_SEED_DIGITS: usize = 2 * SEED_CHUNKS - 1;

/// An ordered sequence of rule numbers, indexed by cell position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    rules: SmallVec<[u8; MAX_RULES]>,
}

impl RuleTable {
    /// A table with explicit rule numbers.
    ///
    /// # Errors
    ///
    /// Returns `Err` unless `1 <= rules.len() <= MAX_RULES`.
    pub fn new(rules: &[u8]) -> Result<Self, String> {
        if rules.is_empty() || rules.len() > MAX_RULES {
            return Err(format!(
                "a rule table holds 1 to {MAX_RULES} rules, got {}",
                rules.len()
            ));
        }
        Ok(Self {
            rules: SmallVec::from_slice(rules),
        })
    }

    /// Derive a table from a decimal seed.
    ///
    /// The first six decimal digits are split into two-digit chunks (a
    /// trailing single digit forms its own chunk), each taken mod 256,
    /// and [`FIXED_RULE`] is appended.
    ///
    /// ```
    /// use tessera_rules::RuleTable;
    ///
    /// assert_eq!(RuleTable::from_seed(414420).unwrap().rules(), &[41, 44, 20, 190]);
    /// assert_eq!(RuleTable::from_seed(12345).unwrap().rules(), &[12, 34, 5, 190]);
    /// assert!(RuleTable::from_seed(30).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Err` when the seed has fewer than [`MIN_SEED_DIGITS`]
    /// digits and so cannot fill three chunks.
    pub fn from_seed(seed: u64) -> Result<Self, String> {
        let digits = seed.to_string();
        if digits.len() < MIN_SEED_DIGITS {
            return Err(format!(
                "rule seed {seed} has {} digits, need at least {MIN_SEED_DIGITS}",
                digits.len()
            ));
        }
        let mut rules: SmallVec<[u8; MAX_RULES]> = digits
            .as_bytes()
            .chunks(2)
            .take(SEED_CHUNKS)
            .map(|chunk| {
                let n = chunk
                    .iter()
                    .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'));
                (n % 256) as u8
            })
            .collect();
        rules.push(FIXED_RULE);
        Ok(Self { rules })
    }

    /// Rule numbers in order.
    pub fn rules(&self) -> &[u8] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always returns `false`: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Rule applied to cell `index`.
    pub fn rule_for(&self, index: usize) -> u8 {
        self.rules[index % self.rules.len()]
    }
}

/// Next state of a cell under `rule`.
pub fn apply_rule(rule: u8, left: Bit, center: Bit, right: Bit) -> Bit {
    let pattern = (left.as_u8() << 2) | (center.as_u8() << 1) | right.as_u8();
    Bit::from((rule >> pattern) & 1 == 1)
}

/// 1D automaton over a [`RuleTable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementaryRule {
    table: RuleTable,
}

impl ElementaryRule {
    /// Wrap a rule table.
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    /// The rule table.
    pub fn table(&self) -> &RuleTable {
        &self.table
    }
}

impl Rule for ElementaryRule {
    type State = Bit;
    type Intervention = Infallible;

    fn name(&self) -> &str {
        "rule1d"
    }

    fn evaluate_cell(&self, cell: &Neighbourhood<'_, Bit>, _rng: &mut ChaCha8Rng) -> Bit {
        apply_rule(
            self.table.rule_for(cell.index()),
            cell.state_or_background(0),
            cell.state(),
            cell.state_or_background(1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use tessera_core::{Grid, TickId};
    use tessera_rule::SweepContext;
    use tessera_space::{BoundaryPolicy, Line1D};
    use tessera_test_utils::{bit_row, render};

    fn step(rule: &ElementaryRule, policy: BoundaryPolicy, row: &Grid<Bit>) -> Grid<Bit> {
        let space = Line1D::new(row.len() as u32, policy).unwrap();
        let mut next = row.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut ctx = SweepContext::new(&space, row, &mut next, None, TickId(0), &mut rng);
        rule.sweep(&mut ctx).unwrap();
        next
    }

    // ── RuleTable ──────────────────────────────────────────────

    #[test]
    fn seed_chunks() {
        assert_eq!(RuleTable::from_seed(414420).unwrap().rules(), &[41, 44, 20, 190]);
        assert_eq!(RuleTable::from_seed(10_000).unwrap().rules(), &[10, 0, 0, 190]);
        assert_eq!(RuleTable::from_seed(99_999).unwrap().rules(), &[99, 99, 9, 190]);
        // Digits past the sixth are ignored.
        assert_eq!(RuleTable::from_seed(12_345_678).unwrap().rules(), &[12, 34, 56, 190]);
    }

    #[test]
    fn short_seeds_cannot_fill_the_table() {
        for seed in [0, 7, 30, 1234, 9_999] {
            assert!(RuleTable::from_seed(seed).is_err(), "seed {seed} accepted");
        }
    }

    #[test]
    fn explicit_table_bounds() {
        assert!(RuleTable::new(&[]).is_err());
        assert!(RuleTable::new(&[1, 2, 3, 4, 5]).is_err());
        assert_eq!(RuleTable::new(&[30]).unwrap().len(), 1);
    }

    #[test]
    fn rule_for_cycles_through_table() {
        let t = RuleTable::from_seed(414420).unwrap();
        let picked: Vec<u8> = (0..9).map(|i| t.rule_for(i)).collect();
        assert_eq!(picked, vec![41, 44, 20, 190, 41, 44, 20, 190, 41]);
    }

    #[test]
    fn apply_rule_reads_pattern_bit() {
        assert_eq!(apply_rule(41, Bit::Zero, Bit::One, Bit::Zero), Bit::Zero);
        assert_eq!(apply_rule(41, Bit::Zero, Bit::Zero, Bit::Zero), Bit::One);
        assert_eq!(apply_rule(190, Bit::Zero, Bit::Zero, Bit::One), Bit::One);
        assert_eq!(apply_rule(255, Bit::One, Bit::One, Bit::One), Bit::One);
    }

    // ── Stepping ───────────────────────────────────────────────

    #[test]
    fn seed_414420_centre_cell_goes_dark() {
        let rule = ElementaryRule::new(RuleTable::from_seed(414420).unwrap());
        let start = bit_row("000010000");
        let next = step(&rule, BoundaryPolicy::Periodic, &start);
        assert_eq!(next.get(4), Some(Bit::Zero));
        assert_eq!(next, bit_row("100100001"), "{:?}", render(&next));
    }

    #[test]
    fn absorbing_edges_read_zero() {
        let rule = ElementaryRule::new(RuleTable::new(&[30]).unwrap());
        let row = bit_row("001");
        assert_eq!(step(&rule, BoundaryPolicy::Periodic, &row), bit_row("111"));
        assert_eq!(step(&rule, BoundaryPolicy::Absorbing, &row), bit_row("011"));
    }

    #[test]
    fn reflective_line_matches_absorbing() {
        let rule = ElementaryRule::new(RuleTable::from_seed(414420).unwrap());
        let row = bit_row("1011001101");
        assert_eq!(
            step(&rule, BoundaryPolicy::Reflective, &row),
            step(&rule, BoundaryPolicy::Absorbing, &row)
        );
    }

    proptest! {
        #[test]
        fn interior_cells_ignore_policy(bits in proptest::collection::vec(any::<bool>(), 3..32), seed in 10_000u64..1_000_000) {
            let cells: Vec<Bit> = bits.into_iter().map(Bit::from).collect();
            let n = cells.len();
            let row = Grid::from_cells(tessera_core::Dims::Line { len: n as u32 }, cells).unwrap();
            let rule = ElementaryRule::new(RuleTable::from_seed(seed).unwrap());
            let wrapped = step(&rule, BoundaryPolicy::Periodic, &row);
            let walled = step(&rule, BoundaryPolicy::Absorbing, &row);
            prop_assert_eq!(&wrapped.cells()[1..n - 1], &walled.cells()[1..n - 1]);
        }
    }
}
