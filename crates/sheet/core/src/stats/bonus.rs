//! Additive bonus stacks and the layer trait shared by every stat layer.
//!
//! Bonuses on a character sheet are purely additive: every source (an
//! ancestry trait, a per-character modifier) contributes a signed delta and
//! the stack sums them. Summation is order-independent, so the order in
//! which sources are collected never changes a result.

/// A single additive bonus and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bonus {
    /// Human-readable source, e.g. `Forest-kin: Nimble`.
    pub source: String,
    pub value: i32,
}

impl Bonus {
    pub fn new(source: impl Into<String>, value: i32) -> Self {
        Self {
            source: source.into(),
            value,
        }
    }
}

/// A collection of bonuses applied to one stat.
///
/// # Example
/// ```
/// # use sheet_core::stats::bonus::{Bonus, BonusStack};
/// let mut stack = BonusStack::new();
/// stack.add(Bonus::new("ancestry", 2));
/// stack.add(Bonus::new("curse", -1));
/// stack.add(Bonus::new("belt", 1));
///
/// assert_eq!(stack.total(), 2);
/// assert_eq!(stack.apply(8), 10);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BonusStack {
    bonuses: Vec<Bonus>,
}

impl BonusStack {
    pub fn new() -> Self {
        Self {
            bonuses: Vec::new(),
        }
    }

    /// Add a bonus to the stack
    pub fn add(&mut self, bonus: Bonus) {
        self.bonuses.push(bonus);
    }

    /// Add multiple bonuses at once
    pub fn extend(&mut self, bonuses: impl IntoIterator<Item = Bonus>) {
        self.bonuses.extend(bonuses);
    }

    /// Sum of all bonus values, saturating at the `i32` limits.
    pub fn total(&self) -> i32 {
        self.bonuses
            .iter()
            .fold(0i32, |acc, b| acc.saturating_add(b.value))
    }

    /// Adds the stack total to `base`.
    ///
    /// This is a plain addition: feeding the result back in as a new base
    /// applies every bonus a second time. Callers keep the base score and
    /// re-apply from it instead.
    pub fn apply(&self, base: i32) -> i32 {
        base.saturating_add(self.total())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bonus> {
        self.bonuses.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.bonuses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bonuses.len()
    }
}

impl FromIterator<Bonus> for BonusStack {
    fn from_iter<I: IntoIterator<Item = Bonus>>(iter: I) -> Self {
        Self {
            bonuses: iter.into_iter().collect(),
        }
    }
}

/// Trait for stat layers that follow the Base -> Bonuses -> Final pattern.
///
/// ```text
/// Layer 1: AbilityScores + ScoreBonuses -> EffectiveScores
/// Layer 2: EffectiveScores + ()         -> AbilityModifiers
/// ```
///
/// # Example
///
/// ```
/// # use sheet_core::stats::*;
/// fn compute_with_empty<L: StatLayer>(base: &L::Base) -> L::Final {
///     L::compute(base, &L::empty_bonuses())
/// }
///
/// let base = AbilityScores::new(14, 12, 13, 10, 16, 8);
/// let scores = compute_with_empty::<EffectiveScores>(&base);
/// let modifiers = compute_with_empty::<AbilityModifiers>(&scores);
/// assert_eq!(modifiers.wis, 3);
/// assert_eq!(modifiers.cha, -1);
/// ```
pub trait StatLayer {
    /// The base/input type for this layer
    type Base;

    /// The bonuses type for this layer
    type Bonuses;

    /// The final/output type for this layer
    type Final;

    /// Compute the final values from base and bonuses
    fn compute(base: &Self::Base, bonuses: &Self::Bonuses) -> Self::Final;

    /// Create an empty bonus holder
    fn empty_bonuses() -> Self::Bonuses;

    /// Compute with no bonuses (convenience method)
    fn from_base(base: &Self::Base) -> Self::Final {
        Self::compute(base, &Self::empty_bonuses())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(values: &[i32]) -> BonusStack {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Bonus::new(format!("source {i}"), *v))
            .collect()
    }

    #[test]
    fn empty_stack_leaves_base_unchanged() {
        let stack = BonusStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.apply(13), 13);
    }

    #[test]
    fn application_order_does_not_matter() {
        let orders: [[i32; 3]; 6] = [
            [2, -1, 1],
            [2, 1, -1],
            [-1, 2, 1],
            [-1, 1, 2],
            [1, 2, -1],
            [1, -1, 2],
        ];
        for order in orders {
            assert_eq!(stack_of(&order).apply(8), 10, "order {order:?}");
        }
    }

    #[test]
    fn reapplying_to_an_adjusted_score_doubles_the_bonus() {
        let stack = stack_of(&[2]);
        let once = stack.apply(12);
        let twice = stack.apply(once);
        assert_eq!(once, 14);
        assert_eq!(twice, 16);
    }

    #[test]
    fn extreme_deltas_saturate() {
        let stack = stack_of(&[i32::MAX, 1]);
        assert_eq!(stack.total(), i32::MAX);
        assert_eq!(stack.apply(10), i32::MAX);
        assert_eq!(stack_of(&[i32::MIN, -5]).total(), i32::MIN);
        assert_eq!(stack_of(&[i32::MIN, -5]).apply(-20), i32::MIN);
    }
}
