use crate::club::player::attributes::{ATTRIBUTE_MAX_VALUE, PlayerAttributes};
use crate::club::player::positions::PlayerPositionType;

/// Attribute weights in percent, ordered pace, shooting, passing, dribbling, defending, physical.
/// Every row must sum to 100.
pub type PositionWeights = [u32; 6];

pub const POSITION_WEIGHTS: [(PlayerPositionType, PositionWeights); 7] = [
    (PlayerPositionType::Goalkeeper, [10, 5, 15, 10, 50, 10]),
    (PlayerPositionType::DefenderCenter, [15, 5, 10, 10, 45, 15]),
    (PlayerPositionType::DefenderLeft, [25, 10, 20, 15, 20, 10]),
    (PlayerPositionType::DefenderRight, [25, 10, 20, 15, 20, 10]),
    (PlayerPositionType::DefensiveMidfielder, [15, 10, 25, 15, 25, 10]),
    (PlayerPositionType::AttackingMidfielder, [15, 20, 30, 25, 5, 5]),
    (PlayerPositionType::Striker, [25, 35, 10, 20, 5, 5]),
];

/// Row used for a position without its own weights (MEI)
const FALLBACK_ROW: usize = 5;
const FALLBACK_WEIGHTS: PositionWeights = POSITION_WEIGHTS[FALLBACK_ROW].1;

pub struct OverallCalculator;

impl OverallCalculator {
    /// Overall rating 0-99 of a player playing `position` with `attributes`
    pub fn calculate(attributes: &PlayerAttributes, position: PlayerPositionType) -> u8 {
        let weights = Self::weights(position);

        let weighted: u32 = attributes
            .values()
            .iter()
            .zip(weights.iter())
            .map(|(&value, &weight)| value as u32 * weight)
            .sum();

        // weighted is in hundredths; +50 rounds half up, which is half away from zero for non-negatives
        let rounded = (weighted + 50) / 100;

        // only reachable if a weight row sums above 100 or an attribute is out of range
        rounded.min(ATTRIBUTE_MAX_VALUE as u32) as u8
    }

    pub fn weights(position: PlayerPositionType) -> PositionWeights {
        Self::lookup(position).unwrap_or(FALLBACK_WEIGHTS)
    }

    fn lookup(position: PlayerPositionType) -> Option<PositionWeights> {
        POSITION_WEIGHTS
            .iter()
            .find(|(p, _)| *p == position)
            .map(|(_, w)| *w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::player::attributes::AttributeKind;
    use proptest::prelude::*;

    #[test]
    fn test_weight_rows_sum_to_hundred() {
        for (position, weights) in POSITION_WEIGHTS {
            assert_eq!(weights.iter().sum::<u32>(), 100, "weights for {}", position);
        }
    }

    #[test]
    fn test_every_position_has_weights() {
        for position in PlayerPositionType::ALL {
            assert!(OverallCalculator::lookup(position).is_some());
        }
    }

    #[test]
    fn test_fallback_row_is_attacking_midfielder() {
        assert_eq!(POSITION_WEIGHTS[FALLBACK_ROW].0, PlayerPositionType::AttackingMidfielder);
        assert_eq!(
            FALLBACK_WEIGHTS,
            OverallCalculator::weights(PlayerPositionType::AttackingMidfielder)
        );
    }

    #[test]
    fn test_uniform_attributes_give_same_value() {
        let attributes = PlayerAttributes::uniform(70);

        for position in PlayerPositionType::ALL {
            assert_eq!(OverallCalculator::calculate(&attributes, position), 70);
        }
    }

    #[test]
    fn test_striker_rating() {
        let attributes = PlayerAttributes::new(90, 88, 60, 80, 30, 70);
        // 22.5 + 30.8 + 6 + 16 + 1.5 + 3.5 = 80.3
        assert_eq!(OverallCalculator::calculate(&attributes, PlayerPositionType::Striker), 80);
    }

    #[test]
    fn test_half_rounds_up() {
        // goalkeeper: 0.5 * 1 = 0.5 -> 1
        let mut attributes = PlayerAttributes::uniform(0);
        attributes.defending = 1;
        assert_eq!(OverallCalculator::calculate(&attributes, PlayerPositionType::Goalkeeper), 1);

        // striker: 0.05 * 1 = 0.05 -> 0
        assert_eq!(OverallCalculator::calculate(&attributes, PlayerPositionType::Striker), 0);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        let attributes = PlayerAttributes::uniform(200);

        for position in PlayerPositionType::ALL {
            assert_eq!(OverallCalculator::calculate(&attributes, position), 99);
        }
    }

    #[test]
    fn test_goalkeeper_wins_when_defending_dominates() {
        let attributes = PlayerAttributes::new(40, 40, 40, 40, 99, 40);
        let goalkeeper = OverallCalculator::calculate(&attributes, PlayerPositionType::Goalkeeper);

        for position in PlayerPositionType::ALL.iter().filter(|p| !p.is_goalkeeper()) {
            assert!(goalkeeper > OverallCalculator::calculate(&attributes, *position));
        }
    }

    fn attributes_strategy() -> impl Strategy<Value = PlayerAttributes> {
        prop::array::uniform6(0u8..=99).prop_map(|v| PlayerAttributes::new(v[0], v[1], v[2], v[3], v[4], v[5]))
    }

    fn position_strategy() -> impl Strategy<Value = PlayerPositionType> {
        prop::sample::select(PlayerPositionType::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_overall_in_range(attributes in attributes_strategy(), position in position_strategy()) {
            let overall = OverallCalculator::calculate(&attributes, position);
            prop_assert!(overall <= 99);
        }

        #[test]
        fn prop_overall_is_monotonic(
            attributes in attributes_strategy(),
            position in position_strategy(),
            kind_idx in 0usize..6,
            bump in 1u8..=99
        ) {
            let kind = AttributeKind::ALL[kind_idx];
            let before = OverallCalculator::calculate(&attributes, position);

            let mut raised = attributes;
            raised.set(kind, attributes.get(kind).saturating_add(bump).min(99));

            prop_assert!(OverallCalculator::calculate(&raised, position) >= before);
        }

        #[test]
        fn prop_goalkeeper_leads_when_defending_dominates(
            base in 0u8..=60,
            lead in 0u8..=39
        ) {
            let mut attributes = PlayerAttributes::uniform(base);
            attributes.defending = base + lead;
            let goalkeeper = OverallCalculator::calculate(&attributes, PlayerPositionType::Goalkeeper);

            for position in PlayerPositionType::ALL.iter().filter(|p| !p.is_goalkeeper()) {
                prop_assert!(goalkeeper >= OverallCalculator::calculate(&attributes, *position));
            }
        }
    }
}
