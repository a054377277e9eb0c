use serde::{Deserialize, Serialize};

/// Which noun form follows a numeral.
///
/// Only three representative buckets are modelled: "1" takes the nominative
/// singular, "2-4" the genitive singular, everything else the genitive
/// plural. Compound numerals (21, 22, 111, ...) are not resolved by their
/// last digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityBucket {
    One,
    Few,
    Many,
}

impl QuantityBucket {
    pub fn for_count(n: u64) -> Self {
        match n {
            1 => QuantityBucket::One,
            2..=4 => QuantityBucket::Few,
            _ => QuantityBucket::Many,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets() {
        assert_eq!(QuantityBucket::for_count(1), QuantityBucket::One);
        for n in 2..=4 {
            assert_eq!(QuantityBucket::for_count(n), QuantityBucket::Few);
        }
        for n in [0, 5, 9, 11, 14, 100] {
            assert_eq!(QuantityBucket::for_count(n), QuantityBucket::Many);
        }
    }

    #[test]
    fn test_compound_numerals_stay_many() {
        // 21 and 22 would need last-digit agreement; only the three buckets apply.
        assert_eq!(QuantityBucket::for_count(21), QuantityBucket::Many);
        assert_eq!(QuantityBucket::for_count(22), QuantityBucket::Many);
    }
}
