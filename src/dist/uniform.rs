use super::DistributionModel;
use crate::state::{Ranges, State};
use rand::{Rng, RngCore};

/// Samples each variable independently and uniformly over its domain.
#[derive(Debug, Clone)]
pub struct UniformDistribution {
    ranges: Ranges,
}

impl UniformDistribution {
    pub fn new(ranges: Ranges) -> Self {
        Self { ranges }
    }

    pub fn ranges(&self) -> &Ranges {
        &self.ranges
    }
}

impl DistributionModel for UniformDistribution {
    fn sample(&self, rng: &mut dyn RngCore) -> State {
        let values = self
            .ranges
            .as_slice()
            .iter()
            .map(|&size| rng.random_range(0..size))
            .collect();
        State::new(values)
    }

    fn probability_of(&self, state: &State) -> f64 {
        if self.ranges.check(state).is_err() {
            return 0.0;
        }
        self.ranges
            .as_slice()
            .iter()
            .map(|&size| 1.0 / size as f64)
            .product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_samples_stay_in_range() {
        let ranges = Ranges::new(vec![2, 3, 7, 1]).unwrap();
        let dist = UniformDistribution::new(ranges.clone());
        let mut rng = create_rng(42);
        for _ in 0..500 {
            assert!(ranges.check(&dist.sample(&mut rng)).is_ok());
        }
    }

    #[test]
    fn test_probability_is_product_of_domains() {
        let dist = UniformDistribution::new(Ranges::new(vec![2, 4, 5]).unwrap());
        let p = dist.probability_of(&State::new(vec![1, 3, 0]));
        assert!((p - 1.0 / 40.0).abs() < 1e-12);
        assert_eq!(dist.probability_of(&State::new(vec![2, 0, 0])), 0.0);
    }
}
