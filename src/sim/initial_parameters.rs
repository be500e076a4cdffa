use thiserror::Error;

use super::units::Float;

pub(crate) const MAX_BODY_COUNT: u32 = 200_000;

#[derive(Debug, Error, PartialEq)]
pub(crate) enum ParameterError {
    #[error("at least 2 particles are required to place both black holes, got {0}")]
    TooFewBodies(u32),
    #[error("at most 200000 particles are supported, got {0}")]
    TooManyBodies(u32),
    #[error("ratio must lie in [0, 1), got {0}")]
    RatioOutOfRange(Float),
    #[error("ratio {ratio} puts the small black hole on index 0 for {body_count} particles")]
    SmallGalaxyDisplacesLargeBlackHole { body_count: u32, ratio: Float },
}

#[derive(Clone, Debug)]
pub(crate) struct InitialParameters {
    pub(crate) body_count: u32,
    /// Fraction of all particles belonging to the small galaxy.
    pub(crate) small_galaxy_ratio: Float,
    pub(crate) seed: Option<u64>,
}

impl Default for InitialParameters {
    fn default() -> Self {
        Self {
            body_count: 1_000,
            small_galaxy_ratio: 0.2,
            seed: None,
        }
    }
}

impl InitialParameters {
    /// Index of the small black hole, equal to `body_count` if there is no small galaxy.
    pub(crate) fn split_index(&self) -> u32 {
        (self.body_count as Float * (1. - self.small_galaxy_ratio)).floor() as u32
    }

    pub(crate) fn has_small_galaxy(&self) -> bool {
        self.split_index() < self.body_count
    }

    pub(crate) fn validate(&self) -> Result<(), ParameterError> {
        if !(0. ..1.).contains(&self.small_galaxy_ratio) {
            return Err(ParameterError::RatioOutOfRange(self.small_galaxy_ratio));
        }
        if self.body_count < 2 {
            return Err(ParameterError::TooFewBodies(self.body_count));
        }
        if self.body_count > MAX_BODY_COUNT {
            return Err(ParameterError::TooManyBodies(self.body_count));
        }
        if self.split_index() == 0 {
            return Err(ParameterError::SmallGalaxyDisplacesLargeBlackHole {
                body_count: self.body_count,
                ratio: self.small_galaxy_ratio,
            });
        }
        Ok(())
    }
}
