use log::{debug, warn};
use rand::Rng;

use crate::sim::{
    body::Body,
    galaxy::Galaxy,
    initial_parameters::{InitialParameters, ParameterError},
    units::{Float, DIMENSIONALITY},
};

pub(crate) const SMALL_BLACK_HOLE_POSITION: [Float; DIMENSIONALITY] = [20., 20., 0.];
/// The small black hole is bound to the large one, so it moves slower than a free orbit.
pub(crate) const SATELLITE_VELOCITY_DAMPING: Float = 0.9;

#[derive(Clone, Debug)]
pub(crate) struct CollidingGalaxies {
    pub(crate) split_index: u32,
    pub(crate) bodies: Vec<Body>,
}

impl CollidingGalaxies {
    pub(crate) fn generate<R: Rng>(
        params: &InitialParameters,
        rng: &mut R,
    ) -> Result<CollidingGalaxies, ParameterError> {
        params.validate()?;
        let split_index = params.split_index();
        if params.small_galaxy_ratio > 0. && !params.has_small_galaxy() {
            warn!(
                "ratio {} is too small for {} particles, generating the large galaxy only",
                params.small_galaxy_ratio, params.body_count
            );
        }

        debug!("small galaxy starts at index {}", split_index);
        let mut bodies = Vec::with_capacity(params.body_count as usize);
        let large_black_hole =
            Body::at_rest(0, Galaxy::LARGE.black_hole_mass, [0.; DIMENSIONALITY]);
        let large_disk = Galaxy::LARGE.sample_disk(1, split_index - 1, &large_black_hole, rng);
        bodies.push(large_black_hole);
        bodies.extend(large_disk);

        if split_index < params.body_count {
            let small_black_hole = Self::place_small_black_hole(split_index, &bodies[0]);
            let small_disk = Galaxy::SMALL.sample_disk(
                split_index + 1,
                params.body_count - split_index - 1,
                &small_black_hole,
                rng,
            );
            bodies.push(small_black_hole);
            bodies.extend(small_disk);
        }

        Ok(CollidingGalaxies {
            split_index,
            bodies,
        })
    }

    fn place_small_black_hole(index: u32, large_black_hole: &Body) -> Body {
        let mut black_hole = Body::at_rest(
            index,
            Galaxy::SMALL.black_hole_mass,
            SMALL_BLACK_HOLE_POSITION,
        );
        let orbital_velocity = black_hole.orbital_velocity(large_black_hole);
        for i in 0..DIMENSIONALITY {
            black_hole.velocity[i] = orbital_velocity[i] * SATELLITE_VELOCITY_DAMPING;
        }
        black_hole
    }

    pub(crate) fn small_black_hole(&self) -> Option<&Body> {
        self.bodies.get(self.split_index as usize)
    }

    pub(crate) fn large_galaxy_len(&self) -> usize {
        self.bodies.len().min(self.split_index as usize)
    }

    pub(crate) fn small_galaxy_len(&self) -> usize {
        self.bodies.len() - self.large_galaxy_len()
    }

    pub(crate) fn total_mass(&self) -> Float {
        self.bodies.iter().map(|body| body.mass).sum()
    }
}
