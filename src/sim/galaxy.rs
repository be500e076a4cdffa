use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::body::Body;
use super::units::{Float, DIMENSIONALITY, PI};

pub(crate) const MIN_DISK_RADIUS: Float = 0.1;
pub(crate) const DISK_RADIUS_SPREAD: Float = 0.8;
pub(crate) const MIN_DISK_BODY_MASS: Float = 0.03;
pub(crate) const MAX_DISK_BODY_MASS: Float = 20.03;

/// Shape of one galaxy: its black hole and the disk of light bodies orbiting it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Galaxy {
    pub(crate) black_hole_mass: Float,
    pub(crate) radius_scale: Float,
    /// Upper bound of the radius dependent part of the disk height.
    pub(crate) thickness_cap: Float,
    pub(crate) thinning_factor: Float,
    /// Height added to every body regardless of its radius.
    pub(crate) vertical_jitter: Float,
}

impl Galaxy {
    pub(crate) const LARGE: Galaxy = Galaxy {
        black_hole_mass: 1_000_000.,
        radius_scale: 20.,
        thickness_cap: 1.5,
        thinning_factor: 2.,
        vertical_jitter: 0.8,
    };

    pub(crate) const SMALL: Galaxy = Galaxy {
        black_hole_mass: 100_000.,
        radius_scale: 6.,
        thickness_cap: 1.,
        thinning_factor: 1.,
        vertical_jitter: 0.2,
    };

    pub(crate) fn max_disk_radius(&self) -> Float {
        MIN_DISK_RADIUS + DISK_RADIUS_SPREAD * self.radius_scale
    }

    fn disk_height<R: Rng>(&self, planar_distance: Float, rng: &mut R) -> Float {
        let sign: Float = if rng.gen_bool(0.5) { 1. } else { -1. };
        let thickness = (self.thickness_cap / planar_distance * self.thinning_factor)
            .min(self.thickness_cap);
        sign * thickness * rng.gen::<Float>() + self.vertical_jitter * rng.gen::<Float>()
    }

    /// Draws a single disk body orbiting `black_hole`.
    ///
    /// The body is placed relative to the black hole and inherits its velocity on
    /// top of the circular orbit around it.
    pub(crate) fn sample_disk_body<R: Rng>(
        &self,
        index: u32,
        black_hole: &Body,
        rng: &mut R,
    ) -> Body {
        let radius = MIN_DISK_RADIUS
            + DISK_RADIUS_SPREAD * Uniform::new(0., self.radius_scale).sample(rng);
        let angle = Uniform::new(0., 2. * PI).sample(rng);
        let mass = Uniform::new(MIN_DISK_BODY_MASS, MAX_DISK_BODY_MASS).sample(rng);

        let x = radius * angle.sin();
        let y = radius * angle.cos();
        let z = self.disk_height((x * x + y * y).sqrt(), rng);

        let offset = [x, y, z];
        let mut position = [0.; DIMENSIONALITY];
        for i in 0..DIMENSIONALITY {
            position[i] = black_hole.position[i] + offset[i];
        }
        let mut body = Body::at_rest(index, mass, position);

        let orbital_velocity = body.orbital_velocity(black_hole);
        for i in 0..DIMENSIONALITY {
            body.velocity[i] = orbital_velocity[i] + black_hole.velocity[i];
        }
        body
    }

    pub(crate) fn sample_disk<R: Rng>(
        &self,
        first_index: u32,
        count: u32,
        black_hole: &Body,
        rng: &mut R,
    ) -> Vec<Body> {
        (first_index..first_index + count)
            .map(|index| self.sample_disk_body(index, black_hole, rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn planar_distance(body: &Body, black_hole: &Body) -> Float {
        let dx = body.position[0] - black_hole.position[0];
        let dy = body.position[1] - black_hole.position[1];
        (dx * dx + dy * dy).sqrt()
    }

    #[test]
    fn empty_disk() {
        let mut rng = StdRng::seed_from_u64(1);
        let black_hole = Body::at_rest(0, Galaxy::LARGE.black_hole_mass, [0., 0., 0.]);
        assert!(Galaxy::LARGE.sample_disk(1, 0, &black_hole, &mut rng).is_empty());
    }

    #[test]
    fn disk_bodies_are_numbered_consecutively() {
        let mut rng = StdRng::seed_from_u64(2);
        let black_hole = Body::at_rest(0, Galaxy::LARGE.black_hole_mass, [0., 0., 0.]);
        let disk = Galaxy::LARGE.sample_disk(5, 100, &black_hole, &mut rng);
        assert_eq!(disk.len(), 100);
        for (i, body) in disk.iter().enumerate() {
            assert_eq!(body.index, 5 + i as u32);
        }
    }

    #[test]
    fn disk_bodies_stay_within_galaxy_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for galaxy in [Galaxy::LARGE, Galaxy::SMALL] {
            let black_hole = Body::at_rest(0, galaxy.black_hole_mass, [20., 20., 0.]);
            for body in galaxy.sample_disk(1, 2_000, &black_hole, &mut rng) {
                let distance = planar_distance(&body, &black_hole);
                let height = body.position[2] - black_hole.position[2];
                assert!(distance >= MIN_DISK_RADIUS - 1e-12);
                assert!(distance <= galaxy.max_disk_radius() + 1e-12);
                assert!(height.abs() <= galaxy.thickness_cap + galaxy.vertical_jitter);
                assert!(body.mass >= MIN_DISK_BODY_MASS);
                assert!(body.mass < MAX_DISK_BODY_MASS);
            }
        }
    }

    #[test]
    fn small_galaxy_is_more_compact() {
        assert!(Galaxy::SMALL.max_disk_radius() < Galaxy::LARGE.max_disk_radius());
        assert!((Galaxy::LARGE.max_disk_radius() - 16.1).abs() < 1e-12);
        assert!((Galaxy::SMALL.max_disk_radius() - 4.9).abs() < 1e-12);
    }

    #[test]
    fn disk_height_is_capped_far_from_the_center() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..1_000 {
            let height = Galaxy::LARGE.disk_height(100., &mut rng);
            // 1.5 / 100 * 2 = 0.03, plus at most 0.8 of jitter
            assert!(height > -0.03);
            assert!(height < 0.83);
        }
    }

    #[test]
    fn disk_velocities_are_perpendicular_to_planar_radius() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut black_hole = Body::at_rest(0, Galaxy::SMALL.black_hole_mass, [20., 20., 0.]);
        black_hole.velocity = [-1e-5, 2e-5, 3e-7];
        for body in Galaxy::SMALL.sample_disk(1, 500, &black_hole, &mut rng) {
            let dx = body.position[0] - black_hole.position[0];
            let dy = body.position[1] - black_hole.position[1];
            let dvx = body.velocity[0] - black_hole.velocity[0];
            let dvy = body.velocity[1] - black_hole.velocity[1];
            let speed = (dvx * dvx + dvy * dvy).sqrt();
            let cosine = (dvx * dx + dvy * dy) / (speed * (dx * dx + dy * dy).sqrt());
            assert!(cosine.abs() < 1e-9, "body {}: cosine {}", body.index, cosine);
        }
    }

    #[test]
    fn same_seed_gives_same_disk() {
        let black_hole = Body::at_rest(0, Galaxy::LARGE.black_hole_mass, [0., 0., 0.]);
        let disk1 = Galaxy::LARGE.sample_disk(1, 50, &black_hole, &mut StdRng::seed_from_u64(6));
        let disk2 = Galaxy::LARGE.sample_disk(1, 50, &black_hole, &mut StdRng::seed_from_u64(6));
        assert_eq!(disk1, disk2);
    }
}
