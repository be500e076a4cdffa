use crate::sim::units::{Float, DIMENSIONALITY, G};

/// Fraction of the circular speed that is kept along the vertical axis.
pub(crate) const VERTICAL_VELOCITY_DAMPING: Float = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Body {
    pub(crate) index: u32,
    pub(crate) mass: Float,
    pub(crate) position: [Float; DIMENSIONALITY],
    pub(crate) velocity: [Float; DIMENSIONALITY],
}

impl Body {
    pub(crate) fn at_rest(index: u32, mass: Float, position: [Float; DIMENSIONALITY]) -> Body {
        Body {
            index,
            mass,
            position,
            velocity: [0.; DIMENSIONALITY],
        }
    }

    /// Vector pointing from `self` towards `other`.
    pub(crate) fn separation_to(&self, other: &Self) -> [Float; DIMENSIONALITY] {
        let mut separation = [0.; DIMENSIONALITY];
        for i in 0..DIMENSIONALITY {
            separation[i] = other.position[i] - self.position[i];
        }
        separation
    }

    pub(crate) fn distance_to(&self, other: &Self) -> Float {
        self.separation_to(other)
            .iter()
            .map(|x| x * x)
            .sum::<Float>()
            .sqrt()
    }

    pub(crate) fn speed(&self) -> Float {
        self.velocity.iter().map(|x| x * x).sum::<Float>().sqrt()
    }

    /// Velocity that puts `self` on an approximately circular orbit around `central`.
    ///
    /// The direction is perpendicular to the radius in the xy-plane, the vertical
    /// component is damped to keep disks thin. `self` must not sit on top of
    /// `central`.
    pub(crate) fn orbital_velocity(&self, central: &Self) -> [Float; DIMENSIONALITY] {
        let [x, y, z] = self.separation_to(central);
        let distance = self.distance_to(central);
        debug_assert!(distance > 0., "body {} sits on its central body", self.index);

        let circular_speed = (G * central.mass / distance).sqrt();
        [
            (y / distance) * circular_speed,
            (-x / distance) * circular_speed,
            (z / distance) * circular_speed * VERTICAL_VELOCITY_DAMPING,
        ]
    }
}
