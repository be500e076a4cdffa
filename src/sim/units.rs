pub(crate) type Float = f64;
pub(crate) const DIMENSIONALITY: usize = 3;
pub(crate) const PI: Float = std::f64::consts::PI;

//Defined (SI):
pub(crate) const GRAVITATIONAL_CONSTANT_SI: Float = 6.67440e-11; // m^3 / (kg s^2)
//Measuring masses in solar masses
pub(crate) const MASS_TO_KG: Float = 1.988435e30;
//Measuring distances in parsec
pub(crate) const DISTANCE_TO_M: Float = 3.08567758129e16;
//Measuring time in julian years
pub(crate) const TIME_TO_SECONDS: Float = 365.25 * 86_400.;

//Derived:
// G [pc^3 / (M_sun yr^2)] = G_SI * M_sun * yr^2 / pc^3
pub(crate) const G: Float = MASS_TO_KG
    * TIME_TO_SECONDS
    * (GRAVITATIONAL_CONSTANT_SI / DISTANCE_TO_M)
    * (1. / DISTANCE_TO_M)
    * (1. / DISTANCE_TO_M)
    * TIME_TO_SECONDS;
pub(crate) const VELOCITY_TO_KM_PER_S: Float = DISTANCE_TO_M / TIME_TO_SECONDS / 1e3;
