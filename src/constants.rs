// Unit system of the viewer: lengths in AU, masses in solar masses, time in days
pub const G_SUN_UNITS: f64 = 0.000295824; // Gravitational constant (AU³/M_sun/day²)
pub const M_SUN: f64 = 1.0; // Mass of the Sun (M_sun)
pub const MU_SUN: f64 = G_SUN_UNITS * M_SUN; // Heliocentric gravitational parameter

// Kepler solver
pub const NEWTON_ITERATIONS: usize = 5;
pub const NEWTON_STEP: f64 = 1e-4; // Forward-difference step for the slope (rad)

// Sampling
pub const DEFAULT_SAMPLE_COUNT: usize = 200; // Points drawn per orbital period

// Math
pub const PI: f64 = std::f64::consts::PI;
pub const TWO_PI: f64 = 2.0 * PI;
