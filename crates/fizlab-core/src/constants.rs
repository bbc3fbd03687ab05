//! Simulation constants and tuning parameters.

/// Engine tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at 1x speed.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Maximum concurrently active module instances (a page embeds 1-4).
pub const MAX_INSTANCES: usize = 4;

// --- Render surface bounds (world units) ---

/// Drawing region width.
pub const WORLD_W: f64 = 800.0;

/// Drawing region height.
pub const WORLD_H: f64 = 500.0;

// --- Billiards ---

/// Fraction of relative velocity preserved per collision. Below 1 so
/// every collision loses some kinetic energy.
pub const RESTITUTION: f64 = 0.85;

/// Lattice spacing between stationary "atom" balls in the baseline scenario.
pub const ATOM_SPACING: f64 = 35.0;

/// Radius of a lattice atom ball.
pub const ATOM_RADIUS: f64 = 12.0;

/// Radius of the moving "electron" ball.
pub const MOVER_RADIUS: f64 = 8.0;

/// Launch speed of the moving ball at 1.0 ball_speed (units/s).
pub const MOVER_LAUNCH_SPEED: f64 = 120.0;

// --- Electron drift ---

/// Electrons shown in the wire cross-section.
pub const DRIFT_ELECTRON_COUNT: usize = 24;

/// Fixed ions forming the lattice.
pub const DRIFT_ION_COUNT: usize = 12;

/// Net drift speed per volt (units/s). Deliberately slow next to the
/// thermal jitter, mirroring the drift-vs-signal-speed lesson.
pub const DRIFT_SPEED_PER_VOLT: f64 = 4.0;

/// Peak thermal jitter speed (units/s).
pub const THERMAL_JITTER_SPEED: f64 = 55.0;

// --- Alternating current ---

/// Electrons shown oscillating in the AC wire.
pub const AC_ELECTRON_COUNT: usize = 16;

/// Hum tone frequency per slider-Hz (the audible cue scales with the
/// oscillation frequency).
pub const AC_HUM_BASE_HZ: f64 = 60.0;

// --- Planetary motion ---

/// Orbit radii for the four planets (world units).
pub const ORBIT_RADII: [f64; 4] = [60.0, 105.0, 155.0, 210.0];

/// Base angular rate of the innermost planet (rad/s). Outer planets
/// slow with radius^(3/2), a nod to Kepler without solving gravity.
pub const ORBIT_BASE_RATE: f64 = 0.9;

// --- Pendulum ---

/// Gravitational acceleration (m/s^2).
pub const GRAVITY: f64 = 9.81;

/// Pixels per metre of pendulum length on the render surface.
pub const PENDULUM_SCALE: f64 = 120.0;

// --- Atomic structure ---

/// Shell occupancies for elements up to argon-scale teaching models.
pub const SHELL_CAPACITY: [usize; 3] = [2, 8, 18];

/// Shell radii (world units).
pub const SHELL_RADII: [f64; 3] = [55.0, 100.0, 150.0];

/// Angular rate of the innermost shell (rad/s); outer shells run slower.
pub const SHELL_BASE_RATE: f64 = 1.6;

// --- DNA helix ---

/// Base pairs rendered along the helix.
pub const HELIX_BASE_PAIRS: usize = 14;

/// Helix half-width (world units).
pub const HELIX_AMPLITUDE: f64 = 70.0;

// --- Scale explorer ---

/// How many powers of ten around the current zoom remain visible.
pub const VISIBLE_DECADES: f64 = 3.0;

/// Zoom glide factor per tick toward the slider target (0..1).
pub const ZOOM_GLIDE: f64 = 0.12;
