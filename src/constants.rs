pub const BOLTZMANN_KCAL_MOL_K: f64 = 1.98722e-3; // Gas constant, kcal/(mol K)
pub const DEFAULT_TEMPERATURE_K: f64 = 300.0; // Temperature of the ASMD runs
pub const DEFAULT_OUTPUT: &str = "_jar.PMF.dat"; // PMF output file
pub const REACTION_COORDINATE_COLUMN: usize = 0; // Column holding the reaction coordinate
pub const WORK_COLUMN: usize = 3; // Column holding the accumulated work
pub const MIN_COLUMNS: usize = WORK_COLUMN + 1;
pub const GRID_RELATIVE_TOLERANCE: f64 = 1e-9; // Allowed drift between reaction-coordinate grids
pub const GRID_ABSOLUTE_TOLERANCE: f64 = 1e-12;
