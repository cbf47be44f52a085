/*

=========================================================
 Jarzynski analysis of Adaptive Steered MD (ASMD) runs
=========================================================

Each ASMD run leaves a work file: the work accumulated while the system is
pulled along a reaction coordinate. Jarzynski's equality turns an ensemble of
these non-equilibrium works into an equilibrium free energy,

    exp(-beta dF) = < exp(-beta W) >

evaluated here at every sample of the shared reaction-coordinate grid, which
gives the potential of mean force (PMF).

Pipeline
--------
- `work_files`: read the work files, one `Trajectory` each, checked to share
  one grid
- `stat_mech_free_energy::jarzynski`: exponential average per grid point
- `stat_mech_free_energy::representative`: the run whose final work is
  closest to the average (the usual seed for the next ASMD stage)
- `pmf`: write `<reaction coordinate> <free energy>` lines

*/
pub mod cli;
pub mod constants;
pub mod error;
pub mod pipeline;
pub mod pmf;
pub mod work_files;

pub mod stat_mech_free_energy {
    pub mod jarzynski;
    pub mod representative;
}

pub use error::{AsmdError, ErrorKind};
pub use pipeline::{run, PmfConfig, PmfReport};
pub use pmf::PmfProfile;
pub use work_files::{Trajectory, TrajectorySet};
