use std::path::PathBuf;

use crate::error::Result;
use crate::pmf::PmfProfile;
use crate::stat_mech_free_energy::jarzynski::jarzynski_average;
use crate::work_files::read_work_files;

#[derive(Debug, Clone, PartialEq)]
pub struct PmfConfig {
    pub temperature_k: f64,
    pub output: PathBuf,
    pub work_files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PmfReport {
    pub profile: PmfProfile,
    pub representative: PathBuf,
    pub output: PathBuf,
}

/// Parses the work files, averages them, picks the representative
/// trajectory and writes the PMF. Nothing is written unless every earlier
/// step succeeded.
pub fn run(config: &PmfConfig) -> Result<PmfReport> {
    let trajectories = read_work_files(config.work_files.as_slice())?;
    let jar_avg = jarzynski_average(trajectories.work_matrix().view(), config.temperature_k)?;
    let representative = trajectories.representative(&jar_avg)?.path.clone();
    let profile = PmfProfile::new(trajectories.reaction_coordinate().to_vec(), jar_avg)?;
    profile.write_to(&config.output)?;

    Ok(PmfReport {
        profile,
        representative,
        output: config.output.clone(),
    })
}
