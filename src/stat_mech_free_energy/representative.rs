use itertools::Itertools;

use crate::error::{AsmdError, Result};
use crate::work_files::{Trajectory, TrajectorySet};

/// Index of the trajectory whose final work lies closest to the Jarzynski
/// average at sample `workskip - 1`. Ties go to the earliest trajectory.
pub fn closest_to_jarzynski(final_work: &[f64], jar_avg: &[f64], workskip: usize) -> Result<usize> {
    if workskip == 0 || workskip > jar_avg.len() {
        return Err(AsmdError::FinalSampleOutOfRange {
            workskip,
            len: jar_avg.len(),
        });
    }
    let target = jar_avg[workskip - 1];
    final_work
        .iter()
        .map(|w| (w - target).abs())
        .position_min_by(|a, b| a.total_cmp(b))
        .ok_or(AsmdError::EmptyTrajectoryList)
}

impl TrajectorySet {
    /// The trajectory most representative of the Jarzynski average.
    pub fn representative(&self, jar_avg: &[f64]) -> Result<&Trajectory> {
        let index = closest_to_jarzynski(&self.final_work(), jar_avg, self.workskip())?;
        let chosen = &self.trajectories()[index];
        log::info!(
            "closest final work {:?} to Jarzynski average {:?} in {}",
            chosen.final_work(),
            jar_avg[self.workskip() - 1],
            chosen.path.display()
        );
        Ok(chosen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn picks_smallest_deviation() {
        let index = closest_to_jarzynski(&[1.0, 2.0, 3.0], &[0.0, 1.4], 2).unwrap();
        assert_eq!(index, 0);
        let index = closest_to_jarzynski(&[1.0, 2.0, 3.0], &[0.0, 2.6], 2).unwrap();
        assert_eq!(index, 2);
    }

    #[test]
    fn ties_go_to_first() {
        let index = closest_to_jarzynski(&[5.0, 1.0, 3.0, 1.0], &[2.0], 1).unwrap();
        assert_eq!(index, 1);
        let index = closest_to_jarzynski(&[2.5, 1.5], &[2.0], 1).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn empty_final_work_is_rejected() {
        assert!(matches!(
            closest_to_jarzynski(&[], &[1.0], 1),
            Err(AsmdError::EmptyTrajectoryList)
        ));
    }

    #[test]
    fn workskip_must_index_the_profile() {
        assert!(matches!(
            closest_to_jarzynski(&[1.0], &[1.0, 2.0], 3),
            Err(AsmdError::FinalSampleOutOfRange { workskip: 3, len: 2 })
        ));
        assert!(closest_to_jarzynski(&[1.0], &[1.0], 0).is_err());
    }

    #[test]
    fn set_returns_the_trajectory() {
        let make = |name: &str, last: f64| Trajectory {
            path: PathBuf::from(name),
            reaction_coordinate: vec![0.0, 1.0],
            work: vec![0.0, last],
        };
        let set = TrajectorySet::new(vec![make("a", 1.0), make("b", 2.0), make("c", 3.0)]).unwrap();
        let chosen = set.representative(&[0.0, 1.9]).unwrap();
        assert_eq!(chosen.path, PathBuf::from("b"));
    }
}
