/*
Reading ASMD work files.

An ASMD work file is plain text: one header row, then one row per sample along
the reaction coordinate. Rows are whitespace separated; column 0 holds the
reaction coordinate and column 3 the work accumulated up to that point.
 */
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use ndarray::Array2;

use crate::constants::{
    GRID_ABSOLUTE_TOLERANCE, GRID_RELATIVE_TOLERANCE, MIN_COLUMNS, REACTION_COORDINATE_COLUMN,
    WORK_COLUMN,
};
use crate::error::{AsmdError, Result};

/// One ASMD run: its work file and the samples read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub path: PathBuf,
    pub reaction_coordinate: Vec<f64>,
    pub work: Vec<f64>,
}

impl Trajectory {
    pub fn n_samples(&self) -> usize {
        self.work.len()
    }

    /// Work at the last reaction-coordinate sample.
    pub fn final_work(&self) -> Option<f64> {
        self.work.last().copied()
    }
}

/// The part of a row before any `#` comment.
fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(data, _)| data)
}

fn line_error(path: &Path, line: usize, source: std::io::Error) -> AsmdError {
    match source.kind() {
        std::io::ErrorKind::InvalidData => AsmdError::InvalidEncoding {
            path: path.to_path_buf(),
            line,
        },
        _ => AsmdError::io(path, source),
    }
}

fn parse_column(path: &Path, line: usize, column: usize, token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| AsmdError::InvalidNumber {
            path: path.to_path_buf(),
            line,
            column,
            token: token.to_string(),
        })
}

/// Parses a work file from any reader. `path` is only used to label errors.
pub fn parse_work_file<R: Read>(reader: R, path: impl AsRef<Path>) -> Result<Trajectory> {
    let path = path.as_ref();
    let mut lines = BufReader::new(reader).lines();

    match lines.next() {
        Some(header) => {
            header.map_err(|source| line_error(path, 1, source))?;
        }
        None => {
            return Err(AsmdError::MissingHeader {
                path: path.to_path_buf(),
            })
        }
    }

    let mut reaction_coordinate = Vec::new();
    let mut work = Vec::new();
    // line numbers are 1-based and the header is line 1
    for (line_no, line) in (2..).zip(lines) {
        let line = line.map_err(|source| line_error(path, line_no, source))?;
        let cols: Vec<_> = strip_comment(&line).split_whitespace().collect();
        if cols.is_empty() {
            continue;
        }
        if cols.len() < MIN_COLUMNS {
            return Err(AsmdError::InvalidColumns {
                path: path.to_path_buf(),
                line: line_no,
                expected: MIN_COLUMNS,
                found: cols.len(),
            });
        }
        reaction_coordinate.push(parse_column(
            path,
            line_no,
            REACTION_COORDINATE_COLUMN,
            cols[REACTION_COORDINATE_COLUMN],
        )?);
        work.push(parse_column(path, line_no, WORK_COLUMN, cols[WORK_COLUMN])?);
    }

    if work.is_empty() {
        return Err(AsmdError::NoSamples {
            path: path.to_path_buf(),
        });
    }

    Ok(Trajectory {
        path: path.to_path_buf(),
        reaction_coordinate,
        work,
    })
}

pub fn read_work_file(path: impl AsRef<Path>) -> Result<Trajectory> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AsmdError::io(path, source))?;
    let trajectory = parse_work_file(file, path)?;
    log::debug!(
        "read {} samples from {}",
        trajectory.n_samples(),
        path.display()
    );
    Ok(trajectory)
}

/// All trajectories of one analysis, in input order, sharing one grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySet {
    trajectories: Vec<Trajectory>,
}

fn same_grid_point(expected: f64, found: f64) -> bool {
    let scale = expected.abs().max(found.abs());
    (expected - found).abs() <= GRID_ABSOLUTE_TOLERANCE.max(GRID_RELATIVE_TOLERANCE * scale)
}

impl TrajectorySet {
    /// Builds a set, checking that every trajectory matches the first one's
    /// sample count and reaction-coordinate grid.
    pub fn new(trajectories: Vec<Trajectory>) -> Result<Self> {
        let reference = trajectories.first().ok_or(AsmdError::EmptyTrajectoryList)?;
        if reference.n_samples() == 0 {
            return Err(AsmdError::NoSamples {
                path: reference.path.clone(),
            });
        }

        for trajectory in &trajectories[1..] {
            if trajectory.n_samples() != reference.n_samples() {
                return Err(AsmdError::SampleCountMismatch {
                    path: trajectory.path.clone(),
                    reference: reference.path.clone(),
                    expected: reference.n_samples(),
                    found: trajectory.n_samples(),
                });
            }
            let drift = reference
                .reaction_coordinate
                .iter()
                .zip(&trajectory.reaction_coordinate)
                .find_position(|&(&expected, &found)| !same_grid_point(expected, found));
            if let Some((index, (&expected, &found))) = drift {
                return Err(AsmdError::GridMismatch {
                    path: trajectory.path.clone(),
                    index,
                    expected,
                    found,
                });
            }
        }

        Ok(Self { trajectories })
    }

    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    pub fn n_trajectories(&self) -> usize {
        self.trajectories.len()
    }

    /// The shared grid, as read from the first trajectory.
    pub fn reaction_coordinate(&self) -> &[f64] {
        &self.trajectories[0].reaction_coordinate
    }

    /// Number of samples per trajectory; index `workskip - 1` is the final sample.
    pub fn workskip(&self) -> usize {
        self.trajectories[0].n_samples()
    }

    pub fn final_work(&self) -> Vec<f64> {
        self.trajectories
            .iter()
            .filter_map(Trajectory::final_work)
            .collect()
    }

    /// Work values as an (M trajectories, N samples) matrix.
    pub fn work_matrix(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.n_trajectories(), self.workskip()), |(j, i)| {
            self.trajectories[j].work[i]
        })
    }
}

/// Reads every work file in order and validates them as one set.
pub fn read_work_files(paths: &[impl AsRef<Path>]) -> Result<TrajectorySet> {
    if paths.is_empty() {
        return Err(AsmdError::EmptyTrajectoryList);
    }
    let trajectories = paths
        .iter()
        .map(read_work_file)
        .collect::<Result<Vec<_>>>()?;
    let set = TrajectorySet::new(trajectories)?;
    log::info!(
        "parsed {} trajectories with {} samples each",
        set.n_trajectories(),
        set.workskip()
    );
    Ok(set)
}

/// Reads a list of work-file paths, one per whitespace-separated token.
pub fn read_file_list(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AsmdError::io(path, source))?;
    let mut out = Vec::new();
    for (line_no, line) in (1..).zip(BufReader::new(file).lines()) {
        let line = line.map_err(|source| line_error(path, line_no, source))?;
        out.extend(strip_comment(&line).split_whitespace().map(PathBuf::from));
    }
    if out.is_empty() {
        return Err(AsmdError::EmptyTrajectoryList);
    }
    Ok(out)
}
