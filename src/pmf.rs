/*
The potential of mean force written out by the tool: one
`<reaction coordinate> <free energy>` line per sample, no header.
 */
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{AsmdError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct PmfProfile {
    pub reaction_coordinate: Vec<f64>,
    pub free_energies: Vec<f64>,
}

impl PmfProfile {
    pub fn new(reaction_coordinate: Vec<f64>, free_energies: Vec<f64>) -> Result<Self> {
        if reaction_coordinate.len() != free_energies.len() {
            return Err(AsmdError::LengthMismatch {
                coordinates: reaction_coordinate.len(),
                energies: free_energies.len(),
            });
        }
        Ok(Self {
            reaction_coordinate,
            free_energies,
        })
    }

    pub fn len(&self) -> usize {
        self.free_energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free_energies.is_empty()
    }

    pub fn write<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for (coord, energy) in self.reaction_coordinate.iter().zip(&self.free_energies) {
            // Debug keeps a trailing `.0` and round-trips exactly
            writeln!(writer, "{coord:?} {energy:?}")?;
        }
        writer.flush()
    }

    /// Writes the profile to `path`, replacing any existing file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| AsmdError::io(path, source))?;
        self.write(BufWriter::new(file))
            .map_err(|source| AsmdError::io(path, source))?;
        log::info!("wrote {} PMF samples to {}", self.len(), path.display());
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| AsmdError::io(path, source))?;
        let mut reaction_coordinate = Vec::new();
        let mut free_energies = Vec::new();
        for (line_idx, line) in BufReader::new(file).lines().enumerate() {
            let line_no = line_idx + 1;
            let line = line.map_err(|source| AsmdError::io(path, source))?;
            if line.trim().is_empty() {
                continue;
            }
            let cols: Vec<_> = line.split_whitespace().collect();
            if cols.len() != 2 {
                return Err(AsmdError::InvalidColumns {
                    path: path.to_path_buf(),
                    line: line_no,
                    expected: 2,
                    found: cols.len(),
                });
            }
            for (column, (token, out)) in cols
                .iter()
                .zip([&mut reaction_coordinate, &mut free_energies])
                .enumerate()
            {
                let value = token
                    .parse::<f64>()
                    .map_err(|_| AsmdError::InvalidNumber {
                        path: path.to_path_buf(),
                        line: line_no,
                        column,
                        token: token.to_string(),
                    })?;
                out.push(value);
            }
        }
        Self::new(reaction_coordinate, free_energies)
    }
}
