use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::constants::{DEFAULT_OUTPUT, DEFAULT_TEMPERATURE_K};
use crate::error::{AsmdError, Result};
use crate::pipeline::PmfConfig;
use crate::work_files::read_file_list;

/// Compute the Jarzynski average of a set of ASMD work files and report the
/// trajectory closest to it.
#[derive(Debug, Parser)]
#[command(name = "asmd-jar", version)]
#[command(group(ArgGroup::new("work_files").required(true).args(["inputfile", "asmdfiles"])))]
pub struct Cli {
    /// Temperature of the ASMD simulations, in Kelvin.
    #[arg(short, long = "temp", default_value_t = DEFAULT_TEMPERATURE_K)]
    pub temperature: f64,

    /// File listing the ASMD work files to analyze.
    #[arg(short = 'f', long = "inputfile", value_name = "FILE")]
    pub inputfile: Option<PathBuf>,

    /// Name of the PMF output file.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// ASMD work files.
    #[arg(short = 'i', long = "asmdfiles", value_name = "FILES", num_args = 0..)]
    pub asmdfiles: Option<Vec<PathBuf>>,
}

impl Cli {
    /// Resolves the work-file list, reading the `-f` list file if given.
    pub fn into_config(self) -> Result<PmfConfig> {
        let work_files = match (self.inputfile, self.asmdfiles) {
            (Some(list), None) => read_file_list(list)?,
            (None, Some(files)) => files,
            (None, None) => {
                return Err(AsmdError::Usage(
                    "one of -i/--asmdfiles or -f/--inputfile is required".to_string(),
                ))
            }
            (Some(_), Some(_)) => {
                return Err(AsmdError::Usage(
                    "-i/--asmdfiles and -f/--inputfile cannot be used together".to_string(),
                ))
            }
        };
        Ok(PmfConfig {
            temperature_k: self.temperature,
            output: self.output,
            work_files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use clap::error::ErrorKind as ClapErrorKind;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["asmd-jar", "-i", "a.dat", "b.dat"]).unwrap();
        assert_eq!(cli.temperature, 300.0);
        assert_eq!(cli.output, PathBuf::from("_jar.PMF.dat"));
        let config = cli.into_config().unwrap();
        assert_eq!(
            config.work_files,
            vec![PathBuf::from("a.dat"), PathBuf::from("b.dat")]
        );
    }

    #[test]
    fn long_flags() {
        let cli = Cli::try_parse_from([
            "asmd-jar",
            "--temp",
            "310.5",
            "--output",
            "pmf.dat",
            "--asmdfiles",
            "a.dat",
        ])
        .unwrap();
        assert_eq!(cli.temperature, 310.5);
        assert_eq!(cli.output, PathBuf::from("pmf.dat"));
    }

    #[test]
    fn requires_one_input_mode() {
        let err = Cli::try_parse_from(["asmd-jar", "-t", "300"]).unwrap_err();
        assert_eq!(err.kind(), ClapErrorKind::MissingRequiredArgument);

        let err =
            Cli::try_parse_from(["asmd-jar", "-f", "list.txt", "-i", "a.dat"]).unwrap_err();
        assert_eq!(err.kind(), ClapErrorKind::ArgumentConflict);
    }

    #[test]
    fn empty_asmdfiles_is_accepted_by_the_parser() {
        let cli = Cli::try_parse_from(["asmd-jar", "-i"]).unwrap();
        assert_eq!(cli.asmdfiles, Some(Vec::new()));
    }

    #[test]
    fn into_config_checks_exclusivity() {
        let cli = Cli {
            temperature: 300.0,
            inputfile: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            asmdfiles: None,
        };
        assert_eq!(cli.into_config().unwrap_err().kind(), ErrorKind::Usage);
    }
}
