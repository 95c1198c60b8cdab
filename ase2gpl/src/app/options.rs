/*!
 Command line argument parsing for the converter.
*/

use std::path::PathBuf;

use clap::{crate_version, Arg, ArgMatches, Command};

use crate::app::error::RuntimeError;

pub const OPTION_ASE_PATH: &str = "ase-file";
pub const OPTION_EXPORT_PATH: &str = "export-path";

/// Prefix present when a file manager hands us a URI instead of a path
const FILE_URI_PREFIX: &str = "file:///";

/// Options set by the user at runtime
#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    /// Where the ASE document lives
    pub ase_path: PathBuf,
    /// Where to write GPL documents
    pub export_path: PathBuf,
}

impl Options {
    pub fn from_args(args: &ArgMatches) -> Result<Self, RuntimeError> {
        let ase_path: &String = args.get_one(OPTION_ASE_PATH).ok_or_else(|| {
            RuntimeError::InvalidOptions(format!("No value provided for --{OPTION_ASE_PATH}"))
        })?;

        let export_path = args
            .get_one::<String>(OPTION_EXPORT_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Options {
            ase_path: PathBuf::from(strip_uri_prefix(ase_path)),
            export_path,
        })
    }
}

/// File managers may pass `file:///` URIs; the decoder wants plain paths
fn strip_uri_prefix(path: &str) -> String {
    match path.strip_prefix(FILE_URI_PREFIX) {
        Some(rest) => format!("/{rest}"),
        None => path.to_string(),
    }
}

/// Build the command line argument parser
pub fn from_command_line() -> ArgMatches {
    Command::new("ASE to GPL converter")
        .version(crate_version!())
        .about("Convert Adobe Swatch Exchange (ASE) palettes to GIMP (GPL) palettes")
        .arg(
            Arg::new(OPTION_ASE_PATH)
                .short('i')
                .long(OPTION_ASE_PATH)
                .help("Path to the ASE document to convert")
                .display_order(0)
                .required(true),
        )
        .arg(
            Arg::new(OPTION_EXPORT_PATH)
                .short('o')
                .long(OPTION_EXPORT_PATH)
                .help("Directory to write GPL palettes to\nDefaults to the current directory")
                .display_order(1),
        )
        .get_matches()
}
