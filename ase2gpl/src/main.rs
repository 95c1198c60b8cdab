/*!
 Convert Adobe Swatch Exchange (`ASE`) palettes to GIMP (`GPL`) palettes.
*/

use std::process::exit;

use crate::app::{options::Options, runtime::Config};

mod app;
mod exporters;

fn main() {
    let args = app::options::from_command_line();
    match Options::from_args(&args) {
        Ok(options) => match Config::new(options) {
            Ok(config) => {
                if let Err(why) = config.start() {
                    eprintln!("Unable to convert: {why}");
                    exit(1);
                }
            }
            Err(why) => {
                eprintln!("{why}");
                exit(1);
            }
        },
        Err(why) => {
            eprintln!("{why}");
            exit(2);
        }
    }
}
