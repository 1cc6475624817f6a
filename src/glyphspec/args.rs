use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "glyphspec", version)]
#[command(about = "Build and inspect plot glyph specs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the registered glyph types
    #[command(alias = "ls")]
    Types,

    /// Show the attribute schema of a glyph type
    #[command(alias = "d")]
    Describe {
        /// Type tag or name (e.g. circle, Circle, annular_wedge)
        glyph: String,
    },

    /// Build a glyph and print its spec
    #[command(alias = "s")]
    Spec {
        /// Type tag or name
        glyph: String,

        /// Attribute assignments as name=value (value read as JSON, else text)
        #[arg(num_args = 0..)]
        assignments: Vec<String>,

        /// Print compact JSON regardless of config
        #[arg(long)]
        compact: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (pretty, radius_units, length_units, angle_units,
        /// start_angle_units, end_angle_units)
        key: Option<String>,

        /// Value to set (empty clears a unit override)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_spec_assignments() {
        let cli = Cli::try_parse_from(["glyphspec", "spec", "circle", "radius=3", "x=col"]).unwrap();
        match cli.command {
            Commands::Spec {
                glyph,
                assignments,
                compact,
            } => {
                assert_eq!(glyph, "circle");
                assert_eq!(assignments, vec!["radius=3", "x=col"]);
                assert!(!compact);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["glyphspec", "types", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
