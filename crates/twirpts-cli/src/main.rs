//! protoc-gen-twirp_typescript - TypeScript Twirp client generator
//!
//! Modes:
//! - no subcommand - protoc plugin: request on stdin, response on stdout
//! - `generate` - offline generation from a binary `FileDescriptorSet`
//! - `inspect` - print the closed registry of one file as JSON

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod descriptor;
mod generate;
mod inspect;
mod logging;
mod plugin;

#[cfg(test)]
mod test_support;

#[derive(Parser)]
#[command(name = "protoc-gen-twirp_typescript")]
#[command(author, version, about = "Generate TypeScript Twirp clients from protobuf schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript modules from a descriptor set
    Generate {
        /// Binary FileDescriptorSet (protoc --descriptor_set_out)
        #[arg(short, long)]
        descriptor_set: PathBuf,

        /// Output directory for generated modules
        #[arg(short, long)]
        output: PathBuf,

        /// TOML file with generator options
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Schema files to generate (default: every file in the set)
        #[arg(short, long = "file")]
        files: Vec<String>,
    },

    /// Print the model registry of one schema file as JSON
    Inspect {
        /// Binary FileDescriptorSet (protoc --descriptor_set_out)
        #[arg(short, long)]
        descriptor_set: PathBuf,

        /// Schema file to inspect
        #[arg(short, long)]
        file: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            plugin::run()?;
        }
        Some(Commands::Generate {
            descriptor_set,
            output,
            config,
            files,
        }) => {
            let options = generate::load_options(config.as_deref())?;
            logging::init_logging(&options.log_level);
            let written = generate::run(&descriptor_set, &output, &options, &files)?;
            tracing::info!("Wrote {} files to {}", written.len(), output.display());
        }
        Some(Commands::Inspect { descriptor_set, file }) => {
            logging::init_logging("warn");
            println!("{}", inspect::run(&descriptor_set, &file)?);
        }
    }

    Ok(())
}
