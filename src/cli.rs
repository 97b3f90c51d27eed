use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)] // requires `derive` feature
#[command(name = "course-organizer")]
#[command(about = "Turn a course folder into a season/episode symlink library", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate JSON files from course directory
    Generate(GenerateArgs),
    /// Create symlinks based on JSON file
    Symlink(SymlinkArgs),
    /// Generate the series structure and create symlinks in one go
    Full(FullArgs),
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Course directory path
    #[arg(short, long)]
    pub course: PathBuf,
    /// JSON file to write series structure
    #[arg(short, long)]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SymlinkArgs {
    /// JSON file containing series structure
    #[arg(short, long)]
    pub json: PathBuf,
    /// Output directory path
    #[arg(short, long)]
    pub output: PathBuf,
    /// Series directory created inside the output directory
    /// [default: base name of the output directory]
    #[arg(short, long)]
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct FullArgs {
    /// Course directory path
    #[arg(short, long)]
    pub course: PathBuf,
    /// Output directory path
    #[arg(short, long)]
    pub output: PathBuf,
    /// Also write the original and series structure JSON files
    #[arg(short, long)]
    pub generate_json: bool,
}
