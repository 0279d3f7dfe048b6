use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "lung-triage",
    version,
    about = "Symptom risk triage and chest X-ray stage prediction"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score symptoms and optionally classify an X-ray
    Assess(AssessArgs),
    /// List the symptom checklist
    Symptoms,
    /// Manage the model artifact
    Model(ModelArgs),
}

#[derive(Debug, Args)]
pub struct AssessArgs {
    #[arg(
        long = "symptom",
        value_name = "NAME",
        help = "Symptom label or id, e.g. \"Chest Pain\" or chest-pain (repeatable)"
    )]
    pub symptoms: Vec<String>,

    #[arg(long, help = "File with one `name<TAB>true|false` entry per line")]
    pub symptoms_file: Option<PathBuf>,

    #[arg(long, help = "Chest X-ray image (jpg, jpeg, png)")]
    pub image: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Run the stage classifier on --image")]
    pub predict: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,

    #[command(flatten)]
    pub model: ModelOverrides,
}

#[derive(Debug, Args)]
pub struct ModelArgs {
    #[command(subcommand)]
    pub command: ModelCommand,
}

#[derive(Debug, Subcommand)]
pub enum ModelCommand {
    /// Download (if missing) and load the model artifact
    Fetch(ModelOverrides),
}

#[derive(Debug, Clone, Args)]
pub struct ModelOverrides {
    #[arg(long, help = "JSON config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Local model artifact path")]
    pub model_path: Option<PathBuf>,

    #[arg(long, help = "URL to download the model artifact from when missing")]
    pub model_url: Option<String>,

    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Xception5,
    Staging4,
}
