use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lung_triage::cli::{AssessArgs, Cli, Commands, ModelCommand, ModelOverrides, VariantArg};
use lung_triage::config::Config;
use lung_triage::ctx::Ctx;
use lung_triage::io;
use lung_triage::model::{ModelProvider, ModelVariant};
use lung_triage::pipeline::{Pipeline, Stage};
use lung_triage::pipeline::stage0_scaffold::Stage0Scaffold;
use lung_triage::pipeline::stage1_symptoms::Stage1Symptoms;
use lung_triage::pipeline::stage2_risk::Stage2Risk;
use lung_triage::pipeline::stage3_upload::Stage3Upload;
use lung_triage::pipeline::stage4_predict::Stage4Predict;
use lung_triage::pipeline::stage5_output::Stage5Output;
use lung_triage::symptoms::Symptom;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Assess(args) => run_assess(args)?,
        Commands::Symptoms => print_symptom_list(),
        Commands::Model(args) => match args.command {
            ModelCommand::Fetch(overrides) => handle_model_fetch(&overrides)?,
        },
    }

    Ok(())
}

fn run_assess(args: AssessArgs) -> Result<()> {
    let config = resolve_config(&args.model)?;
    let provider = if args.predict {
        Some(ModelProvider::shared(&config.model)?)
    } else {
        None
    };

    let mut ctx = Ctx::new(config, args.out, args.json, env!("CARGO_PKG_VERSION"));
    ctx.symptom_names = args.symptoms;
    ctx.symptoms_path = args.symptoms_file;
    ctx.image_path = args.image;
    ctx.predict = args.predict;

    let mut stages: Vec<Box<dyn Stage>> = vec![
        Box::new(Stage0Scaffold::new()),
        Box::new(Stage1Symptoms::new()),
        Box::new(Stage2Risk::new()),
        Box::new(Stage3Upload::new()),
    ];
    if let Some(provider) = provider {
        stages.push(Box::new(Stage4Predict::new(provider)));
    }
    stages.push(Box::new(Stage5Output::new()));
    Pipeline::new(stages).run(&mut ctx)?;

    print_summary(&ctx)
}

fn resolve_config(overrides: &ModelOverrides) -> Result<Config> {
    let mut config = Config::load(overrides.config.as_deref())?;
    if let Some(path) = &overrides.model_path {
        config.model.path = path.clone();
    }
    if let Some(url) = &overrides.model_url {
        config.model.url = Some(url.clone());
    }
    if let Some(variant) = overrides.variant {
        config.model.variant = match variant {
            VariantArg::Xception5 => ModelVariant::Xception5,
            VariantArg::Staging4 => ModelVariant::Staging4,
        };
    }
    Ok(config)
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn print_symptom_list() {
    println!("symptoms ({}):", Symptom::ALL.len());
    for symptom in Symptom::ALL {
        println!(
            "{}\t{}\t{}",
            symptom.id(),
            symptom.label(),
            symptom.description()
        );
    }
}

fn handle_model_fetch(overrides: &ModelOverrides) -> Result<()> {
    let config = resolve_config(overrides)?;
    let provider = ModelProvider::shared(&config.model)?;
    match provider.ensure_model_available() {
        Ok(handle) => {
            println!(
                "model ready: {} (variant={}, backend={})",
                config.model.path.display(),
                handle.variant().as_str(),
                handle.backend_name()
            );
            Ok(())
        }
        Err(err) => anyhow::bail!("{}", err.user_message()),
    }
}
