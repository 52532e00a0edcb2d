use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use vitae::{OutputFormat, PipelineBuilder, PipelineError};

/// Render a resume JSON document as a text outline or a JSON render tree.
#[derive(Parser, Debug)]
#[command(name = "vitae", version, about)]
struct Cli {
    /// Path to the resume document.
    resume: PathBuf,

    /// JSON template definition. Defaults to the built-in Gengar template.
    #[arg(short, long)]
    template: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Date pattern, e.g. "MMM YYYY". Overrides metadata.date.format.
    #[arg(long)]
    date_format: Option<String>,

    /// Number of marks in level indicators, 1 to 10.
    #[arg(long)]
    marks: Option<usize>,

    /// Write to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("vitae=info")).init();
    let cli = Cli::parse();

    log::info!("Loading resume from {}", cli.resume.display());
    let document: serde_json::Value = serde_json::from_str(&fs::read_to_string(&cli.resume)?)?;

    let mut builder = PipelineBuilder::new().with_output_format(cli.format);
    if let Some(template) = &cli.template {
        builder = builder.with_template_file(template)?;
    }
    if let Some(format) = &cli.date_format {
        builder = builder.with_date_format(format);
    }
    if let Some(marks) = cli.marks {
        builder = builder.with_level_marks(marks);
    }
    let pipeline = builder.build()?;

    match &cli.output {
        Some(path) => pipeline.render_to_file(&document, path)?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            pipeline.render(&document, &mut handle)?;
            handle.flush()?;
        }
    }
    Ok(())
}
