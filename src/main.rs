use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use diceart::{GenerationParameters, Session};

#[derive(Parser)]
#[command(name = "diceart")]
#[command(about = "Turn raster images into buildable six-sided dice mosaics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Generation parameters shared by the image-driven subcommands.
#[derive(Args)]
struct GenerateArgs {
    /// Source image file (PNG, JPEG, BMP, GIF, ...)
    #[arg(short, long)]
    image: PathBuf,

    /// Grid width in dice
    #[arg(short, long, default_value_t = 30)]
    width: u32,

    /// Dice color scheme: white, black, wood, red, or blue
    #[arg(short, long, default_value = "white")]
    color: String,

    /// Brightness factor (1.0 = unchanged)
    #[arg(short, long, default_value_t = 1.0)]
    brightness: f32,

    /// Contrast factor (1.0 = unchanged)
    #[arg(long, default_value_t = 1.0)]
    contrast: f32,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a dice mosaic image from a source image
    Render {
        #[command(flatten)]
        generate: GenerateArgs,

        /// Output image file; format follows the extension (.png, .jpg)
        #[arg(short, long)]
        output: PathBuf,

        /// Per-die pixel size in the output
        #[arg(long, default_value_t = diceart::DEFAULT_EXPORT_CELL_SIZE)]
        cell_size: u32,

        /// Also save a project file alongside the render
        #[arg(short, long)]
        project: Option<PathBuf>,
    },
    /// Export the dice grid as plain text (one row per line)
    Grid {
        #[command(flatten)]
        generate: GenerateArgs,

        /// Output text file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the bill-of-materials dice list
    Report {
        #[command(flatten)]
        generate: GenerateArgs,

        /// Output text file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Re-render or report from a saved project without re-sampling
    Resume {
        /// Project file (.diceproj)
        #[arg(short, long)]
        project: PathBuf,

        /// Output image file; omit to print the dice list instead
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Per-die pixel size in the output
        #[arg(long, default_value_t = diceart::DEFAULT_EXPORT_CELL_SIZE)]
        cell_size: u32,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diceart=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            generate,
            output,
            cell_size,
            project,
        } => run_render_command(&generate, &output, cell_size, project.as_deref()),
        Commands::Grid { generate, output } => run_grid_command(&generate, output.as_deref()),
        Commands::Report { generate, output } => run_report_command(&generate, output.as_deref()),
        Commands::Resume {
            project,
            output,
            cell_size,
        } => run_resume_command(&project, output.as_deref(), cell_size),
    }
}

/// Load the image and run the generation pipeline once.
fn generate_session(args: &GenerateArgs) -> anyhow::Result<Session> {
    let mut session = Session::with_parameters(GenerationParameters {
        grid_width: args.width.max(1),
        color_scheme: args.color.clone(),
        brightness: args.brightness,
        contrast: args.contrast,
        ..GenerationParameters::default()
    });
    session.load_image(&args.image)?;
    session.generate()?;
    Ok(session)
}

fn write_or_print(text: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            tracing::info!(path = %path.display(), "Wrote output");
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn run_render_command(
    args: &GenerateArgs,
    output: &Path,
    cell_size: u32,
    project: Option<&Path>,
) -> anyhow::Result<()> {
    let session = generate_session(args)?;
    session.export_image_to(output, Some(cell_size))?;
    if let Some(project_path) = project {
        session.save_project(project_path)?;
    }

    let grid = session.grid().expect("generate succeeded");
    println!(
        "Rendered {} dice ({}x{}) to {}",
        grid.len(),
        grid.width(),
        grid.height(),
        output.display()
    );
    Ok(())
}

fn run_grid_command(args: &GenerateArgs, output: Option<&Path>) -> anyhow::Result<()> {
    let session = generate_session(args)?;
    write_or_print(&session.export_grid()?, output)
}

fn run_report_command(args: &GenerateArgs, output: Option<&Path>) -> anyhow::Result<()> {
    let session = generate_session(args)?;
    write_or_print(&session.export_report()?, output)
}

fn run_resume_command(
    project: &Path,
    output: Option<&Path>,
    cell_size: u32,
) -> anyhow::Result<()> {
    let mut session = Session::new();
    session.load_project(project)?;

    match output {
        Some(path) => {
            session.export_image_to(path, Some(cell_size))?;
            let grid = session.grid().expect("project load stores a grid");
            println!(
                "Rendered {} dice ({}x{}) to {}",
                grid.len(),
                grid.width(),
                grid.height(),
                path.display()
            );
        }
        None => print!("{}", session.export_report()?),
    }
    Ok(())
}
