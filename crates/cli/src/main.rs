#![deny(unsafe_code)]
//! Desktop launcher for the simple-shape rotating triangle.
//!
//! Subcommands:
//! - `run` (default) — open the window and spin the triangle until Escape
//! - `shaders` — print the assembled shader sources for a dialect

mod config;
mod error;
mod logging;
mod window;

use clap::{Args, Parser, Subcommand, ValueEnum};
use error::CliError;
use glow::HasContext;
use simple_shape_core::frame;
use simple_shape_core::render::RendererContext;
use simple_shape_core::{DesktopGl, ShaderDialect, ShaderSources, WebGl2};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "simple-shape", about = "Rotating triangle rendered with OpenGL")]
struct Cli {
    /// Log filter in env_logger syntax (overrides RUST_LOG).
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the window and render until Escape is pressed or the window is closed.
    Run(RunArgs),
    /// Print the assembled shader sources.
    Shaders {
        /// Dialect whose header is prefixed.
        #[arg(long, value_enum, default_value_t = Target::Desktop)]
        target: Target,

        /// Output as JSON instead of plain GLSL.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Default)]
struct RunArgs {
    /// Window config file (JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window title.
    #[arg(long)]
    title: Option<String>,

    /// Window width in logical pixels.
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Window height in logical pixels.
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Present without waiting for vertical blank.
    #[arg(long)]
    no_vsync: bool,

    /// Replacement vertex shader body (the version header is added).
    #[arg(long)]
    vertex_shader: Option<PathBuf>,

    /// Replacement fragment shader body (the version header is added).
    #[arg(long)]
    fragment_shader: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    Desktop,
    Browser,
}

impl Target {
    fn dialect_name(self) -> &'static str {
        match self {
            Target::Desktop => DesktopGl::NAME,
            Target::Browser => WebGl2::NAME,
        }
    }

    fn sources(self) -> ShaderSources {
        match self {
            Target::Desktop => ShaderSources::for_dialect::<DesktopGl>(),
            Target::Browser => ShaderSources::for_dialect::<WebGl2>(),
        }
    }
}

fn run_window(args: RunArgs) -> Result<(), CliError> {
    let overrides = config::WindowOverrides {
        title: args.title,
        width: args.width,
        height: args.height,
        no_vsync: args.no_vsync,
    };
    let window_config = config::apply_overrides(
        config::load_window_config(args.config.as_deref())?,
        &overrides,
    );
    let custom_shaders = args.vertex_shader.is_some() || args.fragment_shader.is_some();
    let sources =
        config::load_shader_sources(args.vertex_shader.as_deref(), args.fragment_shader.as_deref())?;

    let mut host = window::DesktopHost::open(window_config)?;
    let renderer = RendererContext::new(host.load_gl()?, &sources)?;
    log::info!("OpenGL {:?}", renderer.gl().version());
    if custom_shaders && !renderer.program().is_usable() {
        log::warn!("the shader files passed with --vertex-shader/--fragment-shader did not build");
    }

    let (width, height) = host.framebuffer_size();
    frame::apply_resize(&renderer, width, height);

    frame::run_blocking(&mut host, &renderer);

    // The renderer drops before the host, which tears down surface, context
    // and window. Program and VAO go away with the context.
    Ok(())
}

fn print_shaders(target: Target, json: bool) -> Result<(), CliError> {
    let sources = target.sources();
    if json {
        let out = serde_json::json!({
            "target": target.dialect_name(),
            "vertex": sources.vertex,
            "fragment": sources.fragment,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("// vertex ({})", target.dialect_name());
        print!("{}", sources.vertex);
        println!("// fragment ({})", target.dialect_name());
        print!("{}", sources.fragment);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command.unwrap_or(Command::Run(RunArgs::default())) {
        Command::Run(args) => run_window(args),
        Command::Shaders { target, json } => print_shaders(target, json),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(logging::LoggingConfig {
        env_filter: cli.log.clone(),
        ..logging::LoggingConfig::default()
    });

    if let Err(e) = run(cli) {
        log::error!("{e}");
        process::exit(e.exit_code());
    }
}
