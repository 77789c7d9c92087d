//! # Gaugeboard CLI
//!
//! Command-line interface for the gauge dashboard.
//!
//! ## Usage
//!
//! ```bash
//! # Serve the dashboard on $PORT (default 3009)
//! gaugeboard serve
//!
//! # Serve a directory from disk on a specific port
//! gaugeboard serve --port 8080 --static-dir ./public
//!
//! # List the dashboard's gauges
//! gaugeboard list
//!
//! # Render one gauge to an SVG file
//! gaugeboard render --label Setlist --value 86 --output setlist.svg
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use gaugeboard::{
    GaugeError,
    bootstrap,
    gauge::{self, ChartSpec},
    server::{self, DEFAULT_PORT, ServerConfig},
    surface::SvgSurface,
};

/// Gaugeboard - gauge dashboard server
#[derive(Parser, Debug)]
#[command(name = "gaugeboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the dashboard over HTTP
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Interface to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Serve this directory instead of the embedded assets
        #[arg(long, env = "STATIC_DIR", value_name = "DIR")]
        static_dir: Option<PathBuf>,
    },

    /// List the dashboard's gauges
    List,

    /// Render a single gauge as a standalone SVG
    Render {
        /// Label drawn on the dial
        #[arg(long, default_value = "")]
        label: String,

        /// Reading to display
        #[arg(long, allow_negative_numbers = true)]
        value: f64,

        /// Domain minimum (default 0)
        #[arg(long, allow_negative_numbers = true)]
        min: Option<f64>,

        /// Domain maximum (default 100)
        #[arg(long, allow_negative_numbers = true)]
        max: Option<f64>,

        /// Surface width
        #[arg(long, default_value_t = 200.0)]
        width: f64,

        /// Output file (defaults to stdout)
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GaugeError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            if let Some(dir) = &static_dir {
                if !dir.join("index.html").is_file() {
                    return Err(GaugeError::Config(format!(
                        "{} has no index.html",
                        dir.display()
                    )));
                }
            }

            let config = ServerConfig {
                listen_addr: format!("{}:{}", host, port),
                static_dir,
            };

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }

        Commands::List => {
            println!("Dashboard gauges:");
            for chart in bootstrap::charts() {
                println!("  {:<16} {:<10} {}", chart.el, chart.label, chart.value);
            }
        }

        Commands::Render {
            label,
            value,
            min,
            max,
            width,
            output,
        } => {
            if !(width.is_finite() && width > 0.0) {
                return Err(GaugeError::Config(format!(
                    "width must be a positive number, got {}",
                    width
                )));
            }

            let spec = ChartSpec {
                el: String::new(),
                label,
                value,
                min,
                max,
            };

            let mut surface = SvgSurface::square(width);
            gauge::render(&mut surface, &spec);
            let svg = surface.to_svg();

            match output {
                Some(path) => {
                    std::fs::write(&path, svg)?;
                    println!("Saved to {}", path.display());
                }
                None => print!("{}", svg),
            }
        }
    }

    Ok(())
}
