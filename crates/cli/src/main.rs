//! `publish` converts a markdown blog post into JSON and refreshes the blog index.
//!
//! Meant to be run from scheduled automation:
//!
//! ```text
//! publish posts/2024-06-12-shipping-faster.md public/blog
//! ```

use blogpub_core::{DEFAULT_AUTHOR, PublishOptions, RenderOptions, publish_post};
use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert a markdown blog post to JSON and update the blog index.
#[derive(Debug, Parser)]
#[command(name = "publish", version)]
struct Cli {
    /// Markdown source of the post.
    markdown_file: PathBuf,

    /// Directory holding published post JSON and index.json.
    output_dir: PathBuf,

    /// Author recorded for posts that do not name one.
    #[arg(long, env = "BLOGPUB_DEFAULT_AUTHOR", default_value = DEFAULT_AUTHOR)]
    default_author: String,

    /// Escape raw HTML in the post body instead of passing it through.
    #[arg(long)]
    escape_html: bool,

    /// Render plain CommonMark, without tables, footnotes, or other GFM extras.
    #[arg(long)]
    commonmark: bool,

    /// Log debug output.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    fn options(&self) -> PublishOptions {
        PublishOptions {
            default_author: self.default_author.clone(),
            render: RenderOptions {
                gfm: !self.commonmark,
                raw_html: !self.escape_html,
            },
        }
    }
}

fn init_logger(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Usage errors exit with 1 rather than clap's default of 2.
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    init_logger(cli.log_level());

    match publish_post(&cli.markdown_file, &cli.output_dir, &cli.options()) {
        Ok(path) => {
            println!("Published: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(1)
        }
    }
}
