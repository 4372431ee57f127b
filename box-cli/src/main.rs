mod bucket;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use box_core::session::ScanSession;
use clap::{Parser, Subcommand};
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// A global log level to use when printing logs.
    /// It's also possible to set `RUST_LOG` according to
    /// `tracing_subscriber::filter::EnvFilter`, which will always have
    /// priority.
    #[arg(long)]
    log_level: Option<Level>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bootstraps a boxed project in the given directory.
    Init {
        #[clap(value_name = "DIR")]
        dir: Option<PathBuf>,

        #[arg(long = "bucket", short = 'b')]
        buckets: Vec<String>,
    },
    /// Scans a boxed project and reports what would be pushed.
    Push {
        #[clap(value_name = "DIR")]
        dir: Option<PathBuf>,
    },
    /// Materializes remote content locally. Not implemented in this
    /// revision.
    Pull {
        #[clap(value_name = "DIR")]
        dir: Option<PathBuf>,
    },
    /// Permanently removes the local `.box` state, un-boxing the project.
    Rm {
        #[clap(value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli.log_level.unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env()
                .expect("invalid RUST_LOG"),
        )
        .init();

    let result = match cli.command {
        Commands::Init { dir, buckets } => run_init(dir, buckets),
        Commands::Push { dir } => run_push(dir),
        Commands::Pull { dir } => run_pull(dir),
        Commands::Rm { dir } => run_rm(dir),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn current_dir_or(dir: Option<PathBuf>) -> std::io::Result<PathBuf> {
    dir.map(Ok).unwrap_or_else(std::env::current_dir)
}

fn run_init(
    dir: Option<PathBuf>,
    bucket_uris: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = current_dir_or(dir)?;

    let buckets = bucket_uris
        .iter()
        .map(|uri| bucket::Bucket::create(uri))
        .collect::<Result<Vec<_>, _>>()?;

    let conf = config::Config {
        buckets: buckets
            .into_iter()
            .map(|b| config::BucketConfig {
                endpoint: b.endpoint().to_string(),
            })
            .collect(),
    };

    info!(dir = %dir.display(), buckets = bucket_uris.len(), "initializing boxed project");
    config::write(&dir, &conf)?;
    Ok(())
}

fn run_push(dir: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = current_dir_or(dir)?;
    let conf = config::read(&dir)?;

    if conf.buckets.is_empty() {
        warn!(dir = %dir.display(), "no buckets configured, scanning only");
    }

    let session = ScanSession::spawn(dir.clone());
    let mut files = 0usize;
    let mut parts = 0usize;
    let mut dirs = 0usize;

    while let Ok(node) = session.nodes().recv() {
        match node {
            box_core::Node::File(_) => files += 1,
            box_core::Node::Part(_) => parts += 1,
            box_core::Node::Dir(_) => dirs += 1,
        }
    }

    let root = session.join()?;
    info!(
        dir = %dir.display(),
        root_key = %root.key(),
        dirs,
        files,
        parts,
        "scan complete"
    );
    println!(
        "{dirs} directories, {files} files, {parts} parts, root {}",
        root.key()
    );
    Ok(())
}

fn run_pull(dir: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = current_dir_or(dir)?;
    let _conf = config::read(&dir)?;
    Err("pull is not implemented: remote materialization is out of scope for this revision".into())
}

fn run_rm(dir: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = current_dir_or(dir)?;
    config::remove(&dir)?;
    info!(dir = %dir.display(), "removed .box state");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn init_then_push_reports_counts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"hello").unwrap();

        run_init(Some(dir.path().to_path_buf()), vec![]).unwrap();
        assert!(run_push(Some(dir.path().to_path_buf())).is_ok());
    }

    #[test]
    fn push_without_init_fails() {
        let dir = tempdir().unwrap();
        assert!(run_push(Some(dir.path().to_path_buf())).is_err());
    }

    #[test]
    fn pull_is_an_explicit_stub() {
        let dir = tempdir().unwrap();
        run_init(Some(dir.path().to_path_buf()), vec![]).unwrap();
        assert!(run_pull(Some(dir.path().to_path_buf())).is_err());
    }

    #[test]
    fn rm_without_init_is_a_no_op() {
        let dir = tempdir().unwrap();
        assert!(run_rm(Some(dir.path().to_path_buf())).is_ok());
    }

    #[test]
    fn init_rejects_malformed_bucket_uri() {
        let dir = tempdir().unwrap();
        assert!(run_init(
            Some(dir.path().to_path_buf()),
            vec!["not-a-uri".to_string()]
        )
        .is_err());
    }
}
