use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use strata_sdk::{RepoConfig, DEFAULT_META_DIR};

#[derive(Parser)]
#[command(
    name = "strata",
    about = "strata: content-addressed snapshots of a working directory",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Run as if started in this directory
    #[arg(short = 'C', global = true, default_value = ".")]
    pub directory: PathBuf,

    /// Name of the metadata directory inside the working directory
    #[arg(long, global = true, env = "STRATA_DIR", default_value = DEFAULT_META_DIR)]
    pub meta_dir: String,
}

impl Cli {
    pub fn repo_config(&self) -> RepoConfig {
        RepoConfig::new(&self.directory).with_meta_dir_name(&self.meta_dir)
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an empty repository
    Init,
    /// Store a file as a blob and print its id
    HashObject(HashObjectArgs),
    /// Print the raw content of an object
    CatFile(CatFileArgs),
    /// Snapshot the working directory and print the tree id
    WriteTree,
    /// Replace the working directory with a stored tree
    ReadTree(ReadTreeArgs),
    /// Snapshot the working directory as a new commit
    Commit(CommitArgs),
    /// Show first-parent history
    Log(LogArgs),
    /// Restore a commit and move HEAD to it
    Checkout(CheckoutArgs),
    /// Create a tag
    Tag(TagArgs),
    /// List every reference
    K,
}

#[derive(Args)]
pub struct HashObjectArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct CatFileArgs {
    pub object: String,
}

#[derive(Args)]
pub struct ReadTreeArgs {
    pub tree: String,
}

#[derive(Args)]
pub struct CommitArgs {
    #[arg(short, long)]
    pub message: String,
}

#[derive(Args)]
pub struct LogArgs {
    #[arg(default_value = "@")]
    pub oid: String,
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct CheckoutArgs {
    pub oid: String,
}

#[derive(Args)]
pub struct TagArgs {
    pub name: String,
    #[arg(default_value = "@")]
    pub oid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_init() {
        let cli = Cli::try_parse_from(["strata", "init"]).unwrap();
        assert!(matches!(cli.command, Command::Init));
        assert_eq!(cli.directory, PathBuf::from("."));
    }

    #[test]
    fn parse_commit() {
        let cli = Cli::try_parse_from(["strata", "commit", "-m", "hello"]).unwrap();
        if let Command::Commit(args) = cli.command {
            assert_eq!(args.message, "hello");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn commit_requires_message() {
        assert!(Cli::try_parse_from(["strata", "commit"]).is_err());
    }

    #[test]
    fn parse_log_defaults_to_head() {
        let cli = Cli::try_parse_from(["strata", "log"]).unwrap();
        if let Command::Log(args) = cli.command {
            assert_eq!(args.oid, "@");
            assert_eq!(args.limit, None);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_log_with_start_and_limit() {
        let cli = Cli::try_parse_from(["strata", "log", "v1", "-n", "5"]).unwrap();
        if let Command::Log(args) = cli.command {
            assert_eq!(args.oid, "v1");
            assert_eq!(args.limit, Some(5));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_tag() {
        let cli = Cli::try_parse_from(["strata", "tag", "v1"]).unwrap();
        if let Command::Tag(args) = cli.command {
            assert_eq!(args.name, "v1");
            assert_eq!(args.oid, "@");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_plumbing_commands() {
        let cli = Cli::try_parse_from(["strata", "hash-object", "a.txt"]).unwrap();
        assert!(matches!(cli.command, Command::HashObject(_)));
        let cli = Cli::try_parse_from(["strata", "cat-file", "v1"]).unwrap();
        assert!(matches!(cli.command, Command::CatFile(_)));
        let cli = Cli::try_parse_from(["strata", "write-tree"]).unwrap();
        assert!(matches!(cli.command, Command::WriteTree));
        let cli = Cli::try_parse_from(["strata", "read-tree", "abc"]).unwrap();
        assert!(matches!(cli.command, Command::ReadTree(_)));
        let cli = Cli::try_parse_from(["strata", "k"]).unwrap();
        assert!(matches!(cli.command, Command::K));
    }

    #[test]
    fn parse_directory_and_meta_dir() {
        let cli =
            Cli::try_parse_from(["strata", "-C", "/srv/site", "--meta-dir", ".vc", "k"]).unwrap();
        let config = cli.repo_config();
        assert_eq!(config.meta_dir(), PathBuf::from("/srv/site/.vc"));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["strata", "--verbose", "init"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["strata", "--format", "json", "k"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
