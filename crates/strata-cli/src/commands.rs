use std::fs;
use std::io::Write;

use anyhow::Context;
use colored::Colorize;
use serde_json::{json, Value};
use strata_sdk::{RepoConfig, Repository};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = cli.repo_config();
    let format = cli.format;
    match cli.command {
        Command::Init => cmd_init(config, format),
        Command::HashObject(args) => cmd_hash_object(&open(config)?, args, format),
        Command::CatFile(args) => cmd_cat_file(&open(config)?, args, format),
        Command::WriteTree => {
            let id = open(config)?.write_tree()?;
            print_id(&id.to_hex(), format)
        }
        Command::ReadTree(args) => {
            let id = open(config)?.read_tree(&args.tree)?;
            emit(format, json!({ "tree": id.to_hex() }), || {
                println!("{} Restored tree {}", "✓".green().bold(), id.short_hex().yellow());
            })
        }
        Command::Commit(args) => {
            let id = open(config)?.commit(&args.message)?;
            emit(format, json!({ "commit": id.to_hex() }), || {
                println!("[{}] {}", id.short_hex().yellow(), args.message);
            })
        }
        Command::Log(args) => cmd_log(&open(config)?, args, format),
        Command::Checkout(args) => {
            let id = open(config)?.checkout(&args.oid)?;
            emit(format, json!({ "head": id.to_hex() }), || {
                println!("HEAD is now at {}", id.short_hex().yellow());
            })
        }
        Command::Tag(args) => {
            let id = open(config)?.create_tag(&args.name, Some(&args.oid))?;
            emit(format, json!({ "tag": &args.name, "target": id.to_hex() }), || {
                println!("Created tag {} at {}", args.name.green(), id.short_hex().yellow());
            })
        }
        Command::K => cmd_refs(&open(config)?, format),
    }
}

fn open(config: RepoConfig) -> anyhow::Result<Repository> {
    let dir = config.work_dir.display().to_string();
    Repository::open(config).with_context(|| format!("cannot open repository in {dir}"))
}

/// Print `value` as JSON, or run `text` for human-readable output.
fn emit(format: OutputFormat, value: Value, text: impl FnOnce()) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&value)?),
        OutputFormat::Text => text(),
    }
    Ok(())
}

fn print_id(hex: &str, format: OutputFormat) -> anyhow::Result<()> {
    emit(format, json!({ "id": hex }), || println!("{hex}"))
}

fn cmd_init(config: RepoConfig, format: OutputFormat) -> anyhow::Result<()> {
    let meta = config.meta_dir();
    Repository::init(config)?;
    emit(format, json!({ "path": meta.display().to_string() }), || {
        println!(
            "{} Initialized empty strata repository in {}",
            "✓".green().bold(),
            meta.display().to_string().bold()
        );
    })
}

fn cmd_hash_object(
    repo: &Repository,
    args: HashObjectArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let data =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;
    let id = repo.hash_object(&data)?;
    print_id(&id.to_hex(), format)
}

fn cmd_cat_file(
    repo: &Repository,
    args: CatFileArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let object = repo.cat_file(&args.object)?;
    match format {
        OutputFormat::Json => emit(
            format,
            json!({
                "kind": object.kind.as_str(),
                "size": object.size,
                "content": String::from_utf8_lossy(&object.data),
            }),
            || {},
        ),
        OutputFormat::Text => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&object.data)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn cmd_log(repo: &Repository, args: LogArgs, format: OutputFormat) -> anyhow::Result<()> {
    let entries = repo.log(Some(&args.oid), args.limit)?;
    let value = Value::Array(
        entries
            .iter()
            .map(|e| {
                json!({
                    "commit": e.id.to_hex(),
                    "tree": e.commit.tree.to_hex(),
                    "parent": e.parent().map(|p| p.to_hex()),
                    "message": e.message(),
                })
            })
            .collect(),
    );
    emit(format, value, || {
        for entry in &entries {
            println!("{} {}", "commit".yellow(), entry.id.to_hex().yellow());
            for line in entry.message().lines() {
                println!("\t{line}");
            }
            println!();
        }
    })
}

fn cmd_refs(repo: &Repository, format: OutputFormat) -> anyhow::Result<()> {
    let refs = repo.refs()?;
    let value = Value::Array(
        refs.iter()
            .map(|(name, target)| {
                json!({ "name": name, "target": target.as_ref().map(|t| t.to_hex()) })
            })
            .collect(),
    );
    emit(format, value, || {
        for (name, target) in &refs {
            match target {
                Some(id) => println!("{} {}", id.to_hex().yellow(), name),
                None => println!("{} {}", "(none)".dimmed(), name),
            }
        }
    })
}
