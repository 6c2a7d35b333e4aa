use std::path::PathBuf;

use clap::Parser;
use colored::*;
use unicode_width::UnicodeWidthStr;
use xatag::api::{MessageLevel, XatagApi};
use xatag::commands::{CheckOptions, CmdMessage, CmdResult, CopyOptions, DeleteOptions};
use xatag::config::{self, XatagConfig};
use xatag::error::{Result, XatagError};
use xatag::indexer::{CommandRefresher, IndexRefresher, NoopRefresher};
use xatag::model::{parse_tag_specs, FileTags, Tag};
use xatag::store::fs::FsStore;
use xatag::tag_dict::TagDict;

mod args;
use args::{Cli, Commands};

fn main() {
    match run() {
        Ok(failed) if failed > 0 => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    }
}

struct AppContext {
    api: XatagApi<FsStore>,
    config: XatagConfig,
    config_dir: PathBuf,
    refresher: Box<dyn IndexRefresher>,
    quiet: bool,
}

/// Runs one invocation and returns the number of files that failed.
fn run() -> Result<usize> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Add { tags, files } => {
            let tags = parse_tag_specs(&tags);
            check_new_tags(&ctx, &tags)?;
            let result = ctx.api.add_tags(&files, &tags, ctx.quiet)?;
            finish_mutation(&ctx, &files, result)
        }
        Commands::Set { tags, files } => {
            let tags = parse_tag_specs(&tags);
            check_new_tags(&ctx, &tags)?;
            let result = ctx.api.set_tags(&files, &tags)?;
            finish_mutation(&ctx, &files, result)
        }
        Commands::SetAll { tags, files } => {
            let tags = parse_tag_specs(&tags);
            check_new_tags(&ctx, &tags)?;
            let result = ctx.api.set_all_tags(&files, &tags)?;
            finish_mutation(&ctx, &files, result)
        }
        Commands::Delete {
            tags,
            files,
            complement,
        } => {
            let tags = parse_tag_specs(&tags);
            let opts = DeleteOptions {
                complement,
                quiet: ctx.quiet,
            };
            let result = ctx.api.delete_tags(&files, &tags, opts)?;
            finish_mutation(&ctx, &files, result)
        }
        Commands::DeleteAll { files } => {
            let result = ctx.api.delete_all_tags(&files)?;
            finish_mutation(&ctx, &files, result)
        }
        Commands::Copy {
            source,
            destinations,
            tags,
            complement,
            over,
        } => {
            let opts = CopyOptions {
                filter: tag_filter(&tags),
                complement,
                over,
            };
            let result = ctx.api.copy_tags(&source, &destinations, &opts)?;
            finish_mutation(&ctx, &destinations, result)
        }
        Commands::List {
            files,
            tags,
            complement,
        } => {
            let filter = parse_tag_specs(&tags);
            let result = ctx.api.list_tags(&files, &filter, complement)?;
            print_file_tags(&result.file_tags);
            print_messages(&result.messages);
            Ok(result.failed_files.len())
        }
        Commands::Known { tags, complement } => {
            let filter = parse_tag_specs(&tags);
            match ctx.api.known_tags(&ctx.config_dir, &filter, complement)? {
                Some(known) => print_known_tags(&known),
                None => println!("No known-tags registry found."),
            }
            Ok(0)
        }
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => config::default_config_dir().ok_or_else(|| {
            XatagError::Usage("could not determine a config directory".to_string())
        })?,
    };
    let config = XatagConfig::load(&config_dir).unwrap_or_default();

    let refresher: Box<dyn IndexRefresher> = if cli.no_index {
        Box::new(NoopRefresher)
    } else {
        Box::new(CommandRefresher::new(config.index_command.clone()))
    };

    Ok(AppContext {
        api: XatagApi::new(FsStore::new()),
        config,
        config_dir,
        refresher,
        quiet: cli.quiet,
    })
}

fn tag_filter(specs: &[String]) -> Option<TagDict> {
    if specs.is_empty() {
        None
    } else {
        Some(TagDict::from_tags(&parse_tag_specs(specs)))
    }
}

fn check_new_tags(ctx: &AppContext, tags: &[Tag]) -> Result<()> {
    if !ctx.config.warn_new_tags {
        return Ok(());
    }
    let opts = CheckOptions {
        add: ctx.config.add_unknown,
        quiet: ctx.quiet,
    };
    let result = ctx.api.check_new_tags(tags, &ctx.config_dir, opts)?;
    print_messages(&result.messages);
    Ok(())
}

/// Print the outcome of a mutating command and fire the index-refresh
/// hook for the files that were actually touched. A broken indexer only
/// costs a warning.
fn finish_mutation(ctx: &AppContext, files: &[PathBuf], result: CmdResult) -> Result<usize> {
    print_messages(&result.messages);

    let changed: Vec<PathBuf> = files
        .iter()
        .filter(|f| !result.failed_files.contains(f))
        .cloned()
        .collect();
    if let Err(e) = ctx.refresher.notify_changed(&changed) {
        if !ctx.quiet {
            eprintln!(
                "{}",
                format!("Warning: could not refresh the search index: {}", e).yellow()
            );
        }
    }

    Ok(result.failed_files.len())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// One line per file, tags aligned in a column after the longest filename.
fn print_file_tags(file_tags: &[FileTags]) {
    let longest = file_tags
        .iter()
        .map(|ft| ft.path.display().to_string().width())
        .max()
        .unwrap_or(0);

    for ft in file_tags {
        let name = ft.path.display().to_string();
        let padding = " ".repeat(longest.saturating_sub(name.width()) + 1);
        println!("{}:{}{}", name.bold(), padding, format_tag_dict(&ft.tags));
    }
}

fn print_known_tags(known: &TagDict) {
    for (key, values) in known.iter() {
        println!("{}", format_tag_group(key, values));
    }
}

fn format_tag_dict(tags: &TagDict) -> String {
    tags.iter()
        .map(|(key, values)| format_tag_group(key, values))
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_tag_group(key: &str, values: &[String]) -> String {
    let joined = values.join(" ");
    if key.is_empty() {
        joined
    } else {
        format!("{}: {}", key, joined)
    }
}
