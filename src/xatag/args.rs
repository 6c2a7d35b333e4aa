use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "xatag")]
#[command(about = "Tag files with key/value pairs stored in extended attributes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress advisory warnings (never the mutation itself)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip the search-index refresh after mutations
    #[arg(long, global = true)]
    pub no_index: bool,

    /// Use this config directory instead of the platform default
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add tags to files
    #[command(alias = "a")]
    Add {
        /// Tag specs: 'key:value', 'key:' or a bare 'value' (repeatable)
        #[arg(short = 't', long = "tag", required = true, value_name = "TAG")]
        tags: Vec<String>,

        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Replace the value sets of the mentioned keys
    #[command(alias = "s")]
    Set {
        #[arg(short = 't', long = "tag", required = true, value_name = "TAG")]
        tags: Vec<String>,

        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Replace all tags: files end up with exactly the given tags
    SetAll {
        #[arg(short = 't', long = "tag", required = true, value_name = "TAG")]
        tags: Vec<String>,

        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Delete tags from files ('key:' deletes the whole key)
    #[command(alias = "d")]
    Delete {
        #[arg(short = 't', long = "tag", required = true, value_name = "TAG")]
        tags: Vec<String>,

        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Keep only the given tags, deleting everything else
        #[arg(short = 'C', long)]
        complement: bool,
    },

    /// Delete every xatag attribute from files
    DeleteAll {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Copy tags from one file to others
    #[command(alias = "c")]
    Copy {
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        #[arg(required = true, value_name = "DEST")]
        destinations: Vec<PathBuf>,

        /// Copy only these tags (with -C: all but these)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        #[arg(short = 'C', long)]
        complement: bool,

        /// Remove the destination's tags first
        #[arg(long)]
        over: bool,
    },

    /// List the tags on files
    #[command(alias = "ls")]
    List {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Show only these tags (with -C: all but these)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        #[arg(short = 'C', long)]
        complement: bool,
    },

    /// Print the known-tags registry
    Known {
        /// Show only these tags (with -C: all but these)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        #[arg(short = 'C', long)]
        complement: bool,
    },
}
