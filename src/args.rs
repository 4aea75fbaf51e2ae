use clap::{Parser, Subcommand, ValueEnum};
use sitemeta::metadata::MetadataArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitemeta")]
#[command(about = "Generate sitemap, robots, manifest and page metadata for a content site")]
#[command(version)]
pub struct Args {
    /// Path to the JSON site configuration
    #[arg(short, long, default_value = "site.json", global = true)]
    pub config: PathBuf,

    /// Path to the JSON content tree
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the sitemap of indexable pages
    Sitemap {
        #[arg(short, long, value_enum, default_value_t = SitemapFormat::Xml)]
        format: SitemapFormat,
    },
    /// Print the robots policy
    Robots {
        #[arg(short, long, value_enum, default_value_t = RobotsFormat::Txt)]
        format: RobotsFormat,
    },
    /// Print the web app manifest as JSON
    Manifest,
    /// Print metadata for one page as JSON
    Metadata(MetadataFlags),
    /// Print the response headers for a path
    Headers {
        /// Request path
        #[arg(default_value = "/")]
        path: String,
    },
    /// Print the PWA theme colors
    Theme {
        /// Use the dark color scheme
        #[arg(long)]
        dark: bool,

        /// Computed value of the `--primary` CSS variable
        #[arg(long)]
        primary: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SitemapFormat {
    Xml,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RobotsFormat {
    Txt,
    Json,
}

#[derive(clap::Args, Debug, Clone)]
pub struct MetadataFlags {
    /// Page path, e.g. /blog/post
    #[arg(long)]
    pub path: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Share image URL
    #[arg(long)]
    pub image: Option<String>,

    #[arg(long)]
    pub locale: Option<String>,

    /// Ask search engines not to index the page
    #[arg(long)]
    pub no_index: bool,

    /// Ask search engines not to follow links on the page
    #[arg(long)]
    pub no_follow: bool,
}

/// Convert CLI flags into metadata arguments
pub fn convert_metadata_args(flags: MetadataFlags) -> MetadataArgs {
    MetadataArgs {
        title: flags.title,
        description: flags.description,
        image: flags.image,
        pathname: flags.path,
        locale: flags.locale,
        no_index: flags.no_index,
        no_follow: flags.no_follow,
    }
}
