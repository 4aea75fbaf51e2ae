use clap::Parser;
use sitemeta::Site;
use sitemeta::metadata::MetadataArgs;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to JSON site configuration file
    #[arg(short, long)]
    config_file: String,

    /// Path to JSON content file
    #[arg(long)]
    content_file: Option<String>,

    /// JSON content string (overrides the content file)
    #[arg(long)]
    content: Option<String>,

    /// Page path to print metadata for
    #[arg(short, long, default_value = "/")]
    path: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    let args = Args::parse();

    println!("Loading configuration from file: {}", args.config_file);
    let mut site = Site::from_config_file(&args.config_file)?;

    if let Some(content_file) = args.content_file {
        println!("Loading content from file: {}", content_file);
        site = site.with_content_file(content_file)?;
    }

    if let Some(content) = args.content {
        println!("Applying content from string");
        site = site.with_content_str(&content)?;
    }

    println!("--- robots.txt");
    print!("{}", site.robots().to_txt());

    println!("--- sitemap");
    for entry in &site.sitemap().entries {
        println!("{} ({})", entry.url, entry.last_modified);
    }

    println!("--- metadata for {}", args.path);
    let metadata = site.metadata(MetadataArgs::new().with_pathname(&args.path))?;
    println!("{}", serde_json::to_string_pretty(&metadata)?);

    Ok(())
}
