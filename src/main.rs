use clap::Parser;
use sitemeta::Site;
use sitemeta::theme::{self, ColorScheme, ThemeColors};
use std::error::Error;

mod args;
use args::{Args, Command, RobotsFormat, SitemapFormat, convert_metadata_args};

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    ::log::info!("Loading site config from {}", args.config.display());
    let mut site = Site::from_config_file(&args.config)?;
    if let Some(content) = &args.content {
        ::log::info!("Loading content from {}", content.display());
        site = site.with_content_file(content)?;
    }

    match args.command {
        Command::Sitemap { format } => {
            let sitemap = site.sitemap();
            match format {
                SitemapFormat::Xml => print!("{}", sitemap.to_xml()),
                SitemapFormat::Json => println!("{}", serde_json::to_string_pretty(&sitemap)?),
            }
            ::log::info!(
                "Sitemap written with {} entries (revalidate every {}s)",
                sitemap.len(),
                site.config().seo.revalidate
            );
        }
        Command::Robots { format } => {
            let robots = site.robots();
            match format {
                RobotsFormat::Txt => print!("{}", robots.to_txt()),
                RobotsFormat::Json => println!("{}", serde_json::to_string_pretty(&robots)?),
            }
        }
        Command::Manifest => {
            println!("{}", serde_json::to_string_pretty(&site.manifest())?);
        }
        Command::Metadata(flags) => {
            let metadata = site.metadata(convert_metadata_args(flags))?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        Command::Headers { path } => {
            let headers = site.headers()?;
            for header in headers.headers_for(&path) {
                println!("{}: {}", header.key, header.value);
            }
        }
        Command::Theme { dark, primary } => {
            let scheme = if dark { ColorScheme::Dark } else { ColorScheme::Light };
            let colors = ThemeColors::with_computed(scheme, primary.as_deref(), None);
            println!("{}", serde_json::to_string_pretty(&colors)?);
            println!(
                "theme-color: {}",
                theme::pwa_theme_color(&site.config().pwa, scheme)
            );
            println!("primary-rgb: {}", theme::primary_color_rgb(primary.as_deref()));
        }
    }

    Ok(())
}
