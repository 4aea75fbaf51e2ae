use sitemeta::content::{CategoryNode, ContentData, PageNode};
use sitemeta::{Site, SiteConfig};

fn main() {
    // Initialize logger
    env_logger::init();

    let mut config = SiteConfig::new("Demo Site", "https://example.com/");
    config.seo.disallow_paths = vec!["/admin".to_string()];

    let mut draft = PageNode::new("/blog/draft");
    draft.is_published = false;

    let mut dated = PageNode::new("/blog/hello");
    dated.created_at = Some("2024-01-01T00:00:00Z".to_string());

    // Content authored by two tools that disagree on field names
    let content = ContentData {
        categories: Some(vec![
            CategoryNode {
                pages: Some(vec![PageNode::new("/about"), PageNode::new("/admin/users")]),
                ..CategoryNode::default()
            },
            CategoryNode {
                sections: Some(vec![CategoryNode {
                    entries: Some(vec![dated, draft]),
                    ..CategoryNode::default()
                }]),
                ..CategoryNode::default()
            },
        ]),
    };

    let site = Site::new(config).with_content(content);
    let sitemap = site.sitemap();

    println!("Found {} pages, {} indexable", site.content().pages().len(), sitemap.len());
    print!("{}", sitemap.to_xml());
}
