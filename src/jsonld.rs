//! schema.org JSON-LD builders.
//!
//! Each builder starts from the fixed part of a schema and merges optional
//! fragments only when their source value is present and non-empty.

use crate::config::{AuthorInfo, SiteConfig};
use crate::error::ConfigError;
use serde_json::{Map, Value, json};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Incrementally assembled JSON-LD object
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Map<String, Value>,
}

impl SchemaBuilder {
    /// Top-level schema with `@context` and `@type`
    pub fn root(schema_type: &str) -> Self {
        Self::default()
            .field("@context", SCHEMA_CONTEXT)
            .field("@type", schema_type)
    }

    /// Nested schema with only `@type`
    pub fn nested(schema_type: &str) -> Self {
        Self::default().field("@type", schema_type)
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Set `key` only when `value` is present
    pub fn optional(self, key: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    /// Set `key` only when `value` is present and non-empty
    pub fn optional_str(self, key: &str, value: Option<&str>) -> Self {
        self.optional(key, value.filter(|v| !v.is_empty()))
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

/// One or several article authors
#[derive(Debug, Clone)]
pub enum Authors {
    One(AuthorInfo),
    Many(Vec<AuthorInfo>),
}

#[derive(Debug, Clone)]
pub struct ArticleArgs {
    pub headline: String,
    pub date_published: String,
    pub date_modified: Option<String>,
    pub author: Authors,
    pub image: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProductArgs {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub currency: String,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub image: Option<String>,
    pub brand: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Crumb {
    pub name: String,
    /// Absolute URL or a path relative to the site URL
    pub url: String,
}

/// `Person` schema; a bare Twitter handle becomes a profile URL in `sameAs`
pub fn person(author: &AuthorInfo) -> Value {
    let mut same_as = author.same_as.clone();
    if let Some(twitter) = author.twitter.as_deref() {
        if !twitter.starts_with("http") {
            same_as.push(format!("https://twitter.com/{}", twitter.replacen('@', "", 1)));
        }
    }

    SchemaBuilder::nested("Person")
        .field("name", author.name.as_str())
        .optional_str("url", author.url.as_deref())
        .optional_str("email", author.email.as_deref())
        .optional_str("image", author.image.as_deref())
        .optional_str("description", author.bio.as_deref())
        .optional_str("jobTitle", author.job_title.as_deref())
        .optional("sameAs", Some(same_as).filter(|s| !s.is_empty()))
        .build()
}

/// `Article` schema; `dateModified` defaults to `datePublished`
pub fn article(config: &SiteConfig, args: &ArticleArgs) -> Result<Value, ConfigError> {
    let author = match &args.author {
        Authors::One(a) => person(a),
        Authors::Many(all) => Value::Array(all.iter().map(person).collect()),
    };

    let date_modified = args
        .date_modified
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(args.date_published.as_str());

    let logo = SchemaBuilder::nested("ImageObject")
        .field("url", resolve_site_url(config, &config.logo)?)
        .build();
    let publisher = SchemaBuilder::nested("Organization")
        .field("name", config.creator.as_str())
        .field("logo", logo)
        .build();

    let image = args
        .image
        .as_deref()
        .filter(|i| !i.is_empty())
        .map(|url| SchemaBuilder::nested("ImageObject").field("url", url).build());

    Ok(SchemaBuilder::root("Article")
        .field("headline", args.headline.as_str())
        .field("datePublished", args.date_published.as_str())
        .field("dateModified", date_modified)
        .field("author", author)
        .optional_str("description", args.description.as_deref())
        .field("publisher", publisher)
        .optional("image", image)
        .build())
}

/// `FAQPage` schema
pub fn faq(items: &[FaqItem]) -> Value {
    let entities: Vec<Value> = items
        .iter()
        .map(|item| {
            SchemaBuilder::nested("Question")
                .field("name", item.question.as_str())
                .field(
                    "acceptedAnswer",
                    json!({ "@type": "Answer", "text": item.answer }),
                )
                .build()
        })
        .collect();

    SchemaBuilder::root("FAQPage")
        .field("mainEntity", entities)
        .build()
}

/// `Product` schema; the rating block needs both a rating and a review count
pub fn product(args: &ProductArgs) -> Value {
    let brand = args
        .brand
        .as_deref()
        .filter(|b| !b.is_empty())
        .map(|name| json!({ "@type": "Brand", "name": name }));

    let rating = match (args.rating, args.review_count) {
        (Some(rating), Some(count)) if rating != 0.0 && count > 0 => Some(json!({
            "@type": "AggregateRating",
            "ratingValue": rating,
            "reviewCount": count,
        })),
        _ => None,
    };

    let offers = json!({
        "@type": "Offer",
        "price": format!("{:.2}", args.price),
        "priceCurrency": args.currency,
        "availability": "https://schema.org/InStock",
    });

    SchemaBuilder::root("Product")
        .field("name", args.name.as_str())
        .optional_str("description", args.description.as_deref())
        .optional_str("image", args.image.as_deref())
        .optional("brand", brand)
        .field("offers", offers)
        .optional("aggregateRating", rating)
        .build()
}

/// `BreadcrumbList` schema with 1-based positions
pub fn breadcrumb(config: &SiteConfig, crumbs: &[Crumb]) -> Result<Value, ConfigError> {
    let mut elements = Vec::with_capacity(crumbs.len());
    for (index, crumb) in crumbs.iter().enumerate() {
        elements.push(
            SchemaBuilder::nested("ListItem")
                .field("position", index + 1)
                .field("name", crumb.name.as_str())
                .field("item", resolve_site_url(config, &crumb.url)?)
                .build(),
        );
    }

    Ok(SchemaBuilder::root("BreadcrumbList")
        .field("itemListElement", elements)
        .build())
}

fn resolve_site_url(config: &SiteConfig, path: &str) -> Result<String, ConfigError> {
    let base = config.base_url()?;
    let resolved = base
        .join(path)
        .map_err(|e| ConfigError::InvalidUrl(path.to_string(), e))?;
    Ok(resolved.to_string())
}
