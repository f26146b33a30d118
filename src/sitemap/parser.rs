//! XML sitemap parser
//!
//! Parses sitemap and sitemap-index documents into a structured tree.
//! The two known root shapes are classified once, at parse time:
//! - `<sitemapindex>` wrapping `<sitemap>` entries
//! - `<urlset>` wrapping `<url>` entries, optionally carrying the Google
//!   image extension (`<image:image>` with `<image:loc>` and `<image:title>`)
//!
//! Any other root, and any unparseable XML, is a malformed sitemap.

use crate::VitrineError;
use quick_xml::events::Event;
use quick_xml::Reader;

/// A parsed sitemap document, classified by its root shape
#[derive(Debug, Clone, PartialEq)]
pub enum SitemapDocument {
    /// A sitemap index listing locations of other sitemap documents
    Index(Vec<SitemapRef>),

    /// A urlset listing concrete page URLs with optional image metadata
    UrlSet(Vec<UrlEntry>),
}

/// One `<sitemap>` entry of a sitemap index
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapRef {
    /// Location of the referenced sitemap document
    pub location: String,

    /// Raw `<lastmod>` value, if present
    pub last_modified: Option<String>,
}

/// One `<url>` entry of a urlset
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    /// Location of the page
    pub location: String,

    /// Image extension block, if present
    pub image: Option<ImageRef>,
}

/// The image extension block of a url entry
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    /// Location of the image
    pub location: String,

    /// Title of the image
    pub title: String,
}

/// The text element currently being read
#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    None,
    Loc,
    LastMod,
    ImageLoc,
    ImageTitle,
}

/// The recognized root element of the document being parsed
#[derive(Debug, Clone, Copy, PartialEq)]
enum Root {
    Index,
    UrlSet,
}

/// Parses sitemap XML text into a [`SitemapDocument`]
///
/// # Arguments
///
/// * `xml` - The raw XML text
///
/// # Returns
///
/// * `Ok(SitemapDocument)` - One of the two known shapes
/// * `Err(VitrineError::MalformedSitemap)` - Unparseable XML or unknown root
pub fn parse_sitemap(xml: &str) -> Result<SitemapDocument, VitrineError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut root: Option<Root> = None;
    let mut refs: Vec<SitemapRef> = Vec::new();
    let mut urls: Vec<UrlEntry> = Vec::new();

    let mut field = Field::None;
    let mut in_entry = false;
    let mut in_image = false;

    let mut loc = String::new();
    let mut lastmod = String::new();
    let mut image_loc = String::new();
    let mut image_title = String::new();
    let mut has_lastmod = false;
    let mut has_image = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"sitemapindex" if root.is_none() => root = Some(Root::Index),
                b"urlset" if root.is_none() => root = Some(Root::UrlSet),
                b"sitemap" if root == Some(Root::Index) => {
                    in_entry = true;
                }
                b"url" if root == Some(Root::UrlSet) => {
                    in_entry = true;
                }
                b"image:image" if in_entry => {
                    in_image = true;
                    has_image = true;
                }
                b"loc" if in_entry && !in_image => field = Field::Loc,
                b"lastmod" if in_entry => {
                    field = Field::LastMod;
                    has_lastmod = true;
                }
                b"image:loc" if in_image => field = Field::ImageLoc,
                b"image:title" if in_image => field = Field::ImageTitle,
                other => {
                    if root.is_none() {
                        return Err(VitrineError::MalformedSitemap(format!(
                            "unrecognized root element <{}>",
                            String::from_utf8_lossy(other)
                        )));
                    }
                }
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                // Self-closing entries carry no data but still count
                b"sitemap" if root == Some(Root::Index) => {
                    refs.push(SitemapRef {
                        location: String::new(),
                        last_modified: None,
                    });
                }
                b"url" if root == Some(Root::UrlSet) => {
                    urls.push(UrlEntry {
                        location: String::new(),
                        image: None,
                    });
                }
                b"image:image" if in_entry => has_image = true,
                _ => {}
            },
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| VitrineError::MalformedSitemap(e.to_string()))?;
                append_field(
                    field,
                    &text,
                    &mut loc,
                    &mut lastmod,
                    &mut image_loc,
                    &mut image_title,
                );
            }
            Ok(Event::CData(t)) => {
                let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                append_field(
                    field,
                    &text,
                    &mut loc,
                    &mut lastmod,
                    &mut image_loc,
                    &mut image_title,
                );
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"loc" | b"lastmod" | b"image:loc" | b"image:title" => field = Field::None,
                b"image:image" => in_image = false,
                b"sitemap" if root == Some(Root::Index) => {
                    refs.push(SitemapRef {
                        location: std::mem::take(&mut loc).trim().to_string(),
                        last_modified: if has_lastmod {
                            Some(std::mem::take(&mut lastmod).trim().to_string())
                        } else {
                            None
                        },
                    });
                    in_entry = false;
                    has_lastmod = false;
                }
                b"url" if root == Some(Root::UrlSet) => {
                    let image = if has_image {
                        Some(ImageRef {
                            location: std::mem::take(&mut image_loc).trim().to_string(),
                            title: std::mem::take(&mut image_title).trim().to_string(),
                        })
                    } else {
                        None
                    };
                    urls.push(UrlEntry {
                        location: std::mem::take(&mut loc).trim().to_string(),
                        image,
                    });
                    in_entry = false;
                    in_image = false;
                    has_image = false;
                    lastmod.clear();
                    has_lastmod = false;
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(VitrineError::MalformedSitemap(e.to_string())),
        }
    }

    match root {
        Some(Root::Index) => Ok(SitemapDocument::Index(refs)),
        Some(Root::UrlSet) => Ok(SitemapDocument::UrlSet(urls)),
        None => Err(VitrineError::MalformedSitemap(
            "document has no root element".to_string(),
        )),
    }
}

fn append_field(
    field: Field,
    text: &str,
    loc: &mut String,
    lastmod: &mut String,
    image_loc: &mut String,
    image_title: &mut String,
) {
    match field {
        Field::Loc => loc.push_str(text),
        Field::LastMod => lastmod.push_str(text),
        Field::ImageLoc => image_loc.push_str(text),
        Field::ImageTitle => image_title.push_str(text),
        Field::None => {}
    }
}
