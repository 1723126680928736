//! RSS document -> episodes.
//!
//! Reads every `<item>` (any depth) in document order and takes the first direct
//! `<title>` and `<link>` children. Text and CDATA are both accepted.

use crate::domain::{DomainError, Episode};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Link,
}

#[derive(Debug, Default)]
struct PendingItem {
    /// Element depth below `<item>`; direct children sit at 1.
    depth: usize,
    field: Option<Field>,
    title: Option<String>,
    link: Option<String>,
    title_done: bool,
    link_done: bool,
}

impl PendingItem {
    fn open(&mut self, name: &[u8]) {
        self.depth += 1;
        if self.depth != 1 {
            return;
        }
        self.field = match name {
            b"title" if !self.title_done => Some(Field::Title),
            b"link" if !self.link_done => Some(Field::Link),
            _ => None,
        };
    }

    fn close(&mut self) {
        if self.depth == 1 {
            match self.field.take() {
                Some(Field::Title) => self.title_done = true,
                Some(Field::Link) => self.link_done = true,
                None => {}
            }
        }
        self.depth = self.depth.saturating_sub(1);
    }

    fn push_text(&mut self, text: &str) {
        if self.depth != 1 {
            return;
        }
        let slot = match self.field {
            Some(Field::Title) => &mut self.title,
            Some(Field::Link) => &mut self.link,
            None => return,
        };
        slot.get_or_insert_with(String::new).push_str(text);
    }

    fn finish(self) -> Episode {
        Episode::from_parts(self.title.as_deref(), self.link.as_deref())
    }
}

/// Parse an RSS document. Malformed XML is a feed error.
pub fn parse_rss(xml: &str) -> Result<Vec<Episode>, DomainError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut episodes = Vec::new();
    let mut item: Option<PendingItem> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            DomainError::Feed(format!(
                "XML parse error at byte {}: {}",
                reader.buffer_position(),
                e
            ))
        })?;
        match event {
            Event::Start(e) => {
                if let Some(pending) = item.as_mut() {
                    pending.open(e.name().as_ref());
                } else if e.name().as_ref() == b"item" {
                    item = Some(PendingItem::default());
                }
            }
            Event::Empty(e) => {
                if item.is_none() && e.name().as_ref() == b"item" {
                    episodes.push(Episode::from_parts(None, None));
                }
            }
            Event::Text(t) => {
                if let Some(pending) = item.as_mut() {
                    let text = t
                        .unescape()
                        .map_err(|e| DomainError::Feed(format!("bad text in item: {}", e)))?;
                    pending.push_text(&text);
                }
            }
            Event::CData(c) => {
                if let Some(pending) = item.as_mut() {
                    let raw = c.into_inner();
                    pending.push_text(&String::from_utf8_lossy(&raw));
                }
            }
            Event::End(_) => {
                let closes_item = matches!(item.as_ref(), Some(p) if p.depth == 0);
                if closes_item {
                    if let Some(done) = item.take() {
                        episodes.push(done.finish());
                    }
                } else if let Some(pending) = item.as_mut() {
                    pending.close();
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(items = episodes.len(), "parsed feed items");
    Ok(episodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_in_order() {
        let xml = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
  <title>Podcast</title>
  <link>http://show</link>
  <item><title>Ep. 1: Plato on Justice</title><link>http://x/1</link></item>
  <item><title><![CDATA[Hegel's Logic]]></title><link>http://x/2</link></item>
</channel></rss>"#;
        let episodes = parse_rss(xml).unwrap();
        assert_eq!(
            episodes,
            vec![
                Episode {
                    title: "Ep. 1: Plato on Justice".into(),
                    link: "http://x/1".into()
                },
                Episode {
                    title: "Hegel's Logic".into(),
                    link: "http://x/2".into()
                },
            ]
        );
    }

    #[test]
    fn test_missing_fields_use_sentinels() {
        let xml = "<rss><channel><item><link>http://x/1</link></item><item><title>Only title</title></item><item/></channel></rss>";
        let episodes = parse_rss(xml).unwrap();
        assert_eq!(episodes.len(), 3);
        assert_eq!(episodes[0].title, "No Title");
        assert_eq!(episodes[0].link, "http://x/1");
        assert_eq!(episodes[1].title, "Only title");
        assert_eq!(episodes[1].link, "#");
        assert_eq!(episodes[2], Episode::from_parts(None, None));
    }

    #[test]
    fn test_entities_unescaped() {
        let xml = "<rss><item><title>Adorno &amp; Horkheimer</title><link>http://x/?a=1&amp;b=2</link></item></rss>";
        let episodes = parse_rss(xml).unwrap();
        assert_eq!(episodes[0].title, "Adorno & Horkheimer");
        assert_eq!(episodes[0].link, "http://x/?a=1&b=2");
    }

    #[test]
    fn test_nested_titles_ignored() {
        let xml = "<rss><item><media:group><title>Nested</title></media:group><itunes:title>Other</itunes:title><title>Real</title></item></rss>";
        let episodes = parse_rss(xml).unwrap();
        assert_eq!(episodes[0].title, "Real");
    }

    #[test]
    fn test_malformed_xml_is_feed_error() {
        let xml = "<rss><item><title>Broken</titl></item></rss>";
        let err = parse_rss(xml).unwrap_err();
        assert!(matches!(err, DomainError::Feed(_)));
    }

    #[test]
    fn test_no_items() {
        let episodes = parse_rss("<rss><channel><title>Empty</title></channel></rss>").unwrap();
        assert!(episodes.is_empty());
    }
}
