//! Publishing a curated edition: page meta tags, the RSS feed and a
//! ready-to-post social message.
//!
//! Every output is a local file rewritten after curation. Failures are
//! reported per channel by [`publish`] and never undo the edition itself.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use regex::{Captures, NoExpand, Regex};

use super::Curation;
use crate::error::{MuseError, MuseResult};
use crate::types::{Category, Item};
use crate::view::CONTEXT_FALLBACK;

/// Public address of the deployed page
pub const DEFAULT_SITE_URL: &str = "https://linsonlukose-bit.github.io/DailyMuse";

const SITE_NAME: &str = "Daily Muse";
const RSS_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// One kind of publishing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Open Graph and Twitter meta tags of the page
    Seo,
    Rss,
    Social,
}

impl Channel {
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Seo => "SEO",
            Channel::Rss => "RSS",
            Channel::Social => "Social",
        }
    }

    fn write(
        &self,
        path: &Path,
        announcement: &Announcement<'_>,
        now: DateTime<Utc>,
    ) -> MuseResult<()> {
        match self {
            Channel::Seo => {
                let replaced = update_seo(path, announcement)?;
                if replaced == 0 {
                    tracing::warn!(path = %path.display(), "No meta tags found to refresh");
                }
                Ok(())
            }
            Channel::Rss => update_rss(path, announcement, now),
            Channel::Social => write_social_copy(path, announcement),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where each output goes; unset paths are skipped
#[derive(Debug, Clone)]
pub struct PublishTargets {
    /// Page whose meta tags are refreshed in place
    pub html: Option<PathBuf>,
    /// Feed to prepend the day's entry to, created when missing
    pub rss: Option<PathBuf>,
    /// Text file overwritten with the social post
    pub social: Option<PathBuf>,
    pub site_url: String,
}

impl Default for PublishTargets {
    fn default() -> Self {
        Self {
            html: None,
            rss: None,
            social: None,
            site_url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl PublishTargets {
    pub fn is_empty(&self) -> bool {
        self.html.is_none() && self.rss.is_none() && self.social.is_none()
    }

    fn channels(&self) -> impl Iterator<Item = (Channel, &PathBuf)> {
        [
            (Channel::Seo, self.html.as_ref()),
            (Channel::Rss, self.rss.as_ref()),
            (Channel::Social, self.social.as_ref()),
        ]
        .into_iter()
        .filter_map(|(channel, path)| path.map(|p| (channel, p)))
    }
}

/// Result of writing one channel
#[derive(Debug)]
pub struct PublishOutcome {
    pub channel: Channel,
    pub path: PathBuf,
    pub result: MuseResult<()>,
}

/// The day's edition as the outside world sees it: the lead item of each
/// category plus the mood and headline behind them.
#[derive(Debug, Clone)]
pub struct Announcement<'a> {
    pub date: NaiveDate,
    pub mood: String,
    pub headline: &'a str,
    pub movie: &'a Item,
    pub music: &'a Item,
    pub book: &'a Item,
    site_url: &'a str,
}

impl<'a> Announcement<'a> {
    /// Fails when a category has no lead item to feature.
    pub fn new(curation: &'a Curation, date: NaiveDate, site_url: &'a str) -> MuseResult<Self> {
        let lead = move |category: Category| {
            curation.edition.items(category).first().ok_or_else(|| {
                MuseError::InvalidEdition(format!("no {category} to feature"))
            })
        };
        Ok(Self {
            date,
            mood: curation.mood.to_string(),
            headline: &curation.headline,
            movie: lead(Category::Movies)?,
            music: lead(Category::Music)?,
            book: lead(Category::Books)?,
            site_url: site_url.trim_end_matches('/'),
        })
    }

    pub fn site_url(&self) -> &str {
        self.site_url
    }

    pub fn page_title(&self) -> String {
        format!("{SITE_NAME} | Daily Art Curation: {}", self.date.format("%Y-%m-%d"))
    }

    pub fn description(&self) -> String {
        format!(
            "Today's Mood: {}. Featuring {}, {}, and {}.",
            self.mood, self.movie.title, self.music.title, self.book.title
        )
    }

    /// Absolute URL of the lead movie's image, used as the preview card.
    pub fn image_url(&self) -> String {
        absolute_url(self.site_url, &self.movie.image)
    }

    fn guid(&self) -> String {
        format!("{}/{}", self.site_url, self.date.format("%Y-%m-%d"))
    }

    /// One `<item>` element for the feed.
    pub fn rss_item(&self, now: DateTime<Utc>) -> String {
        let movie_context = self.movie.daily_context.as_deref().unwrap_or(CONTEXT_FALLBACK);
        let body = format!(
            "<h3>Today's Mood: {mood}</h3>\n\
             <p>Inspired by: {headline}</p>\n\
             <hr/>\n\
             <p><strong>Cinema:</strong> {mt} ({ms})<br/>\n\
             <em>{context}</em></p>\n\
             <img src=\"{image}\" width=\"300\"/>\n\
             <hr/>\n\
             <p><strong>Music:</strong> {ut} ({us})</p>\n\
             <hr/>\n\
             <p><strong>Literature:</strong> {bt} ({bs})</p>\n\
             <p><a href=\"{site}\">Visit {SITE_NAME} for the full experience.</a></p>",
            mood = self.mood,
            headline = self.headline,
            mt = self.movie.title,
            ms = self.movie.subtitle,
            context = movie_context,
            image = self.image_url(),
            ut = self.music.title,
            us = self.music.subtitle,
            bt = self.book.title,
            bs = self.book.subtitle,
            site = self.site_url,
        );

        format!(
            "<item>\n  \
             <title>{title}</title>\n  \
             <link>{site}</link>\n  \
             <guid isPermaLink=\"false\">{guid}</guid>\n  \
             <pubDate>{date}</pubDate>\n  \
             <description><![CDATA[\n{body}\n]]></description>\n \
             </item>",
            title = escape_xml(&format!("Edition {}: {}", self.date.format("%Y-%m-%d"), self.mood)),
            site = escape_xml(self.site_url),
            guid = escape_xml(&self.guid()),
            date = now.format(RSS_DATE_FORMAT),
            body = body.replace("]]>", "]]]]><![CDATA[>"),
        )
    }

    /// Copy-paste posts for microblogs and forums.
    pub fn social_copy(&self) -> String {
        let musician = if self.music.subtitle.is_empty() {
            "Unknown"
        } else {
            self.music.subtitle.as_str()
        };
        format!(
            "--- SOCIAL SHARE FOR {date} ---\n\
             \n\
             [TWITTER / BLUESKY]\n\
             Today's Mood: {mood} \u{1F311}\n\
             \n\
             Featuring:\n\
             \u{1F3A5} {mt} ({ms})\n\
             \u{1F4BF} {ut}\n\
             \u{1F4D6} {bt}\n\
             \n\
             Curated by the {SITE_NAME} engine.\n\
             {site}\n\
             \n\
             [REDDIT - r/TrueFilm or r/ArtHistory]\n\
             Title: Daily Art Curation: {mt} and the theme of {mood}\n\
             Body:\n\
             Today's edition of {SITE_NAME} pairs {mt} with the music of {musician}.\n\
             The common thread is \"{mood}\" - responding to the headline: \"{headline}\".\n\
             Check it out here: {site}\n\
             \n\
             ---------------------------------\n",
            date = self.date.format("%b %d"),
            mood = self.mood,
            mt = self.movie.title,
            ms = self.movie.subtitle,
            ut = self.music.title,
            bt = self.book.title,
            site = self.site_url,
            headline = self.headline,
        )
    }
}

/// Refresh the `og:` and `twitter:` title, description and image meta tags
/// of the page at `path`. Returns how many tags were rewritten.
pub fn update_seo(path: &Path, announcement: &Announcement<'_>) -> MuseResult<usize> {
    let html = std::fs::read_to_string(path)?;
    let meta = Regex::new(
        r#"(<meta\s+(?:property|name)="(?:og|twitter):(title|description|image)"\s+content=")[^"]*""#,
    )?;

    let title = escape_xml(&announcement.page_title());
    let description = escape_xml(&announcement.description());
    let image = escape_xml(&announcement.image_url());

    let replaced = meta.find_iter(&html).count();
    let updated = meta.replace_all(&html, |caps: &Captures<'_>| {
        let value = match &caps[2] {
            "title" => &title,
            "description" => &description,
            _ => &image,
        };
        format!("{}{}\"", &caps[1], value)
    });

    std::fs::write(path, updated.as_bytes())?;
    tracing::info!(path = %path.display(), replaced, "Meta tags updated");
    Ok(replaced)
}

/// Put the day's entry at the top of the feed at `path`, creating the feed
/// when it does not exist. An entry already published for the same day is
/// replaced.
pub fn update_rss(
    path: &Path,
    announcement: &Announcement<'_>,
    now: DateTime<Utc>,
) -> MuseResult<()> {
    let stamp = now.format(RSS_DATE_FORMAT).to_string();
    let feed = match std::fs::read_to_string(path) {
        Ok(feed) => feed,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Creating feed");
            empty_feed(announcement.site_url(), &stamp)
        }
        Err(e) => return Err(e.into()),
    };

    let build_date = Regex::new(r"<lastBuildDate>[^<]*</lastBuildDate>")?;
    let feed = build_date
        .replace(&feed, NoExpand(&format!("<lastBuildDate>{stamp}</lastBuildDate>")))
        .into_owned();

    let guid = format!(">{}</guid>", escape_xml(&announcement.guid()));
    let feed = drop_items_containing(&feed, &guid);

    let item = announcement.rss_item(now);
    let updated = if let Some(at) = feed.find("<item>") {
        format!("{}{}\n {}", &feed[..at], item, &feed[at..])
    } else if let Some(at) = feed.find("</channel>") {
        format!("{} {}\n{}", &feed[..at], item, &feed[at..])
    } else {
        return Err(MuseError::MalformedFeed(path.to_path_buf()));
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, updated)?;
    tracing::info!(path = %path.display(), "Feed updated");
    Ok(())
}

/// Overwrite `path` with the day's social post.
pub fn write_social_copy(path: &Path, announcement: &Announcement<'_>) -> MuseResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, announcement.social_copy())?;
    tracing::info!(path = %path.display(), "Social copy written");
    Ok(())
}

/// Write every configured output for `curation`.
///
/// A failing channel is logged as a warning and reported in its outcome;
/// the remaining channels still run.
pub fn publish(
    curation: &Curation,
    targets: &PublishTargets,
    now: DateTime<Utc>,
) -> Vec<PublishOutcome> {
    targets
        .channels()
        .map(|(channel, path)| {
            let result = Announcement::new(curation, now.date_naive(), &targets.site_url)
                .and_then(|announcement| channel.write(path, &announcement, now));
            if let Err(e) = &result {
                tracing::warn!(
                    %channel,
                    path = %path.display(),
                    "Publishing failed (non-critical): {}",
                    e
                );
            }
            PublishOutcome {
                channel,
                path: path.clone(),
                result,
            }
        })
        .collect()
}

fn empty_feed(site_url: &str, stamp: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
         <rss version=\"2.0\">\n\
         <channel>\n \
         <title>{SITE_NAME}</title>\n \
         <description>Daily curated art, music, and cinema.</description>\n \
         <link>{site}</link>\n \
         <lastBuildDate>{stamp}</lastBuildDate>\n \
         <pubDate>{stamp}</pubDate>\n\
         </channel>\n\
         </rss>\n",
        site = escape_xml(site_url),
    )
}

/// Remove every `<item>` element containing `needle`, along with the
/// whitespace in front of it.
fn drop_items_containing(feed: &str, needle: &str) -> String {
    const CLOSE: &str = "</item>";
    let mut kept = String::with_capacity(feed.len());
    let mut rest = feed;
    while let Some(start) = rest.find("<item>") {
        let Some(len) = rest[start..].find(CLOSE) else {
            break;
        };
        let end = start + len + CLOSE.len();
        if rest[start..end].contains(needle) {
            kept.push_str(rest[..start].trim_end());
        } else {
            kept.push_str(&rest[..end]);
        }
        rest = &rest[end..];
    }
    kept.push_str(rest);
    kept
}

fn absolute_url(site_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}/{}", site_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
