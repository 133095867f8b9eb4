//! Target lists for the create job
//!
//! A target is one domain (or full URL) that should get an uptime monitor.

use crate::api::Monitor;
use crate::config::MonitorDefaults;
use crate::utils::error::{MonitorError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Domains monitored when no target file is given
pub const DEFAULT_TARGETS: &[&str] = &[
    "facebook.com/", "twitter.com/", "google.com/", "youtube.com/", "instagram.com/",
    "linkedin.com/", "wordpress.org/", "pinterest.com/", "wikipedia.org/", "wordpress.com/",
    "blogspot.com/", "apple.com/", "adobe.com/", "tumblr.com/", "youtu.be/", "amazon.com/",
    "goo.gl/", "vimeo.com/", "flickr.com/", "microsoft.com/", "yahoo.com/", "godaddy.com/",
    "qq.com/", "bit.ly/", "vk.com/", "reddit.com/", "w3.org/", "baidu.com/", "nytimes.com/",
    "t.co/", "europa.eu/", "buydomains.com/", "wp.com/", "statcounter.com/",
    "miitbeian.gov.cn/", "jimdo.com/", "blogger.com/", "github.com/", "weebly.com/",
    "soundcloud.com/", "mozilla.org/", "bbc.co.uk/", "yandex.ru/", "myspace.com/",
    "google.de/", "addthis.com/", "nih.gov/", "theguardian.com/", "google.co.jp/", "cnn.com/",
    "stumbleupon.com/", "gravatar.com/", "digg.com/", "addtoany.com/", "creativecommons.org/",
    "paypal.com/", "yelp.com/", "imdb.com/", "huffingtonpost.com/", "feedburner.com/",
    "issuu.com/", "wixsite.com/", "wix.com/", "dropbox.com/", "forbes.com/",
    "miibeian.gov.cn/", "amazonaws.com/", "google.co.uk/", "washingtonpost.com/",
    "bluehost.com/", "etsy.com/", "go.com/", "msn.com/", "wsj.com/", "ameblo.jp/",
    "archive.org/", "slideshare.net/", "e-recht24.de/", "weibo.com/", "fc2.com/",
    "eventbrite.com/", "parallels.com/", "doubleclick.net/", "mail.ru/", "sourceforge.net/",
    "amazon.co.uk/", "telegraph.co.uk/", "ebay.com/", "amzn.to/", "livejournal.com/", "51.la/",
    "free.fr/", "yahoo.co.jp/", "dailymail.co.uk/", "reuters.com/", "taobao.com/",
    "wikimedia.org/", "amazon.de/", "typepad.com/", "hatena.ne.jp/", "bloomberg.com/",
    "elegantthemes.com/", "eepurl.com/", "usatoday.com/", "about.com/", "medium.com/",
    "macromedia.com/", "xing.com/", "bing.com/", "time.com/", "www.gov.uk/", "google.it/",
    "cdc.gov/", "tripadvisor.com/", "cpanel.net/", "amazon.co.jp/", "npr.org/", "harvard.edu/",
    "bbb.org/", "aol.com/", "constantcontact.com/", "latimes.com/", "icio.us/",
    "list-manage.com/", "webs.com/", "opera.com/", "beian.gov.cn/", "vkontakte.ru/",
    "blogspot.co.uk/", "live.com/", "bandcamp.com/", "apache.org/", "bbc.com/",
    "businessinsider.com/", "dailymotion.com/", "cpanel.com/", "disqus.com/", "behance.net/",
    "mit.edu/", "rambler.ru/", "gnu.org/", "sina.com.cn/", "spotify.com/", "joomla.org/",
    "google.es/", "line.me/", "wired.com/", "github.io/", "stanford.edu/",
];

/// Ordered list of targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetList {
    entries: Vec<String>,
}

impl TargetList {
    /// The built-in list of popular domains
    pub fn builtin() -> Self {
        Self {
            entries: DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Parse one target per line; blank lines and `#` comments are skipped
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        Self { entries }
    }

    /// Read a target file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            MonitorError::config(format!("Failed to read target file {:?}: {}", path, e))
        })?;

        let list = Self::parse(&content);
        info!("Loaded {} targets from {:?}", list.len(), path);
        Ok(list)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the monitor to register for each target
    pub fn to_monitors(&self, defaults: &MonitorDefaults) -> Vec<Monitor> {
        let monitors: Vec<Monitor> = self
            .entries
            .iter()
            .map(|entry| monitor_for_target(entry, defaults))
            .collect();
        debug!("Prepared {} monitors", monitors.len());
        monitors
    }
}

impl FromIterator<String> for TargetList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// URL a target is monitored at.
///
/// Entries with an explicit scheme are used verbatim. A `www.` entry does not
/// get a second `www.` from the prefix.
pub fn target_url(entry: &str, prefix: &str) -> String {
    if entry.starts_with("http://") || entry.starts_with("https://") {
        return entry.to_string();
    }

    match entry.strip_prefix("www.") {
        Some(rest) if prefix.ends_with("www.") => format!("{}{}", prefix, rest),
        _ => format!("{}{}", prefix, entry),
    }
}

/// New active monitor for one target, named after the entry
pub fn monitor_for_target(entry: &str, defaults: &MonitorDefaults) -> Monitor {
    Monitor::new(entry, target_url(entry, &defaults.url_prefix))
        .with_method(defaults.method.clone())
        .with_frequency(defaults.frequency)
        .with_locations(defaults.locations.clone())
}
