//! Reachability checks for the URLs the configuration publishes.

use super::diagnostics::Diagnostics;
use crate::domain::SiteConfig;
use crate::ports::{LinkProbe, LinkStatus};

pub fn link_checks(config: &SiteConfig, probe: &dyn LinkProbe, diagnostics: &mut Diagnostics) {
    let meta = &config.site_metadata;
    let mut targets = vec![("siteMetadata.siteUrl".to_string(), &meta.site_url)];
    for (index, link) in meta.social.iter().enumerate() {
        targets.push((format!("siteMetadata.social[{index}].url"), &link.url));
    }

    for (subject, url) in targets {
        if let LinkStatus::Unreachable(reason) = probe.probe(url) {
            diagnostics.push_warning(subject, format!("{url} is unreachable: {reason}"));
        }
    }
}
