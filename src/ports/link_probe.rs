use url::Url;

/// Outcome of probing one published URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    Reachable,
    /// Carries a short reason (HTTP status or transport error).
    Unreachable(String),
}

/// Port for reachability probes of the URLs a configuration publishes.
///
/// An unreachable link is data, not a failure, so probing never errors.
pub trait LinkProbe {
    fn probe(&self, url: &Url) -> LinkStatus;
}
