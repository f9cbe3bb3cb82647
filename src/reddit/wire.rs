//! Minimal serde mapping of the Reddit search listing envelope.

use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct Listing {
    pub(crate) data: Option<ListingData>,
}

#[derive(Deserialize)]
pub(crate) struct ListingData {
    pub(crate) children: Option<Vec<Child>>,
}

#[derive(Deserialize)]
pub(crate) struct Child {
    pub(crate) data: Option<Submission>,
}

#[derive(Deserialize)]
pub(crate) struct Submission {
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) selftext: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
    /// Seconds since the epoch; Reddit reports this as a float.
    #[serde(default)]
    pub(crate) created_utc: Option<f64>,
}
