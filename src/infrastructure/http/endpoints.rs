// SPDX-License-Identifier: MPL-2.0
//! Collaborator endpoint addresses derived from the configured base address.

use crate::error::{Error, Result};
use url::Url;

const ANALYTICS_PATH: &str = "api/analytics";
const CONTACT_PATH: &str = "api/contact";

/// Absolute URLs of the two backend collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    analytics: Url,
    contact: Url,
}

impl Endpoints {
    /// Builds both endpoints below `base`.
    ///
    /// The base may carry a path prefix (`https://host/portfolio`) and may or
    /// may not end with a slash. Only `http` and `https` are accepted.
    pub fn new(base: &str) -> Result<Self> {
        let mut base = Url::parse(base.trim())?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported backend scheme: {}",
                base.scheme()
            )));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            analytics: base.join(ANALYTICS_PATH)?,
            contact: base.join(CONTACT_PATH)?,
        })
    }

    #[must_use]
    pub fn analytics(&self) -> &Url {
        &self.analytics
    }

    #[must_use]
    pub fn contact(&self) -> &Url {
        &self.contact
    }
}
