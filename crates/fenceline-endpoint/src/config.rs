use serde::Deserialize;

///
/// QueueConfig
///
/// Connection settings for an SQS-style queue endpoint, deserialized from
/// the host application's configuration. Transport implementations consume
/// these; `QueueConn` itself never reads them.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct QueueConfig {
    pub region: String,
    pub queue_id: String,
    pub queue_name: String,
    #[serde(default)]
    pub cred_path: Option<String>,
    #[serde(default)]
    pub cred_profile: Option<String>,
}

impl QueueConfig {
    /// Provider URL for this queue.
    #[must_use]
    pub fn queue_url(&self) -> String {
        format!(
            "https://sqs.{}.amazonaws.com/{}/{}",
            self.region, self.queue_id, self.queue_name
        )
    }

    /// Shared-credentials selection: a path with no profile falls back to
    /// the `default` profile; no path means provider-default credentials.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let path = self.cred_path.as_deref()?;
        Some((path, self.cred_profile.as_deref().unwrap_or("default")))
    }
}
