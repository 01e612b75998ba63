use serde::{Deserialize, Deserializer, Serialize};

/// CDN distribution as reported by the invalidation collaborator.
///
/// Reads both the compact form (`domainName`, flat `aliases`) and the
/// CloudFront `DistributionSummary` shape (`DomainName`,
/// `Aliases.Items`); other CloudFront fields are ignored. A summary with
/// neither a usable alias nor a domain name has no display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSummary {
    #[serde(default, alias = "DomainName", skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(
        default,
        alias = "Aliases",
        deserialize_with = "deserialize_aliases",
        skip_serializing_if = "Option::is_none"
    )]
    pub aliases: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AliasList {
    Flat(Vec<String>),
    Wrapped {
        #[serde(rename = "Items", default)]
        items: Option<Vec<String>>,
    },
}

fn deserialize_aliases<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = Option::<AliasList>::deserialize(deserializer)?;
    Ok(list.and_then(|list| match list {
        AliasList::Flat(items) => Some(items),
        AliasList::Wrapped { items } => items,
    }))
}

impl DistributionSummary {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: Some(domain_name.into()),
            aliases: None,
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = Some(aliases.into_iter().map(Into::into).collect());
        self
    }

    /// First alias if any, otherwise the distribution's own domain.
    pub fn display_name(&self) -> Option<&str> {
        let alias = self
            .aliases
            .as_deref()
            .and_then(|aliases| aliases.first())
            .filter(|name| !name.is_empty());
        alias
            .or(self.domain_name.as_ref().filter(|name| !name.is_empty()))
            .map(String::as_str)
    }
}
