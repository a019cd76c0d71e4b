use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{AnswerMap, ProvidersByCategory};

/// Request to rank the providers of one category
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankProvidersRequest {
    #[validate(length(min = 1, max = 64))]
    pub category: String,
    #[serde(default)]
    pub answers: AnswerMap,
    /// Catalog to rank from; the server's configured catalog when omitted
    #[serde(alias = "providers_by_category", rename = "providersByCategory", default)]
    pub providers_by_category: Option<ProvidersByCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_request() {
        let req: RankProvidersRequest = serde_json::from_str(r#"{"category":"real-estate"}"#).unwrap();
        assert!(req.answers.is_empty());
        assert!(req.providers_by_category.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_category_rejected() {
        let req: RankProvidersRequest = serde_json::from_str(r#"{"category":""}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
