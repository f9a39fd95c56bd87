use async_trait::async_trait;
use serde_json::json;

use business::domain::recommendation::errors::RecommendationError;
use business::domain::recommendation::model::RankingCandidate;
use business::domain::recommendation::services::RecommendationRankerService;
use business::domain::shared::value_objects::ProductId;

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str = r#"You are a product recommendation engine for an online storefront called ShopWave.
Your goal: given a shopper's browsing history and the store catalog, pick the catalog products they are most likely to want next.

Core principles:
- Recommend products related to what the shopper has been viewing
- Prefer variety over repeating the exact products already viewed
- Only use product ids that appear in the catalog
- Order results from most to least relevant

Return ONLY a valid JSON object, no additional text."#;

pub struct RecommendationRankerOpenAI {
    client: OpenAIClient,
}

impl RecommendationRankerOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_prompt(history: &[ProductId], catalog: &[RankingCandidate]) -> String {
        let catalog_list: String = catalog
            .iter()
            .map(|entry| format!("- [id:{}] {}", entry.product_id, entry.description))
            .collect::<Vec<_>>()
            .join("\n");

        let history_list: String = history
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"A shopper has recently viewed these products, most recent first:
{}

CATALOG:
{}

Pick the products from the catalog this shopper is most likely to want next, best match first.

Return a JSON object with this EXACT structure:
{{"productIds": ["product-id-from-catalog", ...]}}"#,
            history_list, catalog_list
        )
    }

    fn parse_response(content: &str) -> Result<Vec<ProductId>, RecommendationError> {
        // Remove markdown code blocks if present
        let mut json_text = content.trim().to_string();
        if json_text.starts_with("```json") {
            json_text = json_text
                .replace("```json", "")
                .replace("```", "")
                .trim()
                .to_string();
        } else if json_text.starts_with("```") {
            json_text = json_text.replace("```", "").trim().to_string();
        }

        let parsed: serde_json::Value = serde_json::from_str(&json_text)
            .map_err(|_| RecommendationError::MalformedResponse)?;

        // A missing productIds field counts as an empty recommendation list.
        let ids = parsed
            .get("productIds")
            .and_then(|ids| ids.as_array())
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| id.as_str())
                    .map(ProductId::new)
                    .collect()
            })
            .unwrap_or_default();

        Ok(ids)
    }
}

#[async_trait]
impl RecommendationRankerService for RecommendationRankerOpenAI {
    async fn rank(
        &self,
        history: &[ProductId],
        catalog: &[RankingCandidate],
    ) -> Result<Vec<ProductId>, RecommendationError> {
        if history.is_empty() {
            return Ok(vec![]);
        }

        let prompt = Self::build_prompt(history, catalog);

        let body = json!({
            "model": "gpt-4o-mini",
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
            "temperature": 0.3,
            "max_tokens": 500,
        });

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|_| RecommendationError::RankingFailed)?;

        if !response.status().is_success() {
            return Err(RecommendationError::RankingFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| RecommendationError::RankingFailed)?;

        let content = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .ok_or(RecommendationError::MalformedResponse)?;

        Self::parse_response(content)
    }
}
