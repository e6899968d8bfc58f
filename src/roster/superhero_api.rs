use log::debug;
use scraper::{Html, Selector};

use super::{CharacterSource, SuperheroRecord};
use crate::arena::ArenaError;
use crate::config::AppConfig;

const ID_CELL_SELECTOR: &str = "tbody tr td:first-child";

/// HTTP client for the superhero API.
///
/// Ids come from the public `ids.html` table; records from the token-scoped
/// JSON endpoint.
pub struct SuperheroApi {
    base_url: String,
    token: String,
    http_client: reqwest::Client,
}

impl SuperheroApi {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        SuperheroApi {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_url.clone(), config.api_token.clone())
    }
}

#[rocket::async_trait]
impl CharacterSource for SuperheroApi {
    async fn available_ids(&self) -> Result<Vec<String>, ArenaError> {
        let url = format!("{}/ids.html", self.base_url);
        debug!("Fetching character ids from {}", url);
        let html = self
            .http_client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_character_ids(&html)
    }

    async fn character(&self, id: &str) -> Result<SuperheroRecord, ArenaError> {
        debug!("Fetching character {}", id);
        let url = format!("{}/api.php/{}/{}", self.base_url, self.token, id);
        let record: SuperheroRecord = self
            .http_client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        if record.is_error() {
            return Err(ArenaError::Upstream {
                id: id.to_string(),
                message: record.error.unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        Ok(record)
    }
}

/// Text of the first cell of every table body row, skipping empty cells.
pub fn parse_character_ids(html: &str) -> Result<Vec<String>, ArenaError> {
    let selector =
        Selector::parse(ID_CELL_SELECTOR).map_err(|e| ArenaError::Scrape(format!("{:?}", e)))?;
    let document = Html::parse_document(html);
    Ok(document
        .select(&selector)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .filter(|id| !id.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_column_of_table_body() {
        let html = r#"
            <html><body><table>
              <thead><tr><td>ID</td><td>Name</td></tr></thead>
              <tbody>
                <tr><td>1</td><td>A-Bomb</td></tr>
                <tr><td> 2 </td><td>Abe Sapien</td></tr>
                <tr><td></td><td>Nobody</td></tr>
                <tr><td>70</td><td>Batman</td></tr>
              </tbody>
            </table></body></html>"#;
        let ids = parse_character_ids(html).unwrap();
        assert_eq!(ids, vec!["1", "2", "70"]);
    }

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let api = SuperheroApi::new("https://example.test/", "token");
        assert_eq!(api.base_url, "https://example.test");
    }
}
