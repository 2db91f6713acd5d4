use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use voca_store::{StoreError, TableConnector};
use voca_types::VocabEntry;

/// Column header row written ahead of the data rows
const HEADER: [&str; 3] = ["headword", "meaning", "example"];

/// Google Sheets values-API connector.
///
/// The sheet is treated as one whole table: a read fetches every row of
/// the worksheet, a write clears the worksheet and uploads header plus
/// all data rows again. No partial-row addressing is used.
#[derive(Clone)]
pub struct SheetsClient {
    base_url: String,
    spreadsheet_id: String,
    worksheet: String,
    api_key: String,
    client: reqwest::Client,
}

impl SheetsClient {
    pub fn new(
        base_url: String,
        spreadsheet_id: String,
        worksheet: String,
        api_key: String,
    ) -> Self {
        Self {
            base_url,
            spreadsheet_id,
            worksheet,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn values_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, self.spreadsheet_id, self.worksheet
        )
    }

    async fn fetch_values(&self) -> Result<ValueRange, StoreError> {
        let response = self
            .client
            .get(self.values_url())
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Api(format!(
                "HTTP {} reading values",
                response.status()
            )));
        }

        response
            .json::<ValueRange>()
            .await
            .map_err(|e| StoreError::MalformedResponse(e.to_string()))
    }

    async fn clear_values(&self) -> Result<(), StoreError> {
        let response = self
            .client
            .post(format!("{}:clear", self.values_url()))
            .query(&[("key", self.api_key.as_str())])
            .json(&json!({}))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Api(format!(
                "HTTP {} clearing values",
                response.status()
            )));
        }

        Ok(())
    }

    async fn put_values(&self, values: Vec<Vec<String>>) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.values_url())
            .query(&[
                ("key", self.api_key.as_str()),
                ("valueInputOption", "RAW"),
            ])
            .json(&json!({ "values": values }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Api(format!(
                "HTTP {} writing values",
                response.status()
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl TableConnector for SheetsClient {
    async fn read_all(&self) -> Result<Vec<VocabEntry>, StoreError> {
        let range = self.fetch_values().await?;

        let mut rows = range.values;
        if rows.first().is_some_and(|row| is_header(row)) {
            rows.remove(0);
        }

        Ok(rows
            .into_iter()
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
            .map(entry_from_row)
            .collect())
    }

    async fn write_all(&self, entries: &[VocabEntry]) -> Result<(), StoreError> {
        let mut values = Vec::with_capacity(entries.len() + 1);
        values.push(HEADER.iter().map(|s| s.to_string()).collect());
        for entry in entries {
            values.push(vec![
                entry.headword.clone(),
                entry.meaning.clone(),
                entry.example.clone(),
            ]);
        }

        // A shrinking table would leave stale tail rows behind, so the
        // worksheet is cleared before the upload
        self.clear_values().await?;
        self.put_values(values).await
    }
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

fn is_header(row: &[String]) -> bool {
    row.len() >= HEADER.len()
        && HEADER
            .iter()
            .zip(row)
            .all(|(name, cell)| cell.trim().eq_ignore_ascii_case(name))
}

/// Rows shorter than three cells are padded with empty columns
fn entry_from_row(mut row: Vec<String>) -> VocabEntry {
    row.resize(HEADER.len(), String::new());
    let mut cells = row.into_iter();
    VocabEntry {
        headword: cells.next().unwrap_or_default(),
        meaning: cells.next().unwrap_or_default(),
        example: cells.next().unwrap_or_default(),
    }
}
