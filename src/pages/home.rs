//! Home Page
//!
//! Landing page with the headline unemployment figure.

use async_trait::async_trait;

use super::{Page, PageData};
use crate::api::{ApiResult, IbgeApi};
use crate::charts::Registerable;

#[derive(Debug, Default)]
pub struct HomePage;

#[async_trait]
impl Page for HomePage {
    fn name(&self) -> &'static str {
        "Home"
    }

    fn title(&self) -> &'static str {
        "Mercado de Trabalho no Brasil"
    }

    fn required_charts(&self) -> &'static [Registerable] {
        &[]
    }

    async fn load(&self, api: &IbgeApi) -> ApiResult<PageData> {
        let summary = api.unemployment_summary().await?;
        Ok(PageData::from([("unemployment_summary".to_string(), summary)]))
    }
}
