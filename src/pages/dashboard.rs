//! Dashboard Page
//!
//! Headline indicators over time: unemployment, occupied population,
//! average income and income mass.

use async_trait::async_trait;

use super::{Page, PageData};
use crate::api::{ApiResult, IbgeApi};
use crate::charts::Registerable;

const CHARTS: &[Registerable] = &[
    Registerable::LineController,
    Registerable::BarController,
    Registerable::LineElement,
    Registerable::BarElement,
    Registerable::PointElement,
    Registerable::CategoryScale,
    Registerable::LinearScale,
    Registerable::Filler,
    Registerable::Legend,
    Registerable::Tooltip,
];

#[derive(Debug, Default)]
pub struct DashboardPage;

#[async_trait]
impl Page for DashboardPage {
    fn name(&self) -> &'static str {
        "Dashboard"
    }

    fn title(&self) -> &'static str {
        "Indicadores"
    }

    fn required_charts(&self) -> &'static [Registerable] {
        CHARTS
    }

    async fn load(&self, api: &IbgeApi) -> ApiResult<PageData> {
        let (unemployment, occupied, income, informality) = tokio::try_join!(
            api.unemployment(),
            api.occupied(),
            api.income(),
            api.informality(),
        )?;

        Ok(PageData::from([
            ("unemployment".to_string(), unemployment),
            ("occupied".to_string(), occupied),
            ("income".to_string(), income),
            ("informality".to_string(), informality),
        ]))
    }
}
