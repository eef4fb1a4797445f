//! Analysis Page
//!
//! One indicator broken down by sex, race, age, education and region.

use async_trait::async_trait;

use super::{Page, PageData};
use crate::api::{ApiResult, IbgeApi, DEFAULT_INDICATOR};
use crate::charts::Registerable;

const CHARTS: &[Registerable] = &[
    Registerable::BarController,
    Registerable::BarElement,
    Registerable::LineController,
    Registerable::LineElement,
    Registerable::PointElement,
    Registerable::DoughnutController,
    Registerable::ArcElement,
    Registerable::CategoryScale,
    Registerable::LinearScale,
    Registerable::Legend,
    Registerable::Tooltip,
];

#[derive(Debug)]
pub struct AnalisePage {
    indicator: String,
}

impl AnalisePage {
    pub fn new(indicator: impl Into<String>) -> Self {
        Self {
            indicator: indicator.into(),
        }
    }

    pub fn indicator(&self) -> &str {
        &self.indicator
    }
}

impl Default for AnalisePage {
    fn default() -> Self {
        Self::new(DEFAULT_INDICATOR)
    }
}

#[async_trait]
impl Page for AnalisePage {
    fn name(&self) -> &'static str {
        "Analise"
    }

    fn title(&self) -> &'static str {
        "Análise por Dimensão"
    }

    fn required_charts(&self) -> &'static [Registerable] {
        CHARTS
    }

    async fn load(&self, api: &IbgeApi) -> ApiResult<PageData> {
        let indicator = Some(self.indicator.as_str());

        // Age is only published for unemployment
        let (sex, race, age, education, region) = tokio::try_join!(
            api.analysis_by_sex(indicator),
            api.analysis_by_race(indicator),
            api.analysis_by_age(),
            api.analysis_by_education(indicator),
            api.analysis_by_region(indicator),
        )?;

        Ok(PageData::from([
            ("sex".to_string(), sex),
            ("race".to_string(), race),
            ("age".to_string(), age),
            ("education".to_string(), education),
            ("region".to_string(), region),
        ]))
    }
}
