use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    models::{
        category::{Category, CategoryError},
        price_table::PriceTable,
        quote::{QuoteRequest, QuoteResult},
    },
    utils::currency::format_gbp,
};

pub const QUOTE_NOTE: &str = "This is an estimate only. Final price will be confirmed after our free consultation and measurement service.";

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Rejected quote form: {0}")]
    UnknownCategory(#[from] CategoryError),
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct QuoteForm {
    #[serde(rename = "type")]
    pub category: String,
    pub style: String,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub extras: Vec<String>,
}

impl QuoteForm {
    pub fn into_request(self) -> Result<QuoteRequest, QuoteError> {
        let category = self.category.parse::<Category>()?;

        Ok(QuoteRequest {
            category,
            style: self.style,
            width_cm: parse_dimension(self.width.as_deref()),
            height_cm: parse_dimension(self.height.as_deref()),
            quantity: parse_quantity(self.quantity.as_deref()),
            extras: self.extras.into_iter().collect(),
        })
    }
}

fn parse_dimension(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0)
}

fn parse_quantity(value: Option<&str>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|q| *q >= 1)
        .unwrap_or(1)
}

pub fn handle_quote(form: QuoteForm, table: &PriceTable) -> Result<QuoteResult, QuoteError> {
    let request = form.into_request()?;

    if table
        .unit_price(&request.category, &request.style)
        .is_none()
    {
        warn!(
            "No unit price listed for {} style {:?}. Quoting it at zero.",
            request.category, request.style
        );
    }

    let result = table.calculate(&request);

    info!(
        "Quoted {} {} at {} for {:.2} sq m x {}",
        request.category,
        request.style,
        format_gbp(result.total),
        result.area_sq_m,
        result.quantity
    );

    Ok(result)
}

pub fn render_summary(result: &QuoteResult) -> String {
    let windows = if result.quantity == 1 {
        "window"
    } else {
        "windows"
    };

    format!(
        "Estimated Quote\nArea: {:.2} m²\nQuantity: {} {windows}\nTotal Estimate: {}\n\n{QUOTE_NOTE}",
        result.area_sq_m,
        result.quantity,
        format_gbp(result.total),
    )
}
