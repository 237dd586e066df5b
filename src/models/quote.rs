use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::category::Category;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuoteRequest {
    pub category: Category,
    pub style: String,
    pub width_cm: f64,
    pub height_cm: f64,
    pub quantity: u32,
    pub extras: BTreeSet<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuoteResult {
    pub area_sq_m: f64,
    pub quantity: u32,
    pub subtotal: f64,
    pub total: f64,
}
