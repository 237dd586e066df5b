use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{
    models::{
        category::Category,
        quote::{QuoteRequest, QuoteResult},
    },
    utils::price::{area_sq_m, line_total},
};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PriceTable {
    #[serde(default)]
    pub shutters: HashMap<String, f64>,
    #[serde(default)]
    pub blinds: HashMap<String, f64>,
    #[serde(default)]
    pub extras: HashMap<String, f64>,
}

fn price_map(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries
        .iter()
        .map(|(name, price)| (name.to_string(), *price))
        .collect()
}

impl PriceTable {
    pub fn standard() -> Self {
        Self {
            shutters: price_map(&[
                ("plantation", 250.0),
                ("solid", 300.0),
                ("cafe", 220.0),
                ("tierOnTier", 280.0),
                ("fullHeight", 260.0),
            ]),
            blinds: price_map(&[
                ("venetian", 120.0),
                ("roller", 100.0),
                ("roman", 150.0),
                ("vertical", 130.0),
                ("wooden", 180.0),
            ]),
            extras: price_map(&[
                ("motorization", 150.0),
                ("specialShape", 100.0),
                ("installation", 50.0),
            ]),
        }
    }

    pub fn styles(&self, category: &Category) -> &HashMap<String, f64> {
        match category {
            Category::Shutters => &self.shutters,
            Category::Blinds => &self.blinds,
        }
    }

    pub fn unit_price(&self, category: &Category, style: &str) -> Option<f64> {
        self.styles(category).get(style).copied()
    }

    pub fn extra_fee(&self, extra: &str) -> Option<f64> {
        self.extras.get(extra).copied()
    }

    pub fn calculate(&self, request: &QuoteRequest) -> QuoteResult {
        let unit_price = self
            .unit_price(&request.category, &request.style)
            .unwrap_or(0.0);

        let area_sq_m = area_sq_m(request.width_cm, request.height_cm);
        let subtotal = line_total(unit_price, area_sq_m, request.quantity);

        let extras_total: f64 = request
            .extras
            .iter()
            .map(|extra| self.extra_fee(extra).unwrap_or(0.0))
            .sum();

        QuoteResult {
            area_sq_m,
            quantity: request.quantity,
            subtotal,
            total: subtotal + extras_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn request(category: Category, style: &str) -> QuoteRequest {
        QuoteRequest {
            category,
            style: style.to_string(),
            width_cm: 100.0,
            height_cm: 100.0,
            quantity: 1,
            extras: BTreeSet::new(),
        }
    }

    #[test]
    fn one_square_meter_of_any_listed_style_costs_its_unit_price() {
        let table = PriceTable::standard();

        for (category, styles) in [
            (Category::Shutters, table.shutters.clone()),
            (Category::Blinds, table.blinds.clone()),
        ] {
            for (style, unit_price) in &styles {
                let result = table.calculate(&request(category.clone(), style));
                assert_eq!(result.area_sq_m, 1.0);
                assert_eq!(result.total, *unit_price);
            }
        }
    }

    #[test]
    fn identical_requests_quote_identically() {
        let table = PriceTable::standard();
        let req = request(Category::Blinds, "roman");

        let first = table.calculate(&req);
        let second = table.calculate(&req);

        assert_eq!(first.area_sq_m, second.area_sq_m);
        assert_eq!(first.subtotal, second.subtotal);
        assert_eq!(first.total, second.total);
    }

    #[test]
    fn each_additional_window_adds_one_line_price() {
        let table = PriceTable::standard();

        let mut req = request(Category::Shutters, "solid");
        req.width_cm = 80.0;
        req.height_cm = 125.0;

        req.quantity = 2;
        let two = table.calculate(&req);
        req.quantity = 3;
        let three = table.calculate(&req);

        let line = 300.0 * two.area_sq_m;
        assert!((three.total - two.total - line).abs() < 1e-9);
    }

    #[test]
    fn unlisted_style_quotes_zero() {
        let table = PriceTable::standard();
        let result = table.calculate(&request(Category::Shutters, "nonexistent"));

        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn extras_are_flat_fees_independent_of_area_and_quantity() {
        let table = PriceTable::standard();

        let mut req = request(Category::Blinds, "venetian");
        let base = table.calculate(&req);
        req.extras.insert("motorization".to_string());
        assert!((table.calculate(&req).total - base.total - 150.0).abs() < 1e-9);

        req.width_cm = 240.0;
        req.height_cm = 180.0;
        req.quantity = 4;
        req.extras.clear();
        let base = table.calculate(&req);
        req.extras.insert("motorization".to_string());
        assert!((table.calculate(&req).total - base.total - 150.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_extras_cost_nothing() {
        let table = PriceTable::standard();

        let mut req = request(Category::Blinds, "roller");
        let base = table.calculate(&req);
        req.extras.insert("gilding".to_string());

        assert_eq!(table.calculate(&req).total, base.total);
    }

    #[test]
    fn two_plantation_shutters_with_installation() {
        let table = PriceTable::standard();

        let mut req = request(Category::Shutters, "plantation");
        req.width_cm = 120.0;
        req.height_cm = 150.0;
        req.quantity = 2;
        req.extras.insert("installation".to_string());

        let result = table.calculate(&req);

        assert!((result.area_sq_m - 1.8).abs() < 1e-12);
        assert!((result.subtotal - 900.0).abs() < 1e-9);
        assert!((result.total - 950.0).abs() < 1e-9);
    }

    #[test]
    fn zero_dimensions_leave_only_the_extras() {
        let table = PriceTable::standard();

        let mut req = request(Category::Shutters, "plantation");
        req.width_cm = 0.0;
        req.extras.insert("installation".to_string());
        req.extras.insert("specialShape".to_string());

        let result = table.calculate(&req);

        assert_eq!(result.area_sq_m, 0.0);
        assert_eq!(result.subtotal, 0.0);
        assert_eq!(result.total, 150.0);
    }
}
