pub const SQ_CM_PER_SQ_M: f64 = 10_000.0;

pub fn area_sq_m(width_cm: f64, height_cm: f64) -> f64 {
    (width_cm.max(0.0) * height_cm.max(0.0)) / SQ_CM_PER_SQ_M
}

pub fn line_total(unit_price: f64, area_sq_m: f64, quantity: u32) -> f64 {
    unit_price * area_sq_m * quantity as f64
}
