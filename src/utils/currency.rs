pub fn format_gbp(amount: f64) -> String {
    let pence = (amount * 100.0).round() as i64;
    let sign = if pence < 0 { "-" } else { "" };
    let pounds = (pence.abs() / 100).to_string();
    let rem = pence.abs() % 100;

    let mut grouped = String::with_capacity(pounds.len() + pounds.len() / 3);
    for (i, digit) in pounds.chars().enumerate() {
        if i > 0 && (pounds.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}£{grouped}.{rem:02}")
}
