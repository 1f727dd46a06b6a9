use crate::domain::model::{Order, OrderSide};

/// Lowest sell / highest buy. Ties keep the first order encountered.
pub fn best_price(orders: &[Order], side: OrderSide) -> Option<f64> {
    let mut iter = orders.iter();
    let first = iter.next()?.price;
    Some(iter.fold(first, |best, order| match side {
        OrderSide::Sell if order.price < best => order.price,
        OrderSide::Buy if order.price > best => order.price,
        _ => best,
    }))
}

/// Best price for `side` multiplied by `quantity`, or `None` if there are no orders.
pub fn total_price(orders: &[Order], side: OrderSide, quantity: u32) -> Option<f64> {
    best_price(orders, side).map(|price| price * f64::from(quantity))
}

pub fn aggregate(orders: &[Order], side: OrderSide, quantity: u32) -> String {
    price_label(total_price(orders, side, quantity), side)
}

pub fn price_label(price: Option<f64>, side: OrderSide) -> String {
    match price {
        Some(value) => format_isk(value),
        None => side.no_orders_label().to_string(),
    }
}

/// Two fractional digits, `,` every three integer digits.
pub fn format_isk(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}
