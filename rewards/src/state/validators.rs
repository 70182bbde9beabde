/// Parse the purchase amount typed into the form.
///
/// Accepts plain decimal numbers; the amount must be finite and above zero.
pub fn validate_purchase_amount(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Amount is required".to_string());
    }

    let amount = trimmed
        .parse::<f64>()
        .map_err(|_| format!("Invalid amount: {}", trimmed))?;

    if !amount.is_finite() {
        return Err(format!("Invalid amount: {}", trimmed));
    }
    if amount <= 0.0 {
        return Err("Amount must be greater than zero".to_string());
    }

    Ok(amount)
}

/// Whether `c` may be appended to the purchase input: digits and a single decimal point
pub fn accepts_purchase_char(current: &str, c: char) -> bool {
    match c {
        '0'..='9' => true,
        '.' => !current.contains('.'),
        _ => false,
    }
}
