/// Render a bounty amount as whole dollars with thousands separators.
pub fn format_bounty(usd: f64) -> String {
    let usd = usd.abs(); // avoid negative zero display
    let whole = usd.round() as u64;
    let digits = whole.to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
