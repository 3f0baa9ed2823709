use crate::text::digits::english_digits_to_persian;

const RIALS_PER_TOMAN: u64 = 10;
const TOMAN: &str = "تومان";
const RIAL: &str = "ریال";
const CONJUNCTION: &str = " و ";

// (value of one unit, scale word), most significant first
const PRICE_GROUPS: [(u64, &str); 3] = [
    (1_000_000_000, "میلیارد"),
    (1_000_000, "میلیون"),
    (1_000, "هزار"),
];

/// A Rial amount as a Toman price, `12345678` is `"۱ میلیون و ۲۳۴ هزار و ۵۶۷ تومان و ۸ ریال"`.
///
/// Groups keep their digits instead of being spelled out.
pub fn number_to_price(rials: u64) -> String {
    let tomans = rials / RIALS_PER_TOMAN;
    let remainder_rials = rials % RIALS_PER_TOMAN;

    let mut groups = Vec::with_capacity(PRICE_GROUPS.len() + 1);
    let mut remaining = tomans;
    for (unit, scale) in PRICE_GROUPS {
        let value = remaining / unit;
        remaining %= unit;
        if value > 0 {
            groups.push(format!("{value} {scale}"));
        }
    }
    if remaining > 0 {
        groups.push(remaining.to_string());
    }

    let price = match (groups.is_empty(), remainder_rials) {
        (true, 0) => format!("0 {TOMAN}"),
        (true, rials) => format!("{rials} {RIAL}"),
        (false, 0) => format!("{} {TOMAN}", groups.join(CONJUNCTION)),
        (false, rials) => format!("{} {TOMAN}{CONJUNCTION}{rials} {RIAL}", groups.join(CONJUNCTION)),
    };
    english_digits_to_persian(&price)
}
