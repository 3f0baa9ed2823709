use crate::phone::number::{is_mobile_number_valid, normalize_phone_number};
use crate::stats::{record_lookup_miss, LookupTable};

/// A mobile operator. `icon_ref` is an opaque asset identifier for the icon layer.
#[derive(Debug, PartialEq, Eq)]
pub struct OperatorRecord {
    pub name: &'static str,
    pub number_codes: &'static [&'static str],
    pub icon_ref: &'static str,
}

// Scanned in order and the first record with a matching code wins, so a record
// must never carry a code that is a prefix of a code in a later record.
pub static OPERATORS: &[OperatorRecord] = &[
    OperatorRecord {
        name: "آپتل",
        number_codes: &["099910", "099911", "099913", "099914"],
        icon_ref: "aptel",
    },
    OperatorRecord {
        name: "سامانتل",
        number_codes: &["099999", "09999"],
        icon_ref: "samantel",
    },
    OperatorRecord {
        name: "لوتوس تل",
        number_codes: &["09990"],
        icon_ref: "lotustel",
    },
    OperatorRecord {
        name: "آرین تل",
        number_codes: &["09998"],
        icon_ref: "ariantel",
    },
    OperatorRecord {
        name: "شاتل موبایل",
        number_codes: &["09981"],
        icon_ref: "shatel",
    },
    OperatorRecord {
        name: "همراه اول",
        number_codes: &[
            "0910", "0911", "0912", "0913", "0914", "0915", "0916", "0917", "0918", "0919",
            "0990", "0991", "0992", "0993", "0994",
        ],
        icon_ref: "mci",
    },
    OperatorRecord {
        name: "ایرانسل",
        number_codes: &[
            "0900", "0901", "0902", "0903", "0904", "0905", "0930", "0933", "0935", "0936",
            "0937", "0938", "0939", "0941", "0934769",
        ],
        icon_ref: "mtn",
    },
    OperatorRecord {
        name: "رایتل",
        number_codes: &["0920", "0921", "0922"],
        icon_ref: "rightel",
    },
    OperatorRecord {
        name: "اسپادان",
        number_codes: &["0931"],
        icon_ref: "espadan",
    },
    OperatorRecord {
        name: "تالیا",
        number_codes: &["0932"],
        icon_ref: "taliya",
    },
    OperatorRecord {
        name: "مخابرات کیش",
        number_codes: &["0934"],
        icon_ref: "tkc",
    },
];

/// The operator of a valid mobile number: the first record in [`OPERATORS`]
/// with a code that prefixes the normalized number.
pub fn find_mobile_operator(number: &str) -> Option<&'static OperatorRecord> {
    if !is_mobile_number_valid(number) {
        return None;
    }
    let number = normalize_phone_number(number);
    let operator = OPERATORS.iter().find(|operator| {
        operator
            .number_codes
            .iter()
            .any(|code| number.starts_with(code))
    });
    if operator.is_none() {
        record_lookup_miss(LookupTable::Operator);
    }
    operator
}

pub fn get_mobile_operator(number: &str) -> Option<&'static str> {
    find_mobile_operator(number).map(|operator| operator.name)
}
