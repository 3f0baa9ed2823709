use crate::phone::number::{is_landline_number_valid, normalize_phone_number};
use crate::stats::{record_lookup_miss, LookupTable};
use lazy_static::lazy_static;
use std::collections::HashMap;

const AREA_CODE_LENGTH: usize = 3;

const PROVINCES: &[(&str, &str)] = &[
    ("011", "مازندران"),
    ("013", "گیلان"),
    ("017", "گلستان"),
    ("021", "تهران"),
    ("023", "سمنان"),
    ("024", "زنجان"),
    ("025", "قم"),
    ("026", "البرز"),
    ("028", "قزوین"),
    ("031", "اصفهان"),
    ("034", "کرمان"),
    ("035", "یزد"),
    ("038", "چهارمحال و بختیاری"),
    ("041", "آذربایجان شرقی"),
    ("044", "آذربایجان غربی"),
    ("045", "اردبیل"),
    ("051", "خراسان رضوی"),
    ("054", "سیستان و بلوچستان"),
    ("056", "خراسان جنوبی"),
    ("058", "خراسان شمالی"),
    ("061", "خوزستان"),
    ("066", "لرستان"),
    ("071", "فارس"),
    ("074", "کهگیلویه و بویراحمد"),
    ("076", "هرمزگان"),
    ("077", "بوشهر"),
    ("081", "همدان"),
    ("083", "کرمانشاه"),
    ("084", "ایلام"),
    ("086", "مرکزی"),
    ("087", "کردستان"),
];

lazy_static! {
    static ref PROVINCE_BY_AREA_CODE: HashMap<&'static str, &'static str> =
        PROVINCES.iter().copied().collect();
}

/// Province of a valid landline number, by its three-digit area code.
pub fn get_landline_province(number: &str) -> Option<&'static str> {
    if !is_landline_number_valid(number) {
        return None;
    }
    let number = normalize_phone_number(number);
    let province = PROVINCE_BY_AREA_CODE.get(&number[..AREA_CODE_LENGTH]).copied();
    if province.is_none() {
        record_lookup_miss(LookupTable::Province);
    }
    province
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_known_area_codes() {
        let cases = vec![
            ("02112345678", "تهران"),
            ("+983132221234", "اصفهان"),
            ("0098 51 3800 0000", "خراسان رضوی"),
            ("07136000000", "فارس"),
        ];
        for (number, province) in cases {
            println!("testing for input {number}");
            assert_eq!(get_landline_province(number), Some(province));
        }
    }

    #[test]
    fn test_unresolved_numbers() {
        // valid landline, unassigned area code
        assert_eq!(get_landline_province("01912345678"), None);
        // mobile numbers are valid landlines but 091 is not an area code
        assert_eq!(get_landline_province("09123456789"), None);
        assert_eq!(get_landline_province("021123"), None);
    }
}
