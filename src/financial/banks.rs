use crate::financial::card_number::{is_card_number_valid, normalize_card_number};
use crate::stats::{record_lookup_miss, LookupTable};
use lazy_static::lazy_static;
use std::collections::HashMap;

const BIN_LENGTH: usize = 6;

/// An issuing bank. `icon_ref` is an opaque asset identifier for the icon layer.
#[derive(Debug, PartialEq, Eq)]
pub struct BankRecord {
    pub name: &'static str,
    pub card_prefixes: &'static [&'static str],
    pub icon_ref: &'static str,
}

pub static BANKS: &[BankRecord] = &[
    BankRecord {
        name: "بانک ملی ایران",
        card_prefixes: &["603799"],
        icon_ref: "melli",
    },
    BankRecord {
        name: "بانک سپه",
        card_prefixes: &["589210"],
        icon_ref: "sepah",
    },
    BankRecord {
        name: "بانک توسعه صادرات",
        card_prefixes: &["627648"],
        icon_ref: "edbi",
    },
    BankRecord {
        name: "بانک صنعت و معدن",
        card_prefixes: &["627961"],
        icon_ref: "bim",
    },
    BankRecord {
        name: "بانک کشاورزی",
        card_prefixes: &["603770"],
        icon_ref: "keshavarzi",
    },
    BankRecord {
        name: "بانک مسکن",
        card_prefixes: &["628023"],
        icon_ref: "maskan",
    },
    BankRecord {
        name: "پست بانک ایران",
        card_prefixes: &["627760"],
        icon_ref: "postbank",
    },
    BankRecord {
        name: "بانک توسعه تعاون",
        card_prefixes: &["502908"],
        icon_ref: "tt",
    },
    BankRecord {
        name: "بانک اقتصاد نوین",
        card_prefixes: &["627412"],
        icon_ref: "en",
    },
    BankRecord {
        name: "بانک پارسیان",
        card_prefixes: &["622106", "627884"],
        icon_ref: "parsian",
    },
    BankRecord {
        name: "بانک پاسارگاد",
        card_prefixes: &["502229", "639347"],
        icon_ref: "pasargad",
    },
    BankRecord {
        name: "بانک کارآفرین",
        card_prefixes: &["627488", "502910"],
        icon_ref: "karafarin",
    },
    BankRecord {
        name: "بانک سامان",
        card_prefixes: &["621986"],
        icon_ref: "saman",
    },
    BankRecord {
        name: "بانک سینا",
        card_prefixes: &["639346"],
        icon_ref: "sina",
    },
    BankRecord {
        name: "بانک سرمایه",
        card_prefixes: &["639607"],
        icon_ref: "sarmayeh",
    },
    BankRecord {
        name: "بانک شهر",
        card_prefixes: &["502806", "504706"],
        icon_ref: "shahr",
    },
    BankRecord {
        name: "بانک دی",
        card_prefixes: &["502938"],
        icon_ref: "dey",
    },
    BankRecord {
        name: "بانک صادرات ایران",
        card_prefixes: &["603769"],
        icon_ref: "saderat",
    },
    BankRecord {
        name: "بانک ملت",
        card_prefixes: &["610433", "991975"],
        icon_ref: "mellat",
    },
    BankRecord {
        name: "بانک تجارت",
        card_prefixes: &["627353", "585983"],
        icon_ref: "tejarat",
    },
    BankRecord {
        name: "بانک رفاه کارگران",
        card_prefixes: &["589463"],
        icon_ref: "refah",
    },
    BankRecord {
        name: "بانک ایران زمین",
        card_prefixes: &["505785"],
        icon_ref: "iranzamin",
    },
    BankRecord {
        name: "بانک آینده",
        card_prefixes: &["636214"],
        icon_ref: "ayandeh",
    },
    BankRecord {
        name: "بانک گردشگری",
        card_prefixes: &["505416"],
        icon_ref: "gardeshgari",
    },
    BankRecord {
        name: "بانک قرض الحسنه مهر ایران",
        card_prefixes: &["606373"],
        icon_ref: "mehriran",
    },
    BankRecord {
        name: "بانک قرض الحسنه رسالت",
        card_prefixes: &["504172"],
        icon_ref: "resalat",
    },
    BankRecord {
        name: "بانک خاورمیانه",
        card_prefixes: &["585947"],
        icon_ref: "middleeast",
    },
    BankRecord {
        name: "بانک مرکزی جمهوری اسلامی ایران",
        card_prefixes: &["636795"],
        icon_ref: "cbi",
    },
    BankRecord {
        name: "موسسه اعتباری توسعه",
        card_prefixes: &["628157"],
        icon_ref: "tosee",
    },
    BankRecord {
        name: "موسسه اعتباری کوثر",
        card_prefixes: &["505801"],
        icon_ref: "kosar",
    },
    BankRecord {
        name: "موسسه اعتباری ملل",
        card_prefixes: &["606256"],
        icon_ref: "melal",
    },
    BankRecord {
        name: "موسسه اعتباری نور",
        card_prefixes: &["507677"],
        icon_ref: "noor",
    },
];

lazy_static! {
    static ref BANK_BY_BIN: HashMap<&'static str, &'static BankRecord> = BANKS
        .iter()
        .flat_map(|bank| bank.card_prefixes.iter().map(move |bin| (*bin, bank)))
        .collect();
}

/// The bank that issued a valid card number, looked up by its BIN.
pub fn find_bank(number: &str) -> Option<&'static BankRecord> {
    if !is_card_number_valid(number) {
        return None;
    }
    let number = normalize_card_number(number);
    let bank = BANK_BY_BIN.get(&number[..BIN_LENGTH]).copied();
    if bank.is_none() {
        record_lookup_miss(LookupTable::Bank);
    }
    bank
}

pub fn get_bank_name(number: &str) -> Option<&'static str> {
    find_bank(number).map(|bank| bank.name)
}
