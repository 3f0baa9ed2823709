use afl::fuzz;
use persian_tools::{
    format_card_number, generate_random_national_id_with, get_bank_name, get_issuance_place,
    get_landline_province, get_mobile_operator, is_card_number_valid, is_iban_valid,
    is_national_id_valid, is_otp_valid, is_password_valid, is_postal_code_valid,
    number_to_price, number_to_words, only_persian_letters, separate, to_english_digits,
    to_persian, validate_word_count, GroupingOptions, PasswordPolicy, Validator, ValidatorKind,
    MAX_NUMBER_TO_WORDS,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let i = input.iter().position(|b| *b == b',')?;
    Some((&input[..i], &input[i + 1..]))
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let rng_seed = rand_seed
        .iter()
        .take(8)
        .fold(0u64, |seed, byte| (seed << 8) | u64::from(*byte));

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_grouping(rng: &mut StdRng) -> GroupingOptions {
    let splitter = match rng.gen_range::<u8, _>(0..3) {
        0 => "",
        1 => " ",
        _ => "٬",
    };
    // a zero group size must be rejected, not panic
    GroupingOptions::default()
        .splitter(splitter)
        .group_size(rng.gen_range(0..8))
}

fn gen_policy(rng: &mut StdRng) -> PasswordPolicy {
    PasswordPolicy::default()
        .uppercase_required(rng.gen_bool(0.5))
        .lowercase_required(rng.gen_bool(0.5))
        .digits_required(rng.gen_bool(0.5))
        .special_char_required(rng.gen_bool(0.5))
        .minimum_length(rng.gen_range(0..16))
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    let kinds = [
        ValidatorKind::NationalIdChecksum,
        ValidatorKind::LegalEntityIdChecksum,
        ValidatorKind::PostalCode,
        ValidatorKind::CardNumberChecksum,
        ValidatorKind::IbanChecker,
        ValidatorKind::MobileNumber,
        ValidatorKind::LandlineNumber,
        ValidatorKind::Email,
    ];
    for kind in kinds.iter() {
        kind.is_valid_match(input);
    }

    // lookups only resolve valid inputs
    if get_bank_name(input).is_some() {
        assert!(is_card_number_valid(input));
    }
    if get_issuance_place(input).is_some() {
        assert!(is_national_id_valid(input));
    }
    get_mobile_operator(input);
    get_landline_province(input);
    is_iban_valid(input);
    is_postal_code_valid(input);

    let grouping = gen_grouping(&mut rng);
    let separated = separate(input, grouping.clone());
    assert_eq!(separated.is_err(), grouping.group_size == 0);
    if is_card_number_valid(input) && grouping.group_size > 0 {
        assert!(format_card_number(input, grouping).is_ok());
    }

    let persian = to_persian(input);
    let restored = to_english_digits(&persian);
    let digits = |text: &str| -> String { text.chars().filter(|c| c.is_ascii_digit()).collect() };
    assert_eq!(digits(&restored), digits(&to_english_digits(input)));
    only_persian_letters(input);
    validate_word_count(input, rng.gen_range(0..4), rng.gen_range(0..8));

    let length = rng.gen_range(0..8);
    assert_eq!(is_otp_valid(input, length).is_err(), length == 0);

    let policy = gen_policy(&mut rng);
    let minimum_length = policy.minimum_length;
    assert_eq!(is_password_valid(input, policy).is_err(), minimum_length == 0);

    let number: u64 = rng.gen();
    assert_eq!(number_to_words(number).is_ok(), number <= MAX_NUMBER_TO_WORDS);
    number_to_words(number % (MAX_NUMBER_TO_WORDS + 1)).unwrap();
    number_to_price(number);

    assert!(is_national_id_valid(&generate_random_national_id_with(&mut rng)));
}
