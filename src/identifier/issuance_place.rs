use crate::identifier::national_id::is_national_id_valid;
use crate::stats::{record_lookup_miss, LookupTable};
use lazy_static::lazy_static;
use std::collections::HashMap;

const PLACE_CODE_LENGTH: usize = 3;

// Issuance city by the leading three digits of a national ID, grouped by province.
const ISSUANCE_PLACES: &[(&str, &str)] = &[
    // آذربایجان شرقی
    ("169", "آذرشهر"),
    ("170", "آذرشهر"),
    ("149", "اسکو"),
    ("150", "اسکو"),
    ("171", "اهر"),
    ("168", "بستان آباد"),
    ("545", "بناب"),
    ("136", "تبریز"),
    ("137", "تبریز"),
    ("138", "تبریز"),
    ("504", "جلفا"),
    ("505", "چاراویماق"),
    ("636", "خداآفرین"),
    ("164", "سراب"),
    ("165", "سراب"),
    ("172", "شبستر"),
    ("623", "عجب شیر"),
    ("506", "کلیبر"),
    ("163", "مراغه"),
    ("160", "مرند"),
    ("161", "ملکان"),
    ("162", "میانه"),
    ("166", "ورزقان"),
    ("173", "هریس"),
    ("174", "هشترود"),
    // آذربایجان غربی
    ("273", "ارومیه"),
    ("274", "ارومیه"),
    ("275", "اشنویه"),
    ("284", "بوکان"),
    ("285", "بوکان"),
    ("289", "پیرانشهر"),
    ("292", "تکاب"),
    ("282", "چالدران"),
    ("280", "خوی"),
    ("281", "خوی"),
    ("286", "سردشت"),
    ("287", "سردشت"),
    ("279", "سلماس"),
    ("288", "شاهین دژ"),
    ("278", "ماکو"),
    ("276", "مهاباد"),
    ("277", "میاندوآب"),
    ("290", "نقده"),
    ("283", "پلدشت"),
    // اردبیل
    ("135", "اردبیل"),
    ("139", "اردبیل"),
    ("503", "پارس آباد"),
    ("509", "مشگین شهر"),
    ("507", "خلخال"),
    ("508", "گرمی"),
    ("510", "نمین"),
    ("511", "نیر"),
    ("512", "بیله سوار"),
    ("513", "کوثر"),
    // اصفهان
    ("127", "اصفهان"),
    ("128", "اصفهان"),
    ("129", "اصفهان"),
    ("125", "آران و بیدگل"),
    ("126", "آران و بیدگل"),
    ("119", "اردستان"),
    ("120", "اردستان"),
    ("113", "برخوار"),
    ("114", "برخوار"),
    ("117", "تیران و کرون"),
    ("118", "تیران و کرون"),
    ("115", "فریدن"),
    ("116", "فریدونشهر"),
    ("121", "خمینی شهر"),
    ("122", "خمینی شهر"),
    ("123", "خوانسار"),
    ("124", "خوانسار"),
    ("111", "سمیرم"),
    ("112", "سمیرم"),
    ("130", "شهرضا"),
    ("131", "شهرضا"),
    ("108", "فلاورجان"),
    ("109", "فلاورجان"),
    ("132", "کاشان"),
    ("133", "کاشان"),
    ("134", "گلپایگان"),
    ("103", "لنجان"),
    ("104", "لنجان"),
    ("105", "مبارکه"),
    ("106", "مبارکه"),
    ("107", "نائین"),
    ("101", "نجف آباد"),
    ("102", "نجف آباد"),
    ("110", "نطنز"),
    // البرز
    ("032", "کرج"),
    ("033", "کرج"),
    ("034", "ساوجبلاغ"),
    ("035", "نظرآباد"),
    ("036", "طالقان"),
    // ایلام
    ("450", "ایلام"),
    ("451", "ایلام"),
    ("452", "آبدانان"),
    ("453", "دره شهر"),
    ("454", "دهلران"),
    ("455", "شیروان و چرداول"),
    ("456", "مهران"),
    ("457", "ایوان"),
    // بوشهر
    ("349", "بوشهر"),
    ("350", "بوشهر"),
    ("351", "تنگستان"),
    ("352", "دشتستان"),
    ("353", "دشتی"),
    ("354", "دیر"),
    ("355", "کنگان"),
    ("356", "گناوه"),
    ("357", "دیلم"),
    // تهران
    ("001", "تهران مرکزی"),
    ("002", "تهران مرکزی"),
    ("003", "تهران مرکزی"),
    ("004", "تهران مرکزی"),
    ("005", "تهران مرکزی"),
    ("006", "تهران مرکزی"),
    ("007", "تهران مرکزی"),
    ("008", "تهران مرکزی"),
    ("011", "تهران جنوب"),
    ("020", "تهران شرق"),
    ("025", "تهران غرب"),
    ("015", "تهران شمال"),
    ("043", "شهرری"),
    ("044", "شمیرانات"),
    ("045", "اسلامشهر"),
    ("048", "دماوند"),
    ("049", "دماوند"),
    ("031", "ورامین"),
    ("050", "فیروزکوه"),
    ("051", "رباط کریم"),
    ("052", "شهریار"),
    ("053", "پاکدشت"),
    ("054", "پاکدشت"),
    ("055", "قدس"),
    // چهارمحال و بختیاری
    ("467", "شهرکرد"),
    ("468", "شهرکرد"),
    ("469", "بروجن"),
    ("470", "اردل"),
    ("471", "فارسان"),
    ("472", "لردگان"),
    ("473", "کوهرنگ"),
    // خراسان جنوبی
    ("649", "بیرجند"),
    ("650", "بیرجند"),
    ("651", "قائنات"),
    ("652", "نهبندان"),
    ("653", "سربیشه"),
    ("654", "فردوس"),
    ("655", "طبس"),
    // خراسان رضوی
    ("092", "مشهد"),
    ("093", "مشهد"),
    ("094", "مشهد"),
    ("095", "تربت حیدریه"),
    ("096", "تربت حیدریه"),
    ("097", "تربت جام"),
    ("098", "سبزوار"),
    ("099", "سبزوار"),
    ("088", "نیشابور"),
    ("089", "نیشابور"),
    ("090", "قوچان"),
    ("091", "قوچان"),
    ("086", "کاشمر"),
    ("087", "کاشمر"),
    ("084", "گناباد"),
    ("085", "گناباد"),
    ("082", "چناران"),
    ("083", "چناران"),
    ("080", "درگز"),
    ("081", "درگز"),
    ("078", "تایباد"),
    ("079", "تایباد"),
    ("076", "خواف"),
    ("077", "خواف"),
    ("074", "سرخس"),
    ("075", "سرخس"),
    ("072", "فریمان"),
    ("073", "فریمان"),
    ("070", "کلات"),
    ("071", "کلات"),
    // خراسان شمالی
    ("658", "بجنورد"),
    ("659", "بجنورد"),
    ("660", "اسفراین"),
    ("661", "شیروان"),
    ("662", "جاجرم"),
    ("663", "مانه و سملقان"),
    // خوزستان
    ("175", "اهواز"),
    ("176", "اهواز"),
    ("177", "آبادان"),
    ("178", "آبادان"),
    ("179", "خرمشهر"),
    ("180", "خرمشهر"),
    ("181", "دزفول"),
    ("182", "دزفول"),
    ("183", "شوشتر"),
    ("184", "شوشتر"),
    ("185", "مسجد سلیمان"),
    ("186", "مسجد سلیمان"),
    ("187", "ایذه"),
    ("188", "ایذه"),
    ("189", "بهبهان"),
    ("190", "بهبهان"),
    ("191", "ماهشهر"),
    ("192", "ماهشهر"),
    ("193", "اندیمشک"),
    ("194", "اندیمشک"),
    ("195", "رامهرمز"),
    ("196", "رامهرمز"),
    ("197", "شوش"),
    ("198", "شوش"),
    ("199", "دشت آزاد"),
    ("200", "باغ ملک"),
    // زنجان
    ("422", "زنجان"),
    ("423", "زنجان"),
    ("424", "ابهر"),
    ("425", "خدابنده"),
    ("426", "ماهنشان"),
    ("427", "طارم"),
    ("428", "ایجرود"),
    // سمنان
    ("056", "سمنان"),
    ("057", "سمنان"),
    ("058", "شاهرود"),
    ("059", "شاهرود"),
    ("060", "دامغان"),
    ("061", "گرمسار"),
    ("062", "مهدی شهر"),
    // سیستان و بلوچستان
    ("361", "زاهدان"),
    ("362", "زاهدان"),
    ("363", "زابل"),
    ("364", "ایرانشهر"),
    ("365", "سراوان"),
    ("366", "چابهار"),
    ("367", "خاش"),
    ("368", "نیکشهر"),
    // فارس
    ("228", "شیراز"),
    ("229", "شیراز"),
    ("230", "شیراز"),
    ("231", "آباده"),
    ("232", "استهبان"),
    ("233", "اقلید"),
    ("234", "جهرم"),
    ("235", "داراب"),
    ("236", "سپیدان"),
    ("237", "فسا"),
    ("238", "فیروزآباد"),
    ("239", "کازرون"),
    ("240", "لارستان"),
    ("241", "مرودشت"),
    ("242", "ممسنی"),
    ("243", "نی ریز"),
    ("244", "خرم بید"),
    ("245", "لامرد"),
    // قزوین
    ("558", "قزوین"),
    ("559", "قزوین"),
    ("560", "تاکستان"),
    ("561", "بوئین زهرا"),
    ("562", "آبیک"),
    // قم
    ("037", "قم"),
    ("038", "قم"),
    // کردستان
    ("375", "سنندج"),
    ("376", "سنندج"),
    ("377", "سقز"),
    ("378", "مریوان"),
    ("379", "بانه"),
    ("380", "بیجار"),
    ("381", "قروه"),
    ("382", "کامیاران"),
    ("383", "دیواندره"),
    // کرمان
    ("313", "کرمان"),
    ("314", "کرمان"),
    ("315", "بم"),
    ("316", "جیرفت"),
    ("317", "رفسنجان"),
    ("318", "زرند"),
    ("319", "سیرجان"),
    ("320", "شهربابک"),
    ("321", "کهنوج"),
    ("322", "بردسیر"),
    ("323", "راور"),
    // کرمانشاه
    ("324", "کرمانشاه"),
    ("325", "کرمانشاه"),
    ("326", "اسلام آباد غرب"),
    ("327", "پاوه"),
    ("328", "سنقر"),
    ("329", "قصر شیرین"),
    ("330", "کنگاور"),
    ("331", "گیلانغرب"),
    ("332", "هرسین"),
    ("333", "صحنه"),
    // کهگیلویه و بویراحمد
    ("497", "یاسوج"),
    ("498", "یاسوج"),
    ("499", "کهگیلویه"),
    ("500", "گچساران"),
    ("501", "دنا"),
    // گلستان
    ("217", "گرگان"),
    ("218", "گرگان"),
    ("219", "گنبد کاووس"),
    ("220", "علی آباد"),
    ("221", "بندر ترکمن"),
    ("222", "آزادشهر"),
    ("223", "کردکوی"),
    ("224", "مینودشت"),
    // گیلان
    ("262", "رشت"),
    ("263", "رشت"),
    ("264", "آستارا"),
    ("265", "آستانه اشرفیه"),
    ("266", "بندر انزلی"),
    ("267", "تالش"),
    ("268", "رودبار"),
    ("269", "صومعه سرا"),
    ("270", "لاهیجان"),
    ("271", "لنگرود"),
    ("272", "فومن"),
    // لرستان
    ("406", "خرم آباد"),
    ("407", "خرم آباد"),
    ("408", "بروجرد"),
    ("409", "الیگودرز"),
    ("410", "دورود"),
    ("411", "کوهدشت"),
    ("412", "ازنا"),
    ("413", "پلدختر"),
    ("414", "دلفان"),
    // مازندران
    ("210", "ساری"),
    ("211", "ساری"),
    ("212", "آمل"),
    ("213", "بابل"),
    ("214", "بابلسر"),
    ("215", "بهشهر"),
    ("216", "تنکابن"),
    ("201", "قائم شهر"),
    ("202", "قائم شهر"),
    ("203", "نوشهر"),
    ("204", "چالوس"),
    ("205", "نور"),
    ("206", "محمودآباد"),
    ("207", "نکا"),
    ("208", "رامسر"),
    ("209", "جویبار"),
    // مرکزی
    ("023", "اراک"),
    ("024", "اراک"),
    ("026", "آشتیان"),
    ("027", "تفرش"),
    ("028", "خمین"),
    ("029", "دلیجان"),
    ("030", "ساوه"),
    ("039", "شازند"),
    ("040", "محلات"),
    ("041", "کمیجان"),
    // هرمزگان
    ("338", "بندرعباس"),
    ("339", "بندرعباس"),
    ("340", "بندر لنگه"),
    ("341", "میناب"),
    ("342", "قشم"),
    ("343", "جاسک"),
    ("344", "رودان"),
    ("345", "حاجی آباد"),
    ("346", "بستک"),
    ("347", "ابوموسی"),
    // همدان
    ("386", "همدان"),
    ("387", "همدان"),
    ("388", "ملایر"),
    ("389", "نهاوند"),
    ("390", "تویسرکان"),
    ("391", "کبودرآهنگ"),
    ("392", "اسدآباد"),
    ("393", "رزن"),
    ("394", "بهار"),
    // یزد
    ("444", "یزد"),
    ("445", "یزد"),
    ("446", "اردکان"),
    ("447", "بافق"),
    ("448", "تفت"),
    ("449", "مهریز"),
    ("442", "میبد"),
    ("443", "ابرکوه"),
];

lazy_static! {
    static ref ISSUANCE_PLACE_BY_CODE: HashMap<&'static str, &'static str> =
        ISSUANCE_PLACES.iter().copied().collect();
}

/// Name of the place that issued `code`, when `code` is a valid national ID with a known prefix.
pub fn get_issuance_place(code: &str) -> Option<&'static str> {
    if !is_national_id_valid(code) {
        return None;
    }
    let place = ISSUANCE_PLACE_BY_CODE.get(&code[..PLACE_CODE_LENGTH]).copied();
    if place.is_none() {
        record_lookup_miss(LookupTable::IssuancePlace);
    }
    place
}
