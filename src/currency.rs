//! Static table of the currencies known to the rate service.
//!
//! Symbols are stored uppercased because expressions are uppercased before
//! they are tokenized. A symbol used by more than one currency (`kr`, `¥`,
//! plain dollar variants) is left out so it can never resolve ambiguously;
//! `$`, `£`, `₩` and `P.` are pinned to USD, GBP, KRW and BYN.

use std::collections::HashMap;

#[derive(Debug, PartialEq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

macro_rules! currencies {
    ($(($code:literal, $name:literal, $symbol:literal)),* $(,)?) => {
        &[$(Currency { code: $code, name: $name, symbol: $symbol }),*]
    };
}

static CURRENCIES: &[Currency] = currencies![
    ("AED", "UAE Dirham", ""),
    ("AFN", "Afghan Afghani", "؋"),
    ("ALL", "Albanian Lek", ""),
    ("AMD", "Armenian Dram", "֏"),
    ("ANG", "Netherlands Antillean Guilder", ""),
    ("AOA", "Angolan Kwanza", ""),
    ("ARS", "Argentine Peso", ""),
    ("AUD", "Australian Dollar", ""),
    ("AWG", "Aruban Florin", ""),
    ("AZN", "Azerbaijani Manat", "₼"),
    ("BAM", "Bosnia-Herzegovina Convertible Mark", "KM"),
    ("BBD", "Barbadian Dollar", ""),
    ("BDT", "Bangladeshi Taka", "৳"),
    ("BGN", "Bulgarian Lev", "ЛВ"),
    ("BHD", "Bahraini Dinar", ""),
    ("BIF", "Burundian Franc", ""),
    ("BMD", "Bermudan Dollar", ""),
    ("BND", "Brunei Dollar", ""),
    ("BOB", "Bolivian Boliviano", ""),
    ("BRL", "Brazilian Real", "R$"),
    ("BSD", "Bahamian Dollar", ""),
    ("BTC", "Bitcoin", "₿"),
    ("BTN", "Bhutanese Ngultrum", ""),
    ("BWP", "Botswanan Pula", ""),
    ("BYN", "New Belarusian Ruble", "P."),
    ("BYR", "Belarusian Ruble", ""),
    ("BZD", "Belize Dollar", ""),
    ("CAD", "Canadian Dollar", ""),
    ("CDF", "Congolese Franc", ""),
    ("CHF", "Swiss Franc", ""),
    ("CLF", "Chilean Unit of Account (UF)", ""),
    ("CLP", "Chilean Peso", ""),
    ("CNY", "Chinese Yuan", ""),
    ("COP", "Colombian Peso", ""),
    ("CRC", "Costa Rican Colon", "₡"),
    ("CUC", "Cuban Convertible Peso", ""),
    ("CUP", "Cuban Peso", ""),
    ("CVE", "Cape Verdean Escudo", ""),
    ("CZK", "Czech Republic Koruna", "KČ"),
    ("DJF", "Djiboutian Franc", ""),
    ("DKK", "Danish Krone", ""),
    ("DOP", "Dominican Peso", ""),
    ("DZD", "Algerian Dinar", ""),
    ("EGP", "Egyptian Pound", ""),
    ("ERN", "Eritrean Nakfa", ""),
    ("ETB", "Ethiopian Birr", ""),
    ("EUR", "Euro", "€"),
    ("FJD", "Fijian Dollar", ""),
    ("FKP", "Falkland Islands Pound", ""),
    ("GBP", "British Pound Sterling", "£"),
    ("GEL", "Georgian Lari", "₾"),
    ("GGP", "Guernsey Pound", ""),
    ("GHS", "Ghanaian Cedi", "₵"),
    ("GIP", "Gibraltar Pound", ""),
    ("GMD", "Gambian Dalasi", ""),
    ("GNF", "Guinean Franc", ""),
    ("GTQ", "Guatemalan Quetzal", ""),
    ("GYD", "Guyanaese Dollar", ""),
    ("HKD", "Hong Kong Dollar", ""),
    ("HNL", "Honduran Lempira", ""),
    ("HRK", "Croatian Kuna", ""),
    ("HTG", "Haitian Gourde", ""),
    ("HUF", "Hungarian Forint", "FT"),
    ("IDR", "Indonesian Rupiah", "RP"),
    ("ILS", "Israeli New Sheqel", "₪"),
    ("IMP", "Manx pound", ""),
    ("INR", "Indian Rupee", "₹"),
    ("IQD", "Iraqi Dinar", ""),
    ("IRR", "Iranian Rial", ""),
    ("ISK", "Icelandic Krona", ""),
    ("JEP", "Jersey Pound", ""),
    ("JMD", "Jamaican Dollar", ""),
    ("JOD", "Jordanian Dinar", ""),
    ("JPY", "Japanese Yen", ""),
    ("KES", "Kenyan Shilling", ""),
    ("KGS", "Kyrgystani Som", ""),
    ("KHR", "Cambodian Riel", ""),
    ("KMF", "Comorian Franc", ""),
    ("KPW", "North Korean Won", ""),
    ("KRW", "South Korean Won", "₩"),
    ("KWD", "Kuwaiti Dinar", ""),
    ("KYD", "Cayman Islands Dollar", ""),
    ("KZT", "Kazakhstani Tenge", "₸"),
    ("LAK", "Laotian Kip", "₭"),
    ("LBP", "Lebanese Pound", ""),
    ("LKR", "Sri Lankan Rupee", ""),
    ("LRD", "Liberian Dollar", ""),
    ("LSL", "Lesotho Loti", ""),
    ("LVL", "Latvian Lats", ""),
    ("LYD", "Libyan Dinar", ""),
    ("MAD", "Moroccan Dirham", ""),
    ("MDL", "Moldovan Leu", ""),
    ("MGA", "Malagasy Ariary", ""),
    ("MKD", "Macedonian Denar", ""),
    ("MMK", "Myanma Kyat", ""),
    ("MNT", "Mongolian Tugrik", "₮"),
    ("MOP", "Macanese Pataca", ""),
    ("MRO", "Mauritanian Ouguiya", ""),
    ("MUR", "Mauritian Rupee", ""),
    ("MVR", "Maldivian Rufiyaa", ""),
    ("MWK", "Malawian Kwacha", ""),
    ("MXN", "Mexican Peso", ""),
    ("MYR", "Malaysian Ringgit", "RM"),
    ("MZN", "Mozambican Metical", ""),
    ("NAD", "Namibian Dollar", ""),
    ("NGN", "Nigerian Naira", "₦"),
    ("NIO", "Nicaraguan Cordoba", ""),
    ("NOK", "Norwegian Krone", ""),
    ("NPR", "Nepalese Rupee", ""),
    ("NZD", "New Zealand Dollar", ""),
    ("OMR", "Omani Rial", ""),
    ("PAB", "Panamanian Balboa", ""),
    ("PEN", "Peruvian Nuevo Sol", ""),
    ("PGK", "Papua New Guinean Kina", ""),
    ("PHP", "Philippine Peso", "₱"),
    ("PKR", "Pakistani Rupee", ""),
    ("PLN", "Polish Zloty", "ZŁ"),
    ("PYG", "Paraguayan Guarani", "₲"),
    ("QAR", "Qatari Rial", ""),
    ("RON", "Romanian Leu", ""),
    ("RSD", "Serbian Dinar", ""),
    ("RUB", "Russian Ruble", "₽"),
    ("RWF", "Rwandan Franc", ""),
    ("SAR", "Saudi Riyal", ""),
    ("SBD", "Solomon Islands Dollar", ""),
    ("SCR", "Seychellois Rupee", ""),
    ("SDG", "Sudanese Pound", ""),
    ("SEK", "Swedish Krona", ""),
    ("SGD", "Singapore Dollar", ""),
    ("SHP", "Saint Helena Pound", ""),
    ("SLL", "Sierra Leonean Leone", ""),
    ("SOS", "Somali Shilling", ""),
    ("SRD", "Surinamese Dollar", ""),
    ("STD", "Sao Tome and Principe Dobra", ""),
    ("SVC", "Salvadoran Colon", ""),
    ("SYP", "Syrian Pound", ""),
    ("SZL", "Swazi Lilangeni", ""),
    ("THB", "Thai Baht", "฿"),
    ("TJS", "Tajikistani Somoni", ""),
    ("TMT", "Turkmenistani Manat", ""),
    ("TND", "Tunisian Dinar", ""),
    ("TOP", "Tongan Paanga", ""),
    ("TRY", "Turkish Lira", "₺"),
    ("TTD", "Trinidad and Tobago Dollar", ""),
    ("TWD", "New Taiwan Dollar", ""),
    ("TZS", "Tanzanian Shilling", ""),
    ("UAH", "Ukrainian Hryvnia", "₴"),
    ("UGX", "Ugandan Shilling", ""),
    ("USD", "United States Dollar", "$"),
    ("UYU", "Uruguayan Peso", ""),
    ("UZS", "Uzbekistan Som", ""),
    ("VEF", "Venezuelan Bolivar", ""),
    ("VND", "Vietnamese Dong", "₫"),
    ("VUV", "Vanuatu Vatu", ""),
    ("WST", "Samoan Tala", ""),
    ("XAF", "CFA Franc BEAC", ""),
    ("XAG", "Silver Ounce", ""),
    ("XAU", "Gold Ounce", ""),
    ("XCD", "East Caribbean Dollar", ""),
    ("XDR", "Special Drawing Rights", ""),
    ("XOF", "CFA Franc BCEAO", ""),
    ("XPF", "CFP Franc", ""),
    ("YER", "Yemeni Rial", ""),
    ("ZAR", "South African Rand", ""),
    ("ZMK", "Zambian Kwacha (pre-2013)", ""),
    ("ZMW", "Zambian Kwacha", ""),
    ("ZWL", "Zimbabwean Dollar", ""),
];

thread_local!(
    static CODE_TO_CURRENCY: HashMap<&'static str, &'static Currency> =
        CURRENCIES.iter().map(|c| (c.code, c)).collect();
    static SYMBOL_TO_CODE: HashMap<&'static str, &'static str> = CURRENCIES
        .iter()
        .filter(|c| !c.symbol.is_empty())
        .map(|c| (c.symbol, c.code))
        .collect();
    static SYMBOLS_LONGEST_FIRST: Vec<&'static str> = {
        let mut v: Vec<&'static str> = CURRENCIES
            .iter()
            .map(|c| c.symbol)
            .filter(|s| !s.is_empty())
            .collect();
        v.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        v
    };
);

/// All currencies ordered by code.
pub fn all() -> &'static [Currency] {
    CURRENCIES
}

pub fn lookup(code: &str) -> Option<&'static Currency> {
    CODE_TO_CURRENCY.with(|m| m.get(code).copied())
}

pub fn code_for_symbol(symbol: &str) -> Option<&'static str> {
    SYMBOL_TO_CODE.with(|m| m.get(symbol).copied())
}

/// Longest symbol that `s` starts with. A symbol ending in a letter only
/// matches when it is not immediately followed by another letter, so `RP`
/// never swallows the start of `RPX`.
pub fn match_symbol(s: &str) -> Option<&'static str> {
    SYMBOLS_LONGEST_FIRST.with(|symbols| {
        symbols.iter().copied().find(|sym| {
            if !s.starts_with(sym) {
                return false;
            }
            let ends_alphabetic = sym.chars().last().map_or(false, char::is_alphabetic);
            let next_alphabetic = s[sym.len()..]
                .chars()
                .next()
                .map_or(false, char::is_alphabetic);
            !(ends_alphabetic && next_alphabetic)
        })
    })
}

/// How a currency is shown next to an amount: its symbol, or a space and its
/// code when it has none.
pub fn display_suffix(code: &str) -> String {
    match lookup(code) {
        Some(c) if !c.symbol.is_empty() => c.symbol.to_string(),
        _ => format!(" {}", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        let codes: Vec<&str> = all().iter().map(|c| c.code).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_symbols_are_unique() {
        let with_symbol = all().iter().filter(|c| !c.symbol.is_empty()).count();
        assert_eq!(SYMBOL_TO_CODE.with(|m| m.len()), with_symbol);
    }

    #[test]
    fn test_pinned_symbols() {
        assert_eq!(code_for_symbol("$"), Some("USD"));
        assert_eq!(code_for_symbol("£"), Some("GBP"));
        assert_eq!(code_for_symbol("₩"), Some("KRW"));
        assert_eq!(code_for_symbol("P."), Some("BYN"));
        assert_eq!(code_for_symbol("KR"), None);
    }

    #[test]
    fn test_match_symbol() {
        assert_eq!(match_symbol("R$5"), Some("R$"));
        assert_eq!(match_symbol("€ 5"), Some("€"));
        assert_eq!(match_symbol("ZŁ"), Some("ZŁ"));
        assert_eq!(match_symbol("RUB"), None);
        assert_eq!(match_symbol("RPX"), None);
        assert_eq!(match_symbol("USD"), None);
    }

    #[test]
    fn test_service_codes_without_symbol() {
        for code in ["XOF", "UZS", "HRK", "XAG"] {
            assert_eq!(lookup(code).map(|c| c.code), Some(code));
            assert_eq!(display_suffix(code), format!(" {}", code));
        }
        assert!(lookup("XYZ").is_none());
    }

    #[test]
    fn test_display_suffix() {
        assert_eq!(display_suffix("EUR"), "€");
        assert_eq!(display_suffix("CHF"), " CHF");
    }
}
