//! Contract tests every built-in ticker adapter must satisfy.

use btcwatch_core::adapters::default_for;
use btcwatch_core::{ApiErrorKind, ApiStyle, CodeCase, TickerApi};

fn adapters() -> Vec<std::sync::Arc<dyn TickerApi>> {
    ApiStyle::ALL.into_iter().map(default_for).collect()
}

#[test]
fn adapter_reports_its_own_style() {
    for style in ApiStyle::ALL {
        assert_eq!(default_for(style).style(), style);
    }
}

#[test]
fn every_supported_currency_renders_into_the_url() {
    for api in adapters() {
        assert!(!api.currencies().is_empty(), "{} has no currencies", api.style());

        for currency in api.currencies().iter() {
            let expected = match api.url_template().case() {
                CodeCase::Upper => currency.code().to_ascii_uppercase(),
                CodeCase::Lower => currency.code().to_ascii_lowercase(),
            };
            let url = api.url_template().render(currency);
            let offset = api.url_template().offset();

            assert!(url.starts_with("https://"), "{url}");
            assert_eq!(&url[offset..offset + 3], expected, "{url}");
            assert_eq!(url.len(), api.url_template().template().len());
        }
    }
}

#[test]
fn every_currency_has_a_positive_scale_and_symbol() {
    for api in adapters() {
        for currency in api.currencies().iter() {
            assert!(currency.scale_factor() > 0, "{currency}");
            assert!(!currency.symbol().is_empty(), "{currency}");
            assert_eq!(currency.code(), currency.code().to_ascii_uppercase());
        }
    }
}

#[test]
fn malformed_text_is_malformed_json_for_every_adapter() {
    for api in adapters() {
        let err = api.parse("{not json", 100_000).expect_err("must fail");
        assert_eq!(err.kind(), ApiErrorKind::MalformedJson, "{}", api.style());
    }
}

#[test]
fn object_without_ticker_nesting_is_missing_field_for_every_adapter() {
    for api in adapters() {
        for body in [r#"{}"#, r#"{"buy": 1, "sell": 2}"#, r#"{"result": "success"}"#] {
            let err = api.parse(body, 100_000).expect_err("must fail");
            assert_eq!(err.kind(), ApiErrorKind::MissingField, "{} {body}", api.style());
        }
    }
}

#[test]
fn non_object_documents_are_missing_field() {
    for api in adapters() {
        for body in ["[]", "42", "\"ticker\"", "null"] {
            let err = api.parse(body, 100_000).expect_err("must fail");
            assert_eq!(err.kind(), ApiErrorKind::MissingField, "{} {body}", api.style());
        }
    }
}

#[test]
fn derived_prices_hold_the_scale_invariant() {
    let mtgox = default_for(ApiStyle::MtGox);
    let btce = default_for(ApiStyle::BtcE);

    for scale in [1_u32, 1_000, 100_000, 100_000_000] {
        for units in [0_i64, 1, 99_999, 10_951_000, 123_456_789_012] {
            let body = format!(
                r#"{{"result":"success","data":{{"buy":{{"value_int":"{units}"}},"sell":{{"value_int":"{units}"}}}}}}"#
            );
            let rates = mtgox.parse(&body, scale).expect("fixture parses");
            let expected = units as f64 / f64::from(scale);
            assert!((rates.buy.float - expected).abs() < 1e-9, "{units}/{scale}");
            assert_eq!(rates.sell.int, units);
        }

        for price in [0.0_f64, 0.5, 109.9, 5_780.123, 97_000.25] {
            let body = format!(r#"{{"ticker":{{"buy":{price},"sell":{price}}}}}"#);
            let rates = btce.parse(&body, scale).expect("fixture parses");
            assert!((rates.buy.float - price).abs() < 1e-9, "{price}");
            assert_eq!(
                rates.buy.int,
                (rates.buy.float * f64::from(scale)).floor() as i64,
                "{price}*{scale}"
            );
        }
    }
}
