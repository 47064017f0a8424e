use crate::{ConfigError, CurrencyInfo};

const PLACEHOLDER: &str = "xxx";

/// Letter case a service expects for the currency code in its URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeCase {
    Upper,
    Lower,
}

/// Request URL with a three-byte currency slot at a fixed offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    template: String,
    offset: usize,
    case: CodeCase,
}

impl UrlTemplate {
    /// Template whose currency slot starts at byte `offset`.
    pub fn with_offset(
        template: impl Into<String>,
        offset: usize,
        case: CodeCase,
    ) -> Result<Self, ConfigError> {
        let template = template.into();
        let end = offset + PLACEHOLDER.len();
        let fits = end <= template.len()
            && template.is_char_boundary(offset)
            && template.is_char_boundary(end);
        if !fits {
            return Err(ConfigError::SlotOutOfBounds { template, offset });
        }
        Ok(Self {
            template,
            offset,
            case,
        })
    }

    /// Built-in template whose slot position is known to be in bounds.
    pub(crate) fn fixed(template: &'static str, offset: usize, case: CodeCase) -> Self {
        debug_assert!(offset + PLACEHOLDER.len() <= template.len());
        Self {
            template: template.to_owned(),
            offset,
            case,
        }
    }

    /// Template whose currency slot is the first `xxx` placeholder.
    pub fn with_placeholder(template: impl Into<String>, case: CodeCase) -> Result<Self, ConfigError> {
        let template = template.into();
        let Some(offset) = template.find(PLACEHOLDER) else {
            return Err(ConfigError::MissingCurrencySlot { template });
        };
        Self::with_offset(template, offset, case)
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn case(&self) -> CodeCase {
        self.case
    }

    /// Splice the currency code into the slot.
    pub fn render(&self, currency: &CurrencyInfo) -> String {
        let code = match self.case {
            CodeCase::Upper => currency.code().to_ascii_uppercase(),
            CodeCase::Lower => currency.code().to_ascii_lowercase(),
        };
        let end = self.offset + PLACEHOLDER.len();

        let mut url = String::with_capacity(self.template.len());
        url.push_str(&self.template[..self.offset]);
        url.push_str(&code);
        url.push_str(&self.template[end..]);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> CurrencyInfo {
        CurrencyInfo::new("USD", "$", 100_000)
    }

    #[test]
    fn splices_uppercase_code_at_offset() {
        let template = UrlTemplate::with_offset(
            "https://data.mtgox.com/api/2/BTCxxx/money/ticker_fast",
            32,
            CodeCase::Upper,
        )
        .expect("valid template");
        assert_eq!(
            template.render(&usd()),
            "https://data.mtgox.com/api/2/BTCUSD/money/ticker_fast"
        );
    }

    #[test]
    fn splices_lowercase_code_at_offset() {
        let template = UrlTemplate::with_offset(
            "https://btc-e.com/api/2/btc_xxx/ticker",
            28,
            CodeCase::Lower,
        )
        .expect("valid template");
        assert_eq!(template.render(&usd()), "https://btc-e.com/api/2/btc_usd/ticker");
    }

    #[test]
    fn placeholder_lookup_finds_slot() {
        let template =
            UrlTemplate::with_placeholder("http://127.0.0.1:8080/btc_xxx/ticker", CodeCase::Lower)
                .expect("valid template");
        assert_eq!(template.offset(), 26);
        assert_eq!(template.render(&usd()), "http://127.0.0.1:8080/btc_usd/ticker");
    }

    #[test]
    fn built_in_templates_point_at_their_placeholder() {
        for template in [
            crate::MtGoxApi::default_url_template(),
            crate::BtcEApi::default_url_template(),
        ] {
            let end = template.offset() + PLACEHOLDER.len();
            assert_eq!(&template.template()[template.offset()..end], PLACEHOLDER);
        }
    }

    #[test]
    fn rejects_templates_without_room_for_code() {
        let err = UrlTemplate::with_placeholder("https://example.test/ticker", CodeCase::Upper)
            .expect_err("must fail");
        assert!(matches!(err, ConfigError::MissingCurrencySlot { .. }));

        let err = UrlTemplate::with_offset("https://x", 8, CodeCase::Upper).expect_err("must fail");
        assert!(matches!(err, ConfigError::SlotOutOfBounds { offset: 8, .. }));
    }
}
