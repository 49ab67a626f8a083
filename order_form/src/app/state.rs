use crate::currency::{self, ZERO_TOTAL};
use crate::numeric::parse_field;
use crate::settings::FormSettings;

pub const LIMIT_PRICE_ERROR: &str = "Limit-prisen kan kun bestå av tall.";
pub const VOLUME_ERROR: &str = "Volumet kan kun bestå av tall.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSide {
    #[default]
    Buy,
    Sell,
}

impl OrderSide {
    pub fn label(&self) -> &'static str {
        match self {
            OrderSide::Buy => "Kjøp",
            OrderSide::Sell => "Salg",
        }
    }

    /// Noun used in the confirmation question.
    pub fn trade_word(&self) -> &'static str {
        match self {
            OrderSide::Buy => "kjøp",
            OrderSide::Sell => "salg",
        }
    }
}

/// Raw text of a numeric input plus its blur-time validation flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericField {
    pub text: String,
    pub error: bool,
}

impl NumericField {
    /// Re-check the text; returns true if the flag flipped.
    pub fn validate(&mut self) -> bool {
        let error = parse_field(&self.text).is_err();
        let changed = error != self.error;
        self.error = error;
        changed
    }

    /// Whitespace-only counts as empty here.
    pub fn is_filled(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Value used for the total. An empty string has none.
    pub fn amount(&self) -> Option<f64> {
        if self.text.is_empty() {
            return None;
        }
        parse_field(&self.text).ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub asset_pair: String,
    pub market_price_ore: i64,

    pub side: OrderSide,
    pub limit_price: NumericField,
    pub volume: NumericField,

    /// Question shown in the modal while waiting for an answer.
    pub pending_confirmation: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(&FormSettings::default())
    }
}

impl FormState {
    pub fn new(settings: &FormSettings) -> Self {
        Self {
            asset_pair: settings.asset_pair.clone(),
            market_price_ore: settings.market_price_ore,
            side: OrderSide::default(),
            limit_price: NumericField::default(),
            volume: NumericField::default(),
            pending_confirmation: None,
        }
    }

    pub fn market_price_display(&self) -> String {
        currency::format_minor_units(self.market_price_ore, currency::MARKET)
    }

    pub fn total_display(&self) -> String {
        let (Some(price), Some(volume)) = (self.limit_price.amount(), self.volume.amount()) else {
            return ZERO_TOTAL.to_string();
        };
        currency::format_currency(volume * price, currency::TOTAL)
    }

    pub fn form_is_valid(&self) -> bool {
        self.limit_price.is_filled()
            && self.volume.is_filled()
            && !self.limit_price.error
            && !self.volume.error
    }

    pub fn confirmation_phrase(&self) -> String {
        format!(
            "Er du sikker på at du vil plassere en limit-ordre for {}?",
            self.side.trade_word()
        )
    }
}
