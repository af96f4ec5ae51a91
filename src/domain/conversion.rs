// Two-way conversion between the base currency and one foreign currency
use super::error::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_AMOUNT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Base amount divided by the rate
    BaseToForeign,
    /// Foreign amount multiplied by the rate
    ForeignToBase,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::BaseToForeign => Direction::ForeignToBase,
            Direction::ForeignToBase => Direction::BaseToForeign,
        }
    }
}

/// Calculator state. The base currency sits in `from_currency` when
/// converting base to foreign, and in `to_currency` otherwise.
/// `rate == 0` means no rate has been fetched for the current parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionState {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: f64,
    pub direction: Direction,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub result: f64,
}

impl ConversionState {
    pub fn new(base_currency: &str, foreign_currency: &str) -> Self {
        Self {
            from_currency: base_currency.to_string(),
            to_currency: foreign_currency.to_string(),
            amount: DEFAULT_AMOUNT,
            direction: Direction::BaseToForeign,
            rate: 0.0,
            result: 0.0,
        }
    }

    pub fn base_currency(&self) -> &str {
        match self.direction {
            Direction::BaseToForeign => &self.from_currency,
            Direction::ForeignToBase => &self.to_currency,
        }
    }

    /// The currency whose rate drives the conversion
    pub fn foreign_currency(&self) -> &str {
        match self.direction {
            Direction::BaseToForeign => &self.to_currency,
            Direction::ForeignToBase => &self.from_currency,
        }
    }

    pub fn has_rate(&self) -> bool {
        self.rate > 0.0
    }

    /// Flip the direction, keeping the same foreign currency
    pub fn toggle_direction(self) -> Self {
        let base = self.base_currency().to_string();
        let foreign = self.foreign_currency().to_string();
        let direction = self.direction.flipped();

        let (from_currency, to_currency) = match direction {
            Direction::BaseToForeign => (base, foreign),
            Direction::ForeignToBase => (foreign, base),
        };

        Self {
            from_currency,
            to_currency,
            direction,
            ..self
        }
        .reset()
    }

    /// Exchange the two slots. The base currency moves with them, so the
    /// direction follows it.
    pub fn swap_currencies(mut self) -> Self {
        std::mem::swap(&mut self.from_currency, &mut self.to_currency);
        self.direction = self.direction.flipped();
        self.reset()
    }

    pub fn select_foreign(mut self, code: &str) -> DashboardResult<Self> {
        let code = code.trim().to_uppercase();
        if code.is_empty() || code == self.base_currency() {
            return Err(DashboardError::Validation(format!(
                "cannot convert {} against itself",
                self.base_currency()
            )));
        }

        match self.direction {
            Direction::BaseToForeign => self.to_currency = code,
            Direction::ForeignToBase => self.from_currency = code,
        }
        Ok(self.reset())
    }

    /// Trimmed, upper-case currency codes
    pub fn normalized(self) -> Self {
        Self {
            from_currency: self.from_currency.trim().to_uppercase(),
            to_currency: self.to_currency.trim().to_uppercase(),
            ..self
        }
    }

    pub fn validate_amount(&self) -> DashboardResult<()> {
        if self.amount.is_finite() && self.amount > 0.0 {
            Ok(())
        } else {
            Err(DashboardError::Validation("please enter a positive amount".to_string()))
        }
    }

    /// Next state with a freshly fetched rate and its result
    pub fn apply_rate(self, rate: f64) -> DashboardResult<Self> {
        self.validate_amount()?;
        let result = compute(self.amount, self.direction, rate)?;
        Ok(Self { rate, result, ..self })
    }

    fn reset(self) -> Self {
        Self {
            rate: 0.0,
            result: 0.0,
            ..self
        }
    }

    pub fn result_display(&self) -> String {
        format!("{:.4}", self.result)
    }

    pub fn rate_display(&self) -> String {
        format!("{:.6}", self.rate)
    }

    /// "100 CNY ÷ 7.000000 = 14.2857 USD"
    pub fn explanation(&self) -> Option<String> {
        if !self.has_rate() {
            return None;
        }
        let operator = match self.direction {
            Direction::BaseToForeign => "÷",
            Direction::ForeignToBase => "×",
        };
        Some(format!(
            "{} {} {} {} = {} {}",
            self.amount,
            self.from_currency,
            operator,
            self.rate_display(),
            self.result_display(),
            self.to_currency
        ))
    }
}

/// Guarded arithmetic: an unknown (zero) rate never reaches the division
pub fn compute(amount: f64, direction: Direction, rate: f64) -> DashboardResult<f64> {
    if !(rate.is_finite() && rate > 0.0) {
        return Err(DashboardError::DataUnavailable(
            "no exchange rate available".to_string(),
        ));
    }

    Ok(match direction {
        Direction::ForeignToBase => amount * rate,
        Direction::BaseToForeign => amount / rate,
    })
}

/// State plus the strings the calculator card shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionView {
    pub state: ConversionState,
    pub result_display: String,
    pub rate_display: Option<String>,
    pub explanation: Option<String>,
}

impl From<ConversionState> for ConversionView {
    fn from(state: ConversionState) -> Self {
        Self {
            result_display: state.result_display(),
            rate_display: state.has_rate().then(|| state.rate_display()),
            explanation: state.explanation(),
            state,
        }
    }
}
