use super::PaymentStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub client: String,
    pub amount: String,
    pub status: PaymentStatus,
    pub date: String,
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyRevenue {
    pub month: &'static str,
    pub revenue: u64,
    pub clients: u32,
}

/// Headline figure rendered as a card
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub change: Option<String>,
}

impl Stat {
    pub fn new(label: &str, value: impl Into<String>, change: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            change: change.map(str::to_string),
        }
    }

    pub fn is_positive(&self) -> bool {
        self.change.as_deref().is_some_and(|c| c.starts_with('+'))
    }
}
