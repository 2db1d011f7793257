//! Gateway endpoint callers
//!
//! Each action pairs a fixed path fragment with the value typed into its form
//! field. Building a descriptor is pure; sending it is the invoker's job.

use crate::config::EndpointsConfig;
use crate::types::RequestDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BankingAction {
    CustomerInformation,
    CustomerContract,
    BalanceInquiry,
    TransactionsInquiry,
    AccountDetail,
}

impl BankingAction {
    /// Display order of the form rows
    pub const ALL: [BankingAction; 5] = [
        BankingAction::CustomerInformation,
        BankingAction::CustomerContract,
        BankingAction::BalanceInquiry,
        BankingAction::TransactionsInquiry,
        BankingAction::AccountDetail,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            BankingAction::CustomerInformation => "/customers/",
            BankingAction::CustomerContract => "/customers/contracts/",
            BankingAction::BalanceInquiry => "/accounts/",
            BankingAction::TransactionsInquiry => "/accounts/transactions/",
            BankingAction::AccountDetail => "/accounts/details/",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BankingAction::CustomerInformation => "Customer information",
            BankingAction::CustomerContract => "Customer contracts",
            BankingAction::BalanceInquiry => "Balance inquiry",
            BankingAction::TransactionsInquiry => "Transactions inquiry",
            BankingAction::AccountDetail => "Account details",
        }
    }

    /// What the form field expects
    pub fn field_hint(&self) -> &'static str {
        match self {
            BankingAction::CustomerInformation | BankingAction::CustomerContract => "customer id",
            _ => "account id",
        }
    }

    /// Row index in [`BankingAction::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|a| a == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Function key that fires this action directly (F1..F5)
    pub fn function_key(&self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_function_key(n: u8) -> Option<Self> {
        (n as usize).checked_sub(1).and_then(Self::from_index)
    }

    /// Build the request for the current field value. The value is passed through
    /// untouched; the balance inquiry additionally carries the configured date filter.
    pub fn descriptor(&self, field_value: &str, endpoints: &EndpointsConfig) -> RequestDescriptor {
        let date = endpoints.balance_date.as_deref().filter(|d| !d.is_empty());
        let parameter = match (self, date) {
            (BankingAction::BalanceInquiry, Some(date)) => format!("{field_value}?date={date}"),
            _ => field_value.to_string(),
        };

        RequestDescriptor::new(self.path(), parameter)
    }
}
