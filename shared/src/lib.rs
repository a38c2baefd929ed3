use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the ledger a party sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyKind {
    Customer,
    Supplier,
}

impl PartyKind {
    /// Singular wire name, as used in endpoint paths (`add_customer`)
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyKind::Customer => "customer",
            PartyKind::Supplier => "supplier",
        }
    }

    /// Plural wire name, as used by the list and export endpoints
    pub fn plural(&self) -> &'static str {
        match self {
            PartyKind::Customer => "customers",
            PartyKind::Supplier => "suppliers",
        }
    }

    /// Human-readable label for headings and buttons
    pub fn label(&self) -> &'static str {
        match self {
            PartyKind::Customer => "Customer",
            PartyKind::Supplier => "Supplier",
        }
    }

    /// Value of the `type` field on debt transactions for this kind
    pub fn transaction_type(&self) -> &'static str {
        match self {
            PartyKind::Customer => "customer_debt",
            PartyKind::Supplier => "supplier_debt",
        }
    }

    pub fn from_transaction_type(value: &str) -> Option<Self> {
        match value {
            "customer_debt" => Some(PartyKind::Customer),
            "supplier_debt" => Some(PartyKind::Supplier),
            _ => None,
        }
    }

    pub fn from_plural(value: &str) -> Option<Self> {
        match value {
            "customers" => Some(PartyKind::Customer),
            "suppliers" => Some(PartyKind::Supplier),
            _ => None,
        }
    }

    /// File name the export endpoint suggests for this kind's report
    pub fn report_file_name(&self) -> String {
        format!("{}_report.pdf", self.plural())
    }
}

impl fmt::Display for PartyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sign of a balance, used both as a CSS marker and as a filter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceSign {
    Positive,
    Negative,
    Zero,
}

impl BalanceSign {
    /// Balances within half a cent of zero count as settled
    pub const ZERO_TOLERANCE: f64 = 0.005;

    pub fn classify(balance: f64) -> Self {
        if balance.abs() < Self::ZERO_TOLERANCE {
            BalanceSign::Zero
        } else if balance > 0.0 {
            BalanceSign::Positive
        } else {
            BalanceSign::Negative
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BalanceSign::Positive => "positive",
            BalanceSign::Negative => "negative",
            BalanceSign::Zero => "zero",
        }
    }

    /// Parse a filter/select value; anything unrecognised is `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "positive" => Some(BalanceSign::Positive),
            "negative" => Some(BalanceSign::Negative),
            "zero" => Some(BalanceSign::Zero),
            _ => None,
        }
    }
}

/// Direction of a debt transaction.
///
/// `taken` increases what the party owes; every other value is a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtType {
    Taken,
    #[serde(other)]
    Paid,
}

impl DebtType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebtType::Taken => "taken",
            DebtType::Paid => "paid",
        }
    }

    /// Signed effect of `amount` on the party balance
    pub fn signed_amount(&self, amount: f64) -> f64 {
        match self {
            DebtType::Taken => amount,
            DebtType::Paid => -amount,
        }
    }
}

/// A customer or supplier as stored in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub balance: f64,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// Ids of the transactions recorded against this party
    #[serde(default)]
    pub transactions: Vec<u64>,
}

impl Party {
    pub fn balance_sign(&self) -> BalanceSign {
        BalanceSign::classify(self.balance)
    }
}

/// Form fields of the add/edit party dialog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartyDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub notes: String,
}

impl From<&Party> for PartyDraft {
    fn from(party: &Party) -> Self {
        Self {
            name: party.name.clone(),
            phone: party.phone.clone(),
            category: party.category.clone(),
            notes: party.notes.clone(),
        }
    }
}

/// Body of `POST /api/add_transaction`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtDraft {
    /// `customer_debt` or `supplier_debt`
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub person_id: u64,
    pub debt_type: DebtType,
    pub amount: f64,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub notes: String,
}

/// A recorded debt transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub person_id: u64,
    pub debt_type: DebtType,
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub notes: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PartyKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub shop_name: String,
    pub currency: String,
    /// Settings this application does not use, kept so a save does not drop them
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shop_name: "My Shop".to_string(),
            currency: "DZD".to_string(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Minimal response shape every mutating endpoint returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self { success: true, message: None }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()) }
    }
}

/// Response of the add/update party endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyResponse {
    pub success: bool,
    /// Sent under the kind's own key (`customer` or `supplier`)
    #[serde(default, alias = "customer", alias = "supplier", skip_serializing_if = "Option::is_none")]
    pub party: Option<Party>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of `GET /api/get_<kind>/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyDetailsResponse {
    pub success: bool,
    #[serde(default, alias = "customer", alias = "supplier", skip_serializing_if = "Option::is_none")]
    pub party: Option<Party>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of `POST /api/add_transaction`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of `GET /api/customers` and `GET /api/suppliers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyListResponse {
    pub success: bool,
    pub parties: Vec<Party>,
    /// Category names available for this kind, in definition order
    pub categories: Vec<String>,
}

/// Aggregates shown in the dashboard strip
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub customers_count: usize,
    pub suppliers_count: usize,
    pub customers_debt: f64,
    pub suppliers_debt: f64,
    pub cash_balance: f64,
}

/// A client log line forwarded to the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}

/// Format an amount with two decimals and the currency suffix
pub fn format_amount(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_kind_wire_names() {
        assert_eq!(PartyKind::Customer.as_str(), "customer");
        assert_eq!(PartyKind::Supplier.plural(), "suppliers");
        assert_eq!(PartyKind::Customer.transaction_type(), "customer_debt");
        assert_eq!(PartyKind::Supplier.report_file_name(), "suppliers_report.pdf");

        assert_eq!(PartyKind::from_transaction_type("supplier_debt"), Some(PartyKind::Supplier));
        assert_eq!(PartyKind::from_transaction_type("cash"), None);
        assert_eq!(PartyKind::from_plural("customers"), Some(PartyKind::Customer));
        assert_eq!(PartyKind::from_plural("customer"), None);
    }

    #[test]
    fn test_balance_sign_classification() {
        assert_eq!(BalanceSign::classify(150.0), BalanceSign::Positive);
        assert_eq!(BalanceSign::classify(-0.5), BalanceSign::Negative);
        assert_eq!(BalanceSign::classify(0.0), BalanceSign::Zero);
        assert_eq!(BalanceSign::classify(-0.0), BalanceSign::Zero);
        // Float noise left over from 0.1 + 0.2 - 0.3 style arithmetic
        assert_eq!(BalanceSign::classify(0.1 + 0.2 - 0.3), BalanceSign::Zero);
        assert_eq!(BalanceSign::classify(0.01), BalanceSign::Positive);
    }

    #[test]
    fn test_balance_sign_parse_matches_css_class() {
        for sign in [BalanceSign::Positive, BalanceSign::Negative, BalanceSign::Zero] {
            assert_eq!(BalanceSign::parse(sign.css_class()), Some(sign));
        }
        assert_eq!(BalanceSign::parse(""), None);
        assert_eq!(BalanceSign::parse("Positive"), None);
    }

    #[test]
    fn test_debt_type_unknown_values_are_payments() {
        let taken: DebtType = serde_json::from_str("\"taken\"").unwrap();
        let paid: DebtType = serde_json::from_str("\"paid\"").unwrap();
        let other: DebtType = serde_json::from_str("\"refund\"").unwrap();

        assert_eq!(taken, DebtType::Taken);
        assert_eq!(paid, DebtType::Paid);
        assert_eq!(other, DebtType::Paid);

        assert_eq!(DebtType::Taken.signed_amount(20.0), 20.0);
        assert_eq!(DebtType::Paid.signed_amount(20.0), -20.0);
    }

    #[test]
    fn test_debt_draft_wire_shape() {
        let draft = DebtDraft {
            transaction_type: "customer_debt".to_string(),
            person_id: 42,
            debt_type: DebtType::Taken,
            amount: 12.5,
            date: "2025-03-01".to_string(),
            notes: String::new(),
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["type"], "customer_debt");
        assert_eq!(value["person_id"], 42);
        assert_eq!(value["debt_type"], "taken");
        assert_eq!(value["amount"], 12.5);
        assert_eq!(value["date"], "2025-03-01");
    }

    #[test]
    fn test_api_response_tolerates_extra_fields() {
        let body = r#"{"success": true, "customer": {"id": 1}}"#;
        let response: ApiResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert_eq!(response.message, None);

        let rejected = serde_json::to_value(ApiResponse::rejected("Customer not found")).unwrap();
        assert_eq!(rejected["success"], false);
        assert_eq!(rejected["message"], "Customer not found");
    }

    #[test]
    fn test_party_response_reads_kind_keys() {
        let body = r#"{"success": true, "supplier": {"id": 2, "name": "Mill", "created_at": ""}}"#;
        let response: PartyResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.party.map(|p| p.name), Some("Mill".to_string()));

        let body = r#"{"success": true, "customer": {"id": 1, "name": "Ali", "created_at": ""}, "transactions": []}"#;
        let details: PartyDetailsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(details.party.map(|p| p.id), Some(1));
        assert!(details.transactions.is_empty());
    }

    #[test]
    fn test_party_defaults_for_missing_fields() {
        let body = r#"{"id": 3, "name": "Ali", "created_at": "2025-01-01T00:00:00Z"}"#;
        let party: Party = serde_json::from_str(body).unwrap();
        assert_eq!(party.balance, 0.0);
        assert!(party.transactions.is_empty());
        assert_eq!(party.balance_sign(), BalanceSign::Zero);

        let draft = PartyDraft::from(&party);
        assert_eq!(draft.name, "Ali");
        assert!(draft.phone.is_empty());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1500.0, "DZD"), "1500.00 DZD");
        assert_eq!(format_amount(-2.5, "DZD"), "-2.50 DZD");
    }
}
