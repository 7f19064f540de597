use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetAllowanceInput {
    pub chain: String,
    pub token: String,
    pub contract_name: String,
    pub amount: String,
}

impl SetAllowanceInput {
    pub fn new(
        chain: impl Into<String>,
        token: impl Into<String>,
        contract_name: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            chain: chain.into(),
            token: token.into(),
            contract_name: contract_name.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetAllowanceOutput {
    pub response: serde_json::Value,
}

// Wire models

#[derive(Debug, Serialize)]
pub(crate) struct SetAllowanceRequest<'a> {
    pub sender: &'a str,
    pub call_data: AllowanceCallData<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AllowanceCallData<'a> {
    pub token: &'a str,
    pub contract_name: &'a str,
    pub amount: &'a str,
}

impl<'a> SetAllowanceRequest<'a> {
    pub fn new(sender: &'a str, input: &'a SetAllowanceInput) -> Self {
        Self {
            sender,
            call_data: AllowanceCallData {
                token: &input.token,
                contract_name: &input.contract_name,
                amount: &input.amount,
            },
        }
    }
}
