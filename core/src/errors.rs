//! # Wallet & Contract Error Classification
//!
//! Wallet providers and RPC nodes report failures as free-form strings.
//! Users shouldn't see those. [`ContractError::from_message`] sorts the
//! handful of cases we can recognise into variants, and
//! [`ContractError::user_message`] renders the line that goes in the
//! toast.

use thiserror::Error;

/// User-facing copy for failures and confirmations.
pub mod messages {
    pub const WALLET_NOT_CONNECTED: &str = "Please connect your wallet to continue";
    pub const WRONG_NETWORK: &str = "Please switch to Base network";
    pub const INSUFFICIENT_BALANCE: &str = "Insufficient balance for this transaction";
    pub const INSUFFICIENT_FUNDS: &str = "Insufficient funds for transaction";
    pub const INVALID_AMOUNT: &str = "Please enter a valid amount";
    pub const INVALID_UNLOCK_TIME: &str = "Unlock time must be in the future";
    pub const USER_REJECTED: &str = "Transaction rejected by user";
    pub const TRANSACTION_FAILED: &str = "Transaction failed";
    pub const NETWORK_ERROR: &str = "Network error occurred";
    pub const CONTRACT_ERROR: &str = "Contract interaction failed";
    pub const VAULT_NOT_FOUND: &str = "Vault not found";
    pub const VAULT_LOCKED: &str = "Vault is still locked";
    pub const UNAUTHORIZED: &str = "You are not authorized to perform this action";

    pub const VAULT_CREATED: &str = "Vault created successfully!";
    pub const DEPOSIT_SUCCESS: &str = "Deposit completed successfully!";
    pub const WITHDRAW_SUCCESS: &str = "Withdrawal completed successfully!";
    pub const WALLET_CONNECTED: &str = "Wallet connected successfully!";
    pub const TRANSACTION_CONFIRMED: &str = "Transaction confirmed!";
}

/// A failed contract call or wallet request, classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// The user dismissed the signing prompt.
    #[error("user rejected the request")]
    UserRejected,

    /// Not enough native currency for value plus gas.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// Anything else, with the provider's message verbatim.
    #[error("contract call failed: {0}")]
    Other(String),
}

impl ContractError {
    /// Classifies a raw provider error message. Matching is
    /// case-insensitive because providers don't agree on casing.
    pub fn from_message(message: &str) -> Self {
        let lowered = message.to_lowercase();
        if lowered.contains("user rejected") {
            ContractError::UserRejected
        } else if lowered.contains("insufficient funds") {
            ContractError::InsufficientFunds
        } else {
            ContractError::Other(message.to_string())
        }
    }

    /// The line to show the user.
    pub fn user_message(&self) -> String {
        match self {
            ContractError::UserRejected => messages::USER_REJECTED.to_string(),
            ContractError::InsufficientFunds => messages::INSUFFICIENT_FUNDS.to_string(),
            ContractError::Other(msg) if msg.trim().is_empty() => {
                messages::TRANSACTION_FAILED.to_string()
            }
            ContractError::Other(msg) => msg.clone(),
        }
    }
}

/// Shorthand for `ContractError::from_message(message).user_message()`.
pub fn handle_contract_error(message: &str) -> String {
    ContractError::from_message(message).user_message()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_known_failures() {
        assert_eq!(
            ContractError::from_message("MetaMask Tx Signature: User rejected the request."),
            ContractError::UserRejected
        );
        assert_eq!(
            ContractError::from_message("insufficient funds for gas * price + value"),
            ContractError::InsufficientFunds
        );
        assert!(matches!(
            ContractError::from_message("execution reverted: VaultLocked"),
            ContractError::Other(_)
        ));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(handle_contract_error("user rejected"), "Transaction rejected by user");
        assert_eq!(
            handle_contract_error("Insufficient funds"),
            "Insufficient funds for transaction"
        );
        assert_eq!(handle_contract_error("execution reverted"), "execution reverted");
        assert_eq!(handle_contract_error(""), "Transaction failed");
    }
}
