use cosmwasm_std::{Addr, QuerierWrapper};
use nft_drop::helpers::NftDropContract;

use crate::error::ClientError;

/// Whitelist gate in front of the mint form. Starts out `Unknown`, settles
/// exactly once from the status read, and never changes afterwards; there
/// is no polling and no event subscription.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gate {
    #[default]
    Unknown,
    NotWhitelisted,
    Whitelisted,
}

impl Gate {
    /// Settles the gate from a whitelist-status read. A settled gate is
    /// returned unchanged.
    pub fn resolve(self, whitelisted: bool) -> Gate {
        match self {
            Gate::Unknown if whitelisted => Gate::Whitelisted,
            Gate::Unknown => Gate::NotWhitelisted,
            settled => settled,
        }
    }

    /// One whitelist-status query against the contract, then `resolve`.
    pub fn resolve_from_chain(
        self,
        querier: &QuerierWrapper,
        contract: &NftDropContract,
        account: &Addr,
    ) -> Result<Gate, ClientError> {
        if self != Gate::Unknown {
            return Ok(self);
        }
        let whitelisted = contract.whitelisted(querier, account.to_string())?;
        Ok(self.resolve(whitelisted))
    }

    /// Whether the submission controls are enabled.
    pub fn is_open(self) -> bool {
        self == Gate::Whitelisted
    }

    /// Message shown next to the disabled controls.
    pub fn notice(self) -> Option<&'static str> {
        match self {
            Gate::NotWhitelisted => {
                Some("You are not whitelisted. Contact the owner to get whitelisted.")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_once_from_status_read() {
        assert_eq!(Gate::Unknown.resolve(true), Gate::Whitelisted);
        assert_eq!(Gate::Unknown.resolve(false), Gate::NotWhitelisted);
    }

    #[test]
    fn settled_gate_never_changes() {
        assert_eq!(Gate::Whitelisted.resolve(false), Gate::Whitelisted);
        assert_eq!(Gate::NotWhitelisted.resolve(true), Gate::NotWhitelisted);
    }

    #[test]
    fn controls_follow_gate_state() {
        assert!(!Gate::Unknown.is_open());
        assert!(!Gate::NotWhitelisted.is_open());
        assert!(Gate::Whitelisted.is_open());
    }

    #[test]
    fn notice_only_when_not_whitelisted() {
        assert!(Gate::Unknown.notice().is_none());
        assert!(Gate::Whitelisted.notice().is_none());
        assert!(Gate::NotWhitelisted.notice().unwrap().contains("whitelisted"));
    }
}
