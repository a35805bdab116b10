//! Static mapping from chain identifier to the ordered record keys that can
//! hold its address.
//!
//! The registry's record schema grew in layers: the multi-token `token.EVM.*`
//! keys are newest, the chain-qualified variant came before them, and the
//! single-symbol `crypto.*` keys are the legacy convention. A domain may be
//! populated under any of these, so each chain walks its keys most-specific
//! first and the first non-empty value wins.

use crate::lookup::RecordSet;

pub struct ChainAddressRule {
    pub chain_id: &'static str,
    /// Candidate record keys, newest convention first.
    pub record_keys: [&'static str; 3],
}

impl ChainAddressRule {
    /// First key present in `records` with a non-empty value, in rule order.
    pub fn extract<'a>(&self, records: &'a RecordSet) -> Option<&'a str> {
        self.record_keys
            .iter()
            .filter_map(|key| records.get(*key))
            .map(String::as_str)
            .find(|value| !value.is_empty())
    }
}

#[rustfmt::skip]
pub const CHAIN_ADDRESS_RULES: &[ChainAddressRule] = &[
    // Ethereum mainnet and Base share the ETH record family.
    ChainAddressRule { chain_id: "eip155:1",         record_keys: ["token.EVM.ETH.address",   "token.EVM.ETH.ETH.address",     "crypto.ETH.address"] },
    ChainAddressRule { chain_id: "eip155:137",       record_keys: ["token.EVM.MATIC.address", "token.EVM.MATIC.MATIC.address", "crypto.MATIC.version.MATIC.address"] },
    ChainAddressRule { chain_id: "eip155:43114",     record_keys: ["token.EVM.AVAX.address",  "token.EVM.AVAX.AVAX.address",   "crypto.AVAX.address"] },
    ChainAddressRule { chain_id: "eip155:56",        record_keys: ["token.EVM.BSC.address",   "token.EVM.BSC.BNB.address",     "crypto.BNB.version.BEP20.address"] },
    ChainAddressRule { chain_id: "eip155:250",       record_keys: ["token.EVM.FTM.address",   "token.EVM.FTM.FTM.address",     "crypto.FTM.version.OPERA.address"] },
    ChainAddressRule { chain_id: "eip155:8453",      record_keys: ["token.EVM.ETH.address",   "token.EVM.ETH.ETH.address",     "crypto.ETH.address"] },
    ChainAddressRule { chain_id: "eip155:100009",    record_keys: ["token.EVM.VET.address",   "token.EVM.VET.VET.address",     "crypto.VET.address"] },
    ChainAddressRule { chain_id: "eip155:42220",     record_keys: ["token.EVM.CELO.address",  "token.EVM.CELO.CELO.address",   "crypto.CELO.address"] },
    ChainAddressRule { chain_id: "eip155:66",        record_keys: ["token.EVM.OKTC.address",  "token.EVM.OKTC.OKT.address",    "crypto.OKT.address"] },
    ChainAddressRule { chain_id: "eip155:14",        record_keys: ["token.EVM.FLR.address",   "token.EVM.FLR.FLR.address",     "crypto.FLR.address"] },
    ChainAddressRule { chain_id: "eip155:7332",      record_keys: ["token.EVM.ZEN.address",   "token.EVM.ZEN.ZEN.address",     "crypto.ZEN.address"] },
    ChainAddressRule { chain_id: "eip155:4689",      record_keys: ["token.EVM.IOTX.address",  "token.EVM.IOTX.IOTX.address",   "crypto.IOTX.address"] },
    ChainAddressRule { chain_id: "eip155:888",       record_keys: ["token.EVM.WAN.address",   "token.EVM.WAN.WAN.address",     "crypto.WAN.address"] },
    ChainAddressRule { chain_id: "eip155:196",       record_keys: ["token.EVM.OKB.address",   "token.EVM.OKB.OKB.address",     "crypto.OKB.address"] },
    ChainAddressRule { chain_id: "eip155:122",       record_keys: ["token.EVM.FUSE.address",  "token.EVM.FUSE.FUSE.address",   "crypto.FUSE.version.FUSE.address"] },
    ChainAddressRule { chain_id: "eip155:106",       record_keys: ["token.EVM.VLX.address",   "token.EVM.VLX.VLX.address",     "crypto.VLX.address"] },
    ChainAddressRule { chain_id: "eip155:11",        record_keys: ["token.EVM.META.address",  "token.EVM.META.META.address",   "crypto.META.address"] },
    ChainAddressRule { chain_id: "eip155:1030",      record_keys: ["token.EVM.CFX.address",   "token.EVM.CFX.CFX.address",     "crypto.CFX.address"] },
    ChainAddressRule { chain_id: "eip155:30",        record_keys: ["token.EVM.RSK.address",   "token.EVM.RSK.RSK.address",     "crypto.RSK.address"] },
    ChainAddressRule { chain_id: "eip155:20",        record_keys: ["token.EVM.ESC.address",   "token.EVM.ESC.ELA.address",     "crypto.ELA.version.ESC.address"] },
    ChainAddressRule { chain_id: "eip155:8",         record_keys: ["token.EVM.UBQ.address",   "token.EVM.UBQ.UBQ.address",     "crypto.UBQ.address"] },
    ChainAddressRule { chain_id: "eip155:4488",      record_keys: ["token.EVM.HYDRA.address", "token.EVM.HYDRA.HYDRA.address", "crypto.HYDRA.address"] },
    ChainAddressRule { chain_id: "eip155:192837465", record_keys: ["token.EVM.GTH.address",   "token.EVM.GTH.GTH.address",     "crypto.GTH.address"] },
];

pub fn rule_for(chain_id: &str) -> Option<&'static ChainAddressRule> {
    CHAIN_ADDRESS_RULES
        .iter()
        .find(|rule| rule.chain_id == chain_id)
}

/// Convenience over `rule_for` + `extract`. `None` covers both an unknown
/// chain and a record set holding none of the chain's keys.
pub fn resolve_address<'a>(chain_id: &str, records: &'a RecordSet) -> Option<&'a str> {
    rule_for(chain_id)?.extract(records)
}
