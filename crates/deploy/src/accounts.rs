//! Named accounts.

use std::collections::BTreeMap;

use alloy_primitives::Address;
use alloy_signer_local::{
    PrivateKeySigner,
    coins_bip39::{English, Mnemonic},
};
use coins_bip32::{
    ecdsa::SigningKey,
    prelude::{Parent, XPriv},
};
use derive_more::{Display, Error};
use harness_config::{AccountsSource, ConfigError, read_private_keys};
use harness_traits::Provider;
use harness_types::{ProviderError, methods::ETH_ACCOUNTS};
use serde::Serialize;

/// Parent of the derived accounts; account `i` is its child `i`.
const ACCOUNTS_DERIVATION_PATH: &str = "m/44'/60'/0'/0";

/// Error raised while resolving accounts.
#[derive(Debug, Display, Error)]
pub enum AccountsError {
    /// The mnemonic is not a valid BIP-39 phrase.
    #[display("invalid mnemonic: {reason}")]
    InvalidMnemonic {
        /// Parser failure.
        reason: String,
    },
    /// An account could not be derived from the mnemonic.
    #[display("failed to derive account {index} from mnemonic: {reason}")]
    Mnemonic {
        /// Derivation index.
        index: u32,
        /// Derivation failure.
        reason: String,
    },
    /// A configured private key is malformed.
    #[display("invalid private key #{index}: {reason}")]
    PrivateKey {
        /// Position of the key in the key list.
        index: usize,
        /// Parser failure.
        reason: String,
    },
    /// The private key file could not be read.
    #[display("failed to load private keys")]
    KeyFile {
        /// Read failure.
        source: ConfigError,
    },
    /// The node could not list its accounts.
    #[display("failed to fetch node accounts")]
    Provider {
        /// Provider failure.
        source: ProviderError,
    },
    /// A named account points past the available accounts.
    #[display("named account `{name}` uses index {index} but only {available} accounts exist")]
    IndexOutOfRange {
        /// Account name.
        name: String,
        /// Configured index.
        index: u32,
        /// Number of available accounts.
        available: usize,
    },
}

/// Addresses of the accounts described by `source`.
///
/// Mnemonic accounts use the derivation path `m/44'/60'/0'/0/i`; key files
/// are read on each call; remote accounts are listed by the node through
/// `eth_accounts`.
pub async fn account_addresses(
    source: &AccountsSource,
    provider: &dyn Provider,
) -> Result<Vec<Address>, AccountsError> {
    match source {
        AccountsSource::Mnemonic { phrase, count } => mnemonic_addresses(phrase, *count),
        AccountsSource::PrivateKeysFile(path) => {
            let keys = read_private_keys(path).map_err(|source| AccountsError::KeyFile { source })?;
            keys.iter()
                .enumerate()
                .map(|(index, key)| {
                    let key = key.strip_prefix("0x").unwrap_or(key);
                    key.parse::<PrivateKeySigner>()
                        .map(|signer| signer.address())
                        .map_err(|e| AccountsError::PrivateKey { index, reason: e.to_string() })
                })
                .collect()
        }
        AccountsSource::Remote => {
            let accounts = provider
                .send(ETH_ACCOUNTS, vec![])
                .await
                .map_err(|source| AccountsError::Provider { source })?;
            serde_json::from_value(accounts).map_err(|e| AccountsError::Provider {
                source: ProviderError::decode(e),
            })
        }
    }
}

/// Derive `count` addresses from `phrase`.
///
/// The seed is stretched once; each account is a child of the shared parent.
fn mnemonic_addresses(phrase: &str, count: u32) -> Result<Vec<Address>, AccountsError> {
    let parent = Mnemonic::<English>::new_from_phrase(phrase)
        .and_then(|mnemonic| mnemonic.master_key(None))
        .map_err(|e| AccountsError::InvalidMnemonic { reason: e.to_string() })?
        .derive_path(ACCOUNTS_DERIVATION_PATH)
        .map_err(|e| AccountsError::Mnemonic { index: 0, reason: e.to_string() })?;

    (0..count)
        .map(|index| {
            parent
                .derive_child(index)
                .map_err(|e| e.to_string())
                .and_then(|child: XPriv| {
                    let key: &SigningKey = child.as_ref();
                    PrivateKeySigner::from_slice(&key.to_bytes()).map_err(|e| e.to_string())
                })
                .map(|signer| signer.address())
                .map_err(|reason| AccountsError::Mnemonic { index, reason })
        })
        .collect()
}

/// Account names resolved to addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NamedAccounts(BTreeMap<String, Address>);

impl NamedAccounts {
    /// Resolve each `name -> index` entry of `named` against `addresses`.
    pub fn resolve(
        named: &BTreeMap<String, u32>,
        addresses: &[Address],
    ) -> Result<Self, AccountsError> {
        named
            .iter()
            .map(|(name, &index)| {
                addresses
                    .get(index as usize)
                    .map(|address| (name.clone(), *address))
                    .ok_or_else(|| AccountsError::IndexOutOfRange {
                        name: name.clone(),
                        index,
                        available: addresses.len(),
                    })
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }

    /// Address of the account called `name`.
    pub fn get(&self, name: &str) -> Option<Address> {
        self.0.get(name).copied()
    }

    /// Iterate over `(name, address)` pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Address)> {
        self.0.iter().map(|(name, address)| (name.as_str(), *address))
    }

    /// Number of named accounts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no account is named.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Address)> for NamedAccounts {
    fn from_iter<I: IntoIterator<Item = (String, Address)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
