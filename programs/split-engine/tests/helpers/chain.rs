//! In-memory `SplitChain` that records every write in order

use std::{
    collections::HashSet,
    sync::{Mutex, MutexGuard},
};

use alloy_primitives::{keccak256, Address, TxHash, U256};
use async_trait::async_trait;
use split_engine::{ChainError, Receipt, Recipient, SplitChain};

/// Calls observed by the mock (chain id reads are not recorded)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SwitchChain(u64),
    RegisterSplit(Vec<Recipient>),
    Tip(Address, U256),
    Transfer(Address, U256),
    WaitForReceipt(TxHash),
    PredictForwarder(Address),
    IsDeployed(Address),
    DeployForwarder(Address),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum SwitchBehavior {
    #[default]
    Follow,
    Ignore,
    Reject,
}

#[derive(Debug, Default)]
struct MockState {
    chain_id: u64,
    next_tx: u64,
    block_number: u64,
    calls: Vec<Call>,
    reverted: HashSet<TxHash>,
    deployed: HashSet<Address>,
    registered: Option<Vec<Recipient>>,
}

#[derive(Debug, Default)]
pub struct MockChain {
    state: Mutex<MockState>,
    switch: Mutex<SwitchBehavior>,
    revert_registration: bool,
    revert_tips: bool,
    revert_transfers_to: Option<Address>,
    insufficient_funds: bool,
}

impl MockChain {
    pub fn new(chain_id: u64) -> Self {
        Self {
            state: Mutex::new(MockState {
                chain_id,
                block_number: 100,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn reverting_registration(mut self) -> Self {
        self.revert_registration = true;
        self
    }

    pub fn reverting_tips(mut self) -> Self {
        self.revert_tips = true;
        self
    }

    pub fn reverting_transfers_to(mut self, to: Address) -> Self {
        self.revert_transfers_to = Some(to);
        self
    }

    pub fn without_funds(mut self) -> Self {
        self.insufficient_funds = true;
        self
    }

    /// Wallet accepts switch requests but stays where it is
    pub fn stuck_on_network(self) -> Self {
        *self.switch.lock().unwrap() = SwitchBehavior::Ignore;
        self
    }

    /// Wallet refuses to switch
    pub fn rejecting_switch(self) -> Self {
        *self.switch.lock().unwrap() = SwitchBehavior::Reject;
        self
    }

    pub fn with_deployed(self, address: Address) -> Self {
        self.state().deployed.insert(address);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    /// Calls that change chain state or wallet network
    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| {
                matches!(
                    c,
                    Call::SwitchChain(_)
                        | Call::RegisterSplit(_)
                        | Call::Tip(..)
                        | Call::Transfer(..)
                        | Call::DeployForwarder(_)
                )
            })
            .collect()
    }

    pub fn current_chain_id(&self) -> u64 {
        self.state().chain_id
    }

    pub fn registered(&self) -> Option<Vec<Recipient>> {
        self.state().registered.clone()
    }

    /// Address `predict_forwarder` reports for `owner`
    pub fn forwarder_for(owner: Address) -> Address {
        Address::from_slice(&keccak256(owner.as_slice())[12..])
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    fn submit(&self, call: Call, revert: bool) -> TxHash {
        let mut state = self.state();
        state.next_tx += 1;
        let tx_hash = super::tx(state.next_tx);
        if revert {
            state.reverted.insert(tx_hash);
        }
        state.calls.push(call);
        tx_hash
    }
}

#[async_trait]
impl SplitChain for MockChain {
    async fn chain_id(&self) -> Result<u64, ChainError> {
        Ok(self.state().chain_id)
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), ChainError> {
        let behavior = *self.switch.lock().unwrap();
        let mut state = self.state();
        state.calls.push(Call::SwitchChain(chain_id));
        match behavior {
            SwitchBehavior::Follow => {
                state.chain_id = chain_id;
                Ok(())
            }
            SwitchBehavior::Ignore => Ok(()),
            SwitchBehavior::Reject => {
                Err(ChainError::Rejected("user rejected network switch".into()))
            }
        }
    }

    async fn register_split(&self, recipients: &[Recipient]) -> Result<TxHash, ChainError> {
        if !self.revert_registration {
            self.state().registered = Some(recipients.to_vec());
        }
        Ok(self.submit(Call::RegisterSplit(recipients.to_vec()), self.revert_registration))
    }

    async fn tip(&self, owner: Address, value: U256) -> Result<TxHash, ChainError> {
        if self.insufficient_funds {
            return Err(ChainError::InsufficientFunds);
        }
        Ok(self.submit(Call::Tip(owner, value), self.revert_tips))
    }

    async fn transfer(&self, to: Address, value: U256) -> Result<TxHash, ChainError> {
        if self.insufficient_funds {
            return Err(ChainError::InsufficientFunds);
        }
        let revert = self.revert_transfers_to == Some(to);
        Ok(self.submit(Call::Transfer(to, value), revert))
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<Receipt, ChainError> {
        let mut state = self.state();
        state.calls.push(Call::WaitForReceipt(tx_hash));
        state.block_number += 1;
        Ok(Receipt {
            tx_hash,
            block_number: state.block_number,
            success: !state.reverted.contains(&tx_hash),
        })
    }

    async fn predict_forwarder(&self, owner: Address) -> Result<Address, ChainError> {
        self.state().calls.push(Call::PredictForwarder(owner));
        Ok(Self::forwarder_for(owner))
    }

    async fn is_deployed(&self, address: Address) -> Result<bool, ChainError> {
        let mut state = self.state();
        state.calls.push(Call::IsDeployed(address));
        Ok(state.deployed.contains(&address))
    }

    async fn deploy_forwarder(&self, owner: Address) -> Result<TxHash, ChainError> {
        let tx_hash = self.submit(Call::DeployForwarder(owner), false);
        self.state().deployed.insert(Self::forwarder_for(owner));
        Ok(tx_hash)
    }
}
