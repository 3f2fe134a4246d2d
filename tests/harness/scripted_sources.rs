use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use async_trait::async_trait;
use ltcwatch::domain::{Usd, WalletSnapshot};
use ltcwatch::error::FetchError;
use ltcwatch::port::{PriceSource, WalletSource};

/// One scripted explorer response.
#[derive(Debug, Clone)]
pub enum WalletStep {
    Snapshot(WalletSnapshot),
    Fail,
}

/// Deterministic test double for the block explorer.
///
/// Steps are consumed in order; the last step repeats forever.
#[derive(Clone, Default)]
pub struct ScriptedWallet {
    steps: Arc<Mutex<VecDeque<WalletStep>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedWallet {
    pub fn new(steps: impl IntoIterator<Item = WalletStep>) -> Self {
        Self {
            steps: Arc::new(Mutex::new(steps.into_iter().collect())),
            calls: Arc::default(),
        }
    }

    pub fn always(snapshot: WalletSnapshot) -> Self {
        Self::new([WalletStep::Snapshot(snapshot)])
    }

    pub fn failing() -> Self {
        Self::new([WalletStep::Fail])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletSource for ScriptedWallet {
    async fn fetch_wallet_info(&self, _address: &str) -> Result<WalletSnapshot, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = {
            let mut steps = self.steps.lock();
            if steps.len() > 1 {
                steps.pop_front()
            } else {
                steps.front().cloned()
            }
        };
        match step {
            Some(WalletStep::Snapshot(snapshot)) => Ok(snapshot),
            Some(WalletStep::Fail) | None => Err(FetchError::Parse("scripted failure".into())),
        }
    }
}

/// Price source returning a fixed quote, or failing when constructed with `failing`.
#[derive(Clone)]
pub struct FixedPrice {
    quote: Option<Usd>,
    calls: Arc<AtomicUsize>,
}

impl FixedPrice {
    pub fn new(quote: Usd) -> Self {
        Self {
            quote: Some(quote),
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            quote: None,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSource for FixedPrice {
    async fn fetch_quote(&self) -> Result<Usd, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.quote
            .ok_or_else(|| FetchError::Parse("scripted price failure".into()))
    }
}
