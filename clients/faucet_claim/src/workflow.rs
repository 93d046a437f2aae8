use std::cell::{Cell, RefCell};

use anchor_lang::solana_program::pubkey::Pubkey;
use tracing::{debug, error, info, warn};

use crate::config::ClaimConfig;
use crate::constants::{MSG_AD_BLOCKER_WARNING, MSG_PREPARING, MSG_WALLET_CONNECTED};
use crate::error::ClaimError;
use crate::event::Status;
use crate::instructions::*;
use crate::ports::{AdProbe, ClaimBackend, Ledger, UiPort, WalletProvider};
use crate::state::{ClaimRequest, ClaimResult, WalletSession};

/// Where the workflow stands between two triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Disconnected,
    /// Wallet connected, ready to claim (also the idle state after a claim)
    Connected,
    Claiming,
}

/// What a single trigger ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A claim was already in flight, nothing happened
    Busy,
    Connected(Pubkey),
    ConnectFailed(ClaimError),
    /// Stopped by a precondition before any network or wallet call
    Rejected(ClaimError),
    Claimed(ClaimResult),
    Failed(ClaimError),
}

/// Restores the action control when a claim attempt settles, on every path
struct ClaimGuard<'a, U: UiPort> {
    ui: &'a U,
    phase: &'a Cell<Phase>,
    ad_blocker_detected: &'a Cell<bool>,
}

impl<U: UiPort> Drop for ClaimGuard<'_, U> {
    fn drop(&mut self) {
        if self.phase.get() == Phase::Claiming {
            self.phase.set(Phase::Connected);
        }
        // The probe may have fired mid-claim; a blocked control stays blocked.
        if !self.ad_blocker_detected.get() {
            self.ui.set_busy(false);
        }
    }
}

/**
 * Claim workflow
 *
 * Drives the single action control through
 * Disconnected -> Connected -> Claiming -> Connected.
 *
 * Each trigger either connects the wallet or runs one claim attempt:
 * 1. Preconditions (address present, no ad blocker)
 * 2. Recipient ATA lookup, creation through the wallet when missing
 * 3. Backend claim call
 *
 * Ownership: the workflow owns every port and the wallet session. It is
 * meant to live behind an `Rc` on a single-threaded executor; interior
 * mutability is `Cell`/`RefCell` only.
 */
pub struct ClaimWorkflow<W, L, B, U> {
    config: ClaimConfig,
    wallet: W,
    ledger: L,
    backend: B,
    ui: U,
    session: RefCell<Option<WalletSession>>,
    phase: Cell<Phase>,
    ad_blocker_detected: Cell<bool>,
}

impl<W, L, B, U> ClaimWorkflow<W, L, B, U>
where
    W: WalletProvider,
    L: Ledger,
    B: ClaimBackend,
    U: UiPort,
{
    pub fn new(config: ClaimConfig, wallet: W, ledger: L, backend: B, ui: U) -> Self {
        Self {
            config,
            wallet,
            ledger,
            backend,
            ui,
            session: RefCell::new(None),
            phase: Cell::new(Phase::Disconnected),
            ad_blocker_detected: Cell::new(false),
        }
    }

    pub fn config(&self) -> &ClaimConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn session(&self) -> Option<WalletSession> {
        *self.session.borrow()
    }

    pub fn ad_blocker_detected(&self) -> bool {
        self.ad_blocker_detected.get()
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Handles one activation of the action control
    pub async fn trigger(&self) -> TriggerOutcome {
        if self.phase.get() == Phase::Claiming {
            debug!("claim already in flight, ignoring trigger");
            return TriggerOutcome::Busy;
        }

        if !self.has_live_session() {
            return self.connect().await;
        }
        self.claim().await
    }

    /**
     * Runs the one-shot ad-blocker probe
     *
     * On a blocked request the control is disabled for good and every later
     * claim is rejected before any call is made. No retry.
     */
    pub async fn run_ad_probe<P: AdProbe>(&self, probe: &P) -> bool {
        let blocked = handle_probe_ad_blocker(probe, &self.config.ad_probe_url).await;
        if blocked {
            self.ad_blocker_detected.set(true);
            self.ui.block_claims();
            self.ui.report(&Status::error(MSG_AD_BLOCKER_WARNING));
        }
        blocked
    }

    fn has_live_session(&self) -> bool {
        let mut session = self.session.borrow_mut();
        if session.is_some() && !self.wallet.is_connected() {
            info!("wallet reports disconnected, dropping session");
            *session = None;
            self.phase.set(Phase::Disconnected);
        }
        session.is_some()
    }

    async fn connect(&self) -> TriggerOutcome {
        match handle_connect_wallet(&self.wallet).await {
            Ok(session) => {
                let address = session.address;
                *self.session.borrow_mut() = Some(session);
                self.phase.set(Phase::Connected);
                self.ui.show_connected(&address.to_string());
                self.ui.report(&Status::success(MSG_WALLET_CONNECTED));
                TriggerOutcome::Connected(address)
            }
            Err(e) => {
                error!(error = ?e, "wallet connection failed");
                self.ui.report(&Status::error(e.to_string()));
                TriggerOutcome::ConnectFailed(e)
            }
        }
    }

    fn check_preconditions(&self, address: &str) -> Result<(), ClaimError> {
        if address.trim().is_empty() {
            return Err(ClaimError::EmptyAddress);
        }
        if self.ad_blocker_detected.get() {
            return Err(ClaimError::AdBlockerDetected);
        }
        Ok(())
    }

    async fn claim(&self) -> TriggerOutcome {
        let address = self.ui.recipient_address();
        if let Err(e) = self.check_preconditions(&address) {
            warn!(error = %e, "claim rejected");
            self.ui.report(&Status::error(e.to_string()));
            return TriggerOutcome::Rejected(e);
        }

        self.phase.set(Phase::Claiming);
        self.ui.set_busy(true);
        let _guard = ClaimGuard {
            ui: &self.ui,
            phase: &self.phase,
            ad_blocker_detected: &self.ad_blocker_detected,
        };
        self.ui.report(&Status::info(MSG_PREPARING));

        match self.run_claim(&address).await {
            Ok(result) => {
                let link = self.config.explorer_link(&result.transaction_signature);
                self.ui
                    .report(&Status::success(result.message.clone()).with_explorer_link(link));
                TriggerOutcome::Claimed(result)
            }
            Err(e) => {
                error!(error = ?e, kind = ?e.kind(), "claim failed");
                self.ui.report(&Status::error(e.to_string()));
                TriggerOutcome::Failed(e)
            }
        }
    }

    async fn run_claim(&self, address: &str) -> Result<ClaimResult, ClaimError> {
        let request = ClaimRequest::parse(address, self.config.token_mint()?)?;

        let account =
            handle_prepare_token_account(&self.ledger, &self.wallet, &self.ui, &request).await?;
        debug!(ata = %account.address, "token account ready");

        handle_request_claim(&self.backend, &self.config.claim_endpoint, &request).await
    }
}
