/*!
 * Faucet Claim Client
 *
 * Client side of a token faucet: connects a browser wallet, makes sure the
 * recipient's associated token account exists on Solana, then asks the
 * faucet backend to transfer the tokens.
 *
 * Key Features:
 * - Wallet connection through an injected provider (Phantom, Solflare)
 * - Deterministic ATA derivation for the faucet mint
 * - Wallet-signed ATA creation, confirmed before the backend is called
 * - Backend replies decoded into a success message or an error text
 * - One-shot ad-blocker probe that disables claiming
 *
 * Architecture:
 * - `ports`: traits for wallet, ledger, backend, probe and UI
 * - `ledger::RpcLedger`: JSON-RPC ledger client over a pluggable transport
 * - `instructions`: one handler per workflow step
 * - `workflow::ClaimWorkflow`: the state machine driving a single control
 * - `web` (feature `web`, wasm32): browser implementations of the ports
 *
 * Workflow:
 * 1. First trigger connects the wallet and fills the address field
 * 2. Next trigger checks preconditions and disables the control
 * 3. ATA is looked up and, when missing, created and confirmed
 * 4. Backend `POST /claim` transfers the tokens
 * 5. Control is re-enabled whatever the outcome
 */

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod ledger;
pub mod ports;
pub mod state;
pub mod utils;
pub mod workflow;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

#[cfg(test)]
pub mod test;

pub use config::ClaimConfig;
pub use error::{ClaimError, ErrorKind};
pub use event::{Status, StatusKind};
pub use ledger::RpcLedger;
pub use workflow::{ClaimWorkflow, Phase, TriggerOutcome};

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
