//! Registry-wide constants.

use near_sdk::NearToken;

/// Basis points denominator (10,000 = 100%)
pub const BASIS_POINTS: u16 = 10_000;

/// Maximum platform fee in basis points; the bound is inclusive.
pub const MAX_FEE_BPS: u16 = BASIS_POINTS;

/// Maximum items per `create_batch` call. Keeps a worst-case batch well
/// inside the per-transaction gas limit.
pub const MAX_BATCH_SIZE: usize = 100;

/// Default / maximum page sizes for enumeration views.
pub const DEFAULT_VIEW_LIMIT: u64 = 50;
pub const MAX_VIEW_LIMIT: u64 = 200;

// Gas constants (TGas)
pub const GAS_FT_TRANSFER: u64 = 30;
pub const GAS_WITHDRAW_CALLBACK: u64 = 10;

/// No deposit / 1 yocto
pub const NO_DEPOSIT: NearToken = NearToken::from_yoctonear(0);
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
