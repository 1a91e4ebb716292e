//! RngSeed — доменный seed для RNG стола.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32])
//!   - делать детерминированное hash-reseeding на каждый раунд:
//!         new = H(domain || old || round_id)
//!   - создавать DeterministicRng из seed

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::RoundId;
use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed конкретного раунда: одинаковый базовый seed и номер раунда
    /// всегда дают одну и ту же колоду.
    pub fn derive(&self, round_id: RoundId) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"HOLDEM_TABLE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(round_id.to_le_bytes());

        Self {
            bytes: hasher.finalize().into(),
        }
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
