use anchor_lang::prelude::*;

use crate::errors::MatchdayError;

pub mod finalize_lms_round;
pub mod settle_fixture_scores;
pub mod settle_lms_fixture;
pub mod settle_race_fixture;
pub mod settle_table_predictions;

pub use finalize_lms_round::*;
pub use settle_fixture_scores::*;
pub use settle_lms_fixture::*;
pub use settle_race_fixture::*;
pub use settle_table_predictions::*;

/// Deserialize a program account streamed through `remaining_accounts`.
/// Returns `None` for anything that is not a live account of the expected
/// type, so a bad element skips one pair instead of aborting the pass.
pub(crate) fn try_load<T: AccountDeserialize>(info: &AccountInfo) -> Option<T> {
    if info.owner != &crate::ID {
        return None;
    }
    let data = info.try_borrow_data().ok()?;
    let mut slice: &[u8] = &data;
    T::try_deserialize(&mut slice).ok()
}

/// Serialize a mutated account back into its buffer. Allocations are sized
/// by `InitSpace`, so the payload always fits; the guard is load-bearing
/// only if a non-max layout ever sneaks in.
pub(crate) fn write_back<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut buf: Vec<u8> = Vec::with_capacity(data.len());
    value.try_serialize(&mut buf)?;
    require!(
        buf.len() <= data.len(),
        MatchdayError::SettlementAccountTooSmall
    );
    data[..buf.len()].copy_from_slice(&buf);
    Ok(())
}
