use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkError {
    #[error("no qualifying nonce within {attempts} attempts at difficulty {difficulty}")]
    Exhausted { attempts: u64, difficulty: u32 },
}
