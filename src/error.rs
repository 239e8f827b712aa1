#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Accessor index out of range: 0..=i32::MAX ∌ {index}")]
    AccessorIndexOutOfRange { index: usize },
}
