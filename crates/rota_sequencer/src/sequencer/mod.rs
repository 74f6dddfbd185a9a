pub mod nearest_neighbor;
mod ranked_sequence;
pub mod sequence_error;
#[allow(clippy::module_inception)]
pub mod sequencer;
mod sequencing_problem;

pub use nearest_neighbor::sequence_locally;
pub use sequence_error::SequenceError;
pub use sequencer::{Sequencer, SequencerConfig};
