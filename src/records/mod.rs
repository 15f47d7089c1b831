/// Reading SAM text records.
pub mod sam;
